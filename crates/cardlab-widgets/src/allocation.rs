#![forbid(unsafe_code)]

//! Fixed-total point-allocation sub-widget.
//!
//! The participant distributes exactly `total_points` across the event
//! cards. Cards can be excluded by canonical index (the incident outcome
//! itself is typically not allocatable). Submission is refused while the
//! sum differs from the target, with state preserved.

use serde::{Deserialize, Serialize};
use web_time::Instant;

use cardlab_core::card::{Card, CardId};
use cardlab_core::clock::InteractionClock;

use crate::error::{RejectedSubmit, SubmitError};

/// One card's share of the allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub id: CardId,
    pub text: String,
    pub points: u32,
}

/// The result record handed back on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// Per-card points, in canonical order of the included cards.
    pub allocation: Vec<AllocationEntry>,
    /// Milliseconds from initialization to submission.
    pub reaction_time_ms: u64,
}

/// Point distribution across cards with a fixed required total.
#[derive(Debug)]
pub struct PointAllocation {
    cards: Vec<Card>,
    /// Points per card, parallel to `cards`.
    points: Vec<u32>,
    target: u32,
    clock: InteractionClock,
}

impl PointAllocation {
    /// Initialize from the caller's ordered text list, dropping any card
    /// whose canonical index appears in `exclude`.
    pub fn new<I, S>(texts: I, exclude: &[usize], target: u32, now: Instant) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cards: Vec<Card> = Card::from_texts(texts)
            .into_iter()
            .filter(|c| !exclude.contains(&c.canonical_index))
            .collect();
        let points = vec![0; cards.len()];
        Self {
            cards,
            points,
            target,
            clock: InteractionClock::start(now),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Points currently assigned to a card.
    #[must_use]
    pub fn points(&self, card: CardId) -> Option<u32> {
        self.index_of(card).map(|idx| self.points[idx])
    }

    /// Sum of all assigned points.
    ///
    /// Widened to `u64` so per-card values near `u32::MAX` cannot wrap the
    /// sum and slip past the balance gate.
    #[must_use]
    pub fn allocated_total(&self) -> u64 {
        self.points.iter().map(|&p| u64::from(p)).sum()
    }

    /// Whether the allocation currently balances to the target.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.allocated_total() == u64::from(self.target)
    }

    fn index_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card)
    }

    /// Assign `points` to `card`, replacing its previous value. Unknown
    /// cards are ignored.
    pub fn set_points(&mut self, card: CardId, points: u32) -> bool {
        let Some(idx) = self.index_of(card) else {
            return false;
        };
        self.points[idx] = points;
        true
    }

    /// Confirm submission, consuming the allocation.
    ///
    /// Refused with the unbalanced condition while the sum differs from the
    /// target; the widget is handed back untouched so the participant can
    /// adjust and resubmit.
    pub fn submit(self, now: Instant) -> Result<AllocationOutcome, RejectedSubmit<Self>> {
        let total = self.allocated_total();
        if total != u64::from(self.target) {
            let target = self.target;
            return Err(RejectedSubmit {
                collector: self,
                error: SubmitError::UnbalancedAllocation { total, target },
            });
        }
        let allocation = self
            .cards
            .iter()
            .zip(&self.points)
            .map(|(card, &points)| AllocationEntry {
                id: card.id,
                text: card.text.clone(),
                points,
            })
            .collect();
        Ok(AllocationOutcome {
            allocation,
            reaction_time_ms: self.clock.elapsed_ms(now),
        })
    }
}
