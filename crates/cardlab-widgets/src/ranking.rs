#![forbid(unsafe_code)]

//! Sequential ranking collector (card sort).
//!
//! Maintains an ordered card list the participant rearranges by drag or
//! keyboard, then scores the submitted order against canonical order with
//! Kendall tau-a.
//!
//! # Invariants
//!
//! 1. The display order is always a permutation of the canonical id set:
//!    reorders and swaps never duplicate or drop a card.
//! 2. With shuffling enabled and ≥2 cards, the initial display order never
//!    equals the canonical order.
//! 3. `move_count` is monotonically non-decreasing and frozen at submission.
//!
//! Submission always succeeds for a non-empty collector: the list is always
//! in *some* valid order, so there is no incomplete state for ranking.

use rand::Rng;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use cardlab_core::card::{Card, CardId};
use cardlab_core::clock::InteractionClock;
use cardlab_core::drag::DragController;
use cardlab_core::event::{KeyCode, KeyEvent};
use cardlab_core::geometry::{BoardRect, ScreenPoint};
use cardlab_core::scoring::kendall_tau;
use cardlab_core::shuffle::shuffle;

/// Configuration for a ranking trial.
#[derive(Debug, Clone, Copy)]
pub struct RankingConfig {
    /// Shuffle the initial display order (non-identity). Disabling this
    /// waives the never-canonical guarantee; it exists for practice trials
    /// that present the true order.
    pub shuffle: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { shuffle: true }
    }
}

/// Neighbor-swap direction for the keyboard path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    Up,
    Down,
}

/// The result record handed back on submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingOutcome {
    /// Display order at submission.
    pub submitted_order: Vec<CardId>,
    /// Display order right after the initial shuffle.
    pub initial_order: Vec<CardId>,
    /// Kendall tau-a of the submitted order against canonical order.
    pub kendall_tau: f64,
    /// Number of effective moves during the trial.
    pub total_moves: u32,
    /// Milliseconds from initialization to submission.
    pub reaction_time_ms: u64,
}

/// Ordered card list with drag and keyboard reordering.
#[derive(Debug)]
pub struct RankingCollector {
    /// Current display order, reordered in place.
    cards: Vec<Card>,
    initial_order: Vec<CardId>,
    move_count: u32,
    clock: InteractionClock,
    drag: DragController,
    /// Drop slot the live gesture currently hovers over (0-based).
    hover_slot: Option<usize>,
}

impl RankingCollector {
    /// Initialize from the caller's ordered text list. Canonical rank of a
    /// card is its index in that list; the initial display order is the
    /// non-identity shuffle of it.
    pub fn new<I, S, R>(texts: I, config: RankingConfig, rng: &mut R, now: Instant) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: Rng + ?Sized,
    {
        let mut cards = Card::from_texts(texts);
        if config.shuffle {
            shuffle(&mut cards, rng);
        }
        let initial_order = cards.iter().map(|c| c.id).collect();
        Self {
            cards,
            initial_order,
            move_count: 0,
            clock: InteractionClock::start(now),
            drag: DragController::new(),
            hover_slot: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in current display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Ids in current display order.
    #[must_use]
    pub fn display_order(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn dragged_card(&self) -> Option<CardId> {
        self.drag.dragged_card()
    }

    fn index_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card)
    }

    /// Move `card` to a 1-based target position among the displayed cards.
    ///
    /// Positions past the end clamp to the last slot. Returns whether a
    /// reorder was applied; an unknown card or position 0 is ignored rather
    /// than an error. Counts as a move.
    pub fn reorder(&mut self, card: CardId, target_position: usize) -> bool {
        if target_position == 0 {
            return false;
        }
        let Some(current) = self.index_of(card) else {
            return false;
        };
        let target = (target_position - 1).min(self.cards.len() - 1);
        let moved = self.cards.remove(current);
        self.cards.insert(target, moved);
        self.move_count += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(?card, target, "reorder");
        true
    }

    /// Swap `card` with its immediate neighbor in `direction`.
    ///
    /// A no-op (not an error) at a list boundary; counts as a move only if
    /// a swap actually occurred.
    pub fn keyboard_swap(&mut self, card: CardId, direction: SwapDirection) -> bool {
        let Some(current) = self.index_of(card) else {
            return false;
        };
        let neighbor = match direction {
            SwapDirection::Up => {
                if current == 0 {
                    return false;
                }
                current - 1
            }
            SwapDirection::Down => {
                if current + 1 >= self.cards.len() {
                    return false;
                }
                current + 1
            }
        };
        self.cards.swap(current, neighbor);
        self.move_count += 1;
        true
    }

    /// Keyboard input adapter: Alt+Up / Alt+Down swap with the neighbor,
    /// Escape cancels a live drag. Feeds the same core operations as the
    /// pointer path.
    pub fn handle_key(&mut self, card: CardId, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up if key.alt() => self.keyboard_swap(card, SwapDirection::Up),
            KeyCode::Down if key.alt() => self.keyboard_swap(card, SwapDirection::Down),
            KeyCode::Escape => {
                self.cancel_drag();
                false
            }
            _ => false,
        }
    }

    /// Grab-start on `card` (pointer-down). Ignored while another gesture
    /// is live or for an unknown card.
    pub fn grab(&mut self, card: CardId) -> bool {
        if self.index_of(card).is_none() {
            return false;
        }
        if self.drag.grab(card) {
            self.hover_slot = self.index_of(card);
            true
        } else {
            false
        }
    }

    /// Forward a pointer move of the live gesture. Translates the raw
    /// position into a list slot within `list_bounds` and remembers it as
    /// the drop target. Returns the 1-based hover position.
    pub fn drag_to(&mut self, pos: ScreenPoint, list_bounds: BoardRect) -> Option<usize> {
        self.drag.motion(None)?;
        let slot = self.slot_at(pos.y, list_bounds);
        self.hover_slot = Some(slot);
        Some(slot + 1)
    }

    /// Release the live gesture, applying the hovered reorder.
    ///
    /// Counts as a move only if the card actually changed position.
    pub fn release(&mut self) -> bool {
        let Some(released) = self.drag.release() else {
            return false;
        };
        let Some(slot) = self.hover_slot.take() else {
            return false;
        };
        if self.index_of(released.card) == Some(slot) {
            return false;
        }
        self.reorder(released.card, slot + 1)
    }

    /// Discard a live gesture without applying a reorder.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
        self.hover_slot = None;
    }

    fn slot_at(&self, y: f64, bounds: BoardRect) -> usize {
        let n = self.cards.len();
        if n == 0 || bounds.height <= 0.0 {
            return 0;
        }
        let rel = (y - bounds.y) / bounds.height;
        if !rel.is_finite() || rel < 0.0 {
            return 0;
        }
        ((rel * n as f64) as usize).min(n - 1)
    }

    /// Confirm submission, consuming the collector.
    ///
    /// Always succeeds: any permutation is a valid submission, and an empty
    /// collector degenerates to a trivially-complete record.
    #[must_use]
    pub fn submit(self, now: Instant) -> RankingOutcome {
        let ranks: Vec<usize> = self.cards.iter().map(|c| c.canonical_index).collect();
        RankingOutcome {
            submitted_order: self.cards.iter().map(|c| c.id).collect(),
            initial_order: self.initial_order,
            kendall_tau: kendall_tau(&ranks),
            total_moves: self.move_count,
            reaction_time_ms: self.clock.elapsed_ms(now),
        }
    }
}
