#![forbid(unsafe_code)]

//! 2D spatial placement collector (card board).
//!
//! Each card is either unplaced (in a holding tray) or placed at a
//! normalized [0,1]² position on the board. Placement happens by pointer
//! drag (through the shared drag state machine) or by the keyboard snap,
//! which feeds the same placement operation and yields the same result
//! shape. Every interaction appends to the append-only log; submission
//! produces the final positions, a pairwise Euclidean distance matrix
//! computed in normalized space, and the log verbatim.
//!
//! # Invariants
//!
//! 1. Placement coordinates are always clamped into [0,1]×[0,1], for any
//!    raw pointer input; drag placement additionally keeps the card's full
//!    visual extent inside the board.
//! 2. The distance matrix is symmetric with a zero diagonal.
//! 3. The interaction log only grows during a trial and is frozen at
//!    submission.

use rand::Rng;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use cardlab_core::card::{Card, CardId};
use cardlab_core::clock::InteractionClock;
use cardlab_core::drag::DragController;
use cardlab_core::event::{KeyCode, KeyEvent};
use cardlab_core::geometry::{BoardDimensions, BoardRect, CardExtent, NormPoint, ScreenPoint};
use cardlab_core::log::{InteractionLog, LogAction, LogEntry};
use cardlab_core::scoring::distance_matrix;

use crate::error::{RejectedSubmit, SubmitError};
use crate::view::CardView;

/// Where cards start when the board appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartLayout {
    /// All cards unplaced, stacked in the holding tray.
    Stacked,
    /// Each card pre-placed at a pseudo-random position in [0.1, 0.9]².
    Scattered,
}

/// Configuration for a spatial placement trial.
#[derive(Debug, Clone, Copy)]
pub struct SpatialConfig {
    /// Refuse submission while any card remains unplaced.
    pub require_all_placed: bool,
    pub start_layout: StartLayout,
    /// Visual card size in screen pixels, for full-extent clamping.
    pub card_extent: CardExtent,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            require_all_placed: true,
            start_layout: StartLayout::Stacked,
            card_extent: CardExtent::default(),
        }
    }
}

/// A card's final position, in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: CardId,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// The result record handed back on confirmed submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialOutcome {
    /// Placed cards in canonical order.
    pub final_positions: Vec<Placement>,
    /// Euclidean distances between placements, in normalized space, indexed
    /// like `final_positions`. Symmetric with a zero diagonal.
    pub pairwise_distances: Vec<Vec<f64>>,
    /// The full interaction log, verbatim.
    pub interaction_log: Vec<LogEntry>,
    /// Board size in pixels at submission, for reference only; analysis
    /// uses the normalized coordinates.
    pub board_dimensions: BoardDimensions,
    pub start_layout: StartLayout,
}

/// Card board with drag and keyboard placement.
#[derive(Debug)]
pub struct SpatialCollector {
    cards: Vec<Card>,
    /// Placement per card, parallel to `cards` (canonical order).
    placements: Vec<Option<NormPoint>>,
    config: SpatialConfig,
    log: InteractionLog,
    clock: InteractionClock,
    drag: DragController,
}

impl SpatialCollector {
    /// Initialize from the caller's ordered text list.
    ///
    /// `Stacked` leaves every card unplaced; `Scattered` draws each card a
    /// uniform position in [0.1, 0.9]² and marks it placed.
    pub fn new<I, S, R>(texts: I, config: SpatialConfig, rng: &mut R, now: Instant) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: Rng + ?Sized,
    {
        let cards = Card::from_texts(texts);
        let placements = match config.start_layout {
            StartLayout::Stacked => vec![None; cards.len()],
            StartLayout::Scattered => cards
                .iter()
                .map(|_| {
                    Some(NormPoint {
                        x: rng.random::<f64>() * 0.8 + 0.1,
                        y: rng.random::<f64>() * 0.8 + 0.1,
                    })
                })
                .collect(),
        };
        Self {
            cards,
            placements,
            config,
            log: InteractionLog::new(),
            clock: InteractionClock::start(now),
            drag: DragController::new(),
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

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Current placement of a card, if it has been placed.
    #[must_use]
    pub fn placement(&self, card: CardId) -> Option<NormPoint> {
        self.index_of(card).and_then(|idx| self.placements[idx])
    }

    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placements.iter().filter(|p| p.is_some()).count()
    }

    #[must_use]
    pub fn unplaced_count(&self) -> usize {
        self.cards.len() - self.placed_count()
    }

    #[must_use]
    pub fn is_fully_placed(&self) -> bool {
        self.unplaced_count() == 0
    }

    /// The interaction log so far.
    #[must_use]
    pub fn log(&self) -> &InteractionLog {
        &self.log
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

    /// Place `card` from a raw pointer position.
    ///
    /// Starts the gesture on the first contact; while another card's gesture
    /// is live the input is ignored (exclusive capture). The raw position is
    /// mapped into normalized board coordinates, clamped so the card's full
    /// visual extent stays within the board. The first call of a gesture
    /// appends `drag_start` before its `drag_move`; every call appends a
    /// `drag_move`, updates the placement, marks the card placed, and asks
    /// the view to render it.
    pub fn place_by_drag(
        &mut self,
        view: &mut dyn CardView,
        card: CardId,
        raw: ScreenPoint,
        board: BoardRect,
        now: Instant,
    ) -> Option<NormPoint> {
        let idx = self.index_of(card)?;
        if !self.drag.is_dragging() {
            self.drag.grab(card);
        }
        let motion = self.drag.motion(Some(card))?;

        let pos = board.to_norm_with_extent(raw, self.config.card_extent);
        let elapsed = self.clock.elapsed_ms(now);
        if motion.first {
            self.log.record_at(elapsed, LogAction::DragStart, card, pos);
        }
        self.log.record_at(elapsed, LogAction::DragMove, card, pos);
        self.placements[idx] = Some(pos);
        view.render_card(card, pos);
        Some(pos)
    }

    /// Release the live gesture (pointer-up), appending `drag_end` with the
    /// card's final position.
    pub fn release(&mut self, now: Instant) -> Option<CardId> {
        let released = self.drag.release()?;
        let elapsed = self.clock.elapsed_ms(now);
        match self.placement(released.card) {
            Some(pos) => self
                .log
                .record_at(elapsed, LogAction::DragEnd, released.card, pos),
            None => self.log.record(elapsed, LogAction::DragEnd, released.card),
        }
        Some(released.card)
    }

    /// Discard the live gesture without a `drag_end` record. Placement
    /// updates already applied stay in effect.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Keyboard-equivalent placement: snap `card` to the board center.
    ///
    /// Feeds the same placement state as dragging and yields the same
    /// downstream result shape; the log records a `keyboard_place`.
    pub fn place_by_keyboard(
        &mut self,
        view: &mut dyn CardView,
        card: CardId,
        now: Instant,
    ) -> bool {
        let Some(idx) = self.index_of(card) else {
            return false;
        };
        let pos = NormPoint::CENTER;
        self.placements[idx] = Some(pos);
        self.log
            .record_at(self.clock.elapsed_ms(now), LogAction::KeyboardPlace, card, pos);
        view.render_card(card, pos);
        true
    }

    /// Keyboard input adapter: Enter or Space places the focused card at
    /// the center, Escape cancels a live drag.
    pub fn handle_key(
        &mut self,
        view: &mut dyn CardView,
        card: CardId,
        key: KeyEvent,
        now: Instant,
    ) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.place_by_keyboard(view, card, now),
            KeyCode::Escape => {
                self.cancel_drag();
                false
            }
            _ => false,
        }
    }

    /// Confirm submission, consuming the collector.
    ///
    /// With `require_all_placed` and any card unplaced, the submission is
    /// refused: the collector comes back untouched inside the error and no
    /// result record is produced. Otherwise the record carries the placed
    /// cards in canonical order, their distance matrix, and the log.
    pub fn submit(self, board: BoardRect) -> Result<SpatialOutcome, RejectedSubmit<Self>> {
        let unplaced = self.unplaced_count();
        if self.config.require_all_placed && unplaced > 0 {
            return Err(RejectedSubmit {
                collector: self,
                error: SubmitError::IncompletePlacement { unplaced },
            });
        }

        let mut final_positions = Vec::with_capacity(self.cards.len());
        let mut points = Vec::with_capacity(self.cards.len());
        for (card, placement) in self.cards.iter().zip(&self.placements) {
            // Without require_all_placed, unplaced cards are omitted from
            // the record rather than carrying sentinel coordinates.
            if let Some(pos) = placement {
                final_positions.push(Placement {
                    id: card.id,
                    text: card.text.clone(),
                    x: pos.x,
                    y: pos.y,
                });
                points.push(*pos);
            }
        }

        Ok(SpatialOutcome {
            final_positions,
            pairwise_distances: distance_matrix(&points),
            interaction_log: self.log.into_entries(),
            board_dimensions: board.into(),
            start_layout: self.config.start_layout,
        })
    }
}
