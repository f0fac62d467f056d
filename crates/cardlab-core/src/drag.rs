#![forbid(unsafe_code)]

//! Single-gesture drag state machine.
//!
//! [`DragController`] is shared by both collectors. It tracks the one live
//! gesture per widget instance: Idle → Dragging on an accepted grab,
//! Dragging → Idle on release or cancel.
//!
//! # Invariants
//!
//! 1. At most one gesture is live at a time: grabs while Dragging are
//!    ignored and do not disturb the live gesture's target card.
//! 2. Motion, release, and cancel are no-ops while Idle.
//! 3. The first accepted motion of a gesture is flagged, so the owning
//!    collector can emit its `drag_start` log entry before the first
//!    `drag_move`.
//!
//! The controller itself is geometry-free: the owning collector translates
//! raw pointer positions into its own space (normalized board coordinates,
//! or a list slot) and tags them with elapsed time as it consumes each
//! [`DragMotion`]. Because the collector owns the controller, widget
//! teardown drops any live gesture with it; no callback can fire afterward.

use crate::card::CardId;

/// Observable gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// One accepted move of the live gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragMotion {
    /// The dragged card.
    pub card: CardId,
    /// Whether this is the gesture's first move.
    pub first: bool,
}

#[derive(Debug)]
struct ActiveDrag {
    card: CardId,
    moved: bool,
}

/// Idle/Dragging state machine over a single card gesture.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        if self.active.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The live gesture's card, if any.
    #[must_use]
    pub fn dragged_card(&self) -> Option<CardId> {
        self.active.as_ref().map(|a| a.card)
    }

    /// Attempt a grab-start on `card`. Returns whether the grab was
    /// accepted; a grab while another gesture is live is ignored.
    pub fn grab(&mut self, card: CardId) -> bool {
        if self.active.is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!(?card, "grab ignored: gesture already live");
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(?card, "drag grab");
        self.active = Some(ActiveDrag { card, moved: false });
        true
    }

    /// Forward a move input to the live gesture.
    ///
    /// Returns `None` while Idle. When `only` is given, motion is accepted
    /// only if that card owns the live gesture (exclusive capture).
    pub fn motion(&mut self, only: Option<CardId>) -> Option<DragMotion> {
        let active = self.active.as_mut()?;
        if let Some(card) = only
            && card != active.card
        {
            return None;
        }
        let first = !active.moved;
        active.moved = true;
        Some(DragMotion {
            card: active.card,
            first,
        })
    }

    /// End the live gesture. Returns the released card and whether the
    /// gesture ever moved.
    pub fn release(&mut self) -> Option<DragMotion> {
        let active = self.active.take()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(card = ?active.card, moved = active.moved, "drag release");
        Some(DragMotion {
            card: active.card,
            first: !active.moved,
        })
    }

    /// Explicitly cancel the live gesture (Escape, focus loss, teardown).
    ///
    /// Returns the card that was being dragged, if any.
    pub fn cancel(&mut self) -> Option<CardId> {
        let card = self.active.take().map(|a| a.card);
        #[cfg(feature = "tracing")]
        if let Some(card) = card {
            tracing::debug!(?card, "drag cancelled");
        }
        card
    }
}
