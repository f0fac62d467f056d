#![forbid(unsafe_code)]

//! The external view collaborator.
//!
//! The widgets own all state; the only thing they ask of the surrounding
//! view layer is to draw a card at a normalized position. This one-method
//! boundary is what lets the collectors run under any UI toolkit (or none,
//! in tests).

use cardlab_core::{CardId, NormPoint};

/// Rendering callback into the host view layer.
pub trait CardView {
    /// Render (or move) a card at a normalized board position.
    fn render_card(&mut self, card: CardId, pos: NormPoint);
}

/// A view that draws nothing. Useful for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl CardView for NullView {
    fn render_card(&mut self, _card: CardId, _pos: NormPoint) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_view_accepts_renders() {
        let mut view = NullView;
        view.render_card(CardId::from_index(0), NormPoint::CENTER);
    }
}
