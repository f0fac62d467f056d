#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The host view layer translates whatever its UI toolkit delivers into
//! these types and forwards them to the widgets. All events derive `Clone`
//! and `PartialEq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Pointer coordinates are raw screen pixels ([`crate::geometry::ScreenPoint`]);
//!   the widgets own the translation into board space.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;

use crate::geometry::ScreenPoint;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer (mouse/touch/pen) event.
    Pointer(PointerEvent),

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost. Focus loss cancels an
    /// in-progress drag.
    Focus(bool),
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What the pointer did.
    pub kind: PointerEventKind,

    /// Position in screen pixels.
    pub pos: ScreenPoint,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(kind: PointerEventKind, pos: ScreenPoint) -> Self {
        Self { kind, pos }
    }
}

/// The kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Primary button / contact down.
    Down,

    /// Pointer moved (with or without contact).
    Move,

    /// Primary button / contact released.
    Up,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }
}

/// Key codes for the keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Tab key.
    Tab,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_builder() {
        let key = KeyEvent::new(KeyCode::Up).with_modifiers(Modifiers::ALT);
        assert!(key.alt());
        assert_eq!(key.code, KeyCode::Up);
    }

    #[test]
    fn modifiers_combine() {
        let mods = Modifiers::ALT | Modifiers::SHIFT;
        assert!(mods.contains(Modifiers::ALT));
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::CTRL));
    }

    #[test]
    fn pointer_event_carries_position() {
        let ev = PointerEvent::new(PointerEventKind::Down, ScreenPoint::new(4.0, 7.0));
        assert_eq!(ev.pos.x, 4.0);
        assert_eq!(ev.kind, PointerEventKind::Down);
    }
}
