#![forbid(unsafe_code)]

//! Core machinery for cardlab response collection.
//!
//! This crate holds everything beneath the widgets: card identity, the
//! screen-to-normalized coordinate transform, canonical input event types,
//! the trial-relative clock, the single-gesture drag state machine, the
//! non-identity shuffle, the scoring functions, and the append-only
//! interaction log.
//!
//! Nothing here touches a UI toolkit. Widgets in `cardlab-widgets` drive
//! these types from raw input events forwarded by a host view layer.

pub mod card;
pub mod clock;
pub mod drag;
pub mod event;
pub mod geometry;
pub mod log;
pub mod scoring;
pub mod shuffle;

pub use card::{Card, CardId};
pub use clock::InteractionClock;
pub use drag::{DragController, DragMotion, DragState};
pub use event::{Event, KeyCode, KeyEvent, Modifiers, PointerEvent, PointerEventKind};
pub use geometry::{BoardDimensions, BoardRect, CardExtent, NormPoint, ScreenPoint};
pub use log::{InteractionLog, LogAction, LogEntry};
