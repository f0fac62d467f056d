#![forbid(unsafe_code)]

//! Append-only interaction log.
//!
//! Every placement interaction appends one record tagged with elapsed time.
//! The log is never truncated or reordered during a trial and is returned
//! verbatim in the result record for replay/analysis. Appending is the only
//! mutation the public API allows.

use serde::{Deserialize, Serialize};

use crate::card::CardId;
use crate::geometry::NormPoint;

/// Action tag for a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogAction {
    DragStart,
    DragMove,
    DragEnd,
    KeyboardPlace,
}

/// One time-ordered interaction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Milliseconds since the trial started.
    pub elapsed_ms: u64,
    pub action: LogAction,
    /// The affected card.
    pub card: CardId,
    /// Normalized x coordinate, for positional actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Normalized y coordinate, for positional actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Append-only, time-ordered sequence of interaction records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionLog {
    entries: Vec<LogEntry>,
}

impl InteractionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record without coordinates.
    pub fn record(&mut self, elapsed_ms: u64, action: LogAction, card: CardId) {
        self.entries.push(LogEntry {
            elapsed_ms,
            action,
            card,
            x: None,
            y: None,
        });
    }

    /// Append a positional record.
    pub fn record_at(&mut self, elapsed_ms: u64, action: LogAction, card: CardId, pos: NormPoint) {
        self.entries.push(LogEntry {
            elapsed_ms,
            action,
            card,
            x: Some(pos.x),
            y: Some(pos.y),
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the log into its final record form.
    #[must_use]
    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}
