#![forbid(unsafe_code)]

//! Submit-time conditions.
//!
//! Every condition here is recoverable and non-fatal: the host surfaces the
//! message inline and the participant continues with all state intact.
//! Nothing in the widgets performs I/O, so nothing is retried.

use thiserror::Error;

/// A recoverable reason a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Required cards remain unplaced on the board.
    #[error("please place all cards on the board before continuing ({unplaced} remaining)")]
    IncompletePlacement {
        /// How many cards are still unplaced.
        unplaced: usize,
    },

    /// A required single-choice response was not given.
    #[error("please choose one response before continuing")]
    MissingResponse,

    /// Allocated points do not sum to the required total.
    #[error("points add up to {total}, but must equal exactly {target}")]
    UnbalancedAllocation { total: u64, target: u32 },
}

/// A refused submission.
///
/// Hands the collector back untouched along with the condition, so the
/// participant can keep interacting and resubmit.
#[derive(Debug)]
pub struct RejectedSubmit<C> {
    /// The collector, state preserved.
    pub collector: C,
    /// Why the submission was refused.
    pub error: SubmitError,
}
