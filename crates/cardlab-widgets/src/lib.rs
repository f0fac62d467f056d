#![forbid(unsafe_code)]

//! Response-collection widgets for cardlab.
//!
//! Two primary widgets share the cardlab-core drag state machine:
//!
//! - [`RankingCollector`]: an ordered card list, reordered by drag or
//!   keyboard, scored against canonical order with Kendall tau-a.
//! - [`SpatialCollector`]: per-card 2D placement on a board in normalized
//!   coordinates, with a pairwise distance matrix and a full interaction log.
//!
//! Two smaller sub-widgets round out a trial: [`ChoiceScale`] (single-choice
//! scale) and [`PointAllocation`] (fixed-total point distribution).
//!
//! Each widget receives raw input forwarded by a host view layer, mutates
//! its own state synchronously, and hands back a single serializable result
//! record when the participant confirms submission. Rendering goes through
//! the minimal [`CardView`] collaborator, so the widgets are independent of
//! any particular UI toolkit.

pub mod allocation;
pub mod choice;
pub mod error;
pub mod ranking;
pub mod spatial;
pub mod view;

pub use allocation::{AllocationEntry, AllocationOutcome, PointAllocation};
pub use choice::{ChoiceOutcome, ChoiceScale};
pub use error::{RejectedSubmit, SubmitError};
pub use ranking::{RankingCollector, RankingConfig, RankingOutcome, SwapDirection};
pub use spatial::{Placement, SpatialCollector, SpatialConfig, SpatialOutcome, StartLayout};
pub use view::{CardView, NullView};
