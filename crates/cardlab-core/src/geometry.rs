#![forbid(unsafe_code)]

//! Geometric primitives and the screen-to-board transform.
//!
//! Placements live in normalized [0,1]² coordinates so downstream analysis
//! is resolution-independent across participants. The only place pixels
//! appear is [`BoardRect`] (the board's screen rectangle, reported by the
//! host view) and [`CardExtent`] (a card's visual size, used to keep the
//! whole card inside the board while dragging).
//!
//! # Invariants
//!
//! 1. Every [`NormPoint`] constructed through this module satisfies
//!    `x, y ∈ [0, 1]`, for any raw input whatsoever.
//! 2. The transform is affine: `norm = (screen - origin) / size`, then
//!    clamped.

use serde::{Deserialize, Serialize};

/// A raw pointer position in screen pixels, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A position on the placement surface, as fractions of its width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormPoint {
    pub x: f64,
    pub y: f64,
}

impl NormPoint {
    /// Board center, the keyboard-placement snap target.
    pub const CENTER: NormPoint = NormPoint { x: 0.5, y: 0.5 };

    /// Create a point, clamping both coordinates into [0, 1].
    ///
    /// Non-finite inputs clamp to 0.
    #[must_use]
    pub fn clamped(x: f64, y: f64) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    /// Euclidean distance to another point, in normalized units.
    #[must_use]
    pub fn distance(self, other: NormPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

/// A card's visual size in screen pixels.
///
/// Used to clamp drag placements so the card's full extent stays on the
/// board, not just the pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardExtent {
    pub width: f64,
    pub height: f64,
}

impl Default for CardExtent {
    fn default() -> Self {
        // Fallback size used when the host has not measured the card yet.
        Self {
            width: 200.0,
            height: 60.0,
        }
    }
}

/// The board's bounding rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoardRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle at the origin with the given size.
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Map a raw pointer position into normalized board coordinates.
    ///
    /// Positions outside the rectangle clamp to the nearest edge. A
    /// degenerate (zero or negative sized) board maps everything to the
    /// center.
    #[must_use]
    pub fn to_norm(&self, p: ScreenPoint) -> NormPoint {
        if self.width <= 0.0 || self.height <= 0.0 {
            return NormPoint::CENTER;
        }
        NormPoint::clamped((p.x - self.x) / self.width, (p.y - self.y) / self.height)
    }

    /// Map a raw pointer position to a card-center placement, keeping the
    /// card's full visual extent inside the board.
    ///
    /// The pointer is treated as the desired card center. The center is
    /// clamped into `[half_extent, 1 - half_extent]` per axis; a card larger
    /// than the board on an axis pins to 0.5 on that axis.
    #[must_use]
    pub fn to_norm_with_extent(&self, p: ScreenPoint, extent: CardExtent) -> NormPoint {
        if self.width <= 0.0 || self.height <= 0.0 {
            return NormPoint::CENTER;
        }
        let raw = self.to_norm(p);
        NormPoint {
            x: clamp_axis(raw.x, extent.width / self.width),
            y: clamp_axis(raw.y, extent.height / self.height),
        }
    }
}

fn clamp_axis(center: f64, extent_frac: f64) -> f64 {
    let half = (extent_frac / 2.0).max(0.0);
    if half >= 0.5 {
        0.5
    } else {
        center.clamp(half, 1.0 - half)
    }
}

/// Board size in pixels, echoed into the spatial result record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardDimensions {
    pub width: f64,
    pub height: f64,
}

impl From<BoardRect> for BoardDimensions {
    fn from(rect: BoardRect) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
        }
    }
}
