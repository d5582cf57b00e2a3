//! Canvas coordinates.

use crate::{CoreResult, Real, ensure_finite};

/// Position of a component on the design canvas.
///
/// Both coordinates are always finite; construct through [`Position::new`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: Real,
    pub y: Real,
}

impl Position {
    pub fn new(x: Real, y: Real) -> CoreResult<Self> {
        Ok(Self {
            x: ensure_finite(x, "position.x")?,
            y: ensure_finite(y, "position.y")?,
        })
    }

    /// Re-check finiteness (for values built via struct literal or deserialization).
    pub fn checked(self) -> CoreResult<Self> {
        Self::new(self.x, self.y)
    }

    /// Round each coordinate to the nearest multiple of `grid`, halves rounding up.
    ///
    /// A non-positive or non-finite grid leaves the position unchanged.
    pub fn snapped(self, grid: Real) -> Self {
        if !grid.is_finite() || grid <= 0.0 {
            return self;
        }
        Self {
            x: round_half_up(self.x / grid) * grid,
            y: round_half_up(self.y / grid) * grid,
        }
    }
}

fn round_half_up(v: Real) -> Real {
    (v + 0.5).floor()
}
