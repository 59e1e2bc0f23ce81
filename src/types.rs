use crate::{Error, Result};

/// Comparison tolerance for accumulated float geometry (padding deltas,
/// pivot checks). Matches the granularity the rolling walk needs to
/// converge on fractional item sizes.
pub const EPSILON: f32 = 0.01;

/// A 2D vector in content-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both components set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }
}

/// The scroll direction along which item extents, spacing and padding
/// accumulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// The primary-axis component of `v` (y for vertical lists, x for
    /// horizontal ones).
    pub fn primary(self, v: Vec2) -> f32 {
        match self {
            Self::Vertical => v.y,
            Self::Horizontal => v.x,
        }
    }

    /// The cross-axis component of `v`.
    pub fn cross(self, v: Vec2) -> f32 {
        match self {
            Self::Vertical => v.x,
            Self::Horizontal => v.y,
        }
    }
}

/// A four-component inset: the spacer padding applied around the rendered
/// window to stand in for the off-screen part of the list.
///
/// Component order follows the host layout convention (top, bottom, left,
/// right). The *leading* component is `top` for vertical lists and `left`
/// for horizontal ones.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Padding {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The inset before the first item along the primary axis.
    pub fn leading(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.top,
            Orientation::Horizontal => self.left,
        }
    }

    /// The inset after the last item along the primary axis.
    pub fn trailing(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.bottom,
            Orientation::Horizontal => self.right,
        }
    }

    pub fn is_non_negative(&self) -> bool {
        self.top >= 0.0 && self.bottom >= 0.0 && self.left >= 0.0 && self.right >= 0.0
    }
}

/// Item anchor convention. Only top-left is supported; positions are
/// expressed relative to that corner and every formula in the engine
/// assumes it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pivot {
    x: f32,
    y: f32,
}

impl Pivot {
    pub const TOP_LEFT: Self = Self { x: 0.0, y: 1.0 };

    /// Validates the anchor; anything but top-left `(0, 1)` is rejected.
    pub fn new(x: f32, y: f32) -> Result<Self> {
        if x != 0.0 || (y - 1.0).abs() > EPSILON {
            return Err(Error::InvalidPivot);
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

impl Default for Pivot {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}
