//! L4 Atomic Layer: Axis, edge and sign resolution
//!
//! The sign of every translation delta comes from `(axis, edge)` alone, so a
//! pull and a fling on the same edge always move the surface the same way.

use std::fmt;

/// Host orientation value for a horizontal scroller
pub const ORIENTATION_HORIZONTAL: i32 = 0;
/// Host orientation value for a vertical scroller
pub const ORIENTATION_VERTICAL: i32 = 1;

/// Host edge direction values
pub const DIRECTION_LEFT: i32 = 0;
pub const DIRECTION_TOP: i32 = 1;
pub const DIRECTION_RIGHT: i32 = 2;
pub const DIRECTION_BOTTOM: i32 = 3;

/// Scroll axis of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Decode the host's orientation value
    ///
    /// Unknown values fall back to `Vertical`.
    pub fn from_orientation(raw: i32) -> Self {
        match raw {
            ORIENTATION_HORIZONTAL => Axis::Horizontal,
            ORIENTATION_VERTICAL => Axis::Vertical,
            other => {
                tracing::warn!(orientation = other, "Unknown orientation, treating as vertical");
                Axis::Vertical
            }
        }
    }

    /// Extent perpendicular to this axis: width for vertical, height for horizontal
    #[inline]
    pub fn cross_extent(&self, width: f32, height: f32) -> f32 {
        match self {
            Axis::Vertical => width,
            Axis::Horizontal => height,
        }
    }

    /// The edges at the start and end of this axis
    pub fn edges(&self) -> (Edge, Edge) {
        match self {
            Axis::Vertical => (Edge::Top, Edge::Bottom),
            Axis::Horizontal => (Edge::Left, Edge::Right),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Boundary of a surface an edge effect is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    /// Decode the host's edge direction value, falling back to `Top`
    pub fn from_direction(raw: i32) -> Self {
        match raw {
            DIRECTION_LEFT => Edge::Left,
            DIRECTION_TOP => Edge::Top,
            DIRECTION_RIGHT => Edge::Right,
            DIRECTION_BOTTOM => Edge::Bottom,
            other => {
                tracing::warn!(direction = other, "Unknown edge direction, treating as top");
                Edge::Top
            }
        }
    }

    /// Axis this edge terminates
    pub fn axis(&self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Vertical,
            Edge::Left | Edge::Right => Axis::Horizontal,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Left => write!(f, "left"),
            Edge::Top => write!(f, "top"),
            Edge::Right => write!(f, "right"),
            Edge::Bottom => write!(f, "bottom"),
        }
    }
}

/// Direction a pull on an edge pushes the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub fn as_f32(&self) -> f32 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// Resolve the translation sign for an edge
///
/// | axis       | edge   | sign |
/// |------------|--------|------|
/// | vertical   | bottom | -    |
/// | vertical   | other  | +    |
/// | horizontal | left   | +    |
/// | horizontal | other  | -    |
pub fn resolve_sign(axis: Axis, edge: Edge) -> Sign {
    match axis {
        Axis::Vertical => {
            if edge == Edge::Bottom {
                Sign::Negative
            } else {
                Sign::Positive
            }
        }
        Axis::Horizontal => {
            if edge == Edge::Left {
                Sign::Positive
            } else {
                Sign::Negative
            }
        }
    }
}
