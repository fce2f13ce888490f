//! L4 Atomic Layer: Host surface boundary
//!
//! The surface is owned by the host. Edge effects read its extent and read and
//! write its translation; the renderer reads the translation every frame.

use super::direction::Axis;

/// A scrollable surface as seen by an edge effect
pub trait Surface {
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    /// Current translation along `axis`
    fn translation(&self, axis: Axis) -> f32;

    fn set_translation(&mut self, axis: Axis, value: f32);

    /// Size perpendicular to the scroll axis
    #[inline]
    fn cross_extent(&self, axis: Axis) -> f32 {
        axis.cross_extent(self.width(), self.height())
    }
}

/// Plain in-memory surface state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceState {
    pub width: f32,
    pub height: f32,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl SurfaceState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Whether both translations are back at zero
    pub fn is_at_rest(&self) -> bool {
        self.translation_x == 0.0 && self.translation_y == 0.0
    }

    pub fn reset_translation(&mut self) {
        self.translation_x = 0.0;
        self.translation_y = 0.0;
    }
}

impl Surface for SurfaceState {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn translation(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.translation_x,
            Axis::Vertical => self.translation_y,
        }
    }

    fn set_translation(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.translation_x = value,
            Axis::Vertical => self.translation_y = value,
        }
    }
}
