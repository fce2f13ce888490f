//! Scrollable list surface hosting the overscroll effect
//!
//! Extents and translation are measured in terminal cells.

use rebound_core::overscroll::{Axis, Surface, SurfaceState};

/// A vertically scrolling list of rows
#[derive(Debug, Clone)]
pub struct ListSurface {
    items: Vec<String>,
    /// Index of the first visible row
    offset: usize,
    /// Visible rows
    viewport_height: u16,
    state: SurfaceState,
}

impl ListSurface {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            offset: 0,
            viewport_height: 0,
            state: SurfaceState::default(),
        }
    }

    /// Generate a numbered demo list
    pub fn numbered(count: usize) -> Self {
        Self::new((1..=count).map(|i| format!("Row {:>3}", i)).collect())
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Set the visible area; returns `true` if the size changed
    pub fn set_viewport(&mut self, width: u16, height: u16) -> bool {
        let changed = self.state.width != width as f32 || self.viewport_height != height;
        self.state.width = width as f32;
        self.state.height = height as f32;
        self.viewport_height = height;
        self.offset = self.offset.min(self.max_scroll());
        changed
    }

    pub fn max_scroll(&self) -> usize {
        self.items.len().saturating_sub(self.viewport_height as usize)
    }

    pub fn at_start(&self) -> bool {
        self.offset == 0
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.max_scroll()
    }

    /// Scroll by `delta` rows, returning the part that ran past a boundary
    ///
    /// Negative leftover means the start was hit, positive the end.
    pub fn scroll_by(&mut self, delta: i32) -> i32 {
        let target = self.offset as i64 + delta as i64;
        let clamped = target.clamp(0, self.max_scroll() as i64);
        self.offset = clamped as usize;
        (target - clamped) as i32
    }

    pub fn jump_to_start(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.offset = self.max_scroll();
    }

    /// Current translation in whole rows, as drawn
    pub fn row_shift(&self) -> i32 {
        self.state.translation_y.round() as i32
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    pub fn reset_translation(&mut self) {
        self.state.reset_translation();
    }
}

impl Surface for ListSurface {
    fn width(&self) -> f32 {
        self.state.width
    }

    fn height(&self) -> f32 {
        self.state.height
    }

    fn translation(&self, axis: Axis) -> f32 {
        self.state.translation(axis)
    }

    fn set_translation(&mut self, axis: Axis, value: f32) {
        self.state.set_translation(axis, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_leftover() {
        let mut surface = ListSurface::numbered(30);
        surface.set_viewport(40, 10);
        assert_eq!(surface.max_scroll(), 20);

        assert_eq!(surface.scroll_by(-3), -3);
        assert!(surface.at_start());

        assert_eq!(surface.scroll_by(15), 0);
        assert_eq!(surface.offset(), 15);

        assert_eq!(surface.scroll_by(8), 3);
        assert!(surface.at_end());
    }

    #[test]
    fn test_short_list_is_pinned() {
        let mut surface = ListSurface::numbered(4);
        surface.set_viewport(40, 10);
        assert!(surface.at_start());
        assert!(surface.at_end());
        assert_eq!(surface.scroll_by(2), 2);
    }

    #[test]
    fn test_viewport_shrink_clamps_offset() {
        let mut surface = ListSurface::numbered(30);
        surface.set_viewport(40, 10);
        surface.jump_to_end();
        assert_eq!(surface.offset(), 20);

        assert!(surface.set_viewport(40, 25));
        assert_eq!(surface.offset(), 5);
        assert!(!surface.set_viewport(40, 25));
    }

    #[test]
    fn test_row_shift_rounds() {
        let mut surface = ListSurface::numbered(5);
        surface.set_translation(Axis::Vertical, 2.6);
        assert_eq!(surface.row_shift(), 3);
        surface.set_translation(Axis::Vertical, -1.4);
        assert_eq!(surface.row_shift(), -1);
    }
}
