//! Mouse and key gesture tracking
//!
//! Turns raw terminal input into drags and scrolls, and keeps a short history
//! of scroll movement to estimate the fling speed when a scroll runs into an
//! edge.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Window of recent movement used for the velocity estimate
pub const VELOCITY_WINDOW: Duration = Duration::from_millis(100);
/// Rows moved per mouse wheel notch
pub const WHEEL_ROWS: i32 = 3;

/// A gesture on the list, in content rows (positive = toward the end)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    DragStart,
    /// Finger/pointer moved; content should scroll by this many rows
    DragBy(i32),
    DragEnd,
    /// Wheel or key scroll
    Scroll(i32),
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    /// Row of the pointer while the button is held
    drag_row: Option<u16>,
    /// Recent (time, rows) movements
    samples: VecDeque<(Instant, i32)>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a mouse event into a gesture
    pub fn on_mouse(&mut self, event: MouseEvent, now: Instant) -> Option<Gesture> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_row = Some(event.row);
                self.samples.clear();
                Some(Gesture::DragStart)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let last = self.drag_row?;
                self.drag_row = Some(event.row);
                // Dragging down pulls content down, i.e. scrolls toward the start
                let rows = last as i32 - event.row as i32;
                if rows == 0 {
                    return None;
                }
                self.record(now, rows);
                Some(Gesture::DragBy(rows))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag_row.take().map(|_| Gesture::DragEnd)
            }
            MouseEventKind::ScrollDown => Some(self.scroll(WHEEL_ROWS, now)),
            MouseEventKind::ScrollUp => Some(self.scroll(-WHEEL_ROWS, now)),
            _ => None,
        }
    }

    /// Record a wheel or key scroll
    pub fn scroll(&mut self, rows: i32, now: Instant) -> Gesture {
        self.record(now, rows);
        Gesture::Scroll(rows)
    }

    /// Recent scroll speed in rows per second
    pub fn velocity(&self, now: Instant) -> f32 {
        let rows: i32 = self
            .samples
            .iter()
            .filter(|(at, _)| now.saturating_duration_since(*at) <= VELOCITY_WINDOW)
            .map(|(_, rows)| rows.abs())
            .sum();
        rows as f32 / VELOCITY_WINDOW.as_secs_f32()
    }

    fn record(&mut self, now: Instant, rows: i32) {
        while let Some((at, _)) = self.samples.front() {
            if now.saturating_duration_since(*at) > VELOCITY_WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
        self.samples.push_back((now, rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_drag_sequence() {
        let mut tracker = GestureTracker::new();
        let now = Instant::now();

        assert_eq!(
            tracker.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5), now),
            Some(Gesture::DragStart)
        );
        assert_eq!(tracker.drag_row, Some(5));

        // Pointer moves down three rows: content scrolls toward the start
        assert_eq!(
            tracker.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 8), now),
            Some(Gesture::DragBy(-3))
        );
        assert_eq!(
            tracker.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 8), now),
            None
        );
        assert_eq!(
            tracker.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 8), now),
            Some(Gesture::DragEnd)
        );
        assert!(tracker.drag_row.is_none());
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut tracker = GestureTracker::new();
        let now = Instant::now();
        assert_eq!(
            tracker.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 4), now),
            None
        );
        assert_eq!(
            tracker.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 4), now),
            None
        );
    }

    #[test]
    fn test_wheel_scrolls() {
        let mut tracker = GestureTracker::new();
        let now = Instant::now();
        assert_eq!(
            tracker.on_mouse(mouse(MouseEventKind::ScrollDown, 0), now),
            Some(Gesture::Scroll(WHEEL_ROWS))
        );
        assert_eq!(
            tracker.on_mouse(mouse(MouseEventKind::ScrollUp, 0), now),
            Some(Gesture::Scroll(-WHEEL_ROWS))
        );
    }

    #[test]
    fn test_velocity_window() {
        let mut tracker = GestureTracker::new();
        let start = Instant::now();

        tracker.scroll(3, start);
        tracker.scroll(3, start + Duration::from_millis(40));
        let speed = tracker.velocity(start + Duration::from_millis(50));
        assert!((speed - 60.0).abs() < 1e-3);

        // Old samples fall out of the window
        let later = start + Duration::from_millis(500);
        assert_eq!(tracker.velocity(later), 0.0);
    }
}
