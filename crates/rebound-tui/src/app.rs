use std::time::Instant;

use crossterm::event::MouseEvent;

use rebound_core::overscroll::timing::frame_delta;
use rebound_core::overscroll::{Axis, Edge, EdgeEffects, OverscrollEffectFactory, Phase};
use rebound_core::AppConfig;

use crate::gesture::{Gesture, GestureTracker};
use crate::input::Action;
use crate::surface::ListSurface;

/// Demo application: a list that bounces when scrolled past either end
pub struct App {
    pub surface: ListSurface,
    pub effects: EdgeEffects,
    gestures: GestureTracker,
    /// Multiplier from rows/s to absorb velocity
    fling_velocity_scale: f32,
    last_frame: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let factory = OverscrollEffectFactory::from_config(&config.overscroll);
        Self {
            surface: ListSurface::numbered(config.ui.item_count),
            effects: factory.create_edge_effects(Axis::Vertical),
            gestures: GestureTracker::new(),
            fling_velocity_scale: config.ui.fling_velocity_scale,
            last_frame: Instant::now(),
            should_quit: false,
        }
    }

    /// Whether the next frame must come at animation rate
    pub fn is_animating(&self) -> bool {
        !self.effects.is_settled()
    }

    pub fn phase(&self) -> Phase {
        self.effects.phase()
    }

    /// Apply a new list viewport; a size change resets the effect
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.surface.set_viewport(width, height) {
            tracing::debug!(width, height, "Viewport changed, resetting overscroll");
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.effects.reset();
        self.surface.reset_translation();
    }

    /// Advance running springs to `now`
    pub fn on_tick(&mut self, now: Instant) {
        let dt = frame_delta(self.last_frame, now);
        self.last_frame = now;
        self.effects.advance(&mut self.surface, dt);
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        let half_page = (self.surface.viewport_height() as i32 / 2).max(1);
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveDown => self.scroll(1, now),
            Action::MoveUp => self.scroll(-1, now),
            Action::ScrollHalfPageDown => self.scroll(half_page, now),
            Action::ScrollHalfPageUp => self.scroll(-half_page, now),
            Action::JumpToTop => self.surface.jump_to_start(),
            Action::JumpToBottom => self.surface.jump_to_end(),
            Action::Reset => self.reset(),
            Action::None => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        if let Some(gesture) = self.gestures.on_mouse(event, now) {
            self.handle_gesture(gesture, now);
        }
    }

    pub fn handle_gesture(&mut self, gesture: Gesture, now: Instant) {
        match gesture {
            Gesture::DragStart => {}
            Gesture::DragBy(rows) => self.drag(rows),
            Gesture::DragEnd => self.effects.release(&self.surface),
            Gesture::Scroll(rows) => {
                let leftover = self.surface.scroll_by(rows);
                if let Some(edge) = Self::edge_for(leftover) {
                    let velocity = self.gestures.velocity(now) * self.fling_velocity_scale;
                    self.effects.on_absorb(&self.surface, edge, velocity);
                }
            }
        }
    }

    fn scroll(&mut self, rows: i32, now: Instant) {
        let gesture = self.gestures.scroll(rows, now);
        self.handle_gesture(gesture, now);
    }

    fn drag(&mut self, rows: i32) {
        // Dragging back away from a pulled edge lets it spring back first
        let reversing = match (self.effects.start().phase(), self.effects.end().phase()) {
            (Phase::Pulling, _) => rows > 0,
            (_, Phase::Pulling) => rows < 0,
            _ => false,
        };
        if reversing {
            self.effects.release(&self.surface);
        }

        let leftover = self.surface.scroll_by(rows);
        if let Some(edge) = Self::edge_for(leftover) {
            let height = self.surface.viewport_height().max(1) as f32;
            let delta_distance = leftover.unsigned_abs() as f32 / height;
            self.effects.on_pull(&mut self.surface, edge, delta_distance);
        }
    }

    /// Which edge a scroll leftover ran into
    fn edge_for(leftover: i32) -> Option<Edge> {
        match leftover.signum() {
            -1 => Some(Edge::Top),
            1 => Some(Edge::Bottom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use rebound_core::overscroll::{Spring, Surface};

    fn app() -> App {
        let mut app = App::new(&AppConfig::default());
        app.resize(80, 20);
        app
    }

    #[test]
    fn test_drag_past_top_pulls() {
        let mut app = app();
        app.handle_gesture(Gesture::DragStart, Instant::now());
        app.handle_gesture(Gesture::DragBy(-5), Instant::now());

        // 80 cols * (5 / 20) * 0.1
        assert!((app.surface.translation(Axis::Vertical) - 2.0).abs() < 1e-4);
        assert_eq!(app.phase(), Phase::Pulling);
        assert!(!app.is_animating());
    }

    #[test]
    fn test_release_springs_back() {
        let mut app = app();
        let start = Instant::now();
        app.handle_gesture(Gesture::DragBy(-20), start);
        app.handle_gesture(Gesture::DragEnd, start);
        assert_eq!(app.phase(), Phase::Springing);
        assert!(app.is_animating());

        let mut now = start;
        for _ in 0..600 {
            now += Duration::from_millis(16);
            app.on_tick(now);
            if !app.is_animating() {
                break;
            }
        }
        assert!(!app.is_animating());
        assert_eq!(app.surface.translation(Axis::Vertical), 0.0);
    }

    #[test]
    fn test_reverse_drag_releases_pull() {
        let mut app = app();
        app.handle_gesture(Gesture::DragBy(-10), Instant::now());
        app.handle_gesture(Gesture::DragBy(2), Instant::now());
        assert_eq!(app.phase(), Phase::Springing);
        assert_eq!(app.surface.offset(), 2);
    }

    #[test]
    fn test_scroll_into_end_absorbs() {
        let mut app = app();
        let now = Instant::now();
        app.handle_action(Action::JumpToBottom, now);
        for _ in 0..4 {
            app.handle_action(Action::MoveDown, now);
        }
        assert_eq!(app.phase(), Phase::Springing);
        let spring = app.effects.end().active_spring().unwrap();
        assert!(spring.start_velocity() < 0.0);
    }

    #[test]
    fn test_fling_into_end_stops_top_spring() {
        let mut app = app();
        let start = Instant::now();
        app.handle_gesture(Gesture::DragBy(-10), start);
        app.handle_gesture(Gesture::DragEnd, start);
        assert!(!app.effects.start().is_settled());

        app.handle_action(Action::JumpToBottom, start);
        for _ in 0..3 {
            app.handle_action(Action::MoveDown, start);
        }
        assert!(app.effects.start().is_settled());
        assert!(!app.effects.end().is_settled());

        let mut now = start;
        let mut last = app.surface.translation(Axis::Vertical);
        for _ in 0..600 {
            now += Duration::from_millis(16);
            app.on_tick(now);
            assert!(app.effects.start().is_settled());
            let translation = app.surface.translation(Axis::Vertical);
            assert!((translation - last).abs() < 2.5);
            last = translation;
            if !app.is_animating() {
                break;
            }
        }
        assert!(!app.is_animating());
        assert_eq!(app.surface.translation(Axis::Vertical), 0.0);
    }

    #[test]
    fn test_resize_resets() {
        let mut app = app();
        app.handle_gesture(Gesture::DragBy(-10), Instant::now());
        app.resize(100, 30);
        assert_eq!(app.phase(), Phase::Rest);
        assert!(app.surface.state().is_at_rest());
    }
}
