//! L4 Atomic Layer: Frame timing utilities for spring animations
//!
//! Provides pure functions for turning wall-clock frames into integration steps.

use std::time::{Duration, Instant};

/// Longest step a single frame may advance a spring by
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Calculate the time step between two frames
///
/// # Arguments
/// * `last` - Time of the previous frame
/// * `now` - Time of the current frame
///
/// # Returns
/// Elapsed time clamped to [`MAX_FRAME_DELTA`], zero if `now` precedes `last`
#[inline]
pub fn frame_delta(last: Instant, now: Instant) -> Duration {
    let elapsed = now.saturating_duration_since(last);
    if elapsed > MAX_FRAME_DELTA {
        tracing::trace!(
            elapsed_ms = elapsed.as_millis(),
            max_ms = MAX_FRAME_DELTA.as_millis(),
            "Frame delta clamped"
        );
        MAX_FRAME_DELTA
    } else {
        elapsed
    }
}

/// Get tick duration for an animation FPS
#[inline]
pub fn tick_duration(fps: u32) -> Duration {
    if fps == 0 {
        Duration::from_millis(16) // ~60fps fallback
    } else {
        Duration::from_secs_f64(1.0 / fps as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_delta() {
        let start = Instant::now();
        let later = start + Duration::from_millis(16);
        assert_eq!(frame_delta(start, later), Duration::from_millis(16));
    }

    #[test]
    fn test_frame_delta_clamped() {
        let start = Instant::now();
        let stalled = start + Duration::from_secs(3);
        assert_eq!(frame_delta(start, stalled), MAX_FRAME_DELTA);
    }

    #[test]
    fn test_frame_delta_backwards() {
        let start = Instant::now();
        let later = start + Duration::from_millis(5);
        assert_eq!(frame_delta(later, start), Duration::ZERO);
    }

    #[test]
    fn test_tick_duration() {
        assert_eq!(tick_duration(0), Duration::from_millis(16));
        assert_eq!(tick_duration(50), Duration::from_millis(20));
    }
}
