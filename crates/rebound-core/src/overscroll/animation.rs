//! L3 Molecular Layer: Spring animation lifecycle
//!
//! A spring is started once, advanced by the host's frame driver, and either
//! runs to equilibrium or is cancelled. Once stopped it never moves again.

use std::time::Duration;

use super::spring::SpringParams;

/// Handle to a running spring simulation
///
/// Edge effects depend on this contract only, so hosts can swap in their own
/// integrator.
pub trait Spring {
    /// Start animating from `start_value` toward `params.final_position`
    fn start(params: SpringParams, start_value: f32, start_velocity: f32) -> Self
    where
        Self: Sized;

    /// Advance by one frame and return the value to write to the surface
    fn advance(&mut self, dt: Duration) -> f32;

    /// Stop immediately, leaving the value where it is
    fn cancel(&mut self);

    fn is_stopped(&self) -> bool;

    fn value(&self) -> f32;

    fn velocity(&self) -> f32;

    /// Velocity the spring was started with
    fn start_velocity(&self) -> f32;

    /// Value the spring settles at
    fn target(&self) -> f32;
}

/// Default spring built on the closed-form oscillator
#[derive(Debug, Clone)]
pub struct SpringAnimation {
    params: SpringParams,
    value: f32,
    velocity: f32,
    start_velocity: f32,
    running: bool,
}

impl Spring for SpringAnimation {
    fn start(params: SpringParams, start_value: f32, start_velocity: f32) -> Self {
        Self {
            params,
            value: start_value,
            velocity: start_velocity,
            start_velocity,
            running: true,
        }
    }

    fn advance(&mut self, dt: Duration) -> f32 {
        if !self.running {
            return self.value;
        }

        let (value, velocity) = self.params.step(self.value, self.velocity, dt.as_secs_f64());

        if self.params.is_at_equilibrium(value, velocity) {
            self.value = self.params.final_position;
            self.velocity = 0.0;
            self.running = false;
        } else {
            self.value = value;
            self.velocity = velocity;
        }

        self.value
    }

    fn cancel(&mut self) {
        self.running = false;
    }

    #[inline]
    fn is_stopped(&self) -> bool {
        !self.running
    }

    #[inline]
    fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    fn start_velocity(&self) -> f32 {
        self.start_velocity
    }

    #[inline]
    fn target(&self) -> f32 {
        self.params.final_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_runs_until_equilibrium() {
        let mut spring = SpringAnimation::start(SpringParams::default(), -30.0, 0.0);
        assert!(!spring.is_stopped());

        let mut frames = 0;
        while !spring.is_stopped() {
            spring.advance(FRAME);
            frames += 1;
            assert!(frames < 1000, "spring never settled");
        }

        assert!(frames > 1);
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_cancel_freezes_value() {
        let mut spring = SpringAnimation::start(SpringParams::default(), -30.0, 0.0);
        let value = spring.advance(FRAME);
        spring.cancel();

        assert!(spring.is_stopped());
        assert_eq!(spring.advance(FRAME), value);
        assert_eq!(spring.value(), value);
    }

    #[test]
    fn test_start_velocity_recorded() {
        let mut spring = SpringAnimation::start(SpringParams::default(), 0.0, 250.0);
        assert_eq!(spring.start_velocity(), 250.0);
        assert_eq!(spring.target(), 0.0);

        spring.advance(FRAME);
        assert!(spring.value() > 0.0);
        assert_eq!(spring.start_velocity(), 250.0);
    }
}
