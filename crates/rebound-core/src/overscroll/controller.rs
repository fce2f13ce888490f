//! L3 Molecular Layer: Edge effect controller
//!
//! One controller per edge. The host forwards pull, release and absorb events
//! for that edge and ticks the controller once per frame while it is not
//! settled. The translation it writes is the whole visual effect; the stock
//! edge glow is never drawn.

use std::time::Duration;

use super::animation::{Spring, SpringAnimation};
use super::direction::{resolve_sign, Axis, Edge, Sign};
use super::spring::SpringParams;
use super::surface::Surface;

/// Where a controller is in its pull/spring cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No drag and no spring; translation is back at zero
    Rest,
    /// The user is dragging past the edge
    Pulling,
    /// A spring is pulling the surface back to rest
    Springing,
}

/// Overscroll bounce for a single edge of a surface
#[derive(Debug, Clone)]
pub struct EdgeEffectController<A: Spring = SpringAnimation> {
    axis: Axis,
    edge: Edge,
    fling_translation_gain: f32,
    pull_translation_gain: f32,
    /// Damping, stiffness and thresholds for every spring this edge starts
    spring_params: SpringParams,
    active_spring: Option<A>,
    phase: Phase,
}

impl<A: Spring> EdgeEffectController<A> {
    pub fn new(
        axis: Axis,
        edge: Edge,
        fling_translation_gain: f32,
        pull_translation_gain: f32,
        spring_params: SpringParams,
    ) -> Self {
        Self {
            axis,
            edge,
            fling_translation_gain,
            pull_translation_gain,
            spring_params: SpringParams {
                final_position: 0.0,
                ..spring_params
            },
            active_spring: None,
            phase: Phase::Rest,
        }
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        resolve_sign(self.axis, self.edge)
    }

    pub fn fling_translation_gain(&self) -> f32 {
        self.fling_translation_gain
    }

    pub fn pull_translation_gain(&self) -> f32 {
        self.pull_translation_gain
    }

    pub fn spring_params(&self) -> &SpringParams {
        &self.spring_params
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The in-flight spring, if any
    pub fn active_spring(&self) -> Option<&A> {
        self.active_spring.as_ref()
    }

    /// Drag past the edge by `delta_distance` (a fraction of the surface extent)
    ///
    /// Moves the surface by `sign * cross_extent * delta_distance * pull_gain`
    /// and cancels any spring; a drag always wins over a settling animation.
    pub fn on_pull<S: Surface + ?Sized>(&mut self, surface: &mut S, delta_distance: f32) {
        let translation_delta = self.sign().as_f32()
            * surface.cross_extent(self.axis)
            * delta_distance
            * self.pull_translation_gain;

        let translation = surface.translation(self.axis) + translation_delta;
        surface.set_translation(self.axis, translation);

        tracing::trace!(
            edge = %self.edge,
            delta_distance,
            translation,
            "Overscroll pull"
        );

        self.cancel_spring();
        self.phase = Phase::Pulling;
    }

    /// Pull variant for dispatchers that also report the touch displacement
    ///
    /// The displacement does not affect the translation.
    pub fn on_pull_with_displacement<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        delta_distance: f32,
        _displacement: f32,
    ) {
        self.on_pull(surface, delta_distance);
    }

    /// Drag released without a fling
    ///
    /// Springs back to zero if the surface is displaced; does nothing at rest.
    pub fn on_release<S: Surface + ?Sized>(&mut self, surface: &S) {
        let translation = surface.translation(self.axis);

        if translation != 0.0 {
            self.start_spring(translation, 0.0);
        } else if self.phase == Phase::Pulling {
            self.phase = Phase::Rest;
        }
    }

    /// A fling reached the edge with speed `velocity`
    ///
    /// Only the magnitude is used; direction comes from the edge. Any running
    /// spring is replaced by one starting at the current translation with
    /// `sign * velocity * fling_gain`.
    pub fn on_absorb<S: Surface + ?Sized>(&mut self, surface: &S, velocity: f32) {
        let start_velocity = self.sign().as_f32() * velocity.abs() * self.fling_translation_gain;
        self.start_spring(surface.translation(self.axis), start_velocity);
    }

    /// Whether no spring is animating this edge
    pub fn is_settled(&self) -> bool {
        self.active_spring
            .as_ref()
            .map_or(true, |spring| spring.is_stopped())
    }

    /// Whether the host should draw its own edge glow for this frame
    ///
    /// Always `false`: the translation replaces the glow entirely.
    #[inline]
    pub fn draw(&self) -> bool {
        false
    }

    /// Advance the active spring by one frame and write its value to the surface
    ///
    /// Returns `true` while the edge still needs frames.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S, dt: Duration) -> bool {
        let Some(spring) = self.active_spring.as_mut() else {
            return false;
        };

        if !spring.is_stopped() {
            let value = spring.advance(dt);
            surface.set_translation(self.axis, value);
            tracing::trace!(edge = %self.edge, value, velocity = spring.velocity(), "Spring tick");
        }

        if spring.is_stopped() {
            tracing::debug!(edge = %self.edge, "Spring settled");
            self.active_spring = None;
            self.phase = Phase::Rest;
            return false;
        }

        true
    }

    /// Drop any spring and return to rest
    ///
    /// Translation is left alone; the host owns zeroing it on teardown.
    pub fn reset(&mut self) {
        self.cancel_spring();
        self.phase = Phase::Rest;
    }

    fn start_spring(&mut self, start_value: f32, start_velocity: f32) {
        self.cancel_spring();

        tracing::debug!(
            axis = %self.axis,
            edge = %self.edge,
            start_value,
            start_velocity,
            "Starting spring"
        );

        self.active_spring = Some(A::start(self.spring_params, start_value, start_velocity));
        self.phase = Phase::Springing;
    }

    fn cancel_spring(&mut self) {
        if let Some(mut spring) = self.active_spring.take() {
            if !spring.is_stopped() {
                tracing::debug!(edge = %self.edge, value = spring.value(), "Cancelling spring");
            }
            spring.cancel();
        }
    }
}
