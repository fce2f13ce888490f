//! L3 Molecular Layer: Both edge effects of one scroll axis

use std::time::Duration;

use super::controller::{EdgeEffectController, Phase};
use super::direction::{Axis, Edge};
use super::surface::Surface;

/// The start and end edge controllers of a surface
#[derive(Debug, Clone)]
pub struct EdgeEffects {
    axis: Axis,
    start: EdgeEffectController,
    end: EdgeEffectController,
}

impl EdgeEffects {
    pub(crate) fn new(axis: Axis, start: EdgeEffectController, end: EdgeEffectController) -> Self {
        Self { axis, start, end }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Controller for the top or left edge
    pub fn start(&self) -> &EdgeEffectController {
        &self.start
    }

    /// Controller for the bottom or right edge
    pub fn end(&self) -> &EdgeEffectController {
        &self.end
    }

    /// Pull `edge` by `delta_distance`
    ///
    /// The opposite edge is reset first so only one edge ever writes the
    /// shared translation. Returns `false` if `edge` is not on this axis.
    pub fn on_pull<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        edge: Edge,
        delta_distance: f32,
    ) -> bool {
        let Some((effect, opposite)) = self.split_mut(edge) else {
            return false;
        };
        opposite.reset();
        effect.on_pull(surface, delta_distance);
        true
    }

    /// Absorb a fling on `edge`, taking over from any spring on the opposite edge
    ///
    /// The new spring starts from the current translation. Returns `false` if
    /// `edge` is not on this axis.
    pub fn on_absorb<S: Surface + ?Sized>(&mut self, surface: &S, edge: Edge, velocity: f32) -> bool {
        let Some((effect, opposite)) = self.split_mut(edge) else {
            return false;
        };
        opposite.reset();
        effect.on_absorb(surface, velocity);
        true
    }

    /// Tick both edges; returns `true` while either still needs frames
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S, dt: Duration) -> bool {
        let start = self.start.advance(surface, dt);
        let end = self.end.advance(surface, dt);
        start || end
    }

    pub fn is_settled(&self) -> bool {
        self.start.is_settled() && self.end.is_settled()
    }

    /// The most active phase across both edges
    pub fn phase(&self) -> Phase {
        match (self.start.phase(), self.end.phase()) {
            (Phase::Pulling, _) | (_, Phase::Pulling) => Phase::Pulling,
            (Phase::Springing, _) | (_, Phase::Springing) => Phase::Springing,
            _ => Phase::Rest,
        }
    }

    /// Release whichever edge is being pulled
    pub fn release<S: Surface + ?Sized>(&mut self, surface: &S) {
        for effect in [&mut self.start, &mut self.end] {
            if effect.phase() == Phase::Pulling {
                effect.on_release(surface);
            }
        }
    }

    pub fn reset(&mut self) {
        self.start.reset();
        self.end.reset();
    }

    /// `(controller for edge, controller for the opposite edge)`
    fn split_mut(&mut self, edge: Edge) -> Option<(&mut EdgeEffectController, &mut EdgeEffectController)> {
        if edge.axis() != self.axis {
            tracing::warn!(%edge, axis = %self.axis, "Edge is not on this axis, ignoring");
            None
        } else if edge == self.start.edge() {
            Some((&mut self.start, &mut self.end))
        } else {
            Some((&mut self.end, &mut self.start))
        }
    }
}
