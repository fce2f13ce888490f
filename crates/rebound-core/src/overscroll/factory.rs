//! L3 Molecular Layer: Edge effect factory
//!
//! Holds the two gain coefficients and the spring tuning. Controllers copy
//! these at construction; later changes to the factory only affect controllers
//! created afterwards.

use super::animation::Spring;
use super::controller::EdgeEffectController;
use super::direction::{Axis, Edge};
use super::edges::EdgeEffects;
use super::spring::SpringParams;
use crate::config::OverscrollConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct OverscrollEffectFactory {
    fling_translation_gain: f32,
    pull_translation_gain: f32,
    spring: SpringParams,
}

impl Default for OverscrollEffectFactory {
    fn default() -> Self {
        Self::from_config(&OverscrollConfig::default())
    }
}

impl OverscrollEffectFactory {
    /// Create a factory with custom gains and the default spring tuning
    pub fn new(fling_translation_gain: f32, pull_translation_gain: f32) -> Self {
        Self {
            fling_translation_gain,
            pull_translation_gain,
            spring: SpringParams::default(),
        }
    }

    pub fn from_config(config: &OverscrollConfig) -> Self {
        Self {
            fling_translation_gain: config.fling_translation,
            pull_translation_gain: config.overscroll_translation,
            spring: SpringParams::new(
                0.0,
                config.damping_ratio.ratio(),
                config.stiffness.value(),
            )
            .with_min_visible_change(config.min_visible_change),
        }
    }

    pub fn fling_translation_gain(&self) -> f32 {
        self.fling_translation_gain
    }

    pub fn pull_translation_gain(&self) -> f32 {
        self.pull_translation_gain
    }

    pub fn spring_params(&self) -> &SpringParams {
        &self.spring
    }

    pub fn set_fling_translation_gain(&mut self, gain: f32) {
        self.fling_translation_gain = gain;
    }

    pub fn set_pull_translation_gain(&mut self, gain: f32) {
        self.pull_translation_gain = gain;
    }

    pub fn set_spring_params(&mut self, params: SpringParams) {
        self.spring = params;
    }

    /// Create the controller for one edge of a surface scrolling along `axis`
    pub fn create_controller(&self, axis: Axis, edge: Edge) -> EdgeEffectController {
        self.create_controller_with(axis, edge)
    }

    /// Create a controller driven by a custom spring implementation
    pub fn create_controller_with<A: Spring>(&self, axis: Axis, edge: Edge) -> EdgeEffectController<A> {
        tracing::debug!(%axis, %edge, "Creating edge effect");
        EdgeEffectController::new(
            axis,
            edge,
            self.fling_translation_gain,
            self.pull_translation_gain,
            self.spring,
        )
    }

    /// Create a controller from the host's raw orientation and edge direction values
    pub fn create_controller_raw(&self, orientation: i32, direction: i32) -> EdgeEffectController {
        self.create_controller(Axis::from_orientation(orientation), Edge::from_direction(direction))
    }

    /// Create the controllers for both edges of `axis`
    pub fn create_edge_effects(&self, axis: Axis) -> EdgeEffects {
        let (start, end) = axis.edges();
        EdgeEffects::new(
            axis,
            self.create_controller(axis, start),
            self.create_controller(axis, end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DampingSetting, StiffnessSetting};
    use crate::overscroll::direction::{DIRECTION_BOTTOM, ORIENTATION_HORIZONTAL};
    use crate::overscroll::spring::{DAMPING_RATIO_MEDIUM_BOUNCY, STIFFNESS_LOW};

    #[test]
    fn test_default_gains() {
        let factory = OverscrollEffectFactory::default();
        assert_eq!(factory.fling_translation_gain(), 0.5);
        assert_eq!(factory.pull_translation_gain(), 0.1);
        assert_eq!(factory.spring_params().damping_ratio, DAMPING_RATIO_MEDIUM_BOUNCY);
        assert_eq!(factory.spring_params().stiffness, STIFFNESS_LOW);
    }

    #[test]
    fn test_controller_copies_gains() {
        let mut factory = OverscrollEffectFactory::new(0.3, 0.2);
        let early = factory.create_controller(Axis::Vertical, Edge::Top);

        factory.set_fling_translation_gain(0.9);
        factory.set_pull_translation_gain(0.7);
        let late = factory.create_controller(Axis::Vertical, Edge::Top);

        assert_eq!(early.fling_translation_gain(), 0.3);
        assert_eq!(early.pull_translation_gain(), 0.2);
        assert_eq!(late.fling_translation_gain(), 0.9);
        assert_eq!(late.pull_translation_gain(), 0.7);
    }

    #[test]
    fn test_from_config() {
        let config = OverscrollConfig {
            fling_translation: 0.8,
            overscroll_translation: 0.05,
            damping_ratio: DampingSetting::NoBouncy,
            stiffness: StiffnessSetting::Custom(640.0),
            min_visible_change: 0.5,
        };
        let factory = OverscrollEffectFactory::from_config(&config);
        let effect = factory.create_controller(Axis::Horizontal, Edge::Left);

        assert_eq!(effect.fling_translation_gain(), 0.8);
        assert_eq!(effect.pull_translation_gain(), 0.05);
        assert_eq!(effect.spring_params().damping_ratio, 1.0);
        assert_eq!(effect.spring_params().stiffness, 640.0);
        assert_eq!(effect.spring_params().min_visible_change, 0.5);
    }

    #[test]
    fn test_raw_construction() {
        let factory = OverscrollEffectFactory::default();

        let effect = factory.create_controller_raw(ORIENTATION_HORIZONTAL, DIRECTION_BOTTOM);
        assert_eq!(effect.axis(), Axis::Horizontal);
        assert_eq!(effect.edge(), Edge::Bottom);

        let fallback = factory.create_controller_raw(99, 99);
        assert_eq!(fallback.axis(), Axis::Vertical);
        assert_eq!(fallback.edge(), Edge::Top);
    }

    #[test]
    fn test_edge_effects_for_axis() {
        let factory = OverscrollEffectFactory::default();
        let effects = factory.create_edge_effects(Axis::Horizontal);
        assert_eq!(effects.start().edge(), Edge::Left);
        assert_eq!(effects.end().edge(), Edge::Right);
    }
}
