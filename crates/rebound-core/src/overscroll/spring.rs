//! L4 Atomic Layer: Damped harmonic oscillator
//!
//! Unit-mass spring evaluated in closed form, so a step of any length lands
//! exactly on the analytic trajectory. Covers the under-, critically- and
//! over-damped regimes.

/// Very bouncy, several visible oscillations
pub const DAMPING_RATIO_HIGH_BOUNCY: f32 = 0.2;
/// One clear overshoot before settling
pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
/// Critically damped
pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

pub const STIFFNESS_HIGH: f32 = 10_000.0;
pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
pub const STIFFNESS_LOW: f32 = 200.0;
pub const STIFFNESS_VERY_LOW: f32 = 50.0;

/// Value threshold as a fraction of the smallest visible change
const THRESHOLD_MULTIPLIER: f64 = 0.75;
/// Velocity threshold relative to the value threshold (one visible change per 16ms frame)
const VELOCITY_THRESHOLD_MULTIPLIER: f64 = 1000.0 / 16.0;

/// Spring force configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Rest position the spring pulls toward
    pub final_position: f32,
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Smallest change of value the host can display
    pub min_visible_change: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            final_position: 0.0,
            damping_ratio: DAMPING_RATIO_MEDIUM_BOUNCY,
            stiffness: STIFFNESS_LOW,
            min_visible_change: 1.0,
        }
    }
}

impl SpringParams {
    pub fn new(final_position: f32, damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            final_position,
            damping_ratio,
            stiffness,
            ..Default::default()
        }
    }

    pub fn with_min_visible_change(mut self, min_visible_change: f32) -> Self {
        self.min_visible_change = min_visible_change;
        self
    }

    /// Displacement under which the spring counts as settled
    #[inline]
    pub fn value_threshold(&self) -> f64 {
        (self.min_visible_change as f64).abs() * THRESHOLD_MULTIPLIER
    }

    /// Speed under which the spring counts as settled
    #[inline]
    pub fn velocity_threshold(&self) -> f64 {
        self.value_threshold() * VELOCITY_THRESHOLD_MULTIPLIER
    }

    /// Whether `(value, velocity)` is close enough to rest to stop animating
    pub fn is_at_equilibrium(&self, value: f32, velocity: f32) -> bool {
        (velocity as f64).abs() < self.velocity_threshold()
            && ((value - self.final_position) as f64).abs() < self.value_threshold()
    }

    /// Advance `(value, velocity)` by `dt` seconds
    pub fn step(&self, value: f32, velocity: f32, dt: f64) -> (f32, f32) {
        let stiffness = (self.stiffness as f64).max(f64::EPSILON);
        let zeta = (self.damping_ratio as f64).max(0.0);
        let omega = stiffness.sqrt();

        let x0 = (value - self.final_position) as f64;
        let v0 = velocity as f64;
        let t = dt.max(0.0);

        let (x, v) = if zeta > 1.0 {
            // Overdamped: two real decay rates
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let gamma_plus = -zeta * omega + root;
            let gamma_minus = -zeta * omega - root;
            let coeff_b = (gamma_minus * x0 - v0) / (gamma_minus - gamma_plus);
            let coeff_a = x0 - coeff_b;
            let e_minus = (gamma_minus * t).exp();
            let e_plus = (gamma_plus * t).exp();
            (
                coeff_a * e_minus + coeff_b * e_plus,
                coeff_a * gamma_minus * e_minus + coeff_b * gamma_plus * e_plus,
            )
        } else if zeta == 1.0 {
            // Critically damped
            let coeff_a = x0;
            let coeff_b = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let x = (coeff_a + coeff_b * t) * decay;
            (x, x * -omega + coeff_b * decay)
        } else {
            // Underdamped: decaying oscillation
            let damped_freq = omega * (1.0 - zeta * zeta).sqrt();
            let cos_coeff = x0;
            let sin_coeff = (zeta * omega * x0 + v0) / damped_freq;
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (damped_freq * t).sin_cos();
            let x = decay * (cos_coeff * cos + sin_coeff * sin);
            let v = x * -omega * zeta
                + decay * (-damped_freq * cos_coeff * sin + damped_freq * sin_coeff * cos);
            (x, v)
        };

        ((x as f32) + self.final_position, v as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(params: &SpringParams, mut value: f32, mut velocity: f32) -> (usize, f32) {
        let mut max_excursion = value.abs();
        for frame in 1..=2000 {
            (value, velocity) = params.step(value, velocity, 1.0 / 60.0);
            max_excursion = max_excursion.max(value.abs());
            if params.is_at_equilibrium(value, velocity) {
                return (frame, max_excursion);
            }
        }
        panic!("spring did not settle");
    }

    #[test]
    fn test_thresholds() {
        let params = SpringParams::default();
        assert!((params.value_threshold() - 0.75).abs() < 1e-9);
        assert!((params.velocity_threshold() - 46.875).abs() < 1e-9);
    }

    #[test]
    fn test_zero_step_is_identity() {
        let params = SpringParams::default();
        let (x, v) = params.step(-12.0, 30.0, 0.0);
        assert!((x + 12.0).abs() < 1e-5);
        assert!((v - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_rest_stays_at_rest() {
        let params = SpringParams::default();
        let (x, v) = params.step(0.0, 0.0, 0.5);
        assert_eq!(x, 0.0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_underdamped_overshoots() {
        let params = SpringParams::default();
        let mut value = -100.0_f32;
        let mut velocity = 0.0_f32;
        let mut crossed = false;
        for _ in 0..120 {
            (value, velocity) = params.step(value, velocity, 1.0 / 60.0);
            if value > 1.0 {
                crossed = true;
                break;
            }
        }
        assert!(crossed, "medium bouncy spring should overshoot the rest position");
    }

    #[test]
    fn test_no_bouncy_does_not_overshoot() {
        let params = SpringParams::new(0.0, DAMPING_RATIO_NO_BOUNCY, STIFFNESS_LOW);
        let mut value = -100.0_f32;
        let mut velocity = 0.0_f32;
        for _ in 0..600 {
            (value, velocity) = params.step(value, velocity, 1.0 / 60.0);
            assert!(value <= 1e-3);
        }
    }

    #[test]
    fn test_overdamped_settles() {
        let params = SpringParams::new(0.0, 2.0, STIFFNESS_MEDIUM);
        let (frames, _) = settle(&params, 50.0, 0.0);
        assert!(frames > 1);
    }

    #[test]
    fn test_stiffer_spring_settles_sooner() {
        let soft = SpringParams::new(0.0, DAMPING_RATIO_MEDIUM_BOUNCY, STIFFNESS_LOW);
        let stiff = SpringParams::new(0.0, DAMPING_RATIO_MEDIUM_BOUNCY, STIFFNESS_MEDIUM);
        let (soft_frames, _) = settle(&soft, 80.0, 0.0);
        let (stiff_frames, _) = settle(&stiff, 80.0, 0.0);
        assert!(stiff_frames < soft_frames);
    }

    #[test]
    fn test_split_steps_match_single_step() {
        let params = SpringParams::default();
        let (x1, v1) = params.step(40.0, -200.0, 0.1);
        let (mid_x, mid_v) = params.step(40.0, -200.0, 0.05);
        let (x2, v2) = params.step(mid_x, mid_v, 0.05);
        assert!((x1 - x2).abs() < 1e-3);
        assert!((v1 - v2).abs() < 1e-2);
    }

    #[test]
    fn test_nonzero_final_position() {
        let params = SpringParams::new(10.0, DAMPING_RATIO_NO_BOUNCY, STIFFNESS_HIGH);
        let (x, _) = params.step(0.0, 0.0, 1.0);
        assert!((x - 10.0).abs() < 1e-3);
    }
}
