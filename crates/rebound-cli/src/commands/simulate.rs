use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use rebound_core::overscroll::timing::tick_duration;
use rebound_core::overscroll::{
    Axis, Edge, EdgeEffectController, OverscrollEffectFactory, Phase, Spring, Surface, SurfaceState,
};
use rebound_core::AppConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AxisArg {
    Horizontal,
    Vertical,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Horizontal => Axis::Horizontal,
            AxisArg::Vertical => Axis::Vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EdgeArg {
    Left,
    Top,
    Right,
    Bottom,
}

impl From<EdgeArg> for Edge {
    fn from(arg: EdgeArg) -> Self {
        match arg {
            EdgeArg::Left => Edge::Left,
            EdgeArg::Top => Edge::Top,
            EdgeArg::Right => Edge::Right,
            EdgeArg::Bottom => Edge::Bottom,
        }
    }
}

/// Scripted pull/release/absorb run against an in-memory surface
#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Scroll axis of the surface
    #[arg(long, value_enum, default_value = "vertical")]
    pub axis: AxisArg,
    /// Edge being overscrolled
    #[arg(long, value_enum, default_value = "bottom")]
    pub edge: EdgeArg,
    /// Surface width
    #[arg(long, default_value_t = 1080.0)]
    pub width: f32,
    /// Surface height
    #[arg(long, default_value_t = 1920.0)]
    pub height: f32,
    /// Pull by this fraction of the extent (repeatable)
    #[arg(long = "pull")]
    pub pulls: Vec<f32>,
    /// Release the drag after the pulls
    #[arg(long)]
    pub release: bool,
    /// Absorb a fling with this velocity after the pulls
    #[arg(long, allow_negative_numbers = true)]
    pub absorb: Option<f32>,
    /// Override the fling gain from the config
    #[arg(long)]
    pub fling_gain: Option<f32>,
    /// Override the pull gain from the config
    #[arg(long)]
    pub pull_gain: Option<f32>,
    /// Simulation frame rate
    #[arg(long, default_value_t = 60)]
    pub fps: u32,
    /// Stop after this many frames even if not settled
    #[arg(long, default_value_t = 600)]
    pub max_frames: usize,
    /// Print one JSON object per frame
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FrameSample {
    frame: usize,
    time_ms: f64,
    translation: f32,
    velocity: f32,
    phase: &'static str,
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Rest => "rest",
        Phase::Pulling => "pulling",
        Phase::Springing => "springing",
    }
}

pub fn run(config: &AppConfig, args: &SimulateArgs) -> Result<()> {
    if args.pulls.is_empty() && !args.release && args.absorb.is_none() {
        bail!("Nothing to simulate. Pass --pull, --release and/or --absorb.");
    }

    let mut factory = OverscrollEffectFactory::from_config(&config.overscroll);
    if let Some(gain) = args.fling_gain {
        factory.set_fling_translation_gain(gain);
    }
    if let Some(gain) = args.pull_gain {
        factory.set_pull_translation_gain(gain);
    }

    let axis = Axis::from(args.axis);
    let edge = Edge::from(args.edge);
    let mut effect = factory.create_controller(axis, edge);
    let mut surface = SurfaceState::new(args.width, args.height);

    for delta in &args.pulls {
        effect.on_pull(&mut surface, *delta);
    }
    if args.release {
        effect.on_release(&surface);
    }
    if let Some(velocity) = args.absorb {
        effect.on_absorb(&surface, velocity);
    }

    if !args.json {
        println!(
            "{} edge of a {} surface ({}x{}), sign {:+}",
            edge,
            axis,
            args.width,
            args.height,
            effect.sign().as_f32()
        );
        if let Some(spring) = effect.active_spring() {
            println!(
                "spring: start {:.3} velocity {:.3} -> target {:.1}\n",
                spring.value(),
                spring.start_velocity(),
                spring.target()
            );
        }
    }

    let dt = tick_duration(args.fps);
    let mut last = sample(0, dt, &surface, axis, &effect);
    emit(args.json, &last)?;

    while !effect.is_settled() && last.frame < args.max_frames {
        effect.advance(&mut surface, dt);
        last = sample(last.frame + 1, dt, &surface, axis, &effect);
        emit(args.json, &last)?;
    }

    if !args.json {
        if effect.is_settled() {
            println!("\nSettled after {} frames ({:.0} ms).", last.frame, last.time_ms);
        } else {
            println!("\nStill moving after {} frames.", last.frame);
        }
    }

    Ok(())
}

fn sample(
    frame: usize,
    dt: Duration,
    surface: &SurfaceState,
    axis: Axis,
    effect: &EdgeEffectController,
) -> FrameSample {
    FrameSample {
        frame,
        time_ms: dt.as_secs_f64() * 1000.0 * frame as f64,
        translation: surface.translation(axis),
        velocity: effect.active_spring().map_or(0.0, |spring| spring.velocity()),
        phase: phase_name(effect.phase()),
    }
}

fn emit(json: bool, sample: &FrameSample) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(sample)?);
    } else {
        println!(
            "{:>4}  {:>8.1} ms  {:>+10.3}  v={:>+10.3}  {}",
            sample.frame, sample.time_ms, sample.translation, sample.velocity, sample.phase
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SimulateArgs {
        SimulateArgs {
            axis: AxisArg::Vertical,
            edge: EdgeArg::Bottom,
            width: 1080.0,
            height: 1920.0,
            pulls: Vec::new(),
            release: false,
            absorb: None,
            fling_gain: None,
            pull_gain: None,
            fps: 60,
            max_frames: 600,
            json: false,
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_sample_time_for_long_runs() {
        let effect = OverscrollEffectFactory::default().create_controller(Axis::Vertical, Edge::Top);
        let surface = SurfaceState::new(100.0, 100.0);
        let frame = u32::MAX as usize + 10;

        let sample = sample(frame, Duration::from_millis(16), &surface, Axis::Vertical, &effect);

        assert_eq!(sample.frame, frame);
        assert!((sample.time_ms - 16.0 * frame as f64).abs() < 1.0);
        assert_eq!(sample.phase, "rest");
    }

    #[test]
    fn test_empty_script_is_rejected() {
        assert!(run(&AppConfig::default(), &args()).is_err());
    }

    #[test]
    fn test_scripted_pull_runs() {
        let mut args = args();
        args.pulls = vec![0.01, 0.01];
        args.release = true;
        args.json = true;
        assert!(run(&AppConfig::default(), &args).is_ok());
    }
}
