pub mod config;
pub mod error;
pub mod overscroll;

pub use config::{AppConfig, DampingSetting, OverscrollConfig, StiffnessSetting};
pub use error::{Error, Result};
pub use overscroll::{
    resolve_sign, Axis, Edge, EdgeEffectController, EdgeEffects, OverscrollEffectFactory, Phase,
    Sign, Spring, SpringAnimation, Surface, SurfaceState,
};
