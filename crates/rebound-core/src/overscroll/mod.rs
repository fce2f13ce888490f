//! Overscroll bounce effect for scrollable surfaces
//!
//! When a surface is dragged past its content bounds it is translated in the
//! pull direction, and springs back to rest with a damped oscillation once the
//! drag is released or a fling hits the edge.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `direction` - Axis/edge types and the pure sign table
//! - `surface` - The host surface boundary (extent and translation)
//! - `spring` - Closed-form damped harmonic oscillator
//! - `timing` - Frame delta utilities
//!
//! ## L3 Molecular Layer
//! - `animation` - Spring lifecycle (start, advance, cancel, stopped)
//! - `controller` - Per-edge state machine reacting to pull/release/absorb
//! - `factory` - Builds controllers carrying a copy of the gain coefficients
//! - `edges` - Both controllers of one scroll axis
//!
//! # Usage
//!
//! ```ignore
//! use rebound_core::overscroll::{Axis, Edge, OverscrollEffectFactory, SurfaceState};
//!
//! let factory = OverscrollEffectFactory::default();
//! let mut bottom = factory.create_controller(Axis::Vertical, Edge::Bottom);
//! let mut surface = SurfaceState::new(1000.0, 2000.0);
//!
//! // Host gesture dispatcher
//! bottom.on_pull(&mut surface, 0.01);
//! bottom.on_release(&surface);
//!
//! // Host animation driver, once per frame
//! while bottom.advance(&mut surface, frame_delta) {}
//! ```

// L4 Atomic Layer
pub mod direction;
pub mod spring;
pub mod surface;
pub mod timing;

// L3 Molecular Layer
pub mod animation;
pub mod controller;
pub mod edges;
pub mod factory;

pub use animation::{Spring, SpringAnimation};
pub use controller::{EdgeEffectController, Phase};
pub use direction::{resolve_sign, Axis, Edge, Sign};
pub use edges::EdgeEffects;
pub use factory::OverscrollEffectFactory;
pub use spring::SpringParams;
pub use surface::{Surface, SurfaceState};
