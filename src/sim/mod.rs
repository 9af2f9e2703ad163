//! Deterministic wave simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical frame per `tick` call, fixed per-frame increments
//! - Stable entity order (insertion order; fragments append at the back)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{circles_collide, fragment_asteroid};
pub use state::{Asteroid, AsteroidSize, Bullet, Ship, Wave, wrap_position};
pub use tick::FrameInput;
