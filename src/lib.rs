//! Planetoids - toroidal-plane arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, wave state)
//! - `level`: JSON level descriptors seeding a wave
//! - `config`: Explicit gameplay tuning values
//!
//! The crate is headless by design. Rendering, key polling, and the outer
//! menu state machine are external collaborators: once per frame they hand a
//! [`sim::FrameInput`] snapshot to [`sim::Wave::tick`] and read entity
//! positions back for drawing. Ship-loss bookkeeping (life decrement,
//! respawn timing, game over) is also theirs, driven through the wave's
//! queries and [`sim::Wave::respawn_ship`].

pub mod config;
pub mod level;
pub mod sim;

pub use config::WaveConfig;
pub use level::{LevelDescriptor, LevelError};
pub use sim::{FrameInput, Wave};

use glam::Vec2;

/// Unit facing vector for an orientation given in degrees
#[inline]
pub fn facing_from_degrees(deg: f32) -> Vec2 {
    Vec2::from_angle(deg.to_radians())
}

/// Rotate a vector by an angle in radians
#[inline]
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    Vec2::from_angle(radians).rotate(v)
}
