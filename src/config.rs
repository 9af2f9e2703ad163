//! Gameplay tuning values
//!
//! The arcade original kept these as ambient globals; here they are one
//! immutable struct handed to [`crate::sim::Wave`] construction, so tests and
//! alternate balances can swap the whole tuning at once.

use serde::{Deserialize, Serialize};

use crate::sim::AsteroidSize;

/// Immutable tuning for one wave.
///
/// All distances are in play-field pixels, all speeds in pixels per frame,
/// and all rates in frames. The simulation advances by fixed per-frame
/// increments, so none of these are scaled by wall-clock time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Play rectangle width
    pub width: f32,
    /// Play rectangle height
    pub height: f32,
    /// Margin beyond the play rectangle before toroidal wrap triggers
    pub dead_zone: f32,

    /// Ship collision radius; bullets spawn this far ahead of the ship center
    pub ship_radius: f32,
    /// Speed added along the facing per thrust frame
    pub ship_impulse: f32,
    /// Hard cap on ship speed
    pub ship_max_speed: f32,
    /// Degrees turned per frame while a turn key is held
    pub ship_turn_rate: f32,
    /// Lives at wave start
    pub ship_lives: u32,

    /// Bullet collision radius
    pub bullet_radius: f32,
    /// Fixed bullet speed
    pub bullet_speed: f32,
    /// Frames that must elapse between shots
    pub fire_rate_frames: u32,

    /// Small asteroid radius
    pub small_radius: f32,
    /// Medium asteroid radius
    pub medium_radius: f32,
    /// Large asteroid radius
    pub large_radius: f32,
    /// Small asteroid cruise speed
    pub small_speed: f32,
    /// Medium asteroid cruise speed
    pub medium_speed: f32,
    /// Large asteroid cruise speed
    pub large_speed: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 700.0,
            dead_zone: 50.0,

            ship_radius: 26.0,
            ship_impulse: 0.5,
            ship_max_speed: 8.0,
            ship_turn_rate: 5.0,
            ship_lives: 3,

            bullet_radius: 5.0,
            bullet_speed: 10.0,
            fire_rate_frames: 10,

            small_radius: 20.0,
            medium_radius: 40.0,
            large_radius: 80.0,
            small_speed: 5.0,
            medium_speed: 4.0,
            large_speed: 3.0,
        }
    }
}

impl WaveConfig {
    /// Collision radius for an asteroid size class
    pub fn radius_of(&self, size: AsteroidSize) -> f32 {
        match size {
            AsteroidSize::Small => self.small_radius,
            AsteroidSize::Medium => self.medium_radius,
            AsteroidSize::Large => self.large_radius,
        }
    }

    /// Cruise speed for an asteroid size class
    pub fn speed_of(&self, size: AsteroidSize) -> f32 {
        match size {
            AsteroidSize::Small => self.small_speed,
            AsteroidSize::Medium => self.medium_speed,
            AsteroidSize::Large => self.large_speed,
        }
    }
}
