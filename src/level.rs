//! Level descriptors
//!
//! A wave is seeded from a small JSON document: the ship's spawn point and
//! orientation plus one size/position/direction triple per starting asteroid.
//! Parsing is the fail-fast surface for bad level data - an unknown size
//! class or missing field produces a [`LevelError`] and no partial wave.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::AsteroidSize;

/// Errors from level descriptor parsing or validation.
#[derive(Debug, Error)]
pub enum LevelError {
    /// Malformed JSON, a missing field, or an unknown asteroid size class.
    #[error("malformed level descriptor: {0}")]
    Parse(#[from] serde_json::Error),
    /// A hand-built descriptor carried a NaN or infinite coordinate.
    #[error("non-finite value in level field `{field}`")]
    NonFinite { field: &'static str },
}

/// Ship spawn point and orientation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShipSpawn {
    pub position: [f32; 2],
    /// Initial orientation in degrees
    pub angle: f32,
}

impl ShipSpawn {
    pub fn position_vec(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }
}

/// One asteroid's starting size, position, and travel direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AsteroidSpawn {
    pub size: AsteroidSize,
    pub position: [f32; 2],
    /// Travel direction; a zero vector spawns the asteroid stationary
    pub direction: [f32; 2],
}

impl AsteroidSpawn {
    pub fn position_vec(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }

    pub fn direction_vec(&self) -> Vec2 {
        Vec2::from_array(self.direction)
    }
}

/// Initial contents of one wave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDescriptor {
    pub ship: ShipSpawn,
    pub asteroids: Vec<AsteroidSpawn>,
}

impl LevelDescriptor {
    /// Parse and validate a JSON level document.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Self = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Reject non-finite coordinates.
    ///
    /// JSON cannot encode NaN or infinity, so [`from_json`](Self::from_json)
    /// never trips this; it guards descriptors assembled in code.
    pub fn validate(&self) -> Result<(), LevelError> {
        let finite2 = |v: [f32; 2]| v[0].is_finite() && v[1].is_finite();
        if !finite2(self.ship.position) {
            return Err(LevelError::NonFinite { field: "ship.position" });
        }
        if !self.ship.angle.is_finite() {
            return Err(LevelError::NonFinite { field: "ship.angle" });
        }
        for spawn in &self.asteroids {
            if !finite2(spawn.position) {
                return Err(LevelError::NonFinite { field: "asteroids.position" });
            }
            if !finite2(spawn.direction) {
                return Err(LevelError::NonFinite { field: "asteroids.direction" });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_level() {
        let json = r#"{
            "ship": {"position": [400.0, 350.0], "angle": 90.0},
            "asteroids": [
                {"size": "large", "position": [100.0, 100.0], "direction": [1.0, -1.0]},
                {"size": "small", "position": [700.0, 600.0], "direction": [0.0, 0.0]}
            ]
        }"#;

        let level = LevelDescriptor::from_json(json).unwrap();
        assert_eq!(level.asteroids.len(), 2);
        assert_eq!(level.asteroids[0].size, AsteroidSize::Large);
        assert_eq!(level.asteroids[1].size, AsteroidSize::Small);
        assert_eq!(level.ship.position_vec().x, 400.0);
    }

    #[test]
    fn test_unknown_size_class_is_an_error() {
        let json = r#"{
            "ship": {"position": [0.0, 0.0], "angle": 0.0},
            "asteroids": [
                {"size": "colossal", "position": [0.0, 0.0], "direction": [1.0, 0.0]}
            ]
        }"#;

        assert!(matches!(
            LevelDescriptor::from_json(json),
            Err(LevelError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        // No ship angle
        let json = r#"{
            "ship": {"position": [0.0, 0.0]},
            "asteroids": []
        }"#;

        assert!(LevelDescriptor::from_json(json).is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut level = LevelDescriptor {
            ship: ShipSpawn { position: [0.0, 0.0], angle: 0.0 },
            asteroids: vec![AsteroidSpawn {
                size: AsteroidSize::Medium,
                position: [10.0, 10.0],
                direction: [1.0, 0.0],
            }],
        };
        assert!(level.validate().is_ok());

        level.asteroids[0].direction = [f32::NAN, 0.0];
        assert!(matches!(
            level.validate(),
            Err(LevelError::NonFinite { field: "asteroids.direction" })
        ));
    }
}
