//! Wave state and entity types
//!
//! Everything a renderer needs to read each frame lives here; the per-frame
//! mutation protocol lives in [`super::tick`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tick::FrameInput;
use crate::config::WaveConfig;
use crate::facing_from_degrees;
use crate::level::{LevelDescriptor, ShipSpawn};

/// Asteroid size ladder. Fragmentation steps one rung down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    /// The size this class breaks into, `None` for `Small`.
    pub fn child(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

/// Toroidal wrap for one position.
///
/// Once a coordinate leaves the play rectangle by more than the dead zone it
/// is translated one full extended span back, so the entity re-enters from
/// the opposite edge instead of teleporting to it. A position strictly inside
/// the extended rectangle is untouched.
pub fn wrap_position(pos: &mut Vec2, config: &WaveConfig) {
    let dz = config.dead_zone;
    let span_x = config.width + 2.0 * dz;
    let span_y = config.height + 2.0 * dz;
    if pos.x < -dz {
        pos.x += span_x;
    }
    if pos.x > config.width + dz {
        pos.x -= span_x;
    }
    if pos.y < -dz {
        pos.y += span_y;
    }
    if pos.y > config.height + dz {
        pos.y -= span_y;
    }
}

/// The player ship.
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    /// Orientation in degrees; unbounded, trig wraps it naturally
    pub angle: f32,
    /// Unit vector derived from `angle`, recomputed on every turn
    pub facing: Vec2,
    pub vel: Vec2,
}

impl Ship {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            angle,
            facing: facing_from_degrees(angle),
            vel: Vec2::ZERO,
        }
    }

    /// Turn by `delta` degrees and refresh the facing vector.
    pub fn turn(&mut self, delta: f32) {
        self.angle += delta;
        self.facing = facing_from_degrees(self.angle);
    }

    /// Add one frame of thrust along the facing.
    ///
    /// The speed cap clamps the magnitude of the combined vector, not the
    /// facing component, so a ship thrusting through a turn still curves.
    pub fn apply_impulse(&mut self, impulse: f32, max_speed: f32) {
        let v = self.vel + self.facing * impulse;
        if v.length() >= max_speed {
            self.vel = v.normalize_or_zero() * max_speed;
        } else {
            self.vel = v;
        }
    }

    /// Apply one frame of steering and thrust keys.
    ///
    /// Opposite turn keys cancel: the net turn delta is applied in one call.
    pub fn handle_input(&mut self, input: &FrameInput, config: &WaveConfig) {
        let mut delta = 0.0;
        if input.turn_left {
            delta += config.ship_turn_rate;
        }
        if input.turn_right {
            delta -= config.ship_turn_rate;
        }
        self.turn(delta);
        if input.thrust {
            self.apply_impulse(config.ship_impulse, config.ship_max_speed);
        }
    }

    /// Advance one fixed per-frame step.
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Nose position, where bullets spawn.
    pub fn nose(&self, ship_radius: f32) -> Vec2 {
        self.pos + self.facing * ship_radius
    }
}

/// A player bullet. Velocity is fixed at fire time and never changes.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub(crate) deleted: bool,
}

impl Bullet {
    /// Spawn at `pos` travelling along the unit `facing`.
    pub fn new(pos: Vec2, facing: Vec2, speed: f32) -> Self {
        Self {
            pos,
            vel: facing.normalize_or_zero() * speed,
            deleted: false,
        }
    }

    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// True once the bullet has left the play rectangle plus dead zone on
    /// either axis.
    pub fn out_of_bounds(&self, config: &WaveConfig) -> bool {
        let dz = config.dead_zone;
        self.pos.x < -dz
            || self.pos.x > config.width + dz
            || self.pos.y < -dz
            || self.pos.y > config.height + dz
    }
}

/// One asteroid. Radius and cruise speed are fixed per size class.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: AsteroidSize,
    pub(crate) deleted: bool,
}

impl Asteroid {
    /// Build an asteroid heading along `direction` at its class speed.
    ///
    /// A zero-length direction yields a stationary asteroid; normalization
    /// never divides by zero.
    pub fn new(size: AsteroidSize, pos: Vec2, direction: Vec2, config: &WaveConfig) -> Self {
        Self {
            pos,
            vel: direction.normalize_or_zero() * config.speed_of(size),
            size,
            deleted: false,
        }
    }

    /// Collision radius from the owning wave's tuning.
    pub fn radius(&self, config: &WaveConfig) -> f32 {
        config.radius_of(self.size)
    }

    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// One level instance: the ship, the asteroid population, live bullets, and
/// session bookkeeping (lives, fire cooldown).
///
/// The wave exclusively owns its entity collections. Accessors hand out
/// shared views only; all mutation happens inside [`Wave::tick`] and the
/// caller-driven life management below.
#[derive(Debug, Clone)]
pub struct Wave {
    pub(crate) config: WaveConfig,
    /// Retained spawn data so a lost life can recreate the ship
    pub(crate) spawn: ShipSpawn,
    pub(crate) ship: Option<Ship>,
    pub(crate) asteroids: Vec<Asteroid>,
    pub(crate) bullets: Vec<Bullet>,
    pub(crate) lives: u32,
    pub(crate) fire_cooldown: u32,
}

impl Wave {
    /// Build a wave from a parsed level descriptor.
    pub fn new(level: &LevelDescriptor, config: WaveConfig) -> Self {
        let asteroids: Vec<Asteroid> = level
            .asteroids
            .iter()
            .map(|spawn| {
                Asteroid::new(
                    spawn.size,
                    spawn.position_vec(),
                    spawn.direction_vec(),
                    &config,
                )
            })
            .collect();
        log::debug!(
            "wave start: {} asteroids, {} lives",
            asteroids.len(),
            config.ship_lives
        );
        Self {
            spawn: level.ship,
            ship: Some(Ship::new(level.ship.position_vec(), level.ship.angle)),
            asteroids,
            bullets: Vec::new(),
            lives: config.ship_lives,
            fire_cooldown: 0,
            config,
        }
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// The ship, absent between destruction and respawn.
    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Won once every asteroid is destroyed.
    pub fn is_won(&self) -> bool {
        self.asteroids.is_empty()
    }

    /// Lost once the ship is gone with no lives left.
    pub fn is_lost(&self) -> bool {
        self.lives == 0 && self.ship.is_none()
    }

    /// Deduct one life. Called by the owner after it observes a destroyed
    /// ship; the wave never deducts on its own.
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        log::debug!("life lost, {} remaining", self.lives);
    }

    /// Recreate the ship at the level's spawn point and orientation. No-op
    /// while a ship is present, so the owner controls respawn timing.
    pub fn respawn_ship(&mut self) {
        if self.ship.is_none() {
            self.ship = Some(Ship::new(self.spawn.position_vec(), self.spawn.angle));
        }
    }

    /// Retarget every asteroid at once. Debug and tooling hook.
    pub fn set_asteroid_velocities(&mut self, vel: Vec2) {
        for asteroid in &mut self.asteroids {
            asteroid.vel = vel;
        }
    }
}
