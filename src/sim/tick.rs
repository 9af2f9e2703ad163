//! Per-frame wave protocol
//!
//! One call to [`Wave::tick`] advances the wave by one logical frame in a
//! fixed order: ship control and motion, asteroid motion, firing, bullet
//! despawn, collision resolution, then a mark-then-compact cleanup. Nothing
//! here suspends or reaches outside the wave's own collections.

use super::collision::{circles_collide, fragment_asteroid};
use super::state::{Bullet, Wave, wrap_position};

/// Key states sampled once per frame by the input collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

impl Wave {
    /// Advance the wave by one frame.
    ///
    /// A terminal wave (no lives left and no asteroids to animate) is inert;
    /// the owner is expected to have torn it down by then.
    pub fn tick(&mut self, input: &FrameInput) {
        if self.lives == 0 && self.asteroids.is_empty() {
            return;
        }

        // 1. Ship control and motion.
        if let Some(ship) = self.ship.as_mut() {
            ship.handle_input(input, &self.config);
            ship.integrate();
            wrap_position(&mut ship.pos, &self.config);
        }

        // 2. Asteroid motion. Runs with or without a ship so the field keeps
        // drifting while the owner decides on a respawn.
        for asteroid in &mut self.asteroids {
            asteroid.integrate();
            wrap_position(&mut asteroid.pos, &self.config);
        }

        // 3. Firing and bullet motion. A fresh bullet integrates this same
        // frame.
        self.fire(input);

        // 4. Despawn bullets that left the extended bounds.
        let config = &self.config;
        self.bullets.retain(|bullet| !bullet.out_of_bounds(config));

        // 5. Collisions, then 6. compaction. Fragments are appended by the
        // resolve pass and never flagged, so they survive the retain.
        self.resolve_collisions();
        self.asteroids.retain(|asteroid| !asteroid.deleted);
        self.bullets.retain(|bullet| !bullet.deleted);
    }

    /// Spawn a bullet at the ship's nose when the fire key is held and the
    /// cooldown has elapsed, then advance every bullet.
    ///
    /// The cooldown counts up every frame whether or not a shot happens and
    /// resets only on a successful shot.
    fn fire(&mut self, input: &FrameInput) {
        if input.fire && self.fire_cooldown >= self.config.fire_rate_frames {
            if let Some(ship) = self.ship.as_ref() {
                self.bullets.push(Bullet::new(
                    ship.nose(self.config.ship_radius),
                    ship.facing,
                    self.config.bullet_speed,
                ));
                self.fire_cooldown = 0;
            }
        }
        self.fire_cooldown += 1;

        for bullet in &mut self.bullets {
            bullet.integrate();
        }
    }

    /// Single collision scan, asteroid-outer / bullet-inner.
    ///
    /// Fragments accumulate in a side buffer and are appended after the scan,
    /// so the pass never observes entities it spawned. The deleted guard
    /// keeps each asteroid to one fan-out even when several bullets overlap
    /// it in the same frame; later bullets pass through unharmed.
    fn resolve_collisions(&mut self) {
        let mut spawned = Vec::new();

        for asteroid in &mut self.asteroids {
            let radius = self.config.radius_of(asteroid.size);

            // Ship collision is terminal for the ship: flag the asteroid,
            // fan out along the ship's travel direction (its facing when it
            // sits still), and clear the ship. With the ship absent no
            // further ship tests run this frame.
            if let Some(ship) = self.ship.as_ref() {
                if circles_collide(asteroid.pos, radius, ship.pos, self.config.ship_radius) {
                    let impact = if ship.vel.length_squared() > 0.0 {
                        ship.vel
                    } else {
                        ship.facing
                    };
                    asteroid.deleted = true;
                    spawned.extend(fragment_asteroid(asteroid, impact, &self.config));
                    log::debug!("ship destroyed by {:?} asteroid", asteroid.size);
                    self.ship = None;
                }
            }

            for bullet in &mut self.bullets {
                if asteroid.deleted {
                    break;
                }
                if bullet.deleted {
                    continue;
                }
                if circles_collide(asteroid.pos, radius, bullet.pos, self.config.bullet_radius) {
                    asteroid.deleted = true;
                    bullet.deleted = true;
                    spawned.extend(fragment_asteroid(asteroid, bullet.vel, &self.config));
                }
            }
        }

        self.asteroids.extend(spawned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WaveConfig;
    use crate::level::{AsteroidSpawn, LevelDescriptor, ShipSpawn};
    use crate::sim::AsteroidSize;
    use glam::Vec2;

    fn level_with(asteroids: Vec<AsteroidSpawn>) -> LevelDescriptor {
        LevelDescriptor {
            ship: ShipSpawn {
                position: [400.0, 350.0],
                angle: 0.0,
            },
            asteroids,
        }
    }

    fn spawn(size: AsteroidSize, position: [f32; 2], direction: [f32; 2]) -> AsteroidSpawn {
        AsteroidSpawn {
            size,
            position,
            direction,
        }
    }

    /// Wait out the initial cooldown, then hold fire for exactly one frame.
    fn fire_one_bullet(wave: &mut Wave) {
        let frames = wave.config().fire_rate_frames;
        for _ in 0..frames {
            wave.tick(&FrameInput::default());
        }
        wave.tick(&FrameInput {
            fire: true,
            ..Default::default()
        });
    }

    #[test]
    fn test_fire_cooldown_cadence() {
        // Far-away stationary asteroid the bullets will never reach
        let level = level_with(vec![spawn(AsteroidSize::Large, [100.0, 100.0], [0.0, 0.0])]);
        let mut wave = Wave::new(&level, WaveConfig::default());

        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        // Cooldown starts at 0, so the first shot lands on frame 11, then
        // every fire_rate_frames after: frames 11, 21, 31.
        for _ in 0..31 {
            wave.tick(&fire);
        }
        assert_eq!(wave.bullets().len(), 3);
    }

    #[test]
    fn test_bullet_removed_after_leaving_bounds() {
        let level = level_with(vec![spawn(AsteroidSize::Large, [100.0, 100.0], [0.0, 0.0])]);
        let mut wave = Wave::new(&level, WaveConfig::default());

        fire_one_bullet(&mut wave);
        assert_eq!(wave.bullets().len(), 1);

        // Nose spawn at x=426 moving +10/frame; the extended bound sits at
        // x=850, so the bullet must be culled within 60 frames.
        for _ in 0..60 {
            wave.tick(&FrameInput::default());
        }
        assert!(wave.bullets().is_empty());
    }

    #[test]
    fn test_bullet_breaks_large_into_three_mediums() {
        let level = level_with(vec![spawn(AsteroidSize::Large, [620.0, 350.0], [0.0, 0.0])]);
        let config = WaveConfig::default();
        let mut wave = Wave::new(&level, config.clone());

        fire_one_bullet(&mut wave);
        assert_eq!(wave.bullets().len(), 1);

        let mut frames = 0;
        while wave.asteroids().len() == 1 && frames < 50 {
            wave.tick(&FrameInput::default());
            frames += 1;
        }

        // Parent replaced by three mediums, bullet consumed
        assert_eq!(wave.asteroids().len(), 3);
        assert!(wave.bullets().is_empty());
        assert!(!wave.is_won());
        assert!(
            wave.asteroids()
                .iter()
                .all(|a| a.size == AsteroidSize::Medium)
        );

        // The parent never moved, so each child sits exactly one medium
        // radius from (620, 350), fanned at 120° around the bullet direction.
        let r = config.medium_radius;
        let expected = [
            Vec2::new(620.0 + r, 350.0),
            Vec2::new(620.0 - 0.5 * r, 350.0 + 0.866_025_4 * r),
            Vec2::new(620.0 - 0.5 * r, 350.0 - 0.866_025_4 * r),
        ];
        for (child, want) in wave.asteroids().iter().zip(expected) {
            assert!(
                (child.pos - want).length() < 1e-2,
                "child at {:?}, wanted {:?}",
                child.pos,
                want
            );
        }
    }

    #[test]
    fn test_shooting_small_asteroid_wins() {
        let level = level_with(vec![spawn(AsteroidSize::Small, [620.0, 350.0], [0.0, 0.0])]);
        let mut wave = Wave::new(&level, WaveConfig::default());

        fire_one_bullet(&mut wave);
        for _ in 0..60 {
            wave.tick(&FrameInput::default());
            if wave.is_won() {
                break;
            }
        }
        // Smalls die without fragments
        assert!(wave.is_won());
        assert!(!wave.is_lost());
        assert!(wave.asteroids().is_empty());
    }

    #[test]
    fn test_ship_collision_clears_ship_and_fragments_asteroid() {
        // Large asteroid drifting straight at the stationary ship
        let level = level_with(vec![spawn(AsteroidSize::Large, [520.0, 350.0], [-1.0, 0.0])]);
        let mut wave = Wave::new(&level, WaveConfig::default());

        let mut frames = 0;
        while wave.ship().is_some() && frames < 60 {
            wave.tick(&FrameInput::default());
            frames += 1;
        }

        assert!(wave.ship().is_none());
        // Ship velocity was zero, so the fan-out used the facing as fallback
        assert_eq!(wave.asteroids().len(), 3);
        assert!(
            wave.asteroids()
                .iter()
                .all(|a| a.size == AsteroidSize::Medium)
        );

        // Lives are untouched until the owner acts
        assert_eq!(wave.lives(), 3);
        assert!(!wave.is_lost());
        assert!(!wave.is_won());

        wave.lose_life();
        wave.respawn_ship();
        assert!(wave.ship().is_some());
        assert_eq!(wave.lives(), 2);
    }

    #[test]
    fn test_asteroids_drift_while_ship_absent() {
        let level = level_with(vec![spawn(AsteroidSize::Medium, [100.0, 100.0], [1.0, 0.0])]);
        let mut wave = Wave::new(&level, WaveConfig::default());
        wave.ship = None;

        let before = wave.asteroids()[0].pos;
        // Fire key held, but with no ship there is nothing to shoot from
        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..20 {
            wave.tick(&fire);
        }

        assert!(wave.asteroids()[0].pos.x > before.x);
        assert!(wave.bullets().is_empty());
    }

    #[test]
    fn test_two_bullets_one_fragmentation() {
        let level = level_with(vec![spawn(AsteroidSize::Medium, [100.0, 100.0], [0.0, 0.0])]);
        let mut wave = Wave::new(&level, WaveConfig::default());

        // Two bullets that will both overlap the asteroid on the same frame
        wave.bullets.push(Bullet::new(
            Vec2::new(60.0, 100.0),
            Vec2::new(1.0, 0.0),
            10.0,
        ));
        wave.bullets.push(Bullet::new(
            Vec2::new(61.0, 100.0),
            Vec2::new(1.0, 0.0),
            10.0,
        ));

        wave.tick(&FrameInput::default());

        // One fan-out, and the second bullet passes through unharmed
        assert_eq!(wave.asteroids().len(), 3);
        assert_eq!(wave.bullets().len(), 1);
    }

    #[test]
    fn test_terminal_wave_is_inert() {
        let level = level_with(Vec::new());
        let mut wave = Wave::new(&level, WaveConfig::default());
        wave.ship = None;
        for _ in 0..3 {
            wave.lose_life();
        }
        assert!(wave.is_lost());

        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        wave.tick(&fire);
        assert_eq!(wave.fire_cooldown, 0);
        assert!(wave.bullets().is_empty());
    }

    #[test]
    fn test_won_wave_still_animates_ship() {
        let level = level_with(Vec::new());
        let mut wave = Wave::new(&level, WaveConfig::default());
        assert!(wave.is_won());

        let thrust = FrameInput {
            thrust: true,
            ..Default::default()
        };
        wave.tick(&thrust);
        let ship = wave.ship().unwrap();
        assert!(ship.vel.length() > 0.0);
        assert!(ship.pos.x > 400.0);
    }
}
