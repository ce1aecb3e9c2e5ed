//! Spawn placement and launch velocities.
//!
//! Stateless: every random draw comes from the injected `rng`, so a seeded
//! RNG reproduces the same spawn sequence.

use glam::Vec2;
use rand::Rng;

use crate::entities::Motion;

pub const ENEMY_BASE_SPEED: f32 = 100.0;
pub const ENEMY_SPEED_JITTER: f32 = 50.0;
pub const ENEMY_DRIFT_MIN: f32 = 20.0;
pub const ENEMY_DRIFT_MAX: f32 = 50.0;

/// Projectiles always travel straight up at this speed.
pub const PROJECTILE_SPEED: f32 = 500.0;

/// A fresh enemy on the top edge, falling with a random sideways drift.
pub fn spawn_enemy(playfield_width: f32, rng: &mut impl Rng) -> Motion {
    let x = rng.gen_range(0.0..playfield_width);
    let vy = ENEMY_BASE_SPEED + rng.gen_range(-ENEMY_SPEED_JITTER..ENEMY_SPEED_JITTER);
    let sign = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
    let vx = sign * rng.gen_range(ENEMY_DRIFT_MIN..ENEMY_DRIFT_MAX);
    Motion {
        position: Vec2::new(x, 0.0),
        velocity: Vec2::new(vx, vy),
    }
}

pub fn fire_projectile(origin_x: f32, origin_y: f32) -> Motion {
    Motion {
        position: Vec2::new(origin_x, origin_y),
        velocity: Vec2::new(0.0, -PROJECTILE_SPEED),
    }
}
