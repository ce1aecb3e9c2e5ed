//! Game entity types: plain data, no frame logic.

use glam::Vec2;

use crate::host::EntityRef;
use crate::pool::SlotId;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Where never-used slots sit until their first spawn.
pub const OFFSCREEN: Vec2 = Vec2::new(-100.0, -100.0);

/// Distance of the player's start position above the bottom edge.
pub const PLAYER_START_OFFSET: f32 = 100.0;

pub const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 40.0);
pub const ENEMY_SIZE: Vec2 = Vec2::new(40.0, 40.0);
pub const PROJECTILE_SIZE: Vec2 = Vec2::new(8.0, 24.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Center-bottom spawn point of the player.
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - PLAYER_START_OFFSET)
    }
}

/// Axis-aligned box centred on `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Aabb { center, half: size / 2.0 }
    }

    /// Penetration depth on each axis; both components are positive only
    /// when the boxes overlap.  Touching edges do not count.
    pub fn penetration(&self, other: &Aabb) -> Vec2 {
        self.half + other.half - (self.center - other.center).abs()
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        let depth = self.penetration(other);
        depth.x > 0.0 && depth.y > 0.0
    }
}

// ── Pooled entities ──────────────────────────────────────────────────────────

/// Placement produced by the motion policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entity {
    pub position: Vec2,
    pub velocity: Vec2,
    pub active: bool,
}

impl Entity {
    pub fn parked() -> Self {
        Entity {
            position: OFFSCREEN,
            velocity: Vec2::ZERO,
            active: false,
        }
    }

    pub fn place(&mut self, motion: Motion) {
        self.position = motion.position;
        self.velocity = motion.velocity;
    }

    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

/// What the bounds sweep does with an entity that left the playfield.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Return the slot to the pool.
    Release,
    /// Put the entity back at the top with a fresh random motion.
    Respawn,
}

/// Per-kind behaviour of a pooled entity.
pub trait PoolKind {
    const NAME: &'static str;
    const SIZE: Vec2;
    const ON_EXIT: ExitPolicy;

    fn is_out_of_bounds(position: Vec2, field: &Playfield) -> bool;

    fn entity_ref(slot: SlotId) -> EntityRef;
}

#[derive(Clone, Copy, Debug)]
pub struct Enemy;

#[derive(Clone, Copy, Debug)]
pub struct Projectile;

impl PoolKind for Enemy {
    const NAME: &'static str = "enemy pool";
    const SIZE: Vec2 = ENEMY_SIZE;
    const ON_EXIT: ExitPolicy = ExitPolicy::Respawn;

    // The top edge is where enemies spawn, so it never counts as an exit.
    // Written as "not inside" so a NaN coordinate counts as out.
    fn is_out_of_bounds(position: Vec2, field: &Playfield) -> bool {
        !(position.y <= field.height && position.x >= 0.0 && position.x <= field.width)
    }

    fn entity_ref(slot: SlotId) -> EntityRef {
        EntityRef::Enemy(slot)
    }
}

impl PoolKind for Projectile {
    const NAME: &'static str = "projectile pool";
    const SIZE: Vec2 = PROJECTILE_SIZE;
    const ON_EXIT: ExitPolicy = ExitPolicy::Release;

    fn is_out_of_bounds(position: Vec2, field: &Playfield) -> bool {
        !(position.y >= 0.0 && position.y <= field.height)
    }

    fn entity_ref(slot: SlotId) -> EntityRef {
        EntityRef::Projectile(slot)
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    /// False once the run is over; a dead player is neither drawn nor hit.
    pub alive: bool,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Player {
            position,
            velocity: Vec2::ZERO,
            alive: true,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, PLAYER_SIZE)
    }

    /// Keep the whole hull inside the playfield.
    pub fn clamp_to(&mut self, field: &Playfield) {
        let half = PLAYER_SIZE / 2.0;
        let max = Vec2::new(field.width, field.height) - half;
        self.position = self.position.clamp(half, max.max(half));
    }
}

// ── Score keeping ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    pub lives: i32,
    pub game_over: bool,
}

impl GameState {
    pub fn new(lives: i32) -> Self {
        GameState {
            score: 0,
            lives,
            game_over: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over,
}
