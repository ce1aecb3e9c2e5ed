//! Run configuration.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to override.  `validate` is the single gate every construction path goes
//! through; a bad value is reported before any slot is allocated.

use std::path::Path;

use serde::Deserialize;

use crate::entities::{Enemy, PoolKind, Projectile};
use crate::error::ConfigError;

/// Whether a colliding pair only reports contact or also pushes the bodies
/// apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionMode {
    /// Detection only.
    Overlap,
    /// Detection plus a separation impulse on the player.
    Collider,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub enemy_pool_size: usize,
    pub projectile_pool_size: usize,
    pub starting_lives: i32,
    pub player_speed: f32,
    /// How many bursts a player hit emits at the player's position.
    pub player_hit_bursts: u32,
    /// Particles per burst.
    pub burst_particles: u32,
    pub projectile_enemy_mode: CollisionMode,
    pub player_enemy_mode: CollisionMode,
    /// Restitution applied by `CollisionMode::Collider`.
    pub player_bounce: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            playfield_width: 600.0,
            playfield_height: 800.0,
            enemy_pool_size: 20,
            projectile_pool_size: 20,
            starting_lives: 3,
            player_speed: 200.0,
            player_hit_bursts: 3,
            burst_particles: 40,
            projectile_enemy_mode: CollisionMode::Overlap,
            player_enemy_mode: CollisionMode::Collider,
            player_bounce: 0.2,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width", self.playfield_width),
            ("height", self.playfield_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        if self.enemy_pool_size == 0 {
            return Err(ConfigError::EmptyPool { name: Enemy::NAME });
        }
        if self.projectile_pool_size == 0 {
            return Err(ConfigError::EmptyPool { name: Projectile::NAME });
        }
        if self.starting_lives <= 0 {
            return Err(ConfigError::NoLives(self.starting_lives));
        }
        for (name, value) in [
            ("player speed", self.player_speed),
            ("player bounce", self.player_bounce),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidSpeed { name, value });
            }
        }
        Ok(())
    }
}
