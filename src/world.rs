//! The single owned aggregate a frame mutates.

use rand::Rng;
use tracing::info;

use crate::config::GameConfig;
use crate::entities::{Enemy, GameState, Playfield, Player, PoolKind, Projectile};
use crate::error::ConfigError;
use crate::host::{EntityRef, HudLabel, Render};
use crate::motion::spawn_enemy;
use crate::pool::{EntityPool, SlotId};

#[derive(Clone, Debug)]
pub struct World {
    pub config: GameConfig,
    pub field: Playfield,
    pub player: Player,
    pub enemies: EntityPool<Enemy>,
    pub projectiles: EntityPool<Projectile>,
    pub state: GameState,
}

impl World {
    /// Validate `config`, allocate both pools and fill the enemy pool.
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = Playfield {
            width: config.playfield_width,
            height: config.playfield_height,
        };
        let mut world = World {
            player: Player::new(field.player_start()),
            enemies: EntityPool::new(config.enemy_pool_size)?,
            projectiles: EntityPool::new(config.projectile_pool_size)?,
            state: GameState::new(config.starting_lives),
            field,
            config,
        };

        while let Some(slot) = world.enemies.acquire() {
            world.respawn_enemy(slot, rng);
        }

        info!(
            width = world.field.width,
            height = world.field.height,
            enemies = world.enemies.capacity(),
            projectiles = world.projectiles.capacity(),
            lives = world.state.lives,
            "world created"
        );
        Ok(world)
    }

    pub fn respawn_enemy(&mut self, slot: SlotId, rng: &mut impl Rng) {
        let width = self.field.width;
        if let Some(enemy) = self.enemies.get_mut(slot) {
            enemy.place(spawn_enemy(width, rng));
        }
    }

    pub fn respawn_all_enemies(&mut self, rng: &mut impl Rng) {
        let width = self.field.width;
        self.enemies
            .for_each_active(|_, enemy| enemy.place(spawn_enemy(width, rng)));
    }

    pub fn publish_hud(&self, render: &mut impl Render) {
        render.set_text(HudLabel::Score, &format!("Score: {}", self.state.score));
        render.set_text(HudLabel::Lives, &format!("Lives: {}", self.state.lives));
    }

    /// Push every visual's current position and visibility to the renderer.
    pub fn sync_visuals(&self, render: &mut impl Render) {
        render.set_visible(EntityRef::Player, self.player.alive);
        if self.player.alive {
            let p = self.player.position;
            render.set_position(EntityRef::Player, p.x, p.y);
        }
        sync_pool(&self.enemies, render);
        sync_pool(&self.projectiles, render);
    }
}

fn sync_pool<K: PoolKind>(pool: &EntityPool<K>, render: &mut impl Render) {
    for (slot, entity) in pool.iter() {
        let r = K::entity_ref(slot);
        render.set_visible(r, entity.active);
        if entity.active {
            render.set_position(r, entity.position.x, entity.position.y);
        }
    }
}
