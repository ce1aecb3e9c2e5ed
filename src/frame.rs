//! One tick of the game, in a fixed order:
//! input → integration → bounds sweep → collision resolution → state check.

use rand::Rng;
use tracing::{info, trace};

use crate::collision;
use crate::config::GameConfig;
use crate::entities::GameStatus;
use crate::error::ConfigError;
use crate::host::{Feedback, HudLabel, Input, Sound};
use crate::motion::fire_projectile;
use crate::pool::SlotId;
use crate::sweep::sweep;
use crate::world::World;

/// What happened during a single tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Slot of the projectile fired this tick.
    pub fired: Option<SlotId>,
    /// Fire was pressed but every projectile slot was busy.
    pub dropped_shot: bool,
    /// (projectile, enemy) kills.
    pub kills: Vec<(SlotId, SlotId)>,
    pub player_hit: bool,
    /// Projectiles returned to the pool by the bounds sweep.
    pub released: Vec<SlotId>,
    /// Enemies put back on the top edge by the bounds sweep.
    pub respawned: Vec<SlotId>,
}

pub struct FrameController<R> {
    world: World,
    rng: R,
    status: GameStatus,
}

impl<R: Rng> FrameController<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        let world = World::new(config, &mut rng)?;
        Ok(FrameController {
            world,
            rng,
            status: GameStatus::Running,
        })
    }

    /// Publish the initial HUD and visuals.  Call once before the first tick.
    pub fn start(&self, fx: &mut impl Feedback) {
        self.world.publish_hud(fx);
        self.world.sync_visuals(fx);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct access for hosts and tests that need to stage a scenario.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Advance one frame.  A negative or non-finite `dt` is treated as zero.
    pub fn tick(&mut self, dt: f32, input: &impl Input, fx: &mut impl Feedback) -> FrameReport {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let mut report = FrameReport::default();
        if self.status == GameStatus::Over {
            self.world.sync_visuals(fx);
            return report;
        }

        self.apply_input(input, fx, &mut report);
        self.integrate(dt);

        let field = self.world.field;
        report.released = sweep(&mut self.world.projectiles, &field, &mut self.rng).released;
        report.respawned = sweep(&mut self.world.enemies, &field, &mut self.rng).respawned;

        let contacts = collision::resolve(&mut self.world, &mut self.rng, fx);
        report.kills = contacts.kills;
        report.player_hit = contacts.player_hit.is_some();

        if self.world.state.game_over {
            self.status = GameStatus::Over;
            fx.set_text(HudLabel::GameOver, "Game Over!");
            info!(score = self.world.state.score, "game over");
        }

        self.world.sync_visuals(fx);
        report
    }

    fn apply_input(&mut self, input: &impl Input, fx: &mut impl Feedback, report: &mut FrameReport) {
        let player = &mut self.world.player;
        let speed = self.world.config.player_speed;
        player.velocity.x = if input.is_left_down() {
            -speed
        } else if input.is_right_down() {
            speed
        } else {
            0.0
        };

        if input.is_fire_just_pressed() && player.alive {
            let origin = player.position;
            fx.play(Sound::Laser);
            match self.world.projectiles.acquire() {
                Some(slot) => {
                    if let Some(shot) = self.world.projectiles.get_mut(slot) {
                        shot.place(fire_projectile(origin.x, origin.y));
                    }
                    report.fired = Some(slot);
                }
                None => {
                    trace!("projectile pool exhausted, shot dropped");
                    report.dropped_shot = true;
                }
            }
        }
    }

    fn integrate(&mut self, dt: f32) {
        let world = &mut self.world;
        if world.player.alive {
            world.player.position += world.player.velocity * dt;
            world.player.clamp_to(&world.field);
        }
        world.enemies.for_each_active(|_, e| e.integrate(dt));
        world.projectiles.for_each_active(|_, e| e.integrate(dt));
    }
}
