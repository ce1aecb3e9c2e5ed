//! Contact detection and the reactions it triggers.
//!
//! Detection runs against the positions at the start of the collision phase
//! and only then are reactions applied.  A projectile kill and a player hit
//! involving the same enemy therefore both fire in the same frame.

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::config::CollisionMode;
use crate::entities::Aabb;
use crate::host::{Feedback, HudLabel, Sound};
use crate::pool::SlotId;
use crate::world::World;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contacts {
    /// (projectile, enemy) pairs, in projectile slot order.
    pub kills: Vec<(SlotId, SlotId)>,
    /// The enemy touching the player, if any.
    pub player_hit: Option<SlotId>,
}

impl Contacts {
    pub fn is_empty(&self) -> bool {
        self.kills.is_empty() && self.player_hit.is_none()
    }
}

/// Find every contact without mutating anything.
///
/// Each projectile is consumed by the first enemy it overlaps, and each enemy
/// can be killed once per frame.  At most one player hit is reported: the hit
/// reaction resets the whole board.
pub fn detect(world: &World) -> Contacts {
    let mut contacts = Contacts::default();

    for (projectile, _) in world.projectiles.iter_active() {
        let Some(shot_box) = world.projectiles.aabb(projectile) else {
            continue;
        };
        let target = world.enemies.iter_active().find(|(enemy, _)| {
            !contacts.kills.iter().any(|(_, e)| e == enemy)
                && world
                    .enemies
                    .aabb(*enemy)
                    .map_or(false, |b| b.overlaps(&shot_box))
        });
        if let Some((enemy, _)) = target {
            contacts.kills.push((projectile, enemy));
        }
    }

    if world.player.alive {
        let player_box = world.player.aabb();
        contacts.player_hit = world
            .enemies
            .iter_active()
            .map(|(enemy, _)| enemy)
            .find(|enemy| {
                world
                    .enemies
                    .aabb(*enemy)
                    .map_or(false, |b| b.overlaps(&player_box))
            });
    }

    contacts
}

/// Detect and react.  Returns what was found.
pub fn resolve(world: &mut World, rng: &mut impl Rng, fx: &mut impl Feedback) -> Contacts {
    let contacts = detect(world);
    for &(projectile, enemy) in &contacts.kills {
        kill(world, rng, fx, projectile, enemy);
    }
    if let Some(enemy) = contacts.player_hit {
        hit(world, rng, fx, enemy);
    }
    contacts
}

/// Projectile × enemy.
pub fn kill(
    world: &mut World,
    rng: &mut impl Rng,
    fx: &mut impl Feedback,
    projectile: SlotId,
    enemy: SlotId,
) {
    let Some(enemy_box) = world.enemies.aabb(enemy) else {
        return;
    };
    if world.config.projectile_enemy_mode == CollisionMode::Collider {
        if let Some(mut shot_box) = world.projectiles.aabb(projectile) {
            if let Some(shot) = world.projectiles.get_mut(projectile) {
                separate(&mut shot_box, &mut shot.velocity, &enemy_box, 0.0);
                shot.position = shot_box.center;
            }
        }
    }

    fx.play(Sound::EnemyDestroyed);
    fx.burst(
        enemy_box.center.x,
        enemy_box.center.y,
        world.config.burst_particles,
    );

    world.projectiles.release(projectile);
    world.respawn_enemy(enemy, rng);

    world.state.score += 1;
    fx.set_text(HudLabel::Score, &format!("Score: {}", world.state.score));
    debug!(?projectile, ?enemy, score = world.state.score, "enemy destroyed");
}

/// Player × enemy.  Resets the board and costs a life.
pub fn hit(world: &mut World, rng: &mut impl Rng, fx: &mut impl Feedback, enemy: SlotId) {
    if !world.player.alive || world.state.game_over {
        return;
    }
    if world.config.player_enemy_mode == CollisionMode::Collider {
        if let Some(enemy_box) = world.enemies.aabb(enemy) {
            let mut player_box = world.player.aabb();
            let bounce = world.config.player_bounce;
            separate(&mut player_box, &mut world.player.velocity, &enemy_box, bounce);
            world.player.position = player_box.center;
        }
    }

    fx.play(Sound::PlayerDestroyed);
    world.respawn_all_enemies(rng);

    let at = world.player.position;
    for _ in 0..world.config.player_hit_bursts {
        fx.burst(at.x, at.y, world.config.burst_particles);
    }

    world.state.lives -= 1;
    fx.set_text(HudLabel::Lives, &format!("Lives: {}", world.state.lives));
    world.player.velocity.y = 0.0;

    if world.state.lives <= 0 {
        world.player.alive = false;
        world.state.game_over = true;
    } else {
        world.player.position = world.field.player_start();
    }
    debug!(?enemy, lives = world.state.lives, "player hit");
}

/// Push `body` out of `obstacle` along the axis of least penetration and
/// reflect the velocity on that axis, scaled by `bounce`.
fn separate(body: &mut Aabb, velocity: &mut Vec2, obstacle: &Aabb, bounce: f32) {
    let depth = body.penetration(obstacle);
    if depth.x <= 0.0 || depth.y <= 0.0 {
        return;
    }
    let away = body.center - obstacle.center;
    if depth.x < depth.y {
        let dir = if away.x < 0.0 { -1.0 } else { 1.0 };
        body.center.x += dir * depth.x;
        velocity.x = -velocity.x * bounce;
    } else {
        let dir = if away.y < 0.0 { -1.0 } else { 1.0 };
        body.center.y += dir * depth.y;
        velocity.y = -velocity.y * bounce;
    }
}
