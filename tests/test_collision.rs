use arcade_shooter::collision::{detect, hit, kill, resolve};
use arcade_shooter::host::{EventLog, HudLabel, Sound};
use arcade_shooter::motion::fire_projectile;
use arcade_shooter::pool::SlotId;
use arcade_shooter::world::World;
use arcade_shooter::{CollisionMode, GameConfig};

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A fresh world with every enemy parked motionless in the top-left corner,
/// well away from the player and from anything a test stages.
fn world_with(config: GameConfig) -> (World, StdRng) {
    let mut rng = seeded_rng();
    let mut world = World::new(config, &mut rng).unwrap();
    world.enemies.for_each_active(|_, e| {
        e.position = Vec2::new(20.0, 20.0);
        e.velocity = Vec2::ZERO;
    });
    (world, rng)
}

fn put_enemy(world: &mut World, slot: usize, x: f32, y: f32) {
    world.enemies.get_mut(SlotId(slot)).unwrap().position = Vec2::new(x, y);
}

fn shoot_at(world: &mut World, x: f32, y: f32) -> SlotId {
    let slot = world.projectiles.acquire().unwrap();
    world
        .projectiles
        .get_mut(slot)
        .unwrap()
        .place(fire_projectile(x, y));
    slot
}

fn overlap_only() -> GameConfig {
    GameConfig {
        player_enemy_mode: CollisionMode::Overlap,
        ..GameConfig::default()
    }
}

// ── detection ────────────────────────────────────────────────────────────────

#[test]
fn nothing_touching_means_no_contacts() {
    let (mut world, _) = world_with(GameConfig::default());
    shoot_at(&mut world, 300.0, 400.0);
    assert!(detect(&world).is_empty());
}

#[test]
fn touching_edges_do_not_count() {
    let (mut world, _) = world_with(GameConfig::default());
    put_enemy(&mut world, 0, 300.0, 400.0);
    // enemy half-width 20 + projectile half-width 4
    shoot_at(&mut world, 324.0, 400.0);
    assert!(detect(&world).kills.is_empty());
}

#[test]
fn dead_player_is_not_collidable() {
    let (mut world, _) = world_with(GameConfig::default());
    world.player.alive = false;
    put_enemy(&mut world, 0, 300.0, 700.0);
    assert_eq!(detect(&world).player_hit, None);
}

// ── projectile × enemy ───────────────────────────────────────────────────────

#[test]
fn projectile_kill_scores_and_recycles_both() {
    let (mut world, mut rng) = world_with(GameConfig::default());
    let mut log = EventLog::default();
    put_enemy(&mut world, 0, 300.0, 400.0);
    let shot = shoot_at(&mut world, 300.0, 410.0);

    let contacts = resolve(&mut world, &mut rng, &mut log);

    assert_eq!(contacts.kills, vec![(shot, SlotId(0))]);
    assert_eq!(contacts.player_hit, None);
    assert_eq!(world.state.score, 1);
    assert!(!world.projectiles.is_active(shot));

    let enemy = world.enemies.get(SlotId(0)).unwrap();
    assert!(enemy.active);
    assert_eq!(enemy.position.y, 0.0);
    assert!(enemy.velocity.y > 0.0);

    assert_eq!(log.sounds(), vec![Sound::EnemyDestroyed]);
    assert_eq!(log.bursts(), vec![(300.0, 400.0, 40)]);
    assert_eq!(log.text(HudLabel::Score), Some("Score: 1"));
}

#[test]
fn one_enemy_dies_once_per_frame() {
    let (mut world, mut rng) = world_with(GameConfig::default());
    let mut log = EventLog::default();
    put_enemy(&mut world, 0, 300.0, 400.0);
    let first = shoot_at(&mut world, 300.0, 400.0);
    let second = shoot_at(&mut world, 305.0, 395.0);

    let contacts = resolve(&mut world, &mut rng, &mut log);

    assert_eq!(contacts.kills, vec![(first, SlotId(0))]);
    assert_eq!(world.state.score, 1);
    assert!(world.projectiles.is_active(second));
}

#[test]
fn one_projectile_kills_one_enemy() {
    let (mut world, mut rng) = world_with(GameConfig::default());
    let mut log = EventLog::default();
    put_enemy(&mut world, 0, 300.0, 400.0);
    put_enemy(&mut world, 1, 310.0, 400.0);
    let shot = shoot_at(&mut world, 305.0, 400.0);

    let contacts = resolve(&mut world, &mut rng, &mut log);

    assert_eq!(contacts.kills, vec![(shot, SlotId(0))]);
    assert_eq!(
        world.enemies.get(SlotId(1)).unwrap().position,
        Vec2::new(310.0, 400.0)
    );
    assert_eq!(world.state.score, 1);
}

#[test]
fn separate_projectiles_score_separately() {
    let (mut world, mut rng) = world_with(GameConfig::default());
    let mut log = EventLog::default();
    put_enemy(&mut world, 0, 100.0, 300.0);
    put_enemy(&mut world, 1, 500.0, 300.0);
    shoot_at(&mut world, 100.0, 300.0);
    shoot_at(&mut world, 500.0, 300.0);

    resolve(&mut world, &mut rng, &mut log);

    assert_eq!(world.state.score, 2);
    assert_eq!(world.projectiles.active_count(), 0);
    assert_eq!(world.enemies.active_count(), 20);
    assert_eq!(log.text(HudLabel::Score), Some("Score: 2"));
}

#[test]
fn collider_mode_on_projectiles_still_kills() {
    let (mut world, mut rng) = world_with(GameConfig {
        projectile_enemy_mode: CollisionMode::Collider,
        ..GameConfig::default()
    });
    let mut log = EventLog::default();
    put_enemy(&mut world, 0, 300.0, 400.0);
    let shot = shoot_at(&mut world, 300.0, 400.0);

    resolve(&mut world, &mut rng, &mut log);

    assert_eq!(world.state.score, 1);
    assert!(!world.projectiles.is_active(shot));
}

#[test]
fn kill_on_inactive_enemy_is_ignored() {
    let (mut world, mut rng) = world_with(GameConfig::default());
    let mut log = EventLog::default();
    let shot = shoot_at(&mut world, 300.0, 400.0);
    world.enemies.release(SlotId(3));

    kill(&mut world, &mut rng, &mut log, shot, SlotId(3));

    assert_eq!(world.state.score, 0);
    assert!(world.projectiles.is_active(shot));
    assert!(log.events.is_empty());
}

// ── player × enemy ───────────────────────────────────────────────────────────

#[test]
fn player_hit_costs_a_life_and_resets_the_board() {
    let (mut world, mut rng) = world_with(GameConfig::default());
    let mut log = EventLog::default();
    put_enemy(&mut world, 0, 300.0, 690.0);
    world.player.velocity = Vec2::new(0.0, 30.0);

    let contacts = resolve(&mut world, &mut rng, &mut log);

    assert_eq!(contacts.player_hit, Some(SlotId(0)));
    assert_eq!(world.state.lives, 2);
    assert!(!world.state.game_over);
    assert!(world.player.alive);
    assert_eq!(world.player.position, world.field.player_start());
    assert_eq!(world.player.velocity.y, 0.0);

    for (_, enemy) in world.enemies.iter() {
        assert!(enemy.active);
        assert_eq!(enemy.position.y, 0.0);
    }

    assert_eq!(log.sounds(), vec![Sound::PlayerDestroyed]);
    assert_eq!(log.text(HudLabel::Lives), Some("Lives: 2"));
}

#[test]
fn collider_pushes_player_out_before_the_bursts() {
    let (mut world, mut rng) = world_with(GameConfig::default());
    let mut log = EventLog::default();
    put_enemy(&mut world, 0, 300.0, 690.0);

    resolve(&mut world, &mut rng, &mut log);

    // 30 px of vertical overlap, pushed downwards away from the enemy
    assert_eq!(log.bursts(), vec![(300.0, 730.0, 40); 3]);
}

#[test]
fn overlap_mode_leaves_player_in_place_for_the_bursts() {
    let (mut world, mut rng) = world_with(overlap_only());
    let mut log = EventLog::default();
    put_enemy(&mut world, 0, 300.0, 690.0);

    resolve(&mut world, &mut rng, &mut log);

    assert_eq!(log.bursts(), vec![(300.0, 700.0, 40); 3]);
}

#[test]
fn burst_repeat_is_configurable() {
    let (mut world, mut rng) = world_with(GameConfig {
        player_hit_bursts: 1,
        burst_particles: 12,
        ..overlap_only()
    });
    let mut log = EventLog::default();
    put_enemy(&mut world, 0, 300.0, 700.0);

    resolve(&mut world, &mut rng, &mut log);

    assert_eq!(log.bursts(), vec![(300.0, 700.0, 12)]);
}

#[test]
fn several_enemies_on_the_player_cost_one_life() {
    let (mut world, mut rng) = world_with(GameConfig::default());
    let mut log = EventLog::default();
    put_enemy(&mut world, 0, 300.0, 700.0);
    put_enemy(&mut world, 1, 310.0, 705.0);

    resolve(&mut world, &mut rng, &mut log);

    assert_eq!(world.state.lives, 2);
    assert_eq!(log.sounds(), vec![Sound::PlayerDestroyed]);
}

#[test]
fn last_life_ends_the_run_without_reposition() {
    let (mut world, mut rng) = world_with(overlap_only());
    let mut log = EventLog::default();
    world.state.lives = 1;
    world.player.position = Vec2::new(100.0, 500.0);
    put_enemy(&mut world, 0, 100.0, 500.0);

    resolve(&mut world, &mut rng, &mut log);

    assert_eq!(world.state.lives, 0);
    assert!(world.state.game_over);
    assert!(!world.player.alive);
    assert_eq!(world.player.position, Vec2::new(100.0, 500.0));
    assert_eq!(log.text(HudLabel::Lives), Some("Lives: 0"));
}

#[test]
fn hit_after_game_over_changes_nothing() {
    let (mut world, mut rng) = world_with(overlap_only());
    let mut log = EventLog::default();
    world.state.lives = 0;
    world.state.game_over = true;

    hit(&mut world, &mut rng, &mut log, SlotId(0));

    assert_eq!(world.state.lives, 0);
    assert!(log.events.is_empty());
}

// ── both reactions in one frame ──────────────────────────────────────────────

#[test]
fn kill_and_hit_on_the_same_enemy_both_fire() {
    let (mut world, mut rng) = world_with(GameConfig::default());
    let mut log = EventLog::default();
    put_enemy(&mut world, 0, 300.0, 690.0);
    let shot = shoot_at(&mut world, 300.0, 680.0);

    let contacts = resolve(&mut world, &mut rng, &mut log);

    assert_eq!(contacts.kills, vec![(shot, SlotId(0))]);
    assert_eq!(contacts.player_hit, Some(SlotId(0)));
    assert_eq!(world.state.score, 1);
    assert_eq!(world.state.lives, 2);
    assert_eq!(
        log.sounds(),
        vec![Sound::EnemyDestroyed, Sound::PlayerDestroyed]
    );
}
