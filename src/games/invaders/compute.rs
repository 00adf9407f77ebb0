//! Space Battle game logic.
//!
//! While playing, each tick applies input and then runs Update →
//! Collision → Spawner. Score and lives change only in Collision; an
//! alien that leaves the bottom edge is flagged in Update and charged
//! there.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::entities::*;
use crate::display::Rgb;
use crate::engine::geom::Rect;
use crate::engine::input::{InputSnapshot, Key};
use crate::engine::particles::ParticleSystem;
use crate::engine::phase::{Phase, PhaseMachine};
use crate::engine::spawn::{scaled_interval, Countdown};

const LEFT_KEYS: [Key; 2] = [Key::Left, Key::Char('a')];
const RIGHT_KEYS: [Key; 2] = [Key::Right, Key::Char('d')];
const RESTART_KEY: Key = Key::Char('r');

const TICKS_PER_SECOND: f32 = 60.0;

// ── Constructors ──────────────────────────────────────────────────────────────

pub fn init_state(field: Vec2, rng: &mut impl Rng) -> InvadersGame {
    InvadersGame {
        phase: PhaseMachine::new(RULES),
        field,
        player: Player::new(field),
        aliens: Vec::new(),
        projectiles: Vec::new(),
        power_ups: Vec::new(),
        particles: ParticleSystem::new(PARTICLES),
        stars: make_stars(field, rng),
        score: 0,
        lives: START_LIVES,
        level: 1,
        kills: 0,
        spawn_timer: Countdown::ready(),
        elapsed: 0,
        frame: 0,
    }
}

fn make_stars(field: Vec2, rng: &mut impl Rng) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            pos: Vec2::new(rng.gen_range(0.0..=field.x), rng.gen_range(0.0..=field.y)),
            speed: rng.gen_range(0.5..2.0),
            brightness: rng.gen_range(100..=255),
            size: rng.gen_range(1..=3) as f32,
        })
        .collect()
}

/// RoundOver → Playing with a fresh round. Stars are kept.
pub fn restart(state: &mut InvadersGame) {
    if !state.phase.restart() {
        return;
    }
    state.player = Player::new(state.field);
    state.aliens.clear();
    state.projectiles.clear();
    state.power_ups.clear();
    state.particles.clear();
    state.score = 0;
    state.lives = START_LIVES;
    state.level = 1;
    state.kills = 0;
    state.spawn_timer = Countdown::ready();
    state.elapsed = 0;
    log::info!("space battle: new round");
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

pub fn tick(state: &mut InvadersGame, input: &InputSnapshot, rng: &mut impl Rng) {
    state.frame += 1;

    match state.phase.phase() {
        Phase::Playing => apply_input(state, input),
        Phase::RoundOver => {
            if input.pressed(RESTART_KEY) {
                restart(state);
            }
        }
        Phase::Attract | Phase::Paused => {}
    }

    if state.phase.runs_simulation() {
        state.elapsed += 1;
        update(state, rng);
        collide(state, rng);
        spawn(state, rng);
    } else {
        state.particles.update();
        update_stars(state, rng);
    }
}

/// Steering and fire. The ship only records its velocity here; Update
/// moves it.
pub fn apply_input(state: &mut InvadersGame, input: &InputSnapshot) {
    let player = &mut state.player;
    player.vx = match (input.any_held(&LEFT_KEYS), input.any_held(&RIGHT_KEYS)) {
        (true, false) => -PLAYER_SPEED,
        (false, true) => PLAYER_SPEED,
        _ => 0.0,
    };

    let fire = input.pressed(Key::Space) || input.is_held(Key::Space);
    if fire && player.shot_cooldown == 0 {
        shoot(state);
    }
}

/// Fire from the nose of the ship; three bullets while triple shot lasts.
pub fn shoot(state: &mut InvadersGame) {
    let player = &mut state.player;
    let nose = Vec2::new(player.rect.center().x, player.rect.top());
    state.projectiles.push(Projectile::player_bullet(nose, 0.0));

    if player.triple_shot > 0 {
        let left = nose + Vec2::new(-SIDE_SHOT_OFFSET.x, SIDE_SHOT_OFFSET.y);
        let right = nose + SIDE_SHOT_OFFSET;
        state.projectiles.push(Projectile::player_bullet(left, -SIDE_SHOT_DRIFT));
        state.projectiles.push(Projectile::player_bullet(right, SIDE_SHOT_DRIFT));
    }
    player.shot_cooldown = SHOT_COOLDOWN;
}

// ── Update pass ───────────────────────────────────────────────────────────────

pub fn update(state: &mut InvadersGame, rng: &mut impl Rng) {
    let field = state.field;

    let player = &mut state.player;
    player.rect.x = (player.rect.x + player.vx).clamp(0.0, field.x - player.rect.w);
    player.shot_cooldown = player.shot_cooldown.saturating_sub(1);
    player.triple_shot = player.triple_shot.saturating_sub(1);
    player.shield = player.shield.saturating_sub(1);
    player.engine_glow = (player.engine_glow + 1) % 10;

    for shot in &mut state.projectiles {
        shot.rect = shot.rect.translated(shot.vel);
    }
    state.projectiles.retain(|s| match s.owner {
        Owner::Player => s.rect.bottom() >= 0.0,
        Owner::Alien => s.rect.top() <= field.y,
    });

    for alien in &mut state.aliens {
        move_alien(alien, field);
    }

    for p in &mut state.power_ups {
        p.rect.y += POWER_UP_SPEED;
        p.wobble += POWER_UP_WOBBLE_STEP;
        p.rect.x += p.wobble.sin() * POWER_UP_WOBBLE_AMPLITUDE;
    }
    state.power_ups.retain(|p| p.rect.top() <= field.y);

    state.particles.update();
    update_stars(state, rng);
}

fn move_alien(alien: &mut Alien, field: Vec2) {
    alien.rect.y += alien.vel.y;
    alien.rect.x += alien.vel.x;
    if alien.kind.wobbles() {
        alien.wobble += WOBBLE_STEP;
        alien.rect.x += alien.wobble.sin() * WOBBLE_AMPLITUDE;
    }

    if alien.rect.left() < 0.0 {
        alien.rect.x = 0.0;
        alien.vel.x = -alien.vel.x;
    } else if alien.rect.right() > field.x {
        alien.rect.x = field.x - alien.rect.w;
        alien.vel.x = -alien.vel.x;
    }

    alien.shoot_cooldown = alien.shoot_cooldown.saturating_sub(1);
    if alien.rect.top() > field.y {
        alien.landed = true;
    }
}

fn update_stars(state: &mut InvadersGame, rng: &mut impl Rng) {
    let field = state.field;
    for star in &mut state.stars {
        star.pos.y += star.speed;
        if star.pos.y > field.y {
            star.pos.y = 0.0;
            star.pos.x = rng.gen_range(0.0..=field.x);
        }
    }
}

// ── Collision pass ────────────────────────────────────────────────────────────

/// Applies every hit once. Consumed entities are flagged dead before the
/// next check, so running this twice in a tick changes nothing.
pub fn collide(state: &mut InvadersGame, rng: &mut impl Rng) {
    charge_landings(state);
    bullets_vs_aliens(state, rng);
    bolts_vs_player(state, rng);
    power_up_pickups(state, rng);

    state.projectiles.retain(|s| s.alive);
    state.aliens.retain(|a| a.alive);
    state.power_ups.retain(|p| p.alive);

    if state.lives == 0 && state.phase.finish() {
        log::info!(
            "space battle: round over, score {} level {}",
            state.score,
            state.level
        );
    }
}

fn charge_landings(state: &mut InvadersGame) {
    for alien in state.aliens.iter_mut().filter(|a| a.alive && a.landed) {
        alien.alive = false;
        state.lives = state.lives.saturating_sub(1);
        log::debug!("space battle: alien landed, {} lives left", state.lives);
    }
}

fn bullets_vs_aliens(state: &mut InvadersGame, rng: &mut impl Rng) {
    for shot in state
        .projectiles
        .iter_mut()
        .filter(|s| s.alive && s.owner == Owner::Player)
    {
        let Some(alien) = state
            .aliens
            .iter_mut()
            .find(|a| a.alive && a.rect.intersects(&shot.rect))
        else {
            continue;
        };

        shot.alive = false;
        alien.alive = false;
        let at = alien.rect.center();
        state.particles.emit(at, alien.kind.color(), alien.kind.burst(), rng);

        state.score += alien.kind.points();
        state.kills += 1;
        if state.kills % KILLS_PER_LEVEL == 0 {
            state.level += 1;
            log::info!("space battle: level {}", state.level);
        }

        if rng.gen_bool(DROP_CHANCE) {
            state.power_ups.push(PowerUp {
                rect: Rect::from_center(at, POWER_UP_SIZE),
                kind: PowerUpKind::roll(rng),
                wobble: 0.0,
                alive: true,
            });
        }
    }
}

fn bolts_vs_player(state: &mut InvadersGame, rng: &mut impl Rng) {
    let ship = state.player.rect;
    for bolt in state
        .projectiles
        .iter_mut()
        .filter(|s| s.alive && s.owner == Owner::Alien && s.rect.intersects(&ship))
    {
        bolt.alive = false;
        if state.player.shielded() {
            state.particles.emit(bolt.rect.center(), Rgb::CYAN, SHIELD_BURST, rng);
            continue;
        }
        state.lives = state.lives.saturating_sub(1);
        state.particles.emit(ship.center(), Rgb::RED, HIT_BURST, rng);
        log::debug!("space battle: ship hit, {} lives left", state.lives);
    }
}

fn power_up_pickups(state: &mut InvadersGame, rng: &mut impl Rng) {
    let ship = state.player.rect;
    for p in state
        .power_ups
        .iter_mut()
        .filter(|p| p.alive && p.rect.intersects(&ship))
    {
        p.alive = false;
        match p.kind {
            PowerUpKind::TripleShot => state.player.triple_shot = POWER_UP_DURATION,
            PowerUpKind::Shield => state.player.shield = POWER_UP_DURATION,
        }
        state.particles.emit(p.rect.center(), p.kind.color(), PICKUP_BURST, rng);
        log::debug!("space battle: picked up {:?}", p.kind);
    }
}

// ── Spawner ───────────────────────────────────────────────────────────────────

pub fn spawn(state: &mut InvadersGame, rng: &mut impl Rng) {
    if state.spawn_timer.tick() {
        let alien = new_alien(state, rng);
        state.aliens.push(alien);
        state.spawn_timer.reset(spawn_interval(state.level));
    }

    for alien in state.aliens.iter_mut().filter(|a| a.shoot_cooldown == 0) {
        alien.shoot_cooldown = rng.gen_range(RELOAD_DELAY.0..=RELOAD_DELAY.1);
        if rng.gen_bool(BOLT_CHANCE) {
            let muzzle = Vec2::new(alien.rect.center().x, alien.rect.bottom());
            state.projectiles.push(Projectile::alien_bolt(muzzle));
        }
    }
}

/// Ticks between alien spawns at `level`.
pub fn spawn_interval(level: u32) -> u32 {
    scaled_interval(SPAWN_INTERVAL, SPAWN_INTERVAL_STEP, level, SPAWN_INTERVAL_FLOOR)
}

fn new_alien(state: &InvadersGame, rng: &mut impl Rng) -> Alien {
    let kind = AlienKind::roll(rng);
    let x = rng.gen_range(ALIEN_SPAWN_MARGIN..=state.field.x - ALIEN_SPAWN_MARGIN);
    let (lo, hi) = kind.fall_speed();

    let vx = match kind {
        AlienKind::Octopus => 0.0,
        AlienKind::Insect => {
            let drift = rng.gen_range(0.5..=1.5);
            if rng.gen_bool(0.5) {
                drift
            } else {
                -drift
            }
        }
        // Saucers sweep: direction follows the round clock.
        AlienKind::Saucer => (state.elapsed as f32 / TICKS_PER_SECOND).sin() * 2.0,
    };

    Alien {
        rect: Rect::from_center(Vec2::new(x, ALIEN_SPAWN_Y), ALIEN_SIZE),
        vel: Vec2::new(vx, rng.gen_range(lo..=hi)),
        kind,
        shoot_cooldown: rng.gen_range(FIRST_SHOT_DELAY.0..=FIRST_SHOT_DELAY.1),
        wobble: rng.gen_range(0.0..TAU),
        alive: true,
        landed: false,
    }
}
