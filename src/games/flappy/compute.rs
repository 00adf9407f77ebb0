//! Retro Bird game logic.
//!
//! `tick` handles phase input and then, while playing, runs the passes in
//! order: Update (pipes, then bird, then particles) → Collision → Spawner.
//! Score changes only in the Collision pass.

use glam::Vec2;
use rand::Rng;

use super::entities::*;
use crate::display::Rgb;
use crate::engine::input::{InputSnapshot, Key};
use crate::engine::particles::ParticleSystem;
use crate::engine::phase::{Phase, PhaseMachine};
use crate::engine::spawn::Countdown;

const PRIMARY_KEYS: [Key; 3] = [Key::Space, Key::Up, Key::Enter];

/// Where the score burst appears (under the score display).
const SCORE_BURST_AT: Vec2 = Vec2::new(FIELD.x / 2.0, 60.0);

// ── Constructors ──────────────────────────────────────────────────────────────

pub fn init_state(rng: &mut impl Rng) -> FlappyGame {
    FlappyGame {
        phase: PhaseMachine::new(RULES),
        bird: Bird::new(pick(&NEON, rng)),
        pipes: Vec::new(),
        particles: ParticleSystem::new(PARTICLES),
        score: 0,
        speed: 0.0,
        pipe_timer: Countdown::ready(),
        pipe_color: pick(&NEON, rng),
        ground_offset: 0.0,
        frame: 0,
    }
}

fn pick(colors: &[Rgb], rng: &mut impl Rng) -> Rgb {
    colors[rng.gen_range(0..colors.len())]
}

/// Attract → Playing: empty field, score 0, pipes due immediately.
pub fn start_round(state: &mut FlappyGame, rng: &mut impl Rng) {
    if !state.phase.start() {
        return;
    }
    state.pipes.clear();
    state.score = 0;
    state.speed = SCROLL_SPEED;
    state.pipe_timer = Countdown::ready();
    state.pipe_color = pick(&NEON, rng);
    state.bird.vel = 0.0;
    log::info!("retro bird: round started");
}

/// RoundOver → Attract with a fresh bird, no transient entities and a
/// zeroed score.
pub fn restart(state: &mut FlappyGame, rng: &mut impl Rng) {
    if !state.phase.restart() {
        return;
    }
    state.bird = Bird::new(pick(&NEON, rng));
    state.pipes.clear();
    state.particles.clear();
    state.score = 0;
    state.speed = 0.0;
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

pub fn tick(state: &mut FlappyGame, input: &InputSnapshot, rng: &mut impl Rng) {
    state.frame += 1;
    let primary = input.clicked() || input.any_pressed(&PRIMARY_KEYS);

    match state.phase.phase() {
        Phase::Attract => {
            if primary {
                start_round(state, rng);
            } else {
                bob(&mut state.bird);
            }
        }
        Phase::Playing => {
            if primary && state.bird.alive {
                state.bird.vel = FLAP_VELOCITY;
            }
        }
        Phase::RoundOver => {
            if primary {
                restart(state, rng);
            }
        }
        Phase::Paused => {}
    }

    if state.phase.runs_simulation() {
        update(state);
        collide(state, rng);
        spawn(state, rng);
    } else {
        // Bursts keep fading on the title and game-over screens.
        state.particles.update();
    }
}

fn bob(bird: &mut Bird) {
    bird.flap_frame = (bird.flap_frame + 1) % 6;
    if bird.bob_offset <= -BOB_LIMIT || bird.bob_offset > BOB_LIMIT {
        bird.bob_step = -bird.bob_step;
    }
    bird.bob_offset += bird.bob_step;
    bird.rect.y += bird.bob_step;
}

// ── Update pass ───────────────────────────────────────────────────────────────

pub fn update(state: &mut FlappyGame) {
    let speed = state.speed;
    for pipe in &mut state.pipes {
        pipe.x -= speed;
    }
    state.pipes.retain(|p| p.right() >= 0.0);
    state.ground_offset = (state.ground_offset + speed) % FIELD.x;

    update_bird(&mut state.bird);
    state.particles.update();
}

/// The bird moves in whole pixels: the fractional part of the velocity
/// only accumulates in `vel`.
fn update_bird(bird: &mut Bird) {
    bird.vel = (bird.vel + GRAVITY).min(MAX_FALL_SPEED);
    if bird.rect.bottom() <= GROUND_Y {
        bird.rect.y = (bird.rect.y + bird.vel.trunc()).min(GROUND_Y - bird.rect.h);
    }
    if bird.alive {
        bird.flap_frame = (bird.flap_frame + 1) % 6;
    }
}

// ── Collision pass ────────────────────────────────────────────────────────────

pub fn collide(state: &mut FlappyGame, rng: &mut impl Rng) {
    let bird_rect = state.bird.rect;

    if state.bird.alive {
        let crashed = bird_rect.top() <= 0.0 || state.pipes.iter().any(|p| p.hits(&bird_rect));
        if crashed {
            state.bird.alive = false;
            state.particles.emit(bird_rect.center(), Rgb::RED, BURST_COUNT, rng);
            log::debug!("retro bird: crashed at score {}", state.score);
        }
    }

    if state.bird.alive {
        for pipe in state.pipes.iter_mut().filter(|p| !p.scored) {
            if bird_rect.left() > pipe.right() {
                pipe.scored = true;
                state.score += 1;
                state.particles.emit(SCORE_BURST_AT, Rgb::YELLOW, BURST_COUNT, rng);
            }
        }
    }

    if state.bird.on_ground() && state.phase.finish() {
        state.bird.alive = false;
        state.speed = 0.0;
        log::info!("retro bird: round over, score {}", state.score);
    }
}

// ── Spawner ───────────────────────────────────────────────────────────────────

pub fn spawn(state: &mut FlappyGame, rng: &mut impl Rng) {
    if !state.bird.alive {
        return;
    }
    if state.pipe_timer.tick() {
        let offset = GAP_OFFSET_MIN + rng.gen_range(0..GAP_OFFSET_STEPS) * GAP_STEP;
        state.pipes.push(PipePair::new(FIELD.x, rest_y() + offset as f32));
        state.pipe_timer.reset(PIPE_INTERVAL);
    }
}
