//! Pong game logic.
//!
//! Update moves the player paddle, then the AI paddle (chasing where the
//! ball was at the end of the previous tick), then the ball. Collision
//! tests the ball against the paddles' new positions and checks for a
//! goal. A scored point queues a serve that the Spawner performs.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use super::entities::*;
use crate::engine::input::{InputSnapshot, Key};
use crate::engine::phase::{Phase, PhaseMachine};

const PAUSE_KEY: Key = Key::Char('p');

// ── Constructors ──────────────────────────────────────────────────────────────

pub fn init_state(field: Vec2, rng: &mut impl Rng) -> PongGame {
    PongGame {
        phase: PhaseMachine::new(RULES),
        field,
        player: Paddle::new(Side::Player, field),
        ai: Paddle::new(Side::Ai, field),
        ball: Ball::serve(field, Side::Ai, rng),
        player_score: 0,
        ai_score: 0,
        pending_serve: None,
        winner: None,
        frame: 0,
    }
}

/// RoundOver → Playing: scores cleared, paddles centred, fresh serve.
pub fn restart(state: &mut PongGame, rng: &mut impl Rng) {
    if !state.phase.restart() {
        return;
    }
    let field = state.field;
    state.player = Paddle::new(Side::Player, field);
    state.ai = Paddle::new(Side::Ai, field);
    state.ball = Ball::serve(field, Side::Ai, rng);
    state.player_score = 0;
    state.ai_score = 0;
    state.pending_serve = None;
    state.winner = None;
    log::info!("pong: new match");
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Returns how long the loop should hold after presenting this frame.
pub fn tick(state: &mut PongGame, input: &InputSnapshot, rng: &mut impl Rng) -> Option<Duration> {
    state.frame += 1;

    match state.phase.phase() {
        Phase::Playing | Phase::Paused => {
            if input.pressed(PAUSE_KEY) {
                state.phase.toggle_pause();
            }
        }
        Phase::RoundOver => {
            if input.pressed(Key::Enter) {
                restart(state, rng);
            }
        }
        Phase::Attract => {}
    }

    if !state.phase.runs_simulation() {
        return None;
    }

    update(state, input);
    let hold = collide(state);
    spawn(state, rng);
    hold
}

// ── Update pass ───────────────────────────────────────────────────────────────

pub fn update(state: &mut PongGame, input: &InputSnapshot) {
    let field = state.field;

    let player = &mut state.player;
    if input.is_held(Key::Up) {
        player.vy = -PADDLE_SPEED;
    } else if input.is_held(Key::Down) {
        player.vy = PADDLE_SPEED;
    } else {
        player.vy *= PADDLE_DRAG;
    }
    let vy = player.vy;
    player.shift(vy, field);

    track_ball(&mut state.ai, state.ball.pos.y, field);

    if state.ball.in_play {
        state.ball.advance(field);
    }
}

/// Close on `target` at up to the AI's top speed.
pub fn track_ball(ai: &mut Paddle, target: f32, field: Vec2) {
    let diff = target - ai.rect.center().y;
    let step = diff.abs().min(PADDLE_SPEED * AI_SPEED_FACTOR);
    ai.vy = step.copysign(diff);
    ai.shift(ai.vy, field);
}

// ── Collision pass ────────────────────────────────────────────────────────────

/// Paddle bounce, then goal check. Returns the hold a scored point asks
/// for. A goal takes the ball out of play, so a second pass in the same
/// tick finds nothing to score.
pub fn collide(state: &mut PongGame) -> Option<Duration> {
    if !state.ball.in_play {
        return None;
    }

    let ball_rect = state.ball.rect();
    if state.player.rect.intersects(&ball_rect) {
        bounce(&mut state.ball, &state.player, Side::Player);
    } else if state.ai.rect.intersects(&ball_rect) {
        bounce(&mut state.ball, &state.ai, Side::Ai);
    }

    let scorer = state.ball.goal(state.field)?;
    state.ball.in_play = false;
    match scorer {
        Side::Player => state.player_score += 1,
        Side::Ai => state.ai_score += 1,
    }
    log::debug!(
        "pong: point to {}, {}-{}",
        scorer.label(),
        state.player_score,
        state.ai_score
    );

    if state.score(scorer) >= WIN_SCORE {
        state.winner = Some(scorer);
        state.phase.finish();
        log::info!("pong: {} wins {}-{}", scorer.label(), state.player_score, state.ai_score);
        return Some(MATCH_HOLD);
    }

    state.pending_serve = Some(scorer);
    Some(POINT_HOLD)
}

/// Send the ball back off `paddle`. The further from the paddle's centre
/// it hits, the steeper the return; each return is faster.
pub fn bounce(ball: &mut Ball, paddle: &Paddle, side: Side) {
    let half = paddle.rect.h / 2.0;
    let rel = ((ball.pos.y - paddle.rect.center().y) / half).clamp(-1.0, 1.0);
    ball.speed = (ball.speed + SPEED_UP).min(MAX_BALL_SPEED);

    let angle = rel * MAX_BOUNCE_ANGLE;
    let away = side.opponent().toward();
    ball.vel = Vec2::new(angle.cos() * away, angle.sin()) * ball.speed;

    ball.pos.x = match side {
        Side::Player => paddle.rect.right() + BALL_RADIUS + 1.0,
        Side::Ai => paddle.rect.left() - BALL_RADIUS - 1.0,
    };
}

// ── Spawner ───────────────────────────────────────────────────────────────────

pub fn spawn(state: &mut PongGame, rng: &mut impl Rng) {
    if let Some(side) = state.pending_serve.take() {
        state.ball = Ball::serve(state.field, side, rng);
    }
}
