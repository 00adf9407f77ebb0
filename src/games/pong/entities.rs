//! Pong entity types.

use std::collections::VecDeque;
use std::f32::consts::PI;
use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use crate::display::Rgb;
use crate::engine::geom::Rect;
use crate::engine::phase::{Phase, PhaseMachine, PhaseRules};

// ── Field & tuning ────────────────────────────────────────────────────────────

pub const DEFAULT_FIELD: Vec2 = Vec2::new(1280.0, 720.0);

pub const PADDLE_SIZE: Vec2 = Vec2::new(19.0, 185.0);
/// Gap between each paddle and its side wall.
pub const PADDLE_MARGIN: f32 = 50.0;
pub const PADDLE_SPEED: f32 = 35.0;
/// Velocity kept per tick once the player lets go.
pub const PADDLE_DRAG: f32 = 0.6;
/// AI paddle speed as a fraction of the player's.
pub const AI_SPEED_FACTOR: f32 = 0.78;

pub const BALL_RADIUS: f32 = 10.0;
pub const SERVE_SPEED: f32 = 25.0;
/// Serve angle is drawn from `[-SERVE_ANGLE, SERVE_ANGLE]` radians.
pub const SERVE_ANGLE: f32 = 0.6;
pub const SPEED_UP: f32 = 1.5;
pub const MAX_BALL_SPEED: f32 = 100.0;
/// Deflection at the very end of a paddle.
pub const MAX_BOUNCE_ANGLE: f32 = PI / 3.5;
pub const TRAIL_LEN: usize = 10;

pub const WIN_SCORE: u32 = 7;
pub const POINT_HOLD: Duration = Duration::from_millis(400);
pub const MATCH_HOLD: Duration = Duration::from_millis(500);

pub const RULES: PhaseRules = PhaseRules {
    initial: Phase::Playing,
    pausable: true,
    restart_to: Phase::Playing,
};

pub const GREEN: Rgb = Rgb(0, 255, 70);
pub const GREEN_DIM: Rgb = Rgb(0, 80, 25);
pub const GREEN_DARK: Rgb = Rgb(0, 20, 8);
pub const AMBER: Rgb = Rgb(255, 180, 0);
pub const AMBER_DIM: Rgb = Rgb(100, 60, 0);

// ── Sides ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, keyboard controlled.
    Player,
    /// Right paddle.
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Horizontal direction of travel toward this side.
    pub fn toward(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Ai => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "PLAYER",
            Side::Ai => "A.I.",
        }
    }
}

// ── Paddle ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
    pub vy: f32,
}

impl Paddle {
    pub fn new(side: Side, field: Vec2) -> Self {
        let x = match side {
            Side::Player => PADDLE_MARGIN,
            Side::Ai => field.x - PADDLE_MARGIN - PADDLE_SIZE.x,
        };
        Self {
            rect: Rect::new(
                x,
                (field.y / 2.0).floor() - (PADDLE_SIZE.y / 2.0).floor(),
                PADDLE_SIZE.x,
                PADDLE_SIZE.y,
            ),
            vy: 0.0,
        }
    }

    /// Move by `dy`, staying inside the field.
    pub fn shift(&mut self, dy: f32, field: Vec2) {
        self.rect.y = (self.rect.y + dy).clamp(0.0, field.y - self.rect.h);
    }
}

// ── Ball ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
    /// Recent centres, oldest first.
    pub trail: VecDeque<Vec2>,
    /// Cleared once a goal has been scored with it; set again on serve.
    pub in_play: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            speed: vel.length(),
            trail: VecDeque::with_capacity(TRAIL_LEN + 1),
            in_play: true,
        }
    }

    /// Centred ball heading toward `side` at serve speed.
    pub fn serve(field: Vec2, side: Side, rng: &mut impl Rng) -> Self {
        let angle: f32 = rng.gen_range(-SERVE_ANGLE..=SERVE_ANGLE);
        let vel = Vec2::new(angle.cos() * side.toward(), angle.sin()) * SERVE_SPEED;
        let mut ball = Ball::new(field / 2.0, vel);
        ball.speed = SERVE_SPEED;
        ball
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(BALL_RADIUS * 2.0))
    }

    /// One tick of flight: record the trail, move, bounce off the top and
    /// bottom walls.
    pub fn advance(&mut self, field: Vec2) {
        self.trail.push_back(self.pos);
        if self.trail.len() > TRAIL_LEN {
            self.trail.pop_front();
        }
        self.pos += self.vel;

        if self.pos.y - BALL_RADIUS <= 0.0 {
            self.pos.y = BALL_RADIUS;
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y + BALL_RADIUS >= field.y {
            self.pos.y = field.y - BALL_RADIUS;
            self.vel.y = -self.vel.y.abs();
        }
    }

    /// Who scores if the ball is past a side wall.
    pub fn goal(&self, field: Vec2) -> Option<Side> {
        if self.pos.x - BALL_RADIUS <= 0.0 {
            Some(Side::Ai)
        } else if self.pos.x + BALL_RADIUS >= field.x {
            Some(Side::Player)
        } else {
            None
        }
    }
}

// ── Master state ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct PongGame {
    pub phase: PhaseMachine,
    pub field: Vec2,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub ai_score: u32,
    /// Side the next serve heads toward, set when a point is scored.
    pub pending_serve: Option<Side>,
    pub winner: Option<Side>,
    pub frame: u64,
}

impl PongGame {
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Ai => self.ai_score,
        }
    }
}
