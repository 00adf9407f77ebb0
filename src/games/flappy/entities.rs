//! Retro Bird entity types: pure data plus geometry helpers.

use glam::Vec2;

use crate::display::Rgb;
use crate::engine::geom::Rect;
use crate::engine::particles::{ParticleSpec, ParticleSystem};
use crate::engine::phase::{Phase, PhaseMachine, PhaseRules};
use crate::engine::spawn::Countdown;

// ── Field & tuning ────────────────────────────────────────────────────────────

pub const FIELD: Vec2 = Vec2::new(288.0, 512.0);
/// Top of the ground strip (80% of the field height).
pub const GROUND_Y: f32 = FIELD.y * 0.8;

pub const BIRD_SIZE: f32 = 40.0;
pub const BIRD_X: f32 = 60.0;
pub const GRAVITY: f32 = 0.3;
pub const MAX_FALL_SPEED: f32 = 8.0;
pub const FLAP_VELOCITY: f32 = -6.0;
/// Attract-screen bob amplitude.
pub const BOB_LIMIT: f32 = 10.0;

pub const PIPE_WIDTH: f32 = 52.0;
pub const PIPE_HEIGHT: f32 = 320.0;
pub const PIPE_GAP: f32 = 100.0;
/// ≈1600 ms at 60 ticks per second.
pub const PIPE_INTERVAL: u32 = 96;
/// Gap centre offsets are multiples of this step in `[-100, 96]`.
pub const GAP_STEP: i32 = 4;
pub const GAP_OFFSET_MIN: i32 = -100;
pub const GAP_OFFSET_STEPS: i32 = 50;

pub const SCROLL_SPEED: f32 = 2.0;

pub const BURST_COUNT: usize = 10;
pub const PARTICLES: ParticleSpec = ParticleSpec {
    vx: (-3.0, 3.0),
    vy: (-5.0, 0.0),
    lifetime: 30,
    size: (3.0, 3.0),
    shrink: 0.1,
    gravity: 0.3,
};

pub const RULES: PhaseRules = PhaseRules {
    initial: Phase::Attract,
    pausable: false,
    restart_to: Phase::Attract,
};

pub const NEON: [Rgb; 4] = [Rgb::GREEN, Rgb::MAGENTA, Rgb::YELLOW, Rgb::CYAN];

/// Resting height of the bird on the attract screen.
pub fn rest_y() -> f32 {
    (GROUND_Y.floor() / 2.0).floor()
}

// ── Bird ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    pub rect: Rect,
    /// Vertical velocity (positive = down).
    pub vel: f32,
    pub alive: bool,
    pub color: Rgb,
    /// Wing animation frame, 0..=5.
    pub flap_frame: u32,
    /// Attract-screen bob state.
    pub bob_offset: f32,
    pub bob_step: f32,
}

impl Bird {
    pub fn new(color: Rgb) -> Self {
        Self {
            rect: Rect::new(BIRD_X, rest_y(), BIRD_SIZE, BIRD_SIZE),
            vel: 0.0,
            alive: true,
            color,
            flap_frame: 0,
            bob_offset: 0.0,
            bob_step: 1.0,
        }
    }

    pub fn on_ground(&self) -> bool {
        self.rect.bottom() >= GROUND_Y
    }
}

// ── Pipes ─────────────────────────────────────────────────────────────────────

/// A top/bottom pipe pair sharing one gap. Scored at most once.
#[derive(Clone, Debug, PartialEq)]
pub struct PipePair {
    /// Left edge of both pipes.
    pub x: f32,
    pub gap_center: f32,
    pub scored: bool,
}

impl PipePair {
    pub fn new(x: f32, gap_center: f32) -> Self {
        Self {
            x,
            gap_center,
            scored: false,
        }
    }

    pub fn top(&self) -> Rect {
        Rect::new(
            self.x,
            self.gap_center - PIPE_GAP / 2.0 - PIPE_HEIGHT,
            PIPE_WIDTH,
            PIPE_HEIGHT,
        )
    }

    pub fn bottom(&self) -> Rect {
        Rect::new(self.x, self.gap_center + PIPE_GAP / 2.0, PIPE_WIDTH, PIPE_HEIGHT)
    }

    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    pub fn hits(&self, rect: &Rect) -> bool {
        self.top().intersects(rect) || self.bottom().intersects(rect)
    }
}

// ── Master state ──────────────────────────────────────────────────────────────

/// Everything Retro Bird simulates. Owned by the loop for the process
/// lifetime; rounds reset it in place.
#[derive(Clone, Debug)]
pub struct FlappyGame {
    pub phase: PhaseMachine,
    pub bird: Bird,
    pub pipes: Vec<PipePair>,
    pub particles: ParticleSystem,
    pub score: u32,
    /// Horizontal scroll speed; zero outside play.
    pub speed: f32,
    pub pipe_timer: Countdown,
    pub pipe_color: Rgb,
    /// Ground texture scroll, visual only.
    pub ground_offset: f32,
    pub frame: u64,
}
