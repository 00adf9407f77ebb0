//! Space Battle entity types. Pure data, no game rules.

use glam::Vec2;
use rand::Rng;

use crate::display::Rgb;
use crate::engine::geom::Rect;
use crate::engine::particles::{ParticleSpec, ParticleSystem};
use crate::engine::phase::{Phase, PhaseMachine, PhaseRules};
use crate::engine::spawn::Countdown;

// ── Field & tuning ────────────────────────────────────────────────────────────

pub const DEFAULT_FIELD: Vec2 = Vec2::new(800.0, 600.0);

pub const START_LIVES: u32 = 3;

pub const PLAYER_SIZE: Vec2 = Vec2::new(60.0, 50.0);
/// Distance from the player's bottom edge to the bottom of the field.
pub const PLAYER_BOTTOM_MARGIN: f32 = 40.0;
pub const PLAYER_SPEED: f32 = 6.0;
pub const SHOT_COOLDOWN: u32 = 10;
/// Triple-shot and shield duration.
pub const POWER_UP_DURATION: u32 = 400;

pub const BULLET_SIZE: Vec2 = Vec2::new(4.0, 18.0);
pub const BULLET_SPEED: f32 = 10.0;
/// Side bullets of a triple shot: horizontal offset and drift per tick.
pub const SIDE_SHOT_OFFSET: Vec2 = Vec2::new(20.0, 10.0);
pub const SIDE_SHOT_DRIFT: f32 = 2.0;

pub const BOLT_SIZE: Vec2 = Vec2::new(6.0, 16.0);
pub const BOLT_SPEED: f32 = 4.0;
pub const BOLT_CHANCE: f64 = 0.02;

pub const ALIEN_SIZE: Vec2 = Vec2::new(50.0, 50.0);
/// Aliens are spawned centred this far above the field.
pub const ALIEN_SPAWN_Y: f32 = -50.0;
pub const ALIEN_SPAWN_MARGIN: f32 = 50.0;
pub const WOBBLE_STEP: f32 = 0.05;
pub const WOBBLE_AMPLITUDE: f32 = 1.5;
pub const FIRST_SHOT_DELAY: (u32, u32) = (60, 180);
pub const RELOAD_DELAY: (u32, u32) = (80, 200);

pub const SPAWN_INTERVAL: u32 = 60;
pub const SPAWN_INTERVAL_STEP: u32 = 3;
pub const SPAWN_INTERVAL_FLOOR: u32 = 20;
pub const KILLS_PER_LEVEL: u32 = 20;

pub const POWER_UP_SIZE: Vec2 = Vec2::new(25.0, 25.0);
pub const POWER_UP_SPEED: f32 = 3.0;
pub const POWER_UP_WOBBLE_STEP: f32 = 0.1;
pub const POWER_UP_WOBBLE_AMPLITUDE: f32 = 0.5;
pub const DROP_CHANCE: f64 = 0.15;

pub const SHIELD_BURST: usize = 12;
pub const HIT_BURST: usize = 25;
pub const PICKUP_BURST: usize = 20;

pub const STAR_COUNT: usize = 100;

pub const PARTICLES: ParticleSpec = ParticleSpec {
    vx: (-4.0, 4.0),
    vy: (-4.0, 4.0),
    lifetime: 40,
    size: (2.0, 6.0),
    shrink: 0.1,
    gravity: 0.2,
};

pub const RULES: PhaseRules = PhaseRules {
    initial: Phase::Playing,
    pausable: false,
    restart_to: Phase::Playing,
};

pub const PURPLE: Rgb = Rgb(200, 0, 255);
pub const BLUE: Rgb = Rgb(0, 150, 255);

// ── Aliens ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienKind {
    /// Slow, falls straight down.
    Octopus,
    /// Drifts sideways and wobbles.
    Insect,
    /// Fast flying saucer that wobbles.
    Saucer,
}

impl AlienKind {
    /// Weighted roll: 60% octopus, 25% insect, 15% saucer.
    pub fn roll(rng: &mut impl Rng) -> Self {
        let r: f64 = rng.gen();
        if r < 0.6 {
            AlienKind::Octopus
        } else if r < 0.85 {
            AlienKind::Insect
        } else {
            AlienKind::Saucer
        }
    }

    pub fn points(self) -> u32 {
        match self {
            AlienKind::Octopus => 10,
            AlienKind::Insect => 20,
            AlienKind::Saucer => 30,
        }
    }

    /// Vertical speed range.
    pub fn fall_speed(self) -> (f32, f32) {
        match self {
            AlienKind::Octopus => (1.5, 2.5),
            AlienKind::Insect => (2.0, 3.0),
            AlienKind::Saucer => (2.5, 3.5),
        }
    }

    pub fn wobbles(self) -> bool {
        match self {
            AlienKind::Octopus => false,
            AlienKind::Insect | AlienKind::Saucer => true,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            AlienKind::Octopus => Rgb::RED,
            AlienKind::Insect => PURPLE,
            AlienKind::Saucer => Rgb::ORANGE,
        }
    }

    /// Particles emitted when destroyed.
    pub fn burst(self) -> usize {
        match self {
            AlienKind::Octopus | AlienKind::Insect => 20,
            AlienKind::Saucer => 25,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub rect: Rect,
    pub vel: Vec2,
    pub kind: AlienKind,
    /// Ticks until the next firing roll.
    pub shoot_cooldown: u32,
    pub wobble: f32,
    /// Cleared when destroyed or once its landing has been charged.
    pub alive: bool,
    /// Passed the bottom edge this tick; costs a life in the Collision pass.
    pub landed: bool,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Player,
    Alien,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
    pub vel: Vec2,
    pub owner: Owner,
    pub alive: bool,
}

impl Projectile {
    pub fn player_bullet(center: Vec2, drift: f32) -> Self {
        Self {
            rect: Rect::from_center(center, BULLET_SIZE),
            vel: Vec2::new(drift, -BULLET_SPEED),
            owner: Owner::Player,
            alive: true,
        }
    }

    pub fn alien_bolt(center: Vec2) -> Self {
        Self {
            rect: Rect::from_center(center, BOLT_SIZE),
            vel: Vec2::new(0.0, BOLT_SPEED),
            owner: Owner::Alien,
            alive: true,
        }
    }
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Three bullets per shot.
    TripleShot,
    /// Alien bolts do no damage.
    Shield,
}

impl PowerUpKind {
    pub fn roll(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            PowerUpKind::TripleShot
        } else {
            PowerUpKind::Shield
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            PowerUpKind::TripleShot => Rgb::ORANGE,
            PowerUpKind::Shield => Rgb::CYAN,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    pub wobble: f32,
    pub alive: bool,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Horizontal velocity chosen by input, applied in Update.
    pub vx: f32,
    pub shot_cooldown: u32,
    /// Ticks of triple shot remaining.
    pub triple_shot: u32,
    /// Ticks of shield remaining.
    pub shield: u32,
    /// Engine flicker, visual only.
    pub engine_glow: u32,
}

impl Player {
    pub fn new(field: Vec2) -> Self {
        Self {
            rect: Rect::from_mid_bottom(
                Vec2::new(field.x / 2.0, field.y - PLAYER_BOTTOM_MARGIN),
                PLAYER_SIZE,
            ),
            vx: 0.0,
            shot_cooldown: 0,
            triple_shot: 0,
            shield: 0,
            engine_glow: 0,
        }
    }

    pub fn shielded(&self) -> bool {
        self.shield > 0
    }
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

/// Decorative star; wraps to the top instead of being removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
    pub brightness: u8,
    pub size: f32,
}

// ── Master state ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct InvadersGame {
    pub phase: PhaseMachine,
    pub field: Vec2,
    pub player: Player,
    pub aliens: Vec<Alien>,
    /// Player bullets and alien bolts.
    pub projectiles: Vec<Projectile>,
    pub power_ups: Vec<PowerUp>,
    pub particles: ParticleSystem,
    pub stars: Vec<Star>,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub kills: u32,
    pub spawn_timer: Countdown,
    /// Ticks since the round started.
    pub elapsed: u64,
    pub frame: u64,
}
