//! Short-lived visual particles.
//!
//! Particles never touch score or lives; they only exist to be drawn.
//! Each one carries a countdown and is removed when it reaches zero.

use glam::Vec2;
use rand::Rng;

use crate::display::Rgb;

/// Burst parameters for one kind of effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub vx: (f32, f32),
    pub vy: (f32, f32),
    pub lifetime: u32,
    pub size: (f32, f32),
    /// Size lost per tick (size never drops below 1).
    pub shrink: f32,
    /// Added to vy every tick.
    pub gravity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
    pub color: Rgb,
}

impl Particle {
    fn update(&mut self, gravity: f32, shrink: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
        self.size = (self.size - shrink).max(1.0);
        self.life = self.life.saturating_sub(1);
    }

    /// Remaining life in `0.0..=1.0`, for fading.
    pub fn fade(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParticleSystem {
    spec: ParticleSpec,
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new(spec: ParticleSpec) -> Self {
        Self {
            spec,
            particles: Vec::new(),
        }
    }

    pub fn emit(&mut self, at: Vec2, color: Rgb, count: usize, rng: &mut impl Rng) {
        let spec = self.spec;
        self.particles.extend((0..count).map(|_| Particle {
            pos: at,
            vel: Vec2::new(
                rng.gen_range(spec.vx.0..=spec.vx.1),
                rng.gen_range(spec.vy.0..=spec.vy.1),
            ),
            life: spec.lifetime,
            max_life: spec.lifetime,
            size: rng.gen_range(spec.size.0..=spec.size.1),
            color,
        }));
    }

    /// One tick: move, age, and drop expired particles.
    pub fn update(&mut self) {
        let (gravity, shrink) = (self.spec.gravity, self.spec.shrink);
        for p in &mut self.particles {
            p.update(gravity, shrink);
        }
        self.particles.retain(|p| p.life > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
