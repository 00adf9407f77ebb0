//! Space Battle, a falling-invaders shooter.
//!
//! Move with the arrow keys (or A / D), fire with Space. Aliens that
//! reach the bottom or land a bolt cost a life; press R after the last
//! one to play again.

pub mod compute;
pub mod draw;
pub mod entities;

use glam::Vec2;

pub use entities::InvadersGame;

use crate::display::Frame;
use crate::engine::input::InputSnapshot;
use crate::engine::phase::Phase;
use crate::engine::rng::GameRng;
use crate::engine::runner::{Game, TickReport};

impl InvadersGame {
    pub fn new(field: Vec2, rng: &mut GameRng) -> Self {
        compute::init_state(field, rng)
    }
}

impl Game for InvadersGame {
    fn title(&self) -> &'static str {
        "space battle"
    }

    fn field(&self) -> Vec2 {
        self.field
    }

    fn phase(&self) -> Phase {
        self.phase.phase()
    }

    fn tick(&mut self, input: &InputSnapshot, rng: &mut GameRng) -> TickReport {
        compute::tick(self, input, rng);
        TickReport::default()
    }

    fn draw(&self, frame: &mut Frame) {
        draw::draw(self, frame);
    }
}
