//! Pong against an AI paddle. First to seven wins.
//!
//! Up / Down move the left paddle, P pauses, Enter starts a new match
//! once one is decided.

pub mod compute;
pub mod draw;
pub mod entities;

use glam::Vec2;

pub use entities::PongGame;

use crate::display::Frame;
use crate::engine::input::InputSnapshot;
use crate::engine::phase::Phase;
use crate::engine::rng::GameRng;
use crate::engine::runner::{Game, TickReport};

impl PongGame {
    pub fn new(field: Vec2, rng: &mut GameRng) -> Self {
        compute::init_state(field, rng)
    }
}

impl Game for PongGame {
    fn title(&self) -> &'static str {
        "pong"
    }

    fn field(&self) -> Vec2 {
        self.field
    }

    fn phase(&self) -> Phase {
        self.phase.phase()
    }

    fn tick(&mut self, input: &InputSnapshot, rng: &mut GameRng) -> TickReport {
        match compute::tick(self, input, rng) {
            Some(hold) => TickReport::hold(hold),
            None => TickReport::default(),
        }
    }

    fn draw(&self, frame: &mut Frame) {
        draw::draw(self, frame);
    }
}
