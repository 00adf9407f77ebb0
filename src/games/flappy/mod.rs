//! Retro Bird, a Flappy-Bird clone.
//!
//! Click (or Space / Up / Enter) to start, flap through the pipe gaps,
//! and click again after a crash to return to the title screen.

pub mod compute;
pub mod draw;
pub mod entities;

use glam::Vec2;

pub use entities::FlappyGame;

use crate::display::Frame;
use crate::engine::input::InputSnapshot;
use crate::engine::phase::Phase;
use crate::engine::rng::GameRng;
use crate::engine::runner::{Game, TickReport};

impl FlappyGame {
    pub fn new(rng: &mut GameRng) -> Self {
        compute::init_state(rng)
    }
}

impl Game for FlappyGame {
    fn title(&self) -> &'static str {
        "retro bird"
    }

    fn field(&self) -> Vec2 {
        entities::FIELD
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
