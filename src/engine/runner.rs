//! The fixed-timestep loop shared by every game.

use std::time::Duration;

use glam::Vec2;

use super::clock::FixedClock;
use super::input::{InputSnapshot, InputSource};
use super::phase::Phase;
use super::rng::GameRng;
use crate::display::{Frame, Renderer};
use crate::error::Result;

/// What a tick asks of the loop besides rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Blocking pause after the frame is presented (e.g. after a point).
    pub hold: Option<Duration>,
}

impl TickReport {
    pub fn hold(duration: Duration) -> Self {
        Self {
            hold: Some(duration),
        }
    }
}

/// A game owns its simulation context (registry, round state, phase).
///
/// `tick` runs phase handling and, while playing, the Update, Collision
/// and Spawner passes in that order. `draw` only reads state.
pub trait Game {
    fn title(&self) -> &'static str;

    /// Logical play-field size, used to scale the frame.
    fn field(&self) -> Vec2;

    fn phase(&self) -> Phase;

    fn tick(&mut self, input: &InputSnapshot, rng: &mut GameRng) -> TickReport;

    fn draw(&self, frame: &mut Frame);
}

/// Drive `game` until a quit is requested. Returns the number of ticks run.
pub fn run<G, I, R>(
    game: &mut G,
    input: &mut I,
    renderer: &mut R,
    clock: &mut FixedClock,
    rng: &mut GameRng,
) -> Result<u64>
where
    G: Game,
    I: InputSource,
    R: Renderer,
{
    log::info!("{}: loop started at {:?} per tick", game.title(), clock.period());
    let mut last_phase = game.phase();

    loop {
        let snapshot = input.poll(clock.tick())?;
        if snapshot.quit_requested() {
            log::info!("{}: quit after {} ticks", game.title(), clock.tick());
            break;
        }

        let report = game.tick(&snapshot, rng);

        let phase = game.phase();
        if phase != last_phase {
            log::info!("{}: {} -> {}", game.title(), last_phase, phase);
            last_phase = phase;
        }

        let mut frame = Frame::new(game.field());
        game.draw(&mut frame);
        renderer.present(&frame)?;

        if let Some(duration) = report.hold {
            clock.hold(duration);
        }
        clock.wait();
    }

    Ok(clock.tick())
}
