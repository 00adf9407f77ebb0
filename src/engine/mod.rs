//! Game-agnostic core shared by all three games.
//!
//! One loop iteration is one tick: Input → Update → Collision → Spawner →
//! Render → present → rate cap. Everything here is single-threaded.

pub mod clock;
pub mod geom;
pub mod input;
pub mod particles;
pub mod phase;
pub mod rng;
pub mod runner;
pub mod spawn;

pub use clock::FixedClock;
pub use geom::Rect;
pub use input::{InputEvent, InputSnapshot, InputSource, Key, KeyTracker};
pub use particles::{Particle, ParticleSpec, ParticleSystem};
pub use phase::{Phase, PhaseMachine, PhaseRules};
pub use rng::GameRng;
pub use runner::{run, Game, TickReport};
pub use spawn::Countdown;
