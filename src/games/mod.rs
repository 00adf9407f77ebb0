//! The three games. Each has `entities` (data), `compute` (passes) and
//! `draw` (frame building) modules.

pub mod flappy;
pub mod invaders;
pub mod pong;

pub use flappy::FlappyGame;
pub use invaders::InvadersGame;
pub use pong::PongGame;
