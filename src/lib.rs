//! Retro Arcade: three terminal arcade games on one fixed-timestep core.
//!
//! - `engine`: clock, input snapshot, phase machine, spawner, particles, loop
//! - `display`: draw lists and the crossterm renderer
//! - `games`: Retro Bird, Space Battle and Pong simulations

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod games;
pub mod logging;

pub use config::Config;
pub use error::{Error, Result};
