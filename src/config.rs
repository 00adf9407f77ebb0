//! Startup configuration read once from the launcher's environment.
//!
//! Every value is optional. A malformed value is replaced by its default
//! so a bad launcher setting never prevents a game starting. Parsing runs
//! before the logger exists, so rejected values are kept on the `Config`
//! and reported once logging is up.

use std::path::PathBuf;

use glam::Vec2;

use crate::error::{Error, Result};

pub const ENV_WINDOW_SIZE: &str = "ARCADE_WINDOW_SIZE";
pub const ENV_EMBEDDED: &str = "ARCADE_EMBEDDED";
pub const ENV_SEED: &str = "ARCADE_SEED";
pub const ENV_FPS: &str = "ARCADE_FPS";
pub const ENV_LOG: &str = "ARCADE_LOG";

pub const DEFAULT_FPS: u32 = 60;
const MAX_FPS: u32 = 240;
const MIN_WIDTH: u32 = 320;
const MIN_HEIGHT: u32 = 240;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Logical play-field override; games with a fixed field ignore it.
    pub window_size: Option<(u32, u32)>,
    /// Embedded in a launcher: draw in place, no alternate screen.
    pub embedded: bool,
    /// Fixed seed for the random source; `None` means time-derived.
    pub seed: Option<u64>,
    /// Target tick rate.
    pub fps: u32,
    pub log_file: Option<PathBuf>,
    /// Settings that were present but unusable, one message each.
    pub ignored: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_size: None,
            embedded: false,
            seed: None,
            fps: DEFAULT_FPS,
            log_file: None,
            ignored: Vec::new(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(ENV_WINDOW_SIZE) {
            match parse_window_size(&raw) {
                Ok(size) => config.window_size = Some(size),
                Err(e) => config.ignored.push(format!("{}: {}", ENV_WINDOW_SIZE, e)),
            }
        }

        config.embedded = lookup(ENV_EMBEDDED).is_some_and(|v| v.trim() == "1");

        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config
                    .ignored
                    .push(format!("{}: {:?} is not a u64", ENV_SEED, raw)),
            }
        }

        if let Some(raw) = lookup(ENV_FPS) {
            match parse_fps(&raw) {
                Ok(fps) => config.fps = fps,
                Err(e) => config.ignored.push(format!("{}: {}", ENV_FPS, e)),
            }
        }

        config.log_file = lookup(ENV_LOG)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        config
    }

    /// Log every rejected setting. Call after `logging::init`.
    pub fn report_ignored(&self) {
        for message in &self.ignored {
            log::warn!("ignoring {}", message);
        }
    }

    /// The play-field size to use, given the game's own default.
    pub fn field_size(&self, default: Vec2) -> Vec2 {
        match self.window_size {
            Some((w, h)) => Vec2::new(w as f32, h as f32),
            None => default,
        }
    }
}

/// Parse `"800x600"` or `"800,600"` (whitespace and case ignored).
/// Each axis is raised to the minimum playable size.
pub fn parse_window_size(raw: &str) -> Result<(u32, u32)> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    if cleaned.is_empty() {
        return Err(Error::Config("empty window size".to_string()));
    }

    let separator = if cleaned.contains('x') { 'x' } else { ',' };
    let parts: Vec<&str> = cleaned.split(separator).collect();
    if parts.len() != 2 {
        return Err(Error::Config(format!("expected WxH, got {:?}", raw)));
    }

    let parse = |s: &str| {
        s.parse::<u32>()
            .map_err(|_| Error::Config(format!("{:?} is not a number", s)))
    };
    let width = parse(parts[0])?.max(MIN_WIDTH);
    let height = parse(parts[1])?.max(MIN_HEIGHT);
    Ok((width, height))
}

fn parse_fps(raw: &str) -> Result<u32> {
    let fps = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::Config(format!("{:?} is not a number", raw)))?;
    if fps == 0 || fps > MAX_FPS {
        return Err(Error::Config(format!("fps must be 1..={}, got {}", MAX_FPS, fps)));
    }
    Ok(fps)
}
