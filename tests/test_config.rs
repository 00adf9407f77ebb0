use std::collections::HashMap;
use std::path::PathBuf;

use glam::Vec2;

use retro_arcade::config::*;

fn config_from(pairs: &[(&str, &str)]) -> Config {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn empty_environment_gives_defaults() {
    let c = config_from(&[]);
    assert_eq!(c, Config::default());
    assert_eq!(c.fps, DEFAULT_FPS);
    assert_eq!(c.field_size(Vec2::new(800.0, 600.0)), Vec2::new(800.0, 600.0));
}

#[test]
fn reads_every_setting() {
    let c = config_from(&[
        (ENV_WINDOW_SIZE, "1024x768"),
        (ENV_EMBEDDED, "1"),
        (ENV_SEED, "1234"),
        (ENV_FPS, "30"),
        (ENV_LOG, "/tmp/arcade.log"),
    ]);
    assert_eq!(c.window_size, Some((1024, 768)));
    assert!(c.embedded);
    assert_eq!(c.seed, Some(1234));
    assert_eq!(c.fps, 30);
    assert_eq!(c.log_file, Some(PathBuf::from("/tmp/arcade.log")));
    assert_eq!(c.field_size(Vec2::new(800.0, 600.0)), Vec2::new(1024.0, 768.0));
}

#[test]
fn malformed_values_fall_back() {
    let c = config_from(&[
        (ENV_WINDOW_SIZE, "huge"),
        (ENV_SEED, "abc"),
        (ENV_FPS, "0"),
        (ENV_LOG, "  "),
    ]);
    assert_eq!(c.window_size, None);
    assert_eq!(c.seed, None);
    assert_eq!(c.fps, DEFAULT_FPS);
    assert_eq!(c.log_file, None);
}

#[test]
fn rejected_values_are_kept_for_reporting() {
    let c = config_from(&[(ENV_WINDOW_SIZE, "huge"), (ENV_SEED, "abc"), (ENV_FPS, "0")]);
    assert_eq!(c.ignored.len(), 3);
    assert!(c.ignored[0].starts_with(ENV_WINDOW_SIZE));
    assert!(c.ignored[1].starts_with(ENV_SEED));
    assert!(c.ignored[2].starts_with(ENV_FPS));

    let clean = config_from(&[(ENV_SEED, "7"), (ENV_FPS, "30")]);
    assert!(clean.ignored.is_empty());
}

#[test]
fn fps_above_limit_is_rejected() {
    assert_eq!(config_from(&[(ENV_FPS, "1000")]).fps, DEFAULT_FPS);
    assert_eq!(config_from(&[(ENV_FPS, "240")]).fps, 240);
}

// ── parse_window_size ─────────────────────────────────────────────────────────

#[test]
fn window_size_separators_and_spacing() {
    assert_eq!(parse_window_size("800x600").unwrap(), (800, 600));
    assert_eq!(parse_window_size(" 1280 X 720 ").unwrap(), (1280, 720));
    assert_eq!(parse_window_size("640,480").unwrap(), (640, 480));
}

#[test]
fn window_size_is_raised_to_minimum() {
    assert_eq!(parse_window_size("10x10").unwrap(), (320, 240));
}

#[test]
fn window_size_rejects_garbage() {
    assert!(parse_window_size("").is_err());
    assert!(parse_window_size("800").is_err());
    assert!(parse_window_size("800x600x2").is_err());
    assert!(parse_window_size("axb").is_err());
}
