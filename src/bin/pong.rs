//! Pong in the terminal.

use retro_arcade::display::terminal;
use retro_arcade::engine::rng;
use retro_arcade::games::pong::entities::DEFAULT_FIELD;
use retro_arcade::games::PongGame;
use retro_arcade::{logging, Config, Result};

fn main() -> Result<()> {
    let config = Config::from_env();
    if let Err(e) = logging::init(&config) {
        eprintln!("pong: logging disabled: {e}");
    }
    config.report_ignored();

    let (mut rng, seed) = rng::from_config(config.seed);
    let field = config.field_size(DEFAULT_FIELD);
    log::info!("pong: seed {seed}, field {}x{}", field.x, field.y);

    let mut game = PongGame::new(field, &mut rng);
    terminal::play(&mut game, &config, &mut rng)
}
