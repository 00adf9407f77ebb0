//! Retro Bird in the terminal.

use retro_arcade::display::terminal;
use retro_arcade::engine::rng;
use retro_arcade::games::FlappyGame;
use retro_arcade::{logging, Config, Result};

fn main() -> Result<()> {
    let config = Config::from_env();
    if let Err(e) = logging::init(&config) {
        eprintln!("retro bird: logging disabled: {e}");
    }
    config.report_ignored();

    let (mut rng, seed) = rng::from_config(config.seed);
    log::info!("retro bird: seed {seed}");

    let mut game = FlappyGame::new(&mut rng);
    terminal::play(&mut game, &config, &mut rng)
}
