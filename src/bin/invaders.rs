//! Space Battle in the terminal.

use retro_arcade::display::terminal;
use retro_arcade::engine::rng;
use retro_arcade::games::invaders::entities::DEFAULT_FIELD;
use retro_arcade::games::InvadersGame;
use retro_arcade::{logging, Config, Result};

fn main() -> Result<()> {
    let config = Config::from_env();
    if let Err(e) = logging::init(&config) {
        eprintln!("space battle: logging disabled: {e}");
    }
    config.report_ignored();

    let (mut rng, seed) = rng::from_config(config.seed);
    let field = config.field_size(DEFAULT_FIELD);
    log::info!("space battle: seed {seed}, field {}x{}", field.x, field.y);

    let mut game = InvadersGame::new(field, &mut rng);
    terminal::play(&mut game, &config, &mut rng)
}
