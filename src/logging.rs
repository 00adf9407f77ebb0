//! Logger setup.
//!
//! The games own the terminal, so anything written to stderr would be
//! drawn over the play field. `ARCADE_LOG` redirects the log to a file.

use std::fs::OpenOptions;

use crate::config::Config;
use crate::error::{Error, Result};

const DEFAULT_FILTER: &str = "warn";

pub fn init(config: &Config) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format_timestamp_millis();

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().map_err(|e| Error::Logger(e.to_string()))
}
