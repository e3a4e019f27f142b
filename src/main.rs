mod config;
mod food;
mod game;
mod grid;
mod rng;
mod snake;
mod state;
mod term;

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::config::Config;

/// Field cell as (x, y). Signed so a head stepping off the field is representable.
pub type Coords = (i16, i16);

fn main() -> Result<()> {
    let config = Config::parse();

    // The screen is in raw mode while playing, so logs go to a file.
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Starting console-snake with {:?}", config);

    let mut game = game::SnakeGame::new(config);
    game.run()
}
