use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "console-snake", about = "Classic snake in the terminal")]
pub struct Config {
    /// Playing field width in cells, border excluded
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u16).range(2..=200))]
    pub width: u16,

    /// Playing field height in cells, border excluded
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(2..=200))]
    pub height: u16,

    /// Milliseconds between two simulation steps
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,

    /// Milliseconds to wait after the first frame before the snake starts moving
    #[arg(long, default_value_t = 1000)]
    pub start_delay_ms: u64,

    /// Seed for snake and food spawning. Random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where log output is written
    #[arg(long, default_value_os_t = std::env::temp_dir().join("console-snake.log"))]
    pub log_file: PathBuf,
}

impl Config {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }
}

/// Glyphs used for the text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub border: char,
    pub background: char,
    pub food: char,
    pub snake: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols { border: '#', background: ' ', food: '@', snake: 'O' }
    }
}
