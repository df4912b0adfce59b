use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use wrap_snake::game::GameConfig;
use wrap_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "wrap_snake")]
#[command(version, about = "Wraparound Snake for the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 20)]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 10)]
    height: i32,

    /// Starting snake length
    #[arg(long, default_value_t = 3)]
    length: usize,

    /// Apples required to win
    #[arg(long, default_value_t = 5)]
    apples: u32,

    /// Milliseconds between logical steps
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Write diagnostics to this file (the alternate screen hides stderr)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Info, LogConfig::default(), file)
            .context("Failed to initialize logger")?;
    }

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        initial_snake_length: cli.length,
        apples_to_win: cli.apples,
        tick_interval_ms: cli.tick_ms,
    };

    info!(
        "starting {}x{} game, {} apples to win",
        config.grid_width, config.grid_height, config.apples_to_win
    );

    let mut mode = PlayMode::new(config).context("Invalid game configuration")?;
    mode.run().await
}
