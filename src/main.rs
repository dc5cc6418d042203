use anyhow::{Context, Result};
use clap::Parser;
use retro_snake::game::{GameConfig, GameEngine};
use retro_snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "retro_snake")]
#[command(version, about = "Retro Snake with Walls")]
struct Cli {
    /// Milliseconds between two snake moves
    #[arg(long, default_value = "200", value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Seed for wall layout and food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file. The terminal is taken by the board, so
    /// nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::with_tick_interval(cli.tick_ms);
    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };

    let mut human_mode = HumanMode::with_engine(engine);
    human_mode.run().await?;

    Ok(())
}
