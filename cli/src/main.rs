use anyhow::{Context, Result};
use clap::Parser;
use othello_core::{CommandSource, PlayEngine, RandomMover};
use std::io;

mod config;
mod input;
mod render;

use config::{Args, Config};
use input::LineSource;
use render::TextRenderer;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_args(args);
    log::debug!("config: {config:?}");

    let source: Box<dyn CommandSource> = if config.debug_auto {
        log::info!("auto-move enabled, seed {}", config.seed);
        Box::new(RandomMover::new(config.seed))
    } else {
        Box::new(LineSource::new(io::stdin().lock(), io::stdout()))
    };

    let mut engine = PlayEngine::new(TextRenderer::new(io::stdout()), source);
    engine.run().context("game aborted")?;
    Ok(())
}
