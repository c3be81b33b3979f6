// ABOUTME: Main application entry point.
// ABOUTME: Loads config, replays a pointer trace through the console, and logs each layout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use lotus_app::{trace, Console};
use lotus_core::Config;

/// Container width used for replay (the default window minus page margins)
const CONTAINER_WIDTH_PX: f64 = 1200.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting lotus-console");

    let config = Config::load_or_default();
    tracing::info!(
        "Loaded config: sizes={:?} min_pane_width_px={}",
        config.layout.initial_sizes,
        config.layout.min_pane_width_px
    );

    let events = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => trace::load(&path)?,
        None => trace::demo(),
    };

    let mut console =
        Console::new(&config, CONTAINER_WIDTH_PX).context("Invalid layout settings")?;
    println!("{}", console.describe_layout());

    for event in &events {
        let changed = console.handle(event);
        tracing::info!("{:?}", event);
        if changed {
            println!("{}", console.describe_layout());
        }
    }

    println!("{}", console.header());
    if console.release_pointer() {
        tracing::warn!(
            "Trace ended mid-drag, pointer listeners released ({} left)",
            console.surface().listener_count()
        );
    }

    Ok(())
}
