//! Castle Adventure - Console front end
//!
//! Reads commands from stdin and prints the game to stdout. Logs go to
//! stderr so they never interleave with the story.

use std::io;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use castle_adventure::application::services::WorldService;
use castle_adventure::infrastructure::blueprint_source::source_from_config;
use castle_adventure::infrastructure::config::AppConfig;
use castle_adventure::infrastructure::console::Console;
use castle_adventure::infrastructure::session_adapter::SessionAdapter;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "castle_adventure=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Castle Adventure");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Max journal length: {}", config.session.max_journal_length);
    tracing::info!("  Action delay: {:?}", config.action_delay);

    // Load and validate the world
    let source = source_from_config(&config);
    tracing::info!("  World source: {}", source.describe());
    let blueprint = source.load_blueprint()?;
    let title = blueprint.name.clone();
    let worlds = WorldService::new(blueprint)
        .with_context(|| format!("World '{}' failed validation", title))?;

    let adapter = SessionAdapter::new(worlds, &config.session);
    let mut console = Console::new(adapter, title, config.action_delay);

    let stdin = io::stdin();
    console.run(stdin.lock(), io::stdout())?;

    tracing::info!("Castle Adventure stopped");
    Ok(())
}
