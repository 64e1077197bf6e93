//! Skirmish client binary.
//!
//! Loads a scenario and search configuration, then plays decision rounds in
//! which the agent searches for whichever side is to move and the chosen
//! joint action is applied.
//!
//! # Examples
//!
//! ```bash
//! SKIRMISH_SCENARIO=crossing SKIRMISH_DEPTH=3 cargo run -p skirmish-client
//! RUST_LOG=skirmish_ai=debug cargo run -p skirmish-client
//! ```

mod config;
mod session;

use anyhow::{Context, Result};
use skirmish_ai::MinimaxAgent;
use skirmish_content::ContentFactory;
use skirmish_core::CombatState;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    setup_logging(&config)?;

    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    tracing::info!("Content directory: {}", factory.data_dir().display());

    let mut search = factory.load_config()?;
    if let Some(depth) = config.depth_override {
        search.depth = depth;
    }
    let agent = MinimaxAgent::new(search).context("invalid search configuration")?;
    tracing::info!(
        depth = search.depth,
        evaluator = %search.evaluator,
        "Agent ready"
    );

    let snapshot = factory.load_scenario(&config.scenario)?;
    let state = CombatState::from_snapshot(&snapshot)?;
    tracing::info!(
        scenario = %config.scenario,
        width = snapshot.width,
        height = snapshot.height,
        "Scenario loaded"
    );
    session::log_positions(&state);

    let (rounds, state) = session::play(&agent, state, config.rounds)?;
    tracing::info!("Played {} rounds", rounds.len());
    session::log_positions(&state);

    Ok(())
}

/// Setup logging to stderr, plus a log file when a directory is configured.
fn setup_logging(config: &ClientConfig) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let file_layer = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, "skirmish.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            // Leak the guard to keep file writer alive
            std::mem::forget(guard);

            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking_file)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
