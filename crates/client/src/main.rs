//! Idle hunter client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (game logic, timers, event bus) via `RuntimeBuilder`
//! 2. Frontend (the autoplaying dashboard)
//!
//! Both are built independently and injected into the [`Client`] container.
//!
//! # Examples
//!
//! ```bash
//! GAME_SEED=7 SESSION_SECS=120 TIME_SCALE=10 cargo run -p idle-client
//! ```

use anyhow::Result;
use client_bootstrap::{ClientConfig, RuntimeBuilder};
use idle_client::{AutoplayFrontend, Client, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on exit
    let _guard = logging::setup_logging(config.log_dir.as_deref(), config.session_id.as_deref())?;

    tracing::info!("Starting idle hunter client");
    tracing::info!(seed = config.seed, session = ?config.session, "configuration loaded");

    // 3. Build Runtime (independent layer)
    let setup = RuntimeBuilder::new(config).build().await?;

    // 4. Build Frontend (independent layer)
    let frontend = AutoplayFrontend::new(
        setup.oracles.clone(),
        setup.config.frontend.clone(),
        setup.config.session,
    );

    // 5. Build and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
