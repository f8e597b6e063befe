//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the game.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_content::{ContentCatalog, starting_state};
use game_core::{GameConfig, GameState};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::oracle::OracleBundle;
use crate::workers::{Command, SimulationWorker, TimerSettings};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Real-time period of stamina regeneration.
    pub stamina_tick: Duration,
    /// Real-time period of the weather countdown.
    pub weather_tick: Duration,
    /// Game milliseconds per real millisecond.
    pub time_scale: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 256,
            command_buffer_size: 32,
            stamina_tick: Duration::from_secs(1),
            weather_tick: Duration::from_secs(1),
            time_scale: 1,
        }
    }
}

/// Main runtime that orchestrates game simulation
///
/// Runtime owns the worker task; [`RuntimeHandle`] provides a cloneable
/// façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a handle for clients to interact with the runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Stop the worker and wait for it to finish.
    ///
    /// The worker exits once every handle clone has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Option<Arc<ContentCatalog>>,
    state: Option<GameState>,
    seed: u64,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content: None,
            state: None,
            seed: 0,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Content catalog every action reads from. Required.
    pub fn content(mut self, content: impl Into<Arc<ContentCatalog>>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Resume from a saved state instead of a fresh character.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Seed of a fresh character; ignored with [`Self::initial_state`].
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Spawns the simulation worker on the current tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let content = self.content.ok_or(RuntimeError::MissingContent)?;
        if self.config.time_scale == 0 {
            return Err(RuntimeError::InvalidTimeScale);
        }

        let game_config = Arc::new(self.config.game_config);
        let initial_state = match self.state {
            Some(state) => state,
            None => starting_state(self.seed, &game_config, &content),
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let timers = TimerSettings {
            stamina_tick: self.config.stamina_tick,
            weather_tick: self.config.weather_tick,
            time_scale: self.config.time_scale,
        };
        let sim_worker = SimulationWorker::new(
            initial_state,
            OracleBundle::new(content, game_config),
            timers,
            command_rx,
            event_bus,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}
