//! Top-level client orchestrating the runtime and a frontend.
//!
//! ```text
//! Client
//!   ├─→ Runtime (simulation worker, timers, event bus)
//!   └─→ Frontend (receives a RuntimeHandle)
//! ```
//!
//! The binary builds both layers independently and injects them through
//! [`ClientBuilder`].

pub mod autoplay;
mod builder;
pub mod logging;

pub use autoplay::AutoplayFrontend;
pub use builder::ClientBuilder;
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. [`Client::builder`] receives an already running runtime and a frontend
/// 2. [`Client::run`] hands a runtime handle to the frontend and waits for it
/// 3. When the frontend returns, the runtime is shut down
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Runs the frontend to completion, then stops the runtime.
    pub async fn run(self) -> Result<()> {
        let Self {
            runtime,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(runtime.handle()).await;
        drop(frontend);

        if let Err(err) = runtime.shutdown().await {
            tracing::error!(error = %err, "runtime shutdown failed");
        }

        frontend_result
    }
}
