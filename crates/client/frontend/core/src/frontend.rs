//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends talk to the game through a [`RuntimeHandle`]: they subscribe
/// to event topics, submit panel intents and query snapshots. They do not
/// own the runtime.
///
/// # Example Implementation
///
/// ```no_run
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::{RuntimeHandle, Topic};
///
/// struct LogFrontend;
///
/// #[async_trait]
/// impl Frontend for LogFrontend {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut events = handle.subscribe(Topic::System);
///         while let Ok(event) = events.recv().await {
///             println!("{:?}", event.topic());
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Runs until the session ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
