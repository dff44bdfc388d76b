//! Top-level client wiring the runtime to its sinks.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (session worker, event bus, input provider)
//!   └─→ Sinks (render, audio, UI; one bus topic each)
//! ```
//!
//! The binary in `main.rs` is the composition root: it reads the
//! environment, installs logging, loads the game config and assembles a
//! [`Client`] driven by the [`AutopilotProvider`].

pub mod autopilot;
mod builder;
pub mod config;
pub mod logging;
pub mod sinks;

pub use autopilot::AutopilotProvider;
pub use builder::ClientBuilder;
pub use config::ClientConfig;

use anyhow::{Context, Result};
use runtime::{RunSummary, Runtime};
use tokio::task::JoinHandle;

/// Top-level client container.
pub struct Client {
    runtime: Runtime,
    sink_tasks: Vec<JoinHandle<Result<()>>>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Runs the session to game over, then drains and stops the sinks.
    pub async fn run(mut self) -> Result<RunSummary> {
        let outcome = self.runtime.run().await;
        self.runtime.shutdown().await?;

        // Sinks end once every bus sender is gone, after the buffered events.
        for task in self.sink_tasks {
            task.await.context("sink task panicked")??;
        }

        Ok(outcome?)
    }
}
