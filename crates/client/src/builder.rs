//! Client builder with dependency injection pattern.

use anyhow::{Context, Result};
use runtime::{Runtime, RuntimeHandle};
use tokio::task::JoinHandle;

use crate::Client;
use crate::sinks::{EventSink, spawn_sink};

/// Type-erased sink waiting for a runtime to subscribe to.
trait PendingSink {
    fn spawn(self: Box<Self>, handle: &RuntimeHandle) -> JoinHandle<Result<()>>;
}

impl<S: EventSink> PendingSink for S {
    fn spawn(self: Box<Self>, handle: &RuntimeHandle) -> JoinHandle<Result<()>> {
        spawn_sink(*self, handle)
    }
}

/// Builder for constructing a Client with proper validation.
///
/// The runtime is required; sinks are optional and subscribe when the
/// client is built.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<Runtime>,
    sinks: Vec<Box<dyn PendingSink>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime (required).
    pub fn runtime(mut self, runtime: Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Attach a sink for one event topic.
    pub fn sink(mut self, sink: impl EventSink) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Build the Client and start its sinks.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime is not set.
    pub fn build(self) -> Result<Client> {
        let runtime = self.runtime.context("Runtime is required")?;
        let handle = runtime.handle();
        let sink_tasks = self
            .sinks
            .into_iter()
            .map(|sink| sink.spawn(&handle))
            .collect();

        Ok(Client {
            runtime,
            sink_tasks,
        })
    }
}
