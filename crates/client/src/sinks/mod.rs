//! Log-backed sinks for the render, audio and UI topics.
//!
//! Each sink subscribes to one bus topic and runs on its own task until the
//! bus closes.

mod audio;
mod render;
mod ui;

pub use audio::{AudioSink, PlayedClip};
pub use render::RenderSink;
pub use ui::UiSink;

use anyhow::Result;
use async_trait::async_trait;
use runtime::{Event, RuntimeHandle, Topic};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// Consumer of one event topic.
#[async_trait]
pub trait EventSink: Send + 'static {
    fn topic(&self) -> Topic;

    async fn handle(&mut self, event: Event) -> Result<()>;
}

/// Subscribes `sink` and drives it on a background task.
///
/// The subscription is taken before this returns, so no event published
/// afterwards is missed.
pub fn spawn_sink<S: EventSink>(mut sink: S, handle: &RuntimeHandle) -> JoinHandle<Result<()>> {
    let topic = sink.topic();
    let mut rx = handle.subscribe(topic);

    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => sink.handle(event).await?,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(?topic, skipped, "Sink lagged behind, events dropped");
                }
                Err(RecvError::Closed) => break,
            }
        }
        Ok(())
    })
}
