//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! feeding player input, reading the session or streaming events from
//! specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{CardinalDirection, SessionSnapshot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Queue a move for the player.
    ///
    /// The worker keeps only the latest direction and applies it on the first
    /// frame the player is ready to act.
    pub async fn submit_input(&self, direction: CardinalDirection) -> Result<()> {
        self.command_tx
            .send(Command::SubmitInput { direction })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Query the current session (read-only snapshot)
    pub async fn query_snapshot(&self) -> Result<SessionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QuerySnapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Ask the simulation worker to stop after the current frame.
    pub async fn shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Render` - Board layout, motions, animations and removals
    /// - `Topic::Audio` - Sound cues
    /// - `Topic::Ui` - Day card, food counter, timer and game-over text
    /// - `Topic::Turn` - Turn phases and session lifecycle
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut ui_rx = handle.subscribe(Topic::Ui);
    /// while let Ok(event) = ui_rx.recv().await {
    ///     // Draw the text
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }
}
