//! Simulation worker that owns the authoritative [`game_core::GameSession`].
//!
//! Ticks the session on a fixed frame clock, applies queued player input,
//! answers [`RuntimeHandle`](crate::RuntimeHandle) commands and publishes the
//! drained core events to the [`EventBus`].

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

use game_core::{CardinalDirection, GameEvent, GameSession, SessionSnapshot};

use crate::api::Result;
use crate::events::{EventBus, extract_events};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Queue a player move. Only the latest queued move is kept.
    SubmitInput { direction: CardinalDirection },
    /// Query the current session (read-only).
    QuerySnapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    /// Stop the worker loop.
    Shutdown,
}

/// Background task that advances the simulation.
///
/// The worker does not own providers or handle I/O. Provider orchestration is
/// done by [`Runtime`](crate::Runtime).
pub struct SimulationWorker {
    session: GameSession,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    frame: Duration,
    pending_input: Option<CardinalDirection>,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        session: GameSession,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        frame: Duration,
    ) -> Self {
        info!(
            seed = session.seed(),
            level = session.current_level(),
            frame_ms = frame.as_millis() as u64,
            "SimulationWorker initialized"
        );

        Self {
            session,
            command_rx,
            event_bus,
            frame,
            pending_input: None,
        }
    }

    /// Main worker loop.
    ///
    /// Returns once the session is over, on [`Command::Shutdown`], or when
    /// every handle has been dropped.
    pub async fn run(mut self) -> Result<()> {
        // Level 1 was laid out during construction.
        self.publish_pending();

        let mut frames = time::interval(self.frame);
        frames.set_missed_tick_behavior(MissedTickBehavior::Burst);

        loop {
            tokio::select! {
                biased;
                cmd = self.command_rx.recv() => match cmd {
                    Some(Command::Shutdown) | None => {
                        info!("SimulationWorker shutting down");
                        break;
                    }
                    Some(cmd) => self.handle_command(cmd),
                },
                _ = frames.tick() => {
                    if let Err(err) = self.step() {
                        error!(error = %err, "Simulation step failed");
                        return Err(err);
                    }
                    if self.session.is_over() {
                        info!(level = self.session.current_level(), "Session over, worker stopping");
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SubmitInput { direction } => {
                if let Some(replaced) = self.pending_input.replace(direction) {
                    debug!(%replaced, %direction, "Queued input replaced");
                }
            }
            Command::QuerySnapshot { reply } => {
                if reply.send(self.session.snapshot()).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => {}
        }
    }

    /// Advances the session by one frame.
    fn step(&mut self) -> Result<()> {
        let input = if self.session.awaiting_input() {
            self.pending_input.take()
        } else {
            None
        };

        self.session.tick(self.frame.as_secs_f32(), input)?;
        self.publish_pending();
        Ok(())
    }

    fn publish_pending(&mut self) {
        for event in self.session.drain_events() {
            match &event {
                GameEvent::LevelStarted { level } => info!(level, "Day started"),
                GameEvent::ExitReached { level } => info!(level, "Exit reached"),
                GameEvent::GameOver { days, reason, .. } => {
                    info!(days, %reason, "Game over")
                }
                other => debug!(event = ?other, "Core event"),
            }

            for routed in extract_events(event, &self.session) {
                self.event_bus.publish(routed);
            }
        }
    }
}
