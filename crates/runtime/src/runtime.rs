//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and feeds the input provider whenever the player's turn opens.

use std::time::Duration;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use game_core::{GameConfig, GameOverReason, GameSession, TurnPhase};

use crate::api::{InputProvider, Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic, TurnEvent};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub seed: u64,
    /// Day the session starts on.
    pub start_level: u32,
    /// Simulation frames per second.
    pub frame_rate: u32,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: 0,
            start_level: 1,
            frame_rate: 60,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    fn frame(&self) -> Result<Duration> {
        if self.frame_rate == 0 {
            return Err(RuntimeError::InvalidFrameRate {
                frame_rate: self.frame_rate,
            });
        }
        Ok(Duration::from_secs_f64(1.0 / f64::from(self.frame_rate)))
    }
}

/// How a finished session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub days: u32,
    pub reason: GameOverReason,
    pub message: String,
}

/// Main runtime that orchestrates game simulation
///
/// Runtime owns the worker and coordinates input.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    input_provider: Option<Box<dyn InputProvider>>,
    // Subscribed before the worker starts so the first turn is never missed.
    turn_rx: broadcast::Receiver<Event>,
    sim_worker_handle: Option<JoinHandle<Result<()>>>,
}

enum Wake {
    Turn(std::result::Result<Event, RecvError>),
    WorkerDone(std::result::Result<Result<()>, tokio::task::JoinError>),
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Set the player input provider
    pub fn set_input_provider(&mut self, provider: impl InputProvider + 'static) {
        self.input_provider = Some(Box::new(provider));
    }

    /// Waits for the next turn event and reacts to it.
    ///
    /// Returns the summary once the session is over.
    pub async fn step(&mut self) -> Result<Option<RunSummary>> {
        let wake = match self.sim_worker_handle.as_mut() {
            Some(worker) => tokio::select! {
                biased;
                received = self.turn_rx.recv() => Wake::Turn(received),
                joined = worker => Wake::WorkerDone(joined),
            },
            None => return Err(RuntimeError::EventStreamClosed),
        };

        match wake {
            Wake::Turn(Ok(Event::Turn(TurnEvent::PhaseChanged {
                phase: TurnPhase::Controlling,
                level,
            }))) => {
                debug!(level, "Player turn opened");
                self.feed_input().await?;
            }
            Wake::Turn(Ok(Event::Turn(TurnEvent::GameOver {
                days,
                reason,
                message,
            }))) => {
                info!(days, %reason, "Run finished");
                return Ok(Some(RunSummary {
                    days,
                    reason,
                    message,
                }));
            }
            Wake::Turn(Ok(_)) => {}
            Wake::Turn(Err(RecvError::Lagged(skipped))) => {
                warn!(skipped, "Turn events lagged");
            }
            Wake::Turn(Err(RecvError::Closed)) => return Err(RuntimeError::EventStreamClosed),
            Wake::WorkerDone(joined) => {
                self.sim_worker_handle = None;
                joined.map_err(RuntimeError::WorkerJoin)??;
                return Err(RuntimeError::EventStreamClosed);
            }
        }

        Ok(None)
    }

    /// Run until the session is over.
    pub async fn run(&mut self) -> Result<RunSummary> {
        loop {
            if let Some(summary) = self.step().await? {
                return Ok(summary);
            }
        }
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(mut self) -> Result<()> {
        if self.handle.shutdown().await.is_err() {
            debug!("Simulation worker already stopped");
        }
        drop(self.handle);

        if let Some(worker) = self.sim_worker_handle.take() {
            worker.await.map_err(RuntimeError::WorkerJoin)??;
        }

        Ok(())
    }

    async fn feed_input(&self) -> Result<()> {
        let provider = self
            .input_provider
            .as_ref()
            .ok_or(RuntimeError::ProviderNotSet)?;

        // The worker may stop between the turn event and this query (survival
        // timer); the next `step` reports how it ended.
        let snapshot = match self.handle.query_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(RuntimeError::CommandChannelClosed | RuntimeError::ReplyChannelClosed(_)) => {
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        if !snapshot.awaiting_input {
            return Ok(());
        }

        let direction = provider.provide_input(&snapshot).await?;
        match self.handle.submit_input(direction).await {
            Err(RuntimeError::CommandChannelClosed) => Ok(()),
            other => other,
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    input_provider: Option<Box<dyn InputProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            input_provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.config.game_config = game_config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn frame_rate(mut self, frame_rate: u32) -> Self {
        self.config.frame_rate = frame_rate;
        self
    }

    /// Set player input provider (optional)
    pub fn input_provider(mut self, provider: impl InputProvider + 'static) -> Self {
        self.input_provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime and start the simulation worker
    pub async fn build(self) -> Result<Runtime> {
        let frame = self.config.frame()?;
        let session = GameSession::starting_at(
            self.config.game_config,
            self.config.seed,
            self.config.start_level,
        )?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let turn_rx = event_bus.subscribe(Topic::Turn);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::new(session, command_rx, event_bus, frame);
        let sim_worker_handle = tokio::spawn(sim_worker.run());

        Ok(Runtime {
            handle,
            input_provider: self.input_provider,
            turn_rx,
            sim_worker_handle: Some(sim_worker_handle),
        })
    }
}
