//! Runtime orchestration for the dungeon simulation.
//!
//! This crate drives a [`game_core::GameSession`] from a frame clock on a
//! background task and exposes it through a cloneable handle and a
//! topic-based event bus. Consumers embed [`Runtime`] to run a session,
//! subscribe to render/audio/UI events, and plug in player input through
//! [`InputProvider`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{InputProvider, Result, RuntimeError, RuntimeHandle, ScriptedInputProvider};
pub use events::{Event, EventBus, RenderEvent, Topic, TurnEvent, UiEvent};
pub use runtime::{RunSummary, Runtime, RuntimeBuilder, RuntimeConfig};
