//! Topic-based event bus for runtime events.
//!
//! Core events are split by sink (render, audio, UI, turn lifecycle) and
//! published on per-topic broadcast channels, so each consumer subscribes only
//! to what it draws or plays.

mod bus;
mod extractor;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use extractor::extract_events;
pub use types::{RenderEvent, TurnEvent, UiEvent};
