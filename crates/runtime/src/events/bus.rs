//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{RenderEvent, TurnEvent, UiEvent};
use game_core::SoundCue;

/// Topics for event routing, one per sink.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Board layout, motions, animations, removals
    Render,
    /// Sound cues
    Audio,
    /// Day, food, timer and game-over text
    Ui,
    /// Turn phases and session lifecycle
    Turn,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Render, Topic::Audio, Topic::Ui, Topic::Turn];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Render(RenderEvent),
    Audio(SoundCue),
    Ui(UiEvent),
    Turn(TurnEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Render(_) => Topic::Render,
            Event::Audio(_) => Topic::Audio,
            Event::Ui(_) => Topic::Ui,
            Event::Turn(_) => Topic::Turn,
        }
    }
}

/// Topic-based event bus
///
/// Every topic owns a broadcast channel created up front, so subscribing
/// never fails and the channel map is immutable after construction.
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        match self.channels.get(&topic) {
            Some(tx) => tx.subscribe(),
            // Unreachable with the channels built in `with_capacity`; hand out
            // a receiver that reports `Closed` on first use.
            None => broadcast::channel(1).1,
        }
    }

    /// Number of live receivers on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.channels
            .get(&topic)
            .map_or(0, |tx| tx.receiver_count())
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{SoundEffect, TurnPhase};

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut audio = bus.subscribe(Topic::Audio);
        let mut turn = bus.subscribe(Topic::Turn);

        bus.publish(Event::Turn(TurnEvent::PhaseChanged {
            level: 1,
            phase: TurnPhase::Controlling,
        }));
        bus.publish(Event::Audio(SoundCue::single(SoundEffect::GameOver)));

        assert!(matches!(audio.recv().await.unwrap(), Event::Audio(_)));
        assert!(matches!(
            turn.recv().await.unwrap(),
            Event::Turn(TurnEvent::PhaseChanged { .. })
        ));
        assert!(audio.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(Event::Audio(SoundCue::StopMusic));
        assert_eq!(bus.subscriber_count(Topic::Audio), 0);
    }

    #[test]
    fn clones_share_channels() {
        let bus = EventBus::new();
        let _rx = bus.clone().subscribe(Topic::Ui);
        assert_eq!(bus.subscriber_count(Topic::Ui), 1);
    }
}
