//! Fan-out of core events onto bus topics.
//!
//! The core emits a single ordered stream of [`GameEvent`]s. This module
//! splits it by sink; one core event may land on several topics (a game over
//! is both UI text and a lifecycle change).

use game_core::{GameEvent, GameSession};

use super::bus::Event;
use super::types::{RenderEvent, TurnEvent, UiEvent};

/// Translate one core event into the bus events it produces.
///
/// `session` is read after the tick that emitted `event`, which is exact
/// for level loads since a load always ends its tick.
pub fn extract_events(event: GameEvent, session: &GameSession) -> Vec<Event> {
    let ui_text = event.ui_text();
    let level = session.current_level();

    match event {
        GameEvent::LevelStarted { level } => vec![
            Event::Render(RenderEvent::LevelLoaded {
                level,
                world: session.world().clone(),
            }),
            Event::Ui(UiEvent::ShowDayCard {
                level,
                text: ui_text.unwrap_or_default(),
            }),
            Event::Turn(TurnEvent::LevelStarted { level }),
        ],
        GameEvent::SetupFinished => vec![Event::Ui(UiEvent::HideDayCard)],
        GameEvent::TurnChanged { phase } => {
            vec![Event::Turn(TurnEvent::PhaseChanged { level, phase })]
        }
        GameEvent::MotionStarted { entity, from, to } => {
            vec![Event::Render(RenderEvent::MotionStarted { entity, from, to })]
        }
        GameEvent::EntityArrived { entity, position } => {
            vec![Event::Render(RenderEvent::Arrived { entity, position })]
        }
        GameEvent::Animation { entity, trigger } => {
            vec![Event::Render(RenderEvent::Animation { entity, trigger })]
        }
        GameEvent::WallDamaged {
            wall,
            position,
            hit_points,
        } => vec![Event::Render(RenderEvent::WallDamaged {
            wall,
            position,
            hit_points,
        })],
        GameEvent::WallDestroyed { wall, position } => vec![Event::Render(RenderEvent::Removed {
            entity: wall,
            position,
        })],
        GameEvent::PickupConsumed {
            pickup, position, ..
        } => vec![Event::Render(RenderEvent::Removed {
            entity: pickup,
            position,
        })],
        GameEvent::FoodChanged { total, .. } => vec![Event::Ui(UiEvent::Food {
            total,
            text: ui_text.unwrap_or_default(),
        })],
        GameEvent::Sound(cue) => vec![Event::Audio(cue)],
        GameEvent::TimerChanged { display } => vec![Event::Ui(UiEvent::Timer { display })],
        GameEvent::ExitReached { level } => vec![Event::Turn(TurnEvent::ExitReached { level })],
        GameEvent::GameOver {
            days,
            reason,
            message,
        } => vec![
            Event::Ui(UiEvent::GameOver {
                message: message.clone(),
            }),
            Event::Turn(TurnEvent::GameOver {
                days,
                reason,
                message,
            }),
        ],
    }
}
