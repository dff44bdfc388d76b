//! Typed payloads carried on each bus topic.

use serde::{Deserialize, Serialize};

use game_core::{
    AnimationTrigger, EntityId, GameOverReason, Position, TurnPhase, WorldState,
};

/// Events consumed by the render sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderEvent {
    /// A fresh board: tiles, walls, pickups, enemies, exit and player.
    LevelLoaded { level: u32, world: WorldState },
    MotionStarted {
        entity: EntityId,
        from: Position,
        to: Position,
    },
    Arrived { entity: EntityId, position: Position },
    Animation {
        entity: EntityId,
        trigger: AnimationTrigger,
    },
    /// A wall took damage and switches to its damaged sprite.
    WallDamaged {
        wall: EntityId,
        position: Position,
        hit_points: i32,
    },
    /// A wall or pickup left the board.
    Removed { entity: EntityId, position: Position },
}

/// Events consumed by the UI sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    ShowDayCard { level: u32, text: String },
    HideDayCard,
    Food { total: i32, text: String },
    Timer { display: String },
    GameOver { message: String },
}

/// Turn and session lifecycle events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TurnEvent {
    LevelStarted {
        level: u32,
    },
    PhaseChanged {
        level: u32,
        phase: TurnPhase,
    },
    ExitReached {
        level: u32,
    },
    GameOver {
        days: u32,
        reason: GameOverReason,
        message: String,
    },
}
