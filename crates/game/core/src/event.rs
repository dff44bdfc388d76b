//! Outbound notifications for the render, audio and UI sinks.
//!
//! The core never talks to a sink directly. Every observable change is
//! buffered as a [`GameEvent`] and handed to the shell through
//! [`GameSession::drain_events`](crate::engine::GameSession::drain_events).

use arrayvec::ArrayVec;

use crate::config::PitchRange;
use crate::state::{EntityId, PickupKind, Position, TurnPhase};

/// Sound families the core can ask for.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SoundEffect {
    Move,
    Chop,
    Eat,
    Drink,
    EnemyAttack,
    GameOver,
}

/// One concrete clip: a sound family plus its variant index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundClip {
    pub effect: SoundEffect,
    pub variant: u8,
}

impl SoundClip {
    pub const fn new(effect: SoundEffect, variant: u8) -> Self {
        Self { effect, variant }
    }
}

/// Audio request handed to the audio sink.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoundCue {
    /// Play one of `clips` at a pitch picked inside `pitch`.
    Randomized {
        clips: ArrayVec<SoundClip, 2>,
        pitch: PitchRange,
    },
    Single(SoundClip),
    StopMusic,
}

impl SoundCue {
    /// Both variants of `effect`, to be picked by the sink.
    pub fn randomized(effect: SoundEffect, pitch: PitchRange) -> Self {
        let clips = [SoundClip::new(effect, 0), SoundClip::new(effect, 1)]
            .into_iter()
            .collect();
        SoundCue::Randomized { clips, pitch }
    }

    pub fn single(effect: SoundEffect) -> Self {
        SoundCue::Single(SoundClip::new(effect, 0))
    }
}

/// Animation triggers fired on entity sprites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "camelCase")]
pub enum AnimationTrigger {
    PlayerChop,
    PlayerHit,
    EnemyAttack,
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameOverReason {
    Starved,
    TimeExpired,
}

impl GameOverReason {
    /// Terminal message shown by the UI sink.
    pub fn message(self, days: u32) -> String {
        match self {
            GameOverReason::Starved => format!("After {days} days, you starved."),
            GameOverReason::TimeExpired => format!("After {days} days, you ran out of time."),
        }
    }
}

/// Food counter change, for the UI prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FoodChange {
    /// Ordinary move cost.
    Step,
    Gained(i32),
    Lost(i32),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    LevelStarted {
        level: u32,
    },
    SetupFinished,
    TurnChanged {
        phase: TurnPhase,
    },
    MotionStarted {
        entity: EntityId,
        from: Position,
        to: Position,
    },
    EntityArrived {
        entity: EntityId,
        position: Position,
    },
    Animation {
        entity: EntityId,
        trigger: AnimationTrigger,
    },
    WallDamaged {
        wall: EntityId,
        position: Position,
        hit_points: i32,
    },
    WallDestroyed {
        wall: EntityId,
        position: Position,
    },
    PickupConsumed {
        pickup: EntityId,
        kind: PickupKind,
        position: Position,
    },
    FoodChanged {
        total: i32,
        change: FoodChange,
    },
    Sound(SoundCue),
    TimerChanged {
        display: String,
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

impl GameEvent {
    /// Text the UI sink shows for this event, if any.
    pub fn ui_text(&self) -> Option<String> {
        match self {
            GameEvent::LevelStarted { level } => Some(format!("Day {level}")),
            GameEvent::FoodChanged { total, change } => Some(match change {
                FoodChange::Step => format!("Food: {total}"),
                FoodChange::Gained(points) => format!("+{points} Food: {total}"),
                FoodChange::Lost(points) => format!("-{points} Food: {total}"),
            }),
            GameEvent::TimerChanged { display } => Some(display.clone()),
            GameEvent::GameOver { message, .. } => Some(message.clone()),
            _ => None,
        }
    }
}

/// Formats seconds remaining as `mm:ss`, counting the running second.
pub fn format_countdown(remaining: f32) -> String {
    let shown = remaining.max(0.0) + 1.0;
    let minutes = (shown / 60.0).floor() as u32;
    let seconds = (shown % 60.0).floor() as u32;
    format!("{minutes:02}:{seconds:02}")
}
