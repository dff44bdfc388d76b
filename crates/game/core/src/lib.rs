//! Deterministic simulation core of a turn-based dungeon crawl.
//!
//! `game-core` defines the canonical rules (level generation, movement and
//! interactions, turn scheduling) and exposes pure APIs the runtime drives
//! frame by frame. All mutation flows through [`engine::GameSession`]; every
//! observable change leaves the crate as an [`event::GameEvent`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod event;
pub mod level;
pub mod state;

pub use action::{
    ActionContext, ActionError, CardinalDirection, EnemyActivation, Interaction, InteractionKind,
    MoveOutcome, PlayerAttempt, attempt_move, route,
};
pub use config::{
    BoardConfig, ConfigError, CountRange, EnemyTemplate, GameConfig, PitchRange, PlayerConfig,
    TileVariants, TimingConfig, enemy_count_for_level,
};
pub use engine::{
    GameError, GameSession, RosterEntry, SessionSnapshot, SessionStatus, SurvivalTimer, TurnError,
    TurnScheduler, TurnStep,
};
pub use env::{MapDimensions, PcgRng, RngOracle, SeededRng, StaticTile, TerrainKind};
pub use event::{
    AnimationTrigger, FoodChange, GameEvent, GameOverReason, SoundClip, SoundCue, SoundEffect,
};
pub use level::{
    FeatureKind, GenerationError, LevelGenerator, LevelLayout, PlacedFeature, PoolError,
    RandomCellPool,
};
pub use state::{
    EnemyState, EntitiesState, EntityId, ExitState, Hit, LayerMask, MobileEntity, MobileKind,
    Motion, MotionState, Obstruction, PickupKind, PickupState, Position, TurnPhase, Vec2,
    WallState, WorldState,
};
