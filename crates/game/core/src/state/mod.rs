//! Level state representation.
//!
//! This module owns the data structures that describe the board, its
//! entities and their motion. The session mutates them exclusively through
//! the action and engine modules; shells only read snapshots.
pub mod types;

pub use types::{
    EnemyState, EntitiesState, EntityId, ExitState, Hit, LayerMask, MobileEntity, MobileKind,
    Motion, MotionState, NEAR_ZERO, Obstruction, PickupKind, PickupState, Position, TurnPhase,
    Vec2, WallState, WorldState,
};
