pub mod common;
pub mod entities;
pub mod motion;
pub mod turn;
pub mod world;

// Re-export common types
pub use common::{EntityId, Position, Vec2};

// Re-export entity collection types
pub use entities::{
    EnemyState, EntitiesState, ExitState, MobileEntity, MobileKind, PickupKind, PickupState,
    WallState,
};

// Re-export motion types
pub use motion::{Motion, MotionState, NEAR_ZERO};

// Re-export turn state
pub use turn::TurnPhase;

// Re-export world types
pub use world::{Hit, LayerMask, Obstruction, WorldState};
