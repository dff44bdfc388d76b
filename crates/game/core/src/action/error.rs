//! Action execution errors.

use crate::state::EntityId;

/// Errors raised when an action names an entity the world cannot act on.
///
/// Blocked moves and missing interactions are ordinary outcomes, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("mobile entity {0} not found")]
    MoverNotFound(EntityId),

    #[error("entity {0} is not an autonomous actor")]
    NotAnEnemy(EntityId),

    #[error("wall {0} not found")]
    WallNotFound(EntityId),
}
