//! Error types surfaced by the session.

use crate::action::ActionError;
use crate::config::ConfigError;
use crate::level::GenerationError;

use super::TurnError;

/// Errors surfaced while building or ticking a [`GameSession`](super::GameSession).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("level generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("turn scheduling failed: {0}")]
    Turn(#[from] TurnError),

    #[error("action failed: {0}")]
    Action(#[from] ActionError),
}
