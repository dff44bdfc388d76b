//! Asynchronous abstraction for sourcing player intent.
//!
//! Runtime users plug in [`InputProvider`] implementations so the simulation
//! can run with human input, scripted fixtures, or simple bots.
use std::sync::Mutex;

use async_trait::async_trait;
use game_core::{CardinalDirection, SessionSnapshot};

use super::errors::{Result, RuntimeError};

/// Trait for choosing the player's next move.
///
/// Called once per controlling turn, with the session as it stands when the
/// turn opened.
#[async_trait]
pub trait InputProvider: Send + Sync {
    async fn provide_input(&self, snapshot: &SessionSnapshot) -> Result<CardinalDirection>;
}

/// Replays a fixed list of directions, cycling when it runs out.
/// Useful for testing.
pub struct ScriptedInputProvider {
    script: Vec<CardinalDirection>,
    cursor: Mutex<usize>,
}

impl ScriptedInputProvider {
    pub fn new(script: impl IntoIterator<Item = CardinalDirection>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: Mutex::new(0),
        }
    }
}

#[async_trait]
impl InputProvider for ScriptedInputProvider {
    async fn provide_input(&self, _snapshot: &SessionSnapshot) -> Result<CardinalDirection> {
        if self.script.is_empty() {
            return Err(RuntimeError::Provider("empty input script".into()));
        }
        let mut cursor = self
            .cursor
            .lock()
            .map_err(|_| RuntimeError::Provider("input script lock poisoned".into()))?;
        let direction = self.script[*cursor % self.script.len()];
        *cursor += 1;
        Ok(direction)
    }
}
