//! Move attempts and their consequences.
//!
//! Every mobile entity goes through the same protocol in [`movement`]:
//! test the path, start a motion or report the obstruction. The per-kind
//! behaviour in [`player`] and [`enemy`] decides what a blocked move means,
//! with [`interact`] routing the obstruction to a typed capability.
//!
//! Behaviour functions borrow the session's pieces through an
//! [`ActionContext`] and report everything observable as [`GameEvent`]s.

pub mod enemy;
pub mod error;
pub mod interact;
pub mod movement;
pub mod player;

pub use enemy::EnemyActivation;
pub use error::ActionError;
pub use interact::{Interaction, InteractionKind, WallDamage, route};
pub use movement::{CardinalDirection, MoveOutcome, attempt_move};
pub use player::PlayerAttempt;

use crate::config::GameConfig;
use crate::event::GameEvent;
use crate::state::WorldState;

/// Mutable view of the session handed to behaviour functions.
pub struct ActionContext<'a> {
    pub world: &'a mut WorldState,
    pub config: &'a GameConfig,
    pub food: &'a mut i32,
    pub events: &'a mut Vec<GameEvent>,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        world: &'a mut WorldState,
        config: &'a GameConfig,
        food: &'a mut i32,
        events: &'a mut Vec<GameEvent>,
    ) -> Self {
        Self {
            world,
            config,
            food,
            events,
        }
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
