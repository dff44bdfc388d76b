//! Turn scheduling and the session that drives a game.
//!
//! [`GameSession`] is the explicit context object every component works
//! through: it owns the world, the [`TurnScheduler`] and the food counter,
//! and advances all of them once per tick. Nothing in here sleeps or spawns;
//! every wait is a counter decremented by the caller's `dt`.

mod errors;
mod session;
mod timer;
mod turns;

pub use errors::GameError;
pub use session::{GameSession, SessionSnapshot, SessionStatus};
pub use timer::{SurvivalTimer, TimerTick};
pub use turns::{RosterEntry, TurnError, TurnScheduler, TurnStep};
