//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the session and drives it from the frame
//! clock; everything else talks to it through commands and the event bus.

mod simulation;

pub use simulation::{Command, SimulationWorker};
