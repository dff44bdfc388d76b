//! Procedural level construction.
//!
//! [`LevelGenerator`] lays the static board and scatters walls, pickups and
//! enemy spawns over cells drawn from a [`RandomCellPool`]. The result is a
//! plain [`LevelLayout`] that the session turns into a live world.
mod generator;
mod pool;

pub use generator::{FeatureKind, LevelGenerator, LevelLayout, PlacedFeature};
pub use pool::{PoolError, RandomCellPool};

use crate::config::ConfigError;

/// Errors raised while generating a level.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pool(#[from] PoolError),
}
