//! Static environment: board geometry and deterministic randomness.
//!
//! Nothing in here mutates during play. The level generator reads
//! [`MapDimensions`] and draws from a [`SeededRng`]; the world consults the
//! geometry for the outer-wall ring.
mod map;
mod rng;

pub use map::{MapDimensions, StaticTile, TerrainKind};
pub use rng::{PcgRng, RngOracle, SeededRng, compute_seed};
