//! Data-driven content definitions and loaders.
//!
//! Board size, placement counts, timing and damage values are plain data.
//! This crate reads them from TOML files into [`game_core::GameConfig`] so
//! a build can be retuned without touching the simulation.
//!
//! Content is consumed by the shell at startup and never appears in
//! session state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult};
