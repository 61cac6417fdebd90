//! cavern-core: cellular-automaton cave map generation
//!
//! This crate contains the whole generation pipeline with no rendering or
//! input handling. It is designed to be pure and testable: a map is a
//! function of its [`GeneratorConfig`] and a `u64` seed.
//!
//! ```no_run
//! let grid = cavern_core::generate(48, 32, 42).unwrap();
//! println!("{grid}");
//! ```

pub mod config;
pub mod generation;
pub mod map;

mod error;
mod rng;

pub use config::{ConfigError, GeneratorConfig, SmoothRule};
pub use error::{GenerationError, Result};
pub use generation::{
    GenerationStats, MapGenerator, Room, RoomGraph, RoomId, generate, generate_with,
};
pub use map::{Coord, Grid, Region, TileType};
pub use rng::MapRng;
