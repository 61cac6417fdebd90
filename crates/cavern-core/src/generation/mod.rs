//! Cave generation pipeline
//!
//! Contains the cellular-automaton stages, region analysis, the room graph,
//! and corridor carving.

mod connector;
mod fill;
mod generator;
mod line;
mod region;
mod room;
mod smooth;

pub use connector::{Connected, Pruned, connect_closest_rooms, create_passage, prune_regions};
pub use fill::random_fill;
pub use generator::{GenerationStats, MapGenerator, generate, generate_with};
pub use line::{carve_disc, line};
pub use region::{find_regions, region_tiles};
pub use room::{Room, RoomGraph, RoomId};
pub use smooth::{smooth_map, smooth_pass, wall_weight};
