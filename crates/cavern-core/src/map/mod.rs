//! Map storage
//!
//! Contains the tile grid, tile types, and coordinates.

mod coord;
mod grid;
mod tile;

pub use coord::Coord;
pub use grid::Grid;
pub use tile::TileType;

/// One 4-connected component of same-type tiles, in discovery order
pub type Region = Vec<Coord>;
