//! Tile types

use strum::{Display, EnumIter};

/// Tile/terrain type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(u8)]
pub enum TileType {
    Floor = 0,
    #[default]
    Wall = 1,
    /// Outer ring of the map; never changed after the fill
    Border = 2,
}

impl TileType {
    /// Numeric encoding (floor 0, wall 1, border 2)
    pub const fn weight(&self) -> u32 {
        *self as u32
    }

    /// Check if this blocks movement
    pub const fn is_solid(&self) -> bool {
        matches!(self, TileType::Wall | TileType::Border)
    }

    /// Get the display character for this tile type
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Floor => '.',
            TileType::Wall => '#',
            TileType::Border => 'X',
        }
    }
}
