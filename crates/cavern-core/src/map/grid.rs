//! Tile grid
//!
//! Rectangular tile buffer addressed by signed `(x, y)`. Reads outside the
//! map return `None` and writes outside the map are dropped, so callers can
//! probe neighbors without clamping first.

use std::fmt;

use super::{Coord, TileType};

/// Rectangular map of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<TileType>,
}

impl Grid {
    /// Create an all-wall grid
    pub fn new(width: u32, height: u32) -> Self {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        Self {
            width,
            height,
            tiles: vec![TileType::Wall; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_in_range(x, y) {
            Some(self.offset_of(x, y))
        } else {
            None
        }
    }

    /// Buffer offset of an in-range cell, computed in `usize` so large maps
    /// cannot overflow
    fn offset_of(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Number of cells
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    /// True iff 0 <= x < width and 0 <= y < height
    pub fn is_in_range(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// True iff the cell lies on the outermost ring
    pub fn is_on_border(&self, x: i32, y: i32) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    pub fn get_at(&self, c: Coord) -> Option<TileType> {
        self.get(c.x, c.y)
    }

    /// Write a tile, returning false when the cell is outside the map
    pub fn set(&mut self, x: i32, y: i32, tile: TileType) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    pub fn set_at(&mut self, c: Coord, tile: TileType) -> bool {
        self.set(c.x, c.y, tile)
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(TileType::Wall)
    }

    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(TileType::Floor)
    }

    /// Number of tiles of the given type
    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// All cells in scan order: `x` outer, `y` inner
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Coord::new(x, y)))
    }

    /// All cells with their tile, in scan order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, TileType)> + '_ {
        self.coords().map(|c| (c, self.tiles[self.offset_of(c.x, c.y)]))
    }
}

impl fmt::Display for Grid {
    /// One text row per map row, top to bottom
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row: String = (0..self.width)
                .map(|x| self.tiles[self.offset_of(x, y)].symbol())
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_wall() {
        let grid = Grid::new(5, 4);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.count(TileType::Wall), 20);
    }

    #[test]
    fn test_range_and_border() {
        let grid = Grid::new(5, 4);
        assert!(grid.is_in_range(0, 0));
        assert!(grid.is_in_range(4, 3));
        assert!(!grid.is_in_range(5, 3));
        assert!(!grid.is_in_range(-1, 0));
        assert!(!grid.is_in_range(0, 4));

        assert!(grid.is_on_border(0, 2));
        assert!(grid.is_on_border(4, 2));
        assert!(grid.is_on_border(2, 0));
        assert!(grid.is_on_border(2, 3));
        assert!(!grid.is_on_border(2, 2));
    }

    #[test]
    fn test_area_and_offsets() {
        let mut grid = Grid::new(4, 3);
        assert_eq!(grid.area(), 12);
        grid.set(3, 2, TileType::Floor);
        assert_eq!(grid.tiles[11], TileType::Floor);
        assert_eq!(grid.offset_of(1, 2), 9);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.set(1, 1, TileType::Floor));
        assert_eq!(grid.get(1, 1), Some(TileType::Floor));
        assert!(grid.is_floor(1, 1));
        assert!(!grid.is_wall(1, 1));

        assert!(!grid.set(3, 1, TileType::Floor));
        assert!(!grid.set(-1, 1, TileType::Floor));
        assert_eq!(grid.get(3, 1), None);
        assert!(!grid.is_wall(3, 1));
        assert!(!grid.is_floor(3, 1));
    }

    #[test]
    fn test_scan_order_is_column_major() {
        let grid = Grid::new(2, 3);
        let coords: Vec<_> = grid.coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 0, TileType::Border);
        grid.set(2, 1, TileType::Floor);
        assert_eq!(grid.to_string(), "X##\n##.\n");
    }
}
