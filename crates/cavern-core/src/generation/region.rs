//! Connected region extraction
//!
//! Regions are 4-connected: diagonal contact does not join two regions.

use std::collections::VecDeque;

use crate::map::{Coord, Grid, Region, TileType};

/// Scratch visited buffer sized to a grid
struct Visited {
    width: usize,
    cells: Vec<bool>,
}

impl Visited {
    fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width() as usize,
            cells: vec![false; grid.area()],
        }
    }

    fn offset_of(&self, c: Coord) -> usize {
        c.y as usize * self.width + c.x as usize
    }

    /// Mark a cell, returning false if it was already marked
    fn mark(&mut self, c: Coord) -> bool {
        let i = self.offset_of(c);
        !std::mem::replace(&mut self.cells[i], true)
    }

    fn is_marked(&self, c: Coord) -> bool {
        self.cells[self.offset_of(c)]
    }
}

/// Find every region of `target` tiles
///
/// Starts are taken in scan order and each region lists its tiles in
/// breadth-first order, so the result is reproducible for a given grid.
pub fn find_regions(grid: &Grid, target: TileType) -> Vec<Region> {
    let mut visited = Visited::new(grid);
    let mut regions = Vec::new();

    for c in grid.coords() {
        if grid.get_at(c) == Some(target) && !visited.is_marked(c) {
            regions.push(flood_fill(grid, c, target, &mut visited));
        }
    }

    regions
}

/// The region containing `start`, empty if `start` is off the map
pub fn region_tiles(grid: &Grid, start: Coord) -> Region {
    match grid.get_at(start) {
        Some(target) => flood_fill(grid, start, target, &mut Visited::new(grid)),
        None => Vec::new(),
    }
}

fn flood_fill(grid: &Grid, start: Coord, target: TileType, visited: &mut Visited) -> Region {
    let mut tiles = Vec::new();
    let mut queue = VecDeque::new();

    visited.mark(start);
    queue.push_back(start);

    while let Some(tile) = queue.pop_front() {
        tiles.push(tile);

        for next in tile.cardinal_neighbors() {
            if grid.get_at(next) == Some(target) && visited.mark(next) {
                queue.push_back(next);
            }
        }
    }

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a grid from text rows, `.` floor, `#` wall, `X` border
    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len() as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let tile = match ch {
                    '.' => TileType::Floor,
                    'X' => TileType::Border,
                    _ => TileType::Wall,
                };
                grid.set(x as i32, y as i32, tile);
            }
        }
        grid
    }

    #[test]
    fn test_find_regions_splits_components() {
        let grid = grid_from(&[
            "XXXXXXX",
            "X..#..X",
            "X..#..X",
            "X###..X",
            "XXXXXXX",
        ]);
        let regions = find_regions(&grid, TileType::Floor);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].len(), 4);
        assert_eq!(regions[1].len(), 6);
        // scan order: the left region is found first, from its top-left tile
        assert_eq!(regions[0][0], Coord::new(1, 1));
        assert_eq!(regions[1][0], Coord::new(4, 1));
    }

    #[test]
    fn test_diagonals_do_not_connect() {
        let grid = grid_from(&[
            "XXXXX",
            "X.#.X",
            "X#.#X",
            "XXXXX",
        ]);
        let regions = find_regions(&grid, TileType::Floor);
        assert_eq!(regions.len(), 3);
        assert!(regions.iter().all(|r| r.len() == 1));
    }

    #[test]
    fn test_regions_never_overlap() {
        let grid = grid_from(&[
            "XXXXXXXX",
            "X.#..#.X",
            "X##.##.X",
            "X...#..X",
            "XXXXXXXX",
        ]);
        for target in [TileType::Floor, TileType::Wall, TileType::Border] {
            let regions = find_regions(&grid, target);
            let total: usize = regions.iter().map(Vec::len).sum();
            assert_eq!(total, grid.count(target));

            let mut all: Vec<Coord> = regions.into_iter().flatten().collect();
            all.sort();
            all.dedup();
            assert_eq!(all.len(), total);
        }
    }

    #[test]
    fn test_region_tiles() {
        let grid = grid_from(&[
            "XXXXX",
            "X..#X",
            "X#.#X",
            "XXXXX",
        ]);
        let mut region = region_tiles(&grid, Coord::new(2, 2));
        region.sort();
        assert_eq!(
            region,
            vec![Coord::new(1, 1), Coord::new(2, 1), Coord::new(2, 2)]
        );
        assert!(region_tiles(&grid, Coord::new(-1, 0)).is_empty());
    }

    #[test]
    fn test_grid_is_not_modified() {
        let grid = grid_from(&["XXXX", "X..X", "XXXX"]);
        let before = grid.clone();
        let _ = find_regions(&grid, TileType::Floor);
        assert_eq!(grid, before);
    }
}
