//! Initial random fill

use crate::map::{Grid, TileType};
use crate::rng::MapRng;

/// Seed every cell of the grid with noise
///
/// Border cells become [`TileType::Border`]. Every other cell draws from
/// `0..100` and becomes floor when the draw exceeds `fill_percent`, wall
/// otherwise. Cells are visited in scan order so the draw sequence is fixed
/// for a given grid size.
pub fn random_fill(grid: &mut Grid, fill_percent: u32, rng: &mut MapRng) {
    for c in grid.coords() {
        let tile = if grid.is_on_border(c.x, c.y) {
            TileType::Border
        } else if rng.rn2(100) > fill_percent {
            TileType::Floor
        } else {
            TileType::Wall
        };
        grid.set_at(c, tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_sets_border_ring() {
        let mut grid = Grid::new(8, 6);
        let mut rng = MapRng::new(42);
        random_fill(&mut grid, 50, &mut rng);

        for (c, tile) in grid.iter() {
            if grid.is_on_border(c.x, c.y) {
                assert_eq!(tile, TileType::Border);
            } else {
                assert_ne!(tile, TileType::Border);
            }
        }
    }

    #[test]
    fn test_fill_extremes() {
        let mut grid = Grid::new(10, 10);
        let mut rng = MapRng::new(1);

        // every draw is <= 99, so nothing exceeds 100
        random_fill(&mut grid, 100, &mut rng);
        assert_eq!(grid.count(TileType::Floor), 0);
        assert_eq!(grid.count(TileType::Wall), 64);

        // a draw of 0 never exceeds 0, so a few walls may survive
        random_fill(&mut grid, 0, &mut rng);
        assert!(grid.count(TileType::Floor) > 50);
        assert_eq!(grid.count(TileType::Border), 36);
    }

    #[test]
    fn test_fill_is_deterministic() {
        let mut a = Grid::new(16, 16);
        let mut b = Grid::new(16, 16);
        random_fill(&mut a, 50, &mut MapRng::new(99));
        random_fill(&mut b, 50, &mut MapRng::new(99));
        assert_eq!(a, b);
    }
}
