//! Cellular-automaton smoothing
//!
//! Each pass walks the grid in scan order and rewrites cells in place, so a
//! cell sees the updates already made earlier in the same pass. Border cells
//! are never touched.

use crate::config::SmoothRule;
use crate::map::{Grid, TileType};

/// Below this weight a cell becomes floor, above it a wall
const WALL_THRESHOLD: u32 = 4;

/// Run up to `iterations` smoothing passes
///
/// Stops early once a pass changes nothing, since every later pass would
/// then be a no-op too. Returns the number of passes actually run.
pub fn smooth_map(grid: &mut Grid, rule: SmoothRule, iterations: u32) -> u32 {
    for pass in 0..iterations {
        if smooth_pass(grid, rule) == 0 {
            return pass + 1;
        }
    }
    iterations
}

/// One in-place smoothing pass, returning how many cells changed
pub fn smooth_pass(grid: &mut Grid, rule: SmoothRule) -> usize {
    let mut changed = 0;

    for c in grid.coords() {
        if grid.is_on_border(c.x, c.y) {
            continue;
        }

        let weight = wall_weight(grid, c.x, c.y, rule);
        let next = if weight < WALL_THRESHOLD {
            TileType::Floor
        } else if weight > WALL_THRESHOLD {
            TileType::Wall
        } else {
            continue;
        };

        if grid.get_at(c) != Some(next) {
            grid.set_at(c, next);
            changed += 1;
        }
    }

    changed
}

/// Wall weight of the 8 cells around `(x, y)`
///
/// Cells off the map always count as one wall.
pub fn wall_weight(grid: &Grid, x: i32, y: i32, rule: SmoothRule) -> u32 {
    let center = grid.get(x, y).unwrap_or(TileType::Wall);
    let mut weight = 0;

    for nx in x - 1..=x + 1 {
        for ny in y - 1..=y + 1 {
            if nx == x && ny == y {
                continue;
            }
            weight += match grid.get(nx, ny) {
                None => 1,
                Some(neighbor) => match rule {
                    SmoothRule::NeighborCount => u32::from(neighbor.is_solid()),
                    SmoothRule::CenterWeighted => center.weight(),
                },
            };
        }
    }

    weight
}
