//! Line rasterization and disc carving for passages

use crate::map::{Coord, Grid, TileType};

/// Integer Bresenham line from `from` toward `to`
///
/// The longer axis drives the walk, one step per point. The line holds
/// `max(|dx|, |dy|)` points: it starts at `from` and stops one step short of
/// `to`, so a line between identical points is empty.
pub fn line(from: Coord, to: Coord) -> Vec<Coord> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let steep = dx.abs() < dy.abs();
    let (longest, shortest, step, gradient_step) = if steep {
        (dy.abs(), dx.abs(), dy.signum(), dx.signum())
    } else {
        (dx.abs(), dy.abs(), dx.signum(), dy.signum())
    };

    let mut points = Vec::with_capacity(longest as usize);
    let (mut x, mut y) = (from.x, from.y);
    let mut accumulation = longest / 2;

    for _ in 0..longest {
        points.push(Coord::new(x, y));

        if steep {
            y += step;
        } else {
            x += step;
        }

        accumulation += shortest;
        if accumulation >= longest {
            if steep {
                x += gradient_step;
            } else {
                y += gradient_step;
            }
            accumulation -= longest;
        }
    }

    points
}

/// Turn every non-border cell within `radius` of `center` into floor
///
/// Only the part of the disc inside the border ring is scanned, and the
/// distance test runs in `i64`, so any radius is safe. Returns the number of
/// cells that changed.
pub fn carve_disc(grid: &mut Grid, center: Coord, radius: i32) -> usize {
    let radius = i64::from(radius);
    let radius_sq = radius * radius;
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));

    let x_range = (cx - radius).max(1)..=(cx + radius).min(i64::from(grid.width()) - 2);
    let y_range = (cy - radius).max(1)..=(cy + radius).min(i64::from(grid.height()) - 2);
    let mut carved = 0;

    for x in x_range {
        for y in y_range.clone() {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy > radius_sq {
                continue;
            }
            // both ranges sit inside the grid, so the casts are lossless
            let c = Coord::new(x as i32, y as i32);
            if grid.get_at(c) == Some(TileType::Wall) {
                grid.set_at(c, TileType::Floor);
                carved += 1;
            }
        }
    }

    carved
}
