//! Region pruning and room connection
//!
//! 1. Absorb undersized wall regions into the floor
//! 2. Absorb undersized floor regions into the walls; the rest become rooms
//! 3. Link every room that cannot reach the main room to the closest
//!    reachable one, carving a round corridor along the way

use tracing::trace;

use crate::map::{Coord, Grid, TileType};

use super::line::{carve_disc, line};
use super::region::find_regions;
use super::room::{Room, RoomGraph, RoomId};

/// Result of the pruning step
#[derive(Debug, Default)]
pub struct Pruned {
    /// Surviving floor regions, in discovery order
    pub rooms: Vec<Room>,
    pub wall_regions_removed: usize,
    pub floor_regions_removed: usize,
}

/// Result of the connection step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Connected {
    pub passages: usize,
    pub sweeps: usize,
    pub tiles_carved: usize,
}

/// Flip every region smaller than `min_size` to the opposite tile type
///
/// Walls go first so that specks of rock inside caves are cleared before the
/// floor regions are measured.
pub fn prune_regions(grid: &mut Grid, min_size: usize) -> Pruned {
    let mut pruned = Pruned::default();

    for region in find_regions(grid, TileType::Wall) {
        if region.len() < min_size {
            for &tile in &region {
                grid.set_at(tile, TileType::Floor);
            }
            pruned.wall_regions_removed += 1;
        }
    }

    for region in find_regions(grid, TileType::Floor) {
        if region.len() < min_size {
            for &tile in &region {
                grid.set_at(tile, TileType::Wall);
            }
            pruned.floor_regions_removed += 1;
        } else {
            pruned.rooms.push(Room::from_region(region, grid));
        }
    }

    pruned
}

/// Connect rooms until every room can reach the main room
///
/// Each sweep splits the rooms into reachable and unreachable ones. Every
/// unreachable room without any connection gets one passage to the closest
/// reachable room. Sweeps repeat until one makes no passage; a productive
/// sweep connects at least one more room, so there are at most
/// `rooms + 1` sweeps.
pub fn connect_closest_rooms(grid: &mut Grid, graph: &mut RoomGraph, radius: u32) -> Connected {
    let mut connected = Connected::default();
    if graph.is_empty() {
        return connected;
    }

    for _ in 0..=graph.len() {
        connected.sweeps += 1;

        let (reachable, unreachable): (Vec<RoomId>, Vec<RoomId>) = graph
            .iter()
            .map(|(id, _)| id)
            .partition(|&id| graph.room(id).is_accessible_from_main());

        let mut made = 0;
        for room_a in unreachable {
            if graph.room(room_a).connection_count() > 0 {
                continue;
            }
            if let Some((room_b, tile_a, tile_b)) = closest_pair(graph, room_a, &reachable) {
                connected.tiles_carved +=
                    create_passage(grid, graph, room_a, room_b, tile_a, tile_b, radius);
                made += 1;
            }
        }

        connected.passages += made;
        if made == 0 {
            break;
        }
    }

    connected
}

/// Closest edge-tile pair between `room_a` and any of `candidates`
///
/// Distance is squared euclidean; on ties the first pair found wins.
fn closest_pair(
    graph: &RoomGraph,
    room_a: RoomId,
    candidates: &[RoomId],
) -> Option<(RoomId, Coord, Coord)> {
    let mut best: Option<(i64, RoomId, Coord, Coord)> = None;

    for &room_b in candidates {
        if room_a == room_b || graph.is_connected(room_a, room_b) {
            continue;
        }

        for &tile_a in graph.room(room_a).edge_tiles() {
            for &tile_b in graph.room(room_b).edge_tiles() {
                let distance = tile_a.distance_squared(tile_b);
                let better = match best {
                    Some((best_distance, ..)) => distance < best_distance,
                    None => true,
                };
                if better {
                    best = Some((distance, room_b, tile_a, tile_b));
                }
            }
        }
    }

    best.map(|(_, room_b, tile_a, tile_b)| (room_b, tile_a, tile_b))
}

/// Link two rooms in the graph and carve a corridor between two tiles
///
/// A disc of `radius` is carved at every point of the line from `tile_a`
/// toward `tile_b`. Returns the number of tiles turned into floor.
pub fn create_passage(
    grid: &mut Grid,
    graph: &mut RoomGraph,
    room_a: RoomId,
    room_b: RoomId,
    tile_a: Coord,
    tile_b: Coord,
    radius: u32,
) -> usize {
    graph.connect(room_a, room_b);

    let radius = i32::try_from(radius).unwrap_or(i32::MAX);
    let carved: usize = line(tile_a, tile_b)
        .into_iter()
        .map(|point| carve_disc(grid, point, radius))
        .sum();

    trace!(
        target: "cavern::mapgen",
        room_a = room_a.0,
        room_b = room_b.0,
        from_x = tile_a.x,
        from_y = tile_a.y,
        to_x = tile_b.x,
        to_y = tile_b.y,
        carved,
        "mapgen.passage"
    );

    carved
}
