//! Rooms and the room connection graph
//!
//! A room is a surviving floor region. Rooms live in a [`RoomGraph`] arena
//! and refer to each other by [`RoomId`]; connections are undirected and
//! stored on both ends.

use hashbrown::HashSet;

use crate::map::{Coord, Grid, Region};

/// Index of a room inside its [`RoomGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// A floor region with its edge tiles and graph state
#[derive(Debug, Clone)]
pub struct Room {
    tiles: Region,
    edge_tiles: Vec<Coord>,
    connected: HashSet<RoomId>,
    accessible_from_main: bool,
}

impl Room {
    /// Wrap a region, collecting the tiles that touch a wall or border
    ///
    /// A tile is an edge tile when one of its four orthogonal neighbors is
    /// solid. Each edge tile is listed once, in region order.
    pub fn from_region(tiles: Region, grid: &Grid) -> Self {
        let edge_tiles = tiles
            .iter()
            .copied()
            .filter(|tile| {
                tile.cardinal_neighbors()
                    .any(|n| grid.get_at(n).is_some_and(|t| t.is_solid()))
            })
            .collect();

        Self {
            tiles,
            edge_tiles,
            connected: HashSet::new(),
            accessible_from_main: false,
        }
    }

    /// Number of tiles
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Coord] {
        &self.tiles
    }

    pub fn edge_tiles(&self) -> &[Coord] {
        &self.edge_tiles
    }

    pub fn connections(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.connected.iter().copied()
    }

    pub fn connection_count(&self) -> usize {
        self.connected.len()
    }

    pub fn is_accessible_from_main(&self) -> bool {
        self.accessible_from_main
    }
}

/// Arena of rooms, largest first
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
}

impl RoomGraph {
    /// Sort rooms by size, largest first, and mark the largest as the main room
    ///
    /// The sort is stable: rooms of equal size keep their discovery order.
    pub fn from_rooms(mut rooms: Vec<Room>) -> Self {
        rooms.sort_by(|a, b| b.size().cmp(&a.size()));
        if let Some(main) = rooms.first_mut() {
            main.accessible_from_main = true;
        }
        Self { rooms }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// The largest room, if any
    pub fn main_room(&self) -> Option<RoomId> {
        if self.rooms.is_empty() {
            None
        } else {
            Some(RoomId(0))
        }
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.rooms.iter().enumerate().map(|(i, room)| (RoomId(i), room))
    }

    /// Check if two rooms share a direct connection
    pub fn is_connected(&self, a: RoomId, b: RoomId) -> bool {
        self.rooms[a.0].connected.contains(&b)
    }

    /// Connect two rooms
    ///
    /// If either side is already reachable from the main room, the other
    /// side and everything connected to it become reachable too. The edge is
    /// recorded on both rooms.
    pub fn connect(&mut self, a: RoomId, b: RoomId) {
        if a == b {
            return;
        }

        if self.rooms[a.0].accessible_from_main {
            self.set_accessible_from_main(b);
        } else if self.rooms[b.0].accessible_from_main {
            self.set_accessible_from_main(a);
        }

        self.rooms[a.0].connected.insert(b);
        self.rooms[b.0].connected.insert(a);
    }

    /// Mark a room and its whole connected component as reachable
    ///
    /// Already-marked rooms stop the walk, which keeps cycles finite.
    pub fn set_accessible_from_main(&mut self, id: RoomId) {
        let mut pending = vec![id];

        while let Some(current) = pending.pop() {
            let room = &mut self.rooms[current.0];
            if room.accessible_from_main {
                continue;
            }
            room.accessible_from_main = true;
            pending.extend(room.connected.iter().copied());
        }
    }

    /// Check if every room is reachable from the main room
    pub fn all_accessible(&self) -> bool {
        self.rooms.iter().all(|room| room.accessible_from_main)
    }
}
