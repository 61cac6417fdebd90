/// Grid coordinate
///
/// Signed so that neighbor offsets may step off the map; range checks are the
/// grid's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Cardinal directions used by flood fill and edge detection
const CARDINALS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Squared euclidean distance
    pub const fn distance_squared(self, other: Coord) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// The four orthogonally adjacent coordinates (north, east, south, west)
    pub fn cardinal_neighbors(self) -> impl Iterator<Item = Coord> {
        CARDINALS.into_iter().map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
