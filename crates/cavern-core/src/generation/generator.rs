//! Map generator
//!
//! Runs the full pipeline: random fill, smoothing, region pruning, room
//! connection. A [`MapGenerator`] owns its grid and RNG; calling
//! [`MapGenerator::make_map`] again produces the next map of the same
//! seeded sequence.

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::map::{Grid, TileType};
use crate::rng::MapRng;

use super::connector::{connect_closest_rooms, prune_regions};
use super::fill::random_fill;
use super::room::RoomGraph;
use super::smooth::smooth_map;

/// Counters collected during one generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Smoothing passes run before the grid settled
    pub smooth_passes: u32,
    pub wall_regions_removed: usize,
    pub floor_regions_removed: usize,
    pub rooms: usize,
    pub passages: usize,
    pub connection_sweeps: usize,
    pub floor_tiles: usize,
}

/// Cave map generator
#[derive(Debug, Clone)]
pub struct MapGenerator {
    config: GeneratorConfig,
    rng: MapRng,
    grid: Grid,
    rooms: RoomGraph,
}

impl MapGenerator {
    /// Create a generator, rejecting invalid configurations up front
    pub fn new(config: GeneratorConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, MapRng::new(seed))
    }

    /// Create a generator with a random seed
    pub fn from_entropy(config: GeneratorConfig) -> Result<Self> {
        Self::with_rng(config, MapRng::from_entropy())
    }

    fn with_rng(config: GeneratorConfig, rng: MapRng) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height);
        Ok(Self {
            config,
            rng,
            grid,
            rooms: RoomGraph::default(),
        })
    }

    /// Build a new map, replacing the previous one
    pub fn make_map(&mut self) -> GenerationStats {
        let config = &self.config;
        let mut stats = GenerationStats::default();

        random_fill(&mut self.grid, config.fill_percent, &mut self.rng);

        stats.smooth_passes = smooth_map(&mut self.grid, config.smooth_rule, config.smooth_iterations);
        debug!(
            target: "cavern::mapgen",
            passes = stats.smooth_passes,
            limit = config.smooth_iterations,
            "mapgen.smooth"
        );

        let pruned = prune_regions(&mut self.grid, config.min_region_size);
        stats.wall_regions_removed = pruned.wall_regions_removed;
        stats.floor_regions_removed = pruned.floor_regions_removed;
        debug!(
            target: "cavern::mapgen",
            wall_regions_removed = pruned.wall_regions_removed,
            floor_regions_removed = pruned.floor_regions_removed,
            rooms = pruned.rooms.len(),
            "mapgen.prune"
        );

        self.rooms = RoomGraph::from_rooms(pruned.rooms);
        let connected = connect_closest_rooms(&mut self.grid, &mut self.rooms, config.corridor_radius);
        stats.rooms = self.rooms.len();
        stats.passages = connected.passages;
        stats.connection_sweeps = connected.sweeps;
        stats.floor_tiles = self.grid.count(TileType::Floor);

        info!(
            target: "cavern::mapgen",
            seed = self.rng.seed(),
            width = config.width,
            height = config.height,
            rooms = stats.rooms,
            passages = stats.passages,
            sweeps = stats.connection_sweeps,
            floor_ratio = stats.floor_tiles as f64 / self.grid.area() as f64,
            "mapgen.done"
        );

        stats
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Rooms of the last generated map
    pub fn rooms(&self) -> &RoomGraph {
        &self.rooms
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.grid.is_wall(x, y)
    }

    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.grid.is_floor(x, y)
    }

    pub fn is_in_range(&self, x: i32, y: i32) -> bool {
        self.grid.is_in_range(x, y)
    }
}

/// Generate one map with default tuning
pub fn generate(width: u32, height: u32, seed: u64) -> Result<Grid> {
    generate_with(GeneratorConfig::with_size(width, height), seed)
}

/// Generate one map with the given configuration
pub fn generate_with(config: GeneratorConfig, seed: u64) -> Result<Grid> {
    let mut generator = MapGenerator::new(config, seed)?;
    generator.make_map();
    Ok(generator.into_grid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(matches!(
            generate(2, 40, 1),
            Err(GenerationError::InvalidDimensions { width: 2, height: 40 })
        ));
        assert!(MapGenerator::new(GeneratorConfig::with_size(40, 1), 1).is_err());
    }

    #[test]
    fn test_make_map_reports_stats() {
        let mut generator = MapGenerator::new(GeneratorConfig::default(), 42).unwrap();
        let stats = generator.make_map();
        assert_eq!(stats.rooms, generator.rooms().len());
        assert_eq!(stats.floor_tiles, generator.grid().count(TileType::Floor));
        assert!(stats.smooth_passes >= 1);
        assert!(stats.smooth_passes <= 255);
        assert!(generator.rooms().all_accessible());
        if stats.rooms > 0 {
            assert!(stats.passages >= stats.rooms - 1);
        }
    }

    #[test]
    fn test_regeneration_continues_the_sequence() {
        let config = GeneratorConfig::with_size(40, 30);
        let mut a = MapGenerator::new(config.clone(), 5).unwrap();
        let mut b = MapGenerator::new(config, 5).unwrap();

        a.make_map();
        let first = a.grid().clone();
        a.make_map();
        let second = a.grid().clone();

        b.make_map();
        assert_eq!(b.grid(), &first);
        b.make_map();
        assert_eq!(b.grid(), &second);
    }

    #[test]
    fn test_queries_pass_through() {
        let mut generator = MapGenerator::new(GeneratorConfig::with_size(20, 20), 3).unwrap();
        generator.make_map();
        assert_eq!(generator.seed(), 3);
        assert_eq!(generator.config().width, 20);
        assert!(generator.is_in_range(19, 19));
        assert!(!generator.is_in_range(20, 0));
        assert!(!generator.is_wall(0, 0));
        assert!(!generator.is_floor(0, 0));
    }
}
