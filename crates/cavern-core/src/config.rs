//! Generator configuration
//!
//! Handles default tuning values, validation, and configuration file loading.
//! Two file formats are accepted: an rc-style text file
//!
//! ```text
//! # wider corridors on a bigger map
//! OPTIONS=width:80,height:40
//! OPTIONS=corridor_radius=3,smooth_rule:center_weighted
//! ```
//!
//! and a JSON object with the same field names (selected by a `.json`
//! extension). Fields left out keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{GenerationError, Result};

/// Default map width
pub const DEFAULT_WIDTH: u32 = 32;
/// Default map height
pub const DEFAULT_HEIGHT: u32 = 32;
/// Default wall-vs-floor split of the initial noise
pub const DEFAULT_FILL_PERCENT: u32 = 50;
/// Default number of smoothing passes
pub const DEFAULT_SMOOTH_ITERATIONS: u32 = 255;
/// Default size below which a region is absorbed by the opposite tile type
pub const DEFAULT_MIN_REGION_SIZE: usize = 50;
/// Default radius of the disc carved along each passage
pub const DEFAULT_CORRIDOR_RADIUS: u32 = 7;

/// How in-range neighbors contribute to a cell's wall weight while smoothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothRule {
    /// Each solid neighbor (wall or border) adds one unit
    #[default]
    NeighborCount,
    /// Each in-range neighbor adds the center cell's own encoding
    /// (floor 0, wall 1), so only out-of-range neighbors can flip a cell
    CenterWeighted,
}

/// Tunable parameters of a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: u32,
    pub height: u32,
    /// A cell starts as floor when a roll in 0..100 exceeds this value
    pub fill_percent: u32,
    pub smooth_iterations: u32,
    pub min_region_size: usize,
    pub corridor_radius: u32,
    pub smooth_rule: SmoothRule,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill_percent: DEFAULT_FILL_PERCENT,
            smooth_iterations: DEFAULT_SMOOTH_ITERATIONS,
            min_region_size: DEFAULT_MIN_REGION_SIZE,
            corridor_radius: DEFAULT_CORRIDOR_RADIUS,
            smooth_rule: SmoothRule::default(),
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with the given dimensions
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Reject configurations the pipeline cannot honor
    pub fn validate(&self) -> Result<()> {
        let area = u64::from(self.width) * u64::from(self.height);
        if self.width <= 2 || self.height <= 2 || area > i32::MAX as u64 {
            return Err(GenerationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.fill_percent > 100 {
            return Err(GenerationError::InvalidFillPercent(self.fill_percent));
        }
        if self.corridor_radius == 0 || self.corridor_radius > self.width.max(self.height) {
            return Err(GenerationError::InvalidCorridorRadius(self.corridor_radius));
        }
        Ok(())
    }

    /// Load a configuration from a file, JSON when the extension is `.json`
    pub fn load_from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Ok(serde_json::from_str(&contents)?)
        } else {
            Self::parse_config(&contents)
        }
    }

    /// Parse options from an rc-style config string
    pub fn parse_config(contents: &str) -> std::result::Result<Self, ConfigError> {
        let mut config = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    config.parse_option(opt.trim())?;
                }
            }
        }

        Ok(config)
    }

    /// Parse a single `key:value` or `key=value` option
    fn parse_option(&mut self, opt: &str) -> std::result::Result<(), ConfigError> {
        if opt.is_empty() {
            return Ok(());
        }
        if let Some((key, value)) = opt.split_once(':') {
            return self.set_option(key.trim(), value.trim());
        }
        if let Some((key, value)) = opt.split_once('=') {
            return self.set_option(key.trim(), value.trim());
        }

        match opt {
            "width" | "height" | "fill_percent" | "smooth_iterations" | "min_region_size"
            | "corridor_radius" | "smooth_rule" => Err(ConfigError::MissingValue(opt.to_string())),
            _ => Err(ConfigError::UnknownOption(opt.to_string())),
        }
    }

    fn set_option(&mut self, name: &str, value: &str) -> std::result::Result<(), ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::MissingValue(name.to_string()));
        }

        match name {
            "width" => self.width = parse_number(name, value)?,
            "height" => self.height = parse_number(name, value)?,
            "fill_percent" => self.fill_percent = parse_number(name, value)?,
            "smooth_iterations" => self.smooth_iterations = parse_number(name, value)?,
            "min_region_size" => self.min_region_size = parse_number(name, value)?,
            "corridor_radius" => self.corridor_radius = parse_number(name, value)?,
            "smooth_rule" => {
                self.smooth_rule = match value.to_lowercase().as_str() {
                    "neighbor_count" | "neighbor" => SmoothRule::NeighborCount,
                    "center_weighted" | "center" => SmoothRule::CenterWeighted,
                    _ => {
                        return Err(ConfigError::InvalidValue(
                            name.to_string(),
                            value.to_string(),
                        ));
                    }
                };
            }
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &str,
    value: &str,
) -> std::result::Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string(), value.to_string()))
}

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("missing value for {0}")]
    MissingValue(String),
}
