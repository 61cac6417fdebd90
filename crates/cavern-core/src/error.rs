//! Generation errors
//!
//! Everything that can fail is checked before the first tile is written.
//! Once a configuration is accepted every stage of the pipeline is total.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while preparing a generation run
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid map dimensions {width}x{height}: sides must be at least 3 and the area must fit in an i32")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid fill percent {0}: must be between 0 and 100")]
    InvalidFillPercent(u32),

    #[error("invalid corridor radius {0}: must be between 1 and the longer map side")]
    InvalidCorridorRadius(u32),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
