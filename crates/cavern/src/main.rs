//! Cave map generator
//!
//! Prints generated maps as text on stdout. Logs go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cavern_core::{GenerationStats, GeneratorConfig, MapGenerator, SmoothRule};

/// Cellular-automaton cave generator
#[derive(Parser, Debug)]
#[command(name = "cavern")]
#[command(author, version, about = "Cavern - Generate connected cave maps", long_about = None)]
struct Args {
    /// Map width in cells
    #[arg(long = "width")]
    width: Option<u32>,

    /// Map height in cells
    #[arg(long = "height")]
    height: Option<u32>,

    /// Seed for the random generator (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Wall density of the initial noise, 0-100
    #[arg(long = "fill-percent")]
    fill_percent: Option<u32>,

    /// Maximum number of smoothing passes
    #[arg(long = "smooth-iterations")]
    smooth_iterations: Option<u32>,

    /// Regions smaller than this are removed
    #[arg(long = "min-region-size")]
    min_region_size: Option<usize>,

    /// Radius of carved corridors
    #[arg(long = "corridor-radius")]
    corridor_radius: Option<u32>,

    /// Use the center-weighted smoothing rule
    #[arg(long = "center-weighted")]
    center_weighted: bool,

    /// Options file (rc-style, or JSON with a .json extension)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Number of maps to generate from one seed
    #[arg(short = 'n', long = "count", default_value_t = 1)]
    count: u32,

    /// Print generation statistics after each map
    #[arg(long = "stats")]
    stats: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// File options first, then command-line overrides
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load_from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fill_percent) = self.fill_percent {
            config.fill_percent = fill_percent;
        }
        if let Some(iterations) = self.smooth_iterations {
            config.smooth_iterations = iterations;
        }
        if let Some(min_region_size) = self.min_region_size {
            config.min_region_size = min_region_size;
        }
        if let Some(radius) = self.corridor_radius {
            config.corridor_radius = radius;
        }
        if self.center_weighted {
            config.smooth_rule = SmoothRule::CenterWeighted;
        }

        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_stats(out: &mut impl Write, stats: &GenerationStats) -> io::Result<()> {
    writeln!(out, "smooth passes:         {}", stats.smooth_passes)?;
    writeln!(out, "wall regions removed:  {}", stats.wall_regions_removed)?;
    writeln!(out, "floor regions removed: {}", stats.floor_regions_removed)?;
    writeln!(out, "rooms:                 {}", stats.rooms)?;
    writeln!(out, "passages:              {}", stats.passages)?;
    writeln!(out, "connection sweeps:     {}", stats.connection_sweeps)?;
    writeln!(out, "floor tiles:           {}", stats.floor_tiles)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.generator_config()?;
    let mut generator = match args.seed {
        Some(seed) => MapGenerator::new(config, seed),
        None => MapGenerator::from_entropy(config),
    }
    .context("invalid generator configuration")?;

    info!(seed = generator.seed(), count = args.count, "starting generation");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "seed: {}", generator.seed())?;

    for index in 0..args.count {
        let stats = generator.make_map();
        if index > 0 {
            writeln!(out)?;
        }
        write!(out, "{}", generator.grid())?;
        if args.stats {
            print_stats(&mut out, &stats)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "cavern",
            "--width",
            "64",
            "--fill-percent",
            "45",
            "--center-weighted",
            "--count",
            "3",
        ]);
        let config = args.generator_config().unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, GeneratorConfig::default().height);
        assert_eq!(config.fill_percent, 45);
        assert_eq!(config.smooth_rule, SmoothRule::CenterWeighted);
        assert_eq!(args.count, 3);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = Args::parse_from(["cavern", "--config", "/nonexistent/cavern.rc"]);
        assert!(args.generator_config().is_err());
    }

    #[test]
    fn test_stats_output() {
        let stats = GenerationStats {
            rooms: 4,
            passages: 3,
            ..GenerationStats::default()
        };
        let mut buf = Vec::new();
        print_stats(&mut buf, &stats).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("rooms:                 4"));
        assert!(text.contains("passages:              3"));
    }
}
