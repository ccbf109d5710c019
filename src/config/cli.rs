use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal visualizer for array-sorting algorithms
#[derive(Debug, Parser)]
#[command(name = "sortscope", version, about)]
pub struct Cli {
    /// Run without the TUI: build the trace, drain playback, print a report
    #[arg(long)]
    pub headless: bool,

    /// Sorting algorithm: bubble, shaker, or quick
    #[arg(long, short = 'a')]
    pub algorithm: Option<String>,

    /// Dataset shape: random, reversed, or nearly-sorted
    #[arg(long)]
    pub shape: Option<String>,

    /// Number of elements to sort
    #[arg(long, short = 'n')]
    pub size: Option<usize>,

    /// Smallest value the generator may produce
    #[arg(long)]
    pub min: Option<i32>,

    /// Largest value the generator may produce
    #[arg(long)]
    pub max: Option<i32>,

    /// Dataset generator seed, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Playback speed in trace events per second
    #[arg(long)]
    pub ticks_per_second: Option<u32>,

    /// Override the data directory (default ~/.sortscope)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Fold command-line overrides into a loaded config. Invalid selector
    /// strings fail fast here, before anything else starts.
    pub fn apply_to(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(algorithm) = &self.algorithm {
            config.algorithm = algorithm.parse()?;
        }
        if let Some(shape) = &self.shape {
            config.shape = shape.parse()?;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(min) = self.min {
            config.min_value = min;
        }
        if let Some(max) = self.max {
            config.max_value = max;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(rate) = self.ticks_per_second {
            config.ticks_per_second = rate;
        }
        Ok(())
    }
}
