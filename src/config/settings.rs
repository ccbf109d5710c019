use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::data::DataShape;
use crate::sort::SortKind;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Algorithm selected at startup
    pub algorithm: SortKind,
    /// Dataset shape generated at startup
    pub shape: DataShape,
    /// Number of elements in the generated dataset
    pub size: usize,
    /// Smallest value the generator may produce
    pub min_value: i32,
    /// Largest value the generator may produce
    pub max_value: i32,
    /// Playback speed in trace events per second
    pub ticks_per_second: u32,
    /// Generator seed for reproducible runs (CLI only, never persisted)
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: SortKind::Bubble,
            shape: DataShape::Random,
            size: 64,
            min_value: 1,
            max_value: 100,
            ticks_per_second: 25,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TomlConfig {
    algorithm: Option<SortKind>,
    data: Option<TomlDataConfig>,
    playback: Option<TomlPlaybackConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TomlDataConfig {
    size: Option<usize>,
    min: Option<i32>,
    max: Option<i32>,
    shape: Option<DataShape>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TomlPlaybackConfig {
    ticks_per_second: Option<u32>,
}

impl Config {
    /// Load configuration from file, merging with defaults
    pub fn load() -> Self {
        let mut config = Config::default();

        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        if config_file.exists() {
            if let Ok(contents) = fs::read_to_string(&config_file) {
                match toml::from_str::<TomlConfig>(&contents) {
                    Ok(toml_config) => config.merge(toml_config),
                    Err(e) => {
                        tracing::warn!(error = %e, "Ignoring malformed config file");
                    }
                }
            }
        }

        config
    }

    fn merge(&mut self, toml_config: TomlConfig) {
        if let Some(algorithm) = toml_config.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(data) = toml_config.data {
            if let Some(size) = data.size {
                self.size = size;
            }
            if let Some(min) = data.min {
                self.min_value = min;
            }
            if let Some(max) = data.max {
                self.max_value = max;
            }
            if let Some(shape) = data.shape {
                self.shape = shape;
            }
        }
        if let Some(playback) = toml_config.playback {
            if let Some(rate) = playback.ticks_per_second {
                self.ticks_per_second = rate;
            }
        }
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &PathBuf) {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    eprintln!("Failed to create config directory: {}", e);
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            eprintln!("Failed to write default config: {}", e);
        }
    }
}
