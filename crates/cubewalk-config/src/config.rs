//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use cubewalk_surface::{Bounds, DriftPolicy, SamplingMode, WalkParams};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Walk generation settings.
    pub walk: WalkConfig,
    /// How the generated path is written.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Walk generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WalkConfig {
    /// Lower cube bound on every axis.
    pub min: i64,
    /// Upper cube bound on every axis.
    pub max: i64,
    /// Number of steps after the start point.
    pub steps: usize,
    /// Per-step probability of picking a new heading (0.0 - 1.0).
    pub change_prob: f64,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Start-point sampling mode.
    pub sampling: SamplingMode,
    /// Whether free coordinates may leave the cube's range.
    pub drift: DriftPolicy,
}

/// Path serialization format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `x y z` line per point.
    #[default]
    Text,
    /// The full walk as JSON.
    Json,
    /// The full walk as RON.
    Ron,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Path serialization format.
    pub format: OutputFormat,
    /// Print a one-line summary to stderr.
    pub summary: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs under the config directory.
    pub file_logging: bool,
}

// --- Default implementations ---

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 10,
            steps: 100,
            change_prob: 0.2,
            seed: None,
            sampling: SamplingMode::default(),
            drift: DriftPolicy::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            summary: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            file_logging: false,
        }
    }
}

impl WalkConfig {
    /// Validate these settings into walk parameters.
    pub fn to_params(&self) -> Result<WalkParams, ConfigError> {
        let bounds = Bounds::new(self.min, self.max).map_err(ConfigError::InvalidWalk)?;
        let params = WalkParams::new(bounds, self.steps, self.change_prob)
            .map_err(ConfigError::InvalidWalk)?;
        Ok(params.with_sampling(self.sampling).with_drift(self.drift))
    }
}

/// The platform config directory for cubewalk, e.g. `~/.config/cubewalk`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("cubewalk"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
