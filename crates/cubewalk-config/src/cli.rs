//! Command-line argument parsing for cubewalk.

use std::path::PathBuf;

use clap::Parser;
use cubewalk_surface::{DriftPolicy, SamplingMode};

use crate::{Config, OutputFormat};

/// cubewalk command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cubewalk", about = "Random walk on the surface of a cube")]
pub struct CliArgs {
    /// Lower cube bound on every axis.
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<i64>,

    /// Upper cube bound on every axis.
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<i64>,

    /// Number of steps after the start point.
    #[arg(long)]
    pub steps: Option<usize>,

    /// Per-step probability of picking a new heading.
    #[arg(long)]
    pub change_prob: Option<f64>,

    /// RNG seed for a reproducible walk.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start-point sampling (independent, legacy-coupled).
    #[arg(long)]
    pub sampling: Option<SamplingMode>,

    /// Free-axis drift policy (unbounded, clamped).
    #[arg(long)]
    pub drift: Option<DriftPolicy>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print a summary line to stderr.
    #[arg(long)]
    pub summary: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(min) = args.min {
            self.walk.min = min;
        }
        if let Some(max) = args.max {
            self.walk.max = max;
        }
        if let Some(steps) = args.steps {
            self.walk.steps = steps;
        }
        if let Some(p) = args.change_prob {
            self.walk.change_prob = p;
        }
        if let Some(seed) = args.seed {
            self.walk.seed = Some(seed);
        }
        if let Some(sampling) = args.sampling {
            self.walk.sampling = sampling;
        }
        if let Some(drift) = args.drift {
            self.walk.drift = drift;
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if let Some(summary) = args.summary {
            self.output.summary = summary;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            max: Some(32),
            seed: Some(7),
            drift: Some(DriftPolicy::Clamped),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.walk.max, 32);
        assert_eq!(config.walk.seed, Some(7));
        assert_eq!(config.walk.drift, DriftPolicy::Clamped);
        // Non-overridden fields retain defaults
        assert_eq!(config.walk.min, 0);
        assert_eq!(config.walk.steps, 100);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "cubewalk",
            "--min",
            "-4",
            "--steps",
            "12",
            "--sampling",
            "legacy-coupled",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.min, Some(-4));
        assert_eq!(args.steps, Some(12));
        assert_eq!(args.sampling, Some(SamplingMode::LegacyCoupled));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.drift, None);
    }

    #[test]
    fn test_unknown_drift_rejected() {
        let result = CliArgs::try_parse_from(["cubewalk", "--drift", "wrap"]);
        assert!(result.is_err());
    }
}
