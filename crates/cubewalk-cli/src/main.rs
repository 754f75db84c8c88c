//! Command-line front end: generate a random walk on the surface of a cube.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cubewalk-cli -- --steps 200 --seed 7` for a
//! reproducible walk, or `--format json` for the full walk record.

mod output;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cubewalk_config::{CliArgs, Config, ConfigError, default_config_dir};
use cubewalk_surface::{WalkError, walk};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::output::OutputError;

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("walk failed: {0}")]
    Walk(#[from] WalkError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

fn run(config: &Config) -> Result<(), RunError> {
    let params = config.walk.to_params()?;
    let seed = config.walk.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        min = params.bounds.min(),
        max = params.bounds.max(),
        steps = params.steps,
        change_prob = params.change_prob,
        sampling = %params.sampling,
        drift = %params.drift,
        "generating walk"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let walked = walk(&params, &mut rng)?;

    let stdout = io::stdout();
    output::write_walk(&walked, config.output.format, &mut stdout.lock())?;

    if config.output.summary {
        eprintln!("{}", output::summary(&walked, seed));
    }
    Ok(())
}

/// Config resolved at startup, before logging is up.
struct LoadedConfig {
    config: Config,
    dir: PathBuf,
    /// Why the file could not be used, when defaults were substituted.
    fallback: Option<ConfigError>,
}

/// Resolve the config directory, load or create `config.ron`, then apply
/// CLI overrides. A broken file falls back to defaults; only a missing
/// config directory is fatal.
fn load_config(args: &CliArgs) -> Result<LoadedConfig, ConfigError> {
    let dir = args.config.clone().map_or_else(default_config_dir, Ok)?;
    let (mut config, fallback) = match Config::load_or_create(&dir) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.apply_cli_overrides(args);
    Ok(LoadedConfig {
        config,
        dir,
        fallback,
    })
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let loaded = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("cubewalk: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = loaded.config;

    let log_dir = loaded.dir.join("logs");
    cubewalk_log::init_logging(Some(&log_dir), config.debug.file_logging, Some(&config));

    // Loading ran before the subscriber existed, so report it now.
    let config_path = loaded.dir.join("config.ron");
    match loaded.fallback {
        None => info!(path = %config_path.display(), "using config"),
        Some(e) => warn!(
            path = %config_path.display(),
            error = %e,
            "failed to load config, using defaults"
        ),
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cubewalk: {e}");
            ExitCode::FAILURE
        }
    }
}
