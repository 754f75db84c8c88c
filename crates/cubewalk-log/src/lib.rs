//! Structured logging for cubewalk.
//!
//! Console output goes to stderr so that stdout carries only the generated
//! path. Optionally mirrors events as JSON into a log file for later
//! inspection. The filter comes from `RUST_LOG` when set, otherwise from the
//! config's `debug.log_level`.

use std::path::Path;

use cubewalk_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config specifies a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written under `log_dir`.
pub const LOG_FILE_NAME: &str = "cubewalk.log";

/// Initialize the tracing subscriber.
///
/// # Arguments
///
/// * `log_dir` - Optional directory for the JSON log file
/// * `file_logging` - Whether to write the JSON log file at all
/// * `config` - Optional configuration to use for log level override
///
/// # Examples
///
/// ```no_run
/// use cubewalk_log::init_logging;
/// use cubewalk_config::Config;
///
/// // Console only
/// init_logging(None, false, None);
///
/// // With config override and a JSON log file
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, file_logging: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_string(config)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if file_logging
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The filter directive implied by `config`, falling back to
/// [`DEFAULT_FILTER`] when absent or empty.
pub fn filter_string(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.clone()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
