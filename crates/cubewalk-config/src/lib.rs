//! Configuration for cubewalk.
//!
//! Settings persist to disk as a RON file, can be overridden from the
//! command line via clap, and are validated into walk parameters before use.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, OutputConfig, OutputFormat, WalkConfig, default_config_dir};
pub use error::ConfigError;
