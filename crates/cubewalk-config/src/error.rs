//! Configuration error types.

use cubewalk_surface::WalkError;

/// Errors that can occur when loading, saving, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The walk section holds values no walk can be built from.
    #[error("invalid walk settings: {0}")]
    InvalidWalk(#[source] WalkError),

    /// No platform config directory and none given.
    #[error("could not determine a config directory; pass --config")]
    NoConfigDir,
}
