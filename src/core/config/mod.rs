pub mod config;

use std::path::PathBuf;

pub use config::LabConfig;

/// Problems met while reading configuration. None of them are fatal at runtime: callers fall
/// back to defaults and log.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{}: read error: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: parse error: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to deserialize merged config; using defaults: {0}")]
    Merge(#[source] ron::Error),
    #[error("invalid colour '{value}': {reason}")]
    Color { value: String, reason: String },
}
