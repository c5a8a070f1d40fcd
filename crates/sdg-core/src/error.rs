//! Error types for the badge core.
//!
//! Goal resolution is total and never produces an error (unknown identifiers
//! resolve through fallbacks); errors exist only on the configuration path.

use thiserror::Error;

/// Result type alias for badge operations.
pub type BadgeResult<T> = Result<T, BadgeError>;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
