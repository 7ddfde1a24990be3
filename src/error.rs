//! Configuration errors
//!
//! Everything else in the core is valid by construction.

use thiserror::Error;

/// A session cannot start with this configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("balloon palette is empty, select at least one color")]
    EmptyPalette,
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
    #[error("unknown balloon color: {0}")]
    UnknownColor(String),
}
