//! Error types for the configuration and parsing boundary.
//!
//! The calculation path itself never fails: every division is guarded and
//! every branch yields a defined number or an explicit "undefined" marker.
//! Errors only arise while loading a policy configuration or interpreting
//! names supplied by the host shell (presets, bases, cost strategies).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for activation-roi operations
#[derive(Debug, Error)]
pub enum Error {
    /// One or more configuration values are out of range.
    ///
    /// Validation accumulates every problem before failing, so `issues`
    /// lists all of them at once.
    #[error("Invalid configuration: {}", .issues.join("; "))]
    InvalidConfig { issues: Vec<String> },

    /// Configuration file could not be parsed as TOML
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown scenario preset: '{0}'. Valid options: low, typical, high")]
    UnknownPreset(String),

    #[error("Unknown activation basis: '{0}'. Valid options: any, logins")]
    UnknownActivationBasis(String),

    #[error("Unknown cost basis: '{0}'. Valid options: total-headcount, adopters")]
    UnknownCostBasis(String),

    /// Shell-supplied JSON could not be read, or a result could not be written
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the user can fix this by editing their configuration or input.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Json(_))
    }
}

/// Result type alias for activation-roi operations
pub type Result<T> = std::result::Result<T, Error>;
