//! Domain error types
//!
//! This module defines the error hierarchy for brandpack. Per-pair conversion
//! failures never surface here; they are absorbed by the export coordinator.
//! Only configuration and setup problems become a [`BrandpackError`].

use thiserror::Error;

/// Main brandpack error type
#[derive(Debug, Error)]
pub enum BrandpackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Output tree could not be prepared (fatal for a run)
    #[error("Setup error: {0}")]
    Setup(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl BrandpackError {
    /// Whether this error came from a bad configuration rather than the environment
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            BrandpackError::Configuration(_) | BrandpackError::Validation(_)
        )
    }
}

/// Failure of a single rasterizer invocation
///
/// A missing tool and a tool that ran but failed are kept apart so the logs
/// and the run summary can tell them apart, even though both fall through
/// to the next rasterizer in the chain.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RasterizeError {
    /// The program could not be launched (not installed, not executable)
    #[error("{program} is not available: {reason}")]
    Unavailable { program: String, reason: String },

    /// The program ran and exited unsuccessfully
    #[error("{program} exited with {}: {stderr}", .status.map_or_else(|| "a signal".to_string(), |c| format!("status {c}")))]
    Failed {
        program: String,
        status: Option<i32>,
        stderr: String,
    },

    /// The program did not finish in time and was killed
    #[error("{program} timed out after {secs}s")]
    Timeout { program: String, secs: u64 },

    /// Any other error while driving the child process
    #[error("I/O error running {program}: {message}")]
    Io { program: String, message: String },
}

impl RasterizeError {
    /// Short machine-friendly name of the failure class
    pub fn kind(&self) -> &'static str {
        match self {
            RasterizeError::Unavailable { .. } => "unavailable",
            RasterizeError::Failed { .. } => "failed",
            RasterizeError::Timeout { .. } => "timeout",
            RasterizeError::Io { .. } => "io",
        }
    }

    /// Whether the tool was missing rather than misbehaving
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RasterizeError::Unavailable { .. })
    }
}

impl From<std::io::Error> for BrandpackError {
    fn from(err: std::io::Error) -> Self {
        BrandpackError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BrandpackError {
    fn from(err: serde_json::Error) -> Self {
        BrandpackError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BrandpackError {
    fn from(err: toml::de::Error) -> Self {
        BrandpackError::Configuration(format!("TOML parse error: {err}"))
    }
}
