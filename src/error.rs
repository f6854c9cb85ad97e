//! Error types for the Lingobot library.
//!
//! All fallible operations return [`LingobotError`] through the crate-wide
//! [`Result`] alias. Errors fall into two groups:
//!
//! - startup errors (catalog loading, training, configuration) which must stop
//!   the process before any request is served;
//! - per-turn errors (translation, internal consistency) which the
//!   conversation pipeline catches and turns into a fallback reply.
//!
//! # Examples
//!
//! ```
//! use lingobot::error::{LingobotError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LingobotError::translation("gateway unreachable"))
//! }
//!
//! let err = example_operation().unwrap_err();
//! assert!(err.is_per_turn());
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Lingobot operations.
#[derive(Error, Debug)]
pub enum LingobotError {
    /// I/O errors (file operations, terminal, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The catalog file does not exist.
    #[error("Intents file not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    /// The catalog file exists but could not be decoded.
    #[error("Error decoding the intents file {}: {source}", path.display())]
    CatalogMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog decoded but violates an invariant (duplicate tag, empty lists).
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Vectorizer fitting or classifier training failed.
    #[error("Training error: {0}")]
    Training(String),

    /// The translation gateway failed for this turn.
    #[error("Translation error: {0}")]
    Translation(String),

    /// The predicted tag has no catalog record.
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LingobotError.
pub type Result<T> = std::result::Result<T, LingobotError>;

impl LingobotError {
    /// Create a new invalid catalog error.
    pub fn invalid_catalog<S: Into<String>>(msg: S) -> Self {
        LingobotError::InvalidCatalog(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LingobotError::Analysis(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        LingobotError::Training(msg.into())
    }

    /// Create a new translation error.
    pub fn translation<S: Into<String>>(msg: S) -> Self {
        LingobotError::Translation(msg.into())
    }

    /// Create a new internal consistency error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        LingobotError::InternalConsistency(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LingobotError::Config(msg.into())
    }

    /// Whether this error is recovered per conversation turn rather than
    /// being fatal at startup.
    pub fn is_per_turn(&self) -> bool {
        matches!(
            self,
            LingobotError::Translation(_) | LingobotError::InternalConsistency(_)
        )
    }
}
