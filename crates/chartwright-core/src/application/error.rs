//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming or
//! value rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while scaffolding or persisting a chart.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The base output directory is missing or is not a directory.
    #[error("invalid output path {path}: {reason}")]
    InvalidOutputPath { path: PathBuf, reason: String },

    /// A path the chart needs as a directory already exists as a file.
    #[error("file {path} already exists and is not a directory")]
    PathConflict { path: PathBuf },

    /// Filesystem operation failed.
    #[error("failed to {operation} {path}: {reason}")]
    Filesystem {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// A values document could not be serialized or parsed.
    #[error("serialization failed: {reason}")]
    Serialization { reason: String },

    /// A chart could not be loaded from its source.
    #[error("could not load chart from {path}: {reason}")]
    ChartLoad { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("filesystem state is unavailable")]
    StoreLockError,
}

impl ApplicationError {
    /// Shorthand for [`ApplicationError::Filesystem`].
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, err: impl ToString) -> Self {
        Self::Filesystem {
            path: path.into(),
            operation,
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidOutputPath { path, .. } => vec![
                format!("Create the directory first: mkdir -p {}", path.display()),
                "Or pass an existing directory with --output".into(),
            ],
            Self::PathConflict { path } => vec![
                format!("Move or remove the file at {}", path.display()),
                "Or choose a different chart name".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Re-run the command once the problem is fixed; generation is repeatable".into(),
            ],
            Self::Serialization { .. } => {
                vec!["Check that every value is a string, number, boolean, list or mapping".into()]
            }
            Self::ChartLoad { path, .. } => vec![
                format!("Check that {} is a chart directory", path.display()),
                "A chart directory contains a Chart.yaml".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOutputPath { .. } => ErrorCategory::Configuration,
            Self::PathConflict { .. } => ErrorCategory::Validation,
            Self::ChartLoad { .. } => ErrorCategory::NotFound,
            Self::Filesystem { .. } | Self::Serialization { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
