//! Unified error handling for chartwright core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for chartwright core operations.
#[derive(Debug, Error, Clone)]
pub enum ChartError {
    /// Naming, version or chart-shape violations.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration and I/O failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ChartError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for [`DomainError::InvalidName`].
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidName { .. }))
    }

    /// `true` for [`ApplicationError::InvalidOutputPath`].
    pub fn is_invalid_output_path(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::InvalidOutputPath { .. })
        )
    }

    /// `true` for [`ApplicationError::PathConflict`].
    pub fn is_path_conflict(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::PathConflict { .. }))
    }

    /// `true` for [`ApplicationError::Filesystem`].
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Filesystem { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ChartResult<T> = Result<T, ChartError>;
