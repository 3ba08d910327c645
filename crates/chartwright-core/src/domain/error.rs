// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::validation::MAX_NAME_LENGTH;
use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so callers can keep them around after a failed run)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid chart version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("invalid chart: {0}")]
    InvalidChart(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, .. } => vec![
                format!("'{}' cannot be used as a chart or application name", name),
                format!(
                    "Names must be 1-{} characters of letters, digits, '.', '_' or '-'",
                    MAX_NAME_LENGTH
                ),
                "Examples: demo, my-app, api_v2".into(),
            ],
            Self::InvalidVersion { version, .. } => vec![
                format!("'{}' is not a semantic version", version),
                "Use MAJOR.MINOR.PATCH, e.g. 0.1.0 or 1.2.3-rc.1".into(),
            ],
            Self::InvalidChart(msg) => vec![
                "The source chart could not be used".into(),
                format!("Details: {}", msg),
            ],
        }
    }

    /// Every domain error is a rejected input.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_validation_failures() {
        let errors = [
            DomainError::InvalidName {
                name: "a b".into(),
                reason: "contains ' '".into(),
            },
            DomainError::InvalidVersion {
                version: "1.0".into(),
                reason: "expected MAJOR.MINOR.PATCH".into(),
            },
            DomainError::InvalidChart("missing Chart.yaml".into()),
        ];
        for err in errors {
            assert_eq!(err.category(), ErrorCategory::Validation, "{err}");
            assert!(!err.suggestions().is_empty(), "{err}");
        }
    }
}
