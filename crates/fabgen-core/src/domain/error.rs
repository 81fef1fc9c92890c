use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid specification document '{document}': {reason}")]
    InvalidDocument { document: String, reason: String },

    #[error("Invalid artifact path: {path}")]
    InvalidArtifactPath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate artifact path: {path}")]
    DuplicateArtifactPath { path: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("No generator registered for component '{0}'")]
    UnknownComponent(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDocument { document, reason } => vec![
                format!("Document '{}' could not be used: {}", document, reason),
                "Check the specification directory contents".into(),
            ],
            Self::UnknownComponent(name) => vec![
                format!("'{}' is not a cataloged component", name),
                "Run: fabgen components to see the catalog".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("Artifact paths must be relative, got: {}", path),
                "This is a catalog bug; please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDocument { .. }
            | Self::InvalidArtifactPath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::DuplicateArtifactPath { .. } => ErrorCategory::Validation,
            Self::UnknownComponent(_) => ErrorCategory::NotFound,
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_component_is_not_found() {
        let err = DomainError::UnknownComponent("Mystery".into());
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("Mystery")));
    }

    #[test]
    fn invalid_document_is_validation() {
        let err = DomainError::InvalidDocument {
            document: "PRD.md".into(),
            reason: "not utf-8".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
