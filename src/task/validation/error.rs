//! Structured validation failures for task payloads.

use crate::task::domain::TaskDomainError;
use thiserror::Error;

/// Result type for payload validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors produced while validating raw task payloads.
///
/// Validation collects every violated constraint rather than failing on the
/// first, so a single response can report all field-level problems.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload is not a JSON object.
    #[error("payload must be a JSON object")]
    NotAnObject,

    /// The `title` field is required but absent.
    #[error("title is required")]
    MissingTitle,

    /// The `title` field violates a domain constraint.
    #[error(transparent)]
    InvalidTitle(#[from] TaskDomainError),

    /// A field has the wrong JSON type.
    #[error("{field} must be a {expected}")]
    WrongType {
        /// Name of the offending field.
        field: &'static str,
        /// Expected JSON type.
        expected: &'static str,
    },

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines multiple validation errors into a single error.
    ///
    /// If only one error is provided, returns it directly rather than
    /// wrapping.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if called with an empty vector, as this
    /// indicates a logic error in the caller. In release builds, returns
    /// [`ValidationError::NotAnObject`] as a fallback.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        match errors.len() {
            0 => {
                debug_assert!(false, "multiple() called with empty errors vector");
                Self::NotAnObject
            }
            1 => errors.into_iter().next().unwrap_or(Self::NotAnObject),
            _ => Self::Multiple(errors),
        }
    }

    /// Returns the individual violations, flattening the `Multiple` variant.
    #[must_use]
    pub fn violations(&self) -> Vec<String> {
        match self {
            Self::Multiple(errors) => errors.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}
