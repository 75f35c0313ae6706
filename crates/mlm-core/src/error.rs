//! # Error Types — Structured Validation Error Hierarchy
//!
//! Defines the error types used throughout the schema stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Invariant violations carry the offending field and the expected vs
//!   actual values, never a bare message.
//! - A validation pass collects every violation before failing, so the
//!   caller can correct the whole document in one round.
//! - Type-coercion and union-tag failures surface from the serde layer
//!   as [`MlmError::Json`].

use std::fmt;

use thiserror::Error;

/// Top-level error type for the schema stack.
#[derive(Error, Debug)]
pub enum MlmError {
    /// One or more schema invariants were violated.
    #[error("validation failed:\n{0}")]
    Validation(#[from] ValidationErrors),

    /// The document could not be coerced into the declared types
    /// (wrong primitive type, unknown union tag, missing required field).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single schema invariant violation with structured context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `shape` and `dim_order` must describe the same number of axes.
    #[error(
        "dimension order and shape length mismatch: shape has {shape_len} entries, dim_order has {dim_order_len}"
    )]
    DimensionMismatch {
        /// Number of entries in `shape`.
        shape_len: usize,
        /// Number of entries in `dim_order`.
        dim_order_len: usize,
    },

    /// Exactly one of a both-or-neither field pair was set.
    #[error("band {band:?}: 'format' and 'expression' are mutually dependent; {present} is set without {missing}")]
    MutuallyDependent {
        /// Name of the band carrying the half-set pair.
        band: String,
        /// The field that was provided.
        present: &'static str,
        /// The field that was not.
        missing: &'static str,
    },

    /// A discriminator or enumerated string is outside its closed set.
    #[error("unknown {field} value: {value:?}")]
    UnknownTag {
        /// The field holding the unrecognized value.
        field: String,
        /// The value that was rejected.
        value: String,
    },

    /// A required sequence or string was empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// The empty field.
        field: String,
    },
}

/// Every violation found in one validation pass, in encounter order.
///
/// Rendered one violation per line so a failing document reads as a
/// checklist of corrections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create an empty collection to accumulate into.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one violation.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.errors
    }

    /// `Ok(())` when empty, otherwise the collection itself as the error.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn nonempty_collection_is_err() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::EmptyField {
            field: "name".to_string(),
        });
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn display_lists_one_violation_per_line() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::DimensionMismatch {
            shape_len: 4,
            dim_order_len: 3,
        });
        errors.push(ValidationError::EmptyField {
            field: "name".to_string(),
        });
        let rendered = errors.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("shape has 4 entries"));
        assert!(lines[1].contains("must not be empty"));
    }

    #[test]
    fn top_level_error_wraps_validation() {
        let errors: ValidationErrors = ValidationError::DimensionMismatch {
            shape_len: 2,
            dim_order_len: 1,
        }
        .into();
        let err: MlmError = errors.into();
        assert!(matches!(err, MlmError::Validation(_)));
        assert!(err.to_string().contains("validation failed"));
    }
}
