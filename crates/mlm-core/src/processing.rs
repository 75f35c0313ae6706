//! # Processing Expression
//!
//! A generic descriptor of a named transformation: the `format` names the
//! expression dialect (e.g. `"rio-calc"`, `"gdal-calc"`, a URI), and the
//! `expression` carries the dialect-specific payload. The record is used
//! standalone as a pre-processing hook and embedded as the `processing`
//! variant of the scaling union.

use serde::{Deserialize, Serialize};

/// A named transformation expression.
///
/// The envelope is rigid, while `expression` is intentionally extensible:
/// a string for textual dialects, an object for structured ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingExpression {
    /// The expression dialect identifier.
    pub format: String,
    /// The dialect-specific expression payload.
    pub expression: serde_json::Value,
}

impl ProcessingExpression {
    /// Create a processing expression from a dialect and payload.
    pub fn new(format: impl Into<String>, expression: impl Into<serde_json::Value>) -> Self {
        Self {
            format: format.into(),
            expression: expression.into(),
        }
    }
}
