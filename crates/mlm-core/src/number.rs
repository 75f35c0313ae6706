//! # Int-or-Float Numeric Value
//!
//! JSON numbers arrive as either integers or reals, and both forms carry
//! meaning in a model-input document: an integer shape entry is a fixed
//! dimension, while a real entry is conventionally a sentinel for a
//! variable or unknown dimension. [`Number`] preserves the distinction
//! through deserialization and back out.

use serde::{Deserialize, Serialize};

/// A numeric value that is either an integer or a real.
///
/// The untagged representation maps directly onto JSON: `3` parses as
/// `Int(3)`, `3.0` parses as `Float(3.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// An integer value.
    Int(i64),
    /// A real value.
    Float(f64),
}

impl Number {
    /// The value widened to `f64`.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
        }
    }

    /// Whether this value is the integer form.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int(_))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}
