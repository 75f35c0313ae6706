//! # Tensor Element Data Types
//!
//! Defines the `DataType` enumeration of admissible tensor element types.
//! This is the ONE definition used across the schema stack. Every `match`
//! on `DataType` must be exhaustive, so adding a type forces every
//! consumer to handle it at compile time.
//!
//! The set follows the raster conventions used by geospatial metadata:
//! unsigned and signed integers, IEEE reals, complex variants, and a
//! catch-all `other` for formats outside the closed set.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// All admissible tensor element types.
///
/// Serialized as the lowercase identifier (`"uint8"`, `"cfloat32"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// 8-bit unsigned integer.
    Uint8,
    /// 16-bit unsigned integer.
    Uint16,
    /// 32-bit unsigned integer.
    Uint32,
    /// 64-bit unsigned integer.
    Uint64,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 16-bit half-precision real.
    Float16,
    /// 32-bit single-precision real.
    Float32,
    /// 64-bit double-precision real.
    Float64,
    /// Complex value with 16-bit integer components.
    Cint16,
    /// Complex value with 32-bit integer components.
    Cint32,
    /// Complex value with 32-bit real components.
    Cfloat32,
    /// Complex value with 64-bit real components.
    Cfloat64,
    /// A type outside the closed numeric set.
    Other,
}

/// Total number of data types. Used for compile-time assertions.
pub const DATA_TYPE_COUNT: usize = 16;

impl DataType {
    /// Returns all data types in canonical order.
    pub fn all_types() -> &'static [DataType] {
        &[
            Self::Uint8,
            Self::Uint16,
            Self::Uint32,
            Self::Uint64,
            Self::Int8,
            Self::Int16,
            Self::Int32,
            Self::Int64,
            Self::Float16,
            Self::Float32,
            Self::Float64,
            Self::Cint16,
            Self::Cint32,
            Self::Cfloat32,
            Self::Cfloat64,
            Self::Other,
        ]
    }

    /// Returns the lowercase string identifier for this data type.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float16 => "float16",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Cint16 => "cint16",
            Self::Cint32 => "cint32",
            Self::Cfloat32 => "cfloat32",
            Self::Cfloat64 => "cfloat64",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ValidationError;

    /// Parse a data type from its lowercase string identifier.
    ///
    /// Accepts the same identifiers produced by [`DataType::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uint8" => Ok(Self::Uint8),
            "uint16" => Ok(Self::Uint16),
            "uint32" => Ok(Self::Uint32),
            "uint64" => Ok(Self::Uint64),
            "int8" => Ok(Self::Int8),
            "int16" => Ok(Self::Int16),
            "int32" => Ok(Self::Int32),
            "int64" => Ok(Self::Int64),
            "float16" => Ok(Self::Float16),
            "float32" => Ok(Self::Float32),
            "float64" => Ok(Self::Float64),
            "cint16" => Ok(Self::Cint16),
            "cint32" => Ok(Self::Cint32),
            "cfloat32" => Ok(Self::Cfloat32),
            "cfloat64" => Ok(Self::Cfloat64),
            "other" => Ok(Self::Other),
            other => Err(ValidationError::UnknownTag {
                field: "data_type".to_string(),
                value: other.to_string(),
            }),
        }
    }
}
