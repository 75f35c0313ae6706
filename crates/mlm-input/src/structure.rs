//! # Input Tensor Structure
//!
//! The shape of the tensor a model input expects: one entry per axis in
//! `shape`, the semantic label of each axis in `dim_order`, and the
//! element type. The two sequences are positionally aligned, which is the
//! one hard invariant this module enforces.

use mlm_core::{DataType, Number, ValidationError, ValidationErrors};
use serde::{Deserialize, Serialize};

/// The tensor structure of a model input.
///
/// All three fields are required and always serialized, in declaration
/// order. An integer `shape` entry is a fixed dimension; a real entry is
/// the conventional sentinel for a variable or unknown dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputStructure {
    /// Extent of each tensor axis, aligned with `dim_order`.
    pub shape: Vec<Number>,
    /// Semantic label of each tensor axis (e.g. `"batch"`, `"channel"`,
    /// `"height"`, `"width"`), aligned with `shape`.
    pub dim_order: Vec<String>,
    /// Element type of the tensor.
    pub data_type: DataType,
}

impl InputStructure {
    /// Construct a structure, validating the shape/dim_order alignment.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant: empty `shape`, empty `dim_order`,
    /// or a length mismatch between the two.
    pub fn new(
        shape: Vec<Number>,
        dim_order: Vec<String>,
        data_type: DataType,
    ) -> Result<Self, ValidationErrors> {
        let structure = Self {
            shape,
            dim_order,
            data_type,
        };
        structure.validate()?;
        Ok(structure)
    }

    /// Number of axes described by this structure.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Re-check the structural invariants.
    ///
    /// Deserialization does not run this automatically; the document entry
    /// points in [`crate::input`] call it after parsing.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.collect_violations(&mut errors);
        errors.into_result()
    }

    pub(crate) fn collect_violations(&self, errors: &mut ValidationErrors) {
        if self.shape.is_empty() {
            errors.push(ValidationError::EmptyField {
                field: "input.shape".to_string(),
            });
        }
        if self.dim_order.is_empty() {
            errors.push(ValidationError::EmptyField {
                field: "input.dim_order".to_string(),
            });
        }
        if self.shape.len() != self.dim_order.len() {
            errors.push(ValidationError::DimensionMismatch {
                shape_len: self.shape.len(),
                dim_order_len: self.dim_order.len(),
            });
        }
    }
}
