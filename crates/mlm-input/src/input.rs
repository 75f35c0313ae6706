//! # Model Input Record
//!
//! One named input consumed by a model: the bands composing it, the tensor
//! structure those bands are packed into, and the optional scaling and
//! resize rules applied beforehand.
//!
//! ## Serialization Policy
//!
//! Two omission policies coexist in this record and must not be merged:
//!
//! - `scaling` and `resize_type` disappear from the document when absent.
//! - `pre_processing_function` is always emitted, as `null` when absent.
//!
//! ## Alignment Contracts
//!
//! `bands` order is significant and aligns positionally with the axes of
//! `input.shape`; duplicates are permitted since a model may reuse a band.
//! `scaling`, when present, aligns positionally with `bands`, with `null`
//! entries meaning "no scaling for this band". Neither alignment is
//! enforced here; the embedding document owns those conventions. A
//! bands/scaling length divergence is logged as a warning.

use mlm_core::{MlmError, ProcessingExpression, ValidationError, ValidationErrors};
use serde::{Deserialize, Serialize};

use crate::band::Band;
use crate::resize::ResizeType;
use crate::scaling::ScalingObject;
use crate::structure::InputStructure;

/// A named model input with its band composition and pre-consumption rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInput {
    /// Name of this input (e.g. `"RGB time series"`).
    pub name: String,

    /// Bands composing the input, in tensor order. Empty when the model
    /// takes no band-structured data.
    pub bands: Vec<Band>,

    /// The tensor structure the bands are packed into.
    pub input: InputStructure,

    /// Per-band scaling rules, aligned with `bands`. A `null` entry means
    /// no scaling for that band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling: Option<Vec<Option<ScalingObject>>>,

    /// How source data is resized to the input shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_type: Option<ResizeType>,

    /// A transformation applied to the assembled input before the model
    /// consumes it. Always present in the document, `null` when unused.
    #[serde(default)]
    pub pre_processing_function: Option<ProcessingExpression>,
}

impl ModelInput {
    /// Start building a model input from its required fields.
    pub fn builder(name: impl Into<String>, input: InputStructure) -> ModelInputBuilder {
        ModelInputBuilder {
            name: name.into(),
            bands: Vec::new(),
            input,
            scaling: None,
            resize_type: None,
            pre_processing_function: None,
        }
    }

    /// Parse a model input from a JSON document and validate it.
    ///
    /// Fail-fast: a record is never returned unless both the serde layer
    /// (types, union tags, required keys) and the invariant pass accept it.
    ///
    /// # Errors
    ///
    /// [`MlmError::Json`] when the document cannot be coerced into the
    /// declared types; [`MlmError::Validation`] with every violated
    /// invariant otherwise.
    pub fn from_value(value: serde_json::Value) -> Result<Self, MlmError> {
        let input: ModelInput = serde_json::from_value(value)?;
        input.validate()?;
        Ok(input)
    }

    /// Project this record to its JSON document form.
    ///
    /// Omitted optionals (`scaling`, `resize_type`) do not appear;
    /// `pre_processing_function` appears as `null` when absent.
    pub fn to_value(&self) -> Result<serde_json::Value, MlmError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Re-check every invariant across the record.
    ///
    /// Violations from all fields are aggregated: a record with a
    /// mismatched shape AND a half-derived band reports both.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.is_empty() {
            errors.push(ValidationError::EmptyField {
                field: "name".to_string(),
            });
        }

        self.input.collect_violations(&mut errors);

        for (i, band) in self.bands.iter().enumerate() {
            if let Band::Full(band) = band {
                band.collect_violations(&format!("bands[{i}]"), &mut errors);
            }
        }

        // Alignment with bands is a convention of the embedding document,
        // not an invariant; surface a divergence without failing.
        if let Some(scaling) = &self.scaling {
            if scaling.len() != self.bands.len() {
                tracing::warn!(
                    input = %self.name,
                    bands = self.bands.len(),
                    scaling = scaling.len(),
                    "scaling entries do not align one-to-one with bands"
                );
            }
        }

        errors.into_result()
    }
}

/// Builder for [`ModelInput`] whose [`build`](ModelInputBuilder::build)
/// is the validation gate: no instance escapes it unchecked.
#[derive(Debug, Clone)]
pub struct ModelInputBuilder {
    name: String,
    bands: Vec<Band>,
    input: InputStructure,
    scaling: Option<Vec<Option<ScalingObject>>>,
    resize_type: Option<ResizeType>,
    pre_processing_function: Option<ProcessingExpression>,
}

impl ModelInputBuilder {
    /// Append one band.
    pub fn band(mut self, band: impl Into<Band>) -> Self {
        self.bands.push(band.into());
        self
    }

    /// Replace the whole band sequence.
    pub fn bands(mut self, bands: Vec<Band>) -> Self {
        self.bands = bands;
        self
    }

    /// Set the per-band scaling rules.
    pub fn scaling(mut self, scaling: Vec<Option<ScalingObject>>) -> Self {
        self.scaling = Some(scaling);
        self
    }

    /// Set the resize mode.
    pub fn resize_type(mut self, resize_type: ResizeType) -> Self {
        self.resize_type = Some(resize_type);
        self
    }

    /// Set the pre-processing transformation.
    pub fn pre_processing_function(mut self, expression: ProcessingExpression) -> Self {
        self.pre_processing_function = Some(expression);
        self
    }

    /// Validate and produce the record.
    ///
    /// # Errors
    ///
    /// Every violated invariant, aggregated.
    pub fn build(self) -> Result<ModelInput, ValidationErrors> {
        let input = ModelInput {
            name: self.name,
            bands: self.bands,
            input: self.input,
            scaling: self.scaling,
            resize_type: self.resize_type,
            pre_processing_function: self.pre_processing_function,
        };
        input.validate()?;
        Ok(input)
    }
}
