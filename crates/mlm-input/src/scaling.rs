//! # Value Scaling Rules
//!
//! The closed union of normalization rules applied to raw band values
//! before model consumption, discriminated by a `type` string in the
//! document. Each variant carries exactly the parameters its rule needs;
//! a missing parameter or an unrecognized discriminator fails at parse.
//!
//! No ordering is imposed between `minimum` and `maximum` for the `clip`
//! and `min-max` rules. The standard this schema encodes leaves that
//! unconstrained, and the permissiveness is preserved.

use mlm_core::Number;
use serde::{Deserialize, Serialize};

/// A declarative value-scaling rule for one band.
///
/// Wherever it appears in a document the value may also be `null`,
/// meaning "no scaling for this band"; that nullability lives at the
/// use site as an `Option<ScalingObject>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScalingObject {
    /// Clamp values below a floor.
    #[serde(rename = "clip-min")]
    ClipMin {
        /// The floor.
        minimum: Number,
    },

    /// Clamp values above a ceiling.
    #[serde(rename = "clip-max")]
    ClipMax {
        /// The ceiling.
        maximum: Number,
    },

    /// Clamp values to a closed interval.
    #[serde(rename = "clip")]
    Clip {
        /// The floor.
        minimum: Number,
        /// The ceiling.
        maximum: Number,
    },

    /// Rescale values linearly into the unit interval.
    #[serde(rename = "min-max")]
    MinMax {
        /// The value mapped to 0.
        minimum: Number,
        /// The value mapped to 1.
        maximum: Number,
    },

    /// Standardize values to zero mean and unit variance.
    #[serde(rename = "z-score")]
    ZScore {
        /// The mean subtracted from each value.
        mean: Number,
        /// The standard deviation each value is divided by.
        stddev: Number,
    },

    /// Add a constant to each value.
    #[serde(rename = "offset")]
    Offset {
        /// The constant added.
        value: Number,
    },

    /// Multiply each value by a constant.
    #[serde(rename = "scale")]
    Scale {
        /// The constant factor.
        value: Number,
    },

    /// Apply a named processing expression; the escape hatch for rules
    /// outside the fixed set.
    #[serde(rename = "processing")]
    Processing {
        /// The expression dialect identifier.
        format: String,
        /// The dialect-specific expression payload.
        expression: serde_json::Value,
    },
}

impl ScalingObject {
    /// The discriminator string for this rule, as it appears in the
    /// document's `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ClipMin { .. } => "clip-min",
            Self::ClipMax { .. } => "clip-max",
            Self::Clip { .. } => "clip",
            Self::MinMax { .. } => "min-max",
            Self::ZScore { .. } => "z-score",
            Self::Offset { .. } => "offset",
            Self::Scale { .. } => "scale",
            Self::Processing { .. } => "processing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn min_max_requires_both_bounds() {
        let err = serde_json::from_value::<ScalingObject>(json!({
            "type": "min-max",
            "minimum": 0,
        }));
        assert!(err.is_err());
    }

    #[test]
    fn min_max_with_both_bounds_roundtrips() {
        let value = json!({"type": "min-max", "minimum": 0, "maximum": 1});
        let scaling: ScalingObject = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(
            scaling,
            ScalingObject::MinMax {
                minimum: Number::Int(0),
                maximum: Number::Int(1),
            }
        );
        assert_eq!(serde_json::to_value(&scaling).unwrap(), value);
    }

    #[test]
    fn unrecognized_type_fails() {
        let err = serde_json::from_value::<ScalingObject>(json!({
            "type": "logarithmic",
            "base": 10,
        }));
        assert!(err.is_err());
    }

    #[test]
    fn tag_first_in_serialized_form() {
        let scaling = ScalingObject::ZScore {
            mean: Number::Float(120.5),
            stddev: Number::Float(42.1),
        };
        let rendered = serde_json::to_string(&scaling).unwrap();
        assert!(rendered.starts_with("{\"type\":\"z-score\""));
    }

    #[test]
    fn inverted_bounds_are_accepted() {
        // minimum above maximum is not rejected; the encoded standard
        // imposes no ordering.
        let scaling: ScalingObject = serde_json::from_value(json!({
            "type": "clip",
            "minimum": 255,
            "maximum": 0,
        }))
        .unwrap();
        assert_eq!(scaling.kind(), "clip");
    }

    #[test]
    fn processing_variant_carries_expression() {
        let value = json!({
            "type": "processing",
            "format": "gdal-calc",
            "expression": "A * 0.0001",
        });
        let scaling: ScalingObject = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(scaling.kind(), "processing");
        assert_eq!(serde_json::to_value(&scaling).unwrap(), value);
    }

    #[test]
    fn kind_matches_serialized_tag() {
        let rules = [
            ScalingObject::ClipMin {
                minimum: Number::Int(0),
            },
            ScalingObject::ClipMax {
                maximum: Number::Int(1),
            },
            ScalingObject::Clip {
                minimum: Number::Int(0),
                maximum: Number::Int(1),
            },
            ScalingObject::MinMax {
                minimum: Number::Int(0),
                maximum: Number::Int(1),
            },
            ScalingObject::ZScore {
                mean: Number::Float(0.0),
                stddev: Number::Float(1.0),
            },
            ScalingObject::Offset {
                value: Number::Int(-128),
            },
            ScalingObject::Scale {
                value: Number::Float(0.0001),
            },
            ScalingObject::Processing {
                format: "rio-calc".to_string(),
                expression: serde_json::Value::String("B1 / 255".to_string()),
            },
        ];
        for rule in rules {
            let value = serde_json::to_value(&rule).unwrap();
            assert_eq!(value["type"], rule.kind());
        }
    }
}
