//! # Band Composition
//!
//! The bands that compose a model input. A band position in the document
//! is polymorphic: a bare string names a band defined elsewhere in the
//! embedding document, while a full record can additionally derive the
//! band from other bands via a processing expression.

use mlm_core::{ValidationError, ValidationErrors};
use serde::{Deserialize, Serialize};

/// A full band record.
///
/// `format` and `expression` are mutually dependent: a derived band (e.g.
/// an NDVI computed from two spectral bands) sets both, a direct
/// named-band reference sets neither. When absent, the two keys are
/// omitted from the document entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBand {
    /// Name of the band, referring to an entry in a bands definition of
    /// the embedding document.
    pub name: String,

    /// The expression dialect used to derive this band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// The dialect-specific expression deriving this band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<serde_json::Value>,
}

impl ModelBand {
    /// A direct reference to a named band.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: None,
            expression: None,
        }
    }

    /// A band derived via a processing expression.
    pub fn derived(
        name: impl Into<String>,
        format: impl Into<String>,
        expression: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            name: name.into(),
            format: Some(format.into()),
            expression: Some(expression.into()),
        }
    }

    /// Whether this band is derived via a processing expression.
    pub fn is_derived(&self) -> bool {
        self.format.is_some() && self.expression.is_some()
    }

    /// Re-check the band invariants.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.collect_violations("band", &mut errors);
        errors.into_result()
    }

    pub(crate) fn collect_violations(&self, path: &str, errors: &mut ValidationErrors) {
        if self.name.is_empty() {
            errors.push(ValidationError::EmptyField {
                field: format!("{path}.name"),
            });
        }
        match (&self.format, &self.expression) {
            (Some(_), None) => errors.push(ValidationError::MutuallyDependent {
                band: self.name.clone(),
                present: "format",
                missing: "expression",
            }),
            (None, Some(_)) => errors.push(ValidationError::MutuallyDependent {
                band: self.name.clone(),
                present: "expression",
                missing: "format",
            }),
            _ => {}
        }
    }
}

/// One position in a model input's band sequence.
///
/// The untagged representation matches the document: a JSON string parses
/// as [`Band::Named`], an object as [`Band::Full`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Band {
    /// A bare band name.
    Named(String),
    /// A full band record.
    Full(ModelBand),
}

impl Band {
    /// The band name, regardless of representation.
    pub fn name(&self) -> &str {
        match self {
            Band::Named(name) => name,
            Band::Full(band) => &band.name,
        }
    }
}

impl From<&str> for Band {
    fn from(name: &str) -> Self {
        Band::Named(name.to_string())
    }
}

impl From<String> for Band {
    fn from(name: String) -> Self {
        Band::Named(name)
    }
}

impl From<ModelBand> for Band {
    fn from(band: ModelBand) -> Self {
        Band::Full(band)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_without_expression_fails() {
        let band = ModelBand {
            name: "NDVI".to_string(),
            format: Some("rio-calc".to_string()),
            expression: None,
        };
        let err = band.validate().unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(matches!(
            &err.errors()[0],
            ValidationError::MutuallyDependent {
                present: "format",
                missing: "expression",
                ..
            }
        ));
    }

    #[test]
    fn expression_without_format_fails() {
        let band = ModelBand {
            name: "NDVI".to_string(),
            format: None,
            expression: Some(json!("(B08 - B04) / (B08 + B04)")),
        };
        assert!(band.validate().is_err());
    }

    #[test]
    fn both_set_is_valid_and_derived() {
        let band = ModelBand::derived("NDVI", "rio-calc", "(B08 - B04) / (B08 + B04)");
        band.validate().unwrap();
        assert!(band.is_derived());
    }

    #[test]
    fn neither_set_is_valid_and_omits_keys() {
        let band = ModelBand::named("B02");
        band.validate().unwrap();
        assert!(!band.is_derived());
        let value = serde_json::to_value(&band).unwrap();
        assert_eq!(value, json!({"name": "B02"}));
    }

    #[test]
    fn empty_name_fails() {
        let band = ModelBand::named("");
        let err = band.validate().unwrap_err();
        assert!(matches!(
            &err.errors()[0],
            ValidationError::EmptyField { field } if field == "band.name"
        ));
    }

    #[test]
    fn string_position_parses_as_named() {
        let band: Band = serde_json::from_value(json!("B01")).unwrap();
        assert_eq!(band, Band::Named("B01".to_string()));
        assert_eq!(band.name(), "B01");
    }

    #[test]
    fn object_position_parses_as_full() {
        let band: Band = serde_json::from_value(json!({"name": "B02"})).unwrap();
        assert_eq!(band, Band::Full(ModelBand::named("B02")));
        assert_eq!(band.name(), "B02");
    }

    #[test]
    fn representation_survives_roundtrip() {
        // A bare string and a {name} record refer to the same band but are
        // distinct document values; neither may collapse into the other.
        let named = Band::Named("B01".to_string());
        let full = Band::Full(ModelBand::named("B01"));
        let named_value = serde_json::to_value(&named).unwrap();
        let full_value = serde_json::to_value(&full).unwrap();
        assert_eq!(named_value, json!("B01"));
        assert_eq!(full_value, json!({"name": "B01"}));
        assert_eq!(serde_json::from_value::<Band>(named_value).unwrap(), named);
        assert_eq!(serde_json::from_value::<Band>(full_value).unwrap(), full);
    }
}
