//! # Resize Modes
//!
//! The closed set of strategies for fitting source rasters to the input
//! tensor's spatial dimensions: cropping, padding, the interpolation
//! family, and the wrap variants for remap-style operations.

use std::str::FromStr;

use mlm_core::ValidationError;
use serde::{Deserialize, Serialize};

/// How source data is resized to match the input tensor shape.
///
/// Serialized as the kebab-case identifier (`"crop"`,
/// `"interpolation-nearest"`, ...). Optional wherever it appears; an
/// absent value means the model imposes no resize strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeType {
    /// Crop the source to the target extent.
    Crop,
    /// Pad the source out to the target extent.
    Pad,
    /// Nearest-neighbor interpolation.
    InterpolationNearest,
    /// Bilinear interpolation.
    InterpolationLinear,
    /// Bicubic interpolation.
    InterpolationCubic,
    /// Pixel-area-relation resampling.
    InterpolationArea,
    /// Lanczos interpolation over an 8x8 neighborhood.
    InterpolationLanczos4,
    /// Maximum-value pooling interpolation.
    InterpolationMax,
    /// Remap wrap mode that fills outliers.
    WrapFillOutliers,
    /// Remap wrap mode using the inverse transformation.
    WrapInverseMap,
}

/// Total number of resize modes. Used for compile-time assertions.
pub const RESIZE_TYPE_COUNT: usize = 10;

impl ResizeType {
    /// Returns all resize modes in canonical order.
    pub fn all_modes() -> &'static [ResizeType] {
        &[
            Self::Crop,
            Self::Pad,
            Self::InterpolationNearest,
            Self::InterpolationLinear,
            Self::InterpolationCubic,
            Self::InterpolationArea,
            Self::InterpolationLanczos4,
            Self::InterpolationMax,
            Self::WrapFillOutliers,
            Self::WrapInverseMap,
        ]
    }

    /// Returns the kebab-case string identifier for this mode.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Pad => "pad",
            Self::InterpolationNearest => "interpolation-nearest",
            Self::InterpolationLinear => "interpolation-linear",
            Self::InterpolationCubic => "interpolation-cubic",
            Self::InterpolationArea => "interpolation-area",
            Self::InterpolationLanczos4 => "interpolation-lanczos4",
            Self::InterpolationMax => "interpolation-max",
            Self::WrapFillOutliers => "wrap-fill-outliers",
            Self::WrapInverseMap => "wrap-inverse-map",
        }
    }
}

impl std::fmt::Display for ResizeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeType {
    type Err = ValidationError;

    /// Parse a resize mode from its kebab-case identifier.
    ///
    /// Accepts the same identifiers produced by [`ResizeType::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crop" => Ok(Self::Crop),
            "pad" => Ok(Self::Pad),
            "interpolation-nearest" => Ok(Self::InterpolationNearest),
            "interpolation-linear" => Ok(Self::InterpolationLinear),
            "interpolation-cubic" => Ok(Self::InterpolationCubic),
            "interpolation-area" => Ok(Self::InterpolationArea),
            "interpolation-lanczos4" => Ok(Self::InterpolationLanczos4),
            "interpolation-max" => Ok(Self::InterpolationMax),
            "wrap-fill-outliers" => Ok(Self::WrapFillOutliers),
            "wrap-inverse-map" => Ok(Self::WrapInverseMap),
            other => Err(ValidationError::UnknownTag {
                field: "resize_type".to_string(),
                value: other.to_string(),
            }),
        }
    }
}
