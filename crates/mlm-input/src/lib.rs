//! # mlm-input — Model-Input Schema
//!
//! Declarative description of one named input consumed by a machine-learning
//! model inside a geospatial metadata document: the tensor structure
//! (shape, dimension order, element type), the bands that compose the
//! input, and the per-band value scaling and resize rules applied before
//! the model sees the data.
//!
//! Everything here is a validate-on-construct, serialize-on-demand value
//! type. There is no model execution and no I/O; the crate's only job is
//! to accept a JSON-compatible document, reject it with a complete list of
//! violations when it is malformed, and reproduce it byte-for-byte in
//! structure when it is not.
//!
//! ## Invariants
//!
//! - **Shape alignment**: `input.shape` and `input.dim_order` always
//!   describe the same number of axes.
//! - **Derived bands**: a band's `format` and `expression` are set together
//!   or not at all.
//! - **Closed unions**: scaling rules and resize modes are fixed sets; an
//!   unrecognized discriminator fails at parse, never silently passes.
//!
//! The contract is deliberately permissive everywhere else: band counts may
//! diverge from shape entries, scaling entries are aligned to bands by
//! convention only, and no numeric ordering (e.g. minimum below maximum)
//! is imposed.

pub mod band;
pub mod input;
pub mod resize;
pub mod scaling;
pub mod structure;

// Re-export primary types for ergonomic imports.
pub use band::{Band, ModelBand};
pub use input::{ModelInput, ModelInputBuilder};
pub use resize::{ResizeType, RESIZE_TYPE_COUNT};
pub use scaling::ScalingObject;
pub use structure::InputStructure;
