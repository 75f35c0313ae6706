//! # mlm-core — Foundational Types for the MLM Schema Stack
//!
//! This crate defines the base vocabulary shared by every schema crate in
//! the workspace: the tensor element-type enumeration, the int-or-float
//! numeric value, the generic processing-expression record, and the
//! structured validation error hierarchy.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enumerations with a full string surface.** `DataType` is a
//!    fixed set with `as_str()`, `FromStr`, and an `all_types()` listing.
//!    Adding a value forces every exhaustive `match` to be updated.
//!
//! 2. **`Number` mirrors JSON numerics.** Integers stay integers, reals stay
//!    reals, both through deserialization and back out. No silent widening.
//!
//! 3. **Aggregated validation failures.** A validation pass collects every
//!    violation into [`ValidationErrors`] before failing, so callers see the
//!    complete list of offending fields rather than the first one.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mlm-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize` where they appear in documents.

pub mod datatype;
pub mod error;
pub mod number;
pub mod processing;

// Re-export primary types for ergonomic imports.
pub use datatype::{DataType, DATA_TYPE_COUNT};
pub use error::{MlmError, ValidationError, ValidationErrors};
pub use number::Number;
pub use processing::ProcessingExpression;
