//! Core validation types and traits
//!
//! This module contains the building blocks every validator shares:
//!
//! - **Values**: [`Value`], [`Map`], [`ValueKind`]
//! - **Traits**: [`Validator`], [`Check`], [`IntoShared`]
//! - **Skeleton**: [`Base`] (optional flag and message override)
//! - **Outcomes**: [`ValidationResult`], [`ValidationError`], [`ValidationErrors`]
//! - **Construction errors**: [`SchemaError`]
//! - **Paths**: the [`path`] helpers
//!
//! # Architecture
//!
//! Configuration and validation are separate phases. A validator tree is built
//! once through the copy-on-configure builders, then `validate` is called any
//! number of times. `validate` only reads the tree and allocates a fresh error
//! list per call, so it is safe to share a tree across threads.

pub mod base;
pub mod error;
pub mod path;
pub mod result;
pub mod traits;
pub mod value;

pub use base::Base;
pub use error::{Params, SchemaError, ValidationError, ValidationErrors};
pub use result::ValidationResult;
pub use traits::{Check, IntoShared, SharedValidator, Validator};
pub use value::{Map, Value, ValueKind, describe};
