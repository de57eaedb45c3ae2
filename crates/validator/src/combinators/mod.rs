//! Combinators built from other validators
//!
//! - [`Any`]: accepts everything
//! - [`Nullable`]: absent values become `null`
//! - [`Optional`]: absent values pass with no data
//! - [`Union`]: first matching member wins

pub mod any;
pub mod nullable;
pub mod optional;
pub mod union;

pub use any::Any;
pub use nullable::Nullable;
pub use optional::Optional;
pub use union::Union;
