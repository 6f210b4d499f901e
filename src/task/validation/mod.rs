//! Validation layer for raw task payloads.
//!
//! Accepts untyped JSON input and produces either a well-typed request
//! object or a structured error enumerating every violated constraint.
//! Validation returns results; it never uses errors for control flow
//! internally.

mod error;
mod rules;

pub use error::{ValidationError, ValidationResult};
pub use rules::{parse_create, parse_patch};
