//! Foundation module - Shared domain primitives.
//!
//! Contains the error types and error codes shared across the choice
//! collector domain.

mod errors;

pub use errors::{ErrorCode, ValidationError};
