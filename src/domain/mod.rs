//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, error codes)
//! - `shared_state` - Read-only session snapshot supplied by the engine
//! - `template` - Placeholder substitution from shared state
//! - `choice_collector` - The collect/resume decision step and its outcomes

pub mod choice_collector;
pub mod foundation;
pub mod shared_state;
pub mod template;
