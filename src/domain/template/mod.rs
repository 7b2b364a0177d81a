//! Template Module - Placeholder substitution from shared state.
//!
//! Pure, stateless functions with no I/O. A template is plain text with
//! `{dotted.path}` placeholders; see [`TemplateResolver::resolve`] for the
//! substitution rules.

mod errors;
mod placeholder;
mod resolver;

pub use errors::TemplateError;
pub use placeholder::{
    scan, Placeholder, ScannedPlaceholder, END_MARKER, PATH_SEPARATOR, START_MARKER,
};
pub use resolver::{TemplateResolver, STRIPPED_CHAR};

use crate::domain::shared_state::SharedState;

/// Renders `template` against `state`. Shorthand for [`TemplateResolver::resolve`].
pub fn resolve(template: &str, state: &SharedState) -> Result<String, TemplateError> {
    TemplateResolver::resolve(template, state)
}
