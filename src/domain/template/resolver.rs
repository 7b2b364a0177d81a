//! Template Resolver - Substitutes placeholders with values from shared state.

use serde_json::Value;

use super::placeholder::{scan, Placeholder};
use super::TemplateError;
use crate::domain::shared_state::SharedState;

/// Character removed from every rendered prompt.
pub const STRIPPED_CHAR: char = '"';

/// Placeholder substitution over a [`SharedState`] snapshot.
pub struct TemplateResolver;

impl TemplateResolver {
    /// Renders `template` against `state`.
    ///
    /// # Algorithm
    /// 1. Scan for `{path}` placeholders.
    /// 2. Resolve every placeholder; the first failure aborts the render.
    /// 3. Splice each resolved literal into its span.
    /// 4. Remove every `"` from the result.
    ///
    /// Strings are inserted as-is; other leaves use their JSON text.
    /// Substituted text is never re-scanned.
    ///
    /// # Errors
    /// - `VariableNotFound` when a single-segment path is absent
    /// - `NestedPathIncomplete` when any segment of a dotted path is absent
    pub fn resolve(template: &str, state: &SharedState) -> Result<String, TemplateError> {
        let scanned = scan(template);

        let literals = scanned
            .iter()
            .map(|item| Self::lookup(&item.placeholder, state))
            .collect::<Result<Vec<_>, _>>()?;

        let mut rendered = String::with_capacity(template.len());
        let mut cursor = 0;
        for (item, literal) in scanned.iter().zip(literals) {
            rendered.push_str(&template[cursor..item.span.start]);
            rendered.push_str(&literal);
            cursor = item.span.end;
        }
        rendered.push_str(&template[cursor..]);

        Ok(rendered.replace(STRIPPED_CHAR, ""))
    }

    /// Placeholders referenced by `template`, in order of appearance.
    pub fn placeholders(template: &str) -> Vec<Placeholder> {
        scan(template).into_iter().map(|s| s.placeholder).collect()
    }

    /// Resolves a single placeholder to its replacement literal.
    pub fn lookup(placeholder: &Placeholder, state: &SharedState) -> Result<String, TemplateError> {
        let segments = placeholder.segments();

        if let [key] = segments.as_slice() {
            state
                .get(key)
                .and_then(first_literal)
                .ok_or_else(|| TemplateError::variable_not_found(placeholder.body()))
        } else {
            state
                .walk(segments.as_slice())
                .and_then(first_literal)
                .ok_or_else(|| TemplateError::nested_path_incomplete(placeholder.body()))
        }
    }
}

/// First element of a multi-valued leaf; a scalar leaf is its own first element.
fn first_literal(leaf: &Value) -> Option<String> {
    match leaf {
        Value::Array(items) => items.first().map(literal),
        other => Some(literal(other)),
    }
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
