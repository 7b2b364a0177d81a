//! Placeholder scanning.
//!
//! A placeholder is `{dotted.path}`. Markers are neither nested nor escaped:
//! each `{` pairs with the nearest following `}`, and an unterminated `{`
//! ends the scan without error.

use std::ops::Range;

/// Opening marker of a placeholder.
pub const START_MARKER: char = '{';

/// Closing marker of a placeholder.
pub const END_MARKER: char = '}';

/// Separator between path segments inside a placeholder body.
pub const PATH_SEPARATOR: char = '.';

/// A `{body}` token found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    body: String,
}

impl Placeholder {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// The dotted path between the markers.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The full token as it appears in the template, markers included.
    pub fn token(&self) -> String {
        format!("{}{}{}", START_MARKER, self.body, END_MARKER)
    }

    /// Path segments of the body. Always at least one, possibly empty.
    pub fn segments(&self) -> Vec<&str> {
        self.body.split(PATH_SEPARATOR).collect()
    }

    /// True when the body addresses a nested value (`a.b`).
    pub fn is_nested(&self) -> bool {
        self.body.contains(PATH_SEPARATOR)
    }
}

/// A placeholder together with its byte span in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedPlaceholder {
    /// Byte range covering both markers.
    pub span: Range<usize>,
    pub placeholder: Placeholder,
}

/// Scans `template` left to right and returns every placeholder in order.
///
/// After a match the cursor moves past the closing marker, so adjacent
/// placeholders and stray `}` characters never shift later matches.
pub fn scan(template: &str) -> Vec<ScannedPlaceholder> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = template[cursor..].find(START_MARKER) {
        let start = cursor + offset;
        let body_start = start + START_MARKER.len_utf8();
        let Some(body_len) = template[body_start..].find(END_MARKER) else {
            break;
        };
        let body_end = body_start + body_len;
        let end = body_end + END_MARKER.len_utf8();

        found.push(ScannedPlaceholder {
            span: start..end,
            placeholder: Placeholder::new(&template[body_start..body_end]),
        });
        cursor = end;
    }

    found
}
