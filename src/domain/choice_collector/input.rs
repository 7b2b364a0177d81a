use serde::{Deserialize, Serialize};

/// What the engine hands back from a previous collect directive.
///
/// The index is signed because it arrives from outside the step and a
/// negative value must be reported, not wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CollectedInput {
    /// First pass: nothing has been presented yet.
    #[default]
    NoAnswer,
    /// The user picked a single option.
    SingleIndex { index: i64 },
}

impl CollectedInput {
    pub fn single(index: i64) -> Self {
        CollectedInput::SingleIndex { index }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, CollectedInput::SingleIndex { .. })
    }
}

impl From<Option<i64>> for CollectedInput {
    fn from(index: Option<i64>) -> Self {
        index.map_or(CollectedInput::NoAnswer, CollectedInput::single)
    }
}
