#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One multiple-choice option within a round.
///
/// Ids are unique within their round (the generator assigns 0..n after
/// shuffling). The generator guarantees exactly one choice per round has
/// `is_correct` set; nothing downstream re-checks that.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: u32,
    pub label: String,
    pub is_correct: bool,
}

impl Choice {
    pub fn new(id: u32, label: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id,
            label: label.into(),
            is_correct,
        }
    }
}

/// Id of the first correct choice, or `None` if no choice is correct.
///
/// With no correct choice a round can never end; callers that build choices
/// by hand get that silent stall rather than a panic.
pub fn correct_choice_id(choices: &[Choice]) -> Option<u32> {
    choices.iter().find(|choice| choice.is_correct).map(|choice| choice.id)
}
