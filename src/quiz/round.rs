use std::collections::BTreeMap;

use crate::music::{Interval, Note};
use crate::quiz::choice::{correct_choice_id, Choice};

/*
Round State Machine
===================

One round plays a prompt interval and waits for the user to identify it.

    ┌────────────┐ select  ┌──────────┐ select correct ┌──────┐
    │ Unanswered │ ──────→ │ Answered │ ─────────────→ │ Over │
    └────────────┘ wrong   └──────────┘                └──────┘
          │                     ↑ │
          │  select correct     └─┘ select wrong (retry)
          └────────────────────────────────→ Over

Selecting the correct choice ends the round no matter how many wrong
attempts came before it. `answered_correctly` is stricter: it latches true
only when the very first selection of the round is the correct one, and a
wrong first attempt forecloses it for good. That is the number the
scoreboard counts.

Selections made after the round is over are still recorded; the round
stays over. If no choice is marked correct the round can never end.
*/

/// Visual feedback state for one selected choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Correct,
    Incorrect,
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No selection made yet.
    Unanswered,
    /// At least one (wrong) selection made; retries allowed.
    Answered,
    /// The correct choice has been selected.
    Over,
}

/// One played interval awaiting identification.
#[derive(Debug, Clone)]
pub struct Round {
    number: u32,
    prompt: Interval,
    root: Note,
    choices: Vec<Choice>,
    selections: BTreeMap<u32, Selection>,
    answered: bool,
    answered_correctly: bool,
    over: bool,
}

impl Round {
    pub fn new(number: u32, prompt: Interval, root: Note, choices: Vec<Choice>) -> Self {
        Self {
            number,
            prompt,
            root,
            choices,
            selections: BTreeMap::new(),
            answered: false,
            answered_correctly: false,
            over: false,
        }
    }

    /// 1-based round number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The interval being asked about.
    pub fn prompt(&self) -> Interval {
        self.prompt
    }

    /// Root note the prompt is built on.
    pub fn root(&self) -> Note {
        self.root
    }

    /// Upper note of the prompt interval.
    pub fn target(&self) -> Note {
        self.prompt.above(self.root)
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Id of the correct choice, if any.
    pub fn correct_choice_id(&self) -> Option<u32> {
        correct_choice_id(&self.choices)
    }

    /// Feedback recorded for a choice, if the user has selected it.
    pub fn selection(&self, id: u32) -> Option<Selection> {
        self.selections.get(&id).copied()
    }

    /// Register a selection and return its outcome.
    ///
    /// An id that matches no choice records as incorrect, same as picking
    /// a wrong choice.
    pub fn select(&mut self, id: u32) -> Selection {
        let outcome = if self.correct_choice_id() == Some(id) {
            Selection::Correct
        } else {
            Selection::Incorrect
        };
        self.selections.insert(id, outcome);

        if outcome == Selection::Correct {
            // First-ever selection correct: counts for the scoreboard.
            if !self.answered {
                self.answered_correctly = true;
            }
            self.over = true;
        }
        self.answered = true;

        outcome
    }

    pub fn phase(&self) -> RoundPhase {
        if self.over {
            RoundPhase::Over
        } else if self.answered {
            RoundPhase::Answered
        } else {
            RoundPhase::Unanswered
        }
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// True when the first selection of the round was the correct choice.
    pub fn answered_correctly(&self) -> bool {
        self.answered_correctly
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Number of selections recorded this round.
    pub fn selection_count(&self) -> usize {
        self.selections.len()
    }
}
