//! Quiz domain: rounds, choices, scoring, and session state.
//!
//! Everything here is plain synchronous state - no audio, no UI. The
//! binary drives a [`Session`] from keyboard events and reads it back each
//! frame to render.

/// Multiple-choice options and correct-choice lookup.
pub mod choice;
/// Configuration-driven round generation.
pub mod generator;
/// Per-round selection state machine.
pub mod round;
/// Cumulative correct/incorrect tally and accuracy.
pub mod scoreboard;
/// Root controller state across rounds.
pub mod session;

pub use choice::{correct_choice_id, Choice};
pub use generator::RoundGenerator;
pub use round::{Round, RoundPhase, Selection};
pub use scoreboard::Scoreboard;
pub use session::Session;

use std::error::Error;
use std::fmt;

/// Errors raised while configuring a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    /// The interval pool was empty.
    EmptyIntervalPool,
    /// The pool has fewer distinct intervals than choices per round.
    NotEnoughIntervals { have: usize, need: usize },
    /// Fewer than two choices per round makes no quiz.
    TooFewChoices(usize),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::EmptyIntervalPool => write!(f, "interval pool is empty"),
            QuizError::NotEnoughIntervals { have, need } => write!(
                f,
                "interval pool has {have} distinct intervals but {need} choices were requested"
            ),
            QuizError::TooFewChoices(count) => {
                write!(f, "a round needs at least 2 choices, got {count}")
            }
        }
    }
}

impl Error for QuizError {}
