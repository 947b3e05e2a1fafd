#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cumulative tally of round outcomes for one session.
///
/// Counters only ever increase; nothing is persisted across sessions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub correct: u32,
    pub incorrect: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit one round outcome.
    pub fn record(&mut self, answered_correctly: bool) {
        if answered_correctly {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    /// Accuracy as an integer percentage, rounded to nearest.
    ///
    /// Returns 0 whenever either counter is still 0 - including a perfect
    /// streak like 5 correct / 0 incorrect. Quirky, but it is the scoring
    /// rule the quiz has always shown, so it stays.
    pub fn accuracy(&self) -> u32 {
        if self.correct == 0 || self.incorrect == 0 {
            return 0;
        }
        let ratio = self.correct as f64 / (self.correct + self.incorrect) as f64;
        (ratio * 100.0).round() as u32
    }
}
