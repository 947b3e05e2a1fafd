use rand::Rng;

use crate::quiz::generator::RoundGenerator;
use crate::quiz::round::{Round, Selection};
use crate::quiz::scoreboard::Scoreboard;

/// Root controller state for one quiz session.
///
/// Owns the current round, the scoreboard, and the generator; all
/// mutation goes through [`select`](Session::select) and
/// [`next_round`](Session::next_round). Single-threaded by design - the
/// UI thread owns the session, the audio thread only ever receives
/// playback commands derived from it.
pub struct Session<R: Rng> {
    generator: RoundGenerator<R>,
    round: Round,
    scoreboard: Scoreboard,
}

impl<R: Rng> Session<R> {
    /// Start a session on round 1.
    pub fn new(mut generator: RoundGenerator<R>) -> Self {
        let round = generator.generate(1);
        Self {
            generator,
            round,
            scoreboard: Scoreboard::new(),
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Register a selection on the current round.
    pub fn select(&mut self, id: u32) -> Selection {
        self.round.select(id)
    }

    /// Commit the current round's outcome to the scoreboard and advance to
    /// a fresh round with an empty selection map.
    ///
    /// A round left unfinished scores as incorrect, same as a wrong first
    /// attempt.
    pub fn next_round(&mut self) {
        self.scoreboard.record(self.round.answered_correctly());
        let number = self.round.number() + 1;
        self.round = self.generator.generate(number);
    }
}
