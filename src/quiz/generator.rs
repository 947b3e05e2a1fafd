use rand::seq::SliceRandom;
use rand::Rng;

use crate::music::{Interval, Note};
use crate::quiz::choice::Choice;
use crate::quiz::round::Round;
use crate::quiz::QuizError;

/// Configuration-driven round generator.
///
/// Every round draws a prompt interval uniformly from the pool and builds
/// shuffled choices around it: exactly one correct, the rest distinct
/// distractors from the same pool. Ids are assigned 0..n after the shuffle,
/// so the correct id varies from round to round.
///
/// The pool is deduplicated up front and validated against the choice
/// count, which makes the one-correct-choice invariant hold by
/// construction.
pub struct RoundGenerator<R: Rng> {
    pool: Vec<Interval>,
    root: Note,
    choice_count: usize,
    rng: R,
}

impl<R: Rng> RoundGenerator<R> {
    pub fn new(
        intervals: &[Interval],
        root: Note,
        choice_count: usize,
        rng: R,
    ) -> Result<Self, QuizError> {
        if intervals.is_empty() {
            return Err(QuizError::EmptyIntervalPool);
        }
        if choice_count < 2 {
            return Err(QuizError::TooFewChoices(choice_count));
        }

        let mut pool = Vec::with_capacity(intervals.len());
        for &interval in intervals {
            if !pool.contains(&interval) {
                pool.push(interval);
            }
        }
        if pool.len() < choice_count {
            return Err(QuizError::NotEnoughIntervals {
                have: pool.len(),
                need: choice_count,
            });
        }

        Ok(Self {
            pool,
            root,
            choice_count,
            rng,
        })
    }

    /// Root note every prompt is built on.
    pub fn root(&self) -> Note {
        self.root
    }

    /// Build the round with the given 1-based number.
    pub fn generate(&mut self, number: u32) -> Round {
        let prompt = self.pool[self.rng.gen_range(0..self.pool.len())];

        let mut distractors: Vec<Interval> = self
            .pool
            .iter()
            .copied()
            .filter(|interval| *interval != prompt)
            .collect();
        distractors.shuffle(&mut self.rng);

        let mut intervals: Vec<Interval> =
            distractors.into_iter().take(self.choice_count - 1).collect();
        intervals.push(prompt);
        intervals.shuffle(&mut self.rng);

        let choices = intervals
            .into_iter()
            .enumerate()
            .map(|(id, interval)| Choice::new(id as u32, interval.label(), interval == prompt))
            .collect();

        Round::new(number, prompt, self.root, choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Pitch;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const POOL: [Interval; 5] = [
        Interval::MinorSecond,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::PerfectFifth,
        Interval::Octave,
    ];

    fn generator(seed: u64) -> RoundGenerator<StdRng> {
        RoundGenerator::new(
            &POOL,
            Note::natural(Pitch::A, 3),
            3,
            StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    #[test]
    fn empty_pool_is_rejected() {
        let result = RoundGenerator::new(
            &[],
            Note::natural(Pitch::A, 3),
            3,
            StdRng::seed_from_u64(0),
        );
        assert_eq!(result.err(), Some(QuizError::EmptyIntervalPool));
    }

    #[test]
    fn fewer_than_two_choices_is_rejected() {
        let result = RoundGenerator::new(
            &POOL,
            Note::natural(Pitch::A, 3),
            1,
            StdRng::seed_from_u64(0),
        );
        assert_eq!(result.err(), Some(QuizError::TooFewChoices(1)));
    }

    #[test]
    fn pool_smaller_than_choice_count_is_rejected() {
        let result = RoundGenerator::new(
            &[Interval::MinorSecond, Interval::Octave],
            Note::natural(Pitch::A, 3),
            3,
            StdRng::seed_from_u64(0),
        );
        assert_eq!(
            result.err(),
            Some(QuizError::NotEnoughIntervals { have: 2, need: 3 })
        );
    }

    #[test]
    fn duplicates_in_the_pool_are_ignored() {
        let pool = [
            Interval::MinorSecond,
            Interval::MinorSecond,
            Interval::Octave,
        ];
        let result = RoundGenerator::new(
            &pool,
            Note::natural(Pitch::A, 3),
            3,
            StdRng::seed_from_u64(0),
        );
        assert_eq!(
            result.err(),
            Some(QuizError::NotEnoughIntervals { have: 2, need: 3 })
        );
    }

    #[test]
    fn every_round_has_exactly_one_correct_choice() {
        let mut generator = generator(42);
        for number in 1..=50 {
            let round = generator.generate(number);
            let correct = round
                .choices()
                .iter()
                .filter(|choice| choice.is_correct)
                .count();
            assert_eq!(correct, 1, "round {number}");
        }
    }

    #[test]
    fn choices_have_sequential_ids_and_distinct_labels() {
        let mut generator = generator(7);
        let round = generator.generate(1);

        assert_eq!(round.choices().len(), 3);
        for (index, choice) in round.choices().iter().enumerate() {
            assert_eq!(choice.id, index as u32);
        }
        for a in round.choices() {
            for b in round.choices() {
                if a.id != b.id {
                    assert_ne!(a.label, b.label);
                }
            }
        }
    }

    #[test]
    fn correct_choice_label_matches_the_prompt() {
        let mut generator = generator(11);
        for number in 1..=20 {
            let round = generator.generate(number);
            let id = round.correct_choice_id().unwrap();
            let correct = &round.choices()[id as usize];
            assert_eq!(correct.label, round.prompt().label());
        }
    }

    #[test]
    fn prompt_always_comes_from_the_pool() {
        let mut generator = generator(3);
        for number in 1..=50 {
            let round = generator.generate(number);
            assert!(POOL.contains(&round.prompt()));
        }
    }

    #[test]
    fn prompts_vary_across_rounds() {
        let mut generator = generator(1);
        let mut seen = Vec::new();
        for number in 1..=50 {
            let prompt = generator.generate(number).prompt();
            if !seen.contains(&prompt) {
                seen.push(prompt);
            }
        }
        assert!(seen.len() > 1, "50 rounds drew only one interval");
    }
}
