use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::note::Note;

/// A musical interval within one octave, measured in semitones above a root.
///
/// Labels follow the common short form used in ear-training material
/// ("Minor 2nd", "Perfect 5th", "Octave") - these double as the quiz
/// choice labels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Unison,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    Tritone,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
    Octave,
}

impl Interval {
    /// All intervals in ascending order, unison through octave.
    pub const ALL: [Interval; 13] = [
        Interval::Unison,
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::Tritone,
        Interval::PerfectFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
        Interval::Octave,
    ];

    /// Width of the interval in semitones.
    pub const fn semitones(self) -> u8 {
        match self {
            Interval::Unison => 0,
            Interval::MinorSecond => 1,
            Interval::MajorSecond => 2,
            Interval::MinorThird => 3,
            Interval::MajorThird => 4,
            Interval::PerfectFourth => 5,
            Interval::Tritone => 6,
            Interval::PerfectFifth => 7,
            Interval::MinorSixth => 8,
            Interval::MajorSixth => 9,
            Interval::MinorSeventh => 10,
            Interval::MajorSeventh => 11,
            Interval::Octave => 12,
        }
    }

    /// Short display label, as shown on quiz choices.
    pub const fn label(self) -> &'static str {
        match self {
            Interval::Unison => "Unison",
            Interval::MinorSecond => "Minor 2nd",
            Interval::MajorSecond => "Major 2nd",
            Interval::MinorThird => "Minor 3rd",
            Interval::MajorThird => "Major 3rd",
            Interval::PerfectFourth => "Perfect 4th",
            Interval::Tritone => "Tritone",
            Interval::PerfectFifth => "Perfect 5th",
            Interval::MinorSixth => "Minor 6th",
            Interval::MajorSixth => "Major 6th",
            Interval::MinorSeventh => "Minor 7th",
            Interval::MajorSeventh => "Major 7th",
            Interval::Octave => "Octave",
        }
    }

    /// The note this interval reaches when built upward from `root`.
    ///
    /// Saturates at the top of the MIDI range rather than wrapping.
    pub fn above(self, root: Note) -> Note {
        let midi = root.midi().saturating_add(self.semitones()).min(127);
        Note::from_midi(midi)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
