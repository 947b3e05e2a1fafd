use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Note Model
==========

A note is a pitch class (letter name), an accidental, and an octave. The
bridge to everything else is the MIDI note number:

    midi = 12 * (octave + 1) + semitone

Where semitone: C=0, C#=1, D=2, ..., B=11. Middle C (C4) = 60, and A4 = 69
is the 440 Hz tuning reference. Frequency follows twelve-tone equal
temperament:

    frequency = 440 * 2^((midi - 69) / 12)

Spelling is lossy in both directions (C# and Db share a MIDI number).
`Note::from_midi` always picks the sharp spelling, which is fine for
playback - the quiz never shows note names to the user.
*/

/// Letter name of a pitch class (the white keys).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pitch {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Pitch {
    /// Semitone offset from C within one octave.
    pub const fn semitone(self) -> i8 {
        match self {
            Pitch::C => 0,
            Pitch::D => 2,
            Pitch::E => 4,
            Pitch::F => 5,
            Pitch::G => 7,
            Pitch::A => 9,
            Pitch::B => 11,
        }
    }

    const fn letter(self) -> char {
        match self {
            Pitch::C => 'C',
            Pitch::D => 'D',
            Pitch::E => 'E',
            Pitch::F => 'F',
            Pitch::G => 'G',
            Pitch::A => 'A',
            Pitch::B => 'B',
        }
    }
}

/// Accidental applied to a pitch class.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
}

impl Accidental {
    /// Semitone shift: flat = -1, natural = 0, sharp = +1.
    pub const fn shift(self) -> i8 {
        match self {
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
        }
    }
}

/// A concrete pitch: letter name, accidental, and octave.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub pitch: Pitch,
    pub accidental: Accidental,
    /// Scientific pitch notation octave (C4 = middle C).
    pub octave: i8,
}

impl Note {
    /// Create a note with an explicit accidental.
    pub const fn new(pitch: Pitch, accidental: Accidental, octave: i8) -> Self {
        Self {
            pitch,
            accidental,
            octave,
        }
    }

    /// Create a natural note (no accidental).
    pub const fn natural(pitch: Pitch, octave: i8) -> Self {
        Self::new(pitch, Accidental::Natural, octave)
    }

    /// Reconstruct a note from a MIDI note number, spelling accidentals
    /// as sharps.
    pub fn from_midi(midi: u8) -> Self {
        let octave = (midi / 12) as i8 - 1;
        let (pitch, accidental) = match midi % 12 {
            0 => (Pitch::C, Accidental::Natural),
            1 => (Pitch::C, Accidental::Sharp),
            2 => (Pitch::D, Accidental::Natural),
            3 => (Pitch::D, Accidental::Sharp),
            4 => (Pitch::E, Accidental::Natural),
            5 => (Pitch::F, Accidental::Natural),
            6 => (Pitch::F, Accidental::Sharp),
            7 => (Pitch::G, Accidental::Natural),
            8 => (Pitch::G, Accidental::Sharp),
            9 => (Pitch::A, Accidental::Natural),
            10 => (Pitch::A, Accidental::Sharp),
            _ => (Pitch::B, Accidental::Natural),
        };
        Self::new(pitch, accidental, octave)
    }

    /// MIDI note number, clamped to the 0-127 range.
    pub fn midi(&self) -> u8 {
        let semitone = self.pitch.semitone() + self.accidental.shift();
        let midi = 12 * (self.octave as i16 + 1) + semitone as i16;
        midi.clamp(0, 127) as u8
    }

    /// Frequency in Hz under A440 equal temperament.
    pub fn frequency(&self) -> f32 {
        440.0 * 2.0_f32.powf((self.midi() as f32 - 69.0) / 12.0)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accidental = match self.accidental {
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
        };
        write!(f, "{}{}{}", self.pitch.letter(), accidental, self.octave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_c_is_60() {
        assert_eq!(Note::natural(Pitch::C, 4).midi(), 60);
    }

    #[test]
    fn a440_is_69() {
        let a4 = Note::natural(Pitch::A, 4);
        assert_eq!(a4.midi(), 69);
        assert!((a4.frequency() - 440.0).abs() < 1e-3);
    }

    #[test]
    fn reference_tones_for_the_default_prompt() {
        // The default playback plays A3 then E4 (a perfect fifth).
        assert_eq!(Note::natural(Pitch::A, 3).midi(), 57);
        assert_eq!(Note::natural(Pitch::E, 4).midi(), 64);
    }

    #[test]
    fn accidentals_shift_by_one_semitone() {
        let cs4 = Note::new(Pitch::C, Accidental::Sharp, 4);
        let db4 = Note::new(Pitch::D, Accidental::Flat, 4);
        assert_eq!(cs4.midi(), 61);
        assert_eq!(cs4.midi(), db4.midi());
    }

    #[test]
    fn from_midi_round_trips_through_midi() {
        for midi in 12..=119 {
            assert_eq!(Note::from_midi(midi).midi(), midi);
        }
    }

    #[test]
    fn octave_doubles_frequency() {
        let a3 = Note::natural(Pitch::A, 3);
        let a4 = Note::natural(Pitch::A, 4);
        assert!((a4.frequency() / a3.frequency() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn display_spelling() {
        assert_eq!(Note::natural(Pitch::A, 3).to_string(), "A3");
        assert_eq!(Note::new(Pitch::C, Accidental::Sharp, 4).to_string(), "C#4");
        assert_eq!(Note::new(Pitch::E, Accidental::Flat, 2).to_string(), "Eb2");
    }
}
