//! Musical building blocks shared by the synthesizer and the quiz.
//!
//! These types stay free of audio and UI concerns so the quiz logic can be
//! tested without touching a sound device.

/// Interval taxonomy and arithmetic.
pub mod interval;
/// Pitch classes, accidentals, and the note model.
pub mod note;

pub use interval::Interval;
pub use note::{Accidental, Note, Pitch};
