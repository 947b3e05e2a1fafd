//! Tone generation for interval playback.
//!
//! These components are allocation-free inside the render path and safe to
//! drive from an audio callback. The scheduler is the public entry point:
//! it accepts timed play requests and renders them through a single
//! monophonic voice, which is all the quiz ever needs.

/// Linear attack/release gain envelope.
pub mod envelope;
/// Sine oscillator.
pub mod oscillator;
/// Sample-clocked note scheduling with timestamp chaining.
pub mod scheduler;
/// Monophonic tone voice (oscillator + envelope).
pub mod voice;

pub use envelope::{EnvelopeStage, GainEnvelope};
pub use oscillator::SineOscillator;
pub use scheduler::{NoteScheduler, PlayRequest};
pub use voice::ToneVoice;
