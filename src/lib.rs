pub mod music; // Notes, accidentals, and interval taxonomy
pub mod quiz; // Rounds, scoring, and session state
pub mod synth; // Tone generation and note scheduling

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
