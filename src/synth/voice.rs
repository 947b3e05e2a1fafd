use crate::music::Note;
use crate::synth::envelope::GainEnvelope;
use crate::synth::oscillator::SineOscillator;

/// Output gain applied to the raw oscillator. Leaves headroom so chained
/// tones never clip even with the envelope at full level.
const TONE_GAIN: f32 = 0.25;

/// Default attack ramp in seconds (just long enough to avoid clicks).
const DEFAULT_ATTACK: f32 = 0.005;
/// Default release ramp in seconds.
const DEFAULT_RELEASE: f32 = 0.03;

/// A monophonic tone voice: one sine oscillator shaped by a gain envelope.
///
/// `note_on` retriggers the voice, so back-to-back scheduled tones simply
/// steal it. That matches interval playback, where notes never overlap.
pub struct ToneVoice {
    sample_rate: f32,
    oscillator: SineOscillator,
    envelope: GainEnvelope,
}

impl ToneVoice {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            oscillator: SineOscillator::new(sample_rate),
            envelope: GainEnvelope::new(DEFAULT_ATTACK, DEFAULT_RELEASE),
        }
    }

    /// Start playing `note`, retriggering if a tone is already sounding.
    pub fn note_on(&mut self, note: Note) {
        self.oscillator.set_frequency(note.frequency());
        self.oscillator.reset_phase();
        self.envelope.gate_on();
    }

    /// Stop the current tone, letting the release ramp run out.
    pub fn note_off(&mut self) {
        self.envelope.gate_off(self.sample_rate);
    }

    /// Render into `out`, overwriting its contents.
    pub fn render(&mut self, out: &mut [f32]) {
        self.oscillator.render(out);
        for sample in out.iter_mut() {
            *sample *= TONE_GAIN * self.envelope.next_level(self.sample_rate);
        }
    }

    /// True while the envelope has not fully released.
    pub fn is_active(&self) -> bool {
        self.envelope.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Pitch;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn silent_until_triggered() {
        let mut voice = ToneVoice::new(SAMPLE_RATE);
        let mut buffer = vec![0.0f32; 256];
        voice.render(&mut buffer);
        assert!(buffer.iter().all(|s| *s == 0.0));
        assert!(!voice.is_active());
    }

    #[test]
    fn produces_sound_after_note_on() {
        let mut voice = ToneVoice::new(SAMPLE_RATE);
        voice.note_on(Note::natural(Pitch::A, 3));

        let mut buffer = vec![0.0f32; 1024];
        voice.render(&mut buffer);
        assert!(voice.is_active());
        assert!(buffer.iter().any(|s| s.abs() > 0.01));
    }

    #[test]
    fn output_respects_headroom() {
        let mut voice = ToneVoice::new(SAMPLE_RATE);
        voice.note_on(Note::natural(Pitch::E, 4));

        let mut buffer = vec![0.0f32; 48_000];
        voice.render(&mut buffer);
        assert!(buffer.iter().all(|s| s.abs() <= TONE_GAIN + 1e-6));
    }

    #[test]
    fn note_off_fades_back_to_silence() {
        let mut voice = ToneVoice::new(SAMPLE_RATE);
        voice.note_on(Note::natural(Pitch::A, 4));

        let mut buffer = vec![0.0f32; 4800];
        voice.render(&mut buffer);
        voice.note_off();

        // Longer than the release ramp
        let mut tail = vec![0.0f32; 4800];
        voice.render(&mut tail);
        assert!(!voice.is_active());
        assert_eq!(*tail.last().unwrap(), 0.0);
    }
}
