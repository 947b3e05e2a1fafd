use std::f32::consts::TAU;

/// Phase-accumulator sine oscillator.
///
/// The phase advances by `TAU * frequency / sample_rate` per sample and is
/// wrapped back into `[0, TAU)` to keep precision over long runs. Output is
/// a full-scale sine in `[-1.0, 1.0]`; gain staging happens in the voice.
pub struct SineOscillator {
    sample_rate: f32,
    phase: f32,
    phase_increment: f32,
}

impl SineOscillator {
    pub fn new(sample_rate: f32) -> Self {
        let mut osc = Self {
            sample_rate,
            phase: 0.0,
            phase_increment: 0.0,
        };
        osc.set_frequency(440.0);
        osc
    }

    /// Set the oscillator frequency in Hz.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.phase_increment = TAU * frequency / self.sample_rate;
    }

    /// Restart the waveform at phase zero. Called on note-on so every tone
    /// starts from the same point in the cycle.
    pub fn reset_phase(&mut self) {
        self.phase = 0.0;
    }

    /// Fill `out` with the next `out.len()` samples, overwriting its contents.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.phase.sin();
            self.phase += self.phase_increment;
            if self.phase >= TAU {
                self.phase -= TAU;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_sine() {
        let sample_rate = 48_000.0;
        let block_size = 128;

        let mut osc = SineOscillator::new(sample_rate);
        osc.set_frequency(440.0);

        let mut buffer = vec![0.0f32; block_size];
        osc.render(&mut buffer);

        // sample n should be sin(2pi f n / sr)
        let sample_index = 12;
        let expected = (TAU * 440.0 * sample_index as f32 / sample_rate).sin();
        let actual = buffer[sample_index];
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn reset_phase_restarts_the_waveform() {
        let mut osc = SineOscillator::new(48_000.0);
        let mut first = vec![0.0f32; 64];
        let mut second = vec![0.0f32; 64];

        osc.render(&mut first);
        osc.reset_phase();
        osc.render(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn output_stays_in_range() {
        let mut osc = SineOscillator::new(48_000.0);
        osc.set_frequency(1234.5);
        let mut buffer = vec![0.0f32; 4096];
        osc.render(&mut buffer);
        assert!(buffer.iter().all(|s| s.abs() <= 1.0));
    }
}
