use crate::MIN_TIME;

/*
Attack/Release Envelope
=======================

Interval playback only needs a click-free gate: ramp the gain up when a tone
starts, hold it at full level while the tone sounds, and ramp it back down
when the tone ends. A full ADSR would be overkill, so this is the two-ramp
version:

  Level
    1.0 ┐   ╱────────────╲
        │  ╱              ╲
    0.0 └─╱────────────────╲──→ Time
         Attack    Hold    Release

Ramps are linear. The increment is recomputed each sample from
`1 / (time * sample_rate)`, which keeps the code free of cached state that
could go stale if the sample rate changes.

Release snapshots the level at gate-off and interpolates down to exactly
0.0, so releasing mid-attack cannot click.
*/

/// Stage of the envelope state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Idle,    // Gate low, output 0
    Attack,  // Gate just went high, ramping up to 1.0
    Hold,    // Holding at full level while the gate is high
    Release, // Gate went low, ramping down to 0
}

pub struct GainEnvelope {
    attack_time: f32,  // seconds to ramp 0 -> 1
    release_time: f32, // seconds to ramp current -> 0
    stage: EnvelopeStage,
    level: f32,
    // Release interpolation state, fixed at gate-off
    release_start_level: f32,
    release_total_samples: u32,
    release_elapsed_samples: u32,
}

impl GainEnvelope {
    pub fn new(attack_time: f32, release_time: f32) -> Self {
        Self {
            attack_time: attack_time.max(MIN_TIME),
            release_time: release_time.max(MIN_TIME),
            stage: EnvelopeStage::Idle,
            level: 0.0,
            release_start_level: 0.0,
            release_total_samples: 0,
            release_elapsed_samples: 0,
        }
    }

    /// Gate high: restart the attack ramp from the current level.
    pub fn gate_on(&mut self) {
        self.stage = EnvelopeStage::Attack;
    }

    /// Gate low: begin the release ramp from the current level.
    pub fn gate_off(&mut self, sample_rate: f32) {
        if matches!(self.stage, EnvelopeStage::Idle | EnvelopeStage::Release) {
            return;
        }
        self.release_start_level = self.level;
        self.release_total_samples = ((self.release_time * sample_rate) as u32).max(1);
        self.release_elapsed_samples = 0;
        self.stage = EnvelopeStage::Release;
    }

    /// Advance one sample and return the gain level for it.
    pub fn next_level(&mut self, sample_rate: f32) -> f32 {
        match self.stage {
            EnvelopeStage::Idle => 0.0,
            EnvelopeStage::Attack => {
                let increment = 1.0 / (self.attack_time * sample_rate);
                self.level += increment;
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.stage = EnvelopeStage::Hold;
                }
                self.level
            }
            EnvelopeStage::Hold => 1.0,
            EnvelopeStage::Release => {
                self.release_elapsed_samples += 1;
                if self.release_elapsed_samples >= self.release_total_samples {
                    self.level = 0.0;
                    self.stage = EnvelopeStage::Idle;
                } else {
                    let remaining =
                        self.release_total_samples - self.release_elapsed_samples;
                    self.level = self.release_start_level * remaining as f32
                        / self.release_total_samples as f32;
                }
                self.level
            }
        }
    }

    /// True while the envelope produces a non-zero level.
    pub fn is_active(&self) -> bool {
        !matches!(self.stage, EnvelopeStage::Idle)
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn idle_envelope_outputs_silence() {
        let mut env = GainEnvelope::new(0.01, 0.05);
        assert!(!env.is_active());
        assert_eq!(env.next_level(SAMPLE_RATE), 0.0);
    }

    #[test]
    fn attack_reaches_full_level() {
        let mut env = GainEnvelope::new(0.01, 0.05);
        env.gate_on();

        // 0.01s at 48kHz = 480 samples; allow one extra for rounding
        let mut level = 0.0;
        for _ in 0..481 {
            level = env.next_level(SAMPLE_RATE);
        }
        assert_eq!(level, 1.0);
        assert_eq!(env.stage(), EnvelopeStage::Hold);
    }

    #[test]
    fn attack_ramp_is_monotonic() {
        let mut env = GainEnvelope::new(0.01, 0.05);
        env.gate_on();

        let mut previous = 0.0;
        for _ in 0..480 {
            let level = env.next_level(SAMPLE_RATE);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn release_decays_to_exactly_zero() {
        let mut env = GainEnvelope::new(0.001, 0.01);
        env.gate_on();
        for _ in 0..100 {
            env.next_level(SAMPLE_RATE);
        }
        env.gate_off(SAMPLE_RATE);

        // 0.01s release = 480 samples
        for _ in 0..480 {
            env.next_level(SAMPLE_RATE);
        }
        assert_eq!(env.next_level(SAMPLE_RATE), 0.0);
        assert!(!env.is_active());
    }

    #[test]
    fn release_mid_attack_starts_from_current_level() {
        let mut env = GainEnvelope::new(0.1, 0.01);
        env.gate_on();

        // Stop a tenth of the way up the attack ramp
        let mut level = 0.0;
        for _ in 0..480 {
            level = env.next_level(SAMPLE_RATE);
        }
        assert!(level < 0.5);

        env.gate_off(SAMPLE_RATE);
        let first_release = env.next_level(SAMPLE_RATE);
        assert!(first_release <= level);
    }

    #[test]
    fn gate_off_when_idle_is_a_no_op() {
        let mut env = GainEnvelope::new(0.01, 0.05);
        env.gate_off(SAMPLE_RATE);
        assert!(!env.is_active());
    }
}
