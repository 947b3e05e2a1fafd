//! Benchmarks for the tone render path.
//!
//! Run with: cargo bench
//!
//! These measure the per-block cost of the synth used inside the audio
//! callback. Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use earquiz::music::{Interval, Note, Pitch};
use earquiz::synth::{NoteScheduler, PlayRequest, SineOscillator, ToneVoice};

/// Common buffer sizes used in audio applications.
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

const SAMPLE_RATE: f32 = 48_000.0;

fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut osc = SineOscillator::new(SAMPLE_RATE);
        osc.set_frequency(440.0);

        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}

fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/voice");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut voice = ToneVoice::new(SAMPLE_RATE);
        voice.note_on(Note::natural(Pitch::A, 3));

        group.bench_with_input(BenchmarkId::new("tone", size), &size, |b, _| {
            b.iter(|| {
                voice.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}

fn bench_scheduler(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/scheduler");
    let root = Note::natural(Pitch::A, 3);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // A scheduler mid-playback: three chained prompt tones queued
        let mut scheduler = NoteScheduler::new(SAMPLE_RATE);
        let t = scheduler.schedule(PlayRequest::note(root).length(0.5));
        let t = scheduler.schedule(PlayRequest::default_note().length(0.5).at(t));
        scheduler.schedule(
            PlayRequest::note(Interval::PerfectFifth.above(root))
                .length(0.5)
                .at(t),
        );

        group.bench_with_input(BenchmarkId::new("render_block", size), &size, |b, _| {
            b.iter(|| {
                scheduler.render_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_oscillator, bench_voice, bench_scheduler);
criterion_main!(benches);
