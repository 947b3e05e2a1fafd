use crate::music::{Note, Pitch};
use crate::synth::voice::ToneVoice;

/*
Note Scheduler
==============

The playback contract for interval prompts: a caller submits a play request
carrying an optional note, a length in seconds, and an optional start time,
and gets back the timestamp where the tone ends. Feeding that timestamp into
the next request's start time chains tones back to back:

    let t = scheduler.schedule(PlayRequest::note(root).length(0.5));
    let t = scheduler.schedule(PlayRequest::default_note().length(0.5).at(t));
    scheduler.schedule(PlayRequest::note(target).length(0.5).at(t));

Time is measured on the scheduler's own sample clock, which only advances
inside `render_block`. That keeps scheduling deterministic and testable
without a real audio device.

A request without a note plays the scheduler's default note. A request
without a start time starts at the current clock position.

Triggering is block-granular: a tone whose start falls inside the block
being rendered is triggered at the top of that block. At typical block
sizes this is a few milliseconds of jitter, well below what interval
recognition can hear.
*/

/// Initial capacity of the pending-tone queue. Scheduling beyond this
/// allocates, so submit commands from outside the audio callback.
const QUEUE_CAPACITY: usize = 16;

/// A timed request to play one tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayRequest {
    /// Note to play; `None` plays the scheduler's default note.
    pub note: Option<Note>,
    /// Tone length in seconds.
    pub length: f32,
    /// Start time in seconds on the scheduler clock; `None` starts now.
    pub start: Option<f64>,
}

impl PlayRequest {
    /// Request a specific note.
    pub fn note(note: Note) -> Self {
        Self {
            note: Some(note),
            ..Self::default()
        }
    }

    /// Request the scheduler's default note.
    pub fn default_note() -> Self {
        Self::default()
    }

    /// Set the tone length in seconds.
    pub fn length(mut self, length: f32) -> Self {
        self.length = length;
        self
    }

    /// Anchor the tone at an absolute time on the scheduler clock.
    pub fn at(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }
}

impl Default for PlayRequest {
    fn default() -> Self {
        Self {
            note: None,
            length: 0.5,
            start: None,
        }
    }
}

/// A tone waiting for its start time, in samples.
#[derive(Debug, Clone, Copy)]
struct ScheduledTone {
    start: u64,
    end: u64,
    note: Note,
}

/// Sample-clocked scheduler driving a single tone voice.
pub struct NoteScheduler {
    sample_rate: f32,
    /// Samples rendered so far; the scheduler's notion of "now".
    clock: u64,
    default_note: Note,
    pending: Vec<ScheduledTone>,
    /// End time of the tone currently sounding, if any.
    active_end: Option<u64>,
    voice: ToneVoice,
}

impl NoteScheduler {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            clock: 0,
            default_note: Note::natural(Pitch::A, 4),
            pending: Vec::with_capacity(QUEUE_CAPACITY),
            active_end: None,
            voice: ToneVoice::new(sample_rate),
        }
    }

    /// Set the note used by requests that carry no note of their own.
    pub fn set_default_note(&mut self, note: Note) {
        self.default_note = note;
    }

    /// Current position of the sample clock, in seconds.
    pub fn now(&self) -> f64 {
        self.clock as f64 / self.sample_rate as f64
    }

    /// Queue a tone and return the timestamp where it ends, usable as the
    /// start anchor for the next request.
    pub fn schedule(&mut self, request: PlayRequest) -> f64 {
        let start_secs = request.start.unwrap_or_else(|| self.now());
        let length = request.length.max(0.0);

        let start = (start_secs * self.sample_rate as f64).round() as u64;
        let end = start + (length as f64 * self.sample_rate as f64).round() as u64;
        self.pending.push(ScheduledTone {
            start,
            end,
            note: request.note.unwrap_or(self.default_note),
        });
        self.pending.sort_by_key(|tone| tone.start);

        start_secs + length as f64
    }

    /// True while a tone is sounding or queued.
    pub fn is_playing(&self) -> bool {
        !self.pending.is_empty() || self.active_end.is_some() || self.voice.is_active()
    }

    /// Render the next `out.len()` samples, triggering any tones that start
    /// or end within this block, and advance the clock.
    pub fn render_block(&mut self, out: &mut [f32]) {
        let block_end = self.clock + out.len() as u64;

        if let Some(end) = self.active_end {
            if end <= block_end {
                self.voice.note_off();
                self.active_end = None;
            }
        }

        while let Some(tone) = self.pending.first().copied() {
            if tone.start >= block_end {
                break;
            }
            self.pending.remove(0);
            self.voice.note_on(tone.note);
            self.active_end = Some(tone.end);
        }

        self.voice.render(out);
        self.clock = block_end;
    }
}
