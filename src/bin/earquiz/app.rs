//! Trainer - main application builder and runner

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rtrb::RingBuffer;

use earquiz::music::{Interval, Note, Pitch};
use earquiz::quiz::{RoundGenerator, Session};
use earquiz::MAX_BLOCK_SIZE;

use super::audio::AudioEngine;
use super::ui::UiApp;

/// Capacity of the UI -> audio command ring buffer.
const COMMAND_QUEUE_CAPACITY: usize = 64;
/// Capacity of the audio -> UI state ring buffer.
const UPDATE_QUEUE_CAPACITY: usize = 256;

/// Main application builder
pub struct Trainer {
    intervals: Vec<Interval>,
    root: Note,
    choice_count: usize,
    note_length: f32,
}

impl Trainer {
    /// Create a new Trainer with the full interval pool and 3 choices.
    pub fn new() -> Self {
        Self {
            intervals: Interval::ALL.to_vec(),
            root: Note::natural(Pitch::A, 3),
            choice_count: 3,
            note_length: 0.5,
        }
    }

    /// Set the interval pool prompts and distractors are drawn from.
    pub fn intervals(mut self, intervals: &[Interval]) -> Self {
        self.intervals = intervals.to_vec();
        self
    }

    /// Set the root note prompts are built on.
    pub fn root(mut self, root: Note) -> Self {
        self.root = root;
        self
    }

    /// Set how many choices each round offers.
    pub fn choices(mut self, count: usize) -> Self {
        self.choice_count = count;
        self
    }

    /// Set the length of each prompt tone in seconds.
    pub fn note_length(mut self, seconds: f32) -> Self {
        self.note_length = seconds;
        self
    }

    /// Run the application (takes over the terminal and audio device).
    pub fn run(self) -> EyreResult<()> {
        let generator = RoundGenerator::new(
            &self.intervals,
            self.root,
            self.choice_count,
            StdRng::from_entropy(),
        )
        .wrap_err("invalid quiz configuration")?;
        let session = Session::new(generator);

        // Set up audio
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        // Ring buffers between the UI thread and the audio callback
        let (command_tx, command_rx) = RingBuffer::new(COMMAND_QUEUE_CAPACITY);
        let (update_tx, update_rx) = RingBuffer::new(UPDATE_QUEUE_CAPACITY);

        let mut engine = AudioEngine::new(sample_rate, command_rx, update_tx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_remaining = total_frames - frames_written;
                    let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);

                    let block = &mut render_buf[..frames_to_render];
                    block.fill(0.0);
                    engine.render(block);

                    // Copy to output (mono to all channels)
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| eprintln!("Audio error: {}", err),
            None,
        )?;

        stream.play()?;

        // Hand the terminal to the UI for the rest of the session
        let mut terminal = ratatui::init();
        let mut ui = UiApp::new(session, command_tx, update_rx, self.note_length);
        let result = ui.run(&mut terminal);
        ratatui::restore();

        result
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}
