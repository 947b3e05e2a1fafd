//! Audio-thread engine: command dispatch and tone rendering.
//!
//! Runs entirely inside the cpal callback. Commands arrive over a ring
//! buffer from the UI thread; the engine schedules the three-tone prompt
//! sequence and renders it block by block.

use rtrb::{Consumer, Producer};

use earquiz::synth::{NoteScheduler, PlayRequest};

use super::ui::state::{AudioCommand, PlaybackUpdate};

pub struct AudioEngine {
    scheduler: NoteScheduler,
    commands: Consumer<AudioCommand>,
    updates: Producer<PlaybackUpdate>,
}

impl AudioEngine {
    pub fn new(
        sample_rate: f32,
        commands: Consumer<AudioCommand>,
        updates: Producer<PlaybackUpdate>,
    ) -> Self {
        Self {
            scheduler: NoteScheduler::new(sample_rate),
            commands,
            updates,
        }
    }

    /// Render one block: drain pending commands, fill `out`, and report
    /// playback state back to the UI.
    pub fn render(&mut self, out: &mut [f32]) {
        while let Ok(command) = self.commands.pop() {
            self.dispatch(command);
        }

        self.scheduler.render_block(out);

        // Dropped updates are fine; the UI only wants the latest.
        let _ = self.updates.push(PlaybackUpdate {
            is_playing: self.scheduler.is_playing(),
        });
    }

    fn dispatch(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::PlayInterval {
                root,
                target,
                length,
            } => {
                // Root sounds twice before the target; the middle request
                // carries no note and falls back to the default.
                self.scheduler.set_default_note(root);
                let t = self.scheduler.now();
                let t = self
                    .scheduler
                    .schedule(PlayRequest::note(root).length(length).at(t));
                let t = self
                    .scheduler
                    .schedule(PlayRequest::default_note().length(length).at(t));
                self.scheduler
                    .schedule(PlayRequest::note(target).length(length).at(t));
            }
        }
    }
}
