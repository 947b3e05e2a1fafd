//! Shared state types for UI/audio communication
//!
//! Both directions cross a ring buffer into the audio callback, so every
//! message is `Copy` and allocation-free.

use earquiz::music::Note;

/// Commands sent from the UI thread to the audio thread.
#[derive(Clone, Copy, Debug)]
pub enum AudioCommand {
    /// Play the current round's prompt: root, root again, then target,
    /// each tone anchored at the end of the previous one.
    PlayInterval {
        root: Note,
        target: Note,
        /// Length of each tone in seconds
        length: f32,
    },
}

/// Playback state update sent from the audio thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaybackUpdate {
    /// Whether any tone is sounding or queued
    pub is_playing: bool,
}
