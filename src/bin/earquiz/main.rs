//! earquiz - terminal interval ear trainer
//!
//! Run with: cargo run

mod app;
mod audio;
mod ui;

use app::Trainer;
use earquiz::music::{Interval, Note, Pitch};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    Trainer::new()
        .root(Note::natural(Pitch::A, 3))
        .intervals(&[
            Interval::MinorSecond,
            Interval::MajorThird,
            Interval::PerfectFourth,
            Interval::PerfectFifth,
            Interval::MajorSixth,
            Interval::Octave,
        ])
        .choices(3)
        .note_length(0.5)
        .run()
}
