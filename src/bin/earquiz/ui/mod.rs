//! TUI module for earquiz
//!
//! Owns the quiz session and the event loop. The widgets themselves are
//! stateless render functions fed from the session each frame.

pub mod state;

mod controls;
mod quiz;
mod scoreboard;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;

use earquiz::quiz::Session;

use controls::render_controls;
use quiz::render_quiz;
use scoreboard::render_scoreboard;
use state::{AudioCommand, PlaybackUpdate};

/// UI application state
pub struct UiApp {
    /// Quiz session; all round and scoring state lives here
    session: Session<StdRng>,
    /// Ring buffer sender for audio commands
    command_tx: Producer<AudioCommand>,
    /// Ring buffer receiver for playback state updates
    update_rx: Consumer<PlaybackUpdate>,
    /// Latest playback state received
    playback: PlaybackUpdate,
    /// Length of each prompt tone in seconds
    note_length: f32,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    /// Create a new UI application
    pub fn new(
        session: Session<StdRng>,
        command_tx: Producer<AudioCommand>,
        update_rx: Consumer<PlaybackUpdate>,
        note_length: f32,
    ) -> Self {
        Self {
            session,
            command_tx,
            update_rx,
            playback: PlaybackUpdate::default(),
            note_length,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            // Poll for playback state updates
            self.poll_playback();

            // Draw the UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Poll for playback updates from the ring buffer, keeping the latest
    fn poll_playback(&mut self) {
        while let Ok(update) = self.update_rx.pop() {
            self.playback = update;
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char(' ') => {
                self.hear_interval();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => {
                // Next is gated on round resolution, matching the disabled
                // button in the controls panel.
                if self.session.round().is_over() {
                    self.session.next_round();
                }
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let id = digit as u32 - '1' as u32;
                if (id as usize) < self.session.round().choices().len() {
                    self.session.select(id);
                }
            }
            _ => {}
        }
    }

    /// Queue the current round's prompt for playback
    fn hear_interval(&mut self) {
        let round = self.session.round();
        let command = AudioCommand::PlayInterval {
            root: round.root(),
            target: round.target(),
            length: self.note_length,
        };
        // A full queue means playback is already saturated; drop the press.
        let _ = self.command_tx.push(command);
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: scoreboard, quiz options, controls, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Scoreboard
                Constraint::Min(6),    // Quiz options
                Constraint::Length(3), // Controls
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_scoreboard(frame, chunks[0], self.session.scoreboard());
        render_quiz(frame, chunks[1], self.session.round());
        render_controls(
            frame,
            chunks[2],
            self.session.round().is_over(),
            self.playback.is_playing,
        );

        // Help bar
        let help = ratatui::widgets::Paragraph::new(
            " [H] Hear interval  [1-9] Answer  [N] Next round  [Q] Quit",
        )
        .style(ratatui::style::Style::default().fg(ratatui::style::Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
