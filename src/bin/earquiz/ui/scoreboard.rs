//! Scoreboard widget - correct/incorrect counts and accuracy percentage

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use earquiz::quiz::Scoreboard;

/// Render the scoreboard bar
pub fn render_scoreboard(frame: &mut Frame, area: Rect, scoreboard: &Scoreboard) {
    let block = Block::default().title(" earquiz ").borders(Borders::ALL);

    let line = Line::from(vec![
        Span::styled(
            format!(" Correct: {}  ", scoreboard.correct),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("Incorrect: {}  ", scoreboard.incorrect),
            Style::default().fg(Color::Red),
        ),
        Span::styled(
            format!("Accuracy: {}%", scoreboard.accuracy()),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
