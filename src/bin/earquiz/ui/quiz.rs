//! Quiz widget - the current round's choices with selection feedback

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use earquiz::quiz::{Round, Selection};

/// Render the choice list for the current round
pub fn render_quiz(frame: &mut Frame, area: Rect, round: &Round) {
    let block = Block::default()
        .title(format!(" Round {} - which interval did you hear? ", round.number()))
        .borders(Borders::ALL);

    let mut lines = vec![Line::default()];
    for choice in round.choices() {
        let (marker, style) = match round.selection(choice.id) {
            Some(Selection::Correct) => ("✓", Style::default().fg(Color::Green)),
            Some(Selection::Incorrect) => ("✗", Style::default().fg(Color::Red)),
            None => (" ", Style::default().fg(Color::White)),
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", marker), style),
            Span::styled(
                format!("[{}] ", choice.id + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(choice.label.clone(), style),
        ]));
    }

    if round.is_over() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  Round over - press [N] for the next one",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
