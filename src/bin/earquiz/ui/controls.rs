//! Controls widget - playback and round-advance actions

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the controls bar. "Next" is shown disabled until the round is
/// resolved.
pub fn render_controls(frame: &mut Frame, area: Rect, round_over: bool, is_playing: bool) {
    let block = Block::default().title(" Controls ").borders(Borders::ALL);

    let hear_style = if is_playing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let hear_label = if is_playing {
        "▶ [H] Playing...  "
    } else {
        "  [H] Hear interval  "
    };

    let next_style = if round_over {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(hear_label, hear_style),
        Span::styled("[N] Next round", next_style),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
