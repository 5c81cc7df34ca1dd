use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme::THEMES;
use crate::tui::centered_rect;

/// Draw the modal help overlay describing keys and themes.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(60, 70, area);

    f.render_widget(Clear, help_area);

    let heading = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let mut help_text = vec![
        Line::from(vec![Span::styled(
            "aurafarm - Help",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled("Keys:", heading)]),
        Line::from("  t           Next theme"),
        Line::from("  h or F1     Toggle this help"),
        Line::from("  q or Esc    Quit"),
        Line::from(""),
        Line::from(vec![Span::styled("Themes:", heading)]),
    ];
    help_text.extend(
        THEMES
            .iter()
            .enumerate()
            .map(|(i, t)| Line::from(format!("  {i}  {}", t.name))),
    );
    help_text.push(Line::from(""));
    help_text.push(Line::from(vec![Span::styled("Levels:", heading)]));
    help_text.push(Line::from("  0 | 1-3 | 4-6 | 7-9 | 10+ contributions per day"));

    f.render_widget(Paragraph::new(help_text).block(block), help_area);
}
