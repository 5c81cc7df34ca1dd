use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::calendar::layout_calendar;
use crate::model::ActivityWeek;
use crate::theme::Theme;
use crate::tui::draw::calendar_lines;

use super::panel;

/// Contribution grid sized to the current width; recomputed on every frame.
pub fn draw_calendar(f: &mut Frame, area: Rect, weeks: &[ActivityWeek], theme: &Theme) {
    let layout = layout_calendar(weeks, area.width as usize);

    let block = panel("Contribution Graph", theme.border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(inner);

    let grid = calendar_lines(&layout, &theme.levels, theme.text);
    f.render_widget(Paragraph::new(grid), chunks[0]);

    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Showing last {} weeks", layout.visible_weeks.len()),
            Style::default().fg(Color::Gray),
        ))),
        footer_chunks[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Theme: {} (Press 't')", theme.name),
            Style::default().fg(theme.text),
        )))
        .alignment(ratatui::layout::Alignment::Right),
        footer_chunks[1],
    );
}
