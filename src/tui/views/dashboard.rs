use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::dashboard::DashboardView;
use crate::theme::Theme;

use super::{draw_calendar, draw_header, draw_languages};

/// Header on top, then the calendar, then languages filling the rest.
pub fn draw_dashboard(f: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(area);

    draw_header(f, chunks[0], view, theme);
    draw_calendar(f, chunks[1], &view.data.snapshot.weeks, theme);
    draw_languages(f, chunks[2], &view.ranked, theme);
}
