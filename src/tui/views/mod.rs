use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders};

mod calendar;
mod dashboard;
mod header;
mod help;
mod languages;

pub use calendar::draw_calendar;
pub use dashboard::draw_dashboard;
pub use header::draw_header;
pub use help::draw_help_overlay;
pub use languages::draw_languages;

/// Rounded panel block in the theme's border color.
pub(crate) fn panel(title: &str, border: Color) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

/// Truncate a string to `max` chars with an ellipsis when necessary.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}
