use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Largest pie drawn regardless of available space.
pub const MAX_PIE_RADIUS: u16 = 15;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Biggest radius whose `2r x 4r` grid fits inside a bordered `area`.
pub fn pie_radius(area: Rect) -> u16 {
    let inner_height = area.height.saturating_sub(2);
    let inner_width = area.width.saturating_sub(2);
    (inner_height / 2).min(inner_width / 4).min(MAX_PIE_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_fits_the_tighter_dimension() {
        assert_eq!(pie_radius(Rect::new(0, 0, 42, 30)), 10);
        assert_eq!(pie_radius(Rect::new(0, 0, 200, 14)), 6);
        assert_eq!(pie_radius(Rect::new(0, 0, 500, 500)), MAX_PIE_RADIUS);
        assert_eq!(pie_radius(Rect::new(0, 0, 3, 3)), 0);
    }
}
