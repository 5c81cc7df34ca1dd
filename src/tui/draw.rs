use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::calendar::CalendarLayout;
use crate::level::level_of;
use crate::pie::PieGrid;
use crate::theme::{to_color, Palette};

const DAY_GLYPH: &str = "■ ";
const PIE_GLYPH: &str = "█";

/// Month label row followed by one line per weekday, colored by intensity.
pub fn calendar_lines(layout: &CalendarLayout, palette: &Palette, label_color: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(8);
    lines.push(Line::from(Span::styled(
        layout.label_row(),
        Style::default().fg(label_color),
    )));

    for row in 0..7 {
        let spans: Vec<Span> = layout
            .visible_weeks
            .iter()
            .map(|week| match week.day(row) {
                Some(day) => Span::styled(
                    DAY_GLYPH,
                    Style::default().fg(to_color(palette.color(level_of(day.count)))),
                ),
                None => Span::raw("  "),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

/// One line per grid row; cells outside the circle stay blank.
pub fn pie_lines(grid: &PieGrid) -> Vec<Line<'static>> {
    (0..grid.rows())
        .map(|row| {
            let spans: Vec<Span> = grid
                .row(row)
                .iter()
                .map(|cell| match cell.color {
                    Some(color) if cell.occupied => {
                        Span::styled(PIE_GLYPH, Style::default().fg(to_color(color)))
                    }
                    _ => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::layout_calendar;
    use crate::model::{ActivityDay, ActivityWeek, RankedLanguage, Rgb};
    use crate::pie::rasterize_pie;
    use crate::theme::THEMES;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn calendar_has_label_row_and_seven_day_rows() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let weeks: Vec<ActivityWeek> = (0..12)
            .map(|w| {
                ActivityWeek::new(
                    (0..7)
                        .map(|d| ActivityDay::new(start + Duration::days(w * 7 + d), d as u32 * 2))
                        .collect(),
                )
            })
            .collect();
        let layout = layout_calendar(&weeks, 26);
        let palette = &THEMES[0].levels;
        let lines = calendar_lines(&layout, palette, Color::Gray);

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1].spans.len(), 10);
        // Row 5 holds counts of 10, the top level.
        assert_eq!(lines[6].spans[0].style.fg, Some(to_color(palette.colors()[4])));
        assert_eq!(lines[1].spans[0].style.fg, Some(to_color(palette.colors()[0])));
    }

    #[test]
    fn pie_lines_match_grid_size() {
        let ranked = vec![RankedLanguage {
            name: "Rust".into(),
            color: Rgb::new(0xde, 0xa5, 0x84),
            size: 1,
            percent: 100.0,
        }];
        let grid = rasterize_pie(&ranked, 3);
        let lines = pie_lines(&grid);
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.width() == 12));
        assert_eq!(lines[0].spans[0].content, " ");
        assert_eq!(lines[3].spans[6].content, PIE_GLYPH);
    }
}
