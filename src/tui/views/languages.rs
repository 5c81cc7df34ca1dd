use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::RankedLanguage;
use crate::pie::rasterize_pie;
use crate::theme::{to_color, Theme};
use crate::tui::draw::pie_lines;
use crate::tui::layout::pie_radius;

use super::{panel, truncate};

const NAME_WIDTH: usize = 18;

/// Ranked list on the left, pie chart sized to the remaining space.
pub fn draw_languages(f: &mut Frame, area: Rect, ranked: &[RankedLanguage], theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    let list_block = panel("Languages", theme.border);
    if ranked.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No language data",
                Style::default().fg(Color::Gray),
            )))
            .block(list_block),
            area,
        );
        return;
    }

    let lines: Vec<Line> = ranked
        .iter()
        .map(|lang| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(to_color(lang.color))),
                Span::styled(
                    format!("{:<NAME_WIDTH$}", truncate(&lang.name, NAME_WIDTH)),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:>6.1}%", lang.percent)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(list_block), chunks[0]);

    let pie_block = panel("Breakdown", theme.border);
    let radius = pie_radius(chunks[1]);
    let grid = rasterize_pie(ranked, radius);
    f.render_widget(
        Paragraph::new(pie_lines(&grid))
            .alignment(ratatui::layout::Alignment::Center)
            .block(pie_block),
        chunks[1],
    );
}
