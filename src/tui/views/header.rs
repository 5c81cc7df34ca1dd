use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::dashboard::DashboardView;
use crate::theme::Theme;

const BANNER: [&str; 7] = [
    r"   __...--~~~~~-._   _.-~~~~~--...__",
    r" //               `V'               \\",
    r"//                 |                 \\",
    r"//__...--~~~~~~-._  |  _.-~~~~~~--...__\\",
    r"//__.....----~~~~._\ | /_.~~~~----.....__\\",
    r"===================\\|/===================",
    r"               aurafarm",
];

pub fn draw_header(f: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(48), Constraint::Min(0)])
        .split(area);

    let banner: Vec<Line> = BANNER
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(theme.title))))
        .collect();
    f.render_widget(
        Paragraph::new(banner).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        ),
        chunks[0],
    );

    let profile = &view.data.profile;
    let value = Style::default().fg(theme.text);
    let info = vec![
        Line::from(Span::styled(
            profile.display_name().to_string(),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("@{}", profile.login)),
        Line::from(""),
        Line::from(vec![
            Span::raw("Repositories:  "),
            Span::styled(profile.repositories.to_string(), value),
        ]),
        Line::from(vec![
            Span::raw("Followers:     "),
            Span::styled(profile.followers.to_string(), value),
        ]),
        Line::from(vec![
            Span::raw("Contributions: "),
            Span::styled(view.data.snapshot.total.to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Streak: "),
            Span::styled(format!("{} days", view.streak.current), value),
            Span::raw(" (Max: "),
            Span::styled(view.streak.longest.to_string(), value),
            Span::raw(")"),
        ]),
    ];
    f.render_widget(
        Paragraph::new(info).block(Block::default().borders(Borders::NONE)),
        chunks[1].inner(&ratatui::layout::Margin {
            horizontal: 2,
            vertical: 1,
        }),
    );
}
