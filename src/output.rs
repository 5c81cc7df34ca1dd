use crate::calendar::{layout_calendar, CalendarLayout};
use crate::dashboard::DashboardView;
use crate::languages::OTHERS_LABEL;
use crate::level::level_of;
use anyhow::Result;
use console::{style, Term};

const DEFAULT_WIDTH: usize = 80;
const LEVEL_GLYPHS: [&str; 5] = ["·", "░", "▒", "▓", "█"];
const BAR_WIDTH: usize = 30;

pub fn output_json(view: &DashboardView) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&view.stats_output())?);
    Ok(())
}

pub fn output_ndjson(view: &DashboardView) -> Result<()> {
    for lang in &view.ranked {
        println!("{}", serde_json::to_string(lang)?);
    }
    Ok(())
}

pub fn output_summary(view: &DashboardView) -> Result<()> {
    let width = Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(DEFAULT_WIDTH);
    for line in summary_lines(view, width) {
        println!("{line}");
    }
    Ok(())
}

/// Plain-text dashboard for a terminal `width` columns wide.
pub fn summary_lines(view: &DashboardView, width: usize) -> Vec<String> {
    let profile = &view.data.profile;
    let mut lines = vec![
        format!("{} @{}", style(profile.display_name()).bold().blue(), profile.login),
        format!(
            "Repositories: {}  Followers: {}  Contributions: {}",
            style(profile.repositories).cyan(),
            style(profile.followers).cyan(),
            style(view.data.snapshot.total).cyan()
        ),
        format!(
            "Streak: {} days (Max: {})",
            style(view.streak.current).green(),
            style(view.streak.longest).green()
        ),
        String::new(),
    ];

    let layout = layout_calendar(&view.data.snapshot.weeks, width);
    lines.extend(calendar_lines(&layout));
    lines.push(format!("Showing last {} weeks", layout.visible_weeks.len()));
    lines.push(String::new());

    if view.ranked.is_empty() {
        lines.push("No language data".to_string());
        return lines;
    }

    lines.push(format!("{}", style("Languages").bold()));
    let name_width = view.ranked.iter().map(|l| l.name.len()).max().unwrap_or(0);
    for lang in &view.ranked {
        let filled = ((lang.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(filled.min(BAR_WIDTH)) + &"░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH));
        let name = format!("{:<name_width$}", lang.name);
        let name = if lang.name == OTHERS_LABEL {
            style(name).dim()
        } else {
            style(name).white()
        };
        lines.push(format!("  {name} {} {:>5.1}%", style(bar).green(), lang.percent));
    }

    lines
}

/// Month label row followed by one row per weekday.
fn calendar_lines(layout: &CalendarLayout) -> Vec<String> {
    let mut lines = vec![layout.label_row()];
    for row in 0..7 {
        let cells: String = layout
            .visible_weeks
            .iter()
            .map(|week| match week.day(row) {
                Some(day) => format!("{} ", LEVEL_GLYPHS[level_of(day.count).index()]),
                None => "  ".to_string(),
            })
            .collect();
        lines.push(format!("{}", style(cells.trim_end()).green()));
    }
    lines
}
