use crate::model::ActivityWeek;
use chrono::Datelike;
use serde::Serialize;

/// Columns taken by one week: a glyph and a space.
pub const WEEK_COLUMNS: usize = 2;
/// Border and padding around the grid.
pub const FIXED_MARGIN: usize = 6;
/// Narrow terminals still get this many weeks.
pub const MINIMUM_WEEKS: usize = 10;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub week_index: usize,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLayout<'a> {
    pub visible_weeks: &'a [ActivityWeek],
    pub month_labels: Vec<MonthLabel>,
}

impl CalendarLayout<'_> {
    /// Renders the label row: each label starts at its week's column and
    /// the row is exactly as wide as the grid.
    pub fn label_row(&self) -> String {
        let width = self.visible_weeks.len() * WEEK_COLUMNS;
        let mut row = vec![' '; width];
        for label in &self.month_labels {
            let start = label.week_index * WEEK_COLUMNS;
            for (offset, ch) in label.text.chars().enumerate() {
                if let Some(slot) = row.get_mut(start + offset) {
                    *slot = ch;
                }
            }
        }
        row.into_iter().collect()
    }
}

/// Number of weeks that fit in `available_columns`, never below the floor.
pub fn week_capacity(available_columns: usize) -> usize {
    (available_columns.saturating_sub(FIXED_MARGIN) / WEEK_COLUMNS).max(MINIMUM_WEEKS)
}

/// Picks the most recent weeks that fit and labels month transitions.
pub fn layout_calendar(weeks: &[ActivityWeek], available_columns: usize) -> CalendarLayout<'_> {
    let capacity = week_capacity(available_columns);
    let visible_weeks = &weeks[weeks.len().saturating_sub(capacity)..];

    CalendarLayout {
        visible_weeks,
        month_labels: month_labels(visible_weeks),
    }
}

/// One label per month transition, at the week where the new month starts.
/// A transition in the week right after a label still gets its own label and
/// the blank column moves past it.
fn month_labels(weeks: &[ActivityWeek]) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut previous_month: Option<u32> = None;

    for (week_index, week) in weeks.iter().enumerate() {
        let Some(first) = week.first_day() else {
            continue;
        };
        let month = first.date.month0();

        if previous_month != Some(month) {
            labels.push(MonthLabel {
                week_index,
                text: MONTH_ABBREVIATIONS[month as usize],
            });
        }
        previous_month = Some(month);
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActivityDay;
    use chrono::{Duration, NaiveDate};
    use pretty_assertions::assert_eq;

    fn sunday_weeks(start: NaiveDate, count: usize) -> Vec<ActivityWeek> {
        (0..count)
            .map(|w| {
                let first = start + Duration::weeks(w as i64);
                ActivityWeek::new(
                    (0..7)
                        .map(|d| ActivityDay::new(first + Duration::days(d), 0))
                        .collect(),
                )
            })
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn capacity_follows_width() {
        assert_eq!(week_capacity(46), 20);
        assert_eq!(week_capacity(47), 20);
        assert_eq!(week_capacity(112), 53);
    }

    #[test]
    fn capacity_has_a_floor() {
        assert_eq!(week_capacity(0), MINIMUM_WEEKS);
        assert_eq!(week_capacity(10), MINIMUM_WEEKS);
    }

    #[test]
    fn keeps_the_most_recent_weeks() {
        let weeks = sunday_weeks(date(2023, 6, 4), 53);
        let layout = layout_calendar(&weeks, 46);
        assert_eq!(layout.visible_weeks.len(), 20);
        assert_eq!(layout.visible_weeks, &weeks[33..]);
    }

    #[test]
    fn short_history_is_shown_whole() {
        let weeks = sunday_weeks(date(2023, 6, 4), 4);
        let layout = layout_calendar(&weeks, 200);
        assert_eq!(layout.visible_weeks.len(), 4);
    }

    #[test]
    fn labels_mark_month_changes() {
        // Sundays: Jan 1, 8, 15, 22, 29, Feb 5, 12, 19, 26, Mar 5
        let weeks = sunday_weeks(date(2023, 1, 1), 10);
        let layout = layout_calendar(&weeks, 200);
        assert_eq!(
            layout.month_labels,
            vec![
                MonthLabel { week_index: 0, text: "Jan" },
                MonthLabel { week_index: 5, text: "Feb" },
                MonthLabel { week_index: 9, text: "Mar" },
            ]
        );
    }

    #[test]
    fn month_starting_right_after_a_label_is_still_labeled() {
        // Sundays: May 28, then Jun 4, 11, 18, 25, Jul 2.
        let weeks = sunday_weeks(date(2023, 5, 28), 6);
        let layout = layout_calendar(&weeks, 200);
        assert_eq!(
            layout.month_labels,
            vec![
                MonthLabel { week_index: 0, text: "May" },
                MonthLabel { week_index: 1, text: "Jun" },
                MonthLabel { week_index: 5, text: "Jul" },
            ]
        );
        assert!(layout.label_row().contains("Jun"));
    }

    #[test]
    fn same_input_same_output() {
        let weeks = sunday_weeks(date(2023, 1, 1), 53);
        assert_eq!(layout_calendar(&weeks, 90), layout_calendar(&weeks, 90));
        assert_eq!(layout_calendar(&weeks, 300), layout_calendar(&weeks, 300));
    }

    #[test]
    fn label_row_matches_grid_width() {
        let weeks = sunday_weeks(date(2023, 1, 1), 10);
        let layout = layout_calendar(&weeks, 200);
        let row = layout.label_row();
        assert_eq!(row.chars().count(), 20);
        // "Mar" starts in the last week and is clipped at the grid edge.
        assert_eq!(row, "Jan       Feb     Ma");
    }

    #[test]
    fn empty_weeks_layout() {
        let layout = layout_calendar(&[], 80);
        assert!(layout.visible_weeks.is_empty());
        assert!(layout.month_labels.is_empty());
        assert_eq!(layout.label_row(), "");
    }
}
