use crate::model::{ActivityDay, ActivityWeek, Streak};
use chrono::NaiveDate;

/// Computes the current and longest runs of days with activity.
///
/// `today` is never allowed to break a run: a zero count on that date may
/// still change before the day ends.
pub fn compute_streak(weeks: &[ActivityWeek], today: NaiveDate) -> Streak {
    let days: Vec<&ActivityDay> = weeks.iter().flat_map(|w| w.days.iter()).collect();

    let mut longest = 0u32;
    let mut running = 0u32;
    for day in &days {
        if day.count > 0 {
            running += 1;
            longest = longest.max(running);
        } else if day.date != today {
            running = 0;
        }
    }

    let mut current = 0u32;
    let mut rest = days.as_slice();
    if let Some((last, earlier)) = rest.split_last() {
        if last.date == today && last.count == 0 {
            rest = earlier;
        }
    }
    for day in rest.iter().rev() {
        if day.count == 0 {
            break;
        }
        current += 1;
    }

    Streak {
        current,
        longest: longest.max(current),
    }
}
