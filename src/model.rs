use crate::error::AuraError;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const SCHEMA_VERSION: u32 = 1;

/// Weeks shown by a full calendar year, including the partial trailing week.
pub const CALENDAR_WEEKS: usize = 53;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color used for the folded "Others" bucket and languages without a color.
pub const NEUTRAL_GRAY: Rgb = Rgb::new(0x8b, 0x94, 0x9e);

impl FromStr for Rgb {
    type Err = AuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AuraError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| AuraError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = AuraError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub count: u32,
}

impl ActivityDay {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// Up to seven consecutive days, Sunday first. Only the weeks at the edges of
/// a collection window may be short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityWeek {
    pub days: Vec<ActivityDay>,
}

impl ActivityWeek {
    pub fn new(days: Vec<ActivityDay>) -> Self {
        Self { days }
    }

    pub fn first_day(&self) -> Option<&ActivityDay> {
        self.days.first()
    }

    /// Day at weekday row `row` (0 = first day of the week), if present.
    pub fn day(&self, row: usize) -> Option<&ActivityDay> {
        self.days.get(row)
    }
}

/// One year of daily activity, weeks ordered oldest to newest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    pub weeks: Vec<ActivityWeek>,
    pub total: u64,
}

impl ActivitySnapshot {
    pub fn new(weeks: Vec<ActivityWeek>, total: u64) -> Self {
        Self { weeks, total }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Builds a Sunday-aligned calendar covering the 53 weeks that end at
    /// `end`. The trailing week stops at `end`; days absent from `counts`
    /// are zero and counts outside the window are ignored.
    pub fn from_daily_counts(counts: &BTreeMap<NaiveDate, u32>, end: NaiveDate) -> Self {
        let last_sunday = end - Duration::days(end.weekday().num_days_from_sunday() as i64);
        let start = last_sunday - Duration::weeks(CALENDAR_WEEKS as i64 - 1);

        let mut weeks = Vec::with_capacity(CALENDAR_WEEKS);
        let mut current = Vec::with_capacity(7);
        let mut total = 0u64;

        for date in start.iter_days().take_while(|d| *d <= end) {
            let count = counts.get(&date).copied().unwrap_or(0);
            total += count as u64;
            current.push(ActivityDay::new(date, count));
            if current.len() == 7 {
                weeks.push(ActivityWeek::new(std::mem::take(&mut current)));
            }
        }
        if !current.is_empty() {
            weeks.push(ActivityWeek::new(current));
        }

        Self::new(weeks, total)
    }

    pub fn days(&self) -> impl DoubleEndedIterator<Item = &ActivityDay> + '_ {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days().next().map(|d| d.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days().next_back().map(|d| d.date)
    }
}

/// Bytes of one language inside one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageUsage {
    pub language: String,
    pub size: u64,
    pub color: Rgb,
}

impl LanguageUsage {
    pub fn new(language: impl Into<String>, size: u64, color: Rgb) -> Self {
        Self {
            language: language.into(),
            size,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLanguage {
    pub name: String,
    pub color: Rgb,
    pub size: u64,
    /// Share of the total size across every language, in `[0, 100]`.
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub login: String,
    pub followers: u64,
    pub repositories: u64,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }
}

/// Everything a source produces for one run; cached as a single payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub profile: Profile,
    pub snapshot: ActivitySnapshot,
    pub languages: Vec<LanguageUsage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub profile: Profile,
    pub total: u64,
    pub streak: Streak,
    pub languages: Vec<RankedLanguage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rgb_parses_and_prints_hex() {
        let c: Rgb = "#40c463".parse().unwrap();
        assert_eq!(c, Rgb::new(0x40, 0xc4, 0x63));
        assert_eq!(c.to_string(), "#40c463");
        assert_eq!("DEA584".parse::<Rgb>().unwrap(), Rgb::new(0xde, 0xa5, 0x84));
    }

    #[test]
    fn rgb_rejects_garbage() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
        assert!("blue".parse::<Rgb>().is_err());
    }

    #[test]
    fn rgb_serializes_as_string() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(1, 2, 3));
    }

    #[test]
    fn daily_counts_build_sunday_aligned_year() {
        // 2024-06-12 is a Wednesday.
        let end = date(2024, 6, 12);
        let mut counts = BTreeMap::new();
        counts.insert(end, 4);
        counts.insert(date(2024, 6, 9), 2);
        counts.insert(date(2020, 1, 1), 99);

        let snapshot = ActivitySnapshot::from_daily_counts(&counts, end);

        assert_eq!(snapshot.weeks.len(), CALENDAR_WEEKS);
        assert_eq!(snapshot.total, 6);
        assert!(snapshot.weeks[..52].iter().all(|w| w.days.len() == 7));
        let last = snapshot.weeks.last().unwrap();
        assert_eq!(last.days.len(), 4);
        assert_eq!(last.first_day().unwrap().date, date(2024, 6, 9));
        assert_eq!(last.first_day().unwrap().date.weekday(), chrono::Weekday::Sun);
        assert_eq!(snapshot.last_date(), Some(end));
        assert_eq!(snapshot.first_date().unwrap().weekday(), chrono::Weekday::Sun);
    }

    #[test]
    fn display_name_falls_back_to_login() {
        let mut profile = Profile {
            name: None,
            login: "octo".into(),
            followers: 0,
            repositories: 0,
        };
        assert_eq!(profile.display_name(), "octo");
        profile.name = Some("Octo Cat".into());
        assert_eq!(profile.display_name(), "Octo Cat");
    }
}
