use crate::model::{ActivitySnapshot, DashboardData, LanguageUsage, Profile, Rgb};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

const MOCK_LANGUAGES: [(&str, u64, Rgb); 8] = [
    ("Rust", 412_000, Rgb::new(0xde, 0xa5, 0x84)),
    ("TypeScript", 268_000, Rgb::new(0x31, 0x78, 0xc6)),
    ("Python", 131_500, Rgb::new(0x35, 0x72, 0xa5)),
    ("Go", 88_200, Rgb::new(0x00, 0xad, 0xd8)),
    ("Shell", 21_700, Rgb::new(0x89, 0xe0, 0x51)),
    ("Lua", 9_400, Rgb::new(0x00, 0x00, 0x80)),
    ("Dockerfile", 3_100, Rgb::new(0x38, 0x4d, 0x54)),
    ("Makefile", 1_200, Rgb::new(0x42, 0x78, 0x19)),
];

/// Synthetic dashboard ending at `today`. Same date in, same data out.
pub fn generate(today: NaiveDate) -> DashboardData {
    let mut counts = BTreeMap::new();
    for offset in 0..371i64 {
        let date = today - Duration::days(offset);
        let seed = (date.num_days_from_ce() as u64).wrapping_mul(2_654_435_761) >> 7;
        let mut count = (seed % 13) as u32;
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            count /= 3;
        }
        if seed % 5 == 0 {
            count = 0;
        }
        counts.insert(date, count);
    }

    // Always end on a short streak.
    for offset in 0..3 {
        counts.insert(today - Duration::days(offset), 5);
    }

    let snapshot = ActivitySnapshot::from_daily_counts(&counts, today);

    // Split each language over two repositories.
    let languages = MOCK_LANGUAGES
        .iter()
        .flat_map(|&(name, size, color)| {
            [
                LanguageUsage::new(name, size * 2 / 3, color),
                LanguageUsage::new(name, size - size * 2 / 3, color),
            ]
        })
        .collect();

    DashboardData {
        profile: Profile {
            name: Some("Mock User".to_string()),
            login: "mockuser".to_string(),
            followers: 123,
            repositories: 42,
        },
        snapshot,
        languages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streak::compute_streak;

    #[test]
    fn mock_is_deterministic_and_ends_on_a_streak() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        let data = generate(today);
        assert_eq!(data, generate(today));
        assert_eq!(data.snapshot.last_date(), Some(today));
        assert!(compute_streak(&data.snapshot.weeks, today).current >= 3);
        assert_eq!(data.languages.len(), MOCK_LANGUAGES.len() * 2);
    }
}
