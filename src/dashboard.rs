use crate::languages::rank_languages;
use crate::model::{DashboardData, RankedLanguage, StatsOutput, Streak, SCHEMA_VERSION};
use crate::streak::compute_streak;
use chrono::{NaiveDate, Utc};

/// Size-independent results computed once per run. Calendar layout and pie
/// rasterization depend on the screen and are redone for every frame.
pub struct DashboardView<'a> {
    pub data: &'a DashboardData,
    pub today: NaiveDate,
    pub streak: Streak,
    pub ranked: Vec<RankedLanguage>,
}

impl<'a> DashboardView<'a> {
    pub fn new(data: &'a DashboardData, today: NaiveDate, top_k: usize) -> Self {
        Self {
            data,
            today,
            streak: compute_streak(&data.snapshot.weeks, today),
            ranked: rank_languages(&data.languages, top_k),
        }
    }

    pub fn stats_output(&self) -> StatsOutput {
        StatsOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            profile: self.data.profile.clone(),
            total: self.data.snapshot.total,
            streak: self.streak,
            languages: self.ranked.clone(),
        }
    }
}
