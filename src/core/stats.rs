use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary statistics computed upstream alongside the commit index.
///
/// The engine only displays these values; it never derives them itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub unique_days: u64,
    #[serde(default = "default_peak_hour")]
    pub peak_hour: u8,
    #[serde(default)]
    pub current_streak: Option<u64>,
    #[serde(default)]
    pub busiest_day: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub avg_commits_per_day: Option<Decimal>,
}

impl Default for DerivedStats {
    fn default() -> Self {
        Self {
            total_commits: 0,
            unique_days: 0,
            peak_hour: default_peak_hour(),
            current_streak: None,
            busiest_day: None,
            avg_commits_per_day: None,
        }
    }
}

fn default_peak_hour() -> u8 {
    12
}

/// Identifies one tile of the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    TotalCommits,
    ActiveDays,
    PeakHour,
    CurrentStreak,
    FavoriteDay,
    AvgPerDay,
}

/// One display-ready stats tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub kind: StatKind,
    pub value: String,
}

impl DerivedStats {
    /// Formats the six stats tiles in panel order.
    ///
    /// Missing streak and average render as `0`, a missing busiest day as `-`.
    #[must_use]
    pub fn display_entries(&self) -> Vec<StatEntry> {
        let avg = self
            .avg_commits_per_day
            .map_or_else(|| "0".to_owned(), |avg| avg.normalize().to_string());
        vec![
            StatEntry {
                kind: StatKind::TotalCommits,
                value: self.total_commits.to_string(),
            },
            StatEntry {
                kind: StatKind::ActiveDays,
                value: self.unique_days.to_string(),
            },
            StatEntry {
                kind: StatKind::PeakHour,
                value: format!("{}h", self.peak_hour),
            },
            StatEntry {
                kind: StatKind::CurrentStreak,
                value: self.current_streak.unwrap_or(0).to_string(),
            },
            StatEntry {
                kind: StatKind::FavoriteDay,
                value: self
                    .busiest_day
                    .clone()
                    .filter(|day| !day.is_empty())
                    .unwrap_or_else(|| "-".to_owned()),
            },
            StatEntry {
                kind: StatKind::AvgPerDay,
                value: avg,
            },
        ]
    }
}
