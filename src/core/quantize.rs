use serde::{Deserialize, Serialize};

/// Discrete 0–4 color bin of a grid cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum IntensityLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    Peak,
}

impl IntensityLevel {
    pub const ALL: [Self; 5] = [Self::None, Self::Low, Self::Medium, Self::High, Self::Peak];

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            4 => Some(Self::Peak),
            _ => None,
        }
    }
}

impl From<IntensityLevel> for u8 {
    fn from(level: IntensityLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for IntensityLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| format!("intensity level {value} is outside 0..=4"))
    }
}

/// Count-to-level mapping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantizePolicy {
    /// Bands relative to the largest daily total in the visible range.
    ///
    /// Used by the weekly view where totals vary by orders of magnitude
    /// between repositories.
    Relative { max_count: u32 },
    /// Fixed thresholds at 1, 2, 4 and 6 commits.
    ///
    /// Used by the daily view where hourly counts are small integers.
    Absolute,
}

impl QuantizePolicy {
    /// Relative policy with `max_count` floored to 1.
    #[must_use]
    pub fn relative(max_count: u32) -> Self {
        Self::Relative {
            max_count: max_count.max(1),
        }
    }
}

const ABSOLUTE_THRESHOLDS: [(u32, IntensityLevel); 4] = [
    (6, IntensityLevel::Peak),
    (4, IntensityLevel::High),
    (2, IntensityLevel::Medium),
    (1, IntensityLevel::Low),
];

/// Maps a raw count to its intensity level under `policy`.
///
/// Pure in `(count, policy)`: recomputing from the same inputs always yields
/// the same level.
#[must_use]
pub fn level(count: u32, policy: QuantizePolicy) -> IntensityLevel {
    if count == 0 {
        return IntensityLevel::None;
    }

    match policy {
        QuantizePolicy::Relative { max_count } => {
            let ratio = f64::from(count) / f64::from(max_count.max(1));
            if ratio <= 0.25 {
                IntensityLevel::Low
            } else if ratio <= 0.5 {
                IntensityLevel::Medium
            } else if ratio <= 0.75 {
                IntensityLevel::High
            } else {
                IntensityLevel::Peak
            }
        }
        QuantizePolicy::Absolute => ABSOLUTE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| count >= *threshold)
            .map_or(IntensityLevel::None, |(_, level)| *level),
    }
}
