use serde::{Deserialize, Serialize};

/// Display language for month names, weekday names and tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

const MONTHS_FR: [&str; 12] = [
    "Janv", "Févr", "Mars", "Avr", "Mai", "Juin", "Juil", "Août", "Sept", "Oct", "Nov", "Déc",
];
const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const DAYS_FR: [&str; 7] = ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"];
const DAYS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl Locale {
    /// Short month name for a 1-based month number.
    #[must_use]
    pub fn month_name(self, month: u32) -> &'static str {
        let names = match self {
            Self::Fr => &MONTHS_FR,
            Self::En => &MONTHS_EN,
        };
        let index = usize::try_from(month.clamp(1, 12) - 1).unwrap_or(0);
        names[index]
    }

    /// Short weekday name, Sunday first.
    #[must_use]
    pub fn weekday_name(self, days_from_sunday: u32) -> &'static str {
        let names = match self {
            Self::Fr => &DAYS_FR,
            Self::En => &DAYS_EN,
        };
        names[usize::try_from(days_from_sunday % 7).unwrap_or(0)]
    }

    /// Connector between the date and the hour in daily tooltips.
    #[must_use]
    pub fn hour_connector(self) -> &'static str {
        match self {
            Self::Fr => "à",
            Self::En => "at",
        }
    }
}

/// Row label of an hour cell, `00h` through `23h`.
#[must_use]
pub fn hour_label(hour: u32) -> String {
    format!("{hour:02}h")
}

/// `commit` / `commits` suffix for a count.
#[must_use]
pub fn commit_noun(count: u32) -> &'static str {
    if count == 1 { "commit" } else { "commits" }
}
