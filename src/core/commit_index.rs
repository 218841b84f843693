use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{HeatmapError, HeatmapResult};

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";
/// Length of the `YYYY-MM-DD` prefix shared by day and hour keys.
pub const DAY_KEY_LEN: usize = 10;

/// Sparse mapping from bucket key to commit count.
///
/// Keys are either `YYYY-MM-DD` (day buckets) or `YYYY-MM-DD-HH` (hour
/// buckets). A key that is not present counts as zero. The index is an
/// immutable snapshot: a repository switch replaces it wholesale.
///
/// `IndexMap` is used to preserve the producer's key order for stable snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitIndex {
    counts: IndexMap<String, u32>,
}

impl CommitIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from `(key, count)` pairs, summing repeated keys.
    #[must_use]
    pub fn from_counts<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, u32)>,
    {
        let mut counts = IndexMap::new();
        for (key, count) in entries {
            let slot = counts.entry(key.into()).or_insert(0_u32);
            *slot = slot.saturating_add(count);
        }
        Self { counts }
    }

    /// Decodes an index from an arbitrary JSON value without failing.
    ///
    /// Anything other than an object yields an empty index. Entries whose
    /// value is not a non-negative integer are dropped.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            if !value.is_null() {
                warn!(kind = json_kind(value), "commit index is not an object; using empty index");
            }
            return Self::new();
        };

        let mut counts = IndexMap::with_capacity(object.len());
        let mut dropped = 0usize;
        for (key, raw) in object {
            match raw.as_u64().and_then(|count| u32::try_from(count).ok()) {
                Some(count) => {
                    let slot = counts.entry(key.clone()).or_insert(0_u32);
                    *slot = slot.saturating_add(count);
                }
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            warn!(dropped, "dropped commit index entries with non-integer counts");
        }
        debug!(entries = counts.len(), "decoded commit index");
        Self { counts }
    }

    /// Count stored for `key`, zero when absent.
    #[must_use]
    pub fn count(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }

    #[must_use]
    pub fn as_map(&self) -> &IndexMap<String, u32> {
        &self.counts
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for CommitIndex {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self::from_counts(iter)
    }
}

/// Formats the `YYYY-MM-DD` bucket key of a day.
#[must_use]
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Formats the `YYYY-MM-DD-HH` bucket key of an hour slot.
#[must_use]
pub fn hour_key(date: NaiveDate, hour: u32) -> String {
    format!("{}-{hour:02}", day_key(date))
}

/// Parses a day or hour bucket key into its date and optional hour.
pub fn parse_bucket_key(key: &str) -> HeatmapResult<(NaiveDate, Option<u32>)> {
    let invalid = || HeatmapError::InvalidBucketKey(key.to_owned());
    let day_part = key.get(..DAY_KEY_LEN).ok_or_else(invalid)?;
    let date = NaiveDate::parse_from_str(day_part, DAY_KEY_FORMAT).map_err(|_| invalid())?;

    match &key[DAY_KEY_LEN..] {
        "" => Ok((date, None)),
        rest => {
            let hour_part = rest.strip_prefix('-').ok_or_else(invalid)?;
            if hour_part.len() != 2 {
                return Err(invalid());
            }
            let hour: u32 = hour_part.parse().map_err(|_| invalid())?;
            if hour > 23 {
                return Err(invalid());
            }
            Ok((date, Some(hour)))
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{CommitIndex, day_key, hour_key, parse_bucket_key};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn keys_are_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("date");
        assert_eq!(day_key(date), "2024-03-05");
        assert_eq!(hour_key(date, 9), "2024-03-05-09");
    }

    #[test]
    fn parse_accepts_day_and_hour_keys() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("date");
        assert_eq!(parse_bucket_key("2024-03-05").expect("day"), (date, None));
        assert_eq!(
            parse_bucket_key("2024-03-05-23").expect("hour"),
            (date, Some(23))
        );
        assert!(parse_bucket_key("2024-03-05-24").is_err());
        assert!(parse_bucket_key("2024-03-05 09").is_err());
        assert!(parse_bucket_key("2024-3-5").is_err());
    }

    #[test]
    fn lenient_decode_drops_bad_entries() {
        let index = CommitIndex::from_json_value(&json!({
            "2024-01-01-10": 3,
            "2024-01-01-11": "four",
            "2024-01-01-12": -1,
            "2024-01-01-13": 1.5,
        }));
        assert_eq!(index.len(), 1);
        assert_eq!(index.count("2024-01-01-10"), 3);
        assert_eq!(index.count("2024-01-01-11"), 0);
    }

    #[test]
    fn lenient_decode_of_non_object_is_empty() {
        assert!(CommitIndex::from_json_value(&json!([1, 2, 3])).is_empty());
        assert!(CommitIndex::from_json_value(&json!(null)).is_empty());
    }

    #[test]
    fn from_counts_sums_repeated_keys() {
        let index = CommitIndex::from_counts([("2024-01-01", 2), ("2024-01-01", 5)]);
        assert_eq!(index.count("2024-01-01"), 7);
    }
}
