use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::{CommitIndex, DerivedStats};
use crate::error::{HeatmapError, HeatmapResult};

/// One repository's heatmap data as delivered by the data collaborator.
///
/// Wire shape: `{ "sinceDate": "YYYY-MM-DD", "commits": {..}, "stats": {..},
/// "repo"?: "..", "repoName"?: ".." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_name: Option<String>,
    pub since_date: NaiveDate,
    #[serde(default)]
    pub commits: CommitIndex,
    #[serde(default)]
    pub stats: DerivedStats,
}

impl HeatmapPayload {
    #[must_use]
    pub fn new(since_date: NaiveDate, commits: CommitIndex, stats: DerivedStats) -> Self {
        Self {
            repo: None,
            repo_name: None,
            since_date,
            commits,
            stats,
        }
    }

    pub fn from_json_str(raw: &str) -> HeatmapResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json_value(&value)
    }

    /// Decodes a payload, tolerating a malformed commit index or stats block.
    ///
    /// An upstream `error` field or a missing/invalid `sinceDate` is an error;
    /// a bad `commits` value decodes as an empty index and bad `stats` as
    /// defaults.
    pub fn from_json_value(value: &Value) -> HeatmapResult<Self> {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(HeatmapError::InvalidData(format!(
                "upstream reported error: {message}"
            )));
        }

        let raw_since = value
            .get("sinceDate")
            .and_then(Value::as_str)
            .ok_or_else(|| HeatmapError::InvalidData("payload is missing `sinceDate`".to_owned()))?;
        let since_date = NaiveDate::parse_from_str(raw_since, "%Y-%m-%d").map_err(|err| {
            HeatmapError::InvalidData(format!("invalid `sinceDate` `{raw_since}`: {err}"))
        })?;

        let commits = CommitIndex::from_json_value(value.get("commits").unwrap_or(&Value::Null));
        let stats = match value.get("stats") {
            Some(raw) => serde_json::from_value(raw.clone()).unwrap_or_else(|err| {
                warn!(error = %err, "ignoring malformed heatmap stats");
                DerivedStats::default()
            }),
            None => DerivedStats::default(),
        };

        Ok(Self {
            repo: value.get("repo").and_then(Value::as_str).map(str::to_owned),
            repo_name: value
                .get("repoName")
                .and_then(Value::as_str)
                .map(str::to_owned),
            since_date,
            commits,
            stats,
        })
    }
}
