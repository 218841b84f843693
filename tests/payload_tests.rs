use chrono::NaiveDate;
use commit_heatmap::HeatmapError;
use commit_heatmap::api::HeatmapPayload;
use commit_heatmap::core::{CommitIndex, DerivedStats, StatKind, parse_bucket_key};
use rust_decimal::Decimal;

#[test]
fn decodes_collaborator_wire_format() {
    let raw = r#"{
        "repo": "octo/hello",
        "repoName": "hello",
        "sinceDate": "2024-01-01",
        "commits": { "2024-01-01": 3, "2024-01-02-09": 2 },
        "stats": {
            "totalCommits": 5,
            "uniqueDays": 2,
            "peakHour": 9,
            "currentStreak": 2,
            "busiestDay": "Lundi",
            "avgCommitsPerDay": 2.5
        }
    }"#;
    let payload = HeatmapPayload::from_json_str(raw).expect("decode");

    assert_eq!(payload.repo.as_deref(), Some("octo/hello"));
    assert_eq!(payload.repo_name.as_deref(), Some("hello"));
    assert_eq!(
        payload.since_date,
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("date")
    );
    assert_eq!(payload.commits.len(), 2);
    assert_eq!(payload.commits.count("2024-01-02-09"), 2);
    assert_eq!(payload.stats.total_commits, 5);
    assert_eq!(payload.stats.peak_hour, 9);
    assert_eq!(payload.stats.avg_commits_per_day, Some(Decimal::new(25, 1)));
}

#[test]
fn upstream_error_field_is_reported() {
    let err = HeatmapPayload::from_json_str(r#"{"error": "Repo not found"}"#)
        .expect_err("error payload");
    assert!(matches!(err, HeatmapError::InvalidData(message) if message.contains("Repo not found")));
}

#[test]
fn missing_or_invalid_since_date_is_an_error() {
    assert!(matches!(
        HeatmapPayload::from_json_str(r#"{"commits": {}}"#),
        Err(HeatmapError::InvalidData(_))
    ));
    assert!(matches!(
        HeatmapPayload::from_json_str(r#"{"sinceDate": "01/02/2024"}"#),
        Err(HeatmapError::InvalidData(_))
    ));
}

#[test]
fn malformed_json_maps_to_json_error() {
    assert!(matches!(
        HeatmapPayload::from_json_str("{not json"),
        Err(HeatmapError::Json(_))
    ));
}

#[test]
fn malformed_commit_index_decodes_as_empty() {
    let payload =
        HeatmapPayload::from_json_str(r#"{"sinceDate": "2024-01-01", "commits": [1, 2, 3]}"#)
            .expect("decode");
    assert!(payload.commits.is_empty());

    let payload = HeatmapPayload::from_json_str(r#"{"sinceDate": "2024-01-01"}"#).expect("decode");
    assert!(payload.commits.is_empty());
}

#[test]
fn bad_commit_entries_are_dropped_individually() {
    let raw = r#"{
        "sinceDate": "2024-01-01",
        "commits": { "2024-01-01": 2, "2024-01-02": -1, "2024-01-03": "x", "2024-01-04": 1.5 }
    }"#;
    let payload = HeatmapPayload::from_json_str(raw).expect("decode");
    assert_eq!(payload.commits.len(), 1);
    assert_eq!(payload.commits.count("2024-01-01"), 2);
}

#[test]
fn malformed_stats_fall_back_to_defaults() {
    let payload = HeatmapPayload::from_json_str(
        r#"{"sinceDate": "2024-01-01", "stats": {"totalCommits": "lots"}}"#,
    )
    .expect("decode");
    assert_eq!(payload.stats, DerivedStats::default());
    assert_eq!(payload.stats.peak_hour, 12);
}

#[test]
fn stat_entries_use_panel_fallbacks() {
    let stats = DerivedStats {
        total_commits: 120,
        unique_days: 30,
        peak_hour: 14,
        ..DerivedStats::default()
    };
    let entries = stats.display_entries();
    let value = |kind: StatKind| {
        entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.value.clone())
            .expect("entry present")
    };
    assert_eq!(entries.len(), 6);
    assert_eq!(value(StatKind::TotalCommits), "120");
    assert_eq!(value(StatKind::PeakHour), "14h");
    assert_eq!(value(StatKind::CurrentStreak), "0");
    assert_eq!(value(StatKind::FavoriteDay), "-");
    assert_eq!(value(StatKind::AvgPerDay), "0");
}

#[test]
fn payload_serializes_back_to_camel_case() {
    let payload = HeatmapPayload::new(
        NaiveDate::from_ymd_opt(2024, 2, 1).expect("date"),
        CommitIndex::from_counts([("2024-02-01", 1_u32)]),
        DerivedStats::default(),
    );
    let value = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(value["sinceDate"], "2024-02-01");
    assert_eq!(value["commits"]["2024-02-01"], 1);
    assert!(value.get("repo").is_none());
}

#[test]
fn bucket_keys_parse_or_fail_with_key() {
    let (date, hour) = parse_bucket_key("2024-03-05-09").expect("hour key");
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).expect("date"));
    assert_eq!(hour, Some(9));
    assert_eq!(parse_bucket_key("2024-03-05").expect("day key").1, None);

    for bad in ["2024-03", "2024-13-01", "2024-03-05-24", "2024-03-05-9", "2024-03-05T09"] {
        assert!(
            matches!(parse_bucket_key(bad), Err(HeatmapError::InvalidBucketKey(key)) if key == bad),
            "{bad}"
        );
    }
}
