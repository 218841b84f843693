use commit_heatmap::core::{
    CommitIndex, IntensityLevel, QuantizePolicy, aggregate_to_daily, level, max_daily_count,
};

#[test]
fn relative_policy_uses_inclusive_quarter_bands() {
    let policy = QuantizePolicy::relative(8);
    assert_eq!(level(0, policy), IntensityLevel::None);
    assert_eq!(level(1, policy), IntensityLevel::Low);
    assert_eq!(level(2, policy), IntensityLevel::Low);
    assert_eq!(level(3, policy), IntensityLevel::Medium);
    assert_eq!(level(4, policy), IntensityLevel::Medium);
    assert_eq!(level(5, policy), IntensityLevel::High);
    assert_eq!(level(6, policy), IntensityLevel::High);
    assert_eq!(level(7, policy), IntensityLevel::Peak);
    assert_eq!(level(8, policy), IntensityLevel::Peak);
}

#[test]
fn relative_policy_floors_max_count_to_one() {
    assert_eq!(
        QuantizePolicy::relative(0),
        QuantizePolicy::Relative { max_count: 1 }
    );
    assert_eq!(level(1, QuantizePolicy::relative(0)), IntensityLevel::Peak);
}

#[test]
fn absolute_policy_thresholds() {
    let policy = QuantizePolicy::Absolute;
    let expected = [
        (0, IntensityLevel::None),
        (1, IntensityLevel::Low),
        (2, IntensityLevel::Medium),
        (3, IntensityLevel::Medium),
        (4, IntensityLevel::High),
        (5, IntensityLevel::High),
        (6, IntensityLevel::Peak),
        (250, IntensityLevel::Peak),
    ];
    for (count, want) in expected {
        assert_eq!(level(count, policy), want, "count {count}");
    }
}

#[test]
fn hourly_bucket_with_five_commits_is_level_three() {
    let index = CommitIndex::from_counts([("2024-03-05-09", 5_u32)]);
    let count = index.count("2024-03-05-09");
    assert_eq!(level(count, QuantizePolicy::Absolute).as_u8(), 3);
}

#[test]
fn daily_aggregate_drops_zero_counts_and_yields_peak_for_max_day() {
    let index = CommitIndex::from_counts([("2024-01-01", 3_u32), ("2024-01-02", 0)]);
    let totals = aggregate_to_daily(&index);

    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("2024-01-01"), Some(&3));
    let max = max_daily_count(&totals);
    assert_eq!(max, 3);
    assert_eq!(level(3, QuantizePolicy::relative(max)).as_u8(), 4);
    assert_eq!(level(0, QuantizePolicy::relative(max)).as_u8(), 0);
}

#[test]
fn daily_aggregate_folds_hour_buckets() {
    let index = CommitIndex::from_counts([
        ("2024-05-01-08", 2_u32),
        ("2024-05-01-17", 3),
        ("2024-05-02-00", 1),
        ("2024-05-02", 4),
    ]);
    let totals = aggregate_to_daily(&index);
    assert_eq!(totals.get("2024-05-01"), Some(&5));
    assert_eq!(totals.get("2024-05-02"), Some(&5));
    assert_eq!(max_daily_count(&totals), 5);
}

#[test]
fn aggregate_of_empty_index_is_empty_with_unit_max() {
    let totals = aggregate_to_daily(&CommitIndex::new());
    assert!(totals.is_empty());
    assert_eq!(max_daily_count(&totals), 1);
}

#[test]
fn intensity_level_serializes_as_integer() {
    let json = serde_json::to_string(&IntensityLevel::High).expect("serialize");
    assert_eq!(json, "3");
    let back: IntensityLevel = serde_json::from_str("4").expect("deserialize");
    assert_eq!(back, IntensityLevel::Peak);
    assert!(serde_json::from_str::<IntensityLevel>("5").is_err());
}
