use chrono::{Datelike, Duration, NaiveDate, Weekday};
use commit_heatmap::core::{
    CommitIndex, DOT_GAP_RATIO, DateRange, Granularity, HeatmapLayoutOptions, Locale,
    QuantizePolicy, build_grid, day_key, hour_key, level, solve_dot_matrix, solve_weekly,
};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date")
}

fn sparse_index() -> impl Strategy<Value = Vec<(i64, Option<u32>, u32)>> {
    prop::collection::vec((0_i64..400, prop::option::of(0_u32..24), 0_u32..50), 0..60)
}

fn to_index(entries: &[(i64, Option<u32>, u32)]) -> CommitIndex {
    CommitIndex::from_counts(entries.iter().map(|(offset, hour, count)| {
        let date = base_date() + Duration::days(*offset);
        let key = match hour {
            Some(hour) => hour_key(date, *hour),
            None => day_key(date),
        };
        (key, *count)
    }))
}

proptest! {
    #[test]
    fn relative_levels_are_monotonic(max in 1_u32..10_000, a in 0_u32..10_000, b in 0_u32..10_000) {
        let policy = QuantizePolicy::relative(max);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(level(low, policy) <= level(high, policy));
    }

    #[test]
    fn absolute_levels_are_monotonic(a in 0_u32..100, b in 0_u32..100) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(level(low, QuantizePolicy::Absolute) <= level(high, QuantizePolicy::Absolute));
    }

    #[test]
    fn grids_are_rectangular_and_idempotent(
        entries in sparse_index(),
        since_offset in 0_i64..380,
        span in 0_i64..120,
        daily in any::<bool>()
    ) {
        let index = to_index(&entries);
        let since = base_date() + Duration::days(since_offset);
        let range = DateRange::new(since, since + Duration::days(span));
        let granularity = if daily { Granularity::Daily } else { Granularity::Weekly };

        let grid = build_grid(range, &index, granularity, Locale::Fr);
        let again = build_grid(range, &index, granularity, Locale::Fr);
        prop_assert_eq!(&grid, &again);

        for column in &grid.columns {
            prop_assert_eq!(column.cells.len(), granularity.rows());
        }
        for cell in grid.cells() {
            let expected = if cell.in_range { level(cell.count, grid.policy) } else { level(0, grid.policy) };
            prop_assert_eq!(cell.level, expected);
        }
    }

    #[test]
    fn weekly_grid_covers_every_day_once(
        since_offset in 0_i64..380,
        span in 0_i64..200
    ) {
        let since = base_date() + Duration::days(since_offset);
        let today = since + Duration::days(span);
        let range = DateRange::new(since, today);
        let grid = build_grid(range, &CommitIndex::new(), Granularity::Weekly, Locale::En);

        let in_range: Vec<NaiveDate> = grid
            .cells()
            .filter(|cell| cell.in_range)
            .map(|cell| cell.date)
            .collect();
        prop_assert_eq!(in_range.len(), range.day_count());
        prop_assert_eq!(in_range.first().copied(), Some(since));
        prop_assert_eq!(in_range.last().copied(), Some(today));
        prop_assert!(in_range.windows(2).all(|pair| pair[1] == pair[0] + Duration::days(1)));

        for column in &grid.columns {
            prop_assert_eq!(column.start_date.weekday(), Weekday::Sun);
        }
        let last_column = grid.columns.last().expect("non-empty range has columns");
        prop_assert!(last_column.cells.iter().any(|cell| cell.date == today));
    }

    #[test]
    fn month_markers_are_ordered_and_distinct(
        since_offset in 0_i64..380,
        span in 0_i64..400,
        daily in any::<bool>()
    ) {
        let since = base_date() + Duration::days(since_offset);
        let range = DateRange::new(since, since + Duration::days(span));
        let granularity = if daily { Granularity::Daily } else { Granularity::Weekly };
        let grid = build_grid(range, &CommitIndex::new(), granularity, Locale::Fr);

        prop_assert_eq!(grid.markers.first().map(|marker| marker.column_index), Some(0));
        for pair in grid.markers.windows(2) {
            prop_assert!(pair[0].column_index < pair[1].column_index);
            prop_assert_ne!((pair[0].year, pair[0].month), (pair[1].year, pair[1].month));
        }
        let separators = grid.columns.iter().filter(|column| column.month_start).count();
        prop_assert_eq!(separators + 1, grid.markers.len());
    }

    #[test]
    fn weekly_cell_size_respects_bounds(width in 0.0_f64..4_000.0, columns in 1_usize..120) {
        let options = HeatmapLayoutOptions::default();
        let geometry = solve_weekly(width, columns, options);
        prop_assert!(geometry.cell_size >= options.min_cell_px);
        prop_assert!(geometry.cell_size <= options.max_cell_px);
        prop_assert_eq!(geometry.cell_size.fract(), 0.0);
        prop_assert!((geometry.column_pitch - geometry.cell_size - options.gap_px).abs() < 1e-9);
    }

    #[test]
    fn dot_matrix_is_optimal_over_all_column_counts(
        n in 1_usize..80,
        width in 1.0_f64..1_000.0,
        height in 1.0_f64..1_000.0
    ) {
        let layout = solve_dot_matrix(n, width, height).expect("layout");
        prop_assert!(layout.cols * layout.rows >= n);
        prop_assert!(layout.cols >= 1 && layout.cols <= n);
        for cols in 1..=n {
            let rows = n.div_ceil(cols);
            let dot = (width / cols as f64).min(height / rows as f64) / (1.0 + DOT_GAP_RATIO);
            prop_assert!(dot <= layout.dot_size);
            if cols < layout.cols {
                prop_assert!(dot < layout.dot_size);
            }
        }
        prop_assert_eq!(f64::from(layout.dot_size_px), layout.dot_size.floor());
    }
}
