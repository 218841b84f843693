use approx::assert_relative_eq;
use chrono::NaiveDate;
use commit_heatmap::core::{
    CommitIndex, DateRange, Granularity, HeatmapLayoutOptions, Locale, Viewport, build_grid,
    position_month_labels, solve, solve_daily, solve_dot_matrix, solve_weekly,
};

#[test]
fn wide_container_clamps_cell_to_max() {
    let geometry = solve_weekly(1000.0, 20, HeatmapLayoutOptions::default());
    assert_relative_eq!(geometry.cell_size, 28.0);
    assert_relative_eq!(geometry.column_pitch, 30.0);
    assert_relative_eq!(geometry.total_width, 600.0);
    assert_relative_eq!(geometry.total_height, 210.0);
}

#[test]
fn narrow_container_clamps_cell_to_min() {
    let geometry = solve_weekly(400.0, 52, HeatmapLayoutOptions::default());
    assert_relative_eq!(geometry.cell_size, 12.0);
    assert_relative_eq!(geometry.total_width, 52.0 * 14.0);
}

#[test]
fn cell_size_is_floored_width_share() {
    let geometry = solve_weekly(600.0, 30, HeatmapLayoutOptions::default());
    assert_relative_eq!(geometry.cell_size, 16.0);
    assert_relative_eq!(geometry.column_pitch, 18.0);
    assert_relative_eq!(geometry.column_x(3), 54.0);
    assert_relative_eq!(geometry.row_y(6), 108.0);
}

#[test]
fn custom_options_change_bounds() {
    let options = HeatmapLayoutOptions {
        gap_px: 4.0,
        label_reserved_px: 0.0,
        min_cell_px: 8.0,
        max_cell_px: 40.0,
        daily_cell_px: 10.0,
    };
    let geometry = solve_weekly(440.0, 10, options);
    assert_relative_eq!(geometry.cell_size, 40.0);
    let geometry = solve_weekly(236.0, 10, options);
    assert_relative_eq!(geometry.cell_size, 20.0);
}

#[test]
fn zero_columns_fall_back_to_min_cell() {
    let geometry = solve_weekly(800.0, 0, HeatmapLayoutOptions::default());
    assert_eq!(geometry.column_count, 0);
    assert_relative_eq!(geometry.cell_size, 12.0);
    assert_relative_eq!(geometry.total_width, 0.0);
}

#[test]
fn daily_geometry_uses_fixed_cell_size() {
    let geometry = solve_daily(10, HeatmapLayoutOptions::default());
    assert_eq!(geometry.granularity, Granularity::Daily);
    assert_relative_eq!(geometry.cell_size, 12.0);
    assert_relative_eq!(geometry.column_pitch, 14.0);
    assert_relative_eq!(geometry.total_width, 140.0);
    assert_relative_eq!(geometry.total_height, 24.0 * 14.0);

    let dispatched = solve(
        Viewport::new(300, 400),
        10,
        Granularity::Daily,
        HeatmapLayoutOptions::default(),
    );
    assert_eq!(dispatched, geometry);
}

#[test]
fn month_labels_sit_at_column_offsets() {
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
        NaiveDate::from_ymd_opt(2024, 7, 27).expect("date"),
    );
    let grid = build_grid(range, &CommitIndex::new(), Granularity::Weekly, Locale::En);
    assert_eq!(grid.column_count(), 30);

    let geometry = solve_weekly(600.0, grid.column_count(), HeatmapLayoutOptions::default());
    let labels = position_month_labels(&grid.markers, &geometry);
    assert_eq!(labels.len(), grid.markers.len());
    for (label, marker) in labels.iter().zip(&grid.markers) {
        assert_eq!(label.column_index, marker.column_index);
        assert_relative_eq!(label.left_px, marker.column_index as f64 * 18.0);
    }
    assert_eq!(labels[2].label, "Feb");
    assert_relative_eq!(labels[2].left_px, 90.0);
}

#[test]
fn invalid_layout_options_are_rejected() {
    let options = HeatmapLayoutOptions {
        min_cell_px: 30.0,
        max_cell_px: 20.0,
        ..HeatmapLayoutOptions::default()
    };
    assert!(options.validate().is_err());
    let options = HeatmapLayoutOptions {
        gap_px: f64::NAN,
        ..HeatmapLayoutOptions::default()
    };
    assert!(options.validate().is_err());
    assert!(HeatmapLayoutOptions::default().validate().is_ok());
}

#[test]
fn dot_matrix_picks_largest_dot_for_ten_items() {
    let layout = solve_dot_matrix(10, 300.0, 100.0).expect("layout");
    assert_eq!(layout.cols, 5);
    assert_eq!(layout.rows, 2);
    assert_relative_eq!(layout.dot_size, 50.0 / 1.15, epsilon = 1e-9);
    assert_eq!(layout.dot_size_px, 43);
    assert_relative_eq!(layout.gap, layout.dot_size * 0.15, epsilon = 1e-9);
}

#[test]
fn dot_matrix_packs_without_overflow() {
    for n in 1..=40 {
        let layout = solve_dot_matrix(n, 320.0, 180.0).expect("layout");
        assert!(layout.cols * layout.rows >= n);
        let pitch = layout.dot_size * 1.15;
        assert!(pitch * layout.cols as f64 <= 320.0 + 1e-9);
        assert!(pitch * layout.rows as f64 <= 180.0 + 1e-9);
    }
}

#[test]
fn dot_matrix_degenerate_inputs_produce_no_geometry() {
    assert!(solve_dot_matrix(0, 300.0, 100.0).is_none());
    assert!(solve_dot_matrix(5, 0.0, 100.0).is_none());
    assert!(solve_dot_matrix(5, 300.0, 0.0).is_none());
}
