pub mod aggregate;
pub mod commit_index;
pub mod date_range;
pub mod grid;
pub mod layout;
pub mod locale;
pub mod quantize;
pub mod stats;
pub mod types;

pub use aggregate::{DailyTotals, aggregate_to_daily, max_daily_count};
pub use commit_index::{CommitIndex, day_key, hour_key, parse_bucket_key};
pub use date_range::DateRange;
pub use grid::{
    GridCell, GridColumn, HeatmapGrid, MonthMarker, build_daily, build_grid, build_weekly,
};
pub use layout::{
    DOT_GAP_RATIO, DotMatrixLayout, HeatmapLayoutOptions, LayoutGeometry, MonthLabelPosition,
    position_month_labels, solve, solve_daily, solve_dot_matrix, solve_weekly,
};
pub use locale::{Locale, hour_label};
pub use quantize::{IntensityLevel, QuantizePolicy, level};
pub use stats::{DerivedStats, StatEntry, StatKind};
pub use types::{Granularity, Viewport};
