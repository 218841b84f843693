use serde::{Deserialize, Serialize};

use crate::core::grid::MonthMarker;
use crate::core::{Granularity, Viewport};
use crate::error::{HeatmapError, HeatmapResult};

/// Spacing between dots as a fraction of the dot diameter.
pub const DOT_GAP_RATIO: f64 = 0.15;

/// Sizing knobs for the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapLayoutOptions {
    /// Gap between neighbouring cells, read from the host style.
    pub gap_px: f64,
    /// Horizontal space kept free for the row labels.
    pub label_reserved_px: f64,
    pub min_cell_px: f64,
    pub max_cell_px: f64,
    /// Fixed cell size of the daily grid.
    pub daily_cell_px: f64,
}

impl Default for HeatmapLayoutOptions {
    fn default() -> Self {
        Self {
            gap_px: 2.0,
            label_reserved_px: 50.0,
            min_cell_px: 12.0,
            max_cell_px: 28.0,
            daily_cell_px: 12.0,
        }
    }
}

impl HeatmapLayoutOptions {
    pub fn validate(self) -> HeatmapResult<Self> {
        for (value, name) in [
            (self.gap_px, "gap_px"),
            (self.label_reserved_px, "label_reserved_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(HeatmapError::InvalidData(format!(
                    "layout option `{name}` must be finite and >= 0"
                )));
            }
        }
        for (value, name) in [
            (self.min_cell_px, "min_cell_px"),
            (self.max_cell_px, "max_cell_px"),
            (self.daily_cell_px, "daily_cell_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(HeatmapError::InvalidData(format!(
                    "layout option `{name}` must be finite and > 0"
                )));
            }
        }
        if self.min_cell_px > self.max_cell_px {
            return Err(HeatmapError::InvalidData(
                "layout option `min_cell_px` must not exceed `max_cell_px`".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Pixel geometry of a rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    pub granularity: Granularity,
    pub column_count: usize,
    pub cell_size: f64,
    pub gap: f64,
    /// Horizontal distance between the left edges of two adjacent columns.
    pub column_pitch: f64,
    pub total_width: f64,
    pub total_height: f64,
}

impl LayoutGeometry {
    fn from_cell_size(
        granularity: Granularity,
        column_count: usize,
        cell_size: f64,
        gap: f64,
    ) -> Self {
        let column_pitch = cell_size + gap;
        Self {
            granularity,
            column_count,
            cell_size,
            gap,
            column_pitch,
            total_width: column_count as f64 * column_pitch,
            total_height: granularity.rows() as f64 * column_pitch,
        }
    }

    /// Left edge of column `column_index`.
    #[must_use]
    pub fn column_x(&self, column_index: usize) -> f64 {
        column_index as f64 * self.column_pitch
    }

    /// Top edge of row `row_index`.
    #[must_use]
    pub fn row_y(&self, row_index: usize) -> f64 {
        row_index as f64 * self.column_pitch
    }
}

/// Month label placed over its column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLabelPosition {
    pub column_index: usize,
    pub label: String,
    pub left_px: f64,
}

/// Solves grid geometry for the active granularity.
#[must_use]
pub fn solve(
    container: Viewport,
    column_count: usize,
    granularity: Granularity,
    options: HeatmapLayoutOptions,
) -> LayoutGeometry {
    match granularity {
        Granularity::Weekly => solve_weekly(f64::from(container.width), column_count, options),
        Granularity::Daily => solve_daily(column_count, options),
    }
}

/// Closed-form weekly sizing: only the width constrains the 7-row grid.
///
/// The cell size is the floor of the width share per column after the label
/// area and the gaps, clamped to `[min_cell_px, max_cell_px]`.
#[must_use]
pub fn solve_weekly(
    container_width: f64,
    column_count: usize,
    options: HeatmapLayoutOptions,
) -> LayoutGeometry {
    let gap = options.gap_px;
    let cell_size = if column_count == 0 || !container_width.is_finite() {
        options.min_cell_px
    } else {
        let columns = column_count as f64;
        let available = container_width - options.label_reserved_px - (columns - 1.0) * gap;
        (available / columns)
            .floor()
            .clamp(options.min_cell_px, options.max_cell_px)
    };
    LayoutGeometry::from_cell_size(Granularity::Weekly, column_count, cell_size, gap)
}

/// Daily sizing uses the style cell size; the grid scrolls horizontally.
#[must_use]
pub fn solve_daily(column_count: usize, options: HeatmapLayoutOptions) -> LayoutGeometry {
    LayoutGeometry::from_cell_size(
        Granularity::Daily,
        column_count,
        options.daily_cell_px,
        options.gap_px,
    )
}

/// Positions month labels over their anchor columns.
#[must_use]
pub fn position_month_labels(
    markers: &[MonthMarker],
    geometry: &LayoutGeometry,
) -> Vec<MonthLabelPosition> {
    markers
        .iter()
        .map(|marker| MonthLabelPosition {
            column_index: marker.column_index,
            label: marker.label.clone(),
            left_px: geometry.column_x(marker.column_index),
        })
        .collect()
}

/// Best packing of `n` equal dots into a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotMatrixLayout {
    pub cols: usize,
    pub rows: usize,
    /// Largest dot diameter that fits, before rounding.
    pub dot_size: f64,
    pub dot_size_px: u32,
    pub gap: f64,
}

/// Searches every column count in `1..=n` for the largest dot diameter.
///
/// Ties keep the smallest column count. Returns `None` when there is nothing
/// to place or the container has no area.
#[must_use]
pub fn solve_dot_matrix(
    item_count: usize,
    container_width: f64,
    container_height: f64,
) -> Option<DotMatrixLayout> {
    if item_count == 0
        || !container_width.is_finite()
        || !container_height.is_finite()
        || container_width <= 0.0
        || container_height <= 0.0
    {
        return None;
    }

    let mut best = DotMatrixLayout {
        cols: 1,
        rows: item_count,
        dot_size: 0.0,
        dot_size_px: 0,
        gap: 0.0,
    };
    for cols in 1..=item_count {
        let rows = item_count.div_ceil(cols);
        let cell_width = container_width / cols as f64;
        let cell_height = container_height / rows as f64;
        let dot_size = cell_width.min(cell_height) / (1.0 + DOT_GAP_RATIO);
        if dot_size > best.dot_size {
            best.cols = cols;
            best.rows = rows;
            best.dot_size = dot_size;
        }
    }

    best.gap = best.dot_size * DOT_GAP_RATIO;
    best.dot_size_px = best.dot_size.floor() as u32;
    Some(best)
}
