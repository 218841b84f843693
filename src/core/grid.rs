use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::aggregate::aggregate_to_daily;
use crate::core::commit_index::{CommitIndex, day_key, hour_key};
use crate::core::locale::{Locale, commit_noun};
use crate::core::quantize::{IntensityLevel, QuantizePolicy, level};
use crate::core::{DateRange, Granularity};

/// One time slot of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub date: NaiveDate,
    /// Hour of day for daily-view cells, `None` for day cells.
    pub hour: Option<u32>,
    pub bucket_key: String,
    pub count: u32,
    pub level: IntensityLevel,
    /// `false` for padding cells that sit outside the requested window.
    pub in_range: bool,
}

impl GridCell {
    /// Hover text, present only when the slot holds commits.
    #[must_use]
    pub fn tooltip(&self, locale: Locale) -> Option<String> {
        if self.count == 0 {
            return None;
        }
        let day = self.date.day();
        let month = locale.month_name(self.date.month());
        let noun = commit_noun(self.count);
        Some(match self.hour {
            Some(hour) => format!(
                "{day} {month} {} {hour:02}h: {} {noun}",
                locale.hour_connector(),
                self.count
            ),
            None => format!("{day} {month}: {} {noun}", self.count),
        })
    }
}

/// A vertical strip of cells: one week of days or one day of hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridColumn {
    pub index: usize,
    /// Date of the first cell.
    pub start_date: NaiveDate,
    /// Set when a new month begins at this column and it is not the first one.
    pub month_start: bool,
    /// Inline for weekly columns; the 24 hour cells of a daily column spill
    /// to the heap.
    pub cells: SmallVec<[GridCell; 7]>,
}

/// Label anchored over the first column of a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthMarker {
    pub column_index: usize,
    pub year: i32,
    pub month: u32,
    pub label: String,
}

/// Positioned, quantized output of one grid build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapGrid {
    pub granularity: Granularity,
    pub range: DateRange,
    pub columns: Vec<GridColumn>,
    pub markers: Vec<MonthMarker>,
    pub policy: QuantizePolicy,
}

impl HeatmapGrid {
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.columns.iter().flat_map(|column| column.cells.iter())
    }

    /// Cell holding `bucket_key`, if the grid covers it.
    #[must_use]
    pub fn find_cell(&self, bucket_key: &str) -> Option<&GridCell> {
        self.cells().find(|cell| cell.bucket_key == bucket_key)
    }
}

/// Builds the calendar grid for `range` at the requested granularity.
///
/// A range whose start lies after `today` yields an empty grid.
#[must_use]
pub fn build_grid(
    range: DateRange,
    index: &CommitIndex,
    granularity: Granularity,
    locale: Locale,
) -> HeatmapGrid {
    let grid = match granularity {
        Granularity::Weekly => build_weekly(range, index, locale),
        Granularity::Daily => build_daily(range, index, locale),
    };
    debug!(
        ?granularity,
        columns = grid.columns.len(),
        markers = grid.markers.len(),
        "built heatmap grid"
    );
    grid
}

/// Week columns aligned on the Sunday on or before `range.since`.
#[must_use]
pub fn build_weekly(range: DateRange, index: &CommitIndex, locale: Locale) -> HeatmapGrid {
    let totals = aggregate_to_daily(index);
    let mut grid = empty_grid(range, Granularity::Weekly, QuantizePolicy::relative(1));
    if range.is_empty() {
        return grid;
    }

    let offset = u64::from(range.since.weekday().num_days_from_sunday());
    let Some(aligned_start) = range.since.checked_sub_days(chrono::Days::new(offset)) else {
        return grid;
    };
    let week_count = usize::try_from((range.today - aligned_start).num_days() / 7 + 1).unwrap_or(0);

    let mut days = aligned_start.iter_days();
    let mut tracker = MonthTracker::default();
    for column_index in 0..week_count {
        let mut cells = SmallVec::<[GridCell; 7]>::new();
        for date in days.by_ref().take(7) {
            let key = day_key(date);
            let count = totals.get(&key).copied().unwrap_or(0);
            cells.push(GridCell {
                date,
                hour: None,
                bucket_key: key,
                count,
                level: IntensityLevel::None,
                in_range: range.contains(date),
            });
        }
        let Some(start_date) = cells.first().map(|cell| cell.date) else {
            break;
        };
        let month_start = tracker.observe(start_date, column_index, locale, &mut grid.markers);
        grid.columns.push(GridColumn {
            index: column_index,
            start_date,
            month_start,
            cells,
        });
    }

    let max_count = grid
        .cells()
        .filter(|cell| cell.in_range)
        .map(|cell| cell.count)
        .max()
        .unwrap_or(0);
    let policy = QuantizePolicy::relative(max_count);
    for cell in grid.columns.iter_mut().flat_map(|column| column.cells.iter_mut()) {
        if cell.in_range {
            cell.level = level(cell.count, policy);
        }
    }
    grid.policy = policy;
    grid
}

/// One 24-hour column per day of the range, no week alignment.
#[must_use]
pub fn build_daily(range: DateRange, index: &CommitIndex, locale: Locale) -> HeatmapGrid {
    let policy = QuantizePolicy::Absolute;
    let mut grid = empty_grid(range, Granularity::Daily, policy);
    let mut tracker = MonthTracker::default();

    for (column_index, date) in range.since.iter_days().take(range.day_count()).enumerate() {
        let cells = (0..24)
            .map(|hour| {
                let key = hour_key(date, hour);
                let count = index.count(&key);
                GridCell {
                    date,
                    hour: Some(hour),
                    bucket_key: key,
                    count,
                    level: level(count, policy),
                    in_range: true,
                }
            })
            .collect();
        let month_start = tracker.observe(date, column_index, locale, &mut grid.markers);
        grid.columns.push(GridColumn {
            index: column_index,
            start_date: date,
            month_start,
            cells,
        });
    }
    grid
}

fn empty_grid(range: DateRange, granularity: Granularity, policy: QuantizePolicy) -> HeatmapGrid {
    HeatmapGrid {
        granularity,
        range,
        columns: Vec::new(),
        markers: Vec::new(),
        policy,
    }
}

#[derive(Debug, Default)]
struct MonthTracker {
    current: Option<(i32, u32)>,
}

impl MonthTracker {
    /// Emits a marker when `date` opens a new month; returns the separator flag.
    fn observe(
        &mut self,
        date: NaiveDate,
        column_index: usize,
        locale: Locale,
        markers: &mut Vec<MonthMarker>,
    ) -> bool {
        let month = (date.year(), date.month());
        if self.current == Some(month) {
            return false;
        }
        self.current = Some(month);
        markers.push(MonthMarker {
            column_index,
            year: month.0,
            month: month.1,
            label: locale.month_name(month.1).to_owned(),
        });
        column_index > 0
    }
}

#[cfg(test)]
mod tests {
    use super::{build_daily, build_weekly};
    use crate::core::{CommitIndex, DateRange, IntensityLevel, Locale};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn weekly_pads_leading_days_out_of_range() {
        // 2024-01-03 is a Wednesday.
        let range = DateRange::new(date(2024, 1, 3), date(2024, 1, 9));
        let index = CommitIndex::from_counts([("2024-01-01", 9), ("2024-01-04", 2)]);
        let grid = build_weekly(range, &index, Locale::En);

        assert_eq!(grid.columns.len(), 2);
        let first = &grid.columns[0];
        assert_eq!(first.start_date, date(2023, 12, 31));
        assert!(!first.cells[0].in_range);
        assert!(!first.cells[2].in_range);
        assert!(first.cells[3].in_range);
        // Out-of-range counts keep their value but never color the cell.
        assert_eq!(first.cells[1].count, 9);
        assert_eq!(first.cells[1].level, IntensityLevel::None);
        assert_eq!(first.cells[4].level, IntensityLevel::Peak);
    }

    #[test]
    fn weekly_marks_month_boundaries() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 2, 20));
        let grid = build_weekly(range, &CommitIndex::new(), Locale::En);

        let labels: Vec<(usize, &str)> = grid
            .markers
            .iter()
            .map(|marker| (marker.column_index, marker.label.as_str()))
            .collect();
        // Columns start on 2023-12-31, 2024-01-07, ..., 2024-02-04.
        assert_eq!(labels, vec![(0, "Dec"), (1, "Jan"), (5, "Feb")]);
        assert!(!grid.columns[0].month_start);
        assert!(grid.columns[1].month_start);
        assert!(grid.columns[5].month_start);
        assert!(!grid.columns[2].month_start);
    }

    #[test]
    fn daily_has_one_column_per_day() {
        let range = DateRange::new(date(2024, 2, 28), date(2024, 3, 2));
        let index = CommitIndex::from_counts([("2024-02-29-13", 2)]);
        let grid = build_daily(range, &index, Locale::Fr);

        assert_eq!(grid.columns.len(), 4);
        assert!(grid.columns.iter().all(|column| column.cells.len() == 24));
        let cell = grid.find_cell("2024-02-29-13").expect("cell");
        assert_eq!(cell.level, IntensityLevel::Medium);
        assert_eq!(cell.hour, Some(13));
        assert_eq!(grid.markers.len(), 2);
        assert_eq!(grid.markers[1].column_index, 2);
        assert_eq!(grid.markers[1].label, "Mars");
        assert!(grid.columns[2].month_start);
        assert!(!grid.columns[3].month_start);
    }

    #[test]
    fn tooltips_only_for_nonzero_counts() {
        let range = DateRange::new(date(2024, 3, 5), date(2024, 3, 5));
        let index = CommitIndex::from_counts([("2024-03-05-09", 1)]);
        let grid = build_daily(range, &index, Locale::En);

        let busy = grid.find_cell("2024-03-05-09").expect("busy");
        assert_eq!(busy.tooltip(Locale::En).as_deref(), Some("5 Mar at 09h: 1 commit"));
        let idle = grid.find_cell("2024-03-05-10").expect("idle");
        assert_eq!(idle.tooltip(Locale::En), None);

        let weekly = build_weekly(range, &index, Locale::Fr);
        let day = weekly.find_cell("2024-03-05").expect("day");
        assert_eq!(day.tooltip(Locale::Fr).as_deref(), Some("5 Mars: 1 commit"));
    }
}
