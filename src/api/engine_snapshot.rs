use serde::{Deserialize, Serialize};

use crate::core::{
    DateRange, DerivedStats, Granularity, HeatmapGrid, LayoutGeometry, Locale,
    MonthLabelPosition, StatEntry, Viewport,
};

use super::PendingSwitch;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSnapshot {
    pub container: Viewport,
    pub locale: Locale,
    pub granularity: Granularity,
    pub pending_switch: Option<PendingSwitch>,
    pub repo: Option<String>,
    pub range: Option<DateRange>,
    pub scroll_left: f64,
    pub geometry: LayoutGeometry,
    pub month_labels: Vec<MonthLabelPosition>,
    pub row_labels: Vec<String>,
    pub grid: Option<HeatmapGrid>,
    pub stats: Option<DerivedStats>,
    pub stat_entries: Vec<StatEntry>,
}
