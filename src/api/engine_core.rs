use crate::core::{
    CommitIndex, DateRange, DerivedStats, HeatmapGrid, HeatmapLayoutOptions, LayoutGeometry,
    Locale, MonthLabelPosition, Viewport,
};
use crate::interaction::DragScrollState;

use super::{FetchGuard, HeatmapStyle, LayoutScheduler, ViewState};

/// Data currently shown by the engine.
#[derive(Debug, Clone)]
pub(super) struct LoadedData {
    pub(super) repo: Option<String>,
    pub(super) index: CommitIndex,
    pub(super) range: DateRange,
    pub(super) stats: DerivedStats,
}

/// Internal engine core state used by the public facade (`HeatmapEngine`).
pub(super) struct EngineCore {
    pub(super) container: Viewport,
    pub(super) locale: Locale,
    pub(super) layout_options: HeatmapLayoutOptions,
    pub(super) style: HeatmapStyle,
    pub(super) view: ViewState,
    pub(super) data: Option<LoadedData>,
    pub(super) grid: Option<HeatmapGrid>,
    pub(super) geometry: LayoutGeometry,
    pub(super) month_labels: Vec<MonthLabelPosition>,
    pub(super) drag: DragScrollState,
    pub(super) fetch_guard: FetchGuard,
    pub(super) scheduler: LayoutScheduler,
}
