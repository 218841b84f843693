use crate::error::HeatmapResult;
use crate::render::Renderer;

use super::{HeatmapEngine, HeatmapSnapshot};

impl<R: Renderer> HeatmapEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> HeatmapSnapshot {
        HeatmapSnapshot {
            container: self.core.container,
            locale: self.core.locale,
            granularity: self.granularity(),
            pending_switch: self.pending_switch(),
            repo: self.repo().map(str::to_owned),
            range: self.date_range(),
            scroll_left: self.scroll_left(),
            geometry: self.core.geometry,
            month_labels: self.core.month_labels.clone(),
            row_labels: self.row_labels(),
            grid: self.core.grid.clone(),
            stats: self.stats().cloned(),
            stat_entries: self.stat_entries(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json(&self) -> HeatmapResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
