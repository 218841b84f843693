use tracing::{debug, trace};

use crate::core::{HeatmapGrid, Viewport, build_grid, position_month_labels, solve};
use crate::error::HeatmapResult;
use crate::render::Renderer;

use super::HeatmapEngine;

impl<R: Renderer> HeatmapEngine<R> {
    /// Rebuilds the grid for the current data and granularity, then relayouts.
    pub(super) fn rebuild_grid(&mut self) {
        let granularity = self.core.view.granularity();
        let locale = self.core.locale;
        self.core.grid = self
            .core
            .data
            .as_ref()
            .map(|data| build_grid(data.range, &data.index, granularity, locale));
        self.relayout();
    }

    /// Recomputes geometry and month label offsets from the current grid.
    pub(super) fn relayout(&mut self) {
        let granularity = self.core.view.granularity();
        let column_count = self
            .core
            .grid
            .as_ref()
            .map_or(0, HeatmapGrid::column_count);
        let geometry = solve(
            self.core.container,
            column_count,
            granularity,
            self.core.layout_options,
        );
        self.core.month_labels = self
            .core
            .grid
            .as_ref()
            .map(|grid| position_month_labels(&grid.markers, &geometry))
            .unwrap_or_default();
        self.core.geometry = geometry;
        let viewport_width = self.scroll_viewport_width();
        self.core.drag.reclamp(viewport_width, geometry.total_width);
        trace!(
            ?granularity,
            column_count,
            cell_size = geometry.cell_size,
            total_width = geometry.total_width,
            "heatmap relayout"
        );
    }

    /// Width of the horizontally scrollable grid area, right of the row labels.
    pub(super) fn scroll_viewport_width(&self) -> f64 {
        (f64::from(self.core.container.width) - self.core.layout_options.label_reserved_px)
            .max(0.0)
    }

    /// Records a container size change for the next animation frame.
    ///
    /// Returns `false` for a zero-sized container, which is ignored.
    pub fn notify_container_resized(&mut self, container: Viewport) -> bool {
        if !container.is_valid() {
            debug!(
                width = container.width,
                height = container.height,
                "ignoring zero-sized container"
            );
            return false;
        }
        self.core.scheduler.notify_resize(container);
        true
    }

    /// Asks for a geometry recomputation on the next animation frame.
    pub fn request_relayout(&mut self) {
        self.core.scheduler.request_relayout();
    }

    #[must_use]
    pub fn has_pending_layout(&self) -> bool {
        self.core.scheduler.is_pending()
    }

    /// Runs the coalesced layout pass, if any, and re-renders.
    ///
    /// Returns whether a pass ran.
    pub fn on_animation_frame(&mut self) -> HeatmapResult<bool> {
        let Some(pass) = self.core.scheduler.take() else {
            return Ok(false);
        };
        if let Some(container) = pass.container {
            self.core.container = container;
        }
        debug!(
            coalesced = pass.coalesced_requests,
            width = self.core.container.width,
            "running heatmap layout pass"
        );
        self.relayout();
        self.render()?;
        Ok(true)
    }
}
