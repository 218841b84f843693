use crate::core::GridCell;
use crate::error::HeatmapResult;
use crate::interaction::DragMode;
use crate::render::Renderer;

use super::HeatmapEngine;

impl<R: Renderer> HeatmapEngine<R> {
    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.core.drag.mode()
    }

    pub fn on_pointer_down(&mut self, page_x: f64) {
        self.core.drag.on_pointer_down(page_x);
    }

    /// Scrolls the grid while dragging; re-renders when the offset moved.
    pub fn on_pointer_move(&mut self, page_x: f64) -> HeatmapResult<bool> {
        let before = self.core.drag.scroll_left();
        let width = self.scroll_viewport_width();
        let content = self.core.geometry.total_width;
        match self.core.drag.on_pointer_move(page_x, width, content) {
            Some(after) if after != before => {
                self.render()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.core.drag.on_pointer_up();
    }

    pub fn set_scroll_left(&mut self, scroll_left: f64) -> HeatmapResult<()> {
        let width = self.scroll_viewport_width();
        let content = self.core.geometry.total_width;
        self.core.drag.set_scroll_left(scroll_left, width, content);
        self.render()
    }

    /// Cell under the container-relative point `(x, y)`.
    ///
    /// Points over the row labels, the month band or a gap hit nothing.
    #[must_use]
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&GridCell> {
        let grid = self.core.grid.as_ref()?;
        let geometry = self.core.geometry;
        if !x.is_finite() || !y.is_finite() || geometry.column_pitch <= 0.0 {
            return None;
        }
        let origin_x = self.core.layout_options.label_reserved_px;
        if x < origin_x {
            return None;
        }
        let local_x = x - origin_x + self.core.drag.scroll_left();
        let local_y = y - self.core.style.month_row_height_px;
        if local_y < 0.0 {
            return None;
        }

        let column_index = (local_x / geometry.column_pitch).floor() as usize;
        let row_index = (local_y / geometry.column_pitch).floor() as usize;
        if local_x - geometry.column_x(column_index) >= geometry.cell_size
            || local_y - geometry.row_y(row_index) >= geometry.cell_size
        {
            return None;
        }
        grid.columns.get(column_index)?.cells.get(row_index)
    }

    /// Hover text of the cell under `(x, y)`, present only for non-empty slots.
    #[must_use]
    pub fn tooltip_at(&self, x: f64, y: f64) -> Option<String> {
        self.cell_at(x, y)?.tooltip(self.core.locale)
    }
}
