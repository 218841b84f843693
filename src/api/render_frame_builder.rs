use crate::error::HeatmapResult;
use crate::render::{
    LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::HeatmapEngine;

impl<R: Renderer> HeatmapEngine<R> {
    /// Materializes backend-agnostic primitives for one draw pass.
    ///
    /// Cells sit right of the row label area and below the month band,
    /// translated by the scroll offset. Columns and month labels that fall
    /// outside the visible grid area are culled.
    pub fn build_render_frame(&self) -> HeatmapResult<RenderFrame> {
        let container = self.core.container;
        let mut frame = RenderFrame::new(container);
        let Some(grid) = self.core.grid.as_ref().filter(|grid| !grid.is_empty()) else {
            return Ok(frame);
        };

        let style = self.core.style;
        let geometry = self.core.geometry;
        let origin_x = self.core.layout_options.label_reserved_px;
        let origin_y = style.month_row_height_px;
        let scroll_left = self.core.drag.scroll_left();
        let right = f64::from(container.width);
        let cell_size = geometry.cell_size;
        let grid_bottom = origin_y + geometry.total_height - geometry.gap;

        for column in &grid.columns {
            let x = origin_x + geometry.column_x(column.index) - scroll_left;
            if x + cell_size <= origin_x || x >= right {
                continue;
            }
            if column.month_start {
                let separator_x = x - geometry.gap / 2.0;
                frame = frame.with_line(LinePrimitive::new(
                    separator_x,
                    origin_y,
                    separator_x,
                    grid_bottom,
                    style.separator_width_px,
                    style.separator_color,
                ));
            }
            for (row, cell) in column.cells.iter().enumerate() {
                let mut fill = style.level_color(cell.level);
                if !cell.in_range {
                    fill = fill.with_opacity(style.out_of_range_opacity);
                }
                frame = frame.with_rect(
                    RectPrimitive::new(
                        x,
                        origin_y + geometry.row_y(row),
                        cell_size,
                        cell_size,
                        fill,
                    )
                    .with_corner_radius(style.cell_corner_radius_px),
                );
            }
        }

        for label in &self.core.month_labels {
            let x = origin_x + label.left_px - scroll_left;
            if x < origin_x || x >= right {
                continue;
            }
            frame = frame.with_text(TextPrimitive::new(
                label.label.clone(),
                x,
                origin_y / 2.0,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Left,
            ));
        }

        let label_x = (origin_x - style.row_label_padding_px).max(0.0);
        for (row, text) in self.row_labels().into_iter().enumerate() {
            frame = frame.with_text(TextPrimitive::new(
                text,
                label_x,
                origin_y + geometry.row_y(row) + cell_size / 2.0,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Right,
            ));
        }

        frame.validate()?;
        Ok(frame)
    }
}
