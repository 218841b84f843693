use serde::{Deserialize, Serialize};

use crate::core::IntensityLevel;
use crate::error::{HeatmapError, HeatmapResult};
use crate::render::Color;

/// Visual style of a rendered heatmap frame.
///
/// The engine does not own the theme: hosts replace this wholesale when their
/// theme changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapStyle {
    /// Fill color per intensity level, index 0 for empty cells.
    pub level_colors: [Color; 5],
    /// Opacity multiplier of cells outside the requested window.
    pub out_of_range_opacity: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    pub separator_color: Color,
    pub separator_width_px: f64,
    /// Height of the month label band above the grid.
    pub month_row_height_px: f64,
    /// Space between a row label and the first column.
    pub row_label_padding_px: f64,
    pub cell_corner_radius_px: f64,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            level_colors: [
                Color::rgb8(0xeb, 0xed, 0xf0),
                Color::rgb8(0x9b, 0xe9, 0xa8),
                Color::rgb8(0x40, 0xc4, 0x63),
                Color::rgb8(0x30, 0xa1, 0x4e),
                Color::rgb8(0x21, 0x6e, 0x39),
            ],
            out_of_range_opacity: 0.3,
            label_color: Color::rgb8(0x57, 0x60, 0x6a),
            label_font_size_px: 10.0,
            separator_color: Color::rgb8(0xd0, 0xd7, 0xde),
            separator_width_px: 1.0,
            month_row_height_px: 16.0,
            row_label_padding_px: 6.0,
            cell_corner_radius_px: 2.0,
        }
    }
}

impl HeatmapStyle {
    #[must_use]
    pub fn level_color(&self, level: IntensityLevel) -> Color {
        self.level_colors[usize::from(level.as_u8())]
    }

    pub fn validate(self) -> HeatmapResult<Self> {
        for color in self.level_colors {
            color.validate()?;
        }
        self.label_color.validate()?;
        self.separator_color.validate()?;

        if !self.out_of_range_opacity.is_finite()
            || !(0.0..=1.0).contains(&self.out_of_range_opacity)
        {
            return Err(HeatmapError::InvalidData(
                "out-of-range opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        for (value, name) in [
            (self.label_font_size_px, "label_font_size_px"),
            (self.separator_width_px, "separator_width_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(HeatmapError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        for (value, name) in [
            (self.month_row_height_px, "month_row_height_px"),
            (self.row_label_padding_px, "row_label_padding_px"),
            (self.cell_corner_radius_px, "cell_corner_radius_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(HeatmapError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}
