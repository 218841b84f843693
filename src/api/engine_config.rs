use serde::{Deserialize, Serialize};

use crate::core::{HeatmapLayoutOptions, Locale, Viewport};
use crate::error::{HeatmapError, HeatmapResult};
use crate::interaction::DragScrollConfig;

use super::HeatmapStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the
/// heatmap setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapEngineConfig {
    /// Initial content-box size of the hosting element.
    pub container: Viewport,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub layout: HeatmapLayoutOptions,
    #[serde(default)]
    pub style: HeatmapStyle,
    #[serde(default)]
    pub drag_scroll: DragScrollConfig,
}

impl HeatmapEngineConfig {
    #[must_use]
    pub fn new(container: Viewport) -> Self {
        Self {
            container,
            locale: Locale::default(),
            layout: HeatmapLayoutOptions::default(),
            style: HeatmapStyle::default(),
            drag_scroll: DragScrollConfig::default(),
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: HeatmapLayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: HeatmapStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_drag_scroll(mut self, drag_scroll: DragScrollConfig) -> Self {
        self.drag_scroll = drag_scroll;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> HeatmapResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> HeatmapResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub(super) fn validate(self) -> HeatmapResult<Self> {
        if !self.container.is_valid() {
            return Err(HeatmapError::InvalidViewport {
                width: self.container.width,
                height: self.container.height,
            });
        }
        self.layout.validate()?;
        self.style.validate()?;
        if !self.drag_scroll.speed.is_finite() || self.drag_scroll.speed <= 0.0 {
            return Err(HeatmapError::InvalidData(
                "drag scroll speed must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
