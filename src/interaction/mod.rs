use serde::{Deserialize, Serialize};

/// Pointer state of the horizontally scrollable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DragMode {
    #[default]
    Idle,
    Dragging,
}

/// Tuning for drag-to-scroll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragScrollConfig {
    /// Scroll distance per pixel of pointer travel.
    pub speed: f64,
}

impl Default for DragScrollConfig {
    fn default() -> Self {
        Self { speed: 1.5 }
    }
}

/// Drag-to-scroll tracker for a grid wider than its container.
///
/// Dragging to the right scrolls toward earlier columns. The scroll offset is
/// kept within `[0, content_width - viewport_width]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragScrollState {
    mode: DragMode,
    config: DragScrollConfig,
    start_x: f64,
    start_scroll_left: f64,
    scroll_left: f64,
}

impl DragScrollState {
    #[must_use]
    pub fn with_config(config: DragScrollConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(self) -> DragMode {
        self.mode
    }

    #[must_use]
    pub fn scroll_left(self) -> f64 {
        self.scroll_left
    }

    /// Largest valid scroll offset for the given extents.
    #[must_use]
    pub fn max_scroll(viewport_width: f64, content_width: f64) -> f64 {
        (content_width - viewport_width).max(0.0)
    }

    pub fn set_scroll_left(&mut self, value: f64, viewport_width: f64, content_width: f64) {
        if value.is_finite() {
            self.scroll_left = value.clamp(0.0, Self::max_scroll(viewport_width, content_width));
        }
    }

    pub fn on_pointer_down(&mut self, page_x: f64) {
        if !page_x.is_finite() {
            return;
        }
        self.mode = DragMode::Dragging;
        self.start_x = page_x;
        self.start_scroll_left = self.scroll_left;
    }

    /// Applies pointer travel; returns the new offset while a drag is active.
    pub fn on_pointer_move(
        &mut self,
        page_x: f64,
        viewport_width: f64,
        content_width: f64,
    ) -> Option<f64> {
        if self.mode != DragMode::Dragging || !page_x.is_finite() {
            return None;
        }
        let walk = (page_x - self.start_x) * self.config.speed;
        self.set_scroll_left(self.start_scroll_left - walk, viewport_width, content_width);
        Some(self.scroll_left)
    }

    pub fn on_pointer_up(&mut self) {
        self.mode = DragMode::Idle;
    }

    /// Keeps the offset valid after the content or container changed size.
    pub fn reclamp(&mut self, viewport_width: f64, content_width: f64) {
        self.set_scroll_left(self.scroll_left, viewport_width, content_width);
    }
}
