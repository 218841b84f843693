use crate::core::{
    CommitIndex, DateRange, DerivedStats, Granularity, HeatmapGrid, HeatmapLayoutOptions,
    LayoutGeometry, Locale, MonthLabelPosition, StatEntry, Viewport, hour_label,
};
use crate::error::HeatmapResult;
use crate::render::Renderer;

use super::{HeatmapEngine, HeatmapStyle, PendingSwitch};

impl<R: Renderer> HeatmapEngine<R> {
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.core.view.granularity()
    }

    /// Daily-view switch waiting on authentication, if any.
    #[must_use]
    pub fn pending_switch(&self) -> Option<PendingSwitch> {
        self.core.view.pending()
    }

    #[must_use]
    pub fn container(&self) -> Viewport {
        self.core.container
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.core.locale
    }

    /// Switches the display language, rebuilds labels and re-renders.
    pub fn set_locale(&mut self, locale: Locale) -> HeatmapResult<()> {
        if self.core.locale == locale {
            return Ok(());
        }
        self.core.locale = locale;
        self.rebuild_grid();
        self.render()
    }

    #[must_use]
    pub fn style(&self) -> HeatmapStyle {
        self.core.style
    }

    /// Replaces the style wholesale; the next `render` picks it up.
    pub fn set_style(&mut self, style: HeatmapStyle) -> HeatmapResult<()> {
        self.core.style = style.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn layout_options(&self) -> HeatmapLayoutOptions {
        self.core.layout_options
    }

    pub fn set_layout_options(&mut self, options: HeatmapLayoutOptions) -> HeatmapResult<()> {
        self.core.layout_options = options.validate()?;
        self.relayout();
        self.render()
    }

    /// Grid of the current data, `None` before the first load.
    #[must_use]
    pub fn grid(&self) -> Option<&HeatmapGrid> {
        self.core.grid.as_ref()
    }

    #[must_use]
    pub fn geometry(&self) -> LayoutGeometry {
        self.core.geometry
    }

    #[must_use]
    pub fn month_labels(&self) -> &[MonthLabelPosition] {
        &self.core.month_labels
    }

    /// Labels of the grid rows: weekday names or `00h`..`23h`.
    #[must_use]
    pub fn row_labels(&self) -> Vec<String> {
        match self.granularity() {
            Granularity::Weekly => (0..7)
                .map(|day| self.core.locale.weekday_name(day).to_owned())
                .collect(),
            Granularity::Daily => (0..24).map(hour_label).collect(),
        }
    }

    #[must_use]
    pub fn repo(&self) -> Option<&str> {
        self.core.data.as_ref().and_then(|data| data.repo.as_deref())
    }

    #[must_use]
    pub fn date_range(&self) -> Option<DateRange> {
        self.core.data.as_ref().map(|data| data.range)
    }

    #[must_use]
    pub fn commit_index(&self) -> Option<&CommitIndex> {
        self.core.data.as_ref().map(|data| &data.index)
    }

    #[must_use]
    pub fn stats(&self) -> Option<&DerivedStats> {
        self.core.data.as_ref().map(|data| &data.stats)
    }

    /// Stats panel tiles for the current data.
    #[must_use]
    pub fn stat_entries(&self) -> Vec<StatEntry> {
        self.stats()
            .map(DerivedStats::display_entries)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn scroll_left(&self) -> f64 {
        self.core.drag.scroll_left()
    }
}
