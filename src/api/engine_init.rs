use tracing::debug;

use crate::core::solve;
use crate::error::HeatmapResult;
use crate::interaction::DragScrollState;
use crate::render::Renderer;

use super::{
    FetchGuard, HeatmapEngine, HeatmapEngineConfig, LayoutScheduler, ViewState,
    engine_core::EngineCore,
};

impl<R: Renderer> HeatmapEngine<R> {
    /// Creates an engine in weekly mode with no data loaded.
    pub fn new(renderer: R, config: HeatmapEngineConfig) -> HeatmapResult<Self> {
        let config = config.validate()?;
        let view = ViewState::default();
        let geometry = solve(config.container, 0, view.granularity(), config.layout);
        debug!(
            width = config.container.width,
            height = config.container.height,
            locale = ?config.locale,
            "heatmap engine initialized"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                container: config.container,
                locale: config.locale,
                layout_options: config.layout,
                style: config.style,
                view,
                data: None,
                grid: None,
                geometry,
                month_labels: Vec::new(),
                drag: DragScrollState::with_config(config.drag_scroll),
                fetch_guard: FetchGuard::default(),
                scheduler: LayoutScheduler::default(),
            },
        })
    }
}
