use tracing::trace;

use crate::error::HeatmapResult;
use crate::render::Renderer;

use super::engine_core::EngineCore;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// View state controller consumed by host applications.
///
/// `HeatmapEngine` owns the granularity, the current commit index and date
/// range, the derived grid and geometry, the pending daily-view switch and the
/// fetch generation counter. Every transition rebuilds the grid and replaces
/// the rendered frame wholesale.
pub struct HeatmapEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> HeatmapEngine<R> {
    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> HeatmapResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        trace!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "rendered heatmap frame"
        );
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> HeatmapResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
