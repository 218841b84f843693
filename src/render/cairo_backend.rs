use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};
use std::io::Write;

use crate::error::{HeatmapError, HeatmapResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an externally owned Cairo context, such as a
/// toolkit draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> HeatmapResult<()>;
}

/// Cairo + Pango renderer for heatmap frames.
///
/// `Renderer::render` paints into an owned offscreen image surface that can be
/// exported with [`CairoRenderer::write_png`].
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> HeatmapResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(HeatmapError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            background: Color::rgb(1.0, 1.0, 1.0),
            font_family: "Sans".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_background(&mut self, color: Color) -> HeatmapResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the offscreen surface as PNG.
    pub fn write_png<W: Write>(&self, out: &mut W) -> HeatmapResult<()> {
        self.surface
            .write_to_png(out)
            .map_err(|err| HeatmapError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn draw(&mut self, context: &Context, frame: &RenderFrame) -> HeatmapResult<()> {
        frame.validate()?;

        set_source(context, self.background);
        context
            .paint()
            .map_err(|err| backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for rect in &frame.rects {
            draw_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }
        for line in &frame.lines {
            draw_line(context, *line)?;
            stats.lines_drawn += 1;
        }
        for text in &frame.texts {
            draw_text(context, text, &self.font_family);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> HeatmapResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| backend_error("failed to create cairo context", err))?;
        self.draw(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> HeatmapResult<()> {
        self.draw(context, frame)
    }
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> HeatmapResult<()> {
    rounded_rect_path(context, rect);
    set_source(context, rect.fill_color);
    if rect.border_width <= 0.0 {
        return context
            .fill()
            .map_err(|err| backend_error("failed to fill cell", err));
    }
    context
        .fill_preserve()
        .map_err(|err| backend_error("failed to fill cell", err))?;
    set_source(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke cell border", err))
}

fn draw_line(context: &Context, line: LinePrimitive) -> HeatmapResult<()> {
    set_source(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke separator", err))
}

/// Text is anchored on its vertical center at `text.y`.
fn draw_text(context: &Context, text: &TextPrimitive, font_family: &str) {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("{font_family} {}px", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width, height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(width) / 2.0,
        TextHAlign::Right => text.x - f64::from(width),
    };
    set_source(context, text.color);
    context.move_to(x, text.y - f64::from(height) / 2.0);
    pangocairo::functions::show_layout(context, &layout);
}

fn rounded_rect_path(context: &Context, rect: RectPrimitive) {
    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    if radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);
    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn backend_error(prefix: &str, err: cairo::Error) -> HeatmapError {
    HeatmapError::InvalidData(format!("{prefix}: {err}"))
}
