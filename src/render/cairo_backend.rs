use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::Silhouette;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, StageGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub stage_groups_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::Backend(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        let Some(silhouettes) = &frame.silhouettes else {
            self.last_stats = stats;
            return Ok(());
        };

        for stage in &frame.stages {
            let silhouette = silhouettes.get(stage.clip_kind());
            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            context.translate(stage.placement.x_offset, stage.placement.y_offset);

            let drawn = draw_stage_group(context, silhouette, stage);

            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
            drawn?;

            stats.stage_groups_drawn += 1;
            stats.rects_drawn += 2;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_stage_group(
    context: &Context,
    silhouette: &Silhouette,
    stage: &StageGroup,
) -> ChartResult<()> {
    append_silhouette_path(context, silhouette);
    context.clip();

    fill_rect(context, stage.background)?;
    fill_rect(context, stage.fill)?;

    append_silhouette_path(context, silhouette);
    apply_color(context, stage.outline.stroke_color);
    context.set_line_width(stage.outline.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke stage outline", err))?;

    let label = &stage.label;
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", label.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&label.text);

    let (text_width, text_height) = layout.pixel_size();
    apply_color(context, label.color);
    context.move_to(
        label.x - f64::from(text_width) / 2.0,
        label.y - f64::from(text_height) / 2.0,
    );
    pangocairo::functions::show_layout(context, &layout);
    Ok(())
}

fn append_silhouette_path(context: &Context, silhouette: &Silhouette) {
    context.new_path();
    for (i, point) in silhouette.vertices().iter().enumerate() {
        if i == 0 {
            context.move_to(point.x, point.y);
        } else {
            context.line_to(point.x, point.y);
        }
    }
    context.close_path();
}

fn fill_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
