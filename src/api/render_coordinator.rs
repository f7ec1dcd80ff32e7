use tracing::debug;

use crate::error::ChartResult;
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::PipelineChart;

impl<R: Renderer> PipelineChart<R> {
    /// Redraws the whole pipeline, replacing the previous output.
    ///
    /// An empty stage list renders an empty surface.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        debug!(
            surface = %self.surface_id,
            stages = frame.stages.len(),
            "render pipeline"
        );
        self.renderer.render(&frame)
    }
}

#[cfg(feature = "cairo-backend")]
impl<R: Renderer + CairoContextRenderer> PipelineChart<R> {
    /// Redraws the pipeline into a host-owned Cairo context.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()> {
        let frame = self.build_frame();
        debug!(
            surface = %self.surface_id,
            stages = frame.stages.len(),
            "render pipeline on cairo context"
        );
        self.renderer.render_on_cairo_context(context, &frame)
    }
}
