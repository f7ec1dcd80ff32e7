use crate::core::Stage;
use crate::render::{Renderer, SvgRenderer};

use super::PipelineChartConfig;

/// Owns an ordered stage list and redraws it through a renderer.
///
/// Stage order is left-to-right flow order. Layout is recomputed from scratch
/// on every render and nothing derived is cached between passes.
pub struct PipelineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) surface_id: String,
    pub(super) config: PipelineChartConfig,
    pub(super) stages: Vec<Stage>,
}

/// Creates an SVG-backed chart drawing onto the surface `surface_id`.
#[must_use]
pub fn create_chart(
    surface_id: impl Into<String>,
    config: PipelineChartConfig,
) -> PipelineChart<SvgRenderer> {
    PipelineChart::new(SvgRenderer::new(), surface_id, config)
}

impl<R: Renderer> PipelineChart<R> {
    #[must_use]
    pub fn new(renderer: R, surface_id: impl Into<String>, config: PipelineChartConfig) -> Self {
        Self {
            renderer,
            surface_id: surface_id.into(),
            config,
            stages: Vec::new(),
        }
    }

    #[must_use]
    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    #[must_use]
    pub fn config(&self) -> &PipelineChartConfig {
        &self.config
    }

    /// Config edits take effect on the next render.
    pub fn config_mut(&mut self) -> &mut PipelineChartConfig {
        &mut self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Width each stage will be drawn with.
    ///
    /// Uses the actual stage count once stages exist and the configured
    /// `stage_count` hint before that. `None` when neither is available.
    #[must_use]
    pub fn stage_width(&self) -> Option<f64> {
        let count = match self.stages.len() {
            0 => self.config.stage_count.filter(|count| *count > 0)?,
            len => len,
        };
        Some(self.config.width / count as f64)
    }
}
