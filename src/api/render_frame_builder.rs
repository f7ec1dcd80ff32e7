use tracing::warn;

use crate::core::{PipelineLayout, Stage, StagePlacement};
use crate::render::{
    OutlinePrimitive, RectPrimitive, RenderFrame, Renderer, StageGroup, TextPrimitive,
};

use super::PipelineChart;

impl<R: Renderer> PipelineChart<R> {
    /// Builds the deterministic scene for the current config and stages
    /// without drawing it.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let dimensions = self.config.dimensions();
        if !dimensions.is_valid() {
            warn!(
                width = dimensions.width,
                height = dimensions.height,
                "pipeline dimensions are degenerate"
            );
        }

        let frame = RenderFrame::new(self.surface_id.clone(), dimensions);
        let layout = PipelineLayout::compute(
            dimensions,
            self.config.arrow_strength,
            self.config.padding,
            self.stages.len(),
        );
        let Some(silhouettes) = layout.silhouettes else {
            return frame;
        };

        let mut frame = frame.with_silhouettes(silhouettes);
        for (placement, stage) in layout.placements.iter().zip(&self.stages) {
            frame = frame.with_stage(self.build_stage_group(
                *placement,
                stage,
                layout.stage_width,
                layout.stage_height,
            ));
        }
        frame
    }

    fn build_stage_group(
        &self,
        placement: StagePlacement,
        stage: &Stage,
        stage_width: f64,
        stage_height: f64,
    ) -> StageGroup {
        let fill_width = stage.fill_width(stage_width);
        if !fill_width.is_finite() {
            warn!(
                index = placement.index,
                value = stage.value,
                goal = stage.goal,
                "stage fill width is not finite"
            );
        }

        StageGroup {
            number: placement.index + 1,
            placement,
            background: RectPrimitive::new(
                0.0,
                0.0,
                stage_width,
                stage_height,
                self.config.stage_background_color,
            ),
            fill: RectPrimitive::new(
                0.0,
                0.0,
                fill_width,
                stage_height,
                stage.color.unwrap_or(self.config.stage_fill_color),
            ),
            outline: OutlinePrimitive::new(
                placement.kind,
                self.config.outline_color(stage.is_complete()),
                self.config.outline_width,
            ),
            label: TextPrimitive::new(
                stage.label(),
                stage_width / 2.0,
                stage_height / 2.0,
                self.config.label_font_size_px,
                self.config.label_color,
            ),
        }
    }
}
