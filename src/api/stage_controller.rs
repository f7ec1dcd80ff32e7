use serde_json::Value;
use tracing::{trace, warn};

use crate::core::Stage;
use crate::render::Renderer;

use super::PipelineChart;

impl<R: Renderer> PipelineChart<R> {
    /// Appends a stage to the end of the pipeline.
    pub fn add_stage(&mut self, stage: Stage) -> &mut Self {
        self.stages.push(stage);
        trace!(count = self.stages.len(), "append stage");
        self
    }

    /// Appends an untyped `{ value, goal, color? }` payload.
    ///
    /// Returns `None` and leaves the stage list untouched when the payload
    /// does not have the stage shape.
    pub fn try_add_stage(&mut self, input: &Value) -> Option<&mut Self> {
        match Stage::from_json_value(input) {
            Ok(stage) => Some(self.add_stage(stage)),
            Err(err) => {
                warn!(error = %err, "rejecting stage input");
                None
            }
        }
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Value and goal edits are picked up by the next render.
    pub fn stages_mut(&mut self) -> &mut [Stage] {
        &mut self.stages
    }

    pub fn stage_mut(&mut self, index: usize) -> Option<&mut Stage> {
        self.stages.get_mut(index)
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}
