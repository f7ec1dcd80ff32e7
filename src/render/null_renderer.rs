use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so tests can catch invalid styling before
/// a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_stage_group_count: usize,
    pub last_text_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_stage_group_count = frame.stages.len();
        self.last_text_count = frame.text_count();
        self.render_count += 1;
        Ok(())
    }
}
