use crate::core::{Dimensions, SilhouetteSet, StageKind, StagePlacement};
use crate::error::ChartResult;
use crate::render::{OutlinePrimitive, RectPrimitive, TextPrimitive};

/// Everything drawn for one stage, in stage-local coordinates.
///
/// Backends translate the group by its placement offset and clip it to the
/// silhouette of `placement.kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct StageGroup {
    /// 1-based position in the pipeline.
    pub number: usize,
    pub placement: StagePlacement,
    pub background: RectPrimitive,
    pub fill: RectPrimitive,
    pub outline: OutlinePrimitive,
    pub label: TextPrimitive,
}

impl StageGroup {
    #[must_use]
    pub fn clip_kind(&self) -> StageKind {
        self.placement.kind
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.background.validate()?;
        self.fill.validate()?;
        self.outline.validate()?;
        self.label.validate()
    }
}

/// Backend-agnostic scene for one pipeline draw pass.
///
/// Silhouettes are stored once and referenced by kind from every stage group.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface_id: String,
    pub dimensions: Dimensions,
    pub silhouettes: Option<SilhouetteSet>,
    pub stages: Vec<StageGroup>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface_id: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            surface_id: surface_id.into(),
            dimensions,
            silhouettes: None,
            stages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_silhouettes(mut self, silhouettes: SilhouetteSet) -> Self {
        self.silhouettes = Some(silhouettes);
        self
    }

    #[must_use]
    pub fn with_stage(mut self, stage: StageGroup) -> Self {
        self.stages.push(stage);
        self
    }

    /// Checks styling only. Geometry is passed through unchecked so that
    /// degenerate stage data still reaches the backend.
    pub fn validate(&self) -> ChartResult<()> {
        for stage in &self.stages {
            stage.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.stages.len()
    }
}
