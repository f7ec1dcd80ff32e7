//! Pipeline layout geometry.
//!
//! Pure functions from chart dimensions and stage count to the three stage
//! silhouettes and the horizontal placement of every stage. Nothing here
//! touches a drawing surface.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Dimensions, Point};

/// Outline shape a stage is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Flat left edge, pointed right edge.
    Start,
    /// Notched left edge, pointed right edge.
    Middle,
    /// Notched left edge, flat right edge.
    End,
}

impl StageKind {
    /// Classifies the stage at `index` in a pipeline of `stage_count` stages.
    ///
    /// A single-stage pipeline is a `Start`, never an `End`.
    #[must_use]
    pub fn for_index(index: usize, stage_count: usize) -> Self {
        if index == 0 {
            Self::Start
        } else if stage_count > 1 && index == stage_count - 1 {
            Self::End
        } else {
            Self::Middle
        }
    }

    /// Short identifier used for clip and path ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "mid",
            Self::End => "end",
        }
    }

    pub const ALL: [Self; 3] = [Self::Start, Self::Middle, Self::End];
}

/// Closed polygon used as a stage clip boundary.
///
/// The closing edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    kind: StageKind,
    vertices: SmallVec<[Point; 6]>,
}

impl Silhouette {
    fn new(kind: StageKind, vertices: [Point; 6]) -> Self {
        Self {
            kind,
            vertices: SmallVec::from_buf(vertices),
        }
    }

    #[must_use]
    pub fn kind(&self) -> StageKind {
        self.kind
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Iterates every edge including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let count = self.vertices.len();
        (0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % count]))
    }
}

/// The three silhouettes of one render pass, shared by every stage of the
/// matching kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SilhouetteSet {
    pub start: Silhouette,
    pub mid: Silhouette,
    pub end: Silhouette,
}

impl SilhouetteSet {
    #[must_use]
    pub fn get(&self, kind: StageKind) -> &Silhouette {
        match kind {
            StageKind::Start => &self.start,
            StageKind::Middle => &self.mid,
            StageKind::End => &self.end,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Silhouette> {
        [&self.start, &self.mid, &self.end].into_iter()
    }
}

/// Builds the start, middle and end outlines for a stage box of
/// `width` x `height` with chevrons `arrow_strength` pixels deep.
#[must_use]
pub fn compute_silhouettes(width: f64, height: f64, arrow_strength: f64) -> SilhouetteSet {
    let mid = height / 2.0;
    let shoulder = width - arrow_strength;

    let start = Silhouette::new(
        StageKind::Start,
        [
            Point::new(0.0, 0.0),
            Point::new(0.0, mid),
            Point::new(0.0, height),
            Point::new(shoulder, height),
            Point::new(width, mid),
            Point::new(shoulder, 0.0),
        ],
    );
    let middle = Silhouette::new(
        StageKind::Middle,
        [
            Point::new(0.0, 0.0),
            Point::new(arrow_strength, mid),
            Point::new(0.0, height),
            Point::new(shoulder, height),
            Point::new(width, mid),
            Point::new(shoulder, 0.0),
        ],
    );
    let end = Silhouette::new(
        StageKind::End,
        [
            Point::new(0.0, 0.0),
            Point::new(arrow_strength, mid),
            Point::new(0.0, height),
            Point::new(width, height),
            Point::new(width, mid),
            Point::new(width, 0.0),
        ],
    );

    SilhouetteSet {
        start,
        mid: middle,
        end,
    }
}

/// Where one stage goes and which outline it uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StagePlacement {
    pub index: usize,
    pub kind: StageKind,
    pub x_offset: f64,
    pub y_offset: f64,
}

/// Computes the left-to-right placement of `stage_count` stages.
///
/// Every stage after the first is pulled left by `arrow_strength` per
/// preceding stage so its notch nests into the previous tip, then pushed
/// right by `padding` per preceding stage.
#[must_use]
pub fn compute_stage_placements(
    stage_count: usize,
    stage_width: f64,
    arrow_strength: f64,
    padding: f64,
) -> Vec<StagePlacement> {
    (0..stage_count)
        .map(|index| {
            let step = index as f64;
            let mut x_offset = step * stage_width;
            if index > 0 {
                x_offset -= arrow_strength * step;
            }
            x_offset += padding * step;

            StagePlacement {
                index,
                kind: StageKind::for_index(index, stage_count),
                x_offset,
                y_offset: 0.0,
            }
        })
        .collect()
}

/// Full layout result for one render pass.
///
/// Recomputed from scratch on every render and never retained by the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineLayout {
    pub stage_width: f64,
    pub stage_height: f64,
    /// `None` when there are no stages to draw.
    pub silhouettes: Option<SilhouetteSet>,
    pub placements: Vec<StagePlacement>,
}

impl PipelineLayout {
    /// Lays out `stage_count` stages across `total`.
    ///
    /// Stage width is `total.width / stage_count`; padding is not taken out
    /// of the divisor, so the drawn pipeline is `padding * (stage_count - 1)`
    /// wider than `total.width`.
    #[must_use]
    pub fn compute(
        total: Dimensions,
        arrow_strength: f64,
        padding: f64,
        stage_count: usize,
    ) -> Self {
        if stage_count == 0 {
            return Self {
                stage_width: 0.0,
                stage_height: total.height,
                silhouettes: None,
                placements: Vec::new(),
            };
        }

        let stage_width = total.width / stage_count as f64;
        let stage_height = total.height;

        Self {
            stage_width,
            stage_height,
            silhouettes: Some(compute_silhouettes(stage_width, stage_height, arrow_strength)),
            placements: compute_stage_placements(stage_count, stage_width, arrow_strength, padding),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Right edge of the last stage, i.e. the horizontal extent actually drawn.
    #[must_use]
    pub fn drawn_width(&self) -> f64 {
        self.placements
            .last()
            .map_or(0.0, |last| last.x_offset + self.stage_width)
    }
}
