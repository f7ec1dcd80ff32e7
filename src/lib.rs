//! pipeline-chart: chevron pipeline visualization.
//!
//! An ordered sequence of stages is drawn left to right as interlocking
//! arrow panels. Each panel is filled in proportion to `value / goal` and
//! outlined according to whether the stage reached its goal.
//!
//! The crate is split into pure layout geometry (`core`), a backend-agnostic
//! scene plus renderers (`render`), and the chart model that ties them
//! together (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PipelineChart, PipelineChartConfig, create_chart};
pub use error::{ChartError, ChartResult};
