mod chart;
mod chart_config;
mod render_coordinator;
mod render_frame_builder;
mod stage_controller;

pub use chart::{PipelineChart, create_chart};
pub use chart_config::PipelineChartConfig;
