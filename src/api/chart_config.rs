use serde::{Deserialize, Serialize};

use crate::core::Dimensions;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public chart configuration.
///
/// Every field is optional in serialized form and falls back to the defaults
/// below, so hosts can persist only what they override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineChartConfig {
    /// Width of the entire pipeline.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Height of the entire pipeline.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Horizontal depth of each chevron tip and notch.
    #[serde(default = "default_arrow_strength")]
    pub arrow_strength: f64,
    /// Pixels between neighbouring stages.
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Outline color once `value >= goal`.
    #[serde(default = "default_stage_complete_outline")]
    pub stage_complete_outline: Color,
    /// Outline color while `value < goal`.
    #[serde(default = "default_stage_incomplete_outline")]
    pub stage_incomplete_outline: Color,
    /// Fill color for stages without their own color.
    #[serde(default = "default_stage_fill_color")]
    pub stage_fill_color: Color,
    /// Expected stage count, used for sizing before any stage is added.
    #[serde(default)]
    pub stage_count: Option<usize>,
    #[serde(default = "default_stage_background_color")]
    pub stage_background_color: Color,
    #[serde(default = "default_outline_width")]
    pub outline_width: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
}

impl Default for PipelineChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            arrow_strength: default_arrow_strength(),
            padding: default_padding(),
            stage_complete_outline: default_stage_complete_outline(),
            stage_incomplete_outline: default_stage_incomplete_outline(),
            stage_fill_color: default_stage_fill_color(),
            stage_count: None,
            stage_background_color: default_stage_background_color(),
            outline_width: default_outline_width(),
            label_color: default_label_color(),
            label_font_size_px: default_label_font_size_px(),
        }
    }
}

impl PipelineChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_arrow_strength(mut self, arrow_strength: f64) -> Self {
        self.arrow_strength = arrow_strength;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_outline_colors(mut self, complete: Color, incomplete: Color) -> Self {
        self.stage_complete_outline = complete;
        self.stage_incomplete_outline = incomplete;
        self
    }

    #[must_use]
    pub fn with_stage_fill_color(mut self, color: Color) -> Self {
        self.stage_fill_color = color;
        self
    }

    #[must_use]
    pub fn with_stage_count(mut self, stage_count: usize) -> Self {
        self.stage_count = Some(stage_count);
        self
    }

    #[must_use]
    pub fn with_stage_background_color(mut self, color: Color) -> Self {
        self.stage_background_color = color;
        self
    }

    #[must_use]
    pub fn with_label_style(mut self, color: Color, font_size_px: f64) -> Self {
        self.label_color = color;
        self.label_font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_outline_width(mut self, outline_width: f64) -> Self {
        self.outline_width = outline_width;
        self
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Outline color for a stage in the given completion state.
    #[must_use]
    pub fn outline_color(&self, complete: bool) -> Color {
        if complete {
            self.stage_complete_outline
        } else {
            self.stage_incomplete_outline
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }
}

fn default_width() -> f64 {
    1000.0
}

fn default_height() -> f64 {
    75.0
}

fn default_arrow_strength() -> f64 {
    20.0
}

fn default_padding() -> f64 {
    10.0
}

fn default_stage_complete_outline() -> Color {
    Color::rgb(80.0 / 255.0, 170.0 / 255.0, 56.0 / 255.0)
}

fn default_stage_incomplete_outline() -> Color {
    Color::rgb(236.0 / 255.0, 236.0 / 255.0, 236.0 / 255.0)
}

fn default_stage_fill_color() -> Color {
    Color::rgb(1.0, 0.0, 1.0)
}

fn default_stage_background_color() -> Color {
    Color::rgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0)
}

fn default_outline_width() -> f64 {
    1.0
}

fn default_label_color() -> Color {
    Color::rgb(51.0 / 255.0, 51.0 / 255.0, 51.0 / 255.0)
}

fn default_label_font_size_px() -> f64 {
    14.0
}
