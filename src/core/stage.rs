use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One segment of the pipeline: a current value measured against a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub value: f64,
    pub goal: f64,
    #[serde(
        default,
        deserialize_with = "deserialize_stage_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Color>,
}

impl Stage {
    #[must_use]
    pub const fn new(value: f64, goal: f64) -> Self {
        Self {
            value,
            goal,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Validates an untyped `{ value, goal, color? }` payload.
    ///
    /// `value` and `goal` must be numbers. A falsy `color` (`null`, `false`,
    /// `0`, `""`) means "use the chart fill color"; any other `color` must be
    /// a CSS color string.
    pub fn from_json_value(input: &Value) -> ChartResult<Self> {
        let Value::Object(fields) = input else {
            return Err(ChartError::InvalidStage(format!(
                "expected an object with `value` and `goal`, got `{input}`"
            )));
        };
        for required in ["value", "goal"] {
            match fields.get(required) {
                Some(Value::Number(_)) => {}
                Some(other) => {
                    return Err(ChartError::InvalidStage(format!(
                        "`{required}` must be a number, got `{other}`"
                    )));
                }
                None => {
                    return Err(ChartError::InvalidStage(format!(
                        "missing required field `{required}`"
                    )));
                }
            }
        }
        Self::deserialize(input).map_err(|e| ChartError::InvalidStage(e.to_string()))
    }

    /// Derived completion state; never stored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.value >= self.goal
    }

    /// `value / goal`, deliberately unclamped.
    ///
    /// Over-goal stages yield a fraction above 1 and a zero goal yields a
    /// non-finite fraction.
    #[must_use]
    pub fn fill_fraction(&self) -> f64 {
        self.value / self.goal
    }

    #[must_use]
    pub fn fill_width(&self, stage_width: f64) -> f64 {
        self.fill_fraction() * stage_width
    }

    /// Centered stage caption, e.g. `5/10`.
    ///
    /// Numbers print the way a browser stringifies them: `-0` as `0`,
    /// exponent form outside `[1e-6, 1e21)`, `Infinity` and `NaN`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", format_label_number(self.value), format_label_number(self.goal))
    }
}

fn deserialize_stage_color<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::String(text) if text.is_empty() => Ok(None),
        Value::Number(number) if number.as_f64() == Some(0.0) => Ok(None),
        Value::String(text) => Color::from_css(&text).map(Some).map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "stage color must be a css color string, got `{other}`"
        ))),
    }
}

fn format_label_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exponent_form = format!("{value:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}
