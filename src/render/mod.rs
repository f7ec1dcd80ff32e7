mod css_color;
mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::{RenderFrame, StageGroup};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, OutlinePrimitive, RectPrimitive, TextPrimitive};
pub use svg_renderer::{SvgRenderStats, SvgRenderer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` and must
/// replace whatever they drew for the previous frame.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
