use std::fmt::{self, Write};

use crate::core::{Silhouette, StageKind};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, StageGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub clip_paths_written: usize,
    pub stage_groups_written: usize,
}

/// Serializes frames into a standalone SVG document.
///
/// Each silhouette becomes one `<clipPath>` in `<defs>`; stage groups clip to
/// it by id and draw their outline with a `<use>` of the same path. Every
/// render replaces the previous document; a render that fails leaves the
/// document empty.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Document produced by the last render, empty before the first one.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.document.clear();
        self.last_stats = SvgRenderStats::default();
        frame.validate()?;

        let mut out = String::new();
        let stats = write_document(&mut out, frame)
            .map_err(|err| ChartError::Backend(format!("failed to write svg document: {err}")))?;

        self.document = out;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_document(out: &mut String, frame: &RenderFrame) -> Result<SvgRenderStats, fmt::Error> {
    let mut stats = SvgRenderStats::default();
    let surface = xml_escape(&frame.surface_id);

    writeln!(
        out,
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" id="{surface}" width="{}" height="{}">"##,
        frame.dimensions.width, frame.dimensions.height,
    )?;

    if let Some(silhouettes) = &frame.silhouettes {
        writeln!(out, "  <defs>")?;
        for kind in StageKind::ALL {
            write_clip_path(out, silhouettes.get(kind))?;
            stats.clip_paths_written += 1;
        }
        writeln!(out, "  </defs>")?;
    }

    for stage in &frame.stages {
        write_stage_group(out, &surface, stage)?;
        stats.stage_groups_written += 1;
    }

    writeln!(out, "</svg>")?;
    Ok(stats)
}

fn write_clip_path(out: &mut String, silhouette: &Silhouette) -> fmt::Result {
    let kind = silhouette.kind().as_str();
    writeln!(
        out,
        r##"    <clipPath id="clip-stage-{kind}"><path id="path-stage-{kind}" d="{}"/></clipPath>"##,
        path_data(silhouette),
    )
}

fn write_stage_group(out: &mut String, surface: &str, stage: &StageGroup) -> fmt::Result {
    let kind = stage.clip_kind().as_str();
    let placement = stage.placement;

    writeln!(
        out,
        r##"  <g id="{surface}stage{}group" clip-path="url(#clip-stage-{kind})" transform="translate({},{})">"##,
        stage.number, placement.x_offset, placement.y_offset,
    )?;

    for (rect, class) in [
        (stage.background, "stage-background"),
        (stage.fill, "stage-fill"),
    ] {
        writeln!(
            out,
            r##"    <rect x="{}" y="{}" width="{}" height="{}" class="{class}" style="fill:{}"/>"##,
            rect.x, rect.y, rect.width, rect.height, rect.fill_color,
        )?;
    }

    writeln!(
        out,
        r##"    <use xlink:href="#path-stage-{kind}" class="stage-mask" style="fill:none;stroke:{};stroke-width:{}"/>"##,
        stage.outline.stroke_color, stage.outline.stroke_width,
    )?;

    let label = &stage.label;
    writeln!(
        out,
        r##"    <text x="{}" y="{}" class="stage-text" text-anchor="middle" dominant-baseline="central" font-size="{}" style="fill:{}">{}</text>"##,
        label.x,
        label.y,
        label.font_size_px,
        label.color,
        xml_escape(&label.text),
    )?;

    writeln!(out, "  </g>")
}

/// `M x,y x,y ... z` with every vertex listed, matching a closed polyline.
fn path_data(silhouette: &Silhouette) -> String {
    let points: Vec<String> = silhouette
        .vertices()
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect();
    format!("M {} z", points.join(" "))
}

fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
