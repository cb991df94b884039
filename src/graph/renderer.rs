use std::io::Write;
use std::path::Path;

use miette::Result;
use petgraph::visit::EdgeRef;
use resvg::usvg::fontdb;
use resvg::{tiny_skia, usvg};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::constants::render::LABEL_FONT_FALLBACKS;
use crate::error::DependencyPlotError;
use crate::graph::{DependencyGraph, NodeShape, Position, RenderSpec};

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DependencyPlotError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DependencyPlotError::from)
    };
}

const ARROW_MARKER_ID: &str = "arrow";

/// Maps layout coordinates onto the canvas, keeping the aspect ratio
#[derive(Debug, Clone, Copy)]
struct Viewport {
    center_x: f64,
    center_y: f64,
    mid_x: f64,
    mid_y: f64,
    scale: f64,
}

impl Viewport {
    fn fit(points: &[Position], spec: &RenderSpec) -> Self {
        let width = f64::from(spec.width);
        let height = f64::from(spec.height);
        let inner_w = (width - 2.0 * spec.margin).max(1.0);
        let inner_h = (height - 2.0 * spec.margin).max(1.0);

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        if points.is_empty() {
            (min_x, min_y, max_x, max_y) = (0.0, 0.0, 0.0, 0.0);
        }

        let span_x = max_x - min_x;
        let span_y = max_y - min_y;
        let scale = match (span_x > f64::EPSILON, span_y > f64::EPSILON) {
            (true, true) => (inner_w / span_x).min(inner_h / span_y),
            (true, false) => inner_w / span_x,
            (false, true) => inner_h / span_y,
            (false, false) => 1.0,
        };

        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            mid_x: (min_x + max_x) / 2.0,
            mid_y: (min_y + max_y) / 2.0,
            scale,
        }
    }

    fn project(&self, p: Position) -> Position {
        Position::new(
            self.center_x + (p.x - self.mid_x) * self.scale,
            self.center_y + (p.y - self.mid_y) * self.scale,
        )
    }
}

/// Draws a laid-out dependency graph and exports it as a PNG
///
/// Every call to [`GraphRenderer::render`] owns its own SVG buffer, pixmap
/// and output file handle; nothing is shared between calls.
pub struct GraphRenderer {
    spec: RenderSpec,
}

impl GraphRenderer {
    pub fn new(spec: RenderSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &RenderSpec {
        &self.spec
    }

    /// Render the graph and write it as a PNG image to `output_path`
    ///
    /// The image is written to a temporary file next to `output_path` and
    /// renamed into place only after a successful flush.
    pub fn render(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        let png = self.render_png(graph)?;
        write_atomically(output_path, &png)?;

        debug!(
            path = %output_path.display(),
            bytes = png.len(),
            "wrote rendered graph"
        );
        Ok(())
    }

    /// Rasterize the graph into PNG bytes
    pub fn render_png(&self, graph: &DependencyGraph) -> Result<Vec<u8>> {
        let mut svg = Vec::new();
        self.render_svg(graph, &mut svg)?;

        let options = label_font_options();
        if graph.node_count() > 0 && options.fontdb.is_empty() {
            warn!("no system fonts found, node labels will be missing from the image");
        }

        let tree = usvg::Tree::from_data(&svg, &options).map_err(|err| {
            DependencyPlotError::RenderError {
                message: format!("failed to parse generated SVG: {err}"),
            }
        })?;

        let mut pixmap = tiny_skia::Pixmap::new(self.spec.width, self.spec.height).ok_or_else(
            || DependencyPlotError::RenderError {
                message: format!(
                    "failed to allocate {}x{} surface",
                    self.spec.width, self.spec.height
                ),
            },
        )?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let png = pixmap
            .encode_png()
            .map_err(|err| DependencyPlotError::RenderError {
                message: format!("failed to encode PNG output: {err}"),
            })?;

        Ok(png)
    }

    /// Write the diagram as an SVG document
    pub fn render_svg(&self, graph: &DependencyGraph, output: &mut dyn Write) -> Result<()> {
        let spec = &self.spec;

        let mut layout_points = Vec::with_capacity(graph.node_count());
        for node in graph.node_weights() {
            let pos = node
                .position()
                .ok_or_else(|| DependencyPlotError::GraphError {
                    message: format!("Node '{}' has no layout position", node.name()),
                })?;
            layout_points.push(pos);
        }

        let viewport = Viewport::fit(&layout_points, spec);
        let screen: Vec<Position> = layout_points
            .iter()
            .map(|&p| viewport.project(p))
            .collect();
        let half = spec.node_size / 2.0;

        writeln_out!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = spec.width,
            h = spec.height
        )?;
        writeln_out!(output, "  <defs>")?;
        writeln_out!(
            output,
            r#"    <marker id="{ARROW_MARKER_ID}" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="8" markerHeight="8" orient="auto-start-reverse">"#
        )?;
        writeln_out!(
            output,
            r#"      <path d="M 0 0 L 10 5 L 0 10 z" fill="{}"/>"#,
            spec.edge_stroke
        )?;
        writeln_out!(output, "    </marker>")?;
        writeln_out!(output, "  </defs>")?;
        writeln_out!(
            output,
            r#"  <rect class="background" x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            spec.width,
            spec.height,
            spec.background
        )?;

        // Edges go underneath the node markers
        for edge in graph.edge_references() {
            let from = screen[edge.source().index()];
            let to = screen[edge.target().index()];

            if edge.source() == edge.target() {
                writeln_out!(
                    output,
                    r#"  <path class="edge" d="M {:.2} {:.2} C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}" fill="none" stroke="{}" stroke-width="1.5" marker-end="url(#{ARROW_MARKER_ID})"/>"#,
                    from.x - half / 2.0,
                    from.y - half,
                    from.x - half,
                    from.y - 3.0 * half,
                    from.x + half,
                    from.y - 3.0 * half,
                    from.x + half / 2.0,
                    from.y - half,
                    spec.edge_stroke
                )?;
                continue;
            }

            let (start, end) = self.trim_to_markers(from, to);
            writeln_out!(
                output,
                r#"  <line class="edge" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1.5" marker-end="url(#{ARROW_MARKER_ID})"/>"#,
                start.x,
                start.y,
                end.x,
                end.y,
                spec.edge_stroke
            )?;
        }

        for (node, center) in graph.node_weights().zip(&screen) {
            let fill = spec.fill_for(node.category());
            match spec.shape {
                NodeShape::Square => writeln_out!(
                    output,
                    r#"  <rect class="node" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                    center.x - half,
                    center.y - half,
                    spec.node_size,
                    spec.node_size,
                    fill
                )?,
                NodeShape::Circle => writeln_out!(
                    output,
                    r#"  <circle class="node" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
                    center.x,
                    center.y,
                    half,
                    fill
                )?,
            }
        }

        for (node, center) in graph.node_weights().zip(&screen) {
            writeln_out!(
                output,
                r#"  <text class="label" x="{:.2}" y="{:.2}" dy="0.35em" text-anchor="middle" font-family="sans-serif" font-size="{}" fill="{}">{}</text>"#,
                center.x,
                center.y,
                spec.font_size,
                spec.label_fill,
                escape_xml(node.name())
            )?;
        }

        writeln_out!(output, "</svg>")?;
        Ok(())
    }

    /// Shorten a center-to-center segment so it starts and ends on the
    /// marker borders
    fn trim_to_markers(&self, from: Position, to: Position) -> (Position, Position) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let length = dx.hypot(dy);
        if length <= f64::EPSILON {
            return (from, to);
        }

        let (ux, uy) = (dx / length, dy / length);
        let half = self.spec.node_size / 2.0;
        let offset = match self.spec.shape {
            NodeShape::Square => half / ux.abs().max(uy.abs()),
            NodeShape::Circle => half,
        };

        if 2.0 * offset >= length {
            return (from, to);
        }

        (
            Position::new(from.x + ux * offset, from.y + uy * offset),
            Position::new(to.x - ux * offset, to.y - uy * offset),
        )
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), DependencyPlotError> {
    let to_error = |source: std::io::Error| DependencyPlotError::OutputWriteError {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on any early return removes it
    let mut file = NamedTempFile::new_in(dir).map_err(to_error)?;
    file.write_all(bytes).map_err(to_error)?;
    file.as_file_mut().flush().map_err(to_error)?;
    file.as_file().sync_all().map_err(to_error)?;
    file.persist(path).map_err(|err| to_error(err.error))?;
    Ok(())
}

/// Rasterizer options whose `sans-serif` family points at an installed face
///
/// fontdb maps `sans-serif` to Arial, which many hosts do not have; usvg then
/// silently drops every label.
fn label_font_options() -> usvg::Options<'static> {
    let mut options = usvg::Options::default();
    let db = options.fontdb_mut();
    db.load_system_fonts();

    let Some(family) = resolve_label_family(db) else {
        return options;
    };
    debug!(family = %family, "using font for node labels");
    db.set_sans_serif_family(family.clone());
    options.font_family = family;
    options
}

/// First family that can render labels: the configured `sans-serif` face,
/// then a list of common sans families, then any loaded face at all
fn resolve_label_family(db: &fontdb::Database) -> Option<String> {
    let resolves = |family: fontdb::Family<'_>| {
        db.query(&fontdb::Query {
            families: &[family],
            ..fontdb::Query::default()
        })
        .is_some()
    };

    if resolves(fontdb::Family::SansSerif) {
        return Some(db.family_name(&fontdb::Family::SansSerif).to_string());
    }

    LABEL_FONT_FALLBACKS
        .iter()
        .copied()
        .find(|name| resolves(fontdb::Family::Name(name)))
        .map(|name| name.to_string())
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        })
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
