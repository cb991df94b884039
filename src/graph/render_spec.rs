//! Presentation parameters for the renderer

use crate::constants::render as defaults;
use crate::error::DependencyPlotError;
use crate::graph::EntityCategory;

/// Marker drawn for each node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NodeShape {
    #[default]
    Square,
    Circle,
}

/// Fixed presentation parameters for one render
#[derive(Debug, Clone)]
pub struct RenderSpec {
    pub shape: NodeShape,
    /// Side length (square) or diameter (circle) of a node marker in pixels
    pub node_size: f64,
    pub width: u32,
    pub height: u32,
    pub margin: f64,
    pub font_size: f64,
    pub base_fill: String,
    pub derived_fill: String,
    pub edge_stroke: String,
    pub label_fill: String,
    pub background: String,
}

impl Default for RenderSpec {
    fn default() -> Self {
        Self {
            shape: NodeShape::Square,
            node_size: defaults::DEFAULT_NODE_SIZE,
            width: defaults::DEFAULT_WIDTH,
            height: defaults::DEFAULT_HEIGHT,
            margin: defaults::DEFAULT_MARGIN,
            font_size: defaults::DEFAULT_FONT_SIZE,
            base_fill: defaults::BASE_FILL.to_string(),
            derived_fill: defaults::DERIVED_FILL.to_string(),
            edge_stroke: defaults::EDGE_STROKE.to_string(),
            label_fill: defaults::LABEL_FILL.to_string(),
            background: defaults::BACKGROUND.to_string(),
        }
    }
}

impl RenderSpec {
    pub fn builder() -> RenderSpecBuilder {
        RenderSpecBuilder::new()
    }

    /// Fill color for a node category
    pub fn fill_for(&self, category: EntityCategory) -> &str {
        match category {
            EntityCategory::Base => &self.base_fill,
            EntityCategory::Derived => &self.derived_fill,
        }
    }
}

/// Builder that starts from the defaults and validates the result
#[derive(Default)]
pub struct RenderSpecBuilder {
    spec: RenderSpec,
}

impl RenderSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.spec.shape = shape;
        self
    }

    pub fn with_node_size(mut self, node_size: f64) -> Self {
        self.spec.node_size = node_size;
        self
    }

    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.spec.width = width;
        self.spec.height = height;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.spec.margin = margin;
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.spec.font_size = font_size;
        self
    }

    pub fn with_base_fill(mut self, color: impl Into<String>) -> Self {
        self.spec.base_fill = color.into();
        self
    }

    pub fn with_derived_fill(mut self, color: impl Into<String>) -> Self {
        self.spec.derived_fill = color.into();
        self
    }
}

impl crate::common::ConfigBuilder for RenderSpecBuilder {
    type Config = RenderSpec;

    fn build(self) -> Result<Self::Config, DependencyPlotError> {
        let spec = self.spec;

        if spec.width == 0 || spec.height == 0 {
            return Err(DependencyPlotError::ConfigurationError {
                message: format!(
                    "Canvas size must be non-zero, got {}x{}",
                    spec.width, spec.height
                ),
            });
        }

        for (field, value) in [
            ("node_size", spec.node_size),
            ("font_size", spec.font_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DependencyPlotError::ConfigurationError {
                    message: format!("{field} must be a positive number, got {value}"),
                });
            }
        }

        if !spec.margin.is_finite() || spec.margin < 0.0 {
            return Err(DependencyPlotError::ConfigurationError {
                message: format!("margin must not be negative, got {}", spec.margin),
            });
        }

        Ok(spec)
    }
}
