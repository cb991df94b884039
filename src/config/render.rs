//! Render command configuration

use std::path::PathBuf;

use crate::common::{ConfigBuilder, missing_field};
use crate::error::DependencyPlotError;
use crate::graph::{NodeShape, RenderSpec};
use crate::layout::LayoutParams;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub seed: u64,
    pub iterations: usize,
    pub width: u32,
    pub height: u32,
    pub node_size: f64,
    pub shape: NodeShape,
    pub parallel: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }

    pub fn layout_params(&self) -> Result<LayoutParams, DependencyPlotError> {
        super::layout_params_for(self.iterations, self.width, self.height, self.parallel)
    }

    pub fn render_spec(&self) -> Result<RenderSpec, DependencyPlotError> {
        RenderSpec::builder()
            .with_canvas_size(self.width, self.height)
            .with_node_size(self.node_size)
            .with_shape(self.shape)
            .build()
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    seed: Option<u64>,
    iterations: Option<usize>,
    width: Option<u32>,
    height: Option<u32>,
    node_size: Option<f64>,
    shape: Option<NodeShape>,
    parallel: Option<bool>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_node_size(mut self, node_size: f64) -> Self {
        self.node_size = Some(node_size);
        self
    }

    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

impl ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, DependencyPlotError> {
        Ok(RenderOptions {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            seed: self.seed.ok_or_else(|| missing_field("seed"))?,
            iterations: self.iterations.ok_or_else(|| missing_field("iterations"))?,
            width: self.width.ok_or_else(|| missing_field("width"))?,
            height: self.height.ok_or_else(|| missing_field("height"))?,
            node_size: self.node_size.ok_or_else(|| missing_field("node_size"))?,
            shape: self.shape.unwrap_or_default(),
            parallel: self.parallel.ok_or_else(|| missing_field("parallel"))?,
        })
    }
}
