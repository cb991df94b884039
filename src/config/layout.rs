//! Layout command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::{ConfigBuilder, missing_field};
use crate::error::DependencyPlotError;
use crate::layout::LayoutParams;

#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub seed: u64,
    pub iterations: usize,
    pub width: u32,
    pub height: u32,
    pub parallel: bool,
}

impl LayoutOptions {
    pub fn builder() -> LayoutOptionsBuilder {
        LayoutOptionsBuilder::new()
    }

    pub fn layout_params(&self) -> Result<LayoutParams, DependencyPlotError> {
        super::layout_params_for(self.iterations, self.width, self.height, self.parallel)
    }
}

#[derive(Default)]
pub struct LayoutOptionsBuilder {
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
    seed: Option<u64>,
    iterations: Option<usize>,
    width: Option<u32>,
    height: Option<u32>,
    parallel: Option<bool>,
}

impl LayoutOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
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

    pub fn with_area(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

impl ConfigBuilder for LayoutOptionsBuilder {
    type Config = LayoutOptions;

    fn build(self) -> Result<Self::Config, DependencyPlotError> {
        Ok(LayoutOptions {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            seed: self.seed.ok_or_else(|| missing_field("seed"))?,
            iterations: self.iterations.ok_or_else(|| missing_field("iterations"))?,
            width: self.width.ok_or_else(|| missing_field("width"))?,
            height: self.height.ok_or_else(|| missing_field("height"))?,
            parallel: self.parallel.ok_or_else(|| missing_field("parallel"))?,
        })
    }
}
