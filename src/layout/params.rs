//! Layout engine parameters

use crate::constants::{layout as defaults, render};
use crate::error::DependencyPlotError;

/// Size of the rectangle nodes are placed in, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutArea {
    pub width: f64,
    pub height: f64,
}

impl LayoutArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub iterations: usize,
    pub area: LayoutArea,
    pub convergence_threshold: f64,
    /// Evaluate per-node forces on the rayon thread pool
    pub parallel: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            iterations: defaults::DEFAULT_ITERATIONS,
            area: LayoutArea::new(
                f64::from(render::DEFAULT_WIDTH),
                f64::from(render::DEFAULT_HEIGHT),
            ),
            convergence_threshold: defaults::DEFAULT_CONVERGENCE_THRESHOLD,
            parallel: false,
        }
    }
}

impl LayoutParams {
    pub fn builder() -> LayoutParamsBuilder {
        LayoutParamsBuilder::new()
    }
}

#[derive(Default)]
pub struct LayoutParamsBuilder {
    params: LayoutParams,
}

impl LayoutParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.params.iterations = iterations;
        self
    }

    pub fn with_area(mut self, width: f64, height: f64) -> Self {
        self.params.area = LayoutArea::new(width, height);
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.params.convergence_threshold = threshold;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.params.parallel = parallel;
        self
    }
}

impl crate::common::ConfigBuilder for LayoutParamsBuilder {
    type Config = LayoutParams;

    fn build(self) -> Result<Self::Config, DependencyPlotError> {
        let params = self.params;

        if params.iterations == 0 {
            return Err(DependencyPlotError::ConfigurationError {
                message: "iterations must be at least 1".to_string(),
            });
        }

        let LayoutArea { width, height } = params.area;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(DependencyPlotError::ConfigurationError {
                message: format!("Layout area must be positive and finite, got {width}x{height}"),
            });
        }

        if !params.convergence_threshold.is_finite() || params.convergence_threshold < 0.0 {
            return Err(DependencyPlotError::ConfigurationError {
                message: format!(
                    "convergence threshold must not be negative, got {}",
                    params.convergence_threshold
                ),
            });
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_defaults() {
        let params = LayoutParams::default();
        assert_eq!(params.iterations, 50);
        assert_eq!(params.area, LayoutArea::new(640.0, 480.0));
        assert!(!params.parallel);
    }

    #[test]
    fn test_builder_rejects_zero_iterations() {
        let result = LayoutParams::builder().with_iterations(0).build();
        assert!(matches!(
            result,
            Err(DependencyPlotError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_builder_rejects_degenerate_area() {
        assert!(LayoutParams::builder().with_area(0.0, 10.0).build().is_err());
        assert!(LayoutParams::builder()
            .with_area(f64::INFINITY, 10.0)
            .build()
            .is_err());
    }

    #[test]
    fn test_builder_rejects_negative_threshold() {
        assert!(LayoutParams::builder()
            .with_convergence_threshold(-1.0)
            .build()
            .is_err());
    }
}
