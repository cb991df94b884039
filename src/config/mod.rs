//! # Configuration Module
//!
//! Option structs for the dependency-plot commands. Each is assembled from
//! parsed CLI arguments through a builder implementing
//! [`ConfigBuilder`](crate::common::ConfigBuilder), then turned into the
//! library's [`LayoutParams`](crate::layout::LayoutParams) and
//! [`RenderSpec`](crate::graph::RenderSpec).
//!
//! ## Example
//!
//! ```
//! use dependency_plot::common::ConfigBuilder;
//! use dependency_plot::config::RenderOptions;
//!
//! let options = RenderOptions::builder()
//!     .with_input("deps.json".into())
//!     .with_output("Graph.png".into())
//!     .with_seed(42)
//!     .with_iterations(100)
//!     .with_canvas_size(800, 600)
//!     .with_node_size(40.0)
//!     .with_parallel(false)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.layout_params().unwrap().iterations, 100);
//! assert_eq!(options.render_spec().unwrap().width, 800);
//! ```

pub mod layout;
pub mod render;

pub use layout::LayoutOptions;
pub use render::RenderOptions;

use crate::common::ConfigBuilder;
use crate::error::DependencyPlotError;
use crate::layout::LayoutParams;

/// Layout parameters for a canvas-sized area
pub(crate) fn layout_params_for(
    iterations: usize,
    width: u32,
    height: u32,
    parallel: bool,
) -> Result<LayoutParams, DependencyPlotError> {
    LayoutParams::builder()
        .with_iterations(iterations)
        .with_area(f64::from(width), f64::from(height))
        .with_parallel(parallel)
        .build()
}
