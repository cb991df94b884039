//! # Graph Construction and Rendering Module
//!
//! This module provides functionality for building and drawing dependency
//! graphs.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraphBuilder**: Constructs the graph from an
//!   `entity -> [dependencies]` mapping and a set of base entities
//! - **EntityNode**: An entity in the graph, base or derived
//! - **DependencyEdge**: Points from a dependency to the entity depending on it
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Draws a laid-out graph and exports a PNG image
//! - **RenderSpec**: Canvas size, marker shape and colors
//!
//! ## Example
//!
//! ```
//! use std::collections::HashSet;
//!
//! use dependency_plot::graph::{DependencyGraphBuilder, GraphRenderer, RenderSpec};
//! use dependency_plot::layout::{ForceLayout, LayoutParams};
//! use miette::IntoDiagnostic;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! # fn main() -> miette::Result<()> {
//! let dependencies = vec![("B", vec!["A"]), ("C", vec!["A", "B"])];
//! let base: HashSet<&str> = ["A"].into_iter().collect();
//!
//! let mut graph = DependencyGraphBuilder::build(dependencies, &base);
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! ForceLayout::new(LayoutParams::default()).layout(&mut graph, &mut rng);
//!
//! let renderer = GraphRenderer::new(RenderSpec::default());
//! let mut output = Vec::new();
//! renderer.render_svg(&graph, &mut output)?;
//!
//! let svg = String::from_utf8(output).into_diagnostic()?;
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains(">A</text>"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod render_spec;
mod renderer;
mod types;

// Re-export main types and builders
pub use builder::{DependencyGraphBuilder, find_node, positions};
pub use render_spec::{NodeShape, RenderSpec, RenderSpecBuilder};
pub use renderer::GraphRenderer;
pub use types::{DependencyEdge, DependencyGraph, EntityCategory, EntityNode, Position};
