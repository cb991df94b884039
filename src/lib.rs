//! # dependency-plot - Draw Dependency Graphs
//!
//! dependency-plot turns a mapping from each entity to the entities it
//! depends on (tables, views, computed artifacts...) into a node-link
//! diagram. Base objects are drawn in one color, everything derived from
//! them in another, and every dependency becomes an arrow pointing at the
//! entity that consumes it.
//!
//! ## Main Components
//!
//! - **Graph**: Builds the directed graph and draws it
//!   ([`graph::DependencyGraphBuilder`], [`graph::GraphRenderer`])
//! - **Layout**: Force-directed placement of the nodes
//!   ([`layout::ForceLayout`])
//! - **Input**: Reads the dependency mapping from JSON or TOML
//! - **Reports**: Prints computed positions for humans or machines
//!
//! ## Usage
//!
//! The pipeline runs strictly forward: build, lay out once, render.
//!
//! ```no_run
//! use std::collections::HashSet;
//! use std::path::Path;
//!
//! use dependency_plot::graph::{DependencyGraphBuilder, GraphRenderer, RenderSpec};
//! use dependency_plot::layout::{ForceLayout, LayoutParams};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! # fn main() -> miette::Result<()> {
//! let dependencies = vec![
//!     ("orders_clean", vec!["orders_raw"]),
//!     ("revenue", vec!["orders_clean", "customers"]),
//! ];
//! let base: HashSet<&str> = ["orders_raw", "customers"].into_iter().collect();
//!
//! let mut graph = DependencyGraphBuilder::build(dependencies, &base);
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(3113794652);
//! let outcome = ForceLayout::new(LayoutParams::default()).layout(&mut graph, &mut rng);
//! println!("layout ran {} iterations", outcome.iterations_run);
//!
//! GraphRenderer::new(RenderSpec::default()).render(&graph, Path::new("Graph.png"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Reading the mapping from a file
//!
//! ```no_run
//! use std::path::Path;
//!
//! use dependency_plot::input::DependencyManifest;
//!
//! # fn main() -> miette::Result<()> {
//! // { "base": ["orders_raw"], "dependencies": { "orders_clean": ["orders_raw"] } }
//! let manifest = DependencyManifest::parse_file(Path::new("deps.json"))?;
//! let graph = manifest.to_graph();
//! println!("{} entities", graph.node_count());
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod input;
pub mod layout;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
