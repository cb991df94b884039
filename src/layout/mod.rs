//! # Force-Directed Layout Module
//!
//! Computes a 2D position for every node of a [`DependencyGraph`] with a
//! spring-embedder simulation.
//!
//! - **ForceLayout**: Runs the simulation and writes positions onto the nodes
//! - **LayoutParams**: Iteration budget, layout area, convergence threshold
//!   and the optional rayon-backed force evaluation
//!
//! Randomness comes from the caller: pass any seeded [`rand::Rng`] and the
//! same seed reproduces the same picture.
//!
//! ```
//! use std::collections::HashSet;
//!
//! use dependency_plot::graph::{DependencyGraphBuilder, positions};
//! use dependency_plot::layout::{ForceLayout, LayoutParams};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut graph = DependencyGraphBuilder::build(
//!     vec![("A", vec!["B"]), ("B", vec!["A"])],
//!     &HashSet::<String>::new(),
//! );
//!
//! let outcome = ForceLayout::new(LayoutParams::default())
//!     .layout(&mut graph, &mut ChaCha8Rng::seed_from_u64(3113794652));
//!
//! assert!(outcome.iterations_run <= 50);
//! assert_eq!(positions(&graph).len(), 2);
//! ```
//!
//! [`DependencyGraph`]: crate::graph::DependencyGraph

mod engine;
mod params;

pub use engine::{ForceLayout, LayoutOutcome};
pub use params::{LayoutArea, LayoutParams, LayoutParamsBuilder};
