//! Command executors that handle the actual logic for each command

pub mod layout;
pub mod render;

use std::path::Path;

use miette::{Result, WrapErr};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::graph::DependencyGraph;
use crate::input::DependencyManifest;
use crate::layout::{ForceLayout, LayoutOutcome, LayoutParams};
use crate::progress::ProgressReporter;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load the manifest, build the graph and lay it out exactly once
pub(crate) fn build_and_layout(
    input: &Path,
    seed: u64,
    params: LayoutParams,
    progress: &mut ProgressReporter,
) -> Result<(DependencyGraph, LayoutOutcome)> {
    progress.loading_input(input);
    let manifest = DependencyManifest::parse_file(input)
        .wrap_err_with(|| format!("Failed to load dependencies from '{}'", input.display()))?;

    let mut graph = manifest.to_graph();
    progress.graph_built(graph.node_count(), graph.edge_count());

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    progress.start_layout(graph.node_count());
    let outcome = ForceLayout::new(params).layout(&mut graph, &mut rng);
    progress.finish_layout(&outcome);

    Ok((graph, outcome))
}
