//! Property tests for the force-directed layout engine

use std::collections::{BTreeMap, HashSet};

use dependency_plot::common::ConfigBuilder;
use dependency_plot::graph::{DependencyGraph, DependencyGraphBuilder, Position, positions};
use dependency_plot::layout::{ForceLayout, LayoutOutcome, LayoutParams};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn build(deps: Vec<(&str, Vec<&str>)>) -> DependencyGraph {
    DependencyGraphBuilder::build(deps, &HashSet::<String>::new())
}

fn run(graph: &mut DependencyGraph, seed: u64, params: LayoutParams) -> LayoutOutcome {
    ForceLayout::new(params).layout(graph, &mut ChaCha8Rng::seed_from_u64(seed))
}

fn assert_in_bounds(graph: &DependencyGraph, params: &LayoutParams) {
    for node in graph.node_weights() {
        let p = node
            .position()
            .unwrap_or_else(|| panic!("node {} was not positioned", node.name()));
        assert!(p.is_finite(), "{} has non-finite position {p:?}", node.name());
        assert!(
            (0.0..=params.area.width).contains(&p.x) && (0.0..=params.area.height).contains(&p.y),
            "{} left the layout area: {p:?}",
            node.name()
        );
    }
}

/// A small data-pipeline shaped graph with a diamond and a dangling branch
fn pipeline() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("orders_clean", vec!["orders_raw"]),
        ("customers_clean", vec!["customers_raw"]),
        ("revenue", vec!["orders_clean", "customers_clean"]),
        ("churn", vec!["customers_clean", "revenue"]),
        ("dashboard", vec!["revenue", "churn"]),
        ("audit_log", vec![]),
    ]
}

#[test]
fn test_same_seed_reproduces_positions() {
    let params = LayoutParams::default();

    let mut first = build(pipeline());
    let mut second = build(pipeline());
    let outcome_a = run(&mut first, 3_113_794_652, params);
    let outcome_b = run(&mut second, 3_113_794_652, params);

    assert_eq!(positions(&first), positions(&second));
    assert_eq!(outcome_a, outcome_b);
}

#[test]
fn test_different_seeds_differ() {
    let params = LayoutParams::default();

    let mut first = build(pipeline());
    let mut second = build(pipeline());
    run(&mut first, 1, params);
    run(&mut second, 2, params);

    assert_ne!(positions(&first), positions(&second));
}

#[test]
fn test_every_node_gets_a_position() {
    let params = LayoutParams::default();
    let mut graph = build(pipeline());
    run(&mut graph, 5, params);

    let placed = positions(&graph);
    assert_eq!(placed.len(), graph.node_count());
    assert_in_bounds(&graph, &params);
}

#[test]
fn test_unconnected_nodes_do_not_collapse() {
    let params = LayoutParams::default();

    for count in 2..=6 {
        let names: Vec<String> = (0..count).map(|i| format!("table_{i}")).collect();
        for seed in [0_u64, 17, 3_113_794_652] {
            let deps: Vec<(&str, Vec<&str>)> =
                names.iter().map(|n| (n.as_str(), Vec::new())).collect();
            let mut graph = build(deps);
            run(&mut graph, seed, params);

            let placed: Vec<Position> = positions(&graph).into_values().collect();
            for (i, a) in placed.iter().enumerate() {
                for b in &placed[i + 1..] {
                    let distance = (a.x - b.x).hypot(a.y - b.y);
                    assert!(
                        distance > 1e-3,
                        "{count} nodes with seed {seed} collapsed: {a:?} / {b:?}"
                    );
                }
            }
            assert_in_bounds(&graph, &params);
        }
    }
}

#[test]
fn test_mutual_dependency_stays_finite() {
    let params = LayoutParams::builder()
        .with_iterations(500)
        .with_convergence_threshold(0.0)
        .build()
        .unwrap();

    let mut graph = build(vec![("A", vec!["B"]), ("B", vec!["A"])]);
    let outcome = run(&mut graph, 9, params);

    assert_eq!(graph.edge_count(), 2);
    assert!(outcome.iterations_run <= 500);
    assert!(outcome.max_displacement.is_finite());
    assert_in_bounds(&graph, &params);
}

#[test]
fn test_self_loop_is_harmless() {
    let params = LayoutParams::default();
    let mut graph = build(vec![("A", vec!["A"]), ("B", vec!["A", "B"])]);
    run(&mut graph, 4, params);

    assert_in_bounds(&graph, &params);
}

#[test]
fn test_single_node_within_bounds() {
    let params = LayoutParams::builder()
        .with_area(100.0, 50.0)
        .build()
        .unwrap();
    let mut graph = build(vec![("lonely", vec![])]);
    run(&mut graph, 123, params);

    assert_in_bounds(&graph, &params);
}

#[test]
fn test_empty_graph_yields_empty_mapping() {
    let mut graph = DependencyGraph::new();
    let outcome = run(&mut graph, 0, LayoutParams::default());

    assert_eq!(positions(&graph), BTreeMap::new());
    assert_eq!(outcome.iterations_run, 0);
}

#[test]
fn test_iteration_budget_is_respected() {
    let params = LayoutParams::builder()
        .with_iterations(3)
        .with_convergence_threshold(0.0)
        .build()
        .unwrap();
    let mut graph = build(pipeline());
    let outcome = run(&mut graph, 8, params);

    assert_eq!(outcome.iterations_run, 3);
    assert!(!outcome.converged);
}

#[test]
fn test_early_stop_once_nodes_settle() {
    let params = LayoutParams::builder()
        .with_iterations(1_000)
        .with_convergence_threshold(1e9)
        .build()
        .unwrap();
    let mut graph = build(pipeline());
    let outcome = run(&mut graph, 8, params);

    assert_eq!(outcome.iterations_run, 1);
    assert!(outcome.converged);
}

#[test]
fn test_parallel_evaluation_is_bit_identical() {
    let sequential_params = LayoutParams::default();
    let parallel_params = LayoutParams::builder()
        .with_parallel(true)
        .build()
        .unwrap();

    let mut sequential = build(pipeline());
    let mut parallel = build(pipeline());
    run(&mut sequential, 77, sequential_params);
    run(&mut parallel, 77, parallel_params);

    assert_eq!(positions(&sequential), positions(&parallel));
}
