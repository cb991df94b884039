use std::f64::consts::PI;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use super::params::LayoutParams;
use crate::constants::layout::{GRAVITY, INITIAL_TEMPERATURE_RATIO, MIN_DISTANCE};
use crate::graph::{DependencyGraph, Position};

// Spreads the fallback directions of coincident pairs around the circle
const GOLDEN_ANGLE: f64 = PI * 0.763_932_022_500_210_3;

/// Summary of one layout run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOutcome {
    pub iterations_run: usize,
    /// True when the run stopped because nodes stopped moving
    pub converged: bool,
    /// Largest node displacement of the last step
    pub max_displacement: f64,
}

/// Fruchterman-Reingold style spring layout
///
/// Repulsion `k² / d` acts between every pair of nodes, attraction `d² / k`
/// along every edge, and a weak pull keeps nodes near the middle of the area.
/// Moves are capped by a temperature that cools linearly to zero.
pub struct ForceLayout {
    params: LayoutParams,
}

impl ForceLayout {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Assign a position to every node of `graph`
    ///
    /// The result depends only on the graph, the parameters and the state of
    /// `rng`: the same seed yields bit-identical positions whether or not
    /// `parallel` is set.
    pub fn layout<R: Rng>(&self, graph: &mut DependencyGraph, rng: &mut R) -> LayoutOutcome {
        let node_count = graph.node_count();
        if node_count == 0 {
            return LayoutOutcome {
                iterations_run: 0,
                converged: true,
                max_displacement: 0.0,
            };
        }

        let area = self.params.area;
        let mut positions = initial_positions(graph, rng, area.width, area.height);
        let neighbors = neighbor_lists(graph);

        let ideal_length = ((area.width * area.height) / node_count as f64)
            .sqrt()
            .max(MIN_DISTANCE);
        let initial_temperature = area.width * INITIAL_TEMPERATURE_RATIO;
        let iterations = self.params.iterations;

        debug!(
            nodes = node_count,
            edges = graph.edge_count(),
            iterations,
            ideal_length,
            parallel = self.params.parallel,
            "starting force layout"
        );

        let mut outcome = LayoutOutcome {
            iterations_run: 0,
            converged: false,
            max_displacement: 0.0,
        };

        for iteration in 0..iterations {
            let temperature = initial_temperature * (1.0 - iteration as f64 / iterations as f64);
            let forces = self.compute_forces(
                &positions,
                &neighbors,
                ideal_length,
                area.width,
                area.height,
            );

            let mut max_displacement: f64 = 0.0;
            for (pos, &(fx, fy)) in positions.iter_mut().zip(&forces) {
                let magnitude = fx.hypot(fy);
                if magnitude <= MIN_DISTANCE {
                    continue;
                }

                let step = magnitude.min(temperature);
                let next = Position::new(
                    (pos.x + fx / magnitude * step).clamp(0.0, area.width),
                    (pos.y + fy / magnitude * step).clamp(0.0, area.height),
                );

                max_displacement = max_displacement.max((next.x - pos.x).hypot(next.y - pos.y));
                *pos = next;
            }

            outcome.iterations_run = iteration + 1;
            outcome.max_displacement = max_displacement;
            trace!(iteration, temperature, max_displacement, "layout step");

            if max_displacement < self.params.convergence_threshold {
                outcome.converged = true;
                break;
            }
        }

        for (node, pos) in graph.node_weights_mut().zip(positions) {
            node.set_position(pos);
        }

        debug!(
            iterations_run = outcome.iterations_run,
            converged = outcome.converged,
            "finished force layout"
        );
        outcome
    }

    /// Net force on every node, indexed like the graph's nodes
    ///
    /// Each node sums its contributions in node-index order on its own, so the
    /// parallel path produces exactly the same floats as the sequential one.
    fn compute_forces(
        &self,
        positions: &[Position],
        neighbors: &[Vec<usize>],
        ideal_length: f64,
        width: f64,
        height: f64,
    ) -> Vec<(f64, f64)> {
        let node_count = positions.len();
        let center = Position::new(width / 2.0, height / 2.0);
        let k_squared = ideal_length * ideal_length;

        let net_force = |i: usize| -> (f64, f64) {
            let p = positions[i];
            let (mut fx, mut fy) = (0.0, 0.0);

            for (j, q) in positions.iter().enumerate() {
                if j == i {
                    continue;
                }
                let (ux, uy, distance) = separation(i, j, p, *q, node_count);
                let push = k_squared / distance;
                fx += ux * push;
                fy += uy * push;
            }

            for &j in &neighbors[i] {
                let q = positions[j];
                let (dx, dy) = (q.x - p.x, q.y - p.y);
                let distance = dx.hypot(dy);
                if distance < MIN_DISTANCE {
                    continue;
                }
                // (dx / d) * (d² / k)
                fx += dx * distance / ideal_length;
                fy += dy * distance / ideal_length;
            }

            let (cx, cy) = (center.x - p.x, center.y - p.y);
            let to_center = cx.hypot(cy);
            if to_center >= MIN_DISTANCE {
                fx += GRAVITY * cx * to_center / ideal_length;
                fy += GRAVITY * cy * to_center / ideal_length;
            }

            (fx, fy)
        };

        if self.params.parallel {
            (0..node_count).into_par_iter().map(&net_force).collect()
        } else {
            (0..node_count).map(&net_force).collect()
        }
    }
}

/// Unit vector pointing from `q` (node `j`) to `p` (node `i`) and their
/// distance, never below `MIN_DISTANCE`
///
/// Coincident nodes get a direction derived from the index pair; `i` and `j`
/// always receive opposite directions so they separate.
fn separation(
    i: usize,
    j: usize,
    p: Position,
    q: Position,
    node_count: usize,
) -> (f64, f64, f64) {
    let (dx, dy) = (p.x - q.x, p.y - q.y);
    let distance = dx.hypot(dy);
    if distance >= MIN_DISTANCE {
        return (dx / distance, dy / distance, distance);
    }

    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let angle = GOLDEN_ANGLE * (lo * node_count + hi) as f64;
    let sign = if i == lo { -1.0 } else { 1.0 };
    (sign * angle.cos(), sign * angle.sin(), MIN_DISTANCE)
}

/// Draw starting positions uniformly over the area
///
/// Nodes draw in identifier order, so a node's start point does not depend on
/// when it was inserted.
fn initial_positions<R: Rng>(
    graph: &DependencyGraph,
    rng: &mut R,
    width: f64,
    height: f64,
) -> Vec<Position> {
    let mut order: Vec<NodeIndex> = graph.node_indices().collect();
    order.sort_by(|a, b| graph[*a].name().cmp(graph[*b].name()));

    let mut positions = vec![Position::new(0.0, 0.0); graph.node_count()];
    for idx in order {
        let x = sample_axis(rng, width);
        let y = sample_axis(rng, height);
        positions[idx.index()] = Position::new(x, y);
    }
    positions
}

fn sample_axis<R: Rng>(rng: &mut R, extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

/// Adjacency used for attraction, self-loops dropped
fn neighbor_lists(graph: &DependencyGraph) -> Vec<Vec<usize>> {
    let mut neighbors = vec![Vec::new(); graph.node_count()];
    for edge in graph.edge_references() {
        let (s, t) = (edge.source().index(), edge.target().index());
        if s == t {
            continue;
        }
        neighbors[s].push(t);
        neighbors[t].push(s);
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::graph::DependencyGraphBuilder;

    fn graph_of(deps: Vec<(&str, Vec<&str>)>) -> DependencyGraph {
        DependencyGraphBuilder::build(deps, &HashSet::<String>::new())
    }

    #[test]
    fn test_separation_of_coincident_nodes_is_antisymmetric() {
        let p = Position::new(5.0, 5.0);
        let (ax, ay, da) = separation(0, 1, p, p, 2);
        let (bx, by, db) = separation(1, 0, p, p, 2);

        assert_eq!(da, MIN_DISTANCE);
        assert_eq!(db, MIN_DISTANCE);
        assert_eq!((ax, ay), (-bx, -by));
        assert!((ax.hypot(ay) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_neighbor_lists_skip_self_loops() {
        let graph = graph_of(vec![("A", vec!["A", "B"])]);
        let neighbors = neighbor_lists(&graph);

        assert_eq!(neighbors[0], vec![1]);
        assert_eq!(neighbors[1], vec![0]);
    }

    #[test]
    fn test_initial_positions_follow_identifier_not_insertion() {
        let forward = graph_of(vec![("A", vec![]), ("B", vec![])]);
        let backward = graph_of(vec![("B", vec![]), ("A", vec![])]);

        let a = initial_positions(&forward, &mut ChaCha8Rng::seed_from_u64(7), 100.0, 100.0);
        let b = initial_positions(&backward, &mut ChaCha8Rng::seed_from_u64(7), 100.0, 100.0);

        // forward: A=0, B=1; backward: B=0, A=1
        assert_eq!(a[0], b[1]);
        assert_eq!(a[1], b[0]);
    }

    #[test]
    fn test_params_are_kept() {
        let params = LayoutParams {
            iterations: 7,
            ..LayoutParams::default()
        };
        assert_eq!(ForceLayout::new(params).params(), &params);
    }

    #[test]
    fn test_empty_graph_is_a_no_op() {
        let mut graph = DependencyGraph::new();
        let outcome = ForceLayout::new(LayoutParams::default())
            .layout(&mut graph, &mut ChaCha8Rng::seed_from_u64(1));

        assert_eq!(outcome.iterations_run, 0);
        assert!(outcome.converged);
    }

    #[test]
    fn test_degenerate_area_does_not_panic() {
        let mut graph = graph_of(vec![("A", vec!["B"])]);
        let params = LayoutParams {
            area: super::super::LayoutArea::new(0.0, 0.0),
            ..LayoutParams::default()
        };

        ForceLayout::new(params).layout(&mut graph, &mut ChaCha8Rng::seed_from_u64(1));
        for node in graph.node_weights() {
            assert_eq!(node.position(), Some(Position::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let deps = vec![
            ("C", vec!["A", "B"]),
            ("D", vec!["C"]),
            ("E", vec!["C", "D", "A"]),
            ("F", vec![]),
        ];
        let mut sequential = graph_of(deps.clone());
        let mut parallel = graph_of(deps);

        let params = LayoutParams::default();
        ForceLayout::new(params).layout(&mut sequential, &mut ChaCha8Rng::seed_from_u64(99));
        ForceLayout::new(LayoutParams {
            parallel: true,
            ..params
        })
        .layout(&mut parallel, &mut ChaCha8Rng::seed_from_u64(99));

        let a: Vec<_> = sequential.node_weights().map(|n| n.position()).collect();
        let b: Vec<_> = parallel.node_weights().map(|n| n.position()).collect();
        assert_eq!(a, b);
    }
}
