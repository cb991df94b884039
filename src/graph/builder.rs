use std::collections::{BTreeMap, HashMap, HashSet};

use petgraph::graph::NodeIndex;
use tracing::debug;

use super::types::{DependencyEdge, DependencyGraph, EntityCategory, EntityNode, Position};

/// Builder for constructing dependency graphs
///
/// Turns a mapping of `entity -> [dependencies]` into a directed graph whose
/// edges point from each dependency to the entity that depends on it. Keys
/// that only show up as dependencies are created on the fly.
pub struct DependencyGraphBuilder {
    graph: DependencyGraph,
    entity_indices: HashMap<String, NodeIndex>,
}

impl DependencyGraphBuilder {
    fn new() -> Self {
        Self {
            graph: DependencyGraph::new(),
            entity_indices: HashMap::new(),
        }
    }

    /// Build a graph from a dependency mapping and the set of base entities
    ///
    /// # Arguments
    /// * `dependencies` - Pairs of `(entity, dependencies of entity)`, in the
    ///   order nodes should be created
    /// * `base_keys` - Entities rendered as base objects
    pub fn build<I, K, D, S>(dependencies: I, base_keys: &HashSet<S>) -> DependencyGraph
    where
        I: IntoIterator<Item = (K, D)>,
        K: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
        S: std::borrow::Borrow<str> + std::hash::Hash + Eq,
    {
        let mut builder = Self::new();

        for (key, deps) in dependencies {
            let key = key.as_ref();
            let target_idx = builder.ensure_node(key);

            for dep in deps {
                let dep = dep.as_ref();
                let source_idx = builder.ensure_node(dep);
                builder.add_dependency(source_idx, target_idx, dep, key);
            }
        }

        builder.assign_categories(base_keys);

        debug!(
            nodes = builder.graph.node_count(),
            edges = builder.graph.edge_count(),
            "built dependency graph"
        );

        builder.graph
    }

    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.entity_indices.get(name) {
            return idx;
        }

        // Category is settled once all nodes exist
        let idx = self
            .graph
            .add_node(EntityNode::new(name, EntityCategory::Derived));
        self.entity_indices.insert(name.to_string(), idx);
        idx
    }

    fn add_dependency(&mut self, source: NodeIndex, target: NodeIndex, from: &str, to: &str) {
        if self.graph.find_edge(source, target).is_some() {
            return;
        }
        self.graph
            .add_edge(source, target, DependencyEdge::new(from, to));
    }

    fn assign_categories<S>(&mut self, base_keys: &HashSet<S>)
    where
        S: std::borrow::Borrow<str> + std::hash::Hash + Eq,
    {
        for node in self.graph.node_weights_mut() {
            let category = if base_keys.contains(node.name()) {
                EntityCategory::Base
            } else {
                EntityCategory::Derived
            };
            node.set_category(category);
        }
    }
}

/// Collect the laid-out position of every node, keyed by identifier
///
/// Nodes that have not been laid out yet are skipped.
pub fn positions(graph: &DependencyGraph) -> BTreeMap<String, Position> {
    graph
        .node_weights()
        .filter_map(|node| node.position().map(|pos| (node.name().to_string(), pos)))
        .collect()
}

/// Find a node by identifier
pub fn find_node<'a>(graph: &'a DependencyGraph, name: &str) -> Option<&'a EntityNode> {
    graph.node_weights().find(|node| node.name() == name)
}
