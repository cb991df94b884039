//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::DependencyPlotError;
use crate::graph::DependencyGraph;
use crate::layout::LayoutOutcome;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(
        &self,
        graph: &DependencyGraph,
        outcome: &LayoutOutcome,
    ) -> Result<String, DependencyPlotError> {
        let nodes: Vec<_> = graph
            .node_weights()
            .map(|node| {
                let position = node.position();
                json!({
                    "id": node.name(),
                    "category": node.category(),
                    "x": position.map(|p| p.x),
                    "y": position.map(|p| p.y),
                })
            })
            .collect();

        let edges: Vec<_> = graph
            .edge_weights()
            .map(|edge| {
                json!({
                    "from": edge.from_entity(),
                    "to": edge.to_entity(),
                })
            })
            .collect();

        let report = json!({
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "iterations_run": outcome.iterations_run,
            "converged": outcome.converged,
            "nodes": nodes,
            "edges": edges,
        });

        serde_json::to_string_pretty(&report).map_err(DependencyPlotError::Json)
    }
}
