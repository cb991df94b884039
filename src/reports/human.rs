//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::DependencyPlotError;
use crate::graph::DependencyGraph;
use crate::layout::LayoutOutcome;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(
        &self,
        graph: &DependencyGraph,
        outcome: &LayoutOutcome,
    ) -> Result<String, DependencyPlotError> {
        let mut output = String::new();

        if graph.node_count() == 0 {
            writeln!(output, "{} Graph is empty, nothing to lay out", style("ℹ").blue())?;
            return Ok(output);
        }

        writeln!(
            output,
            "{} {} {}, {} {} ({} {}{})",
            style("📐").cyan(),
            style(graph.node_count()).bold(),
            pluralize("node", graph.node_count()),
            style(graph.edge_count()).bold(),
            pluralize("edge", graph.edge_count()),
            outcome.iterations_run,
            pluralize("iteration", outcome.iterations_run),
            if outcome.converged { ", converged" } else { "" }
        )?;
        writeln!(output)?;

        let name_width = graph
            .node_weights()
            .map(|node| node.name().chars().count())
            .max()
            .unwrap_or(0)
            .max("NODE".len());

        writeln!(
            output,
            "  {:<name_width$}  {:<8}  {:>10}  {:>10}",
            "NODE", "CATEGORY", "X", "Y"
        )?;

        for node in graph.node_weights() {
            let (x, y) = match node.position() {
                Some(p) => (format!("{:.2}", p.x), format!("{:.2}", p.y)),
                None => ("-".to_string(), "-".to_string()),
            };
            writeln!(
                output,
                "  {:<name_width$}  {:<8}  {:>10}  {:>10}",
                node.name(),
                node.category().to_string(),
                x,
                y
            )?;
        }

        Ok(output)
    }
}
