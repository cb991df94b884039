//! Report generation for computed layouts
//!
//! - human: Aligned table for the console
//! - json: JSON document for programmatic use

pub mod human;
pub mod json;

use crate::error::DependencyPlotError;
use crate::graph::DependencyGraph;
use crate::layout::LayoutOutcome;

/// Common trait for all layout report generators
pub trait ReportGenerator {
    /// Generate a report from a laid-out graph
    fn generate_report(
        &self,
        graph: &DependencyGraph,
        outcome: &LayoutOutcome,
    ) -> Result<String, DependencyPlotError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
