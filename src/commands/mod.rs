//! Command implementations for the dependency-plot CLI
//!
//! - render: Draw the dependency graph to a PNG image
//! - layout: Print the computed node positions

pub mod layout;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::Layout { .. } => layout::execute_layout_command(command),
    }
}
