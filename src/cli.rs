use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs};
use crate::constants::render;
use crate::graph::NodeShape;

#[derive(Parser)]
#[command(
    name = "dependency-plot",
    about = "Render dependency graphs as force-directed diagrams",
    long_about = "dependency-plot reads a mapping from each entity to the entities it depends \
                  on, lays the resulting graph out with a force-directed simulation and draws \
                  it as a PNG. Base objects are drawn in a different color from derived ones.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw the dependency graph to a PNG image
    #[command(
        long_about = "Build the dependency graph from INPUT, compute a force-directed layout and \
                      write it as a PNG. Every entity becomes a square labeled with its name, \
                      every dependency an arrow pointing at the entity that depends on it. The \
                      same seed always produces the same picture."
    )]
    Render {
        #[command(flatten)]
        common: CommonArgs,

        /// Output image path
        #[arg(
            short,
            long,
            default_value = render::DEFAULT_OUTPUT,
            env = "DEPENDENCY_PLOT_OUTPUT"
        )]
        output: PathBuf,

        /// Node marker size in pixels
        #[arg(
            long,
            default_value_t = render::DEFAULT_NODE_SIZE,
            env = "DEPENDENCY_PLOT_NODE_SIZE"
        )]
        node_size: f64,

        /// Node marker shape
        #[arg(long, value_enum, default_value = "square", env = "DEPENDENCY_PLOT_SHAPE")]
        shape: NodeShape,
    },

    /// Print the computed node positions without drawing
    #[command(
        long_about = "Build the dependency graph from INPUT, run the layout engine and print \
                      every node's category and position. Useful for checking that a seed \
                      reproduces a layout, or for feeding positions into another tool."
    )]
    Layout {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["dependency-plot", "render", "deps.json"]).unwrap();

        match cli.command {
            Commands::Render {
                output,
                node_size,
                shape,
                ..
            } => {
                assert_eq!(output, PathBuf::from("Graph.png"));
                assert_eq!(node_size, 40.0);
                assert_eq!(shape, NodeShape::Square);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_layout_json_format() {
        let cli = Cli::try_parse_from(["dependency-plot", "layout", "deps.json", "-f", "json"])
            .unwrap();

        match cli.command {
            Commands::Layout { format, .. } => assert_eq!(format.format, OutputFormat::Json),
            _ => panic!("Expected Layout command"),
        }
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["dependency-plot", "render"]).is_err());
    }
}
