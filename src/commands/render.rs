//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderOptions;
use crate::error::DependencyPlotError;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, DependencyPlotError> {
        match command {
            Commands::Render {
                common,
                output,
                node_size,
                shape,
            } => RenderOptions::builder()
                .with_input(common.input)
                .with_output(output)
                .with_seed(common.seed)
                .with_iterations(common.iterations)
                .with_canvas_size(common.width, common.height)
                .with_node_size(node_size)
                .with_shape(shape)
                .with_parallel(common.parallel)
                .build(),
            _ => Err(DependencyPlotError::ConfigurationError {
                message: "Invalid command type for RenderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_render_options_from_command() {
        let cli = Cli::try_parse_from([
            "dependency-plot",
            "render",
            "deps.json",
            "-o",
            "out.png",
            "--seed",
            "5",
        ])
        .unwrap();

        let options = RenderOptions::try_from(cli.command).unwrap();
        assert_eq!(options.output, std::path::PathBuf::from("out.png"));
        assert_eq!(options.seed, 5);
    }

    #[test]
    fn test_layout_command_is_rejected() {
        let cli = Cli::try_parse_from(["dependency-plot", "layout", "deps.json"]).unwrap();
        assert!(RenderOptions::from_command(cli.command).is_err());
    }
}
