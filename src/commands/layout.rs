//! Layout command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::LayoutOptions;
use crate::error::DependencyPlotError;

impl FromCommand for LayoutOptions {
    fn from_command(command: Commands) -> Result<Self, DependencyPlotError> {
        match command {
            Commands::Layout { common, format } => LayoutOptions::builder()
                .with_input(common.input)
                .with_format(format.format)
                .with_seed(common.seed)
                .with_iterations(common.iterations)
                .with_area(common.width, common.height)
                .with_parallel(common.parallel)
                .build(),
            _ => Err(DependencyPlotError::ConfigurationError {
                message: "Invalid command type for LayoutOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LayoutOptions);

/// Execute the layout command
pub fn execute_layout_command(command: Commands) -> Result<()> {
    let config = LayoutOptions::from_command(command)
        .wrap_err("Failed to parse layout command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::layout::LayoutExecutor;
    LayoutExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};

    #[test]
    fn test_layout_options_from_command() {
        let cli = Cli::try_parse_from([
            "dependency-plot",
            "layout",
            "deps.toml",
            "--format",
            "json",
            "--iterations",
            "12",
        ])
        .unwrap();

        let options = LayoutOptions::try_from(cli.command).unwrap();
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.iterations, 12);
    }
}
