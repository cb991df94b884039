//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::constants::{layout, render};

/// Arguments shared by every command that runs the layout engine
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Dependency manifest (JSON, or TOML when the extension is `.toml`)
    #[arg(value_name = "INPUT", env = "DEPENDENCY_PLOT_INPUT")]
    pub input: PathBuf,

    /// Seed for the initial node placement
    #[arg(long, default_value_t = layout::DEFAULT_SEED, env = "DEPENDENCY_PLOT_SEED")]
    pub seed: u64,

    /// Maximum number of layout iterations
    #[arg(
        long,
        default_value_t = layout::DEFAULT_ITERATIONS,
        env = "DEPENDENCY_PLOT_ITERATIONS"
    )]
    pub iterations: usize,

    /// Canvas width in pixels (also the layout area width)
    #[arg(long, default_value_t = render::DEFAULT_WIDTH, env = "DEPENDENCY_PLOT_WIDTH")]
    pub width: u32,

    /// Canvas height in pixels (also the layout area height)
    #[arg(long, default_value_t = render::DEFAULT_HEIGHT, env = "DEPENDENCY_PLOT_HEIGHT")]
    pub height: u32,

    /// Evaluate layout forces on all cores
    #[arg(long, env = "DEPENDENCY_PLOT_PARALLEL")]
    pub parallel: bool,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "DEPENDENCY_PLOT_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DependencyPlotError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(
        command: crate::cli::Commands,
    ) -> Result<Self, crate::error::DependencyPlotError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DependencyPlotError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

pub(crate) fn missing_field(field: &str) -> crate::error::DependencyPlotError {
    crate::error::DependencyPlotError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
