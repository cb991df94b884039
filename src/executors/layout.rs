//! Layout command executor

use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::LayoutOptions;
use crate::executors::{CommandExecutor, build_and_layout};
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct LayoutExecutor;

impl CommandExecutor for LayoutExecutor {
    type Config = LayoutOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let params = config
            .layout_params()
            .wrap_err("Invalid layout settings")?;

        let mut progress = ProgressReporter::new();
        let (graph, outcome) =
            build_and_layout(&config.input, config.seed, params, &mut progress)?;

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&graph, &outcome),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&graph, &outcome),
        }
        .wrap_err("Failed to generate layout report")?;

        println!("{}", report.trim_end());
        Ok(())
    }
}
