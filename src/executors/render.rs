//! Render command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::RenderOptions;
use crate::executors::{CommandExecutor, build_and_layout};
use crate::graph::GraphRenderer;
use crate::progress::ProgressReporter;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let params = config
            .layout_params()
            .wrap_err("Invalid layout settings")?;
        let spec = config.render_spec().wrap_err("Invalid render settings")?;

        eprintln!("{} Rendering dependency graph...", style("🖼").cyan());

        let mut progress = ProgressReporter::new();
        let (graph, _) = build_and_layout(&config.input, config.seed, params, &mut progress)?;

        GraphRenderer::new(spec)
            .render(&graph, &config.output)
            .wrap_err_with(|| format!("Failed to render '{}'", config.output.display()))?;

        progress.output_written(&config.output);
        Ok(())
    }
}
