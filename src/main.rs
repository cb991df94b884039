use miette::Result;
use tracing_subscriber::EnvFilter;

/// Main entry point for the dependency-plot CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    let filter = EnvFilter::try_from_env("DEPENDENCY_PLOT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    dependency_plot::run()
}
