use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::layout::LayoutOutcome;
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg} [{elapsed_precise}]";

/// Status lines and the layout spinner, all on stderr
pub struct ProgressReporter {
    term: Term,
    current_spinner: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_spinner: None,
        }
    }

    fn create_spinner(&self, message: String) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let mut frames: Vec<&str> = SPINNER_FRAMES.to_vec();
        frames.push("✓");
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&frames),
        );
        pb.set_message(message);
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn loading_input(&self, path: &Path) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Reading dependencies from {}...",
            style("📄").cyan(),
            style(path.display()).dim()
        );
    }

    pub fn graph_built(&self, nodes: usize, edges: usize) {
        eprintln!(
            "{} Built graph with {} {} and {} {}",
            style("✓").green(),
            style(nodes).yellow().bold(),
            pluralize("node", nodes),
            style(edges).yellow().bold(),
            pluralize("edge", edges)
        );
    }

    pub fn start_layout(&mut self, nodes: usize) {
        let spinner = self.create_spinner(format!(
            "Laying out {nodes} {}...",
            pluralize("node", nodes)
        ));
        self.current_spinner = Some(spinner);
    }

    pub fn finish_layout(&mut self, outcome: &LayoutOutcome) {
        if let Some(pb) = self.current_spinner.take() {
            pb.finish_and_clear();
        }

        let iterations = outcome.iterations_run;
        if outcome.converged {
            eprintln!(
                "{} Layout settled after {} {}",
                style("✓").green(),
                style(iterations).yellow().bold(),
                pluralize("iteration", iterations)
            );
        } else {
            eprintln!(
                "{} Layout used its full budget of {} {} (last step moved {:.3})",
                style("ℹ").blue(),
                style(iterations).yellow().bold(),
                pluralize("iteration", iterations),
                outcome.max_displacement
            );
        }
    }

    pub fn output_written(&self, path: &Path) {
        eprintln!(
            "{} Graph written to {}",
            style("✓").green(),
            style(path.display()).bold()
        );
    }
}
