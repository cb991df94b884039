//! Configuration constants for dependency-plot
//!
//! Defaults used by the CLI and the library builders. Every CLI value can be
//! overridden through command arguments or `DEPENDENCY_PLOT_*` environment
//! variables.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while the layout settles
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

/// Layout engine defaults
pub mod layout {
    /// Seed used when none is given, so repeated runs draw the same picture
    pub const DEFAULT_SEED: u64 = 3_113_794_652;

    /// Fixed iteration budget for the force simulation
    pub const DEFAULT_ITERATIONS: usize = 50;

    /// Stop early once no node moves further than this in one step
    pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.01;

    /// Distances below this are treated as coincident
    pub const MIN_DISTANCE: f64 = 1e-6;

    /// Initial temperature as a fraction of the layout width
    pub const INITIAL_TEMPERATURE_RATIO: f64 = 0.1;

    /// Strength of the pull towards the middle of the layout area
    pub const GRAVITY: f64 = 1.0;
}

/// Canvas and styling defaults
pub mod render {
    pub const DEFAULT_OUTPUT: &str = "Graph.png";
    pub const DEFAULT_WIDTH: u32 = 640;
    pub const DEFAULT_HEIGHT: u32 = 480;
    pub const DEFAULT_NODE_SIZE: f64 = 40.0;
    pub const DEFAULT_MARGIN: f64 = 40.0;
    pub const DEFAULT_FONT_SIZE: f64 = 12.0;

    pub const BASE_FILL: &str = "#808080"; // gray
    pub const DERIVED_FILL: &str = "#008000"; // green
    pub const EDGE_STROKE: &str = "#000000";
    pub const LABEL_FILL: &str = "#000000";
    pub const BACKGROUND: &str = "#FFFFFF";

    /// Families tried for labels when `sans-serif` does not resolve
    pub const LABEL_FONT_FALLBACKS: &[&str] = &[
        "DejaVu Sans",
        "Liberation Sans",
        "Noto Sans",
        "Helvetica",
        "Arial",
        "Verdana",
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}
