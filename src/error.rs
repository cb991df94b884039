use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Which parser rejected an input manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Json => write!(f, "JSON"),
            InputFormat::Toml => write!(f, "TOML"),
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid {format} syntax in '{file}': {message}")]
#[diagnostic(
    code(dependency_plot::input_parse_error),
    help("Expected an object with optional `base` (list) and `dependencies` (map of lists) keys")
)]
pub struct InputParseError {
    pub file: String,
    pub format: InputFormat,
    pub message: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("error here")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DependencyPlotError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(dependency_plot::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    InputParseError(Box<InputParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(dependency_plot::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(dependency_plot::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(dependency_plot::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(dependency_plot::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(dependency_plot::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },

    #[error("Render error: {message}")]
    #[diagnostic(
        code(dependency_plot::render_error),
        help("The diagram could not be rasterized; check the canvas size")
    )]
    RenderError { message: String },

    #[error("Failed to write image to '{path}'")]
    #[diagnostic(
        code(dependency_plot::output_write_error),
        help("Check that the output directory exists, is writable, and has free space")
    )]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_input_parse_error_display() {
        let error = InputParseError {
            file: "deps.toml".to_string(),
            format: InputFormat::Toml,
            message: "expected `=`".to_string(),
            source_code: NamedSource::new("deps.toml", "base [".to_string()),
            span: Some((5, 1).into()),
        };

        assert_eq!(
            error.to_string(),
            "Invalid TOML syntax in 'deps.toml': expected `=`"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = DependencyPlotError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.json'");
    }

    #[test]
    fn test_configuration_error() {
        let error = DependencyPlotError::ConfigurationError {
            message: "iterations must be at least 1".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: iterations must be at least 1"
        );
    }

    #[test]
    fn test_output_write_error_keeps_source() {
        use std::error::Error as _;

        let error = DependencyPlotError::OutputWriteError {
            path: PathBuf::from("/readonly/Graph.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(
            error.to_string(),
            "Failed to write image to '/readonly/Graph.png'"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_codes() {
        let error = DependencyPlotError::RenderError {
            message: "canvas too small".to_string(),
        };

        use miette::Diagnostic;
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let plot_err: DependencyPlotError = io_err.into();

        match plot_err {
            DependencyPlotError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let plot_err: DependencyPlotError = json_err.into();

        match plot_err {
            DependencyPlotError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
