use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::error::{DependencyPlotError, InputFormat, InputParseError};
use crate::graph::{DependencyGraph, DependencyGraphBuilder};

/// Dependency mapping and base set as read from an input file
///
/// ```json
/// { "base": ["raw_orders"], "dependencies": { "orders": ["raw_orders"] } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyManifest {
    #[serde(default)]
    pub base: Vec<String>,
    #[serde(default)]
    pub dependencies: IndexMap<String, Vec<String>>,
}

impl DependencyManifest {
    /// Read a manifest, picking the parser from the file extension
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DependencyPlotError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self::parse_str(
            &content,
            &path.display().to_string(),
            format_for(path),
        )?)
    }

    pub fn parse_str(
        content: &str,
        file: &str,
        format: InputFormat,
    ) -> Result<Self, DependencyPlotError> {
        let parsed = match format {
            InputFormat::Json => serde_json::from_str(content).map_err(|e| {
                let span = offset_of(content, e.line(), e.column())
                    .map(|offset| SourceSpan::new(offset.into(), 1));
                (e.to_string(), span)
            }),
            InputFormat::Toml => toml::from_str(content).map_err(|e| {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
                (e.message().to_string(), span)
            }),
        };

        parsed.map_err(|(message, span)| {
            DependencyPlotError::InputParseError(Box::new(InputParseError {
                file: file.to_string(),
                format,
                message,
                source_code: NamedSource::new(file, content.to_string()),
                span,
            }))
        })
    }

    pub fn base_keys(&self) -> HashSet<&str> {
        self.base.iter().map(String::as_str).collect()
    }

    /// Build the dependency graph described by this manifest
    pub fn to_graph(&self) -> DependencyGraph {
        DependencyGraphBuilder::build(&self.dependencies, &self.base_keys())
    }
}

fn format_for(path: &Path) -> InputFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
        _ => InputFormat::Json,
    }
}

/// Byte offset of a 1-based line/column pair, as reported by serde_json
fn offset_of(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < content.len()).then_some(offset)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_json_keeps_file_order() {
        let manifest = DependencyManifest::parse_str(
            r#"{"base": ["A"], "dependencies": {"C": ["A", "B"], "B": ["A"]}}"#,
            "deps.json",
            InputFormat::Json,
        )
        .unwrap();

        let keys: Vec<_> = manifest.dependencies.keys().cloned().collect();
        assert_eq!(keys, vec!["C".to_string(), "B".to_string()]);
        assert_eq!(manifest.base, vec!["A".to_string()]);
    }

    #[test]
    fn test_parse_toml() {
        let manifest = DependencyManifest::parse_str(
            "base = [\"A\"]\n\n[dependencies]\nB = [\"A\"]\nC = [\"A\", \"B\"]\n",
            "deps.toml",
            InputFormat::Toml,
        )
        .unwrap();

        let graph = manifest.to_graph();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let manifest = DependencyManifest::parse_str("{}", "deps.json", InputFormat::Json).unwrap();
        assert!(manifest.base.is_empty());
        assert!(manifest.dependencies.is_empty());
        assert_eq!(manifest.to_graph().node_count(), 0);
    }

    #[test]
    fn test_json_error_has_span() {
        let result = DependencyManifest::parse_str(
            "{\n  \"base\": 5\n}",
            "deps.json",
            InputFormat::Json,
        );

        match result {
            Err(DependencyPlotError::InputParseError(err)) => {
                assert_eq!(err.format, InputFormat::Json);
                assert!(err.span.is_some());
            }
            _ => panic!("Expected InputParseError"),
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result =
            DependencyManifest::parse_str(r#"{"tables": []}"#, "deps.json", InputFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_offset_of() {
        let content = "ab\ncde\nf";
        assert_eq!(offset_of(content, 1, 1), Some(0));
        assert_eq!(offset_of(content, 2, 2), Some(4));
        assert_eq!(offset_of(content, 0, 0), None);
        assert_eq!(offset_of(content, 9, 9), None);
    }

    #[test]
    fn test_parse_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[dependencies]\nB = [\"A\"]").unwrap();

        let manifest = DependencyManifest::parse_file(file.path()).unwrap();
        assert_eq!(manifest.dependencies["B"], vec!["A".to_string()]);

        let missing = NamedTempFile::new().unwrap().path().with_extension("absent");
        assert!(DependencyManifest::parse_file(&missing).is_err());
    }
}
