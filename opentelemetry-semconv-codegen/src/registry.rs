//! # Registry loader
//!
//! Reads metric groups out of a semantic convention registry snapshot. Only
//! the subset of the upstream YAML model needed to describe a metric is
//! understood; every other group type and field is ignored.
//!
//! ```yaml
//! groups:
//!   - id: metric.http.server.request.duration
//!     type: metric
//!     metric_name: http.server.request.duration
//!     stability: stable
//!     brief: "Duration of HTTP server requests."
//!     instrument: histogram
//!     unit: "s"
//! ```
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CodegenError, Result};
use crate::model::{Deprecation, InstrumentKind, MetricDefinition, Stability};

const METRIC_GROUP_TYPE: &str = "metric";
const RENAMED_REASON: &str = "renamed";

#[derive(Debug, Default, Deserialize)]
struct RegistryDocument {
    #[serde(default)]
    groups: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
struct RawGroup {
    id: String,
    #[serde(rename = "type", default)]
    group_type: Option<String>,
    metric_name: Option<String>,
    instrument: Option<String>,
    unit: Option<String>,
    brief: Option<String>,
    note: Option<String>,
    stability: Option<String>,
    deprecated: Option<RawDeprecation>,
}

#[derive(Debug, Deserialize)]
struct RawDeprecation {
    reason: Option<String>,
    renamed_to: Option<String>,
    note: Option<String>,
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

impl RawGroup {
    fn is_metric(&self) -> bool {
        self.group_type.as_deref() == Some(METRIC_GROUP_TYPE)
    }

    fn into_metric(self, source_name: &str) -> Result<MetricDefinition> {
        let context = format!("metric group `{}` in {source_name}", self.id);
        let missing = |field| CodegenError::MissingField {
            context: context.clone(),
            field,
        };
        let invalid = |field, value: &str| CodegenError::InvalidValue {
            context: context.clone(),
            field,
            value: value.to_owned(),
        };

        let identifier = non_blank(self.metric_name).ok_or_else(|| missing("metric_name"))?;
        let unit = non_blank(self.unit).ok_or_else(|| missing("unit"))?;
        let instrument = self.instrument.ok_or_else(|| missing("instrument"))?;
        let instrument =
            InstrumentKind::from_token(&instrument).ok_or_else(|| invalid("instrument", &instrument))?;
        let stability = match self.stability {
            Some(token) => Stability::from_token(&token).ok_or_else(|| invalid("stability", &token))?,
            None => Stability::default(),
        };
        let deprecation = match self.deprecated {
            Some(raw) => {
                if let Some(reason) = raw.reason.as_deref() {
                    if reason != RENAMED_REASON {
                        return Err(invalid("deprecation reason", reason));
                    }
                }
                Some(Deprecation {
                    replaced_by: non_blank(raw.renamed_to)
                        .ok_or_else(|| missing("deprecated.renamed_to"))?,
                    note: non_blank(raw.note),
                })
            }
            None => None,
        };

        Ok(MetricDefinition {
            identifier,
            instrument,
            unit,
            description: non_blank(self.brief),
            note: non_blank(self.note),
            stability,
            deprecation,
        })
    }
}

/// Parses the metric groups of one YAML document.
///
/// `source_name` only serves error reporting.
pub fn load_str(source_name: &str, yaml: &str) -> Result<Vec<MetricDefinition>> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let document: RegistryDocument =
        serde_yaml::from_str(yaml).map_err(|source| CodegenError::Yaml {
            source_name: source_name.to_owned(),
            source,
        })?;

    document
        .groups
        .into_iter()
        .filter(RawGroup::is_metric)
        .map(|group| group.into_metric(source_name))
        .collect()
}

/// Loads the metric groups of a single registry file.
pub fn load_file(path: &Path) -> Result<Vec<MetricDefinition>> {
    let yaml = std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;
    let metrics = load_str(&path.display().to_string(), &yaml)?;
    tracing::debug!(
        name: "Codegen.RegistryFileLoaded",
        path = %path.display(),
        metrics = metrics.len()
    );
    Ok(metrics)
}

/// Loads every `*.yaml` and `*.yml` file below `dir`, in sorted path order.
pub fn load_dir(dir: &Path) -> Result<Vec<MetricDefinition>> {
    let mut files = Vec::new();
    collect_yaml_files(dir, &mut files)?;
    files.sort();

    let mut metrics = Vec::new();
    for file in files {
        metrics.extend(load_file(&file)?);
    }
    Ok(metrics)
}

/// Loads a registry snapshot that is either a single file or a directory.
pub fn load(path: &Path) -> Result<Vec<MetricDefinition>> {
    let metadata = std::fs::metadata(path).map_err(|e| CodegenError::io(path, e))?;
    if metadata.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

fn collect_yaml_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| CodegenError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| CodegenError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| CodegenError::io(&path, e))?;
        if file_type.is_dir() {
            collect_yaml_files(&path, files)?;
        } else if file_type.is_symlink() && path.is_dir() {
            tracing::debug!(
                name: "Codegen.SymlinkedDirectorySkipped",
                path = %path.display()
            );
        } else if matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml")
        ) {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn loads_a_metric_group() {
        let yaml = r#"
groups:
  - id: metric.http.server.request.duration
    type: metric
    metric_name: http.server.request.duration
    stability: stable
    brief: "Duration of HTTP server requests."
    instrument: histogram
    unit: "s"
    attributes:
      - ref: http.request.method
"#;
        let metrics = load_str("http.yaml", yaml).unwrap();
        assert_eq!(
            metrics,
            vec![MetricDefinition {
                identifier: "http.server.request.duration".into(),
                instrument: InstrumentKind::Histogram,
                unit: "s".into(),
                description: Some("Duration of HTTP server requests.".into()),
                note: None,
                stability: Stability::Stable,
                deprecation: None,
            }]
        );
    }

    #[test]
    fn absent_or_blank_brief_yields_no_description() {
        let yaml = r#"
groups:
  - id: metric.system.disk.io
    type: metric
    metric_name: system.disk.io
    instrument: counter
    unit: "By"
  - id: metric.system.disk.operations
    type: metric
    metric_name: system.disk.operations
    instrument: counter
    unit: "{operation}"
    brief: "   "
"#;
        let metrics = load_str("system.yaml", yaml).unwrap();
        assert_eq!(metrics.len(), 2);
        assert!(metrics.iter().all(|m| m.description.is_none()));
        assert!(metrics.iter().all(|m| m.stability == Stability::Development));
    }

    #[test]
    fn skips_non_metric_groups() {
        let yaml = r#"
groups:
  - id: registry.http
    type: attribute_group
    brief: "HTTP attributes."
  - id: span.http.client
    type: span
"#;
        assert!(load_str("attrs.yaml", yaml).unwrap().is_empty());
    }

    #[test]
    fn empty_document_is_empty() {
        assert!(load_str("empty.yaml", "").unwrap().is_empty());
        assert!(load_str("empty.yaml", "groups: []").unwrap().is_empty());
    }

    #[test]
    fn loads_deprecation() {
        let yaml = r#"
groups:
  - id: metric.db.client.connections.use_time
    type: metric
    metric_name: db.client.connections.use_time
    instrument: histogram
    unit: "ms"
    brief: "Deprecated, use `db.client.connection.use_time` instead."
    deprecated:
      reason: renamed
      renamed_to: db.client.connection.use_time
      note: "The unit also changed from `ms` to `s`."
"#;
        let metric = load_str("db.yaml", yaml).unwrap().remove(0);
        assert_eq!(
            metric.deprecation,
            Some(Deprecation {
                replaced_by: "db.client.connection.use_time".into(),
                note: Some("The unit also changed from `ms` to `s`.".into()),
            })
        );
    }

    #[rstest]
    #[case::no_name("instrument: counter\n    unit: \"1\"", "metric_name")]
    #[case::no_unit("metric_name: a.b\n    instrument: counter", "unit")]
    #[case::blank_unit("metric_name: a.b\n    instrument: counter\n    unit: \"\"", "unit")]
    #[case::no_instrument("metric_name: a.b\n    unit: \"1\"", "instrument")]
    #[case::no_replacement(
        "metric_name: a.b\n    instrument: counter\n    unit: \"1\"\n    deprecated:\n      reason: renamed",
        "deprecated.renamed_to"
    )]
    fn missing_fields_are_fatal(#[case] fields: &str, #[case] expected_field: &str) {
        let yaml = format!("groups:\n  - id: metric.broken\n    type: metric\n    {fields}\n");
        match load_str("broken.yaml", &yaml) {
            Err(CodegenError::MissingField { context, field }) => {
                assert_eq!(field, expected_field);
                assert!(context.contains("metric.broken"));
                assert!(context.contains("broken.yaml"));
            }
            other => panic!("expected a missing field error, got {other:?}"),
        }
    }

    #[rstest]
    #[case("instrument: summary\n    unit: \"1\"", "summary")]
    #[case("instrument: counter\n    unit: \"1\"\n    stability: beta", "beta")]
    #[case(
        "instrument: counter\n    unit: \"1\"\n    deprecated:\n      reason: obsoleted\n      renamed_to: a.c",
        "obsoleted"
    )]
    fn invalid_tokens_are_fatal(#[case] fields: &str, #[case] expected_value: &str) {
        let yaml = format!(
            "groups:\n  - id: metric.a.b\n    type: metric\n    metric_name: a.b\n    {fields}\n"
        );
        match load_str("broken.yaml", &yaml) {
            Err(CodegenError::InvalidValue { value, .. }) => assert_eq!(value, expected_value),
            other => panic!("expected an invalid value error, got {other:?}"),
        }
    }

    #[test]
    fn yaml_syntax_errors_name_the_source() {
        let err = load_str("model/http.yaml", "groups: [").unwrap_err();
        assert!(err.to_string().contains("model/http.yaml"));
    }

    #[test]
    fn loads_directories_recursively_in_path_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(
            dir.path().join("nested/b.yml"),
            "groups:\n  - id: metric.b\n    type: metric\n    metric_name: b.metric\n    instrument: gauge\n    unit: \"1\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("a.yaml"),
            "groups:\n  - id: metric.a\n    type: metric\n    metric_name: a.metric\n    instrument: gauge\n    unit: \"1\"\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("README.md"), "not a registry file").unwrap();

        let metrics = load(dir.path()).unwrap();
        let identifiers: Vec<_> = metrics.iter().map(|m| m.identifier.as_str()).collect();
        assert_eq!(identifiers, ["a.metric", "b.metric"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("a.yaml"),
            "groups:\n  - id: metric.a\n    type: metric\n    metric_name: a.metric\n    instrument: gauge\n    unit: \"1\"\n",
        )
        .unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

        let metrics = load(dir.path()).unwrap();
        assert_eq!(metrics.len(), 1);
    }

    #[test]
    fn missing_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, CodegenError::Io { .. }));
    }
}
