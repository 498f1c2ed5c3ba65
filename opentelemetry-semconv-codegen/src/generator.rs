//! # Generator
//!
//! Drives a generation run: load the registry snapshot, validate it into a
//! [`Catalog`], render every configured output in memory and only then touch
//! the filesystem. Outputs are staged in temporary files next to their
//! destination and persisted once all of them have been staged. If persisting
//! one of them fails, the outputs already replaced get their previous content
//! back, so a failed run leaves existing outputs untouched.
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::CodegenConfig;
use crate::emit::Target;
use crate::error::{CodegenError, Result};
use crate::model::Catalog;
use crate::registry;

/// Content rendered for one configured output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedOutput {
    /// Output flavor.
    pub target: Target,
    /// Destination file.
    pub path: PathBuf,
    /// Full file content.
    pub content: String,
}

impl RenderedOutput {
    /// Whether the destination already holds exactly this content.
    pub fn is_up_to_date(&self) -> bool {
        std::fs::read(&self.path)
            .map(|existing| existing == self.content.as_bytes())
            .unwrap_or(false)
    }
}

/// Summary of a [`Generator::generate`] run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of metrics in the catalog.
    pub metrics: usize,
    /// Outputs whose content changed and were rewritten.
    pub written: Vec<PathBuf>,
    /// Outputs that already held the rendered content.
    pub unchanged: Vec<PathBuf>,
}

/// Generates the configured outputs from a registry snapshot.
#[derive(Clone, Debug)]
pub struct Generator {
    config: CodegenConfig,
}

impl Generator {
    /// Creates a generator for `config`.
    pub fn new(config: CodegenConfig) -> Self {
        Generator { config }
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Loads and validates the registry snapshot.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let registry = &self.config.registry;
        let metrics = registry::load(registry)?;
        if metrics.is_empty() {
            return Err(CodegenError::EmptyRegistry(registry.display().to_string()));
        }
        let catalog = Catalog::new(metrics)?;
        tracing::info!(
            name: "Codegen.RegistryLoaded",
            registry = %registry.display(),
            metrics = catalog.len()
        );
        Ok(catalog)
    }

    /// Renders every configured output of `catalog` without writing anything.
    pub fn render(&self, catalog: &Catalog) -> Result<Vec<RenderedOutput>> {
        let feature = self.config.experimental_feature.as_deref();
        self.config
            .outputs
            .iter()
            .map(|output| {
                let content = output.target.emitter(feature).render(catalog)?;
                Ok(RenderedOutput {
                    target: output.target,
                    path: output.path.clone(),
                    content,
                })
            })
            .collect()
    }

    /// Regenerates every configured output.
    ///
    /// Outputs already holding the rendered content are left alone. On error
    /// no output is modified.
    pub fn generate(&self) -> Result<GenerationReport> {
        let catalog = self.load_catalog()?;
        let rendered = self.render(&catalog)?;
        check_destinations(&rendered)?;

        let mut report = GenerationReport {
            metrics: catalog.len(),
            ..Default::default()
        };
        let mut staged = Vec::new();
        for output in rendered {
            if output.is_up_to_date() {
                tracing::debug!(
                    name: "Codegen.OutputUnchanged",
                    path = %output.path.display()
                );
                report.unchanged.push(output.path);
            } else {
                staged.push(stage(output)?);
            }
        }

        report.written = commit(staged)?;
        Ok(report)
    }

    /// Lists the outputs that are missing or differ from a fresh render,
    /// without writing anything.
    pub fn check(&self) -> Result<Vec<PathBuf>> {
        let catalog = self.load_catalog()?;
        let stale: Vec<PathBuf> = self
            .render(&catalog)?
            .into_iter()
            .filter(|output| !output.is_up_to_date())
            .map(|output| output.path)
            .collect();
        for path in &stale {
            tracing::warn!(
                name: "Codegen.OutputStale",
                path = %path.display()
            );
        }
        Ok(stale)
    }
}

/// An output written to a temporary file, waiting to replace its destination.
struct Staged {
    temp: NamedTempFile,
    output: RenderedOutput,
    /// Destination content before the run, `None` if it did not exist.
    previous: Option<Vec<u8>>,
}

/// Rejects destinations that are directories or configured twice.
fn check_destinations(outputs: &[RenderedOutput]) -> Result<()> {
    let mut seen = HashSet::new();
    for output in outputs {
        if !seen.insert(output.path.as_path()) {
            return Err(CodegenError::InvalidOutput {
                path: output.path.clone(),
                reason: "configured more than once",
            });
        }
        if output.path.is_dir() {
            return Err(CodegenError::InvalidOutput {
                path: output.path.clone(),
                reason: "destination is a directory",
            });
        }
    }
    Ok(())
}

/// Writes `output` into a temporary file in its destination directory.
fn stage(output: RenderedOutput) -> Result<Staged> {
    let previous = match std::fs::read(&output.path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(CodegenError::io(&output.path, e)),
    };
    let dir = match output.path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| CodegenError::io(dir, e))?;
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| CodegenError::io(dir, e))?;
    temp.write_all(output.content.as_bytes())
        .and_then(|_| temp.flush())
        .map_err(|e| CodegenError::io(temp.path(), e))?;
    Ok(Staged {
        temp,
        output,
        previous,
    })
}

/// Moves every staged output into place, restoring the already replaced
/// destinations when one of them fails.
fn commit(staged: Vec<Staged>) -> Result<Vec<PathBuf>> {
    let mut persisted: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::new();
    for Staged {
        temp,
        output,
        previous,
    } in staged
    {
        if let Err(e) = temp.persist(&output.path) {
            let error = CodegenError::io(&output.path, e.error);
            restore(persisted);
            return Err(error);
        }
        tracing::info!(
            name: "Codegen.OutputWritten",
            target = output.target.name(),
            path = %output.path.display(),
            bytes = output.content.len()
        );
        persisted.push((output.path, previous));
    }
    Ok(persisted.into_iter().map(|(path, _)| path).collect())
}

fn restore(persisted: Vec<(PathBuf, Option<Vec<u8>>)>) {
    for (path, previous) in persisted.into_iter().rev() {
        let restored = match previous {
            Some(bytes) => std::fs::write(&path, bytes),
            None => std::fs::remove_file(&path),
        };
        match restored {
            Ok(()) => tracing::warn!(
                name: "Codegen.OutputRestored",
                path = %path.display()
            ),
            Err(e) => tracing::error!(
                name: "Codegen.OutputRestoreFailed",
                path = %path.display(),
                error = %e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    const REGISTRY: &str = r#"
groups:
  - id: metric.http.server.request.duration
    type: metric
    metric_name: http.server.request.duration
    stability: stable
    brief: "Duration of HTTP server requests."
    instrument: histogram
    unit: "s"
  - id: metric.system.disk.io
    type: metric
    metric_name: system.disk.io
    instrument: counter
    unit: "By"
"#;

    fn config(dir: &Path, registry: &str) -> CodegenConfig {
        std::fs::write(dir.join("registry.yaml"), registry).unwrap();
        CodegenConfig {
            registry: dir.join("registry.yaml"),
            experimental_feature: Some("semconv_experimental".into()),
            outputs: vec![
                OutputConfig {
                    target: Target::Rust,
                    path: dir.join("src/metric.rs"),
                },
                OutputConfig {
                    target: Target::Json,
                    path: dir.join("metric.json"),
                },
            ],
        }
    }

    #[test]
    fn generate_writes_all_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(config(dir.path(), REGISTRY));

        let report = generator.generate().unwrap();
        assert_eq!(report.metrics, 2);
        assert_eq!(report.written.len(), 2);
        assert!(report.unchanged.is_empty());

        let rust = std::fs::read_to_string(dir.path().join("src/metric.rs")).unwrap();
        assert!(rust.contains(
            "pub const HTTP_SERVER_REQUEST_DURATION_NAME: &str = \"http.server.request.duration\";"
        ));
        let json = std::fs::read_to_string(dir.path().join("metric.json")).unwrap();
        assert!(json.contains("\"HttpServerRequestDuration\""));
    }

    #[test]
    fn second_run_is_byte_identical_and_skips_writes() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(config(dir.path(), REGISTRY));

        generator.generate().unwrap();
        let first = std::fs::read(dir.path().join("src/metric.rs")).unwrap();

        let report = generator.generate().unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.unchanged.len(), 2);
        assert_eq!(std::fs::read(dir.path().join("src/metric.rs")).unwrap(), first);
    }

    #[test]
    fn check_reports_missing_and_stale_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(config(dir.path(), REGISTRY));

        assert_eq!(generator.check().unwrap().len(), 2);

        generator.generate().unwrap();
        assert!(generator.check().unwrap().is_empty());

        std::fs::write(dir.path().join("metric.json"), "[]\n").unwrap();
        assert_eq!(
            generator.check().unwrap(),
            vec![dir.path().join("metric.json")]
        );
    }

    #[test]
    fn failed_generation_leaves_outputs_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(config(dir.path(), REGISTRY));
        generator.generate().unwrap();
        let before = std::fs::read(dir.path().join("src/metric.rs")).unwrap();

        let colliding = format!(
            "{REGISTRY}  - id: metric.http_server.request.duration
    type: metric
    metric_name: http_server.request.duration
    instrument: histogram
    unit: \"s\"
"
        );
        let generator = Generator::new(config(dir.path(), &colliding));
        assert!(matches!(
            generator.generate(),
            Err(CodegenError::NameCollision { .. })
        ));
        assert_eq!(std::fs::read(dir.path().join("src/metric.rs")).unwrap(), before);
    }

    #[test]
    fn empty_registry_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(config(dir.path(), "groups: []\n"));
        assert!(matches!(
            generator.generate(),
            Err(CodegenError::EmptyRegistry(_))
        ));
        assert!(!dir.path().join("src").exists());
        assert!(!dir.path().join("metric.json").exists());
    }


    fn rendered(target: Target, path: PathBuf, content: &str) -> RenderedOutput {
        RenderedOutput {
            target,
            path,
            content: content.to_owned(),
        }
    }

    #[test]
    fn directory_destination_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path(), REGISTRY);
        config.outputs = vec![
            OutputConfig {
                target: Target::Rust,
                path: dir.path().join("a.rs"),
            },
            OutputConfig {
                target: Target::Json,
                path: dir.path().join("z.json"),
            },
        ];
        std::fs::create_dir(dir.path().join("z.json")).unwrap();
        std::fs::write(dir.path().join("z.json/keep"), "").unwrap();

        let err = Generator::new(config).generate().unwrap_err();
        assert!(matches!(
            err,
            CodegenError::InvalidOutput { ref path, .. } if path.ends_with("z.json")
        ));
        assert!(!dir.path().join("a.rs").exists());
    }

    #[test]
    fn duplicate_destinations_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path(), REGISTRY);
        let path = dir.path().join("metric.out");
        config.outputs = vec![
            OutputConfig {
                target: Target::Rust,
                path: path.clone(),
            },
            OutputConfig {
                target: Target::Json,
                path: path.clone(),
            },
        ];

        let err = Generator::new(config).generate().unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOutput { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn failed_persist_restores_replaced_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("a.rs");
        let created = dir.path().join("b.rs");
        let blocked = dir.path().join("z.json");
        std::fs::write(&existing, "old content").unwrap();

        let staged = vec![
            stage(rendered(Target::Rust, existing.clone(), "new content")).unwrap(),
            stage(rendered(Target::Rust, created.clone(), "new file")).unwrap(),
            stage(rendered(Target::Json, blocked.clone(), "[]\n")).unwrap(),
        ];
        // the last destination turns into a directory after staging
        std::fs::create_dir(&blocked).unwrap();
        std::fs::write(blocked.join("keep"), "").unwrap();

        let err = commit(staged).unwrap_err();
        assert!(matches!(err, CodegenError::Io { ref path, .. } if path == &blocked));
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "old content");
        assert!(!created.exists());
        assert!(blocked.join("keep").exists());
    }
}
