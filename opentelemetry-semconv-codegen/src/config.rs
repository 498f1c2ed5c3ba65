//! # Generator configuration
//!
//! The generator is driven by a small YAML document:
//!
//! ```yaml
//! registry: model
//! experimental_feature: semconv_experimental
//! outputs:
//!   - target: rust
//!     path: src/metric.rs
//!   - target: json
//!     path: target/metric.json
//! ```
//!
//! Relative paths are resolved against the directory of the configuration
//! file. `OTEL_SEMCONV_REGISTRY_PATH` overrides `registry` when set.
use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::emit::Target;
use crate::error::{CodegenError, Result};

/// Overrides the registry snapshot location.
pub const OTEL_SEMCONV_REGISTRY_PATH: &str = "OTEL_SEMCONV_REGISTRY_PATH";

const DEFAULT_REGISTRY: &str = "model";
const DEFAULT_EXPERIMENTAL_FEATURE: &str = "semconv_experimental";
const DEFAULT_RUST_OUTPUT: &str = "src/metric.rs";

fn default_registry() -> PathBuf {
    PathBuf::from(DEFAULT_REGISTRY)
}

fn default_experimental_feature() -> Option<String> {
    Some(DEFAULT_EXPERIMENTAL_FEATURE.to_owned())
}

fn default_outputs() -> Vec<OutputConfig> {
    vec![OutputConfig {
        target: Target::Rust,
        path: PathBuf::from(DEFAULT_RUST_OUTPUT),
    }]
}

/// One file the generator produces.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output flavor.
    pub target: Target,
    /// Destination file.
    pub path: PathBuf,
}

/// Configuration of a generation run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    /// Registry snapshot, either a YAML file or a directory of YAML files.
    #[serde(default = "default_registry")]
    pub registry: PathBuf,

    /// Cargo feature gating non-stable metrics in Rust output. `null`
    /// disables gating.
    #[serde(default = "default_experimental_feature")]
    pub experimental_feature: Option<String>,

    /// Files to produce.
    #[serde(default = "default_outputs")]
    pub outputs: Vec<OutputConfig>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            registry: default_registry(),
            experimental_feature: default_experimental_feature(),
            outputs: default_outputs(),
        }
    }
}

impl CodegenConfig {
    /// Creates a CodegenConfig from a YAML string
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        if yaml_str.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml_str).map_err(|source| CodegenError::Yaml {
            source_name: "configuration".to_owned(),
            source,
        })
    }

    /// Creates a CodegenConfig from a YAML file, resolving relative paths
    /// against the file's directory.
    pub fn from_yaml_file(file_path: &Path) -> Result<Self> {
        let yaml_str =
            std::fs::read_to_string(file_path).map_err(|e| CodegenError::io(file_path, e))?;
        let config = Self::from_yaml(&yaml_str).map_err(|e| match e {
            CodegenError::Yaml { source, .. } => CodegenError::Yaml {
                source_name: file_path.display().to_string(),
                source,
            },
            other => other,
        })?;
        let base = file_path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Resolves every relative path of the configuration against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        let resolve = |path: PathBuf| {
            if path.is_relative() {
                base.join(path)
            } else {
                path
            }
        };
        self.registry = resolve(self.registry);
        self.outputs = self
            .outputs
            .into_iter()
            .map(|output| OutputConfig {
                path: resolve(output.path),
                ..output
            })
            .collect();
        self
    }

    /// Applies `OTEL_SEMCONV_REGISTRY_PATH` when it is set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(registry) = env::var(OTEL_SEMCONV_REGISTRY_PATH)
            .ok()
            .filter(|s| !s.trim().is_empty())
        {
            self.registry = PathBuf::from(registry.trim());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_empty_yaml() {
        let config = CodegenConfig::from_yaml("").unwrap();
        assert_eq!(config, CodegenConfig::default());
        assert_eq!(config.registry, PathBuf::from("model"));
        assert_eq!(
            config.experimental_feature.as_deref(),
            Some("semconv_experimental")
        );
        assert_eq!(config.outputs.len(), 1);
        assert_eq!(config.outputs[0].target, Target::Rust);
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml_str = r#"
        registry: registry/metrics
        experimental_feature: null
        outputs:
          - target: rust
            path: src/metric.rs
          - target: json
            path: /tmp/metric.json
        "#;
        let config = CodegenConfig::from_yaml(yaml_str).unwrap();

        assert_eq!(config.registry, PathBuf::from("registry/metrics"));
        assert_eq!(config.experimental_feature, None);
        assert_eq!(
            config.outputs,
            vec![
                OutputConfig {
                    target: Target::Rust,
                    path: PathBuf::from("src/metric.rs"),
                },
                OutputConfig {
                    target: Target::Json,
                    path: PathBuf::from("/tmp/metric.json"),
                },
            ]
        );
    }

    #[test]
    fn test_config_rejects_unknown_target_and_fields() {
        assert!(CodegenConfig::from_yaml("outputs:\n  - target: go\n    path: x.go\n").is_err());
        assert!(CodegenConfig::from_yaml("registy: typo\n").is_err());
    }

    #[test]
    fn test_config_from_yaml_file_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("semconv.yaml");
        std::fs::write(
            &file,
            "registry: model\noutputs:\n  - target: json\n    path: out/metric.json\n",
        )
        .unwrap();

        let config = CodegenConfig::from_yaml_file(&file).unwrap();
        assert_eq!(config.registry, dir.path().join("model"));
        assert_eq!(config.outputs[0].path, dir.path().join("out/metric.json"));
    }

    #[test]
    fn test_config_file_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("broken.yaml");
        std::fs::write(&file, "outputs: {").unwrap();

        let err = CodegenConfig::from_yaml_file(&file).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));

        let err = CodegenConfig::from_yaml_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, CodegenError::Io { .. }));
    }

    #[test]
    fn test_registry_env_override() {
        temp_env::with_var(OTEL_SEMCONV_REGISTRY_PATH, Some("/srv/registry"), || {
            let config = CodegenConfig::default().with_env_overrides();
            assert_eq!(config.registry, PathBuf::from("/srv/registry"));
        });

        temp_env::with_var(OTEL_SEMCONV_REGISTRY_PATH, Some("  "), || {
            let config = CodegenConfig::default().with_env_overrides();
            assert_eq!(config.registry, PathBuf::from("model"));
        });

        temp_env::with_var_unset(OTEL_SEMCONV_REGISTRY_PATH, || {
            let config = CodegenConfig::default().with_env_overrides();
            assert_eq!(config.registry, PathBuf::from("model"));
        });
    }
}
