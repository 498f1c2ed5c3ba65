use std::path::{Path, PathBuf};
use std::process::Command;

use opentelemetry_semconv_codegen::{
    registry, Catalog, CodegenConfig, CodegenError, Generator, OutputConfig, Target,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn config(registry: PathBuf, out_dir: &Path) -> CodegenConfig {
    CodegenConfig {
        registry,
        experimental_feature: Some("semconv_experimental".into()),
        outputs: vec![
            OutputConfig {
                target: Target::Rust,
                path: out_dir.join("metric.rs"),
            },
            OutputConfig {
                target: Target::Json,
                path: out_dir.join("metric.json"),
            },
        ],
    }
}

#[test]
fn test_generate_from_registry_directory() {
    let out = tempfile::tempdir().unwrap();
    let report = Generator::new(config(fixture("registry"), out.path()))
        .generate()
        .unwrap();
    assert_eq!(report.metrics, 6);

    let rust = std::fs::read_to_string(out.path().join("metric.rs")).unwrap();

    // name, unit and description of a described metric
    assert!(rust.contains(
        "pub const HTTP_SERVER_REQUEST_DURATION_NAME: &str = \"http.server.request.duration\";\n"
    ));
    assert!(rust.contains("pub const HTTP_SERVER_REQUEST_DURATION_UNIT: &str = \"s\";\n"));
    assert!(rust.contains(
        "pub const HTTP_SERVER_REQUEST_DURATION_DESCRIPTION: &str = \"Duration of HTTP server requests.\";\n"
    ));

    // no description, no invented placeholder
    assert!(rust.contains("pub const SYSTEM_DISK_IO_NAME: &str = \"system.disk.io\";\n"));
    assert!(rust.contains("pub const SYSTEM_DISK_IO_UNIT: &str = \"By\";\n"));
    assert!(!rust.contains("SYSTEM_DISK_IO_DESCRIPTION"));

    // deprecated metrics name their replacement
    assert_eq!(
        rust.matches("#[deprecated(note = \"Replaced by `system.memory.usage`.\")]\n")
            .count(),
        3
    );

    // attribute groups are skipped
    assert!(!rust.contains("REGISTRY_HTTP"));

    let identifiers: Vec<_> = rust
        .lines()
        .filter(|l| l.contains("_NAME: &str"))
        .map(|l| l.split_whitespace().nth(2).unwrap().trim_end_matches(':'))
        .collect();
    assert_eq!(
        identifiers,
        [
            "HTTP_CLIENT_REQUEST_DURATION_NAME",
            "HTTP_SERVER_ACTIVE_REQUESTS_NAME",
            "HTTP_SERVER_REQUEST_DURATION_NAME",
            "SYSTEM_DISK_IO_NAME",
            "SYSTEM_MEMORY_USAGE_NAME",
            "SYSTEM_MEMORY_USED_NAME",
        ]
    );

    let table: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.path().join("metric.json")).unwrap())
            .unwrap();
    assert_eq!(table.as_array().unwrap().len(), 6);
    assert_eq!(table[5]["deprecated_by"], "system.memory.usage");
}

#[test]
fn test_regeneration_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    Generator::new(config(fixture("registry"), first.path()))
        .generate()
        .unwrap();
    Generator::new(config(fixture("registry"), second.path()))
        .generate()
        .unwrap();

    for file in ["metric.rs", "metric.json"] {
        assert_eq!(
            std::fs::read(first.path().join(file)).unwrap(),
            std::fs::read(second.path().join(file)).unwrap(),
            "{file} differs between runs"
        );
    }
}

#[test]
fn test_collision_writes_nothing() {
    let out = tempfile::tempdir().unwrap();
    let err = Generator::new(config(fixture("collision"), out.path()))
        .generate()
        .unwrap_err();

    match err {
        CodegenError::NameCollision {
            constant,
            first,
            second,
        } => {
            assert_eq!(constant, "DB_CLIENT_OPERATION_DURATION_NAME");
            assert_eq!(first, "db.client.operation.duration");
            assert_eq!(second, "db_client.operation.duration");
        }
        other => panic!("expected a collision, got {other}"),
    }
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_unit_writes_nothing() {
    let out = tempfile::tempdir().unwrap();
    let err = Generator::new(config(fixture("missing_unit"), out.path()))
        .generate()
        .unwrap_err();

    assert!(matches!(err, CodegenError::MissingField { field: "unit", .. }));
    assert!(err.to_string().contains("metric.faas.errors"));
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_catalog_properties_hold_for_fixture_registry() {
    let catalog = Catalog::new(registry::load(&fixture("registry")).unwrap()).unwrap();

    let mut constants = std::collections::HashSet::new();
    for entry in catalog.iter() {
        let metric = &entry.metric;
        assert!(!metric.identifier.is_empty());
        assert!(!metric.unit.is_empty());
        assert_eq!(entry.constants.description.is_some(), metric.description.is_some());
        for constant in entry.constants.iter() {
            assert!(constants.insert(constant.to_owned()), "{constant} emitted twice");
        }
        if let Some(deprecation) = &metric.deprecation {
            assert!(!deprecation.replaced_by.is_empty());
            assert!(metric
                .description
                .as_deref()
                .unwrap_or_default()
                .contains(&deprecation.replaced_by));
        }
    }
}

#[test]
fn test_cli_check_fails_until_generated() {
    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("metric.rs");
    let run = |command: &str| {
        Command::new(env!("CARGO_BIN_EXE_semconv-codegen"))
            .arg(command)
            .arg("--registry")
            .arg(fixture("registry"))
            .arg("--target")
            .arg("rust")
            .arg("--output")
            .arg(&output)
            .env_remove("OTEL_SEMCONV_REGISTRY_PATH")
            .status()
            .unwrap()
    };

    assert!(!run("check").success());
    assert!(run("generate").success());
    assert!(run("check").success());
    assert!(output.exists());
}
