use std::collections::HashSet;
use std::path::Path;

use opentelemetry_semantic_conventions::metric;
use opentelemetry_semconv_codegen::{registry, Catalog, CodegenConfig, Generator};

fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn generated_catalog_is_up_to_date() {
    let config =
        CodegenConfig::from_yaml_file(&manifest_dir().join("semconv-codegen.yaml")).unwrap();
    let stale = Generator::new(config).check().unwrap();
    assert!(
        stale.is_empty(),
        "{stale:?} out of date with model/, run `cargo xtask codegen`"
    );
}

#[test]
fn registry_snapshot_satisfies_catalog_properties() {
    let catalog = Catalog::new(registry::load(&manifest_dir().join("model")).unwrap()).unwrap();
    assert!(!catalog.is_empty());

    let mut constants = HashSet::new();
    for entry in catalog.iter() {
        let metric = &entry.metric;
        assert!(!metric.unit.trim().is_empty(), "{} has no unit", metric.identifier);
        for constant in entry.constants.iter() {
            assert!(constants.insert(constant.to_owned()), "{constant} emitted twice");
        }
        if let Some(deprecation) = &metric.deprecation {
            assert!(!deprecation.replaced_by.is_empty());
            assert_ne!(deprecation.replaced_by, metric.identifier);
            let description = metric.description.as_deref().unwrap_or_default();
            assert!(
                description.contains(&deprecation.replaced_by),
                "description of {} does not mention {}",
                metric.identifier,
                deprecation.replaced_by
            );
        }
    }
}

#[test]
fn stable_metrics_are_always_available() {
    assert_eq!(
        metric::HTTP_SERVER_REQUEST_DURATION_NAME,
        "http.server.request.duration"
    );
    assert_eq!(metric::HTTP_SERVER_REQUEST_DURATION_UNIT, "s");
    assert_eq!(
        metric::HTTP_SERVER_REQUEST_DURATION_DESCRIPTION,
        "Duration of HTTP server requests."
    );
    assert_eq!(metric::JVM_GC_DURATION_NAME, "jvm.gc.duration");
    assert_eq!(metric::DOTNET_GC_COLLECTIONS_UNIT, "{collection}");
}

#[cfg(feature = "semconv_experimental")]
#[test]
fn undescribed_metric_has_name_and_unit_only() {
    assert_eq!(metric::SYSTEM_DISK_IO_NAME, "system.disk.io");
    assert_eq!(metric::SYSTEM_DISK_IO_UNIT, "By");
}

#[cfg(feature = "semconv_experimental")]
#[test]
fn release_candidates_are_gated_with_development_metrics() {
    assert_eq!(metric::DB_CLIENT_OPERATION_DURATION_UNIT, "s");
}

#[cfg(feature = "semconv_experimental")]
#[test]
#[allow(deprecated)]
fn deprecated_metrics_keep_their_identifiers() {
    assert_eq!(
        metric::DB_CLIENT_CONNECTIONS_USE_TIME_NAME,
        "db.client.connections.use_time"
    );
    assert_eq!(metric::DB_CLIENT_CONNECTIONS_USE_TIME_UNIT, "ms");
    assert!(metric::DB_CLIENT_CONNECTIONS_USE_TIME_DESCRIPTION
        .contains(metric::DB_CLIENT_CONNECTION_USE_TIME_NAME));
}

#[cfg(feature = "semconv_experimental")]
#[test]
#[allow(deprecated)]
fn deprecated_metrics_may_point_outside_the_catalog() {
    assert_eq!(
        metric::MESSAGING_PUBLISH_MESSAGES_NAME,
        "messaging.publish.messages"
    );
    assert!(metric::MESSAGING_PUBLISH_MESSAGES_DESCRIPTION
        .contains("messaging.client.produced.messages"));
}
