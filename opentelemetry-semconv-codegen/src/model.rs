//! # Metric catalog model
//!
//! [`MetricDefinition`] is the single record the loader produces and the
//! emitters consume. A [`Catalog`] is a validated, identifier-ordered set of
//! definitions; building one is the last point at which generation can fail.
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CodegenError, Result};
use crate::naming::{ConstantNames, NameTable};

/// Aggregation semantics of a metric instrument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstrumentKind {
    /// Monotonic sum.
    Counter,
    /// Non-monotonic sum.
    UpDownCounter,
    /// Distribution of recorded values.
    Histogram,
    /// Point-in-time value.
    Gauge,
}

impl InstrumentKind {
    /// Parses the registry token (`counter`, `updowncounter`, `histogram`, `gauge`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "counter" => Some(InstrumentKind::Counter),
            "updowncounter" => Some(InstrumentKind::UpDownCounter),
            "histogram" => Some(InstrumentKind::Histogram),
            "gauge" => Some(InstrumentKind::Gauge),
            _ => None,
        }
    }

    /// The registry token of this instrument.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKind::Counter => "counter",
            InstrumentKind::UpDownCounter => "updowncounter",
            InstrumentKind::Histogram => "histogram",
            InstrumentKind::Gauge => "gauge",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle marker of a metric identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stability {
    /// Guaranteed not to change.
    Stable,
    /// Expected to become stable without further changes.
    ReleaseCandidate,
    /// May still evolve.
    #[default]
    Development,
}

impl Stability {
    /// Parses the registry token (`stable`, `release_candidate`, `development`).
    ///
    /// `experimental` is accepted as an older spelling of `development`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "stable" => Some(Stability::Stable),
            "release_candidate" => Some(Stability::ReleaseCandidate),
            "development" | "experimental" => Some(Stability::Development),
            _ => None,
        }
    }

    /// The registry token of this stability level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::ReleaseCandidate => "release_candidate",
            Stability::Development => "development",
        }
    }

    /// Whether consumers should opt in before relying on the metric.
    pub fn is_experimental(&self) -> bool {
        !matches!(self, Stability::Stable)
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deprecation notice of a metric that was replaced by another one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deprecation {
    /// Identifier of the replacement metric.
    pub replaced_by: String,
    /// Extra migration guidance, e.g. a unit change.
    pub note: Option<String>,
}

/// One metric of the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricDefinition {
    /// Dotted identifier, unique across the catalog.
    pub identifier: String,
    /// Instrument kind. Informational only.
    pub instrument: InstrumentKind,
    /// UCUM-like unit token such as `s`, `By` or `{request}`.
    pub unit: String,
    /// Human readable description; `None` when the registry defines none.
    pub description: Option<String>,
    /// Long-form notes, rendered into the generated documentation only.
    pub note: Option<String>,
    /// Lifecycle marker.
    pub stability: Stability,
    /// Present only for deprecated metrics.
    pub deprecation: Option<Deprecation>,
}

impl MetricDefinition {
    /// Whether the metric has been replaced.
    pub fn is_deprecated(&self) -> bool {
        self.deprecation.is_some()
    }
}

/// A metric together with the names of its constants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The registry definition.
    pub metric: MetricDefinition,
    /// Constant names derived from the identifier.
    pub constants: ConstantNames,
}

/// Validated, immutable set of metric definitions ordered by identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    /// Validates `metrics` and builds a catalog out of them.
    ///
    /// Fails on the first malformed or duplicate identifier, empty unit or
    /// constant name collision. A deprecated metric must name a replacement
    /// other than itself and mention it in its description. The replacement
    /// may live outside this catalog, which is only logged. Nothing is
    /// returned on failure.
    pub fn new(metrics: impl IntoIterator<Item = MetricDefinition>) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for metric in metrics {
            if metric.unit.trim().is_empty() {
                return Err(CodegenError::MissingField {
                    context: format!("metric `{}`", metric.identifier),
                    field: "unit",
                });
            }
            let constants = ConstantNames::for_metric(&metric)?;
            if entries.contains_key(&metric.identifier) {
                return Err(CodegenError::DuplicateIdentifier {
                    identifier: metric.identifier,
                });
            }
            entries.insert(metric.identifier.clone(), CatalogEntry { metric, constants });
        }

        let mut names = NameTable::default();
        for entry in entries.values() {
            names.claim(&entry.metric.identifier, &entry.constants)?;
        }

        for entry in entries.values() {
            let Some(deprecation) = &entry.metric.deprecation else {
                continue;
            };
            let replaced_by = deprecation.replaced_by.trim();
            if replaced_by.is_empty() || replaced_by == entry.metric.identifier {
                return Err(CodegenError::DanglingDeprecation {
                    identifier: entry.metric.identifier.clone(),
                    replaced_by: deprecation.replaced_by.clone(),
                });
            }
            let mentions_replacement = entry
                .metric
                .description
                .as_deref()
                .is_some_and(|description| description.contains(replaced_by));
            if !mentions_replacement {
                return Err(CodegenError::UndescribedDeprecation {
                    identifier: entry.metric.identifier.clone(),
                    replaced_by: replaced_by.to_owned(),
                });
            }
            if !entries.contains_key(replaced_by) {
                // Replacements may be defined outside this snapshot.
                tracing::warn!(
                    name: "Codegen.DeprecationTargetMissing",
                    metric = entry.metric.identifier.as_str(),
                    replaced_by = replaced_by,
                    message = "Replacement of a deprecated metric is not part of this catalog"
                );
            }
        }

        Ok(Catalog { entries })
    }

    /// Number of metrics in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no metric.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks a metric up by identifier.
    pub fn get(&self, identifier: &str) -> Option<&CatalogEntry> {
        self.entries.get(identifier)
    }

    /// Entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn metric(identifier: &str) -> MetricDefinition {
        MetricDefinition {
            identifier: identifier.to_owned(),
            instrument: InstrumentKind::Histogram,
            unit: "s".to_owned(),
            description: Some(format!("Description of {identifier}.")),
            note: None,
            stability: Stability::Stable,
            deprecation: None,
        }
    }

    fn deprecated(identifier: &str, replaced_by: &str) -> MetricDefinition {
        MetricDefinition {
            description: Some(format!("Deprecated, use `{replaced_by}` instead.")),
            deprecation: Some(Deprecation {
                replaced_by: replaced_by.to_owned(),
                note: None,
            }),
            ..metric(identifier)
        }
    }

    #[rstest]
    #[case("counter", Some(InstrumentKind::Counter))]
    #[case("updowncounter", Some(InstrumentKind::UpDownCounter))]
    #[case("histogram", Some(InstrumentKind::Histogram))]
    #[case("gauge", Some(InstrumentKind::Gauge))]
    #[case("summary", None)]
    #[case("Counter", None)]
    fn parses_instrument_tokens(#[case] token: &str, #[case] expected: Option<InstrumentKind>) {
        assert_eq!(InstrumentKind::from_token(token), expected);
        if let Some(kind) = expected {
            assert_eq!(kind.as_str(), token);
        }
    }

    #[rstest]
    #[case("stable", Some(Stability::Stable), false)]
    #[case("release_candidate", Some(Stability::ReleaseCandidate), true)]
    #[case("development", Some(Stability::Development), true)]
    #[case("experimental", Some(Stability::Development), true)]
    #[case("beta", None, false)]
    fn parses_stability_tokens(
        #[case] token: &str,
        #[case] expected: Option<Stability>,
        #[case] experimental: bool,
    ) {
        let parsed = Stability::from_token(token);
        assert_eq!(parsed, expected);
        if let Some(stability) = parsed {
            assert_eq!(stability.is_experimental(), experimental);
        }
    }

    #[test]
    fn catalog_is_sorted_by_identifier() {
        let catalog = Catalog::new([
            metric("http.server.request.duration"),
            metric("db.client.operation.duration"),
            metric("http.client.request.duration"),
        ])
        .unwrap();

        let identifiers: Vec<_> = catalog.iter().map(|e| e.metric.identifier.as_str()).collect();
        assert_eq!(
            identifiers,
            [
                "db.client.operation.duration",
                "http.client.request.duration",
                "http.server.request.duration"
            ]
        );
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("http.client.request.duration").is_some());
        assert!(catalog.get("http.client.duration").is_none());
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let err = Catalog::new([metric("jvm.gc.duration"), metric("jvm.gc.duration")]).unwrap_err();
        assert!(
            matches!(err, CodegenError::DuplicateIdentifier { ref identifier } if identifier == "jvm.gc.duration")
        );
    }

    #[test]
    fn rejects_normalization_collisions() {
        let err = Catalog::new([metric("a.b_c"), metric("a_b.c")]).unwrap_err();
        assert!(matches!(err, CodegenError::NameCollision { .. }));

        let err = Catalog::new([metric("system.cpu.time"), metric("System.CPU.time")]).unwrap_err();
        assert!(matches!(err, CodegenError::NameCollision { .. }));
    }

    #[test]
    fn rejects_empty_unit() {
        let mut bad = metric("go.goroutine.count");
        bad.unit = "  ".to_owned();
        let err = Catalog::new([bad]).unwrap_err();
        assert!(matches!(err, CodegenError::MissingField { field: "unit", .. }));
    }

    #[test]
    fn accepts_deprecations_pointing_into_the_catalog() {
        let catalog = Catalog::new([
            deprecated("db.client.connections.max", "db.client.connection.max"),
            metric("db.client.connection.max"),
        ])
        .unwrap();
        let entry = catalog.get("db.client.connections.max").unwrap();
        assert!(entry.metric.is_deprecated());
    }

    #[test]
    fn rejects_table_token_collisions() {
        let err = Catalog::new([metric("jvm.cpu.load_1m"), metric("jvm.cpu.load1m")]).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::NameCollision { ref constant, .. } if constant == "JvmCpuLoad1m"
        ));
    }

    #[test]
    fn accepts_replacements_outside_the_catalog() {
        let catalog = Catalog::new([deprecated(
            "messaging.publish.messages",
            "messaging.client.produced.messages",
        )])
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("messaging.client.produced.messages").is_none());
    }

    #[rstest]
    #[case("db.client.connections.max")]
    #[case("")]
    #[case("  ")]
    fn rejects_missing_or_self_replacements(#[case] replaced_by: &str) {
        let err = Catalog::new([deprecated("db.client.connections.max", replaced_by)]).unwrap_err();
        assert!(matches!(err, CodegenError::DanglingDeprecation { .. }));
    }

    #[rstest]
    #[case(None)]
    #[case(Some("Deprecated."))]
    fn rejects_deprecations_whose_description_omits_the_replacement(
        #[case] description: Option<&str>,
    ) {
        let mut old = deprecated("a.old", "a.new");
        old.description = description.map(str::to_owned);
        let err = Catalog::new([old, metric("a.new")]).unwrap_err();
        match err {
            CodegenError::UndescribedDeprecation {
                identifier,
                replaced_by,
            } => {
                assert_eq!(identifier, "a.old");
                assert_eq!(replaced_by, "a.new");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
