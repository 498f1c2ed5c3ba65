//! Constant naming.
//!
//! A metric identifier such as `http.server.request.duration` is split on
//! `.`, `_` and `-`, every token is upper-cased and the tokens are joined with
//! `_`. Each metric then owns up to three constants:
//!
//! | Constant | Example |
//! |:-|:-|
//! | name | `HTTP_SERVER_REQUEST_DURATION_NAME` |
//! | unit | `HTTP_SERVER_REQUEST_DURATION_UNIT` |
//! | description | `HTTP_SERVER_REQUEST_DURATION_DESCRIPTION` |
//!
//! The rule is lossy: `a.b_c`, `a_b.c` and `A.b-c` all map to `A_B_C`, which
//! is why [`NameTable`] checks every emitted constant for collisions. The
//! PascalCase token of the data table is lossy in its own way
//! (`load_1m` and `load1m` are both `Load1m`) and is checked as well.
use std::collections::HashMap;

use crate::error::{CodegenError, Result};
use crate::model::MetricDefinition;

const NAME_SUFFIX: &str = "_NAME";
const UNIT_SUFFIX: &str = "_UNIT";
const DESCRIPTION_SUFFIX: &str = "_DESCRIPTION";

fn is_separator(c: char) -> bool {
    matches!(c, '.' | '_' | '-')
}

/// Checks that `identifier` can be normalized into a constant name.
pub fn validate_identifier(identifier: &str) -> Result<()> {
    let invalid = |reason| {
        Err(CodegenError::InvalidIdentifier {
            identifier: identifier.to_owned(),
            reason,
        })
    };

    match identifier.chars().next() {
        None => return invalid("identifier is empty"),
        Some(c) if !c.is_ascii_alphabetic() => {
            return invalid("identifier must start with an ASCII letter")
        }
        Some(_) => {}
    }
    if !identifier
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_separator(c))
    {
        return invalid("only ASCII letters, digits, `.`, `_` and `-` are allowed");
    }
    if identifier.split(is_separator).any(str::is_empty) {
        return invalid("identifier contains an empty segment");
    }
    Ok(())
}

/// Normalizes an identifier into the shared prefix of its constants.
///
/// ```
/// use opentelemetry_semconv_codegen::naming::constant_base;
///
/// assert_eq!(
///     constant_base("db.client.connection.idle.max").unwrap(),
///     "DB_CLIENT_CONNECTION_IDLE_MAX"
/// );
/// ```
pub fn constant_base(identifier: &str) -> Result<String> {
    validate_identifier(identifier)?;
    Ok(identifier
        .split(is_separator)
        .map(str::to_ascii_uppercase)
        .collect::<Vec<_>>()
        .join("_"))
}

/// Renders an identifier as an upper camel case token, e.g.
/// `HttpServerRequestDuration`.
pub fn pascal_case(identifier: &str) -> String {
    identifier
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => {
                    let mut word = first.to_ascii_uppercase().to_string();
                    word.push_str(&chars.as_str().to_ascii_lowercase());
                    word
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Names of the constants rendered for one metric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantNames {
    /// Constant holding the metric identifier.
    pub name: String,
    /// Constant holding the unit.
    pub unit: String,
    /// Constant holding the description, absent when the metric has none.
    pub description: Option<String>,
    /// PascalCase key of the metric in the data table.
    pub token: String,
}

impl ConstantNames {
    /// Computes the constant names of `metric`.
    pub fn for_metric(metric: &MetricDefinition) -> Result<Self> {
        let base = constant_base(&metric.identifier)?;
        Ok(ConstantNames {
            name: format!("{base}{NAME_SUFFIX}"),
            unit: format!("{base}{UNIT_SUFFIX}"),
            description: metric
                .description
                .as_ref()
                .map(|_| format!("{base}{DESCRIPTION_SUFFIX}")),
            token: pascal_case(&metric.identifier),
        })
    }

    /// All Rust constant names, in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [Some(&self.name), Some(&self.unit), self.description.as_ref()]
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

/// Tracks which identifier claimed each constant name.
#[derive(Debug, Default)]
pub(crate) struct NameTable {
    owners: HashMap<String, String>,
}

impl NameTable {
    /// Records that `identifier` emits `constants` and the table token,
    /// failing on the first name already owned by a different identifier.
    pub(crate) fn claim(&mut self, identifier: &str, constants: &ConstantNames) -> Result<()> {
        for constant in constants.iter().chain([constants.token.as_str()]) {
            if let Some(first) = self.owners.get(constant) {
                if first != identifier {
                    return Err(CodegenError::NameCollision {
                        constant: constant.to_owned(),
                        first: first.clone(),
                        second: identifier.to_owned(),
                    });
                }
            }
            self.owners
                .insert(constant.to_owned(), identifier.to_owned());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InstrumentKind, Stability};
    use rstest::rstest;

    fn metric(identifier: &str, description: Option<&str>) -> MetricDefinition {
        MetricDefinition {
            identifier: identifier.to_owned(),
            instrument: InstrumentKind::Counter,
            unit: "1".to_owned(),
            description: description.map(str::to_owned),
            note: None,
            stability: Stability::Development,
            deprecation: None,
        }
    }

    #[rstest]
    #[case("http.server.request.duration", "HTTP_SERVER_REQUEST_DURATION")]
    #[case("jvm.system.cpu.load_1m", "JVM_SYSTEM_CPU_LOAD_1M")]
    #[case("v8js.gc.duration", "V8JS_GC_DURATION")]
    #[case("aspnetcore.rate_limiting.active_request_leases", "ASPNETCORE_RATE_LIMITING_ACTIVE_REQUEST_LEASES")]
    #[case("custom-metric.x", "CUSTOM_METRIC_X")]
    fn normalizes_identifiers(#[case] identifier: &str, #[case] expected: &str) {
        assert_eq!(constant_base(identifier).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("1xx.count")]
    #[case(".leading")]
    #[case("trailing.")]
    #[case("double..dot")]
    #[case("a.b__c")]
    #[case("a-.b")]
    #[case("trailing_")]
    #[case("a_.b")]
    #[case("has space")]
    #[case("http.server/duration")]
    fn rejects_malformed_identifiers(#[case] identifier: &str) {
        assert!(matches!(
            constant_base(identifier),
            Err(CodegenError::InvalidIdentifier { .. })
        ));
    }

    #[rstest]
    #[case("http.server.request.duration", "HttpServerRequestDuration")]
    #[case("db.client.connection.idle.max", "DbClientConnectionIdleMax")]
    #[case("jvm.gc.duration", "JvmGcDuration")]
    fn renders_pascal_case(#[case] identifier: &str, #[case] expected: &str) {
        assert_eq!(pascal_case(identifier), expected);
    }

    #[test]
    fn description_constant_only_when_described() {
        let described = ConstantNames::for_metric(&metric("system.disk.limit", Some("x"))).unwrap();
        assert_eq!(
            described.iter().collect::<Vec<_>>(),
            [
                "SYSTEM_DISK_LIMIT_NAME",
                "SYSTEM_DISK_LIMIT_UNIT",
                "SYSTEM_DISK_LIMIT_DESCRIPTION"
            ]
        );

        let bare = ConstantNames::for_metric(&metric("system.disk.io", None)).unwrap();
        assert_eq!(bare.description, None);
        assert_eq!(bare.token, "SystemDiskIo");
        assert_eq!(bare.iter().count(), 2);
    }

    #[test]
    fn name_table_detects_collisions() {
        let mut table = NameTable::default();
        let first = metric("a.b_c", None);
        let second = metric("a_b.c", None);

        table
            .claim(&first.identifier, &ConstantNames::for_metric(&first).unwrap())
            .unwrap();
        let err = table
            .claim(&second.identifier, &ConstantNames::for_metric(&second).unwrap())
            .unwrap_err();

        match err {
            CodegenError::NameCollision {
                constant,
                first,
                second,
            } => {
                assert_eq!(constant, "A_B_C_NAME");
                assert_eq!(first, "a.b_c");
                assert_eq!(second, "a_b.c");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn name_table_detects_table_token_collisions() {
        let mut table = NameTable::default();
        let first = metric("jvm.cpu.load_1m", None);
        let second = metric("jvm.cpu.load1m", None);
        let first_names = ConstantNames::for_metric(&first).unwrap();
        let second_names = ConstantNames::for_metric(&second).unwrap();
        assert_ne!(first_names.name, second_names.name);

        table.claim(&first.identifier, &first_names).unwrap();
        let err = table.claim(&second.identifier, &second_names).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::NameCollision { ref constant, .. } if constant == "JvmCpuLoad1m"
        ));
    }
}
