use serde::Serialize;

use crate::emit::Emitter;
use crate::error::Result;
use crate::model::Catalog;

/// Renders the catalog as a pretty-printed JSON array, one object per metric.
///
/// This is the data-table form of the catalog, for consumers that load the
/// identifiers at runtime instead of compiling them in.
#[derive(Clone, Debug, Default)]
pub struct JsonTableEmitter {
    _private: (),
}

impl JsonTableEmitter {
    /// Creates a JSON table emitter.
    pub fn new() -> Self {
        JsonTableEmitter { _private: () }
    }
}

#[derive(Serialize)]
struct TableRow<'a> {
    constant: &'a str,
    name: &'a str,
    instrument: &'static str,
    unit: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    stability: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    deprecated_by: Option<&'a str>,
}

impl Emitter for JsonTableEmitter {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        let rows: Vec<TableRow<'_>> = catalog
            .iter()
            .map(|entry| {
                let metric = &entry.metric;
                TableRow {
                    constant: &entry.constants.token,
                    name: &metric.identifier,
                    instrument: metric.instrument.as_str(),
                    unit: &metric.unit,
                    description: metric.description.as_deref(),
                    stability: metric.stability.as_str(),
                    deprecated_by: metric
                        .deprecation
                        .as_ref()
                        .map(|d| d.replaced_by.as_str()),
                }
            })
            .collect();

        let mut out = serde_json::to_string_pretty(&rows)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Deprecation, InstrumentKind, MetricDefinition, Stability};

    #[test]
    fn renders_one_row_per_metric() {
        let catalog = Catalog::new([
            MetricDefinition {
                identifier: "system.disk.io".into(),
                instrument: InstrumentKind::Counter,
                unit: "By".into(),
                description: None,
                note: Some("Notes are not part of the table.".into()),
                stability: Stability::Development,
                deprecation: None,
            },
            MetricDefinition {
                identifier: "jvm.buffer.memory.usage".into(),
                instrument: InstrumentKind::UpDownCounter,
                unit: "By".into(),
                description: Some("Deprecated, use `jvm.buffer.memory.used` instead.".into()),
                note: None,
                stability: Stability::Development,
                deprecation: Some(Deprecation {
                    replaced_by: "jvm.buffer.memory.used".into(),
                    note: None,
                }),
            },
            MetricDefinition {
                identifier: "jvm.buffer.memory.used".into(),
                instrument: InstrumentKind::UpDownCounter,
                unit: "By".into(),
                description: Some("Measure of memory used by buffers.".into()),
                note: None,
                stability: Stability::Development,
                deprecation: None,
            },
        ])
        .unwrap();

        let output = JsonTableEmitter::new().render(&catalog).unwrap();
        assert!(output.ends_with("]\n"));

        let table: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            table,
            serde_json::json!([
                {
                    "constant": "JvmBufferMemoryUsage",
                    "name": "jvm.buffer.memory.usage",
                    "instrument": "updowncounter",
                    "unit": "By",
                    "description": "Deprecated, use `jvm.buffer.memory.used` instead.",
                    "stability": "development",
                    "deprecated_by": "jvm.buffer.memory.used"
                },
                {
                    "constant": "JvmBufferMemoryUsed",
                    "name": "jvm.buffer.memory.used",
                    "instrument": "updowncounter",
                    "unit": "By",
                    "description": "Measure of memory used by buffers.",
                    "stability": "development"
                },
                {
                    "constant": "SystemDiskIo",
                    "name": "system.disk.io",
                    "instrument": "counter",
                    "unit": "By",
                    "stability": "development"
                }
            ])
        );
    }

    #[test]
    fn empty_catalog_renders_empty_array() {
        let output = JsonTableEmitter::new()
            .render(&Catalog::default())
            .unwrap();
        assert_eq!(output, "[]\n");
    }
}
