use crate::emit::Emitter;
use crate::error::Result;
use crate::model::{Catalog, CatalogEntry, Stability};

const MAX_WIDTH: usize = 100;
const INDENT: &str = "    ";

const FILE_HEADER: &str = "\
// DO NOT EDIT, this is an auto-generated file
//
// If you want to update the file:
// - Edit the registry snapshot it was generated from
// - Run `semconv-codegen generate`

//! # Metric Semantic Conventions
//!
//! Name, unit and description constants of the metrics defined by the
//! semantic convention registry, ordered by metric name.
";

/// Renders the catalog as Rust `&str` constants.
///
/// Every metric yields `<METRIC>_NAME`, `<METRIC>_UNIT` and, when the registry
/// describes the metric, `<METRIC>_DESCRIPTION`. The output is laid out the way
/// `rustfmt` would format it so that it can be checked in as-is.
#[derive(Clone, Debug, Default)]
pub struct RustConstantsEmitter {
    experimental_feature: Option<String>,
}

impl RustConstantsEmitter {
    /// Creates an emitter gating non-stable metrics behind
    /// `experimental_feature`, or not gating them at all when `None`.
    pub fn new(experimental_feature: Option<String>) -> Self {
        RustConstantsEmitter {
            experimental_feature,
        }
    }

    fn render_entry(&self, entry: &CatalogEntry, out: &mut String) {
        let metric = &entry.metric;
        let constants = &entry.constants;

        if let Some(description) = &metric.description {
            push_doc_section(out, "Description", description);
        }
        if let Some(note) = &metric.note {
            push_doc_section(out, "Notes", note);
        }
        out.push_str("/// ## Metadata\n");
        out.push_str("/// | | |\n");
        out.push_str("/// |:-|:-\n");
        out.push_str(&format!("/// | Instrument: | `{}` |\n", metric.instrument));
        out.push_str(&format!("/// | Unit: | `{}` |\n", metric.unit));
        out.push_str(&format!(
            "/// | Status: | `{}` |\n",
            status_label(metric.stability)
        ));

        let mut attributes = String::new();
        if metric.stability.is_experimental() {
            if let Some(feature) = &self.experimental_feature {
                attributes.push_str(&format!("#[cfg(feature = {})]\n", string_literal(feature)));
            }
        }
        if let Some(deprecation) = &metric.deprecation {
            let mut note = format!("Replaced by `{}`.", deprecation.replaced_by);
            if let Some(extra) = &deprecation.note {
                note.push(' ');
                note.push_str(&extra.split_whitespace().collect::<Vec<_>>().join(" "));
            }
            let single_line = format!("#[deprecated(note = {})]", string_literal(&note));
            if single_line.chars().count() <= MAX_WIDTH {
                attributes.push_str(&single_line);
                attributes.push('\n');
            } else {
                attributes.push_str(&format!(
                    "#[deprecated(\n{INDENT}note = {}\n)]\n",
                    string_literal(&note)
                ));
            }
        }

        out.push_str(&attributes);
        push_constant(out, &constants.name, &metric.identifier);

        out.push_str(&format!("/// Unit of [`{}`].\n", constants.name));
        out.push_str(&attributes);
        push_constant(out, &constants.unit, &metric.unit);

        if let (Some(constant), Some(description)) = (&constants.description, &metric.description) {
            out.push_str(&format!("/// Description of [`{}`].\n", constants.name));
            out.push_str(&attributes);
            push_constant(out, constant, description);
        }
    }
}

impl Emitter for RustConstantsEmitter {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        let mut out = String::from(FILE_HEADER);
        if let Some(feature) = &self.experimental_feature {
            out.push_str("//!\n");
            out.push_str("//! Metrics that are not stable yet are only compiled with the\n");
            out.push_str(&format!("//! `{feature}` feature enabled.\n"));
        }
        for entry in catalog.iter() {
            out.push('\n');
            self.render_entry(entry, &mut out);
        }
        Ok(out)
    }
}

fn status_label(stability: Stability) -> &'static str {
    match stability {
        Stability::Stable => "Stable",
        Stability::ReleaseCandidate => "Release candidate",
        Stability::Development => "Development",
    }
}

fn push_doc_section(out: &mut String, title: &str, text: &str) {
    out.push_str(&format!("/// ## {title}\n///\n"));
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            out.push_str("///\n");
        } else {
            out.push_str(&format!("/// {line}\n"));
        }
    }
    out.push_str("///\n");
}

fn push_constant(out: &mut String, constant: &str, value: &str) {
    let literal = string_literal(value);
    let single_line = format!("pub const {constant}: &str = {literal};");
    if single_line.chars().count() <= MAX_WIDTH {
        out.push_str(&single_line);
        out.push('\n');
    } else {
        out.push_str(&format!("pub const {constant}: &str =\n{INDENT}{literal};\n"));
    }
}

/// Quotes `value` as a Rust string literal.
fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Deprecation, InstrumentKind, MetricDefinition};

    fn metric(identifier: &str, unit: &str, description: Option<&str>) -> MetricDefinition {
        MetricDefinition {
            identifier: identifier.to_owned(),
            instrument: InstrumentKind::Histogram,
            unit: unit.to_owned(),
            description: description.map(str::to_owned),
            note: None,
            stability: Stability::Stable,
            deprecation: None,
        }
    }

    fn render(metrics: Vec<MetricDefinition>, feature: Option<&str>) -> String {
        let catalog = Catalog::new(metrics).unwrap();
        RustConstantsEmitter::new(feature.map(str::to_owned))
            .render(&catalog)
            .unwrap()
    }

    #[test]
    fn renders_name_unit_and_description() {
        let output = render(
            vec![metric(
                "http.server.request.duration",
                "s",
                Some("Duration of HTTP server requests."),
            )],
            None,
        );

        let expected = "
/// ## Description
///
/// Duration of HTTP server requests.
///
/// ## Metadata
/// | | |
/// |:-|:-
/// | Instrument: | `histogram` |
/// | Unit: | `s` |
/// | Status: | `Stable` |
pub const HTTP_SERVER_REQUEST_DURATION_NAME: &str = \"http.server.request.duration\";
/// Unit of [`HTTP_SERVER_REQUEST_DURATION_NAME`].
pub const HTTP_SERVER_REQUEST_DURATION_UNIT: &str = \"s\";
/// Description of [`HTTP_SERVER_REQUEST_DURATION_NAME`].
pub const HTTP_SERVER_REQUEST_DURATION_DESCRIPTION: &str = \"Duration of HTTP server requests.\";
";
        assert_eq!(output, format!("{FILE_HEADER}{expected}"));
    }

    #[test]
    fn undescribed_metric_has_no_description_constant() {
        let mut io = metric("system.disk.io", "By", None);
        io.instrument = InstrumentKind::Counter;
        io.stability = Stability::Development;
        let output = render(vec![io], Some("semconv_experimental"));

        assert!(output.contains("pub const SYSTEM_DISK_IO_NAME: &str = \"system.disk.io\";\n"));
        assert!(output.contains("pub const SYSTEM_DISK_IO_UNIT: &str = \"By\";\n"));
        assert!(!output.contains("SYSTEM_DISK_IO_DESCRIPTION"));
        assert!(!output.contains("## Description"));
        assert_eq!(
            output.matches("#[cfg(feature = \"semconv_experimental\")]\n").count(),
            2
        );
    }

    #[test]
    fn experimental_metrics_are_gated_only_when_a_feature_is_set() {
        let mut dev = metric("go.goroutine.count", "{goroutine}", Some("Count of live goroutines."));
        dev.stability = Stability::Development;

        let gated = render(vec![dev.clone()], Some("semconv_experimental"));
        assert_eq!(gated.matches("#[cfg(feature = \"semconv_experimental\")]").count(), 3);
        assert!(gated.contains("//! `semconv_experimental` feature enabled.\n"));

        let ungated = render(vec![dev], None);
        assert!(!ungated.contains("#[cfg("));
    }

    #[test]
    fn stable_metrics_are_never_gated() {
        let output = render(
            vec![metric("jvm.gc.duration", "s", Some("Duration of JVM garbage collection actions."))],
            Some("semconv_experimental"),
        );
        assert!(!output.contains("#[cfg("));
    }

    #[test]
    fn deprecated_metrics_carry_replacement_on_every_constant() {
        let mut old = metric(
            "db.client.connections.use_time",
            "ms",
            Some("Deprecated, use `db.client.connection.use_time` instead."),
        );
        old.deprecation = Some(Deprecation {
            replaced_by: "db.client.connection.use_time".into(),
            note: Some("The unit also changed\nfrom `ms` to `s`.".into()),
        });
        let output = render(
            vec![old, metric("db.client.connection.use_time", "s", Some("Use time."))],
            None,
        );

        let attribute = "#[deprecated(\n    note = \"Replaced by `db.client.connection.use_time`. The unit also changed from `ms` to `s`.\"\n)]\n";
        assert_eq!(output.matches(attribute).count(), 3);

        let short = "#[deprecated(note = \"Replaced by `a.b`.\")]\n";
        let mut a = metric("a.a", "1", Some("Deprecated, use `a.b` instead."));
        a.deprecation = Some(Deprecation {
            replaced_by: "a.b".into(),
            note: None,
        });
        let output = render(vec![a, metric("a.b", "1", None)], None);
        assert_eq!(output.matches(short).count(), 3);
    }

    #[test]
    fn long_declarations_wrap_after_the_equals_sign() {
        let output = render(
            vec![metric(
                "aspnetcore.rate_limiting.active_request_leases",
                "{request}",
                Some("Number of requests that are currently active on the server that hold a rate limiting lease."),
            )],
            None,
        );
        assert!(output.contains(
            "pub const ASPNETCORE_RATE_LIMITING_ACTIVE_REQUEST_LEASES_NAME: &str =\n    \"aspnetcore.rate_limiting.active_request_leases\";\n"
        ));
        assert!(output.contains(
            "pub const ASPNETCORE_RATE_LIMITING_ACTIVE_REQUEST_LEASES_UNIT: &str = \"{request}\";\n"
        ));
    }

    #[test]
    fn notes_keep_paragraphs() {
        let mut m = metric("system.cpu.time", "s", Some("Seconds each logical CPU spent on each mode"));
        m.note = Some("First paragraph.\n\n- item one\n- item two".into());
        let output = render(vec![m], None);
        assert!(output.contains(
            "/// ## Notes\n///\n/// First paragraph.\n///\n/// - item one\n/// - item two\n///\n/// ## Metadata\n"
        ));
    }

    #[test]
    fn string_literals_are_escaped() {
        assert_eq!(string_literal("plain"), "\"plain\"");
        assert_eq!(string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(string_literal("C:\\path"), "\"C:\\\\path\"");
        assert_eq!(string_literal("a\nb"), "\"a\\nb\"");
        assert_eq!(string_literal("bell\u{7}"), "\"bell\\u{7}\"");
        assert_eq!(string_literal("µs"), "\"µs\"");
    }

    #[test]
    fn rendering_is_deterministic() {
        let metrics = vec![
            metric("b.metric", "1", Some("B.")),
            metric("a.metric", "1", None),
        ];
        let mut reversed = metrics.clone();
        reversed.reverse();
        assert_eq!(render(metrics, None), render(reversed, None));
    }
}
