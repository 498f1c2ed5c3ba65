//! # OpenTelemetry Semantic Convention Code Generator
//!
//! Turns a snapshot of the semantic convention registry into a catalog of
//! metric constants. Each metric contributes a name, a unit and, when the
//! registry describes it, a description constant:
//!
//! ```
//! use opentelemetry_semconv_codegen::{registry, Catalog, Emitter, RustConstantsEmitter};
//!
//! let metrics = registry::load_str(
//!     "http.yaml",
//!     r#"
//! groups:
//!   - id: metric.http.server.request.duration
//!     type: metric
//!     metric_name: http.server.request.duration
//!     stability: stable
//!     brief: "Duration of HTTP server requests."
//!     instrument: histogram
//!     unit: "s"
//! "#,
//! )?;
//! let catalog = Catalog::new(metrics)?;
//! let source = RustConstantsEmitter::new(None).render(&catalog)?;
//!
//! assert!(source.contains(
//!     r#"pub const HTTP_SERVER_REQUEST_DURATION_UNIT: &str = "s";"#
//! ));
//! # Ok::<(), opentelemetry_semconv_codegen::CodegenError>(())
//! ```
//!
//! Generation is all-or-nothing: malformed entries, duplicate identifiers and
//! identifiers that normalize to the same constant name abort the run before
//! any file is written. The same snapshot always renders byte-identical output.
#![warn(missing_debug_implementations, missing_docs, unreachable_pub)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod registry;

pub use config::{CodegenConfig, OutputConfig};
pub use emit::{Emitter, JsonTableEmitter, RustConstantsEmitter, Target};
pub use error::{CodegenError, Result};
pub use generator::{GenerationReport, Generator, RenderedOutput};
pub use model::{Catalog, CatalogEntry, Deprecation, InstrumentKind, MetricDefinition, Stability};
