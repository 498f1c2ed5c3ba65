//! # OpenTelemetry Semantic Conventions
//!
//! OpenTelemetry semantic conventions are agreed standardized naming patterns
//! for OpenTelemetry things. This crate exposes the metric conventions as
//! plain `&str` constants: for every metric a name, a unit and, when the
//! registry describes the metric, a description.
//!
//! ## Usage
//!
//! ```rust
//! use opentelemetry_semantic_conventions as semconv;
//!
//! // Pass these to the instrument builder of any metrics SDK.
//! let name = semconv::metric::HTTP_SERVER_REQUEST_DURATION_NAME;
//! let unit = semconv::metric::HTTP_SERVER_REQUEST_DURATION_UNIT;
//! let description = semconv::metric::HTTP_SERVER_REQUEST_DURATION_DESCRIPTION;
//!
//! assert_eq!(name, "http.server.request.duration");
//! assert_eq!(unit, "s");
//! assert_eq!(description, "Duration of HTTP server requests.");
//! ```
//!
//! Metrics that are not stable yet require the `semconv_experimental`
//! feature.
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod metric;
