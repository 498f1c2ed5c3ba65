//! # Emitters
//!
//! An [`Emitter`] renders a validated [`Catalog`] into the text of one output
//! file. Rendering is pure: the same catalog always yields byte-identical
//! output, and nothing is written to disk here.
mod json;
mod rust;

pub use json::JsonTableEmitter;
pub use rust::RustConstantsEmitter;

use serde::Deserialize;

use crate::error::{CodegenError, Result};
use crate::model::Catalog;

/// Renders a catalog into the content of an output file.
pub trait Emitter {
    /// Renders `catalog`.
    fn render(&self, catalog: &Catalog) -> Result<String>;
}

/// Output flavors the generator knows how to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Rust source with one `&str` constant per name, unit and description.
    Rust,
    /// JSON data table, for consumers loading the catalog at runtime.
    Json,
}

impl Target {
    /// Looks a target up by its configuration name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "rust" => Ok(Target::Rust),
            "json" => Ok(Target::Json),
            _ => Err(CodegenError::UnknownTarget(name.to_owned())),
        }
    }

    /// Configuration name of the target.
    pub fn name(&self) -> &'static str {
        match self {
            Target::Rust => "rust",
            Target::Json => "json",
        }
    }

    /// Builds the emitter for this target.
    ///
    /// `experimental_feature` names the cargo feature gating non-stable
    /// metrics in Rust output; other targets ignore it.
    pub fn emitter(&self, experimental_feature: Option<&str>) -> Box<dyn Emitter> {
        match self {
            Target::Rust => Box::new(RustConstantsEmitter::new(
                experimental_feature.map(str::to_owned),
            )),
            Target::Json => Box::new(JsonTableEmitter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_name() {
        assert_eq!(Target::from_name("rust").unwrap(), Target::Rust);
        assert_eq!(Target::from_name("json").unwrap(), Target::Json);
        assert!(matches!(
            Target::from_name("go"),
            Err(CodegenError::UnknownTarget(name)) if name == "go"
        ));
    }

    #[test]
    fn test_target_name_round_trips() {
        for target in [Target::Rust, Target::Json] {
            assert_eq!(Target::from_name(target.name()).unwrap(), target);
        }
    }
}
