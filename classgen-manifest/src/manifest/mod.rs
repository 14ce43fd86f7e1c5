//! The `classgen.toml` schema.

mod entity;
mod output;
mod parse;
mod types;

use std::path::Path;

use classgen_codegen::{FormatOptions, GeneratorOptions};
use classgen_core::EntityDescriptor;
pub use entity::{ConformsDecl, EntityDecl};
use indexmap::IndexMap;
pub use output::{DEFAULT_OUTPUT_DIR, OutputConfig};
pub use parse::parse_manifest;
use serde::Deserialize;
pub use types::{MethodDecl, ParamDecl, TypeDecl};

/// Manifest file name looked up when no path is given.
pub const DEFAULT_MANIFEST: &str = "classgen.toml";

/// Root schema for classgen.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub format: FormatOptions,

    /// Conformance targets, keyed by canonical name
    #[serde(default)]
    pub types: IndexMap<String, TypeDecl>,

    #[serde(default)]
    pub entities: Vec<EntityDecl>,

    /// Entities resolved against `types` once the manifest is validated
    #[serde(skip)]
    descriptors: Vec<EntityDescriptor>,
}

impl Manifest {
    /// Resolved entities, in manifest order.
    pub fn entity_descriptors(&self) -> &[EntityDescriptor] {
        &self.descriptors
    }

    pub fn into_entity_descriptors(self) -> Vec<EntityDescriptor> {
        self.descriptors
    }

    pub fn output_dir(&self) -> &Path {
        &self.output.directory
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            suffix: self.output.suffix.clone(),
            format: self.format,
            overwrite: self.output.overwrite,
        }
    }
}
