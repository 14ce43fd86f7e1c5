//! Manifest parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use classgen_core::EntityDescriptor;
use indexmap::IndexMap;

use super::{DEFAULT_MANIFEST, Manifest};
use crate::{
    Error, Result,
    error::SourceContext,
    validate::{ParseContext, is_identifier_char},
};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_MANIFEST)
    }
}

impl Manifest {
    /// Parse a classgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a classgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse, validate and resolve a manifest. `filename` is only used in
/// diagnostics.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let mut manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;

    let ctx = ParseContext::new(&source);
    validate_manifest(&manifest, &ctx)?;
    manifest.descriptors = resolve_entities(&manifest, &ctx)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &ParseContext) -> Result<()> {
    let suffix = &manifest.output.suffix;
    if suffix.is_empty() || !suffix.chars().all(is_identifier_char) {
        return Err(ctx.source().validation_error(
            format!(
                "output suffix '{}' must be non-empty and contain only letters, digits, '_' or '$'",
                suffix
            ),
            ctx.value_span(suffix),
        ));
    }

    let mut seen = HashSet::new();
    for entity in &manifest.entities {
        if !seen.insert(entity.ty.as_str()) {
            return Err(ctx.source().validation_error(
                format!("entity '{}' is listed more than once", entity.ty),
                ctx.value_span(&entity.ty),
            ));
        }
    }
    Ok(())
}

fn resolve_entities(manifest: &Manifest, ctx: &ParseContext) -> Result<Vec<EntityDescriptor>> {
    let mut catalog = IndexMap::new();
    for (name, decl) in &manifest.types {
        catalog.insert(name.clone(), decl.descriptor(name, ctx)?);
    }

    manifest
        .entities
        .iter()
        .map(|entity| entity.descriptor(&catalog, ctx))
        .collect()
}
