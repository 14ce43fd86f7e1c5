//! Parsing and validation of `classgen.toml`.
//!
//! A manifest names the output settings, the formatter options, a catalog
//! of conformance targets under `[types]` and the `[[entities]]` to
//! generate stubs for. Parsing resolves every entity into an
//! [`EntityDescriptor`](classgen_core::EntityDescriptor) ready for the
//! generator; problems are reported as [`miette`] diagnostics pointing at
//! the offending part of the file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ConformsDecl, DEFAULT_MANIFEST, DEFAULT_OUTPUT_DIR, EntityDecl, Manifest, MethodDecl,
    OutputConfig, ParamDecl, TypeDecl, parse_manifest,
};
