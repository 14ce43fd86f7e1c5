//! Core types for the classgen source generator.
//!
//! This crate provides the value types shared by the rest of the
//! workspace: type names, the member descriptors that describe
//! conformance targets and entities, artifact paths and generated
//! file writing.

mod descriptor;
mod file;
mod paths;
mod types;

// Member descriptors
pub use descriptor::{
    ConformanceSpec, EntityDescriptor, MethodDescriptor, ParamDescriptor, TypeDescriptor,
    TypeKind, TypeSig, is_universal_root_method,
};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Artifact locations
pub use paths::{SOURCE_EXTENSION, artifact_path};
// Type names
pub use types::{CORE_NAMESPACE, InvalidTypeName, PRIMITIVES, TypeName};
