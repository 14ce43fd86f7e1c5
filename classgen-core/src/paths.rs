//! Locations of generated artifacts.

use std::path::PathBuf;

use crate::TypeName;

/// Extension of generated source files.
pub const SOURCE_EXTENSION: &str = "java";

/// Relative path of the source file declaring `ty`: one directory per
/// namespace segment, then `<Name>.java`.
pub fn artifact_path(ty: &TypeName) -> PathBuf {
    let mut path: PathBuf = ty
        .namespace()
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect();
    path.push(format!("{}.{}", ty.name(), SOURCE_EXTENSION));
    path
}
