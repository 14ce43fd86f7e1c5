use std::path::PathBuf;

use classgen_codegen::DEFAULT_SUFFIX;
use classgen_core::Overwrite;
use serde::Deserialize;

/// Default base directory for generated sources.
pub const DEFAULT_OUTPUT_DIR: &str = "target/generated-sources";

/// The `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Base directory; each source lands under its namespace path
    pub directory: PathBuf,
    /// Appended to the entity's simple name
    pub suffix: String,
    pub overwrite: Overwrite,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            suffix: DEFAULT_SUFFIX.to_string(),
            overwrite: Overwrite::default(),
        }
    }
}
