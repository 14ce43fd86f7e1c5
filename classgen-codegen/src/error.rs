use thiserror::Error;

/// Result type for tree construction and rendering.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required field is missing or blank while walking the tree.
    #[error("{field} has incorrect value: [{value}]")]
    Rendering { field: &'static str, value: String },

    /// An invocation was built with the wrong number of arguments.
    #[error("`{target}` takes {expected} argument(s) but {actual} were supplied")]
    ArgumentCountMismatch {
        target: String,
        expected: usize,
        actual: usize,
    },

    /// A type that is not interface-like was added to a conformance list.
    #[error("[{target}] is a {kind}, not an interface")]
    IllegalConformance { target: String, kind: &'static str },

    /// The downstream sink refused a write.
    #[error("failed to write rendered text")]
    Sink(#[from] std::fmt::Error),
}

impl Error {
    pub(crate) fn rendering(field: &'static str, value: impl Into<String>) -> Self {
        Self::Rendering {
            field,
            value: value.into(),
        }
    }
}

/// Fail with [`Error::Rendering`] if `value` is empty or whitespace.
pub(crate) fn require_name(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::rendering(field, value));
    }
    Ok(())
}
