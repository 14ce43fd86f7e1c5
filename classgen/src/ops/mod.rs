//! Core operations.
//!
//! Business logic for the commands, separated from argument parsing and
//! output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use list::list;

use classgen_codegen::EntityFailure;

/// One-line description of a failed entity.
fn describe_failure(failure: &EntityFailure) -> String {
    format!("{}: {}", failure.entity, failure.error)
}
