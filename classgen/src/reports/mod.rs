//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an [`Output`] target.

mod check;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use list::{ListReport, ListedEntity};
pub use output::{Report, TerminalOutput};
