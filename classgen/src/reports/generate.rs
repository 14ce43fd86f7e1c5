//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from stub generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of entities in the manifest.
    pub entity_count: usize,
    /// Files written or previewed.
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Paths relative to `output_dir`.
    pub written: Vec<String>,
    /// Existing files left untouched.
    pub skipped: Vec<String>,
    /// One message per failed entity.
    pub failures: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
    pub failures: Vec<String>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl GenerateReport {
    pub fn failures(&self) -> &[String] {
        match &self.result {
            GenerationResult::Written(written) => &written.failures,
            GenerationResult::Preview(preview) => &preview.failures,
        }
    }

    /// Whether every entity was generated.
    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Output", &written.output_dir.display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section(&format!("Written ({})", written.written.len()));
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section(&format!("Already present ({})", written.skipped.len()));
            for path in &written.skipped {
                out.kept_item(path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} of {} files would be generated",
            preview.files.len(),
            self.entity_count
        ));
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }

        for failure in self.failures() {
            out.error(failure);
        }
    }
}
