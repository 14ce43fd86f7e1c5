//! Generate operation - render stubs and write or preview them.

use std::path::{Path, PathBuf};

use classgen_codegen::Generator;
use classgen_manifest::Manifest;
use eyre::{Context, Result};

use super::describe_failure;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Base directory for generated sources.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::new(
        manifest.entity_descriptors().to_vec(),
        manifest.generator_options(),
    );

    let result = if opts.dry_run {
        let preview = generator.preview();
        let failures = preview.failures.iter().map(describe_failure).collect();
        let files = preview
            .files
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path.display().to_string(),
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files, failures })
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to write generated sources")?;
        let display = |paths: Vec<PathBuf>| -> Vec<String> {
            paths.iter().map(|p| p.display().to_string()).collect()
        };
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            failures: generated.failures.iter().map(describe_failure).collect(),
            written: display(generated.written),
            skipped: display(generated.skipped),
        })
    };

    Ok(GenerateReport {
        entity_count: generator.entities().len(),
        result,
    })
}
