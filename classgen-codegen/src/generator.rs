//! Batch generation of stub types for entities.

use std::path::{Path, PathBuf};

use classgen_core::{EntityDescriptor, File, FileRules, GeneratedFile, Overwrite, TypeName, WriteResult};

use crate::{Error, FormatOptions, Result, SourceFile, TypeDefinition};

/// Default suffix appended to an entity's name to name its stub type.
pub const DEFAULT_SUFFIX: &str = "StubMapper";

/// Settings shared by every entity in a batch.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Appended to the entity's simple name.
    pub suffix: String,
    pub format: FormatOptions,
    pub overwrite: Overwrite,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            format: FormatOptions::default(),
            overwrite: Overwrite::Always,
        }
    }
}

/// A generated file shown without writing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from the output directory
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// An entity whose source could not be built or rendered.
#[derive(Debug)]
pub struct EntityFailure {
    pub entity: TypeName,
    pub error: Error,
}

/// Outcome of [`Generator::preview`].
#[derive(Debug, Default)]
pub struct Preview {
    pub files: Vec<PreviewFile>,
    /// Entities that failed to build or render
    pub failures: Vec<EntityFailure>,
}

impl Preview {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of [`Generator::generate`].
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed
    pub skipped: Vec<PathBuf>,
    /// Entities that failed; the rest of the batch still ran
    pub failures: Vec<EntityFailure>,
}

impl GenerateResult {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generates one stub source per entity.
///
/// Each entity gets a public type named `<Entity><suffix>` in the entity's
/// namespace, implementing the entity's conformance targets with stub
/// members.
pub struct Generator {
    entities: Vec<EntityDescriptor>,
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(entities: Vec<EntityDescriptor>, options: GeneratorOptions) -> Self {
        Self { entities, options }
    }

    pub fn entities(&self) -> &[EntityDescriptor] {
        &self.entities
    }

    /// Qualified name of the type generated for `entity`.
    pub fn generated_name(&self, entity: &EntityDescriptor) -> TypeName {
        entity.generated_name(&self.options.suffix)
    }

    /// Build the source tree for one entity.
    pub fn source(&self, entity: &EntityDescriptor) -> Result<SourceFile> {
        let name = self.generated_name(entity);
        let definition = entity
            .conforms
            .iter()
            .try_fold(TypeDefinition::new(name.name()), |definition, spec| {
                definition.implements(spec)
            })?;
        Ok(SourceFile::new(name.namespace(), definition).with_format(self.options.format))
    }

    /// Build and render one entity.
    fn render(&self, entity: &EntityDescriptor) -> Result<(SourceFile, String)> {
        tracing::debug!(entity = %entity.ty, "processing");
        let source = self.source(entity)?;
        let content = source.to_source()?;
        Ok((source, content))
    }

    /// Build and render every entity without writing anything, returning
    /// the entities that failed.
    pub fn check(&self) -> Vec<EntityFailure> {
        self.entities
            .iter()
            .filter_map(|entity| {
                self.render(entity).err().map(|error| EntityFailure {
                    entity: entity.ty.clone(),
                    error,
                })
            })
            .collect()
    }

    /// Render every entity once, keeping the files that rendered and the
    /// entities that failed.
    pub fn preview(&self) -> Preview {
        let mut preview = Preview::default();
        for entity in &self.entities {
            match self.render(entity) {
                Ok((source, content)) => preview.files.push(PreviewFile {
                    path: source.relative_path(),
                    content,
                }),
                Err(error) => {
                    tracing::warn!(entity = %entity.ty, %error, "failed");
                    preview.failures.push(EntityFailure {
                        entity: entity.ty.clone(),
                        error,
                    });
                }
            }
        }
        preview
    }

    /// Write every entity's source below `output_dir`.
    ///
    /// Build and render failures are collected per entity; I/O failures
    /// abort the batch.
    pub fn generate(&self, output_dir: &Path) -> eyre::Result<GenerateResult> {
        tracing::info!(
            entities = self.entities.len(),
            output = %output_dir.display(),
            "generating"
        );
        let rules = FileRules {
            overwrite: self.options.overwrite,
        };
        let mut result = GenerateResult::default();

        for entity in &self.entities {
            let (source, content) = match self.render(entity) {
                Ok(rendered) => rendered,
                Err(error) => {
                    tracing::warn!(entity = %entity.ty, %error, "failed");
                    result.failures.push(EntityFailure {
                        entity: entity.ty.clone(),
                        error,
                    });
                    continue;
                }
            };

            let path = source.relative_path();
            match File::new(output_dir.join(&path), content).with_rules(rules).write()? {
                WriteResult::Written => {
                    tracing::info!(path = %path.display(), "written");
                    result.written.push(path);
                }
                WriteResult::Skipped => {
                    tracing::info!(path = %path.display(), "skipped, already exists");
                    result.skipped.push(path);
                }
            }
        }

        tracing::info!(
            written = result.written.len(),
            skipped = result.skipped.len(),
            failed = result.failures.len(),
            "done"
        );
        Ok(result)
    }
}
