//! A complete source file: package, imports and one type definition.

use std::path::PathBuf;

use classgen_core::{GeneratedFile, TypeName, artifact_path};

use crate::{
    BufferRender, Element, FormatConfig, FormatOptions, FormatRender, Import, PackageDeclaration,
    Render, Result, TextRender, TokenKind, TypeDefinition,
};

/// A type definition placed in a namespace, ready to be rendered to text.
///
/// Rendering runs the definition through a [`BufferRender`] to collect its
/// imports, then writes the package declaration, the imports and the
/// recorded body, in that order, into the target sink.
#[derive(Debug, Clone)]
pub struct SourceFile {
    namespace: String,
    definition: TypeDefinition,
    format: FormatOptions,
}

impl SourceFile {
    /// An empty `namespace` means the default package: no declaration.
    pub fn new(namespace: impl Into<String>, definition: TypeDefinition) -> Self {
        Self {
            namespace: namespace.into(),
            definition,
            format: FormatOptions::default(),
        }
    }

    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    pub fn definition(&self) -> &TypeDefinition {
        &self.definition
    }

    /// Qualified name of the defined type.
    pub fn type_name(&self) -> TypeName {
        TypeName::new(self.namespace.clone(), self.definition.name())
    }

    /// Location of the artifact relative to the output directory.
    pub fn artifact_path(&self) -> PathBuf {
        artifact_path(&self.type_name())
    }

    /// Render package, imports and body into `sink`.
    pub fn render_into(&self, sink: &mut dyn Render) -> Result<()> {
        let mut buffer = BufferRender::with_formats(sink.value_formats().clone());
        buffer.reserve(&self.type_name());
        self.definition.render(&mut buffer)?;

        if !self.namespace.is_empty() {
            PackageDeclaration::new(self.namespace.clone()).render(sink)?;
        }
        sink.append_kind(TokenKind::ImportBlockBegin)?;
        for ty in buffer.imports() {
            // Same-package types are visible without an import.
            if ty.namespace() == self.namespace {
                continue;
            }
            Import::new(ty).render(sink)?;
        }
        sink.append_kind(TokenKind::ImportBlockEnd)?;
        buffer.replay(sink)
    }

    /// Render through the formatter with `config`.
    pub fn format(&self, config: &FormatConfig) -> Result<String> {
        let mut out = String::new();
        let mut render = FormatRender::new(TextRender::new(&mut out), config.clone());
        self.render_into(&mut render)?;
        render.finish()?;
        drop(render);
        Ok(out)
    }

    /// Render the raw token stream with no formatting.
    pub fn unformatted(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut TextRender::new(&mut out))?;
        Ok(out)
    }

    /// Render according to the file's [`FormatOptions`].
    pub fn to_source(&self) -> Result<String> {
        if self.format.enabled {
            self.format(&self.format.config())
        } else {
            self.unformatted()
        }
    }
}

impl GeneratedFile for SourceFile {
    fn relative_path(&self) -> PathBuf {
        self.artifact_path()
    }

    fn render(&self) -> eyre::Result<String> {
        Ok(self.to_source()?)
    }
}
