use classgen_core::TypeName;

use crate::{Element, Render, Result, TokenKind, error::require_name};

/// `package <name>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDeclaration {
    name: String,
}

impl PackageDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Element for PackageDeclaration {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        require_name("package name", &self.name)?;
        sink.append_kind(TokenKind::PackageBegin)?;
        sink.append_kind(TokenKind::PackageKeyword)?;
        sink.append_kind(TokenKind::PackageName)?;
        sink.append_text(&self.name)?;
        sink.append_kind(TokenKind::PackageEnd)
    }
}

/// `import <canonical name>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    ty: TypeName,
}

impl Import {
    pub fn new(ty: TypeName) -> Self {
        Self { ty }
    }
}

impl Element for Import {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        sink.append_kind(TokenKind::ImportBegin)?;
        sink.append_kind(TokenKind::ImportKeyword)?;
        sink.append_kind(TokenKind::ImportType)?;
        // Always the qualified name, never resolved against imports.
        sink.append_text(&self.ty.canonical())?;
        sink.append_kind(TokenKind::ImportEnd)
    }
}
