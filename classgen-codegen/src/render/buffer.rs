use std::collections::{BTreeMap, BTreeSet};

use classgen_core::{CORE_NAMESPACE, TypeName};

use super::Render;
use crate::{Result, TokenKind, TypeRef, ValueFormats};

/// A recorded piece of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Kind(TokenKind),
    Text(String),
}

/// Records every fragment instead of writing it, resolving type
/// references against an import map as they arrive.
///
/// The first type to use a short name claims it. A later, different type
/// with the same short name is written fully qualified and the claim is
/// left untouched. Types from the core namespace are written by short
/// name and never imported; their short names are remembered so that a
/// foreign namesake is written qualified instead of shadowing them, and a
/// core type whose short name is already imported is written qualified.
///
/// [`BufferRender::reserve`] claims a short name without importing it,
/// for the type being defined.
///
/// # Example
///
/// ```
/// use classgen_codegen::{BufferRender, Render, TypeRef};
/// use classgen_core::TypeName;
///
/// let mut buffer = BufferRender::new();
/// buffer.append_type(&TypeRef::explicit(TypeName::new("java.util", "List"))).unwrap();
/// buffer.append_type(&TypeRef::explicit(TypeName::new("java.awt", "List"))).unwrap();
///
/// assert_eq!(buffer.imports(), vec![TypeName::new("java.util", "List")]);
/// ```
#[derive(Debug)]
pub struct BufferRender {
    fragments: Vec<Fragment>,
    imports: BTreeMap<String, TypeName>,
    /// Short names owned by a type that is never imported.
    reserved: BTreeMap<String, TypeName>,
    /// Short names of core-namespace types written so far.
    core_names: BTreeSet<String>,
    formats: ValueFormats,
}

impl BufferRender {
    pub fn new() -> Self {
        Self::with_formats(ValueFormats::standard())
    }

    pub fn with_formats(formats: ValueFormats) -> Self {
        Self {
            fragments: Vec::new(),
            imports: BTreeMap::new(),
            reserved: BTreeMap::new(),
            core_names: BTreeSet::new(),
            formats,
        }
    }

    /// Distinct imported types, sorted by canonical name.
    pub fn imports(&self) -> Vec<TypeName> {
        let mut imports: Vec<TypeName> = self.imports.values().cloned().collect();
        imports.sort();
        imports
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Write the recorded fragments, in order, into `sink`.
    pub fn replay(&self, sink: &mut dyn Render) -> Result<()> {
        for fragment in &self.fragments {
            match fragment {
                Fragment::Kind(kind) => sink.append_kind(*kind)?,
                Fragment::Text(text) => sink.append_text(text)?,
            }
        }
        Ok(())
    }

    /// Claim the short name of `ty` without importing it. Later, different
    /// types with the same short name are written fully qualified.
    pub fn reserve(&mut self, ty: &TypeName) {
        tracing::debug!(reserved = %ty, "reserved short name");
        self.reserved.insert(ty.name().to_string(), ty.clone());
    }

    /// Type other than `ty` that holds the short name of `ty`, if any.
    fn owner_of(&self, ty: &TypeName) -> Option<&TypeName> {
        self.reserved
            .get(ty.name())
            .or_else(|| self.imports.get(ty.name()))
            .filter(|owner| *owner != ty)
    }

    /// Name to write for `ty`, claiming its short name if it is free.
    fn resolve(&mut self, ty: &TypeName) -> String {
        if ty.is_core() {
            if ty.namespace() != CORE_NAMESPACE {
                return ty.name().to_string();
            }
            if let Some(owner) = self.owner_of(ty) {
                tracing::debug!(
                    core = %ty,
                    claimed_by = %owner,
                    "short name taken, writing qualified name"
                );
                return ty.canonical();
            }
            self.core_names.insert(ty.name().to_string());
            return ty.name().to_string();
        }
        if let Some(owner) = self.owner_of(ty) {
            tracing::debug!(
                import = %ty,
                claimed_by = %owner,
                "short name taken, writing qualified name"
            );
            return ty.canonical();
        }
        if self.reserved.contains_key(ty.name()) || self.imports.contains_key(ty.name()) {
            return ty.name().to_string();
        }
        if self.core_names.contains(ty.name()) {
            tracing::debug!(import = %ty, "short name used by a core type, writing qualified name");
            return ty.canonical();
        }
        tracing::debug!(import = %ty, "claimed short name");
        self.imports.insert(ty.name().to_string(), ty.clone());
        ty.name().to_string()
    }
}

impl Default for BufferRender {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for BufferRender {
    fn append_text(&mut self, text: &str) -> Result<()> {
        // Merge adjacent text so replays stay compact.
        if let Some(Fragment::Text(last)) = self.fragments.last_mut() {
            last.push_str(text);
        } else {
            self.fragments.push(Fragment::Text(text.to_string()));
        }
        Ok(())
    }

    fn append_kind(&mut self, kind: TokenKind) -> Result<()> {
        self.fragments.push(Fragment::Kind(kind));
        Ok(())
    }

    fn value_formats(&self) -> &ValueFormats {
        &self.formats
    }

    fn append_type(&mut self, ty: &TypeRef) -> Result<()> {
        let name = match ty {
            TypeRef::Explicit(ty) => self.resolve(ty),
            TypeRef::Named(name) => name.clone(),
        };
        self.append_text(&name)
    }
}
