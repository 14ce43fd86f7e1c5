//! Type references used by syntax elements.

use std::cmp::Ordering;

use classgen_core::TypeName;

/// A reference to a type from inside the syntax tree.
///
/// `Explicit` is a resolved type with a namespace and takes part in import
/// collection. `Named` is free-form text, typically the type currently
/// being defined, and is always emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Explicit(TypeName),
    Named(String),
}

impl TypeRef {
    pub fn explicit(name: TypeName) -> Self {
        Self::Explicit(name)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Shorthand for a primitive such as `int` or `void`.
    pub fn primitive(name: &str) -> Self {
        Self::Explicit(TypeName::primitive(name))
    }

    /// The name used when no import collection is active: the short name
    /// for core-namespace types, the fully qualified name otherwise.
    pub fn default_name(&self) -> String {
        match self {
            Self::Explicit(ty) if ty.is_core() => ty.name().to_string(),
            Self::Explicit(ty) => ty.canonical(),
            Self::Named(name) => name.clone(),
        }
    }

    /// Name used for ordering and diagnostics.
    pub fn canonical(&self) -> String {
        match self {
            Self::Explicit(ty) => ty.canonical(),
            Self::Named(name) => name.clone(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Explicit(ty) => ty.name().trim().is_empty(),
            Self::Named(name) => name.trim().is_empty(),
        }
    }
}

impl From<TypeName> for TypeRef {
    fn from(value: TypeName) -> Self {
        Self::Explicit(value)
    }
}

/// Explicit types order by canonical name and sort before named types;
/// named types order by their text.
impl Ord for TypeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Explicit(a), Self::Explicit(b)) => a.cmp(b),
            (Self::Named(a), Self::Named(b)) => a.cmp(b),
            (Self::Explicit(_), Self::Named(_)) => Ordering::Less,
            (Self::Named(_), Self::Explicit(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for TypeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
