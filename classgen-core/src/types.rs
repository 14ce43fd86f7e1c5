//! Type names of the target language.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Namespace whose types are visible without an import.
pub const CORE_NAMESPACE: &str = "java.lang";

/// Primitive type names. These have no namespace and are never imported.
pub const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// Error returned when a dotted type name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type name '{name}': {reason}")]
pub struct InvalidTypeName {
    pub name: String,
    pub reason: &'static str,
}

/// A resolved, concrete type: a namespace plus a simple name.
///
/// Two type names are ordered by their canonical (fully qualified) name.
///
/// # Example
///
/// ```
/// use classgen_core::TypeName;
///
/// let list = TypeName::parse("java.util.List").unwrap();
/// assert_eq!(list.namespace(), "java.util");
/// assert_eq!(list.name(), "List");
/// assert_eq!(list.canonical(), "java.util.List");
/// assert!(!list.is_core());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName {
    namespace: String,
    name: String,
}

impl TypeName {
    /// Create a type name from its namespace and simple name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Create a type name in the core namespace (e.g. `String`).
    pub fn core(name: impl Into<String>) -> Self {
        Self::new(CORE_NAMESPACE, name)
    }

    /// Create a primitive type name (e.g. `int`).
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new("", name)
    }

    /// The universal root type.
    pub fn object() -> Self {
        Self::core("Object")
    }

    /// The `void` pseudo-type.
    pub fn void() -> Self {
        Self::primitive("void")
    }

    /// Parse a canonical dotted name such as `java.util.Map`.
    ///
    /// A name without a dot lives in the default (empty) namespace.
    pub fn parse(canonical: &str) -> Result<Self, InvalidTypeName> {
        let invalid = |reason| InvalidTypeName {
            name: canonical.to_string(),
            reason,
        };

        if canonical.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if canonical
            .split('.')
            .any(|segment| !is_identifier(segment))
        {
            return Err(invalid(
                "every segment must start with a letter, '_' or '$' and contain only letters, digits, '_' or '$'",
            ));
        }

        Ok(match canonical.rsplit_once('.') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::new("", canonical),
        })
    }

    /// Namespace of the type (empty for primitives and the default namespace).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Simple (short) name of the type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified name.
    pub fn canonical(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Whether the type is visible without an import.
    pub fn is_core(&self) -> bool {
        self.namespace.is_empty() || self.namespace == CORE_NAMESPACE
    }

    /// Whether the type is one of the [`PRIMITIVES`].
    pub fn is_primitive(&self) -> bool {
        self.namespace.is_empty() && PRIMITIVES.contains(&self.name.as_str())
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

impl Ord for TypeName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl PartialOrd for TypeName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

impl TryFrom<String> for TypeName {
    type Error = InvalidTypeName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qualified() {
        let ty = TypeName::parse("java.util.function.BiConsumer").unwrap();
        assert_eq!(ty.namespace(), "java.util.function");
        assert_eq!(ty.name(), "BiConsumer");
        assert_eq!(ty.to_string(), "java.util.function.BiConsumer");
    }

    #[test]
    fn test_parse_default_namespace() {
        let ty = TypeName::parse("int").unwrap();
        assert_eq!(ty.namespace(), "");
        assert!(ty.is_primitive());
        assert!(ty.is_core());
    }

    #[test]
    fn test_parse_rejects_bad_segments() {
        assert!(TypeName::parse("").is_err());
        assert!(TypeName::parse("java..util").is_err());
        assert!(TypeName::parse("java.util.").is_err());
        assert!(TypeName::parse("9lives.Cat").is_err());
    }

    #[test]
    fn test_core_namespace() {
        assert!(TypeName::core("String").is_core());
        assert!(!TypeName::new("java.lang.reflect", "Method").is_core());
        assert_eq!(TypeName::object().canonical(), "java.lang.Object");
    }

    #[test]
    fn test_ordering_by_canonical_name() {
        let mut names = vec![
            TypeName::parse("java.util.function.BiConsumer").unwrap(),
            TypeName::parse("java.io.Serializable").unwrap(),
            TypeName::parse("java.util.Iterator").unwrap(),
        ];
        names.sort();
        let canonical: Vec<_> = names.iter().map(TypeName::canonical).collect();
        assert_eq!(
            canonical,
            [
                "java.io.Serializable",
                "java.util.Iterator",
                "java.util.function.BiConsumer"
            ]
        );
    }

    #[test]
    fn test_string_conversions() {
        let ty = TypeName::try_from("java.util.List".to_string()).unwrap();
        assert_eq!(ty, TypeName::new("java.util", "List"));
        assert_eq!(String::from(ty), "java.util.List");
        assert!(TypeName::try_from("java.util.".to_string()).is_err());
    }
}
