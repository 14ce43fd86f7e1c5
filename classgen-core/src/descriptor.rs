//! Member descriptors for conformance targets and entities.
//!
//! Descriptors are supplied by the caller (usually built from a manifest)
//! and stand in for a runtime type system: the generator only needs
//! names, type signatures and parameter lists.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::TypeName;

/// Methods declared by the universal root type, by name and erased
/// parameter types. Conformance targets never get stubs for these.
const UNIVERSAL_ROOT_METHODS: &[(&str, &[&str])] = &[
    ("clone", &[]),
    ("equals", &["java.lang.Object"]),
    ("finalize", &[]),
    ("getClass", &[]),
    ("hashCode", &[]),
    ("notify", &[]),
    ("notifyAll", &[]),
    ("toString", &[]),
    ("wait", &[]),
    ("wait", &["long"]),
    ("wait", &["long", "int"]),
];

/// Whether a method with this name and erased parameter types is
/// declared by the universal root type.
pub fn is_universal_root_method(name: &str, erased_params: &[String]) -> bool {
    UNIVERSAL_ROOT_METHODS.iter().any(|(root_name, root_params)| {
        *root_name == name
            && root_params.len() == erased_params.len()
            && root_params
                .iter()
                .zip(erased_params)
                .all(|(root, param)| *root == param)
    })
}

/// Kind of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeKind {
    Interface,
    AbstractClass,
    Class,
}

impl TypeKind {
    /// Only interfaces may appear in a conformance list.
    pub fn is_interface_like(self) -> bool {
        matches!(self, Self::Interface)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::AbstractClass => "abstract class",
            Self::Class => "class",
        }
    }
}

/// A type as written in a member signature: concrete, or a type variable
/// declared by the owning type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeSig {
    Concrete(TypeName),
    Variable(String),
}

impl TypeSig {
    pub fn concrete(name: TypeName) -> Self {
        Self::Concrete(name)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Canonical name after erasure. Type variables erase to the root type.
    pub fn erased(&self) -> String {
        match self {
            Self::Concrete(name) => name.canonical(),
            Self::Variable(_) => TypeName::object().canonical(),
        }
    }
}

/// A method parameter. Unnamed parameters get positional names when stubbed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDescriptor {
    pub name: Option<String>,
    pub ty: TypeSig,
}

impl ParamDescriptor {
    pub fn new(ty: TypeSig) -> Self {
        Self { name: None, ty }
    }

    pub fn named(name: impl Into<String>, ty: TypeSig) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }
}

/// A method declared (or inherited) by a described type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub params: Vec<ParamDescriptor>,
    pub returns: TypeSig,
    /// `false` for default and static members.
    pub is_abstract: bool,
}

impl MethodDescriptor {
    /// An abstract method returning `void` with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: TypeSig::Concrete(TypeName::void()),
            is_abstract: true,
        }
    }

    pub fn param(mut self, param: ParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: TypeSig) -> Self {
        self.returns = ty;
        self
    }

    /// Mark the method as having a body (default or static member).
    pub fn concrete(mut self) -> Self {
        self.is_abstract = false;
        self
    }

    /// Whether this method overrides a method of the universal root type.
    pub fn is_universal_root(&self) -> bool {
        let erased: Vec<String> = self.params.iter().map(|p| p.ty.erased()).collect();
        is_universal_root_method(&self.name, &erased)
    }
}

/// Description of a type that can be named in a conformance list.
///
/// # Example
///
/// ```
/// use classgen_core::{MethodDescriptor, ParamDescriptor, TypeDescriptor, TypeName, TypeSig};
///
/// let comparator = TypeDescriptor::interface(TypeName::new("java.util", "Comparator"))
///     .type_param("T")
///     .method(
///         MethodDescriptor::new("compare")
///             .param(ParamDescriptor::new(TypeSig::variable("T")))
///             .param(ParamDescriptor::new(TypeSig::variable("T")))
///             .returns(TypeSig::concrete(TypeName::primitive("int"))),
///     );
///
/// assert_eq!(comparator.abstract_methods().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub name: TypeName,
    pub kind: TypeKind,
    pub type_params: Vec<String>,
    pub methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: TypeName, kind: TypeKind) -> Self {
        Self {
            name,
            kind,
            type_params: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn interface(name: TypeName) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    pub fn class(name: TypeName) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn type_param(mut self, name: impl Into<String>) -> Self {
        self.type_params.push(name.into());
        self
    }

    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn is_interface_like(&self) -> bool {
        self.kind.is_interface_like()
    }

    pub fn declares_type_param(&self, name: &str) -> bool {
        self.type_params.iter().any(|p| p == name)
    }

    /// Abstract members that are not declared by the universal root type.
    pub fn abstract_methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods
            .iter()
            .filter(|m| m.is_abstract && !m.is_universal_root())
    }
}

/// A conformance target with concrete bindings for its type parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConformanceSpec {
    pub target: TypeDescriptor,
    /// Type-parameter name -> bound type. Unbound parameters fall back to
    /// the universal root type.
    pub bindings: IndexMap<String, TypeName>,
}

impl ConformanceSpec {
    pub fn new(target: TypeDescriptor) -> Self {
        Self {
            target,
            bindings: IndexMap::new(),
        }
    }

    pub fn bind(mut self, param: impl Into<String>, ty: TypeName) -> Self {
        self.bindings.insert(param.into(), ty);
        self
    }
}

/// An entity for which a stub type is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDescriptor {
    pub ty: TypeName,
    pub conforms: Vec<ConformanceSpec>,
}

impl EntityDescriptor {
    pub fn new(ty: TypeName) -> Self {
        Self {
            ty,
            conforms: Vec::new(),
        }
    }

    pub fn conforms_to(mut self, spec: ConformanceSpec) -> Self {
        self.conforms.push(spec);
        self
    }

    /// Name of the generated type: the entity's simple name plus `suffix`.
    pub fn generated_name(&self, suffix: &str) -> TypeName {
        TypeName::new(self.ty.namespace(), format!("{}{}", self.ty.name(), suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparator() -> TypeDescriptor {
        TypeDescriptor::interface(TypeName::new("java.util", "Comparator"))
            .type_param("T")
            .method(
                MethodDescriptor::new("compare")
                    .param(ParamDescriptor::new(TypeSig::variable("T")))
                    .param(ParamDescriptor::new(TypeSig::variable("T")))
                    .returns(TypeSig::concrete(TypeName::primitive("int"))),
            )
            .method(
                MethodDescriptor::new("equals")
                    .param(ParamDescriptor::new(TypeSig::concrete(TypeName::object())))
                    .returns(TypeSig::concrete(TypeName::primitive("boolean"))),
            )
            .method(MethodDescriptor::new("reversed").concrete())
    }

    #[test]
    fn test_universal_root_methods() {
        assert!(is_universal_root_method("hashCode", &[]));
        assert!(is_universal_root_method(
            "equals",
            &["java.lang.Object".to_string()]
        ));
        assert!(!is_universal_root_method(
            "equals",
            &["java.lang.String".to_string()]
        ));
        assert!(is_universal_root_method(
            "wait",
            &["long".to_string(), "int".to_string()]
        ));
    }

    #[test]
    fn test_type_variable_erases_to_root() {
        let method = MethodDescriptor::new("equals").param(ParamDescriptor::new(TypeSig::variable("T")));
        assert!(method.is_universal_root());
    }

    #[test]
    fn test_abstract_methods_skip_root_and_concrete() {
        let desc = comparator();
        let names: Vec<_> = desc
            .abstract_methods()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["compare"]);
    }

    #[test]
    fn test_interface_like() {
        assert!(comparator().is_interface_like());
        assert!(!TypeDescriptor::class(TypeName::new("java.util", "ArrayList")).is_interface_like());
        assert!(!TypeKind::AbstractClass.is_interface_like());
    }

    #[test]
    fn test_generated_name() {
        let entity = EntityDescriptor::new(TypeName::new("dev.example", "User"));
        assert_eq!(
            entity.generated_name("StubMapper"),
            TypeName::new("dev.example", "UserStubMapper")
        );
    }
}
