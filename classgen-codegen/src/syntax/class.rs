use std::collections::BTreeSet;

use classgen_core::ConformanceSpec;

use crate::{
    Conformance, ConstructorDefinition, Element, MethodDefinition, Render, Result, TokenKind,
    TypeRef, Visibility, error::require_name, syntax::conformance::stub_methods,
};

/// A class definition.
///
/// Constructors and methods are kept in sorted sets, so the rendered
/// output does not depend on the order members were added in, and adding
/// a member with the same signature as an existing one has no effect.
///
/// # Example
///
/// ```
/// use classgen_codegen::{FormatConfig, TypeDefinition};
///
/// let widget = TypeDefinition::new("Widget");
/// assert_eq!(widget.format(&FormatConfig::standard()).unwrap(), "public class Widget {}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    name: String,
    visibility: Visibility,
    conformances: Vec<Conformance>,
    constructors: BTreeSet<ConstructorDefinition>,
    methods: BTreeSet<MethodDefinition>,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            conformances: Vec::new(),
            constructors: BTreeSet::new(),
            methods: BTreeSet::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Declare conformance to `spec.target` and add stubs for its abstract
    /// members.
    ///
    /// Fails with [`Error::IllegalConformance`](crate::Error::IllegalConformance)
    /// if the target is not an interface.
    pub fn implements(mut self, spec: &ConformanceSpec) -> Result<Self> {
        let conformance = Conformance::from_spec(spec)?;
        if self.conformances.iter().any(|c| c.ty() == conformance.ty()) {
            tracing::debug!(conformance = %conformance.ty(), "conformance already declared");
        } else {
            self.conformances.push(conformance);
        }
        self.methods.extend(stub_methods(spec));
        Ok(self)
    }

    pub fn constructor(mut self, constructor: ConstructorDefinition) -> Self {
        self.constructors.insert(constructor);
        self
    }

    pub fn method(mut self, method: MethodDefinition) -> Self {
        self.methods.insert(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference to the type being defined.
    pub fn as_type(&self) -> TypeRef {
        TypeRef::named(self.name.clone())
    }

    pub fn constructors(&self) -> impl Iterator<Item = &ConstructorDefinition> {
        self.constructors.iter()
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDefinition> {
        self.methods.iter()
    }

    /// Render on its own (no package or imports) through the formatter.
    pub fn format(&self, config: &crate::FormatConfig) -> Result<String> {
        let mut out = String::new();
        let mut render = crate::FormatRender::new(crate::TextRender::new(&mut out), config.clone());
        self.render(&mut render)?;
        render.finish()?;
        drop(render);
        Ok(out)
    }
}

impl Element for TypeDefinition {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        require_name("class name", &self.name)?;
        sink.append_kind(TokenKind::ClassDefinitionBegin)?;
        self.visibility.render(sink)?;
        sink.append_kind(TokenKind::ClassKeyword)?;
        sink.append_kind(TokenKind::ClassName)?;
        sink.append_text(&self.name)?;

        if !self.conformances.is_empty() {
            sink.append_kind(TokenKind::ImplementsBlockBegin)?;
            sink.append_kind(TokenKind::ImplementsKeyword)?;
            sink.append_all(&self.conformances, &TokenKind::ImplementsSeparator)?;
            sink.append_kind(TokenKind::ImplementsBlockEnd)?;
        }

        sink.append_kind(TokenKind::ClassBodyBegin)?;
        if !self.constructors.is_empty() {
            sink.append_kind(TokenKind::ConstructorsBlockBegin)?;
            sink.append_all(&self.constructors, &TokenKind::ConstructorsSeparator)?;
            sink.append_kind(TokenKind::ConstructorsBlockEnd)?;
        }
        if !self.methods.is_empty() {
            sink.append_kind(TokenKind::MethodsBlockBegin)?;
            sink.append_all(&self.methods, &TokenKind::MethodsSeparator)?;
            sink.append_kind(TokenKind::MethodsBlockEnd)?;
        }
        sink.append_kind(TokenKind::ClassBodyEnd)?;
        sink.append_kind(TokenKind::ClassDefinitionEnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, FormatConfig, Parameter, TextRender};
    use classgen_core::{MethodDescriptor, ParamDescriptor, TypeDescriptor, TypeName, TypeSig};

    fn unformatted(definition: &TypeDefinition) -> String {
        let mut out = String::new();
        definition.render(&mut TextRender::new(&mut out)).unwrap();
        out
    }

    fn runnable() -> ConformanceSpec {
        ConformanceSpec::new(
            TypeDescriptor::interface(TypeName::core("Runnable")).method(MethodDescriptor::new("run")),
        )
    }

    #[test]
    fn test_empty_class() {
        let widget = TypeDefinition::new("Widget");
        assert_eq!(unformatted(&widget), "publicclassWidget{}");
        assert_eq!(
            widget.format(&FormatConfig::standard()).unwrap(),
            "public class Widget {}"
        );
    }

    #[test]
    fn test_blank_name_fails() {
        let mut out = String::new();
        let err = TypeDefinition::new("  ")
            .render(&mut TextRender::new(&mut out))
            .unwrap_err();
        match err {
            Error::Rendering { field, value } => {
                assert_eq!(field, "class name");
                assert_eq!(value, "  ");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_members_collapse() {
        let widget = TypeDefinition::new("Widget")
            .implements(&runnable())
            .unwrap()
            .method(MethodDefinition::new("run"))
            .implements(&runnable())
            .unwrap();
        assert_eq!(widget.methods().count(), 1);
        assert_eq!(
            widget.format(&FormatConfig::standard()).unwrap(),
            "public class Widget implements Runnable {\n\n  public void run() {\n    throw new UnsupportedOperationException();\n  }\n\n}"
        );
    }

    #[test]
    fn test_illegal_conformance() {
        let spec = ConformanceSpec::new(TypeDescriptor::class(TypeName::core("Thread")));
        let err = TypeDefinition::new("Widget").implements(&spec).unwrap_err();
        assert!(matches!(err, Error::IllegalConformance { .. }));
    }

    #[test]
    fn test_constructors_before_methods() {
        let widget = TypeDefinition::new("Widget")
            .method(MethodDefinition::new("reset"))
            .constructor(
                ConstructorDefinition::new(TypeRef::named("Widget"))
                    .param(Parameter::new(1, "size", TypeRef::primitive("int"))),
            )
            .constructor(ConstructorDefinition::new(TypeRef::named("Widget")));
        let stub = "{\n    throw new UnsupportedOperationException();\n  }";
        assert_eq!(
            widget.format(&FormatConfig::standard()).unwrap(),
            format!(
                "public class Widget {{\n\n  public Widget() {stub}\n\n  public Widget(int size) {stub}\n\n  public void reset() {stub}\n\n}}"
            )
        );
    }

    #[test]
    fn test_method_order_is_stable() {
        let compare = MethodDescriptor::new("compare")
            .param(ParamDescriptor::new(TypeSig::variable("T")))
            .param(ParamDescriptor::new(TypeSig::variable("T")))
            .returns(TypeSig::concrete(TypeName::primitive("int")));
        let comparator = ConformanceSpec::new(
            TypeDescriptor::interface(TypeName::new("java.util", "Comparator"))
                .type_param("T")
                .method(compare),
        );
        let a = TypeDefinition::new("W")
            .implements(&runnable())
            .unwrap()
            .implements(&comparator)
            .unwrap();
        let b = TypeDefinition::new("W")
            .implements(&comparator)
            .unwrap()
            .implements(&runnable())
            .unwrap();
        let names = |d: &TypeDefinition| d.methods().map(|m| m.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names(&a), names(&b));
        assert_eq!(names(&a), ["compare", "run"]);
    }
}
