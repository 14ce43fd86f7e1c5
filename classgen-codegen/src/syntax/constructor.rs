use std::cmp::Ordering;

use crate::{
    Body, Element, Error, Expression, NewInstance, Parameter, Render, Result, TokenKind, TypeRef,
    Visibility, ordering::compare_constructors, syntax::expr::check_arity,
    syntax::parameter::insert_param,
};

/// A constructor of the type being defined.
///
/// # Example
///
/// ```
/// use classgen_codegen::{ConstructorDefinition, Parameter, TypeRef};
///
/// let ctor = ConstructorDefinition::new(TypeRef::named("Widget"))
///     .param(Parameter::new(1, "size", TypeRef::primitive("int")));
///
/// assert!(ctor.invoke(vec![]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ConstructorDefinition {
    owner: TypeRef,
    visibility: Visibility,
    params: Vec<Parameter>,
    body: Body,
}

impl ConstructorDefinition {
    /// A public, parameterless constructor with a stub body.
    pub fn new(owner: TypeRef) -> Self {
        Self {
            owner,
            visibility: Visibility::Public,
            params: Vec::new(),
            body: Body::Unsupported,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Add a parameter, replacing any parameter at the same position.
    pub fn param(mut self, param: Parameter) -> Self {
        insert_param(&mut self.params, param);
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn owner(&self) -> &TypeRef {
        &self.owner
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// `new <Owner>(<args>)`, checking the argument count.
    pub fn invoke(&self, args: Vec<Expression>) -> Result<NewInstance> {
        check_arity(&self.owner.canonical(), self.params.len(), args.len())?;
        Ok(NewInstance::new(self.owner.clone(), args))
    }

    fn simple_name(&self) -> &str {
        match &self.owner {
            TypeRef::Explicit(ty) => ty.name(),
            TypeRef::Named(name) => name,
        }
    }
}

impl Ord for ConstructorDefinition {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_constructors(self, other)
    }
}

impl PartialOrd for ConstructorDefinition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ConstructorDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ConstructorDefinition {}

impl Element for ConstructorDefinition {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        if self.owner.is_blank() {
            return Err(Error::rendering("constructor owner", self.owner.canonical()));
        }
        sink.append_kind(TokenKind::ConstructorBegin)?;
        self.visibility.render(sink)?;
        sink.append_kind(TokenKind::ConstructorName)?;
        sink.append_text(self.simple_name())?;
        sink.append_kind(TokenKind::ConstructorParamsBlockBegin)?;
        sink.append_all(&self.params, &TokenKind::ConstructorParamsSeparator)?;
        sink.append_kind(TokenKind::ConstructorParamsBlockEnd)?;
        self.body.render(sink)?;
        sink.append_kind(TokenKind::ConstructorEnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FormatConfig, FormatRender, Statement, TextRender, Value, VariableDefinition};
    use classgen_core::TypeName;

    fn formatted(ctor: &ConstructorDefinition) -> String {
        let mut out = String::new();
        let mut render = FormatRender::new(TextRender::new(&mut out), FormatConfig::standard());
        ctor.render(&mut render).unwrap();
        render.finish().unwrap();
        drop(render);
        out
    }

    #[test]
    fn test_default_body_is_stub() {
        let ctor = ConstructorDefinition::new(TypeRef::named("Widget"));
        assert_eq!(
            formatted(&ctor),
            "public Widget() {\n  throw new UnsupportedOperationException();\n}"
        );
    }

    #[test]
    fn test_explicit_owner_uses_simple_name() {
        let ctor = ConstructorDefinition::new(TypeRef::explicit(TypeName::new("dev.example", "Widget")))
            .visibility(Visibility::Private)
            .param(Parameter::new(1, "size", TypeRef::primitive("int")))
            .body(Body::statements([Statement::from(
                VariableDefinition::new(TypeRef::primitive("int"), "copy").init(Value::Int(0)),
            )]));
        assert_eq!(formatted(&ctor), "private Widget(int size) {\n  int copy = 0;\n}");
    }

    #[test]
    fn test_invoke_checks_arity() {
        let ctor = ConstructorDefinition::new(TypeRef::named("Widget"))
            .param(Parameter::new(1, "size", TypeRef::primitive("int")));
        assert!(ctor.invoke(vec![Value::Int(3).into()]).is_ok());

        let err = ctor.invoke(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::ArgumentCountMismatch {
                expected: 1,
                actual: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_blank_owner_fails() {
        let mut out = String::new();
        let err = ConstructorDefinition::new(TypeRef::named(""))
            .render(&mut TextRender::new(&mut out))
            .unwrap_err();
        assert!(matches!(err, Error::Rendering { field: "constructor owner", .. }));
    }
}
