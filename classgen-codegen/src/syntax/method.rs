use std::cmp::Ordering;

use crate::{
    Body, Element, Expression, Invocation, Parameter, Render, Result, TokenKind, TypeRef,
    Visibility, error::require_name, ordering::compare_methods, syntax::expr::check_arity,
    syntax::parameter::insert_param,
};

/// A method of the type being defined.
///
/// # Example
///
/// ```
/// use classgen_codegen::{MethodDefinition, Parameter, TypeRef};
///
/// let compare = MethodDefinition::new("compare")
///     .returns(TypeRef::primitive("int"))
///     .param(Parameter::new(1, "a0", TypeRef::named("Widget")))
///     .param(Parameter::new(2, "a1", TypeRef::named("Widget")));
///
/// assert_eq!(compare.params().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MethodDefinition {
    name: String,
    visibility: Visibility,
    returns: TypeRef,
    params: Vec<Parameter>,
    body: Body,
}

impl MethodDefinition {
    /// A public `void` method with no parameters and a stub body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            returns: TypeRef::primitive("void"),
            params: Vec::new(),
            body: Body::Unsupported,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeRef>) -> Self {
        self.returns = ty.into();
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

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &TypeRef {
        &self.returns
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// `<name>(<args>)`, checking the argument count.
    pub fn invoke(&self, args: Vec<Expression>) -> Result<Invocation> {
        check_arity(&self.name, self.params.len(), args.len())?;
        Ok(Invocation::new(self.name.clone(), args))
    }
}

impl Ord for MethodDefinition {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_methods(self, other)
    }
}

impl PartialOrd for MethodDefinition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MethodDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MethodDefinition {}

impl Element for MethodDefinition {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        require_name("method name", &self.name)?;
        if self.returns.is_blank() {
            return Err(crate::Error::rendering("return type", self.returns.canonical()));
        }
        sink.append_kind(TokenKind::MethodBegin)?;
        self.visibility.render(sink)?;
        sink.append_kind(TokenKind::MethodReturnType)?;
        sink.append_type(&self.returns)?;
        sink.append_kind(TokenKind::MethodName)?;
        sink.append_text(&self.name)?;
        sink.append_kind(TokenKind::MethodParamsBlockBegin)?;
        sink.append_all(&self.params, &TokenKind::MethodParamsSeparator)?;
        sink.append_kind(TokenKind::MethodParamsBlockEnd)?;
        self.body.render(sink)?;
        sink.append_kind(TokenKind::MethodEnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, FormatConfig, FormatRender, Statement, TextRender, Value, VariableDefinition};
    use classgen_core::TypeName;

    fn formatted(method: &MethodDefinition) -> String {
        let mut out = String::new();
        let mut render = FormatRender::new(TextRender::new(&mut out), FormatConfig::standard());
        method.render(&mut render).unwrap();
        render.finish().unwrap();
        drop(render);
        out
    }

    #[test]
    fn test_stub_method() {
        let method = MethodDefinition::new("accept")
            .param(Parameter::new(1, "arg0", TypeName::object()))
            .param(Parameter::new(2, "arg1", TypeName::object()));
        assert_eq!(
            formatted(&method),
            "public void accept(Object arg0, Object arg1) {\n  throw new UnsupportedOperationException();\n}"
        );
    }

    #[test]
    fn test_params_render_by_position() {
        let method = MethodDefinition::new("put")
            .param(Parameter::new(2, "value", TypeName::core("String")))
            .param(Parameter::new(1, "key", TypeRef::primitive("int")));
        assert_eq!(
            formatted(&method),
            "public void put(int key, String value) {\n  throw new UnsupportedOperationException();\n}"
        );
    }

    #[test]
    fn test_invoke_on_variable() {
        let size = MethodDefinition::new("size").returns(TypeRef::primitive("int"));
        let list = VariableDefinition::new(TypeName::new("java.util", "List"), "items");
        let call = list.invoke(&size, Vec::new()).unwrap();

        let method = MethodDefinition::new("count")
            .visibility(Visibility::Protected)
            .returns(TypeRef::primitive("int"))
            .body(Body::statements([
                Statement::from(list.clone()),
                Statement::from(VariableDefinition::new(TypeRef::primitive("int"), "n").init(call)),
            ]));
        assert_eq!(
            formatted(&method),
            "protected int count() {\n  java.util.List items;\n  int n = items.size();\n}"
        );

        let err = list.invoke(&size, vec![Value::Int(1).into()]).unwrap_err();
        assert!(matches!(err, Error::ArgumentCountMismatch { .. }));
    }

    #[test]
    fn test_blank_name_fails() {
        let mut out = String::new();
        let err = MethodDefinition::new("")
            .render(&mut TextRender::new(&mut out))
            .unwrap_err();
        assert!(matches!(err, Error::Rendering { field: "method name", .. }));
    }

    #[test]
    fn test_identity_is_name_and_params() {
        let a = MethodDefinition::new("run").returns(TypeRef::primitive("int"));
        let b = MethodDefinition::new("run");
        assert_eq!(a, b);
        assert_ne!(a, b.param(Parameter::new(1, "x", TypeRef::primitive("int"))));
    }
}
