//! Expressions, statements and member bodies.

use classgen_core::TypeName;

use crate::{Element, Error, Render, Result, TokenKind, TypeRef, Value, error::require_name};

/// An expression that can appear as a statement, an argument or the
/// right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Value),
    Variable(String),
    New(NewInstance),
    Invoke(Invocation),
}

impl Expression {
    pub fn literal(value: Value) -> Self {
        Self::Literal(value)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<NewInstance> for Expression {
    fn from(value: NewInstance) -> Self {
        Self::New(value)
    }
}

impl From<Invocation> for Expression {
    fn from(value: Invocation) -> Self {
        Self::Invoke(value)
    }
}

impl Element for Expression {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        match self {
            Self::Literal(value) => {
                sink.append_kind(TokenKind::LiteralValue)?;
                sink.append_value(value)
            }
            Self::Variable(name) => {
                require_name("variable reference", name)?;
                sink.append_kind(TokenKind::VariableReference)?;
                sink.append_text(name)
            }
            Self::New(new) => new.render(sink),
            Self::Invoke(invoke) => invoke.render(sink),
        }
    }
}

/// `new <Type>(<args>)`
#[derive(Debug, Clone, PartialEq)]
pub struct NewInstance {
    ty: TypeRef,
    args: Vec<Expression>,
}

impl NewInstance {
    /// Instantiate a type whose constructors are not described. Use
    /// [`ConstructorDefinition::invoke`](crate::ConstructorDefinition::invoke)
    /// to have the argument count checked.
    pub fn new(ty: impl Into<TypeRef>, args: Vec<Expression>) -> Self {
        Self {
            ty: ty.into(),
            args,
        }
    }
}

impl Element for NewInstance {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        if self.ty.is_blank() {
            return Err(Error::rendering("instantiated type", self.ty.canonical()));
        }
        sink.append_kind(TokenKind::NewBegin)?;
        sink.append_kind(TokenKind::NewKeyword)?;
        sink.append_kind(TokenKind::NewType)?;
        sink.append_type(&self.ty)?;
        sink.append_kind(TokenKind::NewArgsBlockBegin)?;
        sink.append_all(&self.args, &TokenKind::NewArgsSeparator)?;
        sink.append_kind(TokenKind::NewArgsBlockEnd)?;
        sink.append_kind(TokenKind::NewEnd)
    }
}

/// `[<target>.]<name>(<args>)`
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    target: Option<String>,
    name: String,
    args: Vec<Expression>,
}

impl Invocation {
    /// An unqualified call. Use
    /// [`MethodDefinition::invoke`](crate::MethodDefinition::invoke) to have
    /// the argument count checked.
    pub fn new(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Self {
            target: None,
            name: name.into(),
            args,
        }
    }

    /// Call on a named receiver.
    pub fn on(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

impl Element for Invocation {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        require_name("invoked method", &self.name)?;
        sink.append_kind(TokenKind::InvokeBegin)?;
        if let Some(target) = &self.target {
            require_name("invocation target", target)?;
            sink.append_kind(TokenKind::InvokeTarget)?;
            sink.append_text(target)?;
            sink.append_kind(TokenKind::InvokeSeparator)?;
        }
        sink.append_kind(TokenKind::InvokeName)?;
        sink.append_text(&self.name)?;
        sink.append_kind(TokenKind::InvokeArgsBlockBegin)?;
        sink.append_all(&self.args, &TokenKind::InvokeArgsSeparator)?;
        sink.append_kind(TokenKind::InvokeArgsBlockEnd)?;
        sink.append_kind(TokenKind::InvokeEnd)
    }
}

/// `<Type> <name> [= <value>]`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    ty: TypeRef,
    name: String,
    value: Option<Expression>,
}

impl VariableDefinition {
    pub fn new(ty: impl Into<TypeRef>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            value: None,
        }
    }

    /// Initialize the variable where it is defined.
    pub fn init(mut self, value: impl Into<Expression>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference to this variable as an expression.
    pub fn reference(&self) -> Expression {
        Expression::Variable(self.name.clone())
    }

    /// `<name> = <value>`
    pub fn assign(&self, value: impl Into<Expression>) -> VariableAssignment {
        VariableAssignment {
            name: self.name.clone(),
            value: value.into(),
        }
    }

    /// `<name>.<method>(<args>)`, checking the argument count.
    pub fn invoke(
        &self,
        method: &crate::MethodDefinition,
        args: Vec<Expression>,
    ) -> Result<Invocation> {
        Ok(method.invoke(args)?.on(self.name.clone()))
    }
}

impl Element for VariableDefinition {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        require_name("variable name", &self.name)?;
        if self.ty.is_blank() {
            return Err(Error::rendering("variable type", self.ty.canonical()));
        }
        sink.append_kind(TokenKind::VariableDefinitionBegin)?;
        sink.append_kind(TokenKind::VariableType)?;
        sink.append_type(&self.ty)?;
        sink.append_kind(TokenKind::VariableName)?;
        sink.append_text(&self.name)?;
        if let Some(value) = &self.value {
            sink.append_kind(TokenKind::AssignOperator)?;
            value.render(sink)?;
        }
        sink.append_kind(TokenKind::VariableDefinitionEnd)
    }
}

/// `<name> = <value>`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    name: String,
    value: Expression,
}

impl Element for VariableAssignment {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        require_name("assigned variable", &self.name)?;
        sink.append_kind(TokenKind::VariableAssignBegin)?;
        sink.append_kind(TokenKind::VariableAssignName)?;
        sink.append_text(&self.name)?;
        sink.append_kind(TokenKind::AssignOperator)?;
        self.value.render(sink)?;
        sink.append_kind(TokenKind::VariableAssignEnd)
    }
}

/// A statement terminated by `;`.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Variable(VariableDefinition),
    Assign(VariableAssignment),
    Expression(Expression),
    Throw(Expression),
}

impl Statement {
    /// `throw new UnsupportedOperationException();`
    pub fn unsupported() -> Self {
        Self::Throw(Expression::New(NewInstance::new(
            TypeName::core("UnsupportedOperationException"),
            Vec::new(),
        )))
    }
}

impl From<VariableDefinition> for Statement {
    fn from(value: VariableDefinition) -> Self {
        Self::Variable(value)
    }
}

impl From<VariableAssignment> for Statement {
    fn from(value: VariableAssignment) -> Self {
        Self::Assign(value)
    }
}

impl From<Expression> for Statement {
    fn from(value: Expression) -> Self {
        Self::Expression(value)
    }
}

impl From<Invocation> for Statement {
    fn from(value: Invocation) -> Self {
        Self::Expression(Expression::Invoke(value))
    }
}

impl Element for Statement {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        sink.append_kind(TokenKind::StatementBegin)?;
        match self {
            Self::Variable(variable) => variable.render(sink)?,
            Self::Assign(assign) => assign.render(sink)?,
            Self::Expression(expr) => expr.render(sink)?,
            Self::Throw(expr) => {
                sink.append_kind(TokenKind::ThrowBegin)?;
                sink.append_kind(TokenKind::ThrowKeyword)?;
                expr.render(sink)?;
                sink.append_kind(TokenKind::ThrowEnd)?;
            }
        }
        sink.append_kind(TokenKind::StatementEnd)
    }
}

/// Body of a method or constructor.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    /// A stub that throws `UnsupportedOperationException`.
    #[default]
    Unsupported,
    Statements(Vec<Statement>),
}

impl Body {
    pub fn statements(statements: impl IntoIterator<Item = Statement>) -> Self {
        Self::Statements(statements.into_iter().collect())
    }
}

impl Element for Body {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        sink.append_kind(TokenKind::ImplBlockBegin)?;
        match self {
            Self::Unsupported => Statement::unsupported().render(sink)?,
            Self::Statements(statements) => {
                for statement in statements {
                    statement.render(sink)?;
                }
            }
        }
        sink.append_kind(TokenKind::ImplBlockEnd)
    }
}

/// Fail with [`Error::ArgumentCountMismatch`] unless `actual == expected`.
pub(crate) fn check_arity(target: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::ArgumentCountMismatch {
            target: target.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}
