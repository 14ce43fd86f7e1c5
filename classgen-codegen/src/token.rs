//! Token kinds: the vocabulary shared by syntax elements and render stages.
//!
//! A kind marks a syntactic position. Kinds with literal text (brackets,
//! keywords, punctuation) contribute that text when rendered; marker kinds
//! are empty and only label the text that follows them so formatting rules
//! can match on position.

/// A symbolic position marker carrying optional literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // package
    PackageBegin,
    PackageKeyword,
    PackageName,
    PackageEnd,

    // imports
    ImportBlockBegin,
    ImportBegin,
    ImportKeyword,
    ImportType,
    ImportEnd,
    ImportBlockEnd,

    // modifiers
    ModifierBegin,
    PublicKeyword,
    ProtectedKeyword,
    PrivateKeyword,
    ModifierEnd,

    // type definition
    ClassDefinitionBegin,
    ClassKeyword,
    ClassName,
    ClassBodyBegin,
    ClassBodyEnd,
    ClassDefinitionEnd,

    // conformance list
    ImplementsBlockBegin,
    ImplementsKeyword,
    ImplementsSeparator,
    ImplementsBlockEnd,
    InheritedElementBegin,
    InheritedElementType,
    InheritedElementEnd,
    GenericArgsBlockBegin,
    GenericArgsSeparator,
    GenericArgsBlockEnd,

    // member blocks
    ConstructorsBlockBegin,
    ConstructorsSeparator,
    ConstructorsBlockEnd,
    MethodsBlockBegin,
    MethodsSeparator,
    MethodsBlockEnd,

    // constructor definition
    ConstructorBegin,
    ConstructorName,
    ConstructorParamsBlockBegin,
    ConstructorParamsSeparator,
    ConstructorParamsBlockEnd,
    ConstructorEnd,

    // method definition
    MethodBegin,
    MethodReturnType,
    MethodName,
    MethodParamsBlockBegin,
    MethodParamsSeparator,
    MethodParamsBlockEnd,
    MethodEnd,

    // parameter
    ParameterBegin,
    ParameterType,
    ParameterName,
    ParameterEnd,

    // bodies and statements
    ImplBlockBegin,
    ImplBlockEnd,
    StatementBegin,
    StatementEnd,

    // variables
    VariableDefinitionBegin,
    VariableType,
    VariableName,
    VariableDefinitionEnd,
    VariableAssignBegin,
    VariableAssignName,
    VariableAssignEnd,
    AssignOperator,

    // invocation
    InvokeBegin,
    InvokeTarget,
    InvokeSeparator,
    InvokeName,
    InvokeArgsBlockBegin,
    InvokeArgsSeparator,
    InvokeArgsBlockEnd,
    InvokeEnd,

    // new instance
    NewBegin,
    NewKeyword,
    NewType,
    NewArgsBlockBegin,
    NewArgsSeparator,
    NewArgsBlockEnd,
    NewEnd,

    // throw
    ThrowBegin,
    ThrowKeyword,
    ThrowEnd,

    // literal values
    LiteralValue,
    VariableReference,
}

impl TokenKind {
    /// Literal text emitted for this kind. Marker kinds return `""`.
    pub const fn text(self) -> &'static str {
        match self {
            Self::PackageKeyword => "package",
            Self::ImportKeyword => "import",
            Self::PublicKeyword => "public",
            Self::ProtectedKeyword => "protected",
            Self::PrivateKeyword => "private",
            Self::ClassKeyword => "class",
            Self::ImplementsKeyword => "implements",
            Self::NewKeyword => "new",
            Self::ThrowKeyword => "throw",

            Self::PackageEnd | Self::ImportEnd | Self::StatementEnd => ";",

            Self::ClassBodyBegin | Self::ImplBlockBegin => "{",
            Self::ClassBodyEnd | Self::ImplBlockEnd => "}",

            Self::ConstructorParamsBlockBegin
            | Self::MethodParamsBlockBegin
            | Self::InvokeArgsBlockBegin
            | Self::NewArgsBlockBegin => "(",
            Self::ConstructorParamsBlockEnd
            | Self::MethodParamsBlockEnd
            | Self::InvokeArgsBlockEnd
            | Self::NewArgsBlockEnd => ")",

            Self::GenericArgsBlockBegin => "<",
            Self::GenericArgsBlockEnd => ">",

            Self::ImplementsSeparator
            | Self::GenericArgsSeparator
            | Self::ConstructorParamsSeparator
            | Self::MethodParamsSeparator
            | Self::InvokeArgsSeparator
            | Self::NewArgsSeparator => ",",

            Self::InvokeSeparator => ".",
            Self::AssignOperator => "=",

            _ => "",
        }
    }

    /// Whether this kind is a keyword of the target language.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::PackageKeyword
                | Self::ImportKeyword
                | Self::PublicKeyword
                | Self::ProtectedKeyword
                | Self::PrivateKeyword
                | Self::ClassKeyword
                | Self::ImplementsKeyword
                | Self::NewKeyword
                | Self::ThrowKeyword
        )
    }

    /// Whether this kind only marks a position and emits no text.
    pub const fn is_marker(self) -> bool {
        self.text().is_empty()
    }
}
