use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename, shared by every diagnostic of one parse.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn unknown_type_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    pub fn unbound_type_parameter_error(
        &self,
        param: impl Into<String>,
        target: impl Into<String>,
        declared: &[String],
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let declared = if declared.is_empty() {
            "none".to_string()
        } else {
            declared.join(", ")
        };
        Box::new(Error::UnboundTypeParameter {
            src: self.named_source(),
            span,
            param: param.into(),
            target: target.into(),
            declared,
        })
    }

    pub fn invalid_type_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidTypeName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a classgen.toml or pass its location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse classgen.toml")]
    #[diagnostic(code(classgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(classgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("unknown type '{name}'")]
    #[diagnostic(
        code(classgen::unknown_type),
        help("describe it in a [types.\"{name}\"] table")
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared under [types]")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("'{target}' has no type parameter '{param}'")]
    #[diagnostic(
        code(classgen::unbound_type_parameter),
        help("type parameters declared by '{target}': {declared}")
    )]
    UnboundTypeParameter {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type parameter")]
        span: Option<SourceSpan>,
        param: String,
        target: String,
        declared: String,
    },

    #[error("invalid type name '{name}'")]
    #[diagnostic(code(classgen::invalid_type_name), help("{reason}"))]
    InvalidTypeName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid type name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },
}
