//! Validation helpers and source-span lookup.

use classgen_core::{TypeName, TypeSig};
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Validation context: the source being parsed plus the path of the table
/// being validated, used in error messages.
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a SourceContext {
        self.source
    }

    /// Descend into a nested table.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
        }
    }

    /// e.g. "method in 'dev.example.Mapper'", or just "method" at the top.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path.join("."))
        }
    }

    pub fn key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), key)
    }

    pub fn value_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    /// Fail unless `name` is a valid identifier.
    pub fn identifier(&self, name: &str, kind: &str) -> Result<()> {
        match identifier_error(name) {
            None => Ok(()),
            Some(reason) => Err(self.source.validation_error(
                format!("invalid {} '{}': {}", self.context_for(kind), name, reason),
                self.value_span(name),
            )),
        }
    }

    /// Parse a canonical dotted type name.
    pub fn type_name(&self, text: &str) -> Result<TypeName> {
        TypeName::parse(text).map_err(|err| {
            self.source
                .invalid_type_name_error(text, err.reason, self.value_span(text))
        })
    }

    /// Parse a type in a member signature: one of `type_params`, or a
    /// concrete type name.
    pub fn type_sig(&self, text: &str, type_params: &[String]) -> Result<TypeSig> {
        if type_params.iter().any(|param| param == text) {
            return Ok(TypeSig::variable(text));
        }
        self.type_name(text).map(TypeSig::concrete)
    }
}

/// Span of a quoted string such as `"dev.example.User"`, without the quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, value.len())));
    }
    src.find(value)
        .map(|pos| SourceSpan::from((pos, value.len())))
}

/// Span of a bare table key such as `T` in `bind = { T = "..." }`.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let patterns = [format!("{} =", key), format!("{}=", key)];
    for pattern in &patterns {
        let found = src.match_indices(pattern.as_str()).find(|(pos, _)| {
            src[..*pos]
                .chars()
                .next_back()
                .is_none_or(|c| !is_identifier_char(c))
        });
        if let Some((pos, _)) = found {
            return Some(SourceSpan::from((pos, key.len())));
        }
    }
    find_value_span(src, key)
}

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Returns None if `name` is a valid identifier, Some(reason) otherwise.
pub(crate) fn identifier_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => Some("cannot be empty"),
        Some(c) if c.is_ascii_digit() => Some("cannot start with a digit"),
        Some(c) if !is_identifier_char(c) => Some("must start with a letter, '_' or '$'"),
        Some(_) if !chars.all(is_identifier_char) => {
            Some("can only contain letters, digits, '_' or '$'")
        }
        Some(_) => None,
    }
}
