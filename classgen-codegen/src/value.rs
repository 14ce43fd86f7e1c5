//! Typed literal values and the table that formats them.

use std::{collections::HashMap, fmt};

/// A literal value appearing in generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Char(char),
    Int(i32),
    Long(i64),
    Double(f64),
    Bool(bool),
    Null,
}

/// Discriminant of a [`Value`], used as the key of [`ValueFormats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Char,
    Int,
    Long,
    Double,
    Bool,
    Null,
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Char(_) => ValueKind::Char,
            Self::Int(_) => ValueKind::Int,
            Self::Long(_) => ValueKind::Long,
            Self::Double(_) => ValueKind::Double,
            Self::Bool(_) => ValueKind::Bool,
            Self::Null => ValueKind::Null,
        }
    }
}

/// Plain conversion, used for kinds without a registered formatter.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Char(c) => write!(f, "{c}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Long(l) => write!(f, "{l}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Formatting function for one value kind.
pub type ValueFormatter = fn(&Value) -> String;

/// Table of value kind -> formatting function.
///
/// # Example
///
/// ```
/// use classgen_codegen::{Value, ValueFormats};
///
/// let formats = ValueFormats::standard();
/// assert_eq!(formats.format(&Value::text("hi")), "\"hi\"");
/// assert_eq!(formats.format(&Value::Long(7)), "7L");
/// assert_eq!(formats.format(&Value::Int(7)), "7");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValueFormats {
    formatters: HashMap<ValueKind, ValueFormatter>,
}

impl ValueFormats {
    /// An empty table: every value uses the plain conversion.
    pub fn new() -> Self {
        Self::default()
    }

    /// The formatters for the target language's literal syntax.
    pub fn standard() -> Self {
        Self::new()
            .register(ValueKind::Text, quote_text)
            .register(ValueKind::Char, quote_char)
            .register(ValueKind::Long, long_literal)
            .register(ValueKind::Double, double_literal)
    }

    /// Register (or replace) the formatter for `kind`.
    pub fn register(mut self, kind: ValueKind, formatter: ValueFormatter) -> Self {
        self.formatters.insert(kind, formatter);
        self
    }

    pub fn format(&self, value: &Value) -> String {
        match self.formatters.get(&value.kind()) {
            Some(formatter) => formatter(value),
            None => value.to_string(),
        }
    }
}

fn escape(s: &str, quote: char) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c == quote => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }
    escaped
}

fn quote_text(value: &Value) -> String {
    format!("\"{}\"", escape(&value.to_string(), '"'))
}

fn quote_char(value: &Value) -> String {
    format!("'{}'", escape(&value.to_string(), '\''))
}

fn long_literal(value: &Value) -> String {
    format!("{value}L")
}

fn double_literal(value: &Value) -> String {
    match value {
        Value::Double(d) if d.is_nan() => "Double.NaN".to_string(),
        Value::Double(d) if d.is_infinite() && *d > 0.0 => "Double.POSITIVE_INFINITY".to_string(),
        Value::Double(d) if d.is_infinite() => "Double.NEGATIVE_INFINITY".to_string(),
        Value::Double(d) if d.fract() == 0.0 => format!("{d:.1}"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_quoted_and_escaped() {
        let formats = ValueFormats::standard();
        assert_eq!(formats.format(&Value::text("a\"b\n")), "\"a\\\"b\\n\"");
        assert_eq!(formats.format(&Value::Char('\'')), "'\\''");
    }

    #[test]
    fn test_unregistered_kinds_use_plain_conversion() {
        let formats = ValueFormats::new();
        assert_eq!(formats.format(&Value::text("raw")), "raw");
        assert_eq!(formats.format(&Value::Bool(true)), "true");
        assert_eq!(formats.format(&Value::Null), "null");
    }

    #[test]
    fn test_double_keeps_fraction() {
        let formats = ValueFormats::standard();
        assert_eq!(formats.format(&Value::Double(2.0)), "2.0");
        assert_eq!(formats.format(&Value::Double(0.25)), "0.25");
    }

    #[test]
    fn test_double_non_finite_constants() {
        let formats = ValueFormats::standard();
        assert_eq!(formats.format(&Value::Double(f64::NAN)), "Double.NaN");
        assert_eq!(formats.format(&Value::Double(f64::INFINITY)), "Double.POSITIVE_INFINITY");
        assert_eq!(formats.format(&Value::Double(f64::NEG_INFINITY)), "Double.NEGATIVE_INFINITY");
    }

    #[test]
    fn test_register_replaces() {
        let formats = ValueFormats::standard().register(ValueKind::Text, |v| format!("'{v}'"));
        assert_eq!(formats.format(&Value::text("x")), "'x'");
    }
}
