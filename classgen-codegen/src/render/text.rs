use std::fmt;

use super::Render;
use crate::{Result, TokenKind, ValueFormats};

/// The terminal stage: writes kinds and text straight to a
/// [`fmt::Write`] target, with no spacing of its own.
///
/// # Example
///
/// ```
/// use classgen_codegen::{Render, TextRender, TokenKind};
///
/// let mut out = String::new();
/// let mut sink = TextRender::new(&mut out);
/// sink.append_kind(TokenKind::PublicKeyword).unwrap();
/// sink.append_kind(TokenKind::ClassKeyword).unwrap();
/// assert_eq!(out, "publicclass");
/// ```
#[derive(Debug)]
pub struct TextRender<W> {
    out: W,
    formats: ValueFormats,
}

impl<W: fmt::Write> TextRender<W> {
    pub fn new(out: W) -> Self {
        Self::with_formats(out, ValueFormats::standard())
    }

    pub fn with_formats(out: W, formats: ValueFormats) -> Self {
        Self { out, formats }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: fmt::Write> Render for TextRender<W> {
    fn append_text(&mut self, text: &str) -> Result<()> {
        self.out.write_str(text)?;
        Ok(())
    }

    fn append_kind(&mut self, kind: TokenKind) -> Result<()> {
        self.append_text(kind.text())
    }

    fn value_formats(&self) -> &ValueFormats {
        &self.formats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TypeRef, Value, ValueKind};
    use classgen_core::TypeName;

    #[test]
    fn test_markers_write_nothing() {
        let mut out = String::new();
        let mut sink = TextRender::new(&mut out);
        sink.append_kind(TokenKind::ClassName).unwrap();
        sink.append_text("Widget").unwrap();
        sink.append_kind(TokenKind::ClassBodyBegin).unwrap();
        sink.append_kind(TokenKind::ClassBodyEnd).unwrap();
        assert_eq!(out, "Widget{}");
    }

    #[test]
    fn test_types_use_default_names() {
        let mut out = String::new();
        let mut sink = TextRender::new(&mut out);
        sink.append_type(&TypeRef::explicit(TypeName::core("String"))).unwrap();
        sink.append_text(" ").unwrap();
        sink.append_type(&TypeRef::explicit(TypeName::new("java.util", "List")))
            .unwrap();
        assert_eq!(out, "String java.util.List");
    }

    #[test]
    fn test_custom_formats() {
        let formats = ValueFormats::new().register(ValueKind::Int, |v| format!("({v})"));
        let mut sink = TextRender::with_formats(String::new(), formats);
        sink.append_value(&Value::Int(3)).unwrap();
        sink.append_value(&Value::text("x")).unwrap();
        assert_eq!(sink.into_inner(), "(3)x");
    }
}
