//! Render sinks and the stages of the rendering pipeline.
//!
//! A syntax tree renders itself into a [`Render`] sink by appending token
//! kinds, raw text, type references and literal values. Stages compose by
//! wrapping one another:
//!
//! - [`TextRender`] writes everything to a [`std::fmt::Write`] target.
//! - [`BufferRender`] records fragments and collects imports, then replays
//!   the recording into another sink.
//! - [`FormatRender`] inserts spacing, line breaks and indentation around
//!   token kinds before forwarding to a downstream sink.

mod buffer;
pub mod format;
mod text;

pub use buffer::{BufferRender, Fragment};
pub use format::FormatRender;
pub use text::TextRender;

use crate::{Result, TokenKind, TypeRef, Value, ValueFormats};

/// A destination for rendered code.
pub trait Render {
    /// Append raw text.
    fn append_text(&mut self, text: &str) -> Result<()>;

    /// Append a token kind: its literal text plus whatever the stage does
    /// with the position it marks.
    fn append_kind(&mut self, kind: TokenKind) -> Result<()>;

    /// Formatting table used by [`Render::append_value`].
    fn value_formats(&self) -> &ValueFormats;

    /// Append a type reference using the default name resolution.
    fn append_type(&mut self, ty: &TypeRef) -> Result<()> {
        self.append_text(&ty.default_name())
    }

    /// Append a literal value formatted through [`Render::value_formats`].
    fn append_value(&mut self, value: &Value) -> Result<()> {
        let text = self.value_formats().format(value);
        self.append_text(&text)
    }
}

/// A node that can render itself into a [`Render`] sink.
pub trait Element {
    fn render(&self, sink: &mut dyn Render) -> Result<()>;
}

impl Element for TokenKind {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        sink.append_kind(*self)
    }
}

impl<E: Element + ?Sized> Element for &E {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        (**self).render(sink)
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        (**self).render(sink)
    }
}

impl dyn Render + '_ {
    /// Append a whole element.
    pub fn append_element(&mut self, element: &dyn Element) -> Result<()> {
        element.render(self)
    }

    /// Append every element, rendering `separator` between neighbours.
    pub fn append_all<'e, E, I>(&mut self, elements: I, separator: &dyn Element) -> Result<()>
    where
        E: Element + 'e,
        I: IntoIterator<Item = &'e E>,
    {
        for (i, element) in elements.into_iter().enumerate() {
            if i > 0 {
                separator.render(self)?;
            }
            element.render(self)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Word(&'static str);

    impl Element for Word {
        fn render(&self, sink: &mut dyn Render) -> Result<()> {
            sink.append_text(self.0)
        }
    }

    fn render_with(f: impl FnOnce(&mut dyn Render) -> Result<()>) -> String {
        let mut out = String::new();
        let mut sink = TextRender::new(&mut out);
        f(&mut sink).unwrap();
        out
    }

    #[test]
    fn test_append_all_separates_neighbours() {
        let words = [Word("a"), Word("b"), Word("c")];
        let out = render_with(|sink| sink.append_all(&words, &TokenKind::MethodParamsSeparator));
        assert_eq!(out, "a,b,c");
    }

    #[test]
    fn test_append_all_empty() {
        let words: [Word; 0] = [];
        let out = render_with(|sink| sink.append_all(&words, &TokenKind::MethodParamsSeparator));
        assert_eq!(out, "");
    }

    #[test]
    fn test_append_element() {
        let out = render_with(|sink| sink.append_element(&Word("x")));
        assert_eq!(out, "x");
    }

    #[test]
    fn test_default_value_formatting() {
        let out = render_with(|sink| sink.append_value(&Value::text("hi")));
        assert_eq!(out, "\"hi\"");
    }
}
