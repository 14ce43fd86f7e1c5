//! The formatting stage.
//!
//! [`FormatRender`] watches the stream of token kinds through a three-slot
//! window (previous, current, next). Each new kind shifts the window by
//! one and settles the kind now in `current`:
//!
//! 1. The indent stack is updated: a block's begin kind pushes a frame,
//!    its end kind pops the innermost frame for that block.
//! 2. Matching "before" rules insert their spacing.
//! 3. The kind's literal text is written, followed by any text appended
//!    while the kind was pending.
//! 4. Matching "after" rules insert their spacing.
//!
//! Whenever written text contains a line separator, the indent of every
//! open frame follows it. The last kind settles in [`FormatRender::finish`].

mod config;
mod rule;

pub use config::{FormatConfig, FormatOptions, Indent, IndentBlock};
pub use rule::{Condition, ConditionGroup, LINE_SEPARATOR, Rule, Spacing, Trigger};

use super::Render;
use crate::{Result, TokenKind, ValueFormats};

/// Formats a token stream before forwarding it to `inner`.
///
/// # Example
///
/// ```
/// use classgen_codegen::{FormatConfig, FormatRender, Render, TextRender, TokenKind};
///
/// let mut out = String::new();
/// let mut format = FormatRender::new(TextRender::new(&mut out), FormatConfig::standard());
/// format.append_kind(TokenKind::PublicKeyword).unwrap();
/// format.append_kind(TokenKind::ClassKeyword).unwrap();
/// format.append_kind(TokenKind::ClassName).unwrap();
/// format.append_text("Widget").unwrap();
/// format.append_kind(TokenKind::ClassBodyBegin).unwrap();
/// format.append_kind(TokenKind::ClassBodyEnd).unwrap();
/// format.finish().unwrap();
///
/// assert_eq!(out, "public class Widget {}");
/// ```
#[derive(Debug)]
pub struct FormatRender<R> {
    inner: R,
    config: FormatConfig,
    previous: Option<TokenKind>,
    current: Option<TokenKind>,
    next: Option<TokenKind>,
    /// Text appended since `next` arrived.
    pending: String,
    /// Indices into `config.blocks` of the open frames, outermost first.
    frames: Vec<usize>,
}

impl<R: Render> FormatRender<R> {
    pub fn new(inner: R, config: FormatConfig) -> Self {
        Self {
            inner,
            config,
            previous: None,
            current: None,
            next: None,
            pending: String::new(),
            frames: Vec::new(),
        }
    }

    /// Settle the last pending kind and its text.
    pub fn finish(&mut self) -> Result<()> {
        self.shift(None)
    }

    /// Settle the last pending kind and return the downstream sink.
    pub fn into_inner(mut self) -> Result<R> {
        self.finish()?;
        Ok(self.inner)
    }

    /// Number of open indent frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn shift(&mut self, kind: Option<TokenKind>) -> Result<()> {
        let trailing = std::mem::take(&mut self.pending);
        self.previous = self.current;
        self.current = self.next;
        self.next = kind;

        match self.current {
            Some(current) => self.settle(current, &trailing),
            None => self.emit(&trailing),
        }
    }

    fn settle(&mut self, current: TokenKind, trailing: &str) -> Result<()> {
        self.update_frames(current);
        self.apply_rules(Trigger::Before, current)?;
        self.emit(current.text())?;
        self.emit(trailing)?;
        self.apply_rules(Trigger::After, current)
    }

    fn update_frames(&mut self, current: TokenKind) {
        for (index, block) in self.config.blocks.iter().enumerate() {
            if block.begin == current {
                tracing::trace!(kind = ?current, depth = self.frames.len() + 1, "indent push");
                self.frames.push(index);
            } else if block.end == current {
                if let Some(pos) = self.frames.iter().rposition(|&open| open == index) {
                    self.frames.remove(pos);
                    tracing::trace!(kind = ?current, depth = self.frames.len(), "indent pop");
                }
            }
        }
    }

    fn apply_rules(&mut self, trigger: Trigger, current: TokenKind) -> Result<()> {
        let inserts: Vec<String> = self
            .config
            .rules
            .iter()
            .filter_map(|rule| rule.apply(trigger, self.previous, Some(current), self.next))
            .collect();
        for text in inserts {
            self.emit(&text)?;
        }
        Ok(())
    }

    /// Write `text` downstream, indenting after line separators.
    fn emit(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.inner.append_text(text)?;
        if text.contains(LINE_SEPARATOR) {
            for &index in &self.frames {
                let indent = self.config.blocks[index].indent.text();
                self.inner.append_text(&indent)?;
            }
        }
        Ok(())
    }
}

impl<R: Render> Render for FormatRender<R> {
    fn append_text(&mut self, text: &str) -> Result<()> {
        if self.next.is_some() {
            self.pending.push_str(text);
            Ok(())
        } else {
            self.emit(text)
        }
    }

    fn append_kind(&mut self, kind: TokenKind) -> Result<()> {
        self.shift(Some(kind))
    }

    fn value_formats(&self) -> &ValueFormats {
        self.inner.value_formats()
    }
}
