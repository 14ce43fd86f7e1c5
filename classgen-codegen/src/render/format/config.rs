//! Formatter configuration: rule sets, indent blocks and user options.

use serde::Deserialize;

use super::rule::{Condition, ConditionGroup, Rule};
use crate::TokenKind;

/// Indentation unit for one indent block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// One tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the generated sources' default.
    pub const STANDARD: Self = Self::Spaces(2);

    /// Indent from a configured width; `0` selects a tab.
    pub fn from_width(width: u8) -> Self {
        match width {
            0 => Self::Tab,
            n => Self::Spaces(n),
        }
    }

    /// Text repeated for one level.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Spaces(_) => " ",
            Self::Tab => "\t",
        }
    }

    /// Number of times [`Indent::unit`] is repeated.
    pub fn repeat(self) -> usize {
        match self {
            Self::Spaces(n) => usize::from(n),
            Self::Tab => 1,
        }
    }

    pub fn text(self) -> String {
        self.unit().repeat(self.repeat())
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A begin/end kind pair that indents everything between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentBlock {
    pub begin: TokenKind,
    pub end: TokenKind,
    pub indent: Indent,
}

impl IndentBlock {
    pub fn new(begin: TokenKind, end: TokenKind, indent: Indent) -> Self {
        Self { begin, end, indent }
    }
}

/// Rules and indent blocks driving a [`FormatRender`](super::FormatRender).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub rules: Vec<Rule>,
    pub blocks: Vec<IndentBlock>,
}

impl FormatConfig {
    pub fn new(rules: Vec<Rule>, blocks: Vec<IndentBlock>) -> Self {
        Self { rules, blocks }
    }

    /// No rules and no blocks: the formatter passes text through.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Default rule set with 2-space indents and 2 blank-line separators.
    pub fn standard() -> Self {
        Self::with(Indent::STANDARD, 2)
    }

    /// Default rule set with a custom indent and member separator height.
    pub fn with(indent: Indent, blank_lines: usize) -> Self {
        Self::new(standard_rules(blank_lines), standard_blocks(indent))
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn current(kinds: impl IntoIterator<Item = TokenKind>) -> ConditionGroup {
    ConditionGroup::current(Condition::one_of(kinds))
}

fn standard_rules(blank_lines: usize) -> Vec<Rule> {
    use TokenKind::*;

    vec![
        // spaces
        Rule::space_before(current([
            ClassBodyBegin,
            ImplementsKeyword,
            ImplBlockBegin,
            AssignOperator,
        ])),
        Rule::space_after(ConditionGroup::current(Condition::Keyword)),
        Rule::space_after(current([
            ImplementsSeparator,
            GenericArgsSeparator,
            ConstructorParamsSeparator,
            MethodParamsSeparator,
            InvokeArgsSeparator,
            NewArgsSeparator,
            MethodReturnType,
            VariableType,
            AssignOperator,
        ])),
        Rule::space_after(current([ParameterType]).with_next(Condition::one_of([ParameterName]))),
        // member blocks
        Rule::lines_before(
            blank_lines,
            current([
                ConstructorsBlockBegin,
                ConstructorsSeparator,
                MethodsBlockBegin,
                MethodsSeparator,
            ]),
        ),
        Rule::lines_before(
            blank_lines,
            current([ConstructorsBlockEnd, MethodsBlockEnd])
                .with_next(Condition::one_of([ClassBodyEnd])),
        ),
        // package and imports
        Rule::lines_after(2, current([PackageEnd])),
        Rule::lines_after(1, current([ImportEnd])),
        Rule::lines_after(
            1,
            current([ImportBlockEnd]).with_previous(Condition::one_of([ImportEnd])),
        ),
        // bodies
        Rule::lines_after(
            1,
            current([ImplBlockBegin]).with_next(Condition::one_of([StatementBegin])),
        ),
        Rule::lines_before(
            1,
            current([ImplBlockEnd]).with_previous(Condition::one_of([StatementEnd])),
        ),
        Rule::lines_before(
            1,
            current([StatementBegin]).with_previous(Condition::one_of([StatementEnd])),
        ),
    ]
}

fn standard_blocks(indent: Indent) -> Vec<IndentBlock> {
    use TokenKind::*;

    vec![
        IndentBlock::new(ConstructorsBlockBegin, ConstructorsBlockEnd, indent),
        IndentBlock::new(MethodsBlockBegin, MethodsBlockEnd, indent),
        IndentBlock::new(ImplBlockBegin, ImplBlockEnd, indent),
    ]
}

/// User-facing formatting options, read from the `[format]` manifest
/// section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Spaces per indent level; `0` selects a tab.
    pub indent: u8,
    /// Line separators around member blocks.
    pub blank_lines: usize,
    /// `false` writes the raw token stream with no formatting.
    pub enabled: bool,
}

impl FormatOptions {
    pub fn config(&self) -> FormatConfig {
        FormatConfig::with(Indent::from_width(self.indent), self.blank_lines)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            blank_lines: 2,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_text() {
        assert_eq!(Indent::Spaces(2).text(), "  ");
        assert_eq!(Indent::Spaces(4).text(), "    ");
        assert_eq!(Indent::Tab.text(), "\t");
        assert_eq!(Indent::from_width(0), Indent::Tab);
        assert_eq!(Indent::default(), Indent::Spaces(2));
    }

    #[test]
    fn test_default_options_match_standard() {
        assert_eq!(FormatOptions::default().config(), FormatConfig::standard());
    }

    #[test]
    fn test_standard_blocks() {
        let config = FormatConfig::standard();
        assert_eq!(config.blocks.len(), 3);
        assert!(
            config
                .blocks
                .iter()
                .any(|b| b.begin == TokenKind::ImplBlockBegin && b.end == TokenKind::ImplBlockEnd)
        );
    }

    #[test]
    fn test_options_from_toml() {
        let options: FormatOptions = toml::from_str("indent = 4\nenabled = false").unwrap();
        assert_eq!(options.indent, 4);
        assert_eq!(options.blank_lines, 2);
        assert!(!options.enabled);

        let unknown: Result<FormatOptions, _> = toml::from_str("tabs = true");
        assert!(unknown.is_err());
    }
}
