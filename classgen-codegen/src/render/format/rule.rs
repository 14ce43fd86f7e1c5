//! Formatting rules and the conditions they match on.

use crate::TokenKind;

/// Line separator written by line rules.
pub const LINE_SEPARATOR: &str = "\n";

/// A test against one slot of the (previous, current, next) window.
///
/// An empty slot (start or end of the stream) only satisfies
/// [`Condition::Any`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Always true.
    Any,
    /// True if the slot holds one of these kinds.
    OneOf(Vec<TokenKind>),
    /// True if the slot holds a keyword kind.
    Keyword,
}

impl Condition {
    pub fn one_of(kinds: impl IntoIterator<Item = TokenKind>) -> Self {
        Self::OneOf(kinds.into_iter().collect())
    }

    pub fn matches(&self, kind: Option<TokenKind>) -> bool {
        match (self, kind) {
            (Self::Any, _) => true,
            (Self::OneOf(kinds), Some(kind)) => kinds.contains(&kind),
            (Self::Keyword, Some(kind)) => kind.is_keyword(),
            (_, None) => false,
        }
    }
}

/// Conditions on all three window slots, combined with logical AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionGroup {
    pub previous: Condition,
    pub current: Condition,
    pub next: Condition,
}

impl ConditionGroup {
    pub fn new(previous: Condition, current: Condition, next: Condition) -> Self {
        Self {
            previous,
            current,
            next,
        }
    }

    /// Match on the current slot only.
    pub fn current(condition: Condition) -> Self {
        Self::new(Condition::Any, condition, Condition::Any)
    }

    pub fn with_previous(mut self, condition: Condition) -> Self {
        self.previous = condition;
        self
    }

    pub fn with_next(mut self, condition: Condition) -> Self {
        self.next = condition;
        self
    }

    pub fn matches(
        &self,
        previous: Option<TokenKind>,
        current: Option<TokenKind>,
        next: Option<TokenKind>,
    ) -> bool {
        self.previous.matches(previous) && self.current.matches(current) && self.next.matches(next)
    }
}

/// Whether a rule fires before or after the current kind's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Before,
    After,
}

/// Text a rule inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    Space,
    Lines(usize),
}

impl Spacing {
    pub fn text(self) -> String {
        match self {
            Self::Space => " ".to_string(),
            Self::Lines(count) => LINE_SEPARATOR.repeat(count),
        }
    }
}

/// A formatting rule: insert `spacing` before or after the current kind
/// whenever `group` matches the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub trigger: Trigger,
    pub spacing: Spacing,
    pub group: ConditionGroup,
}

impl Rule {
    pub fn new(trigger: Trigger, spacing: Spacing, group: ConditionGroup) -> Self {
        Self {
            trigger,
            spacing,
            group,
        }
    }

    pub fn space_before(group: ConditionGroup) -> Self {
        Self::new(Trigger::Before, Spacing::Space, group)
    }

    pub fn space_after(group: ConditionGroup) -> Self {
        Self::new(Trigger::After, Spacing::Space, group)
    }

    pub fn lines_before(count: usize, group: ConditionGroup) -> Self {
        Self::new(Trigger::Before, Spacing::Lines(count), group)
    }

    pub fn lines_after(count: usize, group: ConditionGroup) -> Self {
        Self::new(Trigger::After, Spacing::Lines(count), group)
    }

    /// Text to insert if this rule fires at `trigger` for the window.
    pub fn apply(
        &self,
        trigger: Trigger,
        previous: Option<TokenKind>,
        current: Option<TokenKind>,
        next: Option<TokenKind>,
    ) -> Option<String> {
        (self.trigger == trigger && self.group.matches(previous, current, next))
            .then(|| self.spacing.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_matches_empty_slot() {
        assert!(Condition::Any.matches(None));
        assert!(Condition::Any.matches(Some(TokenKind::ClassName)));
    }

    #[test]
    fn test_one_of() {
        let condition = Condition::one_of([TokenKind::ImportEnd, TokenKind::PackageEnd]);
        assert!(condition.matches(Some(TokenKind::PackageEnd)));
        assert!(!condition.matches(Some(TokenKind::StatementEnd)));
        assert!(!condition.matches(None));
    }

    #[test]
    fn test_keyword() {
        assert!(Condition::Keyword.matches(Some(TokenKind::ThrowKeyword)));
        assert!(!Condition::Keyword.matches(Some(TokenKind::ClassName)));
        assert!(!Condition::Keyword.matches(None));
    }

    #[test]
    fn test_group_is_conjunction() {
        let group = ConditionGroup::current(Condition::one_of([TokenKind::ParameterType]))
            .with_next(Condition::one_of([TokenKind::ParameterName]));
        assert!(group.matches(None, Some(TokenKind::ParameterType), Some(TokenKind::ParameterName)));
        assert!(!group.matches(None, Some(TokenKind::ParameterType), Some(TokenKind::ParameterEnd)));
        assert!(!group.matches(None, Some(TokenKind::ParameterName), Some(TokenKind::ParameterName)));
    }

    #[test]
    fn test_rule_fires_only_on_its_trigger() {
        let rule = Rule::lines_after(2, ConditionGroup::current(Condition::one_of([TokenKind::PackageEnd])));
        let window = (None, Some(TokenKind::PackageEnd), None);
        assert_eq!(rule.apply(Trigger::After, window.0, window.1, window.2), Some("\n\n".to_string()));
        assert_eq!(rule.apply(Trigger::Before, window.0, window.1, window.2), None);
    }
}
