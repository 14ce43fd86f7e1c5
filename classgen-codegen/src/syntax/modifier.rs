use crate::{Element, Render, Result, TokenKind};

/// Access modifier of a type or member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
    /// No keyword.
    PackagePrivate,
}

impl Visibility {
    pub fn keyword(self) -> Option<TokenKind> {
        match self {
            Self::Public => Some(TokenKind::PublicKeyword),
            Self::Protected => Some(TokenKind::ProtectedKeyword),
            Self::Private => Some(TokenKind::PrivateKeyword),
            Self::PackagePrivate => None,
        }
    }
}

impl Element for Visibility {
    fn render(&self, sink: &mut dyn Render) -> Result<()> {
        sink.append_kind(TokenKind::ModifierBegin)?;
        if let Some(keyword) = self.keyword() {
            sink.append_kind(keyword)?;
        }
        sink.append_kind(TokenKind::ModifierEnd)
    }
}
