use std::fmt;

use crate::span::Span;

/// Single-character punctuation recognised by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuation {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
}

impl Punctuation {
    #[must_use]
    pub const fn from_char(ch: u8) -> Option<Self> {
        match ch {
            b'{' => Some(Self::LeftBrace),
            b'}' => Some(Self::RightBrace),
            b'[' => Some(Self::LeftBracket),
            b']' => Some(Self::RightBracket),
            b',' => Some(Self::Comma),
            b':' => Some(Self::Colon),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::LeftBrace => '{',
            Self::RightBrace => '}',
            Self::LeftBracket => '[',
            Self::RightBracket => ']',
            Self::Comma => ',',
            Self::Colon => ':',
        }
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Token kinds produced by the tokenizer, with their payloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TokenKind {
    /// End of input. Also the state of a freshly reset token.
    #[default]
    Eof,
    /// Integer literal, already sign-applied.
    Int(i64),
    /// Floating point literal. Never produced by the tokenizer yet.
    Float(f64),
    /// Bare word (`[A-Za-z][A-Za-z0-9_]*`).
    Identifier(String),
    /// Double-quoted string with escapes resolved.
    String(String),
    /// One of `{ } [ ] , :`.
    Punctuation(Punctuation),
}

impl TokenKind {
    /// Short name of the kind, without its payload.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Eof => "eof",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Identifier(_) => "identifier",
            Self::String(_) => "string",
            Self::Punctuation(_) => "punctuation",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => write!(f, "eof"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::String(text) => write!(f, "{text:?}"),
            Self::Punctuation(p) => write!(f, "{p}"),
        }
    }
}

/// A single token with its kind and source range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    #[must_use]
    pub fn is_punctuation(&self, punctuation: Punctuation) -> bool {
        self.kind == TokenKind::Punctuation(punctuation)
    }

    /// Drop the payload and return to an empty `Eof` token.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn punctuation_round_trips_through_char() {
        for ch in "{}[],:".bytes() {
            let p = Punctuation::from_char(ch).expect("punctuation");
            assert_eq!(p.as_char(), char::from(ch));
        }
        assert_eq!(Punctuation::from_char(b'('), None);
    }

    #[test]
    fn display_shows_payload() {
        assert_eq!(TokenKind::Int(-3).to_string(), "-3");
        assert_eq!(TokenKind::Identifier("foo".into()).to_string(), "foo");
        assert_eq!(TokenKind::String("a\"b".into()).to_string(), r#""a\"b""#);
        assert_eq!(
            TokenKind::Punctuation(Punctuation::RightBrace).to_string(),
            "}"
        );
        assert_eq!(TokenKind::Eof.to_string(), "eof");
    }

    #[test]
    fn reset_releases_payload() {
        let mut token = Token::new(
            TokenKind::String("payload".into()),
            Span::new(Position::new(1, 0), Position::new(1, 9)),
        );
        token.reset();
        assert!(token.is_eof());
        assert_eq!(token.span, Span::default());
    }

    #[test]
    fn is_punctuation_matches_exact_char() {
        let token = Token::new(TokenKind::Punctuation(Punctuation::Comma), Span::default());
        assert!(token.is_punctuation(Punctuation::Comma));
        assert!(!token.is_punctuation(Punctuation::Colon));
    }
}
