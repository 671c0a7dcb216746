use std::fmt;

use crate::span::Span;

/// Classifies a tokenizer or parser error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Reserved: an identifier was required.
    ExpectedIdentifier,
    /// A sign was not followed by any digit.
    ExpectedNumber,
    /// A specific punctuation character was required.
    ExpectedPunctuation,
    /// A string ran into a newline or the end of input.
    ExpectedStringEnd,
    /// A token that cannot start a value was found where one was required.
    ExpectedValue,
    /// A dict key appeared twice at the same level.
    KeyAlreadyDefined,
    /// A numeral contains a character that is not a digit of its base.
    InvalidDigit,
    /// A backslash inside a string is followed by an unsupported character.
    InvalidEscape,
    /// A character that cannot start any token.
    UnknownChar,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ExpectedIdentifier => "expected identifier",
            Self::ExpectedNumber => "expected number",
            Self::ExpectedPunctuation => "expected punctuation",
            Self::ExpectedStringEnd => "expected string end",
            Self::ExpectedValue => "expected value",
            Self::KeyAlreadyDefined => "key already defined",
            Self::InvalidDigit => "invalid digit",
            Self::InvalidEscape => "invalid escape",
            Self::UnknownChar => "unknown character",
        };
        f.write_str(name)
    }
}

/// Error produced while tokenizing or parsing a document.
///
/// The message names the offending token or character; the span locates
/// it in the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {}, column {}", span.begin_line, span.begin_column)]
pub struct Error {
    pub kind: ErrorKind,
    pub span: Span,
    pub message: String,
}

impl Error {
    #[must_use]
    pub fn new(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }
}
