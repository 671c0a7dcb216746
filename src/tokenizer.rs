use crate::error::{Error, ErrorKind};
use crate::span::{Position, Span};
use crate::token::{Punctuation, Token, TokenKind};

/// Tokenize a whole GCL source string.
///
/// The terminating `Eof` token is not included.
///
/// # Errors
///
/// Returns the first lexical error: unknown characters, invalid digits,
/// invalid escapes, or unterminated strings.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    Tokenizer::new(input).collect()
}

/// Pull-model tokenizer over a borrowed source string.
///
/// Each call to [`Tokenizer::advance`] overwrites the current token in
/// place. The source is never copied, so it must outlive the tokenizer.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    token: Token,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 0,
            token: Token::default(),
            finished: false,
        }
    }

    /// Point the tokenizer at a new source and rewind the cursor.
    pub fn set_text(&mut self, input: &'a str) {
        self.input = input;
        self.reset();
    }

    /// Rewind to the start of the current source.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 1;
        self.column = 0;
        self.token.reset();
        self.finished = false;
    }

    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    pub const fn token_mut(&mut self) -> &mut Token {
        &mut self.token
    }

    /// Move the current token out, leaving an empty `Eof` token behind.
    pub fn take_token(&mut self) -> Token {
        std::mem::take(&mut self.token)
    }

    /// Current cursor position.
    #[must_use]
    pub const fn cursor(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Skip whitespace and comments, then lex the next token into
    /// [`Tokenizer::token`].
    ///
    /// Returns `false` once the end of input is reached.
    ///
    /// # Errors
    ///
    /// Returns a lexical error located at the offending token. The current
    /// token is left as `Eof`.
    pub fn advance(&mut self) -> Result<bool, Error> {
        self.skip_trivia();

        let begin = self.cursor();
        self.token.reset();

        let kind = self.read_token(begin)?;
        self.token = Token::new(kind, Span::new(begin, self.cursor()));

        tracing::trace!(
            kind = self.token.kind.name(),
            line = begin.line,
            column = begin.column,
            "token"
        );

        Ok(!self.token.is_eof())
    }

    fn read_token(&mut self, begin: Position) -> Result<TokenKind, Error> {
        if let Some(kind) = self.read_identifier() {
            return Ok(kind);
        }
        if let Some(kind) = self.read_number(begin)? {
            return Ok(kind);
        }
        if let Some(kind) = self.read_punctuation() {
            return Ok(kind);
        }
        if let Some(kind) = self.read_string(begin)? {
            return Ok(kind);
        }
        self.read_misc(begin)
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    /// The full character under the cursor, for diagnostics.
    fn current_char(&self) -> Option<char> {
        self.input.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    fn bump(&mut self) {
        let Some(ch) = self.peek() else {
            return;
        };
        self.pos += 1;
        if ch == b'\n' {
            self.line += 1;
            self.column = 0;
        } else if ch & 0xC0 != 0x80 {
            // UTF-8 continuation bytes share the column of their lead byte.
            self.column += 1;
        }
    }

    fn error(&self, kind: ErrorKind, begin: Position, message: String) -> Error {
        Error::new(kind, Span::new(begin, self.cursor()), message)
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\n') => self.bump(),
                Some(b'#') => {
                    while self.peek().is_some_and(|ch| ch != b'\n') {
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    fn read_identifier(&mut self) -> Option<TokenKind> {
        if !self.peek().is_some_and(|ch| ch.is_ascii_alphabetic()) {
            return None;
        }

        let start = self.pos;
        self.bump();
        while self
            .peek()
            .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == b'_')
        {
            self.bump();
        }

        Some(TokenKind::Identifier(self.input[start..self.pos].to_owned()))
    }

    fn read_number(&mut self, begin: Position) -> Result<Option<TokenKind>, Error> {
        let Some(first) = self.peek() else {
            return Ok(None);
        };
        if !first.is_ascii_digit() && first != b'-' && first != b'+' {
            return Ok(None);
        }

        let negative = first == b'-';
        if !first.is_ascii_digit() {
            self.bump();
            if !self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(self.error(
                    ErrorKind::ExpectedNumber,
                    begin,
                    format!("expected a number after `{}`", char::from(first)),
                ));
            }
        }

        let mut radix = 10;
        if self.peek() == Some(b'0') {
            match self.peek_at(1) {
                Some(b'b' | b'B') => radix = 2,
                Some(b'x' | b'X') => radix = 16,
                Some(ch) if ch.is_ascii_digit() => {}
                // A lone `0` ends the numeral; whatever follows is the next token.
                _ => {
                    self.bump();
                    return Ok(Some(TokenKind::Int(0)));
                }
            }

            if radix != 10 {
                self.bump();
                self.bump();
                if digit_value(self.peek(), radix).is_none() {
                    let found = self
                        .current_char()
                        .map_or_else(|| "eof".to_owned(), String::from);
                    return Err(self.error(
                        ErrorKind::InvalidDigit,
                        begin,
                        format!("invalid digit `{found}` for base {radix}"),
                    ));
                }
            }
        }

        let mut value: u64 = 0;
        while let Some(digit) = digit_value(self.peek(), radix) {
            value = value
                .wrapping_mul(u64::from(radix))
                .wrapping_add(u64::from(digit));
            self.bump();
        }

        if let Some(invalid) = self.peek().filter(u8::is_ascii_alphanumeric) {
            // Swallow the rest of the word so the error covers all of it.
            while self.peek().is_some_and(|ch| ch.is_ascii_alphanumeric()) {
                self.bump();
            }
            return Err(self.error(
                ErrorKind::InvalidDigit,
                begin,
                format!("invalid digit `{}` for base {radix}", char::from(invalid)),
            ));
        }

        if negative {
            value = value.wrapping_neg();
        }

        // Two's complement reinterpretation, not a range check.
        #[allow(clippy::cast_possible_wrap)]
        let value = value as i64;

        Ok(Some(TokenKind::Int(value)))
    }

    fn read_punctuation(&mut self) -> Option<TokenKind> {
        let punctuation = Punctuation::from_char(self.peek()?)?;
        self.bump();
        Some(TokenKind::Punctuation(punctuation))
    }

    fn read_string(&mut self, begin: Position) -> Result<Option<TokenKind>, Error> {
        if self.peek() != Some(b'"') {
            return Ok(None);
        }
        self.bump(); // opening quote

        let mut text = String::new();
        let mut run = self.pos;

        loop {
            match self.peek() {
                None | Some(b'\n') => {
                    return Err(self.error(
                        ErrorKind::ExpectedStringEnd,
                        begin,
                        "expected string end".to_owned(),
                    ));
                }
                Some(b'"') => {
                    text.push_str(&self.input[run..self.pos]);
                    self.bump();
                    break;
                }
                Some(b'\\') => {
                    text.push_str(&self.input[run..self.pos]);
                    self.bump();
                    let escaped = match self.peek() {
                        Some(b'n') => '\n',
                        Some(b't') => '\t',
                        Some(b'\\') => '\\',
                        Some(b'"') => '"',
                        None | Some(b'\n') => {
                            return Err(self.error(
                                ErrorKind::ExpectedStringEnd,
                                begin,
                                "expected string end".to_owned(),
                            ));
                        }
                        Some(_) => {
                            let found = self.current_char().unwrap_or_default();
                            return Err(self.error(
                                ErrorKind::InvalidEscape,
                                begin,
                                format!("invalid escape sequence `\\{found}`"),
                            ));
                        }
                    };
                    text.push(escaped);
                    self.bump();
                    run = self.pos;
                }
                Some(_) => self.bump(),
            }
        }

        Ok(Some(TokenKind::String(text)))
    }

    fn read_misc(&mut self, begin: Position) -> Result<TokenKind, Error> {
        let Some(found) = self.current_char() else {
            return Ok(TokenKind::Eof);
        };

        for _ in 0..found.len_utf8() {
            self.bump();
        }

        Err(self.error(
            ErrorKind::UnknownChar,
            begin,
            format!("unknown character `{}`", found.escape_debug()),
        ))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.advance() {
            Ok(true) => Some(Ok(self.take_token())),
            Ok(false) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

fn digit_value(ch: Option<u8>, radix: u32) -> Option<u32> {
    char::from(ch?).to_digit(radix)
}
