use std::collections::btree_map::Entry;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};
use crate::span::Span;
use crate::token::{Punctuation, TokenKind};
use crate::tokenizer::Tokenizer;
use crate::value::{Array, Dict, Value};

/// Containers nested deeper than this are rejected by [`parse`].
pub const MAX_DEPTH: usize = 128;

/// Parse a GCL document into a [`Value`].
///
/// Only the first value is read. Tokens after it are not checked, but the
/// one right after the value is still lexed and must be valid.
///
/// # Errors
///
/// Returns the first lexical or syntax error, located at the offending
/// token. Arrays and dicts nested more than [`MAX_DEPTH`] levels deep fail
/// with [`ErrorKind::ExpectedValue`].
pub fn parse(input: &str) -> Result<Value, Error> {
    tracing::debug!(len = input.len(), "parsing GCL document");

    let result = Parser::new(input).parse();
    match &result {
        Ok(value) => tracing::debug!(kind = %value.kind(), "parsed GCL document"),
        Err(err) => tracing::debug!(
            kind = %err.kind,
            line = err.span.begin_line,
            column = err.span.begin_column,
            "failed to parse GCL document"
        ),
    }
    result
}

/// Parse a GCL document into an existing [`Value`].
///
/// On failure `output` is left `Undefined`.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_into(output: &mut Value, input: &str) -> Result<(), Error> {
    output.clear();
    *output = parse(input)?;
    Ok(())
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse(input)
    }
}

struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
            depth: 0,
        }
    }

    fn parse(mut self) -> Result<Value, Error> {
        self.bump()?;
        match self.parse_value()? {
            Some(value) => Ok(value),
            None => Err(self.expected_value()),
        }
    }

    /// Parse one value starting at the current token.
    ///
    /// Returns `None`, consuming nothing, when the current token cannot
    /// start a value, so that callers can report it in their own context.
    fn parse_value(&mut self) -> Result<Option<Value>, Error> {
        if self.at(Punctuation::LeftBrace) {
            self.enter()?;
            let dict = self.parse_dict()?;
            self.depth -= 1;
            return Ok(Some(Value::Dict(dict)));
        }
        if self.at(Punctuation::LeftBracket) {
            self.enter()?;
            let array = self.parse_array()?;
            self.depth -= 1;
            return Ok(Some(Value::Array(array)));
        }

        let value = match &mut self.tokenizer.token_mut().kind {
            TokenKind::String(text) => Value::String(std::mem::take(text)),
            TokenKind::Int(n) => Value::Int(*n),
            TokenKind::Float(x) => Value::Float(*x),
            TokenKind::Identifier(name) => match name.as_str() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                "null" => Value::Null,
                _ => return Ok(None),
            },
            TokenKind::Eof | TokenKind::Punctuation(_) => return Ok(None),
        };

        self.bump()?;
        Ok(Some(value))
    }

    fn parse_array(&mut self) -> Result<Array, Error> {
        self.bump()?; // [

        let mut array = Array::new();

        if !self.at(Punctuation::RightBracket) {
            loop {
                let Some(value) = self.parse_value()? else {
                    return Err(self.expected_value());
                };
                array.push(value);

                if !self.separator(Punctuation::RightBracket)? {
                    break;
                }
            }
        }

        self.expect(Punctuation::RightBracket)?;
        Ok(array)
    }

    fn parse_dict(&mut self) -> Result<Dict, Error> {
        self.bump()?; // {

        let mut dict = Dict::new();

        loop {
            let key_span = self.tokenizer.token().span;
            let key = match &mut self.tokenizer.token_mut().kind {
                TokenKind::Identifier(name) => std::mem::take(name),
                _ => break,
            };
            self.bump()?;

            self.expect(Punctuation::Colon)?;

            let Some(value) = self.parse_value()? else {
                return Err(self.expected_value());
            };

            match dict.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(Error::new(
                        ErrorKind::KeyAlreadyDefined,
                        key_span,
                        format!("key `{}` already defined", entry.key()),
                    ));
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }

            if !self.separator(Punctuation::RightBrace)? {
                break;
            }
        }

        self.expect(Punctuation::RightBrace)?;
        Ok(dict)
    }

    /// Count one more level of nesting at the current opener.
    fn enter(&mut self) -> Result<(), Error> {
        if self.depth == MAX_DEPTH {
            return Err(Error::new(
                ErrorKind::ExpectedValue,
                self.span(),
                format!("nesting deeper than {MAX_DEPTH} levels"),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn bump(&mut self) -> Result<(), Error> {
        self.tokenizer.advance().map(drop)
    }

    fn at(&self, punctuation: Punctuation) -> bool {
        self.tokenizer.token().is_punctuation(punctuation)
    }

    fn span(&self) -> Span {
        self.tokenizer.token().span
    }

    /// Consume the given punctuation or fail naming the token found instead.
    fn expect(&mut self, punctuation: Punctuation) -> Result<(), Error> {
        if self.at(punctuation) {
            return self.bump();
        }

        Err(Error::new(
            ErrorKind::ExpectedPunctuation,
            self.span(),
            format!(
                "expected `{punctuation}` but found `{}`",
                self.tokenizer.token()
            ),
        ))
    }

    /// After an element: consume a `,` and return `true`, or stop in front
    /// of `closer` and return `false`.
    fn separator(&mut self, closer: Punctuation) -> Result<bool, Error> {
        if self.at(Punctuation::Comma) {
            self.bump()?;
            return Ok(true);
        }
        if self.at(closer) {
            return Ok(false);
        }

        Err(Error::new(
            ErrorKind::ExpectedPunctuation,
            self.span(),
            format!(
                "expected `,` or `{closer}` but found `{}`",
                self.tokenizer.token()
            ),
        ))
    }

    fn expected_value(&self) -> Error {
        Error::new(
            ErrorKind::ExpectedValue,
            self.span(),
            format!(
                "expected a value but found `{}`",
                self.tokenizer.token()
            ),
        )
    }
}
