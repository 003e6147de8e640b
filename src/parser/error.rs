//! Error types for the LSD parser.
//!
//! This module provides [ParseErrorKind] (the closed taxonomy of failure
//! modes) and [ParseError] (a `ParseErrorKind` plus positional context),
//! following the shape of `nexwick`'s `ParsingErrorType`/`ParsingError`.

use crate::parser::char_source::CharSource;
use std::fmt;
use std::io;

/// Default length of context (in characters) captured alongside an error.
const DEFAULT_CONTEXT_LENGTH: usize = 30;

// =#========================================================================#=
// PARSE ERROR KIND
// =#========================================================================#=
/// The closed set of ways an LSD parse can fail.
///
/// No recovery, no partial trees, no error accumulation: the first failure
/// aborts the parse, so this enum has no "multiple errors" variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The underlying input stream raised an I/O error.
    ReadFailure(String),
    /// Root was a braced/bracketed container, yet non-whitespace content
    /// follows it.
    UnexpectedCharAtFileEnd,
    /// EOF reached inside an open quoted string literal, or in the middle
    /// of an escape's hex digits.
    UnexpectedStringEnd,
    /// Unknown escape letter after `\`, or EOF immediately after `\`.
    UnexpectedCharEscapeEnd,
    /// Malformed `\x` escape: non-hex digit, invalid UTF-8 sequence, or
    /// missing continuation byte.
    UnexpectedCharInByteEscape,
    /// Malformed `\u` escape: non-hex digit, lone surrogate without
    /// partner, or invalid surrogate pair.
    UnexpectedCharInUnicodeEscape,
    /// Inside a braced level, neither a key nor a `}` was found where one
    /// was required.
    ExpectedKeyOrEnd,
    /// A `.` in a key path was not followed by a key part.
    ExpectedKeyPartAfterKeySeparator,
    /// A key (path) was not followed by a value/list/level.
    ExpectedLSDAfterKey,
    /// Inside a bracketed list, neither an item nor a `]` was found.
    ExpectedListLSDOrEnd,
    /// Path traversal during merge encounters a non-Level where a Level is
    /// needed.
    KeyCollisionShouldBeLevelButIsNot,
    /// A leaf-level key was written twice with incompatible payloads.
    KeyCollisionKeyAlreadyExists(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ReadFailure(msg) => write!(f, "read failure: {msg}"),
            Self::UnexpectedCharAtFileEnd => {
                write!(f, "unexpected character after root container")
            }
            Self::UnexpectedStringEnd => write!(f, "unexpected end of input inside string"),
            Self::UnexpectedCharEscapeEnd => write!(f, "unexpected or unknown escape sequence"),
            Self::UnexpectedCharInByteEscape => write!(f, "malformed \\x byte escape"),
            Self::UnexpectedCharInUnicodeEscape => write!(f, "malformed \\u unicode escape"),
            Self::ExpectedKeyOrEnd => write!(f, "expected a key or '}}'"),
            Self::ExpectedKeyPartAfterKeySeparator => {
                write!(f, "expected a key part after '.'")
            }
            Self::ExpectedLSDAfterKey => write!(f, "expected a value after key"),
            Self::ExpectedListLSDOrEnd => write!(f, "expected a list item or ']'"),
            Self::KeyCollisionShouldBeLevelButIsNot => {
                write!(f, "key path expects a level but a non-level value exists")
            }
            Self::KeyCollisionKeyAlreadyExists(key) => {
                write!(f, "key '{key}' already exists")
            }
        }
    }
}

// =#========================================================================#=
// PARSE ERROR
// =#========================================================================#=
/// A parse failure with contextual information (position and surrounding
/// characters), following `nexwick::parser::parsing_error::ParsingError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    position: usize,
    context: String,
}

impl ParseError {
    /// Builds a `ParseError` from a kind and the lexer state at the point
    /// of failure.
    pub(crate) fn at<S: CharSource>(kind: ParseErrorKind, source: &mut S) -> Self {
        Self {
            position: source.position(),
            context: source.context(DEFAULT_CONTEXT_LENGTH),
            kind,
        }
    }

    /// Builds a `ParseError` with no positional context, used for I/O
    /// failures that occur before any character has been read.
    pub(crate) fn without_context(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            position: 0,
            context: String::new(),
        }
    }

    /// The kind of failure.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The character offset at which the failure was detected.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)?;
        if !self.context.is_empty() {
            write!(f, "\n  next input: {:?}", self.context)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        Self::without_context(ParseErrorKind::ReadFailure(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position_and_context() {
        use crate::parser::char_source::InMemoryCharSource;
        let mut source = InMemoryCharSource::from_str("abc");
        source.advance();
        let err = ParseError::at(ParseErrorKind::ExpectedLSDAfterKey, &mut source);
        let text = err.to_string();
        assert!(text.contains("expected a value after key"));
        assert!(text.contains("position 1"));
        assert!(text.contains("bc"));
    }

    #[test]
    fn io_error_converts_without_context() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "nope");
        let err: ParseError = io_err.into();
        assert_eq!(err.position(), 0);
        assert!(matches!(err.kind(), ParseErrorKind::ReadFailure(_)));
    }
}
