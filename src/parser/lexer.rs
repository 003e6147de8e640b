//! Lexical primitives: whitespace, quoted strings, and context-sensitive
//! unquoted words (§4.2).
//!
//! Every reader here is *peek-committed*: it inspects [CharSource::peek]
//! first and only consumes input if the current character belongs to its
//! accepted set, leaving the stream untouched otherwise. This is what makes
//! the grammar parser LL(1) — it never needs to backtrack past a character
//! it has already decided not to consume.

use crate::parser::char_source::CharSource;
use crate::parser::error::{ParseError, ParseErrorKind};

// =#========================================================================#=
// WORD CONTEXT
// =#========================================================================#=
/// The context an unquoted word is being read in, which determines its
/// terminator set (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordContext {
    /// A value at the top level or on the right-hand side of a level
    /// entry. Carries an optional extra stop character (`}` when reading
    /// the value of a braced level entry).
    Value(Option<char>),
    /// A key part, inside a key path.
    Key,
    /// A value inside a list.
    ListValue,
}

impl WordContext {
    fn is_terminator(self, c: char) -> bool {
        match self {
            Self::Value(stop) => {
                matches!(c, ' ' | '\t' | '\r' | '\n' | '\'' | '"' | '#') || Some(c) == stop
            }
            Self::Key => matches!(
                c,
                ' ' | '\t' | '\r' | '\n' | '\'' | '"' | '#' | '{' | '}' | '[' | ']' | '.'
            ),
            Self::ListValue => {
                matches!(c, ' ' | '\t' | '\r' | '\n' | '\'' | '"' | '#' | '{' | '}' | '[' | ']')
            }
        }
    }
}

// =#========================================================================#=
// LEXER
// =#========================================================================#=
/// Wraps a [CharSource] with one character of lookahead and the lexical
/// primitives the grammar parser is built from.
pub struct Lexer<S: CharSource> {
    source: S,
}

impl<S: CharSource> Lexer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    #[inline]
    pub(crate) fn peek(&mut self) -> Result<Option<char>, ParseError> {
        Ok(self.source.peek()?)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.source.advance();
    }

    pub(crate) fn position(&self) -> usize {
        self.source.position()
    }

    pub(crate) fn error(&mut self, kind: ParseErrorKind) -> ParseError {
        ParseError::at(kind, &mut self.source)
    }

    pub(crate) fn peek_is(&mut self, c: char) -> Result<bool, ParseError> {
        Ok(self.peek()? == Some(c))
    }

    pub(crate) fn consume_if(&mut self, c: char) -> Result<bool, ParseError> {
        if self.peek_is(c)? {
            self.advance();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // ========================================================================
    // Whitespace (§4.2)
    // ========================================================================

    /// Inline whitespace: greedily consumes space and tab, returning the
    /// consumed run so value concatenation can preserve internal spacing.
    pub(crate) fn read_iws(&mut self) -> Result<String, ParseError> {
        let mut run = String::new();
        while let Some(c) = self.peek()? {
            if c == ' ' || c == '\t' {
                run.push(c);
                self.advance();
            } else {
                break;
            }
        }
        Ok(run)
    }

    /// Structural whitespace: IWS, line terminators, and `#` line comments,
    /// consumed in any mixture until none remain. Returns whether at least
    /// one newline was crossed (informational only — see §9).
    pub(crate) fn read_nws(&mut self) -> Result<bool, ParseError> {
        let mut has_newline = false;
        loop {
            self.read_iws()?;
            match self.peek()? {
                Some('\r') | Some('\n') => {
                    has_newline = true;
                    self.advance();
                }
                Some('#') => {
                    self.advance();
                    loop {
                        match self.peek()? {
                            None | Some('\r') | Some('\n') => break,
                            Some(_) => self.advance(),
                        }
                    }
                }
                _ => break,
            }
        }
        Ok(has_newline)
    }

    // ========================================================================
    // Quoted strings (§4.2)
    // ========================================================================

    /// Reads a quoted string if the current character is `'` or `"`;
    /// otherwise returns `Ok(None)` without consuming anything.
    pub(crate) fn read_quoted_string(&mut self) -> Result<Option<String>, ParseError> {
        let Some(quote) = self.peek()? else {
            return Ok(None);
        };
        if quote != '\'' && quote != '"' {
            return Ok(None);
        }
        self.advance();

        let mut result = String::new();
        loop {
            match self.peek()? {
                None => return Err(self.error(ParseErrorKind::UnexpectedStringEnd)),
                Some(c) if c == quote => {
                    self.advance();
                    return Ok(Some(result));
                }
                Some('\\') => {
                    self.advance();
                    let escape_char = self
                        .peek()?
                        .ok_or_else(|| self.error(ParseErrorKind::UnexpectedCharEscapeEnd))?;
                    self.advance();
                    self.read_escape(escape_char, &mut result)?;
                }
                Some(c) => {
                    result.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Appends the character(s) produced by one escape sequence (the
    /// introducing `\` and escape letter already consumed) to `out`.
    fn read_escape(&mut self, escape_char: char, out: &mut String) -> Result<(), ParseError> {
        match escape_char {
            '"' | '\'' | '\\' => out.push(escape_char),
            _ => match escape_char.to_ascii_lowercase() {
                '0' => out.push('\0'),
                'a' => out.push('\u{7}'),
                'b' => out.push('\u{8}'),
                't' => out.push('\t'),
                'n' => out.push('\n'),
                'v' => out.push('\u{B}'),
                'f' => out.push('\u{C}'),
                'r' => out.push('\r'),
                'x' => out.push(self.read_byte_escape()?),
                'u' => out.push(self.read_unicode_escape()?),
                _ => return Err(self.error(ParseErrorKind::UnexpectedCharEscapeEnd)),
            },
        }
        Ok(())
    }

    /// Reads exactly `count` hex digits, returning a run of premature-EOF
    /// as [ParseErrorKind::UnexpectedStringEnd] and a non-hex character as
    /// `malformed`.
    fn read_hex_digits(&mut self, count: usize, malformed: ParseErrorKind) -> Result<u32, ParseError> {
        let mut value = 0u32;
        for _ in 0..count {
            let Some(c) = self.peek()? else {
                return Err(self.error(ParseErrorKind::UnexpectedStringEnd));
            };
            let Some(digit) = c.to_digit(16) else {
                return Err(self.error(malformed));
            };
            value = value * 16 + digit;
            self.advance();
        }
        Ok(value)
    }

    /// Requires a `\` followed by `letter_lower` (case-insensitive) and
    /// then `count` hex digits — the strict form of reading an escape
    /// continuation (§9 open question). A missing leading `\` is treated
    /// as the string having ended before its required continuation
    /// arrived ([ParseErrorKind::UnexpectedStringEnd]); a present `\`
    /// followed by the wrong letter is `malformed`.
    fn read_escape_continuation(
        &mut self,
        letter_lower: char,
        count: usize,
        malformed: ParseErrorKind,
    ) -> Result<u32, ParseError> {
        match self.peek()? {
            Some('\\') => self.advance(),
            _ => return Err(self.error(ParseErrorKind::UnexpectedStringEnd)),
        }
        match self.peek()? {
            None => return Err(self.error(ParseErrorKind::UnexpectedCharEscapeEnd)),
            Some(c) if c.to_ascii_lowercase() == letter_lower => self.advance(),
            Some(_) => return Err(self.error(malformed)),
        }
        self.read_hex_digits(count, malformed)
    }

    /// `\xHH` UTF-8 byte escape, including any required continuation
    /// bytes (§4.2).
    fn read_byte_escape(&mut self) -> Result<char, ParseError> {
        let b0 = self.read_hex_digits(2, ParseErrorKind::UnexpectedCharInByteEscape)? as u8;
        let seq_len = match b0.leading_ones() {
            0 => 1,
            n @ (2 | 3 | 4) => n as usize,
            _ => return Err(self.error(ParseErrorKind::UnexpectedCharInByteEscape)),
        };

        let mut bytes = Vec::with_capacity(seq_len);
        bytes.push(b0);
        for _ in 1..seq_len {
            let cont = self.read_escape_continuation(
                'x',
                2,
                ParseErrorKind::UnexpectedCharInByteEscape,
            )? as u8;
            if cont & 0b1100_0000 != 0b1000_0000 {
                return Err(self.error(ParseErrorKind::UnexpectedCharInByteEscape));
            }
            bytes.push(cont);
        }

        match std::str::from_utf8(&bytes) {
            Ok(s) => Ok(s.chars().next().expect("non-empty UTF-8 byte sequence")),
            Err(_) => Err(self.error(ParseErrorKind::UnexpectedCharInByteEscape)),
        }
    }

    /// `\uHHHH` UTF-16 code-unit escape, including a surrogate pair's
    /// second unit if the first unit is a surrogate (§4.2).
    fn read_unicode_escape(&mut self) -> Result<char, ParseError> {
        let u1 = self.read_hex_digits(4, ParseErrorKind::UnexpectedCharInUnicodeEscape)? as u16;
        if let Some(c) = char::from_u32(u1 as u32) {
            return Ok(c);
        }

        let u2 = self.read_escape_continuation(
            'u',
            4,
            ParseErrorKind::UnexpectedCharInUnicodeEscape,
        )? as u16;

        match char::decode_utf16([u1, u2]).next() {
            Some(Ok(c)) => Ok(c),
            _ => Err(self.error(ParseErrorKind::UnexpectedCharInUnicodeEscape)),
        }
    }

    // ========================================================================
    // Words and parts (§4.2)
    // ========================================================================

    /// An unquoted word: a maximal non-empty run of characters that are
    /// not terminators for `ctx`. Returns `Ok(None)` (consuming nothing)
    /// if the current character is already a terminator.
    pub(crate) fn read_word(&mut self, ctx: WordContext) -> Result<Option<String>, ParseError> {
        let mut word = String::new();
        while let Some(c) = self.peek()? {
            if ctx.is_terminator(c) {
                break;
            }
            word.push(c);
            self.advance();
        }
        Ok(if word.is_empty() { None } else { Some(word) })
    }

    /// A single part: either a quoted string or an unquoted word in `ctx`.
    pub(crate) fn read_part(&mut self, ctx: WordContext) -> Result<Option<String>, ParseError> {
        if let Some(s) = self.read_quoted_string()? {
            return Ok(Some(s));
        }
        self.read_word(ctx)
    }

    /// A value/list-value: one or more parts concatenated, with any IWS
    /// between consecutive parts preserved in the result and trailing IWS
    /// discarded (§8 property 5). Returns `Ok(None)` if no part is found
    /// at all.
    pub(crate) fn read_concatenated_value(
        &mut self,
        ctx: WordContext,
    ) -> Result<Option<String>, ParseError> {
        let Some(first) = self.read_part(ctx)? else {
            return Ok(None);
        };
        let mut result = first;
        loop {
            let gap = self.read_iws()?;
            match self.read_part(ctx)? {
                Some(part) => {
                    result.push_str(&gap);
                    result.push_str(&part);
                }
                None => break,
            }
        }
        Ok(Some(result))
    }

    /// A key part: the concatenation of adjacent key-words and quoted
    /// strings with *no* intervening whitespace — any IWS terminates the
    /// key part (and hence the key path) rather than being preserved.
    pub(crate) fn read_key_part(&mut self) -> Result<Option<String>, ParseError> {
        let Some(first) = self.read_part(WordContext::Key)? else {
            return Ok(None);
        };
        let mut result = first;
        while let Some(part) = self.read_part(WordContext::Key)? {
            result.push_str(&part);
        }
        Ok(Some(result))
    }
}
