//! The recursive-descent grammar parser: levels, lists, key paths, and the
//! cross-fragment merge algorithm (§4.3).
//!
//! Every `try_*` method is peek-committed like the lexical primitives it is
//! built from: it returns `Ok(None)` without consuming anything if its
//! anchor character is not the one it expects, so the caller can try the
//! next alternative in the grammar's fixed disambiguation order.

use crate::model::lsd::{Level, LSD};
use crate::parser::char_source::CharSource;
use crate::parser::error::{ParseError, ParseErrorKind};
use crate::parser::lexer::{Lexer, WordContext};

/// Drives a [Lexer] through the LSD grammar to produce a single [LSD] tree.
pub struct Parser<S: CharSource> {
    lexer: Lexer<S>,
}

impl<S: CharSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Self {
            lexer: Lexer::new(source),
        }
    }

    /// Parses the entire input as a single LSD tree (§4.3 "Top-level
    /// entry"). The root is always a [LSD::List] or [LSD::Level].
    pub fn parse(&mut self) -> Result<LSD, ParseError> {
        self.lexer.read_nws()?;

        if let Some(list) = self.try_list()? {
            self.lexer.read_nws()?;
            self.expect_eof()?;
            return Ok(list);
        }

        if let Some(level) = self.try_braced_level()? {
            self.lexer.read_nws()?;
            self.expect_eof()?;
            return Ok(level);
        }

        let body = self.parse_level_body(false)?;
        self.expect_eof()?;
        Ok(LSD::Level(body))
    }

    fn expect_eof(&mut self) -> Result<(), ParseError> {
        match self.lexer.peek()? {
            None => Ok(()),
            Some(_) => Err(self.lexer.error(ParseErrorKind::UnexpectedCharAtFileEnd)),
        }
    }

    // ========================================================================
    // Level
    // ========================================================================

    /// Reads a `{ ... }` level, or `Ok(None)` if the next character is not
    /// `{`.
    fn try_braced_level(&mut self) -> Result<Option<LSD>, ParseError> {
        if !self.lexer.consume_if('{')? {
            return Ok(None);
        }
        self.lexer.read_nws()?;
        let body = self.parse_level_body(true)?;
        if !self.lexer.consume_if('}')? {
            return Err(self.lexer.error(ParseErrorKind::ExpectedKeyOrEnd));
        }
        Ok(Some(LSD::Level(body)))
    }

    /// Reads the (possibly empty) sequence of `KeyPath NWS LSD NWS` entries
    /// that make up a level's body, integrating each into the accumulating
    /// [Level] as it is read (§4.3 "Level", "Merge algorithm"). `braced`
    /// selects whether a missing key path is the terminator (unbraced, EOF
    /// reached) or an error unless `}` follows (braced).
    fn parse_level_body(&mut self, braced: bool) -> Result<Level, ParseError> {
        let mut acc = Level::new();
        loop {
            let Some(key_path) = self.try_key_path()? else {
                if !braced {
                    return Ok(acc);
                }
                return match self.lexer.peek()? {
                    Some('}') => Ok(acc),
                    _ => Err(self.lexer.error(ParseErrorKind::ExpectedKeyOrEnd)),
                };
            };

            self.lexer.read_nws()?;

            let stop = braced.then_some('}');
            let value = self
                .read_lsd(stop)?
                .ok_or_else(|| self.lexer.error(ParseErrorKind::ExpectedLSDAfterKey))?;

            self.lexer.read_nws()?;

            let subtree = build_subtree(&key_path, value);
            let LSD::Level(incoming) = subtree else {
                unreachable!("build_subtree always wraps in at least one Level")
            };
            merge_level(&mut acc, incoming, &mut self.lexer)?;
        }
    }

    // ========================================================================
    // Key path
    // ========================================================================

    /// Reads `KeyPart ('.' KeyPart)*`, or `Ok(None)` if no first key part is
    /// present. A trailing `.` with no following key part fails
    /// `ExpectedKeyPartAfterKeySeparator`.
    fn try_key_path(&mut self) -> Result<Option<Vec<String>>, ParseError> {
        let Some(first) = self.lexer.read_key_part()? else {
            return Ok(None);
        };
        let mut parts = vec![first];
        while self.lexer.consume_if('.')? {
            let Some(part) = self.lexer.read_key_part()? else {
                return Err(self
                    .lexer
                    .error(ParseErrorKind::ExpectedKeyPartAfterKeySeparator));
            };
            parts.push(part);
        }
        Ok(Some(parts))
    }

    // ========================================================================
    // List
    // ========================================================================

    /// Reads a `[ ... ]` list, or `Ok(None)` if the next character is not
    /// `[`.
    fn try_list(&mut self) -> Result<Option<LSD>, ParseError> {
        if !self.lexer.consume_if('[')? {
            return Ok(None);
        }
        self.lexer.read_nws()?;

        let mut items = Vec::new();
        loop {
            if self.lexer.consume_if(']')? {
                return Ok(Some(LSD::List(items)));
            }
            match self.read_list_item()? {
                Some(item) => {
                    items.push(item);
                    self.lexer.read_nws()?;
                }
                None => return Err(self.lexer.error(ParseErrorKind::ExpectedListLSDOrEnd)),
            }
        }
    }

    fn read_list_item(&mut self) -> Result<Option<LSD>, ParseError> {
        if let Some(list) = self.try_list()? {
            return Ok(Some(list));
        }
        if let Some(level) = self.try_braced_level()? {
            return Ok(Some(level));
        }
        match self.lexer.read_concatenated_value(WordContext::ListValue)? {
            Some(text) => Ok(Some(LSD::Value(text))),
            None => Ok(None),
        }
    }

    // ========================================================================
    // Value disambiguation (§4.3 "Value disambiguation")
    // ========================================================================

    /// Reads the next LSD node in value position: list, then level, then a
    /// concatenated value using the `Value` word context with `stop` as its
    /// extra terminator.
    fn read_lsd(&mut self, stop: Option<char>) -> Result<Option<LSD>, ParseError> {
        if let Some(list) = self.try_list()? {
            return Ok(Some(list));
        }
        if let Some(level) = self.try_braced_level()? {
            return Ok(Some(level));
        }
        match self.lexer.read_concatenated_value(WordContext::Value(stop))? {
            Some(text) => Ok(Some(LSD::Value(text))),
            None => Ok(None),
        }
    }
}

// =#========================================================================#=
// MERGE ALGORITHM
// =#========================================================================#=

/// Materialises the fresh single-entry sub-tree for a key path: an empty
/// Level for each non-final segment, with the innermost mapping the final
/// segment to `value` (§4.3 "Merge algorithm", step 1).
fn build_subtree(key_path: &[String], value: LSD) -> LSD {
    match key_path.split_first() {
        Some((head, rest)) => {
            let mut level = Level::new();
            level.insert(head.clone(), build_subtree(rest, value));
            LSD::Level(level)
        }
        None => value,
    }
}

/// Recursively merges `incoming` into `acc` (§4.3 "Merge algorithm", step
/// 2). `lexer` is only used to stamp positional context onto collision
/// errors.
fn merge_level<S: CharSource>(
    acc: &mut Level,
    incoming: Level,
    lexer: &mut Lexer<S>,
) -> Result<(), ParseError> {
    for (key, incoming_node) in incoming {
        if !acc.contains_key(&key) {
            acc.insert(key, incoming_node);
            continue;
        }

        let incoming_is_level = incoming_node.is_level();
        let existing_is_level = acc.get(&key).is_some_and(LSD::is_level);

        match (incoming_is_level, existing_is_level) {
            (true, true) => {
                let LSD::Level(incoming_sub) = incoming_node else {
                    unreachable!("incoming_is_level checked above")
                };
                let Some(LSD::Level(acc_sub)) = acc.get_mut(&key) else {
                    unreachable!("existing_is_level checked above")
                };
                merge_level(acc_sub, incoming_sub, lexer)?;
            }
            (true, false) => {
                return Err(lexer.error(ParseErrorKind::KeyCollisionShouldBeLevelButIsNot));
            }
            (false, _) => {
                return Err(lexer.error(ParseErrorKind::KeyCollisionKeyAlreadyExists(key)));
            }
        }
    }
    Ok(())
}
