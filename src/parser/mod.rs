//! The LSD parser: character source abstractions, lexical primitives, the
//! recursive-descent grammar, and the error taxonomy they can all raise.

pub mod char_source;
pub mod error;
mod grammar;
mod lexer;

use crate::model::lsd::LSD;
use char_source::{InMemoryCharSource, ReaderCharSource};
use error::ParseError;
use grammar::Parser;
use std::fs::File;
use std::io::Read;
use std::path::Path;

impl LSD {
    /// Parses `input` as LSD text, returning the root [List](LSD::List) or
    /// [Level](LSD::Level) (§6 "Input surface").
    pub fn parse_str(input: &str) -> Result<LSD, ParseError> {
        Parser::new(InMemoryCharSource::from_str(input)).parse()
    }

    /// Parses LSD text read to completion from `reader`, decoding it as
    /// UTF-8 (§6 "Input surface": "For byte inputs, the decoder is UTF-8 by
    /// default").
    pub fn parse_reader<R: Read>(reader: R) -> Result<LSD, ParseError> {
        Parser::new(ReaderCharSource::new(reader)?).parse()
    }

    /// Opens, parses, and closes the file at `path` (§6 "Input surface").
    pub fn parse_file(path: impl AsRef<Path>) -> Result<LSD, ParseError> {
        LSD::parse_reader(File::open(path)?)
    }
}
