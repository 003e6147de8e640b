//! LSD ("Less Syntax Data") parser and path navigator.
//!
//! This crate parses the LSD configuration/data-interchange format — values
//! as unquoted words or quoted strings, composite data as brace-delimited
//! *levels* (string-keyed ordered maps) and bracket-delimited *lists*
//! (ordered sequences) — into an in-memory tree, and resolves dotted paths
//! against it.
//!
//! # Example
//! ```
//! use lsd::{LSD, PathSegment};
//!
//! let tree = LSD::parse_str("server.port 8080\nserver.host localhost").unwrap();
//! let port: Option<u16> = tree
//!     .get(&[PathSegment::key("server"), PathSegment::key("port")], ())
//!     .unwrap();
//! assert_eq!(port, Some(8080));
//! ```

/// The LSD tree data model and path navigation.
pub mod model;
/// The character source, lexer, and grammar parser that produce an LSD
/// tree from text.
pub mod parser;

pub use model::{segments_from_dotted, Level, PathSegment, LSD};
pub use parser::error::{ParseError, ParseErrorKind};
