//! Reflective typed-accessor convenience.
//!
//! The core LSD contract is the string-typed [Value](crate::LSD::Value) and
//! the structural accessors in [crate::model::lsd] — the spec calls typed
//! conversion (parsing a value's text into `int`/`float`/etc.) "convenience
//! glue", out of the core's scope. This module provides that glue in the
//! same shape as `LSDGetExt::get_parse` in the community Rust LSD draft
//! (`other_examples/6c99abe9_kirillsemyonkin-buildpp__src-lsd.rs.rs`):
//! resolve a path to a [Value](crate::LSD::Value), then delegate to
//! [FromStr].

use crate::model::lsd::LSD;
use crate::model::path::PathSegment;
use std::str::FromStr;

impl LSD {
    /// Resolves `path` to a [Value](LSD::Value) and parses its text as `T`.
    ///
    /// Returns `Ok(None)` if the path does not resolve to any node, and
    /// `Err(invalid)` both when the resolved node is not a `Value` and when
    /// the value's text fails to parse as `T` — callers that need to tell
    /// these apart should call [value](LSD::value) and [str::parse]
    /// themselves.
    pub fn get<T: FromStr, E: Clone>(&self, path: &[PathSegment], invalid: E) -> Result<Option<T>, E> {
        match self.value(path, invalid.clone()) {
            Ok(None) => Ok(None),
            Ok(Some(text)) => text.parse::<T>().map(Some).map_err(|_| invalid),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::lsd::Level;

    #[test]
    fn parses_typed_value() {
        let mut map = Level::new();
        map.insert("port".to_string(), LSD::Value("8080".to_string()));
        let tree = LSD::Level(map);

        let port: Result<Option<u16>, &str> =
            tree.get(&[PathSegment::key("port")], "invalid port");
        assert_eq!(port, Ok(Some(8080)));
    }

    #[test]
    fn missing_path_is_none() {
        let tree = LSD::Level(Level::new());
        let port: Result<Option<u16>, &str> =
            tree.get(&[PathSegment::key("port")], "invalid port");
        assert_eq!(port, Ok(None));
    }

    #[test]
    fn unparsable_text_is_invalid() {
        let mut map = Level::new();
        map.insert("port".to_string(), LSD::Value("not a number".to_string()));
        let tree = LSD::Level(map);

        let port: Result<Option<u16>, &str> =
            tree.get(&[PathSegment::key("port")], "invalid port");
        assert_eq!(port, Err("invalid port"));
    }
}
