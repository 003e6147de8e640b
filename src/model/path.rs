//! Path segments used to address a position inside an [LSD](crate::LSD) tree.
//!
//! A path is a sequence of [PathSegment]s; each segment is classified
//! independently as either a string key or a non-negative integer index by
//! attempting to parse its textual form as a signed integer (§3/§9 of the
//! spec: `"10"` still matches a `Level` key `"10"` because a `Level` always
//! stringifies the segment back before looking it up; `"-1"` classifies as
//! `Index(-1)`, which then always fails the bounds check on a [List](crate::LSD::List)).

use std::fmt;

/// One segment of a path into an [LSD](crate::LSD) tree: either a string key
/// (for descending into a [Level](crate::LSD::Level)) or an integer index
/// (for descending into a [List](crate::LSD::List)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A map key, used against [Level](crate::LSD::Level) nodes.
    Key(String),
    /// A 0-based, possibly-negative list index, used against
    /// [List](crate::LSD::List) nodes. Negative indices are always out of
    /// bounds; they exist only so that a textual segment like `"-1"` has a
    /// well-defined (always-missing) classification rather than panicking.
    Index(i64),
}

impl PathSegment {
    /// Classifies a textual segment: if it parses as a signed decimal
    /// integer, it is an [Index](PathSegment::Index); otherwise a
    /// [Key](PathSegment::Key).
    pub fn classify(text: &str) -> Self {
        match text.parse::<i64>() {
            Ok(i) => Self::Index(i),
            Err(_) => Self::Key(text.to_string()),
        }
    }

    /// An explicit key segment, bypassing numeric classification. Useful
    /// when a key that looks like a number (e.g. `"10"`) must be addressed
    /// as a `Level` key rather than classified as an index.
    pub fn key(text: impl Into<String>) -> Self {
        Self::Key(text.into())
    }

    /// An explicit index segment.
    pub fn index(i: i64) -> Self {
        Self::Index(i)
    }

    /// The segment's textual form, used when looking it up against a
    /// `Level` (a `Level`'s keys are always strings, so an `Index`
    /// segment is stringified back before lookup, per §9 of the spec).
    pub(crate) fn as_key_text(&self) -> String {
        match self {
            Self::Key(k) => k.clone(),
            Self::Index(i) => i.to_string(),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Key(k) => write!(f, "{k}"),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::classify(value)
    }
}

impl From<String> for PathSegment {
    fn from(value: String) -> Self {
        Self::classify(&value)
    }
}

impl From<i64> for PathSegment {
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value as i64)
    }
}

/// Splits a plain dotted string (`"outer.inner.leaf"`) into path segments,
/// classifying each part per [PathSegment::classify].
///
/// This is a convenience for navigation call sites only; it has no
/// awareness of quoting the way a key path during parsing does (§4.3) —
/// a part containing a literal `.` cannot be expressed this way. Build a
/// `Vec<PathSegment>` directly (e.g. via [PathSegment::key]) for that case.
pub fn segments_from_dotted(path: &str) -> Vec<PathSegment> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(PathSegment::classify).collect()
}
