//! The LSD tree and its path navigator.

use crate::model::path::PathSegment;
use indexmap::IndexMap;

/// An insertion-ordered, string-keyed mapping from key to [LSD] node.
///
/// Keys are pairwise distinct within one `Level` (§3); iteration order is
/// the order in which keys were first inserted during parsing.
pub type Level = IndexMap<String, LSD>;

// =#========================================================================#=
// LSD
// =#========================================================================#=
/// A node of an LSD tree: a tagged sum of exactly three variants (§3).
///
/// The root of any successful parse is always a [List] or a [Level], never
/// a bare [Value] (§3, §8 property 2). The tree is acyclic and parent-owned:
/// each parent exclusively owns its children, there is no sharing.
///
/// [List]: LSD::List
/// [Level]: LSD::Level
/// [Value]: LSD::Value
#[derive(Debug, Clone, PartialEq)]
pub enum LSD {
    /// An opaque textual datum. Values never contain embedded LSD
    /// structure; a value's text is always stored verbatim, even if it
    /// looks like `{x}` or `[1]`.
    Value(String),
    /// An ordered, 0-indexed, positionally addressed sequence of nodes. A
    /// list may contain heterogeneous variants.
    List(Vec<LSD>),
    /// An insertion-ordered, string-keyed mapping of nodes.
    Level(Level),
}

impl LSD {
    /// Borrows this node as a [Value](LSD::Value)'s text, or `None` if this
    /// node is a different variant.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Borrows this node as a [List](LSD::List)'s elements, or `None` if
    /// this node is a different variant.
    pub fn as_list(&self) -> Option<&[LSD]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Borrows this node as a [Level](LSD::Level), or `None` if this node
    /// is a different variant.
    pub fn as_level(&self) -> Option<&Level> {
        match self {
            Self::Level(l) => Some(l),
            _ => None,
        }
    }

    /// `true` if this node is a [Value](LSD::Value).
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// `true` if this node is a [List](LSD::List).
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// `true` if this node is a [Level](LSD::Level).
    pub fn is_level(&self) -> bool {
        matches!(self, Self::Level(_))
    }

    // ========================================================================
    // Path navigation (§4.4)
    // ========================================================================

    /// Descends `path` and returns the located subtree, or `None` if any
    /// segment misses. An empty path returns `self` (§4.4, §8 property 8).
    pub fn inner(&self, path: &[PathSegment]) -> Option<&LSD> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self);
        };

        match self {
            // A Value has no children: empty path already handled above,
            // so any non-empty path misses.
            Self::Value(_) => None,

            Self::List(items) => match first {
                PathSegment::Index(i) => {
                    let i = usize::try_from(*i).ok()?;
                    items.get(i)?.inner(rest)
                }
                // Lists are not key-addressable.
                PathSegment::Key(_) => None,
            },

            Self::Level(map) => {
                // A Level always looks up by the segment's string form, so
                // that a key which looks like an integer (e.g. "10") can
                // still be reached even though it classifies as an Index.
                map.get(&first.as_key_text())?.inner(rest)
            }
        }
    }

    /// Like [inner](Self::inner), but additionally fails with `invalid` if
    /// the located node exists and is not a [Value](LSD::Value).
    pub fn value<E>(&self, path: &[PathSegment], invalid: E) -> Result<Option<&str>, E> {
        match self.inner(path) {
            None => Ok(None),
            Some(node) => node.as_value().ok_or(invalid).map(Some),
        }
    }

    /// Like [inner](Self::inner), but additionally fails with `invalid` if
    /// the located node exists and is not a [List](LSD::List).
    pub fn list<E>(&self, path: &[PathSegment], invalid: E) -> Result<Option<&[LSD]>, E> {
        match self.inner(path) {
            None => Ok(None),
            Some(node) => node.as_list().ok_or(invalid).map(Some),
        }
    }

    /// Like [inner](Self::inner), but additionally fails with `invalid` if
    /// the located node exists and is not a [Level](LSD::Level).
    pub fn level<E>(&self, path: &[PathSegment], invalid: E) -> Result<Option<&Level>, E> {
        match self.inner(path) {
            None => Ok(None),
            Some(node) => node.as_level().ok_or(invalid).map(Some),
        }
    }
}
