//! The LSD tree data model.
//!
//! # Tree representation
//! An LSD tree is [LSD], a tagged sum of exactly three variants:
//! [LSD::Value] (opaque text), [LSD::List] (ordered, index-addressed), and
//! [LSD::Level] (insertion-ordered, string-keyed). The root of any
//! successful parse is always a `List` or a `Level`.
//!
//! # Path navigation
//! [LSD::inner]/[LSD::value]/[LSD::list]/[LSD::level] resolve a sequence of
//! [path::PathSegment]s, descending one segment at a time and dispatching
//! each as either a map key or a list index depending on the current node
//! and the segment's own classification (see [path] for the classification
//! rule).
//!
//! # Typed convenience
//! [LSD::get] layers `FromStr` parsing of a resolved [LSD::Value] on top of
//! [LSD::value], for callers that want e.g. an `i32` or `bool` directly; see
//! [access].

mod access;
pub mod lsd;
pub mod path;

pub use lsd::{Level, LSD};
pub use path::{segments_from_dotted, PathSegment};
