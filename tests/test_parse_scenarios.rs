//! End-to-end literal-input scenarios from the specification, plus the
//! cross-cutting testable properties that don't fit naturally as unit
//! tests colocated with a single module.

use lsd::{PathSegment, LSD};

fn level(pairs: &[(&str, LSD)]) -> LSD {
    let mut map = lsd::Level::new();
    for (k, v) in pairs {
        map.insert(k.to_string(), v.clone());
    }
    LSD::Level(map)
}

fn value(s: &str) -> LSD {
    LSD::Value(s.to_string())
}

#[test]
fn empty_input_normalises_to_empty_level() {
    assert_eq!(LSD::parse_str("").unwrap(), level(&[]));
    assert_eq!(LSD::parse_str("   \n\t  # only a comment\n").unwrap(), level(&[]));
}

#[test]
fn two_simple_top_level_entries() {
    let tree = LSD::parse_str("a 10\nb 20").unwrap();
    assert_eq!(tree, level(&[("a", value("10")), ("b", value("20"))]));
}

#[test]
fn dotted_paths_synthesise_and_merge_nested_levels() {
    let input = "outer.\"example level\".value 10\nouter.\"example level\".value2 20";
    let tree = LSD::parse_str(input).unwrap();
    let inner = level(&[("value", value("10")), ("value2", value("20"))]);
    let example = level(&[("example level", inner)]);
    assert_eq!(tree, level(&[("outer", example)]));
}

#[test]
fn list_with_embedded_empty_level() {
    let tree = LSD::parse_str("[ 1 2 {} 3 4 ]").unwrap();
    assert_eq!(
        tree,
        LSD::List(vec![value("1 2"), level(&[]), value("3 4")])
    );
}

#[test]
fn duplicate_leaf_collides() {
    let err = LSD::parse_str("a 10\na 20").unwrap_err();
    assert_eq!(
        err.kind(),
        &lsd::ParseErrorKind::KeyCollisionKeyAlreadyExists("a".to_string())
    );
}

#[test]
fn value_then_path_through_it_collides() {
    let err = LSD::parse_str("a 10\na.b 20").unwrap_err();
    assert_eq!(
        err.kind(),
        &lsd::ParseErrorKind::KeyCollisionShouldBeLevelButIsNot
    );
}

#[test]
fn trailing_content_after_braced_root_errors() {
    let err = LSD::parse_str("{} test").unwrap_err();
    assert_eq!(err.kind(), &lsd::ParseErrorKind::UnexpectedCharAtFileEnd);
}

#[test]
fn malformed_byte_escape_missing_continuations() {
    let err = LSD::parse_str(r#"test "\xf0\x00\x00\x00\x00""#).unwrap_err();
    assert_eq!(err.kind(), &lsd::ParseErrorKind::UnexpectedCharInByteEscape);
}

#[test]
fn lone_low_surrogate_without_partner() {
    let err = LSD::parse_str(r#"test "\udfff""#).unwrap_err();
    assert_eq!(err.kind(), &lsd::ParseErrorKind::UnexpectedStringEnd);
}

#[test]
fn value_concatenation_across_quoted_and_unquoted_parts() {
    let tree = LSD::parse_str("c  a  \"test string\\nand spaces\"  b").unwrap();
    assert_eq!(
        tree,
        level(&[("c", value("a  test string\nand spaces  b"))])
    );
}

// §8 property 3/4: key uniqueness and insertion-order stability.
#[test]
fn level_iteration_order_matches_first_insertion() {
    let tree = LSD::parse_str("z 1\na 2\nm 3\na.nested 4").unwrap();
    let LSD::Level(map) = tree else { panic!("expected a level") };
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
    // every key appears exactly once
    assert_eq!(map.len(), keys.len());
}

// §8 property 7: disjoint-path merges commute.
#[test]
fn disjoint_path_merge_order_does_not_affect_result() {
    let a = LSD::parse_str("a.b 1\na.c 2\nx 9").unwrap();
    let b = LSD::parse_str("x 9\na.c 2\na.b 1").unwrap();
    assert_eq!(a, b);
}

// §8 property 8: repeated navigation is stable.
#[test]
fn repeated_navigation_returns_structurally_equal_nodes() {
    let tree = LSD::parse_str("outer.inner 10").unwrap();
    let path = [PathSegment::key("outer"), PathSegment::key("inner")];
    let first = tree.inner(&path).cloned();
    let second = tree.inner(&path).cloned();
    assert_eq!(first, second);
    assert_eq!(first, Some(value("10")));
}

// §5: multiple independent parses may run concurrently without coordination.
#[test]
fn independent_parses_run_concurrently() {
    let inputs: Vec<String> = (0..8).map(|i| format!("key{i} value{i}")).collect();
    let handles: Vec<_> = inputs
        .into_iter()
        .enumerate()
        .map(|(i, input)| {
            std::thread::spawn(move || {
                let tree = LSD::parse_str(&input).unwrap();
                let expected_key = format!("key{i}");
                let expected_value = format!("value{i}");
                assert_eq!(
                    tree.inner(&[PathSegment::key(&expected_key)]),
                    Some(&LSD::Value(expected_value))
                );
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn cr_and_crlf_are_accepted_as_line_terminators() {
    let lf = LSD::parse_str("a 1\nb 2").unwrap();
    let cr = LSD::parse_str("a 1\rb 2").unwrap();
    let crlf = LSD::parse_str("a 1\r\nb 2").unwrap();
    assert_eq!(lf, cr);
    assert_eq!(lf, crlf);
}

#[test]
fn root_bare_value_is_never_produced() {
    // A file with no container at the root falls back to an implicit
    // level body -- the root is still a Level, never a bare Value.
    let tree = LSD::parse_str("a 1").unwrap();
    assert!(tree.is_level());
    let tree = LSD::parse_str("[1 2]").unwrap();
    assert!(tree.is_list());
}
