use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::MAIN_SEPARATOR;

use serde_json::json;
use strkit::color::{translate_color_codes, ColorCode};
use strkit::fuzzy::{fuzzy_lookup, levenshtein, lookup_variant, try_levenshtein};
use strkit::join::{join, join_iter, join_quoted};
use strkit::node::{append_node_dot, strip_before_last_node};
use strkit::path::{ensure_root_prefix, ensure_trailing_separator, replace_tabs, strip_extension};
use strkit::coerce::parse_string;
use strkit::ErrorCode;

#[test]
fn color_codes_translate_in_place() {
    assert_eq!(
        translate_color_codes("§aHello §Lworld §Zbye"),
        "&aHello &lworld §Zbye"
    );
}

#[test]
fn edit_distance_reference_values() {
    assert_eq!(levenshtein("elephant", "hippo"), 7);
    assert_eq!(levenshtein("frog", "fog"), 1);
    assert_eq!(levenshtein("", "a"), 1);
}

#[test]
fn absent_distance_input_is_invalid_argument() {
    let err = try_levenshtein(None, None).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    assert_eq!(err.code.as_str(), "validation.invalid_argument");
}

#[test]
fn parse_string_classifies_text() {
    assert_eq!(parse_string(Some(json!("42")), false), Some(json!(42)));
    assert_eq!(parse_string(Some(json!("3.14")), false), Some(json!(3.14)));
    assert_eq!(parse_string(Some(json!("yes")), false), Some(json!(true)));
    assert_eq!(parse_string(Some(json!("hello")), false), Some(json!("hello")));
    assert_eq!(parse_string(Some(json!("§Aon")), false), Some(json!("&aon")));
}

#[test]
fn join_family() {
    assert_eq!(join(&["a", "b", "c"], "-", 1), "b-c");
    assert_eq!(join_quoted(&["a", "b"], ",", 0, "'"), "'a','b'");
    assert_eq!(join(&[1, 2, 3], "+", 0), "1+2+3");
    assert_eq!(join::<&str>(&[], ",", 0), "");
    assert_eq!(join(&["a"], ",", 5), "");

    let set: std::collections::BTreeSet<&str> = ["z", "x", "y"].into_iter().collect();
    assert_eq!(join_iter(&set, ", ", 1), "y, z");
}

#[test]
fn join_splits_back_when_no_element_contains_delimiter() {
    let items = ["alpha", "beta", "gamma"];
    let joined = join(&items, "|", 0);
    let parts: Vec<&str> = joined.split('|').collect();
    assert_eq!(parts, items);
}

#[test]
fn node_shaping() {
    assert_eq!(append_node_dot("root.child"), "root.child.");
    assert_eq!(append_node_dot(""), "");
    assert_eq!(strip_before_last_node("a.b.c"), ".c");
    assert_eq!(strip_before_last_node("abc"), "abc");
}

#[test]
fn extension_stripping() {
    assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
    assert_eq!(strip_extension(".rcfile"), ".rcfile");
    assert_eq!(strip_extension(strip_extension("notes.txt")), "notes");
}

#[test]
fn path_shaping_boundaries() {
    assert_eq!(ensure_trailing_separator(""), MAIN_SEPARATOR.to_string());
    assert!(matches!(replace_tabs("plain"), Cow::Borrowed(_)));

    let text = "\ta\tb";
    let out = replace_tabs(text);
    assert!(!out.contains('\t'));
    assert_eq!(out.len(), text.len() + 3 * 2);
}

#[test]
fn rooted_paths_are_untouched() {
    // the working directory is absolute, so its root is always a known root
    let cwd = std::env::current_dir().unwrap();
    let cwd = cwd.to_string_lossy();
    assert_eq!(ensure_root_prefix(&cwd), cwd);
}

#[test]
fn fuzzy_lookup_boundaries() {
    let table = BTreeMap::from([("apple".to_string(), 'A')]);
    assert_eq!(fuzzy_lookup(&table, "APPLE", false), Some('A'));
    assert_eq!(fuzzy_lookup(&table, "aple", true), Some('A'));
    assert_eq!(fuzzy_lookup(&table, "bpple", true), None);
}

#[test]
fn color_names_resolve() {
    assert_eq!(lookup_variant::<ColorCode>("dark red", true), Some(ColorCode::DarkRed));
    assert_eq!(lookup_variant::<ColorCode>("strikethru", true), None);
    assert_eq!(lookup_variant::<ColorCode>("resett", true), Some(ColorCode::Reset));
}
