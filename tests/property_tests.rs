//! Property-based tests over generated documents and values.
//!
//! Generators stay inside the round-trippable space the format guarantees:
//! names and values that need no quoting (no surrounding whitespace or
//! quote pairs), and escape inputs without consecutive backslashes, which
//! the escape scheme documents as one-way. The never-panics property runs
//! over fully arbitrary input.

use proptest::prelude::*;

use inidoc::escape::{escape, unescape};
use inidoc::{parse_str, Document};

type Entries = Vec<(String, Vec<(String, String)>)>;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_.-]{0,11}"
}

// Mid-line separator, comment, and bracket characters are literal value
// text, so they belong in the generator. Quotes, backslashes, and edge
// whitespace are covered by dedicated escape and quoting tests.
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./:@+;#=\\[\\]-]{0,20}"
}

fn entries_strategy() -> impl Strategy<Value = Entries> {
    prop::collection::vec(
        (
            name_strategy(),
            prop::collection::vec((name_strategy(), value_strategy()), 1..6),
        ),
        0..6,
    )
}

fn build_document(entries: &Entries) -> Document {
    let mut doc = Document::new();
    for (section, pairs) in entries {
        for (name, value) in pairs {
            doc.set(section, name, value);
        }
    }
    doc
}

proptest! {
    // Whatever we write, we can read back identically.
    #[test]
    fn prop_document_round_trip(entries in entries_strategy()) {
        let doc = build_document(&entries);
        let text = doc.to_string();

        let parsed = parse_str(&text);
        prop_assert!(parsed.is_ok(), "formatted text failed to parse: {text:?}");
        let parsed = parsed.unwrap();

        prop_assert_eq!(&parsed, &doc);
        // Equality is order-insensitive, so pin the order separately.
        prop_assert_eq!(
            parsed.section_names().collect::<Vec<_>>(),
            doc.section_names().collect::<Vec<_>>()
        );
    }

    // Formatting is a fixed point after one pass.
    #[test]
    fn prop_format_idempotent(entries in entries_strategy()) {
        let doc = build_document(&entries);
        let once = doc.to_string();
        let twice = parse_str(&once).unwrap().to_string();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_escape_unescape_symmetry(s in "[a-zA-Z0-9 \\\\\\n\\r\\t\\x00]{0,24}") {
        prop_assume!(!s.contains("\\\\"));
        prop_assert_eq!(unescape(&escape(&s)), s);
    }

    #[test]
    fn prop_escape_output_has_no_controls(s in "[a-zA-Z0-9 \\n\\r\\t\\x00]{0,24}") {
        let escaped = escape(&s);
        prop_assert!(escaped.chars().all(|c| !c.is_control()));
    }

    // Arbitrary input may fail to parse, but never panics.
    #[test]
    fn prop_parse_never_panics(s in any::<String>()) {
        let _ = parse_str(&s);
    }

    // Merge precedence: the layer wins where it speaks, the base where
    // it does not.
    #[test]
    fn prop_merge_precedence(base in entries_strategy(), layer in entries_strategy()) {
        let base_doc = build_document(&base);
        let layer_doc = build_document(&layer);

        let merged = base_doc.merged(&layer_doc).unwrap();

        for (section, name, value) in layer_doc.properties() {
            prop_assert_eq!(merged.get(section, name), Some(value));
        }
        for (section, name, value) in base_doc.properties() {
            if layer_doc.get(section, name).is_none() {
                prop_assert_eq!(merged.get(section, name), Some(value));
            }
        }
    }

    // Values holding control characters survive a full write/read cycle
    // through escaping.
    #[test]
    fn prop_control_characters_round_trip(
        name in name_strategy(),
        value in "[a-zA-Z0-9\\n\\t]{1,20}",
    ) {
        let mut doc = Document::new();
        doc.set("s", &name, &value);

        let parsed = parse_str(&doc.to_string()).unwrap();
        prop_assert_eq!(parsed.get("s", &name), Some(value.as_str()));
    }
}
