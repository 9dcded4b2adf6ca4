use std::collections::HashMap;
use std::fs;

use indexmap::IndexMap;
use serde::Serialize;

use inidoc::{ini, parse_str, Document, Error, Options, Section};

#[derive(Serialize)]
struct ServerFlags {
    host: String,
    workers: u16,
    verbose: bool,
}

#[derive(Serialize)]
struct Flags {
    server: ServerFlags,
}

const APP_CONFIG: &str = "\
; application configuration
[server]
host = localhost
port = 8080

[database]
url = postgres://localhost/app
pool = 16

[log]
level = info
";

#[test]
fn test_parse_edit_write_cycle() {
    let mut doc = parse_str(APP_CONFIG).unwrap();
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.get("database", "pool"), Some("16"));

    doc.set("server", "port", "9090");
    doc.set("log", "file", "/var/log/app.log");
    doc.remove_section("database");

    let written = doc.to_string();
    println!("Written config:\n{written}");
    assert_eq!(
        written,
        "[server]\nhost = localhost\nport = 9090\n\n[log]\nlevel = info\nfile = /var/log/app.log\n\n"
    );

    let reparsed = parse_str(&written).unwrap();
    assert_eq!(doc, reparsed);
}

#[test]
fn test_layered_merge() {
    // Defaults built in code, then a file layer, then runtime flags.
    let mut doc = ini! {
        "server" => {
            "host" => "localhost",
            "port" => 8080,
        },
        "log" => {
            "level" => "info",
        },
    };

    let file = parse_str("[log]\nlevel = debug\n\n[server]\nport = 9090\n").unwrap();
    doc.merge(&file).unwrap();

    let flags = Flags {
        server: ServerFlags {
            host: "0.0.0.0".to_string(),
            workers: 4,
            verbose: true,
        },
    };
    doc.merge(&flags).unwrap();

    assert_eq!(doc.get("server", "host"), Some("0.0.0.0"));
    assert_eq!(doc.get("server", "port"), Some("9090"));
    assert_eq!(doc.get("server", "workers"), Some("4"));
    assert_eq!(doc.get("server", "verbose"), Some("true"));
    assert_eq!(doc.get("log", "level"), Some("debug"));

    // Existing keys keep their original position; new ones append.
    let server_keys: Vec<_> = doc.section("server").unwrap().keys().collect();
    assert_eq!(server_keys, ["host", "port", "workers", "verbose"]);
}

#[test]
fn test_merge_accepts_plain_maps() {
    let mut doc = Document::new();

    let nested = HashMap::from([("auth", HashMap::from([("enabled", "true")]))]);
    doc.merge(&nested).unwrap();
    assert_eq!(doc.get("auth", "enabled"), Some("true"));

    // IndexMap sources keep their section order.
    let mut ordered = IndexMap::new();
    ordered.insert("zeta", IndexMap::from([("k", 1)]));
    ordered.insert("alpha", IndexMap::from([("k", 2)]));
    doc.merge(&ordered).unwrap();
    assert_eq!(
        doc.section_names().collect::<Vec<_>>(),
        ["auth", "zeta", "alpha"]
    );
}

#[test]
fn test_merge_stringifies_scalars() {
    let mut doc = Document::new();
    let source = HashMap::from([(
        "types",
        HashMap::from([
            ("int", serde_json::json!(42)),
            ("float", serde_json::json!(2.5)),
            ("bool", serde_json::json!(false)),
            ("text", serde_json::json!("plain")),
        ]),
    )]);
    doc.merge(&source).unwrap();

    assert_eq!(doc.get("types", "int"), Some("42"));
    assert_eq!(doc.get("types", "float"), Some("2.5"));
    assert_eq!(doc.get("types", "bool"), Some("false"));
    assert_eq!(doc.get("types", "text"), Some("plain"));
}

#[test]
fn test_merge_rejects_wrong_shapes() {
    let mut doc = Document::new();

    let err = doc.merge(&42).unwrap_err();
    assert_eq!(err.to_string(), "cannot merge an integer into a document");

    let err = doc.merge(&vec![1, 2, 3]).unwrap_err();
    assert_eq!(err.to_string(), "cannot merge a sequence into a document");

    // A one-level map: section values must themselves be maps.
    let flat = HashMap::from([("k", "v")]);
    let err = doc.merge(&flat).unwrap_err();
    assert!(matches!(err, Error::MergeIncompatible { .. }));

    // A three-level map: parameter values must be scalars.
    let deep = HashMap::from([("a", HashMap::from([("b", HashMap::from([("c", "d")]))]))]);
    let err = doc.merge(&deep).unwrap_err();
    assert!(matches!(err, Error::MergeIncompatible { .. }));

    // A failed merge leaves the document untouched.
    assert!(doc.is_empty());
}

#[test]
fn test_merged_leaves_original_alone() {
    let base = parse_str("[a]\nk = old\n").unwrap();
    let layer = parse_str("[a]\nk = new\n").unwrap();

    let combined = base.merged(&layer).unwrap();
    assert_eq!(base.get("a", "k"), Some("old"));
    assert_eq!(combined.get("a", "k"), Some("new"));
}

#[test]
fn test_merge_from_json_value() {
    let mut doc = parse_str("[server]\nhost = localhost\n").unwrap();
    let patch = serde_json::json!({
        "server": { "port": 9090, "tls": true }
    });
    doc.merge(&patch).unwrap();

    assert_eq!(doc.get("server", "host"), Some("localhost"));
    assert_eq!(doc.get("server", "port"), Some("9090"));
    assert_eq!(doc.get("server", "tls"), Some("true"));
}

#[test]
fn test_document_serializes_as_nested_maps() {
    let doc = parse_str("[server]\nhost = localhost\nport = 8080\n").unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(json, r#"{"server":{"host":"localhost","port":"8080"}}"#);
}

#[test]
fn test_document_deserializes_from_json() {
    let json = r#"{"server":{"host":"localhost"},"log":{"level":"debug"}}"#;
    let doc: Document = serde_json::from_str(json).unwrap();

    assert_eq!(doc.section_names().collect::<Vec<_>>(), ["server", "log"]);
    assert_eq!(doc.get("log", "level"), Some("debug"));

    // And straight back out.
    let roundtrip: Document = serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
    assert_eq!(doc, roundtrip);
}

#[test]
fn test_load_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");

    let doc = parse_str(APP_CONFIG).unwrap();
    doc.save(&path).unwrap();

    let loaded = Document::load(&path).unwrap().expect("file exists");
    assert_eq!(loaded, doc);
    assert_eq!(fs::read_to_string(&path).unwrap(), doc.to_string());
}

#[test]
fn test_load_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("nope.ini");
    assert!(Document::load(&absent).unwrap().is_none());
}

#[test]
fn test_load_with_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colon.ini");
    fs::write(&path, "[db]\nhost: localhost\n").unwrap();

    let options = Options::new().with_separator(':');
    let doc = Document::load_with_options(&path, options)
        .unwrap()
        .expect("file exists");
    assert_eq!(doc.get("db", "host"), Some("localhost"));
}

#[test]
fn test_save_failure_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // The directory itself is not a writable file path.
    let err = parse_str(APP_CONFIG).unwrap().save(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_frozen_document_reads_like_a_document() {
    let frozen = parse_str(APP_CONFIG).unwrap().freeze();

    assert_eq!(frozen.get("server", "host"), Some("localhost"));
    assert_eq!(frozen.len(), 3);
    assert!(frozen.has_section("log"));
    assert_eq!(frozen.to_string(), frozen.thaw().to_string());
}

#[test]
fn test_frozen_document_equality_with_document() {
    let doc = parse_str(APP_CONFIG).unwrap();
    let frozen = doc.clone().freeze();

    assert_eq!(frozen, doc);
    assert_eq!(doc, frozen);

    let mut thawed = frozen.thaw();
    thawed.set("server", "port", "1");
    assert_ne!(thawed, doc);
}

#[test]
fn test_equality_is_content_based() {
    let a = parse_str("[s]\nk = v\n").unwrap();
    let options = Options::new().with_separator(':').with_comment("!");
    let mut b = Document::with_options(options);
    b.set("s", "k", "v");

    // Same sections and values; options play no part.
    assert_eq!(a, b);

    b.set("s", "k", "other");
    assert_ne!(a, b);
}

#[test]
fn test_section_handling() {
    let mut doc = parse_str(APP_CONFIG).unwrap();

    // Auto-vivification: asking for a section mutably creates it.
    doc.section_mut("cache").insert("ttl".to_string(), "60".to_string());
    assert_eq!(doc.get("cache", "ttl"), Some("60"));

    // Wholesale replacement returns the old body.
    let mut replacement = Section::new();
    replacement.insert("level".to_string(), "warn".to_string());
    let old = doc.set_section("log", replacement).expect("log existed");
    assert_eq!(old.get("level"), Some("info"));
    assert_eq!(doc.get("log", "level"), Some("warn"));

    let removed = doc.remove_section("database").expect("database existed");
    assert_eq!(removed.get("pool"), Some("16"));
    assert!(!doc.has_section("database"));

    let names: Vec<_> = doc.filter_sections(|name| name.len() > 3);
    assert!(names.iter().any(|(name, _)| name == "cache"));
    assert!(!names.iter().any(|(name, _)| name == "log"));
}

#[test]
fn test_properties_iteration() {
    let doc = parse_str(APP_CONFIG).unwrap();
    let triples: Vec<_> = doc.properties().collect();

    assert_eq!(triples.len(), 5);
    assert_eq!(triples[0], ("server", "host", "localhost"));
    assert_eq!(triples[4], ("log", "level", "info"));
}
