//! Layering configuration from several sources with merge.
//!
//! Run with: cargo run --example merge

use inidoc::{ini, Document};
use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;

#[derive(Serialize)]
struct ServerFlags {
    host: &'static str,
    workers: u16,
}

#[derive(Serialize)]
struct Flags {
    server: ServerFlags,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Baseline defaults, built in code
    let mut doc = ini! {
        "server" => {
            "host" => "localhost",
            "port" => 8080,
        },
        "log" => {
            "level" => "info",
        },
    };

    // Layer a config file on top
    let file = Document::parse("[log]\nlevel = debug\n\n[server]\nport = 9090\n")?;
    doc.merge(&file)?;

    // Layer a derived struct, e.g. parsed CLI flags
    let flags = Flags {
        server: ServerFlags {
            host: "0.0.0.0",
            workers: 4,
        },
    };
    doc.merge(&flags)?;

    // Layer a plain map, e.g. collected environment overrides
    let env = HashMap::from([("log", HashMap::from([("level", "trace")]))]);
    doc.merge(&env)?;

    println!("{}", doc);

    assert_eq!(doc.get("server", "host"), Some("0.0.0.0"));
    assert_eq!(doc.get("server", "port"), Some("9090"));
    assert_eq!(doc.get("server", "workers"), Some("4"));
    assert_eq!(doc.get("log", "level"), Some("trace"));
    println!("✓ Layers applied in order");

    Ok(())
}
