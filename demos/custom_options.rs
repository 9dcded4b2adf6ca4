//! Reading dialect variants with custom Options.
//!
//! Run with: cargo run --example custom_options

use inidoc::{Document, Options};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Colon-separated properties, common in unixy config files
    println!("Colon separator:");
    let options = Options::new().with_separator(':');
    let doc = Document::parse_with_options("[paths]\ncache: /var/cache/app\n", options)?;
    println!("{}", doc);

    // A different comment set: only `#`, freeing `;` for values
    println!("Hash comments only:");
    let options = Options::new().with_comment("#");
    let doc = Document::parse_with_options("# note\n[misc]\nlist = a;b;c\n", options)?;
    println!("{}", doc);

    // Properties before any header land in the default section
    println!("Custom default section:");
    let options = Options::new().with_default_section("main");
    let doc = Document::parse_with_options("color = teal\n", options)?;
    println!("{}", doc);

    // Escaping disabled: backslashes travel verbatim
    println!("Escaping disabled:");
    let options = Options::new().with_escape(false);
    let doc = Document::parse_with_options("[win]\ndir = C:\\new\\table\n", options)?;
    assert_eq!(doc.get("win", "dir"), Some("C:\\new\\table"));
    println!("{}", doc);

    Ok(())
}
