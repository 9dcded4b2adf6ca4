//! Parsing, reading, and writing a first INI document.
//!
//! Run with: cargo run --example simple

use inidoc::Document;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = r#"
; application settings
[server]
host = localhost
port = 8080

[database]
url = postgres://localhost/app
pool = 16
"#;

    // Parse the text into an ordered document
    let mut doc = Document::parse(text)?;
    println!("Sections: {:?}\n", doc.section_names().collect::<Vec<_>>());

    // Read individual values (always strings)
    println!("server.host = {}", doc.get("server", "host").unwrap_or("?"));
    println!("database.pool = {}\n", doc.get("database", "pool").unwrap_or("?"));

    // Walk every property in order
    println!("All properties:");
    for (section, name, value) in doc.properties() {
        println!("  {}.{} = {}", section, name, value);
    }

    // Edit and render back to INI text
    doc.set("server", "port", "9090");
    doc.set("server", "threads", "8");
    println!("\nWritten back:\n{}", doc);

    assert_eq!(doc.get("server", "port"), Some("9090"));
    println!("✓ Document parsed, edited, and formatted");

    Ok(())
}
