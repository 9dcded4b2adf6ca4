/// Builds a [`Document`](crate::Document) from literal sections and
/// parameters.
///
/// Section and parameter names are `&str` expressions; values may be any
/// expression with a `to_string()` form, so numbers and booleans work
/// directly. Listing a section name twice extends the first occurrence,
/// matching parser behavior.
///
/// # Examples
///
/// ```
/// use inidoc::ini;
///
/// let doc = ini! {
///     "server" => {
///         "host" => "localhost",
///         "port" => 8080,
///     },
///     "auth" => {
///         "enabled" => true,
///     },
/// };
///
/// assert_eq!(doc.get("server", "port"), Some("8080"));
/// assert_eq!(doc.get("auth", "enabled"), Some("true"));
/// ```
#[macro_export]
macro_rules! ini {
    // Handle empty document
    () => {
        $crate::Document::new()
    };

    // Handle sections of parameters; an empty brace list still creates
    // the section
    ( $( $section:expr => { $( $key:expr => $value:expr ),* $(,)? } ),* $(,)? ) => {{
        let mut document = $crate::Document::new();
        $(
            let _ = document.section_mut($section);
            $(
                document
                    .section_mut($section)
                    .insert($key.to_string(), $value.to_string());
            )*
        )*
        document
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_ini_macro_empty() {
        let doc = ini!();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_ini_macro_sections() {
        let doc = ini! {
            "server" => {
                "host" => "localhost",
                "port" => 8080,
            },
            "features" => {},
        };

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("server", "host"), Some("localhost"));
        assert_eq!(doc.get("server", "port"), Some("8080"));
        assert!(doc.section("features").is_some_and(|s| s.is_empty()));
    }

    #[test]
    fn test_ini_macro_repeated_section_extends() {
        let doc = ini! {
            "a" => { "one" => 1 },
            "a" => { "two" => 2 },
        };

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("a", "one"), Some("1"));
        assert_eq!(doc.get("a", "two"), Some("2"));
    }

    #[test]
    fn test_ini_macro_formats_like_parser_output() {
        let doc = ini! {
            "log" => { "level" => "debug" },
        };

        assert_eq!(doc.to_string(), "[log]\nlevel = debug\n\n");
    }
}
