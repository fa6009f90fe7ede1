//! Whitespace normalization for hand-written SPARQL text
//!
//! Query text embedded in Rust source is usually indented to match the
//! surrounding code. [`normalize`] strips that indentation so the endpoint
//! (and the logs) see one canonical string:
//!
//! ```rust
//! use blazer::sparql;
//!
//! let object = "?o";
//! let query = sparql!("
//!     select * from {{?s ?p {}}}
//! ", object);
//! assert_eq!(query, "select * from {?s ?p ?o}");
//! ```

use regex::Regex;
use std::sync::LazyLock;

static LEADING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\n ]+").expect("valid leading pattern"));

static LINE_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n +").expect("valid indent pattern"));

/// Apply the three normalization passes, in order:
/// leading newlines/spaces, per-line indentation, one trailing newline.
///
/// Only the indentation after each newline is removed; blank lines between
/// indented lines are kept (`"a\n\n    b"` becomes `"a\n\nb"`).
pub fn normalize(text: &str) -> String {
    let text = LEADING_WHITESPACE.replace(text, "");
    let mut text = LINE_INDENT.replace_all(&text, "\n").into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Interleave template fragments with substitution values, then normalize.
///
/// Fragments and values alternate strictly (`parts[0]`, `values[0]`,
/// `parts[1]`, ...). Values are inserted verbatim. A missing value is
/// treated as empty and values past `parts.len() - 1` are ignored.
pub fn format_template<P, V>(parts: &[P], values: &[V]) -> String
where
    P: AsRef<str>,
    V: AsRef<str>,
{
    let mut text = String::new();
    for (i, part) in parts.iter().enumerate() {
        text.push_str(part.as_ref());
        if i + 1 < parts.len() {
            if let Some(value) = values.get(i) {
                text.push_str(value.as_ref());
            }
        }
    }
    normalize(&text)
}

/// `format!`-style SPARQL template: interpolates the arguments and runs the
/// result through [`normalize`](crate::sparql::template::normalize).
#[macro_export]
macro_rules! sparql {
    ($($arg:tt)*) => {
        $crate::sparql::template::normalize(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_VALUES: [&str; 0] = [];

    #[test]
    fn test_blank_lines_kept() {
        assert_eq!(normalize("a\n\n    b"), "a\n\nb");
        assert_eq!(normalize("\n  select *\n\n  where { ?s ?p ?o }\n"), "select *\n\nwhere { ?s ?p ?o }");
    }

    #[test]
    fn test_clean_input_unchanged() {
        let q = "select * from {?s ?p ?o}";
        assert_eq!(format_template(&[q], &NO_VALUES), q);
    }

    #[test]
    fn test_strips_indentation_and_final_newline() {
        let q = format_template(&["\n  select * from {?s ?p ?o}\n"], &NO_VALUES);
        assert_eq!(q, "select * from {?s ?p ?o}");
    }

    #[test]
    fn test_multiline_indent_collapsed() {
        let text = "
            prefix test: <http://example.com/>
            insert data { test:JohnDoe a test:Person }
        ";
        assert_eq!(
            normalize(text),
            "prefix test: <http://example.com/>\ninsert data { test:JohnDoe a test:Person }"
        );
    }

    #[test]
    fn test_values_interleaved_in_order() {
        let q = format_template(&["select ", " { ", " ?p ?o }"], &["?s", "?s"]);
        assert_eq!(q, "select ?s { ?s ?p ?o }");
    }

    #[test]
    fn test_values_inserted_verbatim() {
        let q = format_template(&["a ", " b"], &["\"quoted\" <x>"]);
        assert_eq!(q, "a \"quoted\" <x> b");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(format_template(&[""], &NO_VALUES), "");
        assert_eq!(format_template(&["\n   \n  "], &NO_VALUES), "");
        let empty: [&str; 0] = [];
        assert_eq!(format_template(&empty, &NO_VALUES), "");
    }

    #[test]
    fn test_only_one_trailing_newline_removed() {
        assert_eq!(normalize("a\n\n"), "a\n");
    }

    #[test]
    fn test_extra_values_ignored() {
        assert_eq!(format_template(&["x"], &["unused"]), "x");
    }

    #[test]
    fn test_macro() {
        let graph = "<http://g>";
        let q = sparql!(
            "
            select * {{
              graph {} {{ ?s ?p ?o }}
            }}
        ",
            graph
        );
        assert_eq!(q, "select * {\ngraph <http://g> { ?s ?p ?o }\n}");
    }

    #[test]
    fn test_pure() {
        let text = "\n  a\n    b\n";
        assert_eq!(normalize(text), normalize(text));
        assert_eq!(normalize(text), "a\nb");
    }
}
