//! URL encoding of query text and request parameters

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::LazyLock;

/// Characters left alone by JavaScript's `encodeURIComponent`
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\n)\s*#.*(\n|$)").expect("valid comment pattern"));

static LONG_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t ]+").expect("valid whitespace pattern"));

/// Percent-encode a single URL component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Drop whole-line `#` comments and collapse runs of tabs/spaces.
///
/// A `#` after other text on the same line is kept, since it may be part
/// of an IRI such as `<http://example.org/ns#name>`.
pub fn compact_query(query: &str) -> String {
    let without_comments = LINE_COMMENT.replace_all(query, "");
    LONG_SPACES.replace_all(&without_comments, " ").into_owned()
}

/// Prepare query text for the `query=` / `update=` URL parameter
pub fn encode_query(query: &str) -> String {
    encode_component(&compact_query(query))
}

/// Render a `name=value` URL parameter with the value percent-encoded
pub fn url_param(name: &str, value: &str) -> String {
    format!("{}={}", name, encode_component(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_matches_uri_component_set() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("<http://x#y>"), "%3Chttp%3A%2F%2Fx%23y%3E");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("?s"), "%3Fs");
    }

    #[test]
    fn test_compact_query_collapses_spaces() {
        assert_eq!(compact_query("select  *\t\t{ ?s ?p ?o }"), "select * { ?s ?p ?o }");
    }

    #[test]
    fn test_compact_query_strips_comment_lines() {
        let query = "# leading comment\nselect * {\n  # inner\n  ?s ?p ?o\n}";
        assert_eq!(compact_query(query), "select * { ?s ?p ?o\n}");
    }

    #[test]
    fn test_compact_query_keeps_hash_inside_iri() {
        let query = "select * { ?s <http://x#y> ?o }";
        assert_eq!(compact_query(query), query);
    }

    #[test]
    fn test_url_param() {
        assert_eq!(url_param("s", "<http://a>"), "s=%3Chttp%3A%2F%2Fa%3E");
    }
}
