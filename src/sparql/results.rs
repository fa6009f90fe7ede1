//! Parsing of endpoint responses
//!
//! SELECT results arrive as SPARQL JSON; update and existence checks come
//! back as small HTML/XML fragments that only need a regex.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ResultsError {
    /// Body was not valid SPARQL JSON
    #[error("Invalid SPARQL results: {0}")]
    Json(#[from] serde_json::Error),

    /// Commit response lacked an expected `<p>` fragment
    #[error("Missing {0} fragment in commit response")]
    MissingFragment(&'static str),

    /// Empty response body where content was required
    #[error("Empty response body")]
    EmptyBody,
}

pub type ResultsResult<T> = Result<T, ResultsError>;

/// One bound value inside a solution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingValue {
    /// `uri`, `literal` or `bnode`
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

/// Variable name → bound value for one solution
pub type BindingResult = HashMap<String, BindingValue>;

/// `head` section of SPARQL JSON results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsHead {
    #[serde(default)]
    pub vars: Vec<String>,
}

/// `results` section of SPARQL JSON results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsBody {
    pub bindings: Vec<BindingResult>,
}

/// SPARQL 1.1 JSON results document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SparqlQueryResults {
    pub head: ResultsHead,
    pub results: ResultsBody,
}

impl SparqlQueryResults {
    /// Parse a SPARQL JSON body
    pub fn parse(body: &str) -> ResultsResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn into_bindings(self) -> Vec<BindingResult> {
        self.results.bindings
    }
}

/// Statistics reported by the endpoint after an update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStats {
    /// Query phase timings (`totalElapsed`, `whereClause`, ...)
    pub query: HashMap<String, String>,
    /// Commit phase counters (`commitTime`, `mutationCount`, ...)
    pub update: HashMap<String, String>,
}

impl CommitStats {
    /// Number of statements changed, when the endpoint reports it
    pub fn mutation_count(&self) -> Option<u64> {
        self.update.get("mutationCount")?.parse().ok()
    }
}

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>(.*?)</p\s*>").expect("valid paragraph pattern"));

static COMMIT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^COMMIT:\s+").expect("valid commit pattern"));

static EXISTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<data result="(\w*)""#).expect("valid existence pattern"));

/// Split `k1=v1, k2=v2` into a map; keys and values are trimmed
fn parse_key_values(input: &str) -> HashMap<String, String> {
    input
        .split(',')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (pair.trim().to_string(), String::new()),
        })
        .collect()
}

/// Parse the HTML body returned by an update: the first `<p>` holds query
/// statistics, the second the commit statistics behind a `COMMIT:` label.
pub fn parse_commit_stats(body: &str) -> ResultsResult<CommitStats> {
    if body.is_empty() {
        return Err(ResultsError::EmptyBody);
    }

    let mut fragments = PARAGRAPH
        .captures_iter(body)
        .filter_map(|c| c.get(1).map(|m| m.as_str()));

    let query = fragments.next().ok_or(ResultsError::MissingFragment("query"))?;
    let update = fragments.next().ok_or(ResultsError::MissingFragment("commit"))?;
    let update = COMMIT_PREFIX.replace(update, "");

    Ok(CommitStats {
        query: parse_key_values(query),
        update: parse_key_values(&update),
    })
}

/// Parse the `HASSTMT` response; anything but `result="true"` is false
pub fn parse_pattern_existence(body: &str) -> bool {
    EXISTENCE
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str() == "true")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMIT_BODY: &str = "<html><body>\
        <p>totalElapsed=12ms, elapsed=11ms, connFlush=0ms, batchResolve=0, whereClause=0ms, deleteClause=0ms, insertClause=0ms</p\n>\
        <hr><p>COMMIT: totalElapsed=20ms, commitTime=1612345678901, mutationCount=3</p>\
        </body></html>";

    #[test]
    fn test_parse_commit_stats() {
        let stats = parse_commit_stats(COMMIT_BODY).unwrap();
        assert_eq!(stats.query.get("totalElapsed").map(String::as_str), Some("12ms"));
        assert_eq!(stats.query.get("insertClause").map(String::as_str), Some("0ms"));
        assert_eq!(stats.update.get("commitTime").map(String::as_str), Some("1612345678901"));
        assert_eq!(stats.mutation_count(), Some(3));
    }

    #[test]
    fn test_commit_stats_missing_fragment() {
        let err = parse_commit_stats("<p>totalElapsed=1ms</p>").unwrap_err();
        assert!(matches!(err, ResultsError::MissingFragment("commit")));

        let err = parse_commit_stats("").unwrap_err();
        assert!(matches!(err, ResultsError::EmptyBody));
    }

    #[test]
    fn test_parse_pattern_existence() {
        assert!(parse_pattern_existence(r#"<data result="true" rangeCount="0" milliseconds="1"/>"#));
        assert!(!parse_pattern_existence(r#"<data result="false" milliseconds="1"/>"#));
        assert!(!parse_pattern_existence("<html>nothing</html>"));
    }

    #[test]
    fn test_parse_select_results() {
        let body = r#"{
            "head": {"vars": ["s", "label"]},
            "results": {"bindings": [
                {"s": {"type": "uri", "value": "http://example.com/JohnDoe"},
                 "label": {"type": "literal", "value": "John", "xml:lang": "en"}}
            ]}
        }"#;

        let results = SparqlQueryResults::parse(body).unwrap();
        assert_eq!(results.head.vars, vec!["s", "label"]);

        let bindings = results.into_bindings();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0]["s"].kind, "uri");
        assert_eq!(bindings[0]["s"].value, "http://example.com/JohnDoe");
        assert_eq!(bindings[0]["label"].lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_parse_select_results_rejects_garbage() {
        assert!(matches!(
            SparqlQueryResults::parse("<html/>"),
            Err(ResultsError::Json(_))
        ));
    }
}
