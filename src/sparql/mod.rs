//! SPARQL query construction
//!
//! - [`template`]: whitespace normalization for hand-written query text
//!   (and the [`sparql!`](crate::sparql!) macro)
//! - [`update`]: incremental builder for composite DELETE/INSERT updates
//! - [`encode`]: URL encoding of query text and parameters
//! - [`results`]: parsing of SELECT results, commit statistics and
//!   existence checks
//!
//! # Example
//!
//! ```rust
//! use blazer::rdf::{DeleteTriple, Triple};
//! use blazer::sparql::UpdateQuery;
//!
//! let mut query = UpdateQuery::new();
//! query.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
//! query.delete(DeleteTriple::any_object(":alice", "foaf:nick")).unwrap();
//! query.insert(Triple::new(":alice", "foaf:nick", ":ally")).unwrap();
//!
//! assert_eq!(
//!     query.serialize(),
//!     "PREFIX foaf: <http://xmlns.com/foaf/0.1/>\n\
//!      DELETE { :alice foaf:nick ?x1 . }\n\
//!      INSERT { :alice foaf:nick :ally . }\n\
//!      OPTIONAL { :alice foaf:nick ?x1 }"
//! );
//! ```

pub mod encode;
pub mod results;
pub mod template;
pub mod update;

pub use encode::{encode_query, url_param};
pub use results::{
    parse_commit_stats, parse_pattern_existence, BindingResult, BindingValue, CommitStats,
    ResultsError, ResultsResult, SparqlQueryResults,
};
pub use template::{format_template, normalize};
pub use update::{UpdateError, UpdateQuery, UpdateResult};
