//! Blazer
//!
//! Client-side query construction for Blazegraph-style SPARQL endpoints.
//! Blazer builds queries, formats them for the HTTP protocol and parses the
//! textual responses; it does not store or evaluate anything itself.
//!
//! # Components
//!
//! - [`sparql::UpdateQuery`]: incremental builder that groups inserts and
//!   deletes by subject, mints variables for "delete any value" patterns
//!   and renders one composite `DELETE { } INSERT { }` update
//! - [`sparql!`] / [`sparql::format_template`]: whitespace normalization
//!   for hand-written query text
//! - [`rdf`]: triple, quad and pattern records with shape validation, plus
//!   TriG / N-Quads reading and writing
//! - [`sparql::results`]: SPARQL JSON bindings, commit statistics,
//!   existence checks
//! - [`config::BlazegraphConfig`]: endpoint location
//!
//! The HTTP transport lives in the `blazer-sdk` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use blazer::rdf::{DeleteTriple, Triple, UpdateTriple};
//! use blazer::sparql::UpdateQuery;
//!
//! let mut query = UpdateQuery::new();
//! query
//!     .add_prefix("rdf", "http://rdf")
//!     .with_graph("http://mygraph");
//!
//! query.delete(DeleteTriple::new(":s", ":p", ":o2")).unwrap();
//! query.insert(Triple::new(":s", ":p", ":o1")).unwrap();
//!
//! assert_eq!(
//!     query.serialize(),
//!     "PREFIX rdf: <http://rdf>\nWITH http://mygraph\nDELETE { :s :p :o2 . }\nINSERT { :s :p :o1 . }"
//! );
//!
//! // Updates remove the old value and add the new one
//! query.update(UpdateTriple::new(":s", ":q", ":new", ":old")).unwrap();
//! assert!(query.serialize().contains(":q :old"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod rdf;
pub mod sparql;

// Re-export main types for convenience
pub use config::{BlazegraphConfig, ConfigError, ConfigResult};

pub use rdf::{
    RdfError, RdfResult,
    Iri, Literal, Variable, Term,
    Triple, DeleteTriple, UpdateTriple, Quad, UpdateQuad,
    PartialGraphPattern, TripleField, MalformedTriple,
    RdfFormat, ParseError, ParseResult,
};

pub use sparql::{
    UpdateQuery, UpdateError, UpdateResult,
    CommitStats, BindingResult, BindingValue, SparqlQueryResults,
    ResultsError, ResultsResult,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
