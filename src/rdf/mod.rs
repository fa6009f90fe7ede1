//! RDF data model for query construction
//!
//! This module provides the triple/quad records the update builder and the
//! endpoint client exchange:
//! - IRIs kept as query-ready tokens (`:s`, `rdf:type`, `<http://...>`)
//! - Literals and variables backed by oxrdf
//! - Triple, delete/update triple and quad records with shape validation
//! - Partial quad patterns for the statement-level REST calls
//! - TriG / N-Quads reading and writing
//!
//! # Example
//!
//! ```rust
//! use blazer::rdf::{Iri, Literal, Triple, TripleField};
//!
//! let triple = Triple::new(":alice", "foaf:name", Literal::new_simple_literal("Alice"));
//! assert!(triple.validate().is_ok());
//! assert_eq!(triple.to_string(), ":alice foaf:name \"Alice\"");
//!
//! let broken = Triple::new("", "foaf:name", ":x");
//! assert_eq!(broken.validate().unwrap_err().field, TripleField::Subject);
//!
//! assert!(Iri::new("").is_err());
//! ```

mod types;
mod pattern;
pub mod serialization;

pub use types::{
    RdfError, RdfResult,
    Iri, Literal, Variable, Term,
    Triple, DeleteTriple, UpdateTriple, Quad, UpdateQuad,
    TripleField, MalformedTriple,
};

pub use pattern::PartialGraphPattern;

pub use serialization::{
    RdfFormat, ParseError, ParseResult,
    parse_quads, serialize_quad, serialize_quads,
};
