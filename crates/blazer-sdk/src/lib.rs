//! Blazer SDK — HTTP client for Blazegraph-style SPARQL endpoints
//!
//! - **`RemoteClient`** — connects to a running endpoint over HTTP and
//!   implements the **`SparqlClient`** trait: SELECT queries, updates,
//!   pattern reads/deletes, existence checks and quad creation.
//!
//! Queries are built with the `blazer` crate and handed over as strings;
//! `SparqlClient::execute` sends an `UpdateQuery` directly.
//!
//! # Quick Start
//!
//! ```no_run
//! use blazer_sdk::{RemoteClient, SparqlClient, BlazegraphConfig, UpdateQuery, Triple};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = RemoteClient::from_config(&BlazegraphConfig::default()).unwrap();
//!
//!     let mut update = UpdateQuery::new();
//!     update.insert(Triple::new("<http://ex/alice>", "<http://ex/knows>", "<http://ex/bob>"))
//!         .unwrap();
//!     let stats = client.execute(&update).await.unwrap();
//!     println!("{:?}", stats);
//!
//!     let rows = client.query("select * { ?s ?p ?o } limit 10", false)
//!         .await.unwrap();
//!     println!("Found {} rows", rows.len());
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod remote;

// ============================================================
// Core SDK types
// ============================================================

pub use client::SparqlClient;
pub use remote::RemoteClient;
pub use error::{ClientError, ClientResult};
pub use models::{PayloadOptions, RdfPayload, UpdatePostBody};

// ============================================================
// Query construction types (re-exported from blazer core)
// ============================================================

pub use blazer::config::BlazegraphConfig;
pub use blazer::rdf::{
    Iri, Literal, Term, Triple, DeleteTriple, UpdateTriple, Quad, UpdateQuad,
    PartialGraphPattern,
};
pub use blazer::sparql::{
    UpdateQuery, CommitStats, BindingResult, BindingValue,
    format_template, normalize,
};
pub use blazer::sparql;

// ============================================================
// Version
// ============================================================

pub use blazer::VERSION;
