//! SparqlClient trait — the interface to a SPARQL endpoint

use async_trait::async_trait;
use blazer::rdf::{PartialGraphPattern, Quad, UpdateQuad};
use blazer::sparql::{BindingResult, CommitStats, UpdateQuery};

use crate::error::ClientResult;

/// Operations offered by a Blazegraph-style SPARQL endpoint.
///
/// Implemented by `RemoteClient`, which talks HTTP. Every input is
/// validated before a request is issued.
#[async_trait]
pub trait SparqlClient: Send + Sync {
    /// Run a SELECT query and return its solutions
    async fn query(&self, query: &str, with_inferred: bool) -> ClientResult<Vec<BindingResult>>;

    /// Run a SPARQL UPDATE and return the commit statistics
    async fn update(&self, update: &str) -> ClientResult<CommitStats>;

    /// Delete the statements described by a CONSTRUCT or DESCRIBE query
    async fn delete_by_query(&self, query: &str) -> ClientResult<Vec<BindingResult>>;

    /// True if at least one statement matches the pattern
    async fn check_pattern_existence(
        &self,
        pattern: &PartialGraphPattern,
        with_inferred: bool,
    ) -> ClientResult<bool>;

    /// Read every statement matching the pattern
    async fn read_quads(
        &self,
        pattern: &PartialGraphPattern,
        with_inferred: bool,
    ) -> ClientResult<Vec<Quad>>;

    /// Add statements
    async fn create_quads(&self, quads: &[Quad]) -> ClientResult<String>;

    /// Replace one statement's object, knowing the old value
    async fn update_quad(&self, quad: &UpdateQuad) -> ClientResult<String>;

    /// Delete every statement matching the pattern
    async fn delete_quads(&self, pattern: &PartialGraphPattern) -> ClientResult<String>;

    /// Send a built update. Empty builders are skipped and yield `None`.
    async fn execute(&self, query: &UpdateQuery) -> ClientResult<Option<CommitStats>> {
        if query.is_empty() {
            tracing::debug!("{}", query.describe());
            return Ok(None);
        }
        self.update(&query.serialize()).await.map(Some)
    }
}
