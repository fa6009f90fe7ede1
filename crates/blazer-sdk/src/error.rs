//! Error types for the Blazer SDK

use blazer::config::ConfigError;
use blazer::rdf::{MalformedTriple, ParseError};
use blazer::sparql::ResultsError;
use thiserror::Error;

/// Errors that can occur when talking to the endpoint
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid endpoint configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input record failed validation; no request was sent
    #[error("Invalid input: {0}")]
    Validation(#[from] MalformedTriple),

    /// Query text was empty
    #[error("Query must be a non-empty string")]
    EmptyQuery,

    /// Pattern with nothing bound passed to a delete
    #[error("Refusing to delete with an empty pattern: it would match the whole database")]
    UnboundedDelete,

    /// Endpoint answered with a status other than 200
    #[error("Endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be interpreted
    #[error("Response error: {0}")]
    Results(#[from] ResultsError),

    /// RDF response body could not be parsed
    #[error("RDF parse error: {0}")]
    Parse(#[from] ParseError),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
