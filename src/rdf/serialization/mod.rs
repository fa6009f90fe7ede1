//! RDF serialization formats
//!
//! Supports:
//! - TriG (request bodies for statement creation, `GETSTMTS` responses)
//! - N-Quads (`GETSTMTS` responses)

mod trig;

pub use trig::{parse_quads, serialize_quad, serialize_quads};

use thiserror::Error;

/// Quad serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// TriG format (.trig); plain Turtle and N-Triples parse as TriG too
    TriG,
    /// N-Quads format (.nq)
    NQuads,
}

impl RdfFormat {
    /// MIME type sent in `Content-Type` / `Accept` headers
    pub fn mime_type(&self) -> &'static str {
        match self {
            RdfFormat::TriG => "application/x-trig; charset=utf-8",
            RdfFormat::NQuads => "text/x-nquads",
        }
    }

    /// Guess the format from a response `Content-Type`, defaulting to TriG
    pub fn from_content_type(content_type: &str) -> Self {
        let content_type = content_type.to_ascii_lowercase();
        if content_type.contains("nquads") || content_type.contains("n-quads") {
            RdfFormat::NQuads
        } else {
            RdfFormat::TriG
        }
    }
}

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// Syntax error reported by the TriG / N-Quads parser
    #[error("Parse error: {0}")]
    Syntax(#[from] rio_turtle::TurtleError),

    /// Term the data model cannot hold (e.g. RDF-star quoted triples)
    #[error("Unsupported term: {0}")]
    Unsupported(String),

    /// Literal rejected while converting
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),
}

pub type ParseResult<T> = Result<T, ParseError>;
