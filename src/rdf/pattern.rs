//! Partial quad patterns used by the statement-level REST calls

use super::types::{Iri, MalformedTriple, Term, TripleField};
use crate::sparql::encode::url_param;

/// Quad pattern with any subset of positions bound.
///
/// Encoded as `s=`, `p=`, `o=` and `c=` URL parameters; every entry of
/// `graphs` adds one more `c=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialGraphPattern {
    pub subject: Option<Iri>,
    pub predicate: Option<Iri>,
    pub object: Option<Term>,
    pub graph: Option<Iri>,
    pub graphs: Vec<Iri>,
}

impl PartialGraphPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(mut self, subject: impl Into<Iri>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn predicate(mut self, predicate: impl Into<Iri>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    pub fn object(mut self, object: impl Into<Term>) -> Self {
        self.object = Some(object.into());
        self
    }

    pub fn graph(mut self, graph: impl Into<Iri>) -> Self {
        self.graph = Some(graph.into());
        self
    }

    pub fn graphs<I, T>(mut self, graphs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Iri>,
    {
        self.graphs = graphs.into_iter().map(Into::into).collect();
        self
    }

    /// Bound positions must hold non-empty IRIs
    pub fn validate(&self) -> Result<(), MalformedTriple> {
        let invalid = |field| MalformedTriple {
            value: format!("{:?}", self),
            field,
        };

        if self.subject.as_ref().is_some_and(Iri::is_empty) {
            return Err(invalid(TripleField::Subject));
        }
        if self.predicate.as_ref().is_some_and(Iri::is_empty) {
            return Err(invalid(TripleField::Predicate));
        }
        if self.object.as_ref().is_some_and(|o| !o.is_valid()) {
            return Err(invalid(TripleField::Object));
        }
        if self.graph.as_ref().is_some_and(Iri::is_empty) || self.graphs.iter().any(Iri::is_empty) {
            return Err(invalid(TripleField::Graph));
        }
        Ok(())
    }

    /// True when nothing is bound, i.e. the pattern matches every statement
    pub fn is_unbounded(&self) -> bool {
        self.subject.is_none()
            && self.predicate.is_none()
            && self.object.is_none()
            && self.graph.is_none()
            && self.graphs.is_empty()
    }

    /// `s=..&p=..&o=..&c=..` with values percent-encoded
    pub fn to_query_params(&self) -> String {
        let mut params = Vec::new();

        if let Some(subject) = &self.subject {
            params.push(url_param("s", subject.as_str()));
        }
        if let Some(predicate) = &self.predicate {
            params.push(url_param("p", predicate.as_str()));
        }
        if let Some(object) = &self.object {
            params.push(url_param("o", &object.to_string()));
        }
        if let Some(graph) = &self.graph {
            params.push(url_param("c", graph.as_str()));
        }
        for graph in &self.graphs {
            params.push(url_param("c", graph.as_str()));
        }

        params.join("&")
    }
}
