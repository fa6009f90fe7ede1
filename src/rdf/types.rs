//! RDF type definitions
//!
//! Identifiers are kept as the exact text that ends up in query strings
//! (`:s`, `rdf:type`, `<http://example.org/a>`), while literals and
//! variables wrap the oxrdf primitives so they always render as valid
//! N-Triples / SPARQL terms.

use oxrdf::{Literal as OxLiteral, NamedNode as OxNamedNode, Variable as OxVariable};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// RDF errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdfError {
    /// An IRI-typed field was an empty string
    #[error("IRI cannot be empty string")]
    EmptyIri,

    /// Invalid literal (bad language tag or datatype)
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),

    /// Invalid variable name
    #[error("Invalid variable: {0}")]
    InvalidVariable(String),
}

pub type RdfResult<T> = Result<T, RdfError>;

/// IRI token as written in query text: a full `<...>` reference, a prefixed
/// name, or any other identifier the endpoint understands.
///
/// [`Iri::new`] is the checked constructor. The `From` conversions skip the
/// check; records built from them are validated again when handed to the
/// update builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Create a new IRI, rejecting the empty string
    pub fn new(iri: impl Into<String>) -> RdfResult<Self> {
        let iri = iri.into();
        if iri.is_empty() {
            return Err(RdfError::EmptyIri);
        }
        Ok(Self(iri))
    }

    /// Get the IRI text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wrap a full IRI in angle brackets, e.g. `http://a` → `<http://a>`
    pub fn from_full(iri: &str) -> Self {
        Self(format!("<{}>", iri))
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self(iri.to_string())
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

impl<'de> Deserialize<'de> for Iri {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let iri = String::deserialize(deserializer)?;
        Iri::new(iri).map_err(serde::de::Error::custom)
    }
}

/// RDF literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    /// Create a simple literal (plain string)
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self(OxLiteral::new_simple_literal(value))
    }

    /// Create a literal with language tag
    pub fn new_language_tagged_literal(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> RdfResult<Self> {
        OxLiteral::new_language_tagged_literal(value, language)
            .map(Self)
            .map_err(|e| RdfError::InvalidLiteral(e.to_string()))
    }

    /// Create a typed literal; `datatype` is a full IRI without brackets
    pub fn new_typed_literal(value: impl Into<String>, datatype: &str) -> RdfResult<Self> {
        let datatype =
            OxNamedNode::new(datatype).map_err(|e| RdfError::InvalidLiteral(e.to_string()))?;
        Ok(Self(OxLiteral::new_typed_literal(value, datatype)))
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        self.0.value()
    }

    /// Get the language tag if present
    pub fn language(&self) -> Option<&str> {
        self.0.language()
    }

    /// Get the datatype IRI
    pub fn datatype(&self) -> &str {
        self.0.datatype().as_str()
    }

    /// Get the inner oxrdf Literal
    pub fn inner(&self) -> &OxLiteral {
        &self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<OxLiteral> for Literal {
    fn from(lit: OxLiteral) -> Self {
        Self(lit)
    }
}

impl From<Literal> for OxLiteral {
    fn from(lit: Literal) -> Self {
        lit.0
    }
}

/// SPARQL variable (`?name`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable(OxVariable);

impl Variable {
    /// Create a variable from its name (without the leading `?`)
    pub fn new(name: impl Into<String>) -> RdfResult<Self> {
        OxVariable::new(name)
            .map(Self)
            .map_err(|e| RdfError::InvalidVariable(e.to_string()))
    }

    /// `?x<n>`, the name minted for unbound deletions
    pub(crate) fn synthesized(n: u64) -> Self {
        Self(OxVariable::new_unchecked(format!("x{}", n)))
    }

    /// Name without the leading `?`
    pub fn name(&self) -> &str {
        self.0.as_str()
    }

    /// True for `x` followed by digits only, the shape of minted names
    pub fn is_reserved(&self) -> bool {
        self.name()
            .strip_prefix('x')
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Object position of a triple: IRI, literal or variable.
///
/// Variables named `x<digits>` are reserved for the ones the update builder
/// mints; the builder rejects caller-supplied ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// IRI token
    Iri(Iri),
    /// Literal value
    Literal(Literal),
    /// Query variable
    Variable(Variable),
}

impl Term {
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// The variable, when it uses a reserved `x<digits>` name
    pub fn reserved_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(v) if v.is_reserved() => Some(v),
            _ => None,
        }
    }

    /// Literals and variables are always well-formed; IRIs must be non-empty
    pub fn is_valid(&self) -> bool {
        match self {
            Term::Iri(iri) => !iri.is_empty(),
            Term::Literal(_) | Term::Variable(_) => true,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(i) => write!(f, "{}", i),
            Term::Literal(l) => write!(f, "{}", l),
            Term::Variable(v) => write!(f, "{}", v),
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<&str> for Term {
    fn from(iri: &str) -> Self {
        Term::Iri(iri.into())
    }
}

impl From<String> for Term {
    fn from(iri: String) -> Self {
        Term::Iri(iri.into())
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

impl From<Variable> for Term {
    fn from(var: Variable) -> Self {
        Term::Variable(var)
    }
}

/// Field of a triple-shaped record, used to report validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripleField {
    Subject,
    Predicate,
    Object,
    OldObject,
    Graph,
}

impl fmt::Display for TripleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TripleField::Subject => "subject",
            TripleField::Predicate => "predicate",
            TripleField::Object => "object",
            TripleField::OldObject => "old_object",
            TripleField::Graph => "graph",
        };
        f.write_str(name)
    }
}

/// A triple or quad that failed shape validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed triple {value}: invalid {field}")]
pub struct MalformedTriple {
    /// Rendering of the offending record
    pub value: String,
    /// Which field was invalid
    pub field: TripleField,
}

impl MalformedTriple {
    fn new(value: &impl fmt::Debug, field: TripleField) -> Self {
        Self {
            value: format!("{:?}", value),
            field,
        }
    }
}

fn check_iri(
    record: &impl fmt::Debug,
    iri: &Iri,
    field: TripleField,
) -> Result<(), MalformedTriple> {
    if iri.is_empty() {
        return Err(MalformedTriple::new(record, field));
    }
    Ok(())
}

fn check_term(
    record: &impl fmt::Debug,
    term: &Term,
    field: TripleField,
) -> Result<(), MalformedTriple> {
    if !term.is_valid() {
        return Err(MalformedTriple::new(record, field));
    }
    Ok(())
}

/// RDF triple (subject-predicate-object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Iri,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(subject: impl Into<Iri>, predicate: impl Into<Iri>, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Check that every position holds a well-formed term
    pub fn validate(&self) -> Result<(), MalformedTriple> {
        check_iri(self, &self.subject, TripleField::Subject)?;
        check_iri(self, &self.predicate, TripleField::Predicate)?;
        check_term(self, &self.object, TripleField::Object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// Triple whose object may be left out to match any value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeleteTriple {
    pub subject: Iri,
    pub predicate: Iri,
    pub object: Option<Term>,
}

impl DeleteTriple {
    /// Delete one specific statement
    pub fn new(subject: impl Into<Iri>, predicate: impl Into<Iri>, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: Some(object.into()),
        }
    }

    /// Delete every object of `subject predicate`
    pub fn any_object(subject: impl Into<Iri>, predicate: impl Into<Iri>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: None,
        }
    }

    pub fn validate(&self) -> Result<(), MalformedTriple> {
        check_iri(self, &self.subject, TripleField::Subject)?;
        check_iri(self, &self.predicate, TripleField::Predicate)?;
        match &self.object {
            Some(object) => check_term(self, object, TripleField::Object),
            None => Ok(()),
        }
    }
}

impl From<Triple> for DeleteTriple {
    fn from(triple: Triple) -> Self {
        Self {
            subject: triple.subject,
            predicate: triple.predicate,
            object: Some(triple.object),
        }
    }
}

/// Replace `old_object` with `object` under the same subject and predicate.
/// Without an old object, every current value is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpdateTriple {
    pub subject: Iri,
    pub predicate: Iri,
    pub object: Term,
    pub old_object: Option<Term>,
}

impl UpdateTriple {
    pub fn new(
        subject: impl Into<Iri>,
        predicate: impl Into<Iri>,
        object: impl Into<Term>,
        old_object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            old_object: Some(old_object.into()),
        }
    }

    /// Replace whatever values `subject predicate` currently has
    pub fn replace_any(
        subject: impl Into<Iri>,
        predicate: impl Into<Iri>,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            old_object: None,
        }
    }

    pub fn validate(&self) -> Result<(), MalformedTriple> {
        check_iri(self, &self.subject, TripleField::Subject)?;
        check_iri(self, &self.predicate, TripleField::Predicate)?;
        check_term(self, &self.object, TripleField::Object)?;
        match &self.old_object {
            Some(old_object) => check_term(self, old_object, TripleField::OldObject),
            None => Ok(()),
        }
    }

    /// Statement that gets inserted
    pub fn new_triple(&self) -> Triple {
        Triple::new(self.subject.clone(), self.predicate.clone(), self.object.clone())
    }

    /// Statement that gets removed; no object means any value
    pub fn old_triple(&self) -> DeleteTriple {
        DeleteTriple {
            subject: self.subject.clone(),
            predicate: self.predicate.clone(),
            object: self.old_object.clone(),
        }
    }
}

/// RDF quad (triple + named graph)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    pub subject: Iri,
    pub predicate: Iri,
    pub object: Term,
    /// Named graph; `None` for the default graph
    pub graph: Option<Iri>,
}

impl Quad {
    /// Create a quad in a named graph
    pub fn new(
        subject: impl Into<Iri>,
        predicate: impl Into<Iri>,
        object: impl Into<Term>,
        graph: impl Into<Iri>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: Some(graph.into()),
        }
    }

    /// Create a quad in the default graph
    pub fn from_triple(triple: Triple) -> Self {
        Self {
            subject: triple.subject,
            predicate: triple.predicate,
            object: triple.object,
            graph: None,
        }
    }

    pub fn triple(&self) -> Triple {
        Triple::new(self.subject.clone(), self.predicate.clone(), self.object.clone())
    }

    pub fn validate(&self) -> Result<(), MalformedTriple> {
        check_iri(self, &self.subject, TripleField::Subject)?;
        check_iri(self, &self.predicate, TripleField::Predicate)?;
        check_term(self, &self.object, TripleField::Object)?;
        match &self.graph {
            Some(graph) => check_iri(self, graph, TripleField::Graph),
            None => Ok(()),
        }
    }
}

/// Quad update: replace `old_object` with `object` inside `graph`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpdateQuad {
    pub subject: Iri,
    pub predicate: Iri,
    pub object: Term,
    pub old_object: Term,
    pub graph: Iri,
}

impl UpdateQuad {
    pub fn validate(&self) -> Result<(), MalformedTriple> {
        check_iri(self, &self.subject, TripleField::Subject)?;
        check_iri(self, &self.predicate, TripleField::Predicate)?;
        check_term(self, &self.object, TripleField::Object)?;
        check_term(self, &self.old_object, TripleField::OldObject)?;
        check_iri(self, &self.graph, TripleField::Graph)
    }

    pub fn old_quad(&self) -> Quad {
        Quad::new(
            self.subject.clone(),
            self.predicate.clone(),
            self.old_object.clone(),
            self.graph.clone(),
        )
    }

    pub fn new_quad(&self) -> Quad {
        Quad::new(
            self.subject.clone(),
            self.predicate.clone(),
            self.object.clone(),
            self.graph.clone(),
        )
    }
}
