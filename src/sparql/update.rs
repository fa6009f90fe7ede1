//! Incremental SPARQL UPDATE builder
//!
//! An [`UpdateQuery`] accumulates insertions, deletions and updates against
//! a single (optional) graph scope and renders them as one composite update:
//!
//! ```text
//! PREFIX rdf: <http://rdf>
//! WITH http://mygraph
//! DELETE { :s :p :o2 . }
//! INSERT { :s :p :o1 . }
//! ```
//!
//! Deleting without an object deletes every value of `subject predicate`:
//! the builder mints a fresh variable (`?x1`, `?x2`, ...) for the object and
//! binds it with an `OPTIONAL { ... }` line. An update without an old object
//! does the same before inserting the new value. Minted names are never
//! reused, so caller-supplied `?x<digits>` variables are rejected.

use crate::rdf::{DeleteTriple, Iri, MalformedTriple, Term, Triple, UpdateTriple, Variable};
use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Errors raised while recording builder operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// A triple failed shape validation
    #[error(transparent)]
    MalformedTriple(#[from] MalformedTriple),

    /// A caller-supplied variable uses a name the builder mints
    #[error("Variable ?{0} is reserved for generated delete patterns")]
    ReservedVariable(String),
}

pub type UpdateResult<T> = Result<T, UpdateError>;

/// Mutable state of one composite SPARQL update.
///
/// Statements are append-only; serialization is a pure read.
#[derive(Debug, Clone, Default)]
pub struct UpdateQuery {
    prefixes: IndexMap<String, String>,
    graph: Option<Iri>,
    insert_statements: Vec<Triple>,
    delete_statements: Vec<Triple>,
    where_statements: Vec<Triple>,
    variable_counter: u64,
}

impl UpdateQuery {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to a namespace IRI, replacing any previous binding
    pub fn add_prefix(&mut self, name: impl Into<String>, iri: impl Into<String>) -> &mut Self {
        self.prefixes.insert(name.into(), iri.into());
        self
    }

    /// Scope the whole update to one graph. Last call wins; an empty IRI
    /// clears the scope.
    pub fn with_graph(&mut self, iri: impl Into<Iri>) -> &mut Self {
        let iri = iri.into();
        self.graph = if iri.is_empty() { None } else { Some(iri) };
        self
    }

    /// Remove the graph scope
    pub fn clear_graph(&mut self) -> &mut Self {
        self.graph = None;
        self
    }

    /// Record a triple to insert
    pub fn insert(&mut self, triple: Triple) -> UpdateResult<&mut Self> {
        triple.validate()?;
        check_reserved(Some(&triple.object))?;
        self.insert_statements.push(triple);
        Ok(self)
    }

    /// Record a triple to delete. Without an object, every value of
    /// `subject predicate` is deleted.
    pub fn delete(&mut self, triple: DeleteTriple) -> UpdateResult<&mut Self> {
        triple.validate()?;
        check_reserved(triple.object.as_ref())?;
        self.push_delete(triple);
        Ok(self)
    }

    /// Replace `old_object` with `object`; without an old object every
    /// current value is replaced. Both halves are validated before anything
    /// is recorded; the deletion is recorded first.
    pub fn update(&mut self, triple: UpdateTriple) -> UpdateResult<&mut Self> {
        triple.validate()?;
        check_reserved(Some(&triple.object))?;
        check_reserved(triple.old_object.as_ref())?;
        let removed = triple.old_triple();
        let added = triple.new_triple();
        self.push_delete(removed);
        self.insert_statements.push(added);
        Ok(self)
    }

    fn push_delete(&mut self, triple: DeleteTriple) {
        let DeleteTriple {
            subject,
            predicate,
            object,
        } = triple;

        match object {
            Some(object) => {
                self.delete_statements
                    .push(Triple::new(subject, predicate, object));
            }
            None => {
                let variable = self.next_variable();
                trace!(%subject, %predicate, %variable, "unbound delete");
                let resolved = Triple::new(subject, predicate, variable);
                self.where_statements.push(resolved.clone());
                self.delete_statements.push(resolved);
            }
        }
    }

    fn next_variable(&mut self) -> Term {
        self.variable_counter += 1;
        Term::Variable(Variable::synthesized(self.variable_counter))
    }

    /// True when no statement has been recorded. Prefixes and graph scope
    /// alone do not count.
    pub fn is_empty(&self) -> bool {
        self.insert_statements.is_empty()
            && self.delete_statements.is_empty()
            && self.where_statements.is_empty()
    }

    /// Clear all recorded state, including prefixes, graph and the
    /// variable counter
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn prefixes(&self) -> &IndexMap<String, String> {
        &self.prefixes
    }

    pub fn graph(&self) -> Option<&Iri> {
        self.graph.as_ref()
    }

    pub fn insert_statements(&self) -> &[Triple] {
        &self.insert_statements
    }

    pub fn delete_statements(&self) -> &[Triple] {
        &self.delete_statements
    }

    pub fn where_statements(&self) -> &[Triple] {
        &self.where_statements
    }

    /// Render the composite update. Empty blocks are omitted; the remaining
    /// ones appear in the order prefixes, WITH, DELETE, INSERT, OPTIONAL.
    pub fn serialize(&self) -> String {
        let blocks = [
            self.prefixes_block(),
            self.graph_block(),
            wrap_block("DELETE", &self.delete_statements),
            wrap_block("INSERT", &self.insert_statements),
            self.where_block(),
        ];

        blocks
            .into_iter()
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Log-friendly rendering that names the empty case explicitly
    pub fn describe(&self) -> String {
        if self.is_empty() {
            "[Empty SPARQL update query]".to_string()
        } else {
            self.serialize()
        }
    }

    fn prefixes_block(&self) -> String {
        self.prefixes
            .iter()
            .map(|(name, iri)| format!("PREFIX {}: <{}>", name, iri))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn graph_block(&self) -> String {
        match &self.graph {
            Some(graph) => format!("WITH {}", graph),
            None => String::new(),
        }
    }

    fn where_block(&self) -> String {
        self.where_statements
            .iter()
            .map(|t| format!("OPTIONAL {{ {} {} {} }}", t.subject, t.predicate, t.object))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for UpdateQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

fn check_reserved(term: Option<&Term>) -> UpdateResult<()> {
    match term.and_then(Term::reserved_variable) {
        Some(variable) => Err(UpdateError::ReservedVariable(variable.name().to_string())),
        None => Ok(()),
    }
}

/// Subject with its predicate/object pairs in insertion order
struct SubjectGroup<'a> {
    subject: &'a Iri,
    pairs: Vec<(&'a Iri, &'a Term)>,
}

/// Group triples by exact subject text, keeping first-seen subject order
fn group_by_subject(triples: &[Triple]) -> Vec<SubjectGroup<'_>> {
    let mut index: IndexMap<&str, SubjectGroup<'_>> = IndexMap::new();
    for triple in triples {
        index
            .entry(triple.subject.as_str())
            .or_insert_with(|| SubjectGroup {
                subject: &triple.subject,
                pairs: Vec::new(),
            })
            .pairs
            .push((&triple.predicate, &triple.object));
    }
    index.into_values().collect()
}

/// `s p1 o1; p2 o2 .`
fn render_group(group: &SubjectGroup<'_>) -> String {
    let pairs = group
        .pairs
        .iter()
        .map(|(predicate, object)| format!("{} {}", predicate, object))
        .collect::<Vec<_>>()
        .join("; ");
    format!("{} {} .", group.subject, pairs)
}

fn join_groups(groups: &[SubjectGroup<'_>]) -> String {
    groups
        .iter()
        .map(render_group)
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_block(keyword: &str, triples: &[Triple]) -> String {
    if triples.is_empty() {
        return String::new();
    }
    let groups = group_by_subject(triples);
    format!("{} {{ {} }}", keyword, join_groups(&groups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Literal, TripleField};

    #[test]
    fn test_new_builder_is_empty() {
        let query = UpdateQuery::new();
        assert!(query.is_empty());
        assert_eq!(query.serialize(), "");
        assert_eq!(query.describe(), "[Empty SPARQL update query]");
    }

    #[test]
    fn test_prefix_and_graph_do_not_make_non_empty() {
        let mut query = UpdateQuery::new();
        query.add_prefix("rdf", "http://rdf").with_graph("http://g");
        assert!(query.is_empty());
        assert_eq!(query.serialize(), "PREFIX rdf: <http://rdf>\nWITH http://g");
    }

    #[test]
    fn test_add_prefix_overwrites() {
        let mut query = UpdateQuery::new();
        query.add_prefix("ex", "http://old").add_prefix("ex", "http://new");
        assert_eq!(query.prefixes().len(), 1);
        assert_eq!(query.serialize(), "PREFIX ex: <http://new>");
    }

    #[test]
    fn test_with_graph_last_wins_and_empty_clears() {
        let mut query = UpdateQuery::new();
        query.with_graph("http://a").with_graph("http://b");
        assert_eq!(query.graph().map(Iri::as_str), Some("http://b"));

        query.with_graph("");
        assert!(query.graph().is_none());

        query.with_graph("http://c").clear_graph();
        assert!(query.graph().is_none());
    }

    #[test]
    fn test_delete_without_object_mints_variables() {
        let mut query = UpdateQuery::new();
        query.delete(DeleteTriple::any_object(":s", ":p")).unwrap();

        assert_eq!(query.delete_statements().len(), 1);
        assert_eq!(query.delete_statements()[0].object.to_string(), "?x1");
        assert_eq!(query.where_statements().len(), 1);
        assert_eq!(query.where_block(), "OPTIONAL { :s :p ?x1 }");

        query.delete(DeleteTriple::any_object(":s", ":q")).unwrap();
        assert_eq!(query.delete_statements()[1].object.to_string(), "?x2");
        assert_eq!(
            query.where_block(),
            "OPTIONAL { :s :p ?x1 }\nOPTIONAL { :s :q ?x2 }"
        );
    }

    #[test]
    fn test_delete_with_object_adds_no_where() {
        let mut query = UpdateQuery::new();
        query.delete(DeleteTriple::new(":s", ":p", ":o")).unwrap();
        assert!(query.where_statements().is_empty());
        assert_eq!(query.serialize(), "DELETE { :s :p :o . }");
    }

    #[test]
    fn test_insert_groups_by_subject() {
        let mut query = UpdateQuery::new();
        query.insert(Triple::new(":s", ":p", ":o1")).unwrap();
        query.insert(Triple::new(":s", ":p", ":o2")).unwrap();
        assert_eq!(query.serialize(), "INSERT { :s :p :o1; :p :o2 . }");
    }

    #[test]
    fn test_groups_keep_first_seen_subject_order() {
        let mut query = UpdateQuery::new();
        query.insert(Triple::new(":b", ":p", ":o1")).unwrap();
        query.insert(Triple::new(":a", ":p", ":o2")).unwrap();
        query.insert(Triple::new(":b", ":q", ":o3")).unwrap();
        assert_eq!(
            query.serialize(),
            "INSERT { :b :p :o1; :q :o3 .\n:a :p :o2 . }"
        );
    }

    #[test]
    fn test_subject_grouping_is_case_sensitive() {
        let mut query = UpdateQuery::new();
        query.insert(Triple::new(":S", ":p", ":o")).unwrap();
        query.insert(Triple::new(":s", ":p", ":o")).unwrap();
        assert_eq!(query.serialize(), "INSERT { :S :p :o .\n:s :p :o . }");
    }

    #[test]
    fn test_composite_query() {
        let mut query = UpdateQuery::new();
        query
            .add_prefix("rdf", "http://rdf")
            .with_graph("http://mygraph");
        query.delete(DeleteTriple::new(":s", ":p", ":o2")).unwrap();
        query.insert(Triple::new(":s", ":p", ":o1")).unwrap();

        assert_eq!(
            query.serialize(),
            "PREFIX rdf: <http://rdf>\n\
             WITH http://mygraph\n\
             DELETE { :s :p :o2 . }\n\
             INSERT { :s :p :o1 . }"
        );
    }

    #[test]
    fn test_update_records_delete_and_insert() {
        let mut query = UpdateQuery::new();
        query
            .update(UpdateTriple::new(":s", ":p", ":new", ":old"))
            .unwrap();
        assert_eq!(
            query.serialize(),
            "DELETE { :s :p :old . }\nINSERT { :s :p :new . }"
        );
    }

    #[test]
    fn test_update_without_old_object_mints_variable() {
        let mut query = UpdateQuery::new();
        query
            .update(UpdateTriple::replace_any(":s", ":p", ":new"))
            .unwrap();
        assert_eq!(
            query.serialize(),
            "DELETE { :s :p ?x1 . }\nINSERT { :s :p :new . }\nOPTIONAL { :s :p ?x1 }"
        );
    }

    #[test]
    fn test_reserved_variable_rejected() {
        let minted_name = Variable::new("x1").unwrap();
        let mut query = UpdateQuery::new();

        let err = query
            .delete(DeleteTriple::new(":s", ":p", minted_name.clone()))
            .unwrap_err();
        assert_eq!(err, UpdateError::ReservedVariable("x1".to_string()));
        assert!(query
            .insert(Triple::new(":s", ":p", minted_name.clone()))
            .is_err());
        assert!(query
            .update(UpdateTriple::new(":s", ":p", ":new", minted_name))
            .is_err());
        assert!(query.is_empty());

        query
            .delete(DeleteTriple::new(":s", ":p", Variable::new("old").unwrap()))
            .unwrap();
        query.delete(DeleteTriple::any_object(":s", ":q")).unwrap();
        assert_eq!(query.delete_statements()[1].object.to_string(), "?x1");
    }

    #[test]
    fn test_literal_objects_render_quoted() {
        let mut query = UpdateQuery::new();
        query
            .insert(Triple::new(":s", ":name", Literal::new_simple_literal("Ann")))
            .unwrap();
        assert_eq!(query.serialize(), "INSERT { :s :name \"Ann\" . }");
    }

    #[test]
    fn test_malformed_insert_leaves_state() {
        let mut query = UpdateQuery::new();
        query.insert(Triple::new(":s", ":p", ":o")).unwrap();

        let err = query.insert(Triple::new("", ":p", ":o")).unwrap_err();
        let UpdateError::MalformedTriple(malformed) = err else {
            panic!("expected a malformed triple");
        };
        assert_eq!(malformed.field, TripleField::Subject);
        assert_eq!(query.insert_statements().len(), 1);
    }

    #[test]
    fn test_malformed_update_is_atomic() {
        let mut query = UpdateQuery::new();
        let err = query
            .update(UpdateTriple::new(":s", ":p", ":new", ""))
            .unwrap_err();
        let UpdateError::MalformedTriple(malformed) = err else {
            panic!("expected a malformed triple");
        };
        assert_eq!(malformed.field, TripleField::OldObject);
        assert!(query.is_empty());
    }

    #[test]
    fn test_malformed_delete_keeps_counter() {
        let mut query = UpdateQuery::new();
        assert!(query.delete(DeleteTriple::any_object(":s", "")).is_err());
        query.delete(DeleteTriple::any_object(":s", ":p")).unwrap();
        assert_eq!(query.delete_statements()[0].object.to_string(), "?x1");
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let mut query = UpdateQuery::new();
        query.delete(DeleteTriple::any_object(":s", ":p")).unwrap();
        let first = query.serialize();
        assert_eq!(first, query.serialize());
        assert_eq!(first, query.to_string());
    }

    #[test]
    fn test_reset() {
        let mut query = UpdateQuery::new();
        query.add_prefix("ex", "http://ex");
        query.delete(DeleteTriple::any_object(":s", ":p")).unwrap();
        query.reset();
        assert!(query.is_empty());
        assert!(query.prefixes().is_empty());

        query.delete(DeleteTriple::any_object(":s", ":p")).unwrap();
        assert_eq!(query.delete_statements()[0].object.to_string(), "?x1");
    }
}
