//! TriG / N-Quads implementation

use super::{ParseError, ParseResult, RdfFormat};
use crate::rdf::{Iri, Literal, Quad, Term};
use rio_api::model::{GraphName, Literal as RioLiteral, NamedNode, Subject, Term as RioTerm};
use rio_api::parser::QuadsParser;
use rio_turtle::{NQuadsParser, TriGParser};
use std::io::{BufReader, Cursor};
use tracing::debug;

/// Serialize one quad as a TriG statement: `s p o .`, or
/// `g { s p o . }` when the quad has a graph
pub fn serialize_quad(quad: &Quad) -> String {
    let statement = format!("{} {} {} .", quad.subject, quad.predicate, quad.object);
    match &quad.graph {
        Some(graph) => format!("{} {{ {} }}", graph, statement),
        None => statement,
    }
}

/// Serialize quads as a TriG document, one statement per line
pub fn serialize_quads(quads: &[Quad]) -> String {
    quads
        .iter()
        .map(serialize_quad)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a fully buffered TriG or N-Quads document into quads.
///
/// Named nodes come back in `<iri>` form and blank nodes as `_:id`, so the
/// results can be fed straight into update queries.
pub fn parse_quads(input: &str, format: RdfFormat) -> ParseResult<Vec<Quad>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut quads = Vec::new();
    let mut reader = BufReader::new(Cursor::new(input));
    let mut on_quad = |q: rio_api::model::Quad<'_>| -> ParseResult<()> {
        quads.push(Quad {
            subject: convert_subject(q.subject)?,
            predicate: convert_named_node(q.predicate),
            object: convert_object(q.object)?,
            graph: q.graph_name.map(convert_graph_name),
        });
        Ok(())
    };

    match format {
        RdfFormat::TriG => TriGParser::new(&mut reader, None).parse_all(&mut on_quad)?,
        RdfFormat::NQuads => NQuadsParser::new(&mut reader).parse_all(&mut on_quad)?,
    }

    debug!(count = quads.len(), ?format, "parsed quads");
    Ok(quads)
}

fn convert_named_node(n: NamedNode<'_>) -> Iri {
    Iri::from_full(n.iri)
}

fn blank_node_iri(id: &str) -> Iri {
    Iri::from(format!("_:{}", id))
}

fn convert_subject(s: Subject<'_>) -> ParseResult<Iri> {
    match s {
        Subject::NamedNode(n) => Ok(convert_named_node(n)),
        Subject::BlankNode(b) => Ok(blank_node_iri(b.id)),
        #[allow(unreachable_patterns)]
        _ => Err(ParseError::Unsupported("quoted triple in subject position".to_string())),
    }
}

fn convert_object(o: RioTerm<'_>) -> ParseResult<Term> {
    match o {
        RioTerm::NamedNode(n) => Ok(Term::Iri(convert_named_node(n))),
        RioTerm::BlankNode(b) => Ok(Term::Iri(blank_node_iri(b.id))),
        RioTerm::Literal(l) => convert_literal(l).map(Term::Literal),
        #[allow(unreachable_patterns)]
        _ => Err(ParseError::Unsupported("quoted triple in object position".to_string())),
    }
}

fn convert_literal(l: RioLiteral<'_>) -> ParseResult<Literal> {
    match l {
        RioLiteral::Simple { value } => Ok(Literal::new_simple_literal(value)),
        RioLiteral::LanguageTaggedString { value, language } => {
            Literal::new_language_tagged_literal(value, language)
                .map_err(|e| ParseError::InvalidLiteral(e.to_string()))
        }
        RioLiteral::Typed { value, datatype } => Literal::new_typed_literal(value, datatype.iri)
            .map_err(|e| ParseError::InvalidLiteral(e.to_string())),
    }
}

fn convert_graph_name(g: GraphName<'_>) -> Iri {
    match g {
        GraphName::NamedNode(n) => convert_named_node(n),
        GraphName::BlankNode(b) => blank_node_iri(b.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_quad_with_and_without_graph() {
        let quad = Quad::new("<http://s>", "<http://p>", "<http://o>", "<http://g>");
        assert_eq!(
            serialize_quad(&quad),
            "<http://g> { <http://s> <http://p> <http://o> . }"
        );

        let triple = Quad::from_triple(quad.triple());
        assert_eq!(serialize_quad(&triple), "<http://s> <http://p> <http://o> .");
    }

    #[test]
    fn test_serialize_quads_literal() {
        let quads = vec![
            Quad::new(":a", ":name", Literal::new_simple_literal("A"), ":g"),
            Quad::new(":b", ":name", Literal::new_simple_literal("B"), ":g"),
        ];
        assert_eq!(
            serialize_quads(&quads),
            ":g { :a :name \"A\" . }\n:g { :b :name \"B\" . }"
        );
    }

    #[test]
    fn test_parse_trig() {
        let input = r#"
            @prefix ex: <http://example.com/> .
            ex:alice ex:name "Alice"@en .
            <http://g> { ex:alice ex:knows _:b1 . }
        "#;

        let quads = parse_quads(input, RdfFormat::TriG).unwrap();
        assert_eq!(quads.len(), 2);

        assert_eq!(quads[0].subject.as_str(), "<http://example.com/alice>");
        assert_eq!(quads[0].object.to_string(), "\"Alice\"@en");
        assert!(quads[0].graph.is_none());

        assert_eq!(quads[1].predicate.as_str(), "<http://example.com/knows>");
        assert_eq!(quads[1].graph.as_ref().map(Iri::as_str), Some("<http://g>"));
        assert!(quads[1].object.to_string().starts_with("_:"));
    }

    #[test]
    fn test_parse_nquads() {
        let input = "<http://s> <http://p> \"1\"^^<http://www.w3.org/2001/XMLSchema#integer> <http://g> .\n";
        let quads = parse_quads(input, RdfFormat::NQuads).unwrap();
        assert_eq!(quads.len(), 1);
        assert_eq!(
            quads[0].object.to_string(),
            "\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        assert_eq!(quads[0].graph.as_ref().map(Iri::as_str), Some("<http://g>"));
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_quads("", RdfFormat::TriG).unwrap().is_empty());
        assert!(parse_quads("  \n", RdfFormat::NQuads).unwrap().is_empty());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_quads("<http://s> <http://p> .", RdfFormat::TriG),
            Err(ParseError::Syntax(_))
        ));
    }

    #[test]
    fn test_serialized_quads_parse_back() {
        let quads = vec![Quad::new(
            "<http://s>",
            "<http://p>",
            Literal::new_simple_literal("x"),
            "<http://g>",
        )];
        let parsed = parse_quads(&serialize_quads(&quads), RdfFormat::TriG).unwrap();
        assert_eq!(parsed, quads);
    }
}
