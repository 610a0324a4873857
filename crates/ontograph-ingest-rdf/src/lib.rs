//! RDF document I/O for Ontograph (boundary adapter).
//!
//! This crate sits at the **interop boundary**:
//!
//! - It parses RDF-shaped inputs (untrusted) into an interned [`Graph`].
//! - It serializes a [`Graph`] back out as N-Triples.
//! - It does *not* interpret triples as axioms (`ontograph-model` does).
//!
//! Parsing uses **Sophia** for the common serializations:
//! - N-Triples (`.nt`)
//! - Turtle (`.ttl`)
//! - RDF/XML (`.rdf`, `.owl`, `.xml`)
//!
//! Quad formats (N-Quads, TriG) are not read here: the graph model carries
//! no named-graph slot, so quads have no destination.

use anyhow::{anyhow, Context, Result};
use ontograph_graph::{Graph, Literal, NodeInterner, Term, Triple};
use sophia::api::prelude::*;
// Bring Sophia's `Triple` trait into scope for its `.s()/.p()/.o()` accessors
// without shadowing the local `ontograph_graph::Triple` type.
use sophia::api::prelude::Triple as _;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    NTriples,
    Turtle,
    RdfXml,
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct RdfSinkError {
    message: String,
}

impl From<anyhow::Error> for RdfSinkError {
    fn from(value: anyhow::Error) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

// ============================================================================
// Term parsing (N-Triples-ish display forms)
// ============================================================================

fn unescape_rdf_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn parse_term_display(term: &str) -> Result<Term> {
    let s = term.trim();

    if let Some(rest) = s.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        return Ok(Term::Iri(rest.to_string()));
    }

    if let Some(rest) = s.strip_prefix("_:") {
        return Ok(Term::Blank(rest.to_string()));
    }

    if s.starts_with('"') {
        // Small literal parser over the display form.
        let mut end_quote = None;
        let mut prev_was_escape = false;
        for (i, ch) in s.char_indices().skip(1) {
            if ch == '"' && !prev_was_escape {
                end_quote = Some(i);
                break;
            }
            prev_was_escape = ch == '\\' && !prev_was_escape;
            if ch != '\\' {
                prev_was_escape = false;
            }
        }
        let Some(end) = end_quote else {
            return Err(anyhow!("invalid literal term (missing closing quote): {s}"));
        };

        let lexical = unescape_rdf_string(&s[1..end]);
        let rest = s[end + 1..].trim();

        if let Some(lang) = rest.strip_prefix('@') {
            return Ok(Term::Literal(Literal::tagged(lexical, lang)));
        }
        if let Some(dt) = rest.strip_prefix("^^") {
            let dt = dt.trim();
            let dt_iri = dt
                .strip_prefix('<')
                .and_then(|t| t.strip_suffix('>'))
                .unwrap_or(dt);
            if !dt_iri.is_empty() {
                return Ok(Term::Literal(Literal::typed(lexical, dt_iri)));
            }
        }
        return Ok(Term::Literal(Literal::simple(lexical)));
    }

    Err(anyhow!("unsupported RDF term form: {s}"))
}

// ============================================================================
// Parsing into a Graph
// ============================================================================

fn insert_parsed(g: &mut Graph, s: &str, p: &str, o: &str) -> Result<Option<Triple>> {
    let subject = parse_term_display(s)?;
    if subject.is_literal() {
        return Ok(None);
    }
    let predicate = parse_term_display(p)?;
    if !predicate.is_iri() {
        // Generalized-RDF predicates are dropped rather than failing the
        // whole document.
        return Ok(None);
    }
    let object = parse_term_display(o)?;
    Ok(Some(g.insert_terms(&subject, &predicate, &object)))
}

/// Parse one document into a fresh graph over `interner`.
pub fn graph_from_bytes(
    bytes: &[u8],
    format: RdfFormat,
    interner: Arc<NodeInterner>,
) -> Result<Graph> {
    let cursor = std::io::Cursor::new(bytes);
    let reader = std::io::BufReader::new(cursor);
    let mut g = Graph::new(interner);

    match format {
        RdfFormat::NTriples => {
            let mut parser = sophia::turtle::parser::nt::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| -> std::result::Result<(), RdfSinkError> {
                    insert_parsed(
                        &mut g,
                        &t.s().to_string(),
                        &t.p().to_string(),
                        &t.o().to_string(),
                    )
                    .map_err(RdfSinkError::from)?;
                    Ok(())
                })
                .map_err(|e| anyhow!("failed to parse N-Triples: {e}"))?;
        }
        RdfFormat::Turtle => {
            let mut parser = sophia::turtle::parser::turtle::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| -> std::result::Result<(), RdfSinkError> {
                    insert_parsed(
                        &mut g,
                        &t.s().to_string(),
                        &t.p().to_string(),
                        &t.o().to_string(),
                    )
                    .map_err(RdfSinkError::from)?;
                    Ok(())
                })
                .map_err(|e| anyhow!("failed to parse Turtle: {e}"))?;
        }
        RdfFormat::RdfXml => {
            let mut parser = sophia::xml::parser::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| -> std::result::Result<(), RdfSinkError> {
                    insert_parsed(
                        &mut g,
                        &t.s().to_string(),
                        &t.p().to_string(),
                        &t.o().to_string(),
                    )
                    .map_err(RdfSinkError::from)?;
                    Ok(())
                })
                .map_err(|e| anyhow!("failed to parse RDF/XML: {e}"))?;
        }
    }

    Ok(g)
}

pub fn graph_from_str(
    text: &str,
    format: RdfFormat,
    interner: Arc<NodeInterner>,
) -> Result<Graph> {
    graph_from_bytes(text.as_bytes(), format, interner)
}

/// Parse a file, sniffing the format from its extension.
pub fn graph_from_file(path: &Path, interner: Arc<NodeInterner>) -> Result<Graph> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let format = match ext.as_str() {
        "nt" | "ntriples" => RdfFormat::NTriples,
        "ttl" | "turtle" => RdfFormat::Turtle,
        "rdf" | "owl" | "xml" => RdfFormat::RdfXml,
        other => return Err(anyhow!("unsupported RDF format: .{other}")),
    };
    graph_from_bytes(&bytes, format, interner)
}

// ============================================================================
// Serialization (N-Triples)
// ============================================================================

fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

fn format_term(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{iri}>"),
        Term::Blank(label) => format!("_:{label}"),
        Term::Literal(lit) => {
            let mut out = format!("\"{}\"", escape_literal(&lit.lexical));
            if let Some(lang) = &lit.lang {
                out.push('@');
                out.push_str(lang);
            } else if let Some(dt) = &lit.datatype {
                out.push_str("^^<");
                out.push_str(dt);
                out.push('>');
            }
            out
        }
    }
}

/// Serialize a graph as N-Triples, in the graph's insertion order.
pub fn graph_to_ntriples(g: &Graph) -> Result<String> {
    let mut out = String::new();
    for t in g.triples() {
        let s = g.term(t.s).ok_or_else(|| anyhow!("dangling subject id"))?;
        let p = g.term(t.p).ok_or_else(|| anyhow!("dangling predicate id"))?;
        let o = g.term(t.o).ok_or_else(|| anyhow!("dangling object id"))?;
        out.push_str(&format_term(&s));
        out.push(' ');
        out.push_str(&format_term(&p));
        out.push(' ');
        out.push_str(&format_term(&o));
        out.push_str(" .\n");
    }
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_graph::{vocab, TriplePattern};

    const SAMPLE_NT: &str = r#"
<http://example.org/Metal> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> .
<http://example.org/Material> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> .
<http://example.org/Metal> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <http://example.org/Material> .
<http://example.org/Metal> <http://www.w3.org/2000/01/rdf-schema#label> "Metal"@en .
"#;

    fn interner() -> Arc<NodeInterner> {
        Arc::new(NodeInterner::new())
    }

    #[test]
    fn parses_ntriples_into_graph() {
        let g = graph_from_str(SAMPLE_NT, RdfFormat::NTriples, interner()).expect("parse");
        assert_eq!(g.len(), 4);

        let sub = g.intern_iri(vocab::rdfs::SUB_CLASS_OF);
        let hits: Vec<_> = g
            .matches(TriplePattern::new(None, Some(sub), None))
            .collect();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn parses_turtle_with_language_tags() {
        let turtle = r#"
@prefix ex: <http://example.org/> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
ex:a rdfs:label "Alice"@en .
ex:a ex:knows ex:b .
"#;
        let g = graph_from_str(turtle, RdfFormat::Turtle, interner()).expect("parse turtle");
        assert_eq!(g.len(), 2);

        let label = g.intern_iri(vocab::rdfs::LABEL);
        let t = g
            .matches(TriplePattern::new(None, Some(label), None))
            .next()
            .expect("label triple");
        assert_eq!(
            g.term(t.o),
            Some(Term::Literal(Literal::tagged("Alice", "en")))
        );
    }

    #[test]
    fn serialization_round_trips() {
        let g = graph_from_str(SAMPLE_NT, RdfFormat::NTriples, interner()).expect("parse");
        let nt = graph_to_ntriples(&g).expect("serialize");
        let back = graph_from_str(&nt, RdfFormat::NTriples, interner()).expect("reparse");
        assert_eq!(back.len(), g.len());
    }

    #[test]
    fn escapes_literal_metacharacters() {
        let mut g = Graph::new(interner());
        g.insert_terms(
            &Term::iri("http://example.org/s"),
            &Term::iri("http://example.org/p"),
            &Term::Literal(Literal::simple("line one\nwith \"quotes\" and \\slash")),
        );
        let nt = graph_to_ntriples(&g).expect("serialize");
        assert!(nt.contains(r#""line one\nwith \"quotes\" and \\slash""#));

        let back = graph_from_str(&nt, RdfFormat::NTriples, interner()).expect("reparse");
        assert_eq!(back.len(), 1);
    }

    #[test]
    fn file_ingestion_sniffs_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tiny.nt");
        std::fs::write(&path, SAMPLE_NT).expect("write fixture");

        let g = graph_from_file(&path, interner()).expect("ingest file");
        assert_eq!(g.len(), 4);

        let bad = dir.path().join("tiny.docx");
        std::fs::write(&bad, "x").expect("write fixture");
        assert!(graph_from_file(&bad, interner()).is_err());
    }
}
