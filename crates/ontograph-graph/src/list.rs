//! RDF collection (`rdf:first`/`rdf:rest`/`rdf:nil`) helpers.
//!
//! List-backed axiom encodings need two things beyond plain traversal: the
//! items in order, and the exact triples the list occupies, so that removal
//! of the owning axiom leaves no cell skeleton behind. [`ListSlice`] carries
//! both.

use crate::{vocab, Graph, GraphError, NodeId, Term, Triple};
use ahash::AHashSet;

/// A traversed or freshly written RDF collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSlice {
    /// The list head (`rdf:nil` for the empty list).
    pub head: NodeId,
    pub items: Vec<NodeId>,
    /// Every `rdf:first`/`rdf:rest` triple the collection occupies.
    pub triples: Vec<Triple>,
}

fn bad_list(g: &Graph, node: NodeId, reason: &str) -> GraphError {
    let node = match g.term(node) {
        Some(Term::Iri(iri)) => iri,
        Some(Term::Blank(b)) => format!("_:{b}"),
        Some(Term::Literal(lit)) => format!("{:?}", lit.lexical),
        None => format!("{node:?}"),
    };
    GraphError::BadList {
        node,
        reason: reason.to_string(),
    }
}

/// Walk an `rdf:first`/`rdf:rest` chain from `head` to `rdf:nil`.
///
/// Fails on a missing or ambiguous `rdf:first`/`rdf:rest` link and on
/// cyclic chains.
pub fn read_list(g: &Graph, head: NodeId) -> Result<ListSlice, GraphError> {
    let first = g.intern_iri(vocab::rdf::FIRST);
    let rest = g.intern_iri(vocab::rdf::REST);
    let nil = g.intern_iri(vocab::rdf::NIL);

    let mut slice = ListSlice {
        head,
        items: Vec::new(),
        triples: Vec::new(),
    };
    let mut seen: AHashSet<NodeId> = AHashSet::new();
    let mut cell = head;

    while cell != nil {
        if !seen.insert(cell) {
            return Err(bad_list(g, cell, "cyclic rdf:rest chain"));
        }

        let item = g
            .object(cell, first)
            .ok_or_else(|| bad_list(g, cell, "missing or ambiguous rdf:first"))?;
        let next = g
            .object(cell, rest)
            .ok_or_else(|| bad_list(g, cell, "missing or ambiguous rdf:rest"))?;

        slice.items.push(item);
        slice.triples.push(Triple::new(cell, first, item));
        slice.triples.push(Triple::new(cell, rest, next));
        cell = next;
    }

    Ok(slice)
}

/// Write `items` as a fresh RDF collection, returning its head and triples.
pub fn write_list(g: &mut Graph, items: &[NodeId]) -> ListSlice {
    let first = g.intern_iri(vocab::rdf::FIRST);
    let rest = g.intern_iri(vocab::rdf::REST);
    let nil = g.intern_iri(vocab::rdf::NIL);

    if items.is_empty() {
        return ListSlice {
            head: nil,
            items: Vec::new(),
            triples: Vec::new(),
        };
    }

    let cells: Vec<NodeId> = items.iter().map(|_| g.fresh_blank()).collect();
    let mut triples = Vec::with_capacity(items.len() * 2);

    for (i, (&cell, &item)) in cells.iter().zip(items).enumerate() {
        let next = cells.get(i + 1).copied().unwrap_or(nil);
        let t_first = Triple::new(cell, first, item);
        let t_rest = Triple::new(cell, rest, next);
        g.insert(t_first);
        g.insert(t_rest);
        triples.push(t_first);
        triples.push(t_rest);
    }

    ListSlice {
        head: cells[0],
        items: items.to_vec(),
        triples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeInterner;
    use std::sync::Arc;

    fn graph() -> Graph {
        Graph::new(Arc::new(NodeInterner::new()))
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut g = graph();
        let a = g.intern_iri("http://example.org/a");
        let b = g.intern_iri("http://example.org/b");
        let c = g.intern_iri("http://example.org/c");

        let written = write_list(&mut g, &[a, b, c]);
        assert_eq!(written.triples.len(), 6);

        let read = read_list(&g, written.head).expect("well-formed list");
        assert_eq!(read.items, vec![a, b, c]);
        assert_eq!(read.triples.len(), 6);
    }

    #[test]
    fn empty_list_is_nil() {
        let mut g = graph();
        let written = write_list(&mut g, &[]);
        assert_eq!(written.head, g.intern_iri(vocab::rdf::NIL));
        assert!(read_list(&g, written.head)
            .expect("nil list")
            .items
            .is_empty());
    }

    #[test]
    fn truncated_chain_is_rejected() {
        let mut g = graph();
        let cell = g.fresh_blank();
        let a = g.intern_iri("http://example.org/a");
        let first = g.intern_iri(vocab::rdf::FIRST);
        // rdf:rest missing entirely.
        g.insert(Triple::new(cell, first, a));

        let err = read_list(&g, cell).expect_err("truncated list");
        assert!(matches!(err, GraphError::BadList { .. }));
    }

    #[test]
    fn cyclic_chain_is_rejected() {
        let mut g = graph();
        let cell = g.fresh_blank();
        let a = g.intern_iri("http://example.org/a");
        let first = g.intern_iri(vocab::rdf::FIRST);
        let rest = g.intern_iri(vocab::rdf::REST);
        g.insert(Triple::new(cell, first, a));
        g.insert(Triple::new(cell, rest, cell));

        let err = read_list(&g, cell).expect_err("cyclic list");
        assert!(matches!(err, GraphError::BadList { .. }));
    }
}
