use std::sync::Arc;

use ontograph_graph::{list, Graph, NodeId, NodeInterner, Triple, TriplePattern};
use proptest::prelude::*;

fn small_node(g: &Graph, n: u8) -> NodeId {
    g.intern_iri(&format!("http://example.org/n{n}"))
}

proptest! {
    /// `matches` agrees with a naive scan-and-filter over the same pattern.
    #[test]
    fn pattern_match_agrees_with_naive_filter(
        spo in proptest::collection::vec((0u8..6, 0u8..3, 0u8..6), 0..40),
        pat_s in proptest::option::of(0u8..6),
        pat_p in proptest::option::of(0u8..3),
        pat_o in proptest::option::of(0u8..6),
    ) {
        let mut g = Graph::new(Arc::new(NodeInterner::new()));
        for (s, p, o) in &spo {
            let t = Triple::new(small_node(&g, *s), small_node(&g, *p + 100), small_node(&g, *o));
            g.insert(t);
        }

        let pat = TriplePattern::new(
            pat_s.map(|s| small_node(&g, s)),
            pat_p.map(|p| small_node(&g, p + 100)),
            pat_o.map(|o| small_node(&g, o)),
        );

        let indexed: Vec<Triple> = g.matches(pat).collect();
        let naive: Vec<Triple> = g.triples().filter(|t| pat.matches(t)).collect();
        prop_assert_eq!(indexed, naive);
    }

    /// Inserting then removing a batch restores the original size.
    #[test]
    fn insert_remove_restores_len(
        base in proptest::collection::vec((0u8..6, 0u8..3, 0u8..6), 0..20),
        extra in proptest::collection::vec((10u8..16, 4u8..6, 10u8..16), 0..20),
    ) {
        let mut g = Graph::new(Arc::new(NodeInterner::new()));
        for (s, p, o) in &base {
            g.insert(Triple::new(small_node(&g, *s), small_node(&g, *p + 100), small_node(&g, *o)));
        }
        let before = g.len();

        let mut inserted = Vec::new();
        for (s, p, o) in &extra {
            let t = Triple::new(small_node(&g, *s), small_node(&g, *p + 100), small_node(&g, *o));
            if g.insert(t) {
                inserted.push(t);
            }
        }
        for t in &inserted {
            prop_assert!(g.remove(t));
        }
        prop_assert_eq!(g.len(), before);
    }

    /// Collections round-trip through write/read with exact provenance.
    #[test]
    fn list_write_read_round_trips(items in proptest::collection::vec(0u8..12, 0..10)) {
        let mut g = Graph::new(Arc::new(NodeInterner::new()));
        let ids: Vec<NodeId> = items.iter().map(|n| small_node(&g, *n)).collect();

        let written = list::write_list(&mut g, &ids);
        let read = list::read_list(&g, written.head).expect("well-formed list");

        prop_assert_eq!(&read.items, &ids);
        prop_assert_eq!(read.triples.len(), ids.len() * 2);
        for t in &read.triples {
            prop_assert!(g.contains(t));
        }
    }
}
