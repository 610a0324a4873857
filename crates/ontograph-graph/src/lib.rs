//! Interned RDF term model and bitmap-indexed triple store.
//!
//! Everything above this crate works on `NodeId`s, not on owned strings:
//!
//! 1. **Node Interning**: every term (IRI, blank node, literal) is stored
//!    once in a shared [`NodeInterner`] and referenced by a 4-byte id.
//! 2. **Position Indexes**: the store keeps a Roaring bitmap per subject,
//!    predicate and object value, so `matches(s?, p?, o?)` is a bitmap
//!    intersection instead of a scan.
//! 3. **Deterministic Iteration**: pattern matches come back in insertion
//!    order for a fixed store snapshot.
//! 4. **Composition**: [`GraphUnion`] presents several graphs as one
//!    read-only store (import closures live above this crate).
//!
//! ## Module Organization
//!
//! - `list`: RDF collection (`rdf:first`/`rdf:rest`) read/write helpers
//! - `vocab`: RDF/RDFS/OWL/XSD vocabulary constants

pub mod list;
pub mod vocab;

use ahash::{AHashMap, AHashSet};
use dashmap::DashMap;
use roaring::RoaringBitmap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

pub use list::ListSlice;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// An `rdf:first`/`rdf:rest` chain is missing a link, branches, or cycles.
    #[error("malformed RDF collection at {node}: {reason}")]
    BadList { node: String, reason: String },
    /// A `NodeId` has no entry in the interner backing this graph.
    #[error("node id {0:?} is unknown to this graph's interner")]
    UnknownNode(NodeId),
}

// ============================================================================
// Terms and Node Interning
// ============================================================================

/// Interned node id (4 bytes instead of an owned term).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A literal value: lexical form plus optional datatype IRI or language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: String,
    pub datatype: Option<String>,
    pub lang: Option<String>,
}

impl Literal {
    pub fn simple(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            lang: None,
        }
    }

    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
            lang: None,
        }
    }

    pub fn tagged(lexical: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            lang: Some(lang.into()),
        }
    }
}

/// The atomic slot value of a triple: URI, blank node, or literal.
///
/// Structural equality/hash/ord throughout; two occurrences of the same
/// term always intern to the same [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Iri(String),
    Blank(String),
    Literal(Literal),
}

impl Term {
    pub fn iri(s: impl Into<String>) -> Self {
        Term::Iri(s.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Term::Blank(label.into())
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

/// Node interner: maps terms to compact ids and back.
///
/// Shared (via `Arc`) between every graph and model facade that must agree
/// on `NodeId`s. Interning the same term twice returns the same id.
pub struct NodeInterner {
    term_to_id: DashMap<Term, NodeId, ahash::RandomState>,
    id_to_term: DashMap<NodeId, Term, ahash::RandomState>,
    next_id: AtomicU32,
}

impl NodeInterner {
    pub fn new() -> Self {
        Self {
            term_to_id: DashMap::default(),
            id_to_term: DashMap::default(),
            next_id: AtomicU32::new(0),
        }
    }

    /// Intern a term, returning its id.
    pub fn intern(&self, term: &Term) -> NodeId {
        if let Some(id) = self.term_to_id.get(term) {
            return *id;
        }

        let id = NodeId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.term_to_id.insert(term.clone(), id);
        self.id_to_term.insert(id, term.clone());
        id
    }

    pub fn intern_iri(&self, iri: &str) -> NodeId {
        self.intern(&Term::Iri(iri.to_string()))
    }

    /// Look up an existing id for a term without inserting.
    pub fn id_of(&self, term: &Term) -> Option<NodeId> {
        self.term_to_id.get(term).map(|id| *id)
    }

    /// Look up the term for an id.
    pub fn lookup(&self, id: NodeId) -> Option<Term> {
        self.id_to_term.get(&id).map(|t| t.clone())
    }

    /// Number of interned terms.
    pub fn len(&self) -> usize {
        self.next_id.load(Ordering::SeqCst) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NodeInterner {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Triples and Patterns
// ============================================================================

/// An immutable subject-predicate-object triple over interned nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    pub s: NodeId,
    pub p: NodeId,
    pub o: NodeId,
}

impl Triple {
    pub const fn new(s: NodeId, p: NodeId, o: NodeId) -> Self {
        Self { s, p, o }
    }
}

/// A find pattern: `None` in a position is a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriplePattern {
    pub s: Option<NodeId>,
    pub p: Option<NodeId>,
    pub o: Option<NodeId>,
}

impl TriplePattern {
    pub const ANY: TriplePattern = TriplePattern {
        s: None,
        p: None,
        o: None,
    };

    pub const fn new(s: Option<NodeId>, p: Option<NodeId>, o: Option<NodeId>) -> Self {
        Self { s, p, o }
    }

    /// A fully concrete pattern matching exactly one triple.
    pub const fn concrete(t: Triple) -> Self {
        Self {
            s: Some(t.s),
            p: Some(t.p),
            o: Some(t.o),
        }
    }

    pub fn matches(&self, t: &Triple) -> bool {
        self.s.map_or(true, |s| s == t.s)
            && self.p.map_or(true, |p| p == t.p)
            && self.o.map_or(true, |o| o == t.o)
    }
}

// ============================================================================
// Graph (Indexed Triple Store)
// ============================================================================

/// Mutable triple store with per-position bitmap indexes.
///
/// Set semantics: inserting a triple that is already present is a no-op.
/// Removed slots are tombstoned; a re-inserted triple takes a fresh slot, so
/// iteration order is always "order of most recent insertion".
pub struct Graph {
    interner: Arc<NodeInterner>,
    triples: Vec<Triple>,
    live: RoaringBitmap,
    slot_of: AHashMap<Triple, u32>,
    by_s: AHashMap<NodeId, RoaringBitmap>,
    by_p: AHashMap<NodeId, RoaringBitmap>,
    by_o: AHashMap<NodeId, RoaringBitmap>,
    next_blank: u32,
}

impl Graph {
    pub fn new(interner: Arc<NodeInterner>) -> Self {
        Self {
            interner,
            triples: Vec::new(),
            live: RoaringBitmap::new(),
            slot_of: AHashMap::new(),
            by_s: AHashMap::new(),
            by_p: AHashMap::new(),
            by_o: AHashMap::new(),
            next_blank: 0,
        }
    }

    pub fn interner(&self) -> &Arc<NodeInterner> {
        &self.interner
    }

    pub fn intern(&self, term: &Term) -> NodeId {
        self.interner.intern(term)
    }

    pub fn intern_iri(&self, iri: &str) -> NodeId {
        self.interner.intern_iri(iri)
    }

    pub fn term(&self, id: NodeId) -> Option<Term> {
        self.interner.lookup(id)
    }

    /// Allocate a blank node whose label is unused in the interner.
    pub fn fresh_blank(&mut self) -> NodeId {
        loop {
            let label = format!("og{}", self.next_blank);
            self.next_blank += 1;
            let term = Term::Blank(label);
            if self.interner.id_of(&term).is_none() {
                return self.interner.intern(&term);
            }
        }
    }

    /// Number of live triples.
    pub fn len(&self) -> usize {
        self.live.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn contains(&self, t: &Triple) -> bool {
        self.slot_of.contains_key(t)
    }

    /// Insert a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, t: Triple) -> bool {
        if self.slot_of.contains_key(&t) {
            return false;
        }

        let slot = self.triples.len() as u32;
        self.triples.push(t);
        self.live.insert(slot);
        self.slot_of.insert(t, slot);
        self.by_s.entry(t.s).or_default().insert(slot);
        self.by_p.entry(t.p).or_default().insert(slot);
        self.by_o.entry(t.o).or_default().insert(slot);
        true
    }

    /// Intern three terms and insert the triple they form.
    pub fn insert_terms(&mut self, s: &Term, p: &Term, o: &Term) -> Triple {
        let t = Triple::new(self.intern(s), self.intern(p), self.intern(o));
        self.insert(t);
        t
    }

    /// Remove a triple. Returns `false` if it was not present.
    pub fn remove(&mut self, t: &Triple) -> bool {
        let Some(slot) = self.slot_of.remove(t) else {
            return false;
        };

        self.live.remove(slot);
        if let Some(bm) = self.by_s.get_mut(&t.s) {
            bm.remove(slot);
        }
        if let Some(bm) = self.by_p.get_mut(&t.p) {
            bm.remove(slot);
        }
        if let Some(bm) = self.by_o.get_mut(&t.o) {
            bm.remove(slot);
        }
        true
    }

    /// Find triples matching a pattern, in insertion order.
    pub fn matches(&self, pat: TriplePattern) -> impl Iterator<Item = Triple> + '_ {
        let slots = self.pattern_slots(pat);
        slots
            .into_iter()
            .map(move |slot| self.triples[slot as usize])
    }

    fn pattern_slots(&self, pat: TriplePattern) -> RoaringBitmap {
        let mut acc: Option<RoaringBitmap> = None;

        let mut narrow = |index: &AHashMap<NodeId, RoaringBitmap>, key: Option<NodeId>| {
            let Some(key) = key else { return true };
            let Some(bm) = index.get(&key) else {
                acc = Some(RoaringBitmap::new());
                return false;
            };
            acc = Some(match acc.take() {
                Some(prev) => prev & bm,
                None => bm.clone(),
            });
            true
        };

        if narrow(&self.by_s, pat.s) && narrow(&self.by_p, pat.p) && narrow(&self.by_o, pat.o) {}

        acc.unwrap_or_else(|| self.live.clone())
    }

    /// All live triples, in insertion order.
    pub fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        self.live
            .iter()
            .map(move |slot| self.triples[slot as usize])
    }

    /// Objects of all `(s, p, ?)` triples, in insertion order.
    pub fn objects(&self, s: NodeId, p: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.matches(TriplePattern::new(Some(s), Some(p), None))
            .map(|t| t.o)
    }

    /// Subjects of all `(?, p, o)` triples, in insertion order.
    pub fn subjects(&self, p: NodeId, o: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.matches(TriplePattern::new(None, Some(p), Some(o)))
            .map(|t| t.s)
    }

    /// The unique object of `(s, p, ?)`, or `None` if absent or ambiguous.
    pub fn object(&self, s: NodeId, p: NodeId) -> Option<NodeId> {
        let mut it = self.objects(s, p);
        let first = it.next()?;
        match it.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    pub fn contains_spo(&self, s: NodeId, p: NodeId, o: NodeId) -> bool {
        self.slot_of.contains_key(&Triple::new(s, p, o))
    }
}

// ============================================================================
// Graph Composition
// ============================================================================

/// Read-only union of several graphs sharing one interner.
///
/// Duplicate triples across parts are reported once, in the order of the
/// first part that contains them.
pub struct GraphUnion<'g> {
    parts: Vec<&'g Graph>,
}

impl<'g> GraphUnion<'g> {
    pub fn new(parts: Vec<&'g Graph>) -> Self {
        Self { parts }
    }

    pub fn contains(&self, t: &Triple) -> bool {
        self.parts.iter().any(|g| g.contains(t))
    }

    pub fn len(&self) -> usize {
        let mut seen: AHashSet<Triple> = AHashSet::new();
        for g in &self.parts {
            seen.extend(g.triples());
        }
        seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|g| g.is_empty())
    }

    pub fn matches(&self, pat: TriplePattern) -> impl Iterator<Item = Triple> + '_ {
        let mut seen: AHashSet<Triple> = AHashSet::new();
        self.parts
            .iter()
            .flat_map(move |g| g.matches(pat))
            .filter(move |t| seen.insert(*t))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> Graph {
        Graph::new(Arc::new(NodeInterner::new()))
    }

    #[test]
    fn interner_dedups_terms() {
        let interner = NodeInterner::new();
        let a = interner.intern(&Term::iri("http://example.org/a"));
        let b = interner.intern(&Term::iri("http://example.org/a"));
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
        assert_eq!(
            interner.lookup(a),
            Some(Term::iri("http://example.org/a"))
        );
    }

    #[test]
    fn insert_is_set_semantics() {
        let mut g = graph();
        let s = g.intern_iri("http://example.org/s");
        let p = g.intern_iri("http://example.org/p");
        let o = g.intern_iri("http://example.org/o");
        assert!(g.insert(Triple::new(s, p, o)));
        assert!(!g.insert(Triple::new(s, p, o)));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn pattern_match_uses_position_indexes() {
        let mut g = graph();
        let a = g.intern_iri("http://example.org/a");
        let b = g.intern_iri("http://example.org/b");
        let p = g.intern_iri("http://example.org/p");
        let q = g.intern_iri("http://example.org/q");
        g.insert(Triple::new(a, p, b));
        g.insert(Triple::new(b, p, a));
        g.insert(Triple::new(a, q, b));

        let hits: Vec<Triple> = g
            .matches(TriplePattern::new(Some(a), Some(p), None))
            .collect();
        assert_eq!(hits, vec![Triple::new(a, p, b)]);

        let by_p: Vec<Triple> = g.matches(TriplePattern::new(None, Some(p), None)).collect();
        assert_eq!(by_p.len(), 2);
    }

    #[test]
    fn remove_then_reinsert_moves_to_end() {
        let mut g = graph();
        let a = g.intern_iri("http://example.org/a");
        let b = g.intern_iri("http://example.org/b");
        let p = g.intern_iri("http://example.org/p");
        let t1 = Triple::new(a, p, b);
        let t2 = Triple::new(b, p, a);
        g.insert(t1);
        g.insert(t2);
        assert!(g.remove(&t1));
        assert!(!g.contains(&t1));
        g.insert(t1);

        let order: Vec<Triple> = g.triples().collect();
        assert_eq!(order, vec![t2, t1]);
    }

    #[test]
    fn fresh_blank_skips_taken_labels() {
        let mut g = graph();
        g.intern(&Term::blank("og0"));
        let fresh = g.fresh_blank();
        assert_eq!(g.term(fresh), Some(Term::blank("og1")));
    }

    #[test]
    fn union_dedups_across_parts() {
        let interner = Arc::new(NodeInterner::new());
        let mut g1 = Graph::new(interner.clone());
        let mut g2 = Graph::new(interner.clone());
        let a = interner.intern_iri("http://example.org/a");
        let p = interner.intern_iri("http://example.org/p");
        let b = interner.intern_iri("http://example.org/b");
        let c = interner.intern_iri("http://example.org/c");
        g1.insert(Triple::new(a, p, b));
        g2.insert(Triple::new(a, p, b));
        g2.insert(Triple::new(a, p, c));

        let u = GraphUnion::new(vec![&g1, &g2]);
        assert_eq!(u.len(), 2);
        assert_eq!(u.matches(TriplePattern::ANY).count(), 2);
        assert!(u.contains(&Triple::new(a, p, c)));
    }
}
