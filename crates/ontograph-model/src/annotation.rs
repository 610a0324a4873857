//! Axiom annotation groups: the reification pattern, read and written.
//!
//! An annotated main triple `S P O` carries its annotations on a blank root:
//!
//! - `_:x rdf:type owl:Axiom` (`owl:Annotation` when nested)
//! - `_:x owl:annotatedSource S`
//! - `_:x owl:annotatedProperty P`
//! - `_:x owl:annotatedTarget O`
//! - `_:x <ann-prop> <value>` for each annotation, each pair itself
//!   annotatable by the same pattern rooted at its own triple, recursively
//!
//! Well-formed data has one root per main triple; malformed data may have
//! several. Each root here forms an independent [`AnnotationGroup`], read in
//! graph order, with its full triple closure recorded so group removal
//! leaves no skeleton behind.

use ontograph_graph::{vocab, Graph, NodeId, Term, Triple, TriplePattern};

use crate::axiom::{AnnProp, AnnValue, Annotation};
use crate::profile::{NodeProfile, ViewKind};

/// Nested annotation recursion bound; deeper malformed chains are truncated.
const MAX_ANNOTATION_DEPTH: usize = 16;

/// One reification group: its root, realized annotations, and every triple
/// the group occupies (skeleton plus annotation triples, recursively).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationGroup {
    pub root: NodeId,
    pub annotations: Vec<Annotation>,
    pub triples: Vec<Triple>,
}

/// A main triple plus the annotation groups attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub triple: Triple,
    pub groups: Vec<AnnotationGroup>,
}

impl Statement {
    /// Annotations across all groups, in group order.
    pub fn annotations(&self) -> Vec<Annotation> {
        self.groups
            .iter()
            .flat_map(|g| g.annotations.iter().cloned())
            .collect()
    }

    /// Every annotation triple across all groups.
    pub fn annotation_triples(&self) -> Vec<Triple> {
        self.groups
            .iter()
            .flat_map(|g| g.triples.iter().copied())
            .collect()
    }
}

struct AnnIds {
    rdf_type: NodeId,
    axiom: NodeId,
    annotation: NodeId,
    source: NodeId,
    property: NodeId,
    target: NodeId,
}

impl AnnIds {
    fn of(g: &Graph) -> Self {
        Self {
            rdf_type: g.intern_iri(vocab::rdf::TYPE),
            axiom: g.intern_iri(vocab::owl::AXIOM),
            annotation: g.intern_iri(vocab::owl::ANNOTATION),
            source: g.intern_iri(vocab::owl::ANNOTATED_SOURCE),
            property: g.intern_iri(vocab::owl::ANNOTATED_PROPERTY),
            target: g.intern_iri(vocab::owl::ANNOTATED_TARGET),
        }
    }
}

/// Read a main triple together with all of its annotation groups.
pub fn read_statement(g: &Graph, profile: &NodeProfile<'_>, main: Triple) -> Statement {
    let ids = AnnIds::of(g);
    let groups = reification_roots(g, &ids, main, ids.axiom)
        .into_iter()
        .map(|root| read_group(g, profile, &ids, root, main, ids.axiom, 0))
        .collect();
    Statement {
        triple: main,
        groups,
    }
}

/// Roots reifying `main` with the given type (`owl:Axiom` at the top level,
/// `owl:Annotation` for nested groups), in graph order.
fn reification_roots(g: &Graph, ids: &AnnIds, main: Triple, type_obj: NodeId) -> Vec<NodeId> {
    g.subjects(ids.source, main.s)
        .filter(|&root| {
            g.contains_spo(root, ids.property, main.p)
                && g.contains_spo(root, ids.target, main.o)
                && g.contains_spo(root, ids.rdf_type, type_obj)
        })
        .collect()
}

fn read_group(
    g: &Graph,
    profile: &NodeProfile<'_>,
    ids: &AnnIds,
    root: NodeId,
    main: Triple,
    type_obj: NodeId,
    depth: usize,
) -> AnnotationGroup {
    let mut triples = vec![
        Triple::new(root, ids.rdf_type, type_obj),
        Triple::new(root, ids.source, main.s),
        Triple::new(root, ids.property, main.p),
        Triple::new(root, ids.target, main.o),
    ];
    let mut annotations = Vec::new();

    for t in g.matches(TriplePattern::new(Some(root), None, None)) {
        if t.p == ids.rdf_type || t.p == ids.source || t.p == ids.property || t.p == ids.target {
            continue;
        }
        if !profile.can_present_as(t.p, ViewKind::AnnProp) {
            continue;
        }
        let (ann, ann_triples) = read_annotation(g, profile, ids, t, depth);
        annotations.push(ann);
        triples.extend(ann_triples);
    }

    AnnotationGroup {
        root,
        annotations,
        triples,
    }
}

/// Realize one annotation triple, descending into its nested groups.
fn read_annotation(
    g: &Graph,
    profile: &NodeProfile<'_>,
    ids: &AnnIds,
    t: Triple,
    depth: usize,
) -> (Annotation, Vec<Triple>) {
    let prop_iri = match g.term(t.p) {
        Some(Term::Iri(iri)) => iri,
        _ => String::new(),
    };
    let value = match g.term(t.o) {
        Some(term) => AnnValue::from_term(&term),
        None => AnnValue::Iri(String::new()),
    };

    let mut triples = vec![t];
    let mut nested = Vec::new();

    if depth < MAX_ANNOTATION_DEPTH {
        for root in reification_roots(g, ids, t, ids.annotation) {
            let group = read_group(g, profile, ids, root, t, ids.annotation, depth + 1);
            nested.extend(group.annotations);
            triples.extend(group.triples);
        }
    }

    (
        Annotation {
            prop: AnnProp(prop_iri),
            value,
            annotations: nested,
        },
        triples,
    )
}

/// Write `annotations` as one fresh reification group on `main`.
///
/// Returns every triple written. Declaring non-builtin annotation
/// properties is the calling translator's concern.
pub fn write_annotations(
    g: &mut Graph,
    main: Triple,
    annotations: &[Annotation],
    nested: bool,
) -> Vec<Triple> {
    if annotations.is_empty() {
        return Vec::new();
    }

    let ids = AnnIds::of(g);
    let type_obj = if nested { ids.annotation } else { ids.axiom };
    let root = g.fresh_blank();

    let mut out = Vec::new();
    for t in [
        Triple::new(root, ids.rdf_type, type_obj),
        Triple::new(root, ids.source, main.s),
        Triple::new(root, ids.property, main.p),
        Triple::new(root, ids.target, main.o),
    ] {
        g.insert(t);
        out.push(t);
    }

    for ann in annotations {
        let p = g.intern(&Term::Iri(ann.prop.0.clone()));
        let v = g.intern(&ann.value.term());
        let t = Triple::new(root, p, v);
        g.insert(t);
        out.push(t);
        if !ann.annotations.is_empty() {
            out.extend(write_annotations(g, t, &ann.annotations, true));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_graph::{Literal, NodeInterner};
    use std::sync::Arc;

    fn graph() -> Graph {
        Graph::new(Arc::new(NodeInterner::new()))
    }

    fn main_triple(g: &mut Graph) -> Triple {
        let s = g.intern_iri("http://example.org/A");
        let p = g.intern_iri(vocab::rdfs::SUB_CLASS_OF);
        let o = g.intern_iri("http://example.org/B");
        let t = Triple::new(s, p, o);
        g.insert(t);
        t
    }

    #[test]
    fn unannotated_statement_has_no_groups() {
        let mut g = graph();
        let main = main_triple(&mut g);
        let profile = NodeProfile::new(&g);

        let st = read_statement(&g, &profile, main);
        assert!(st.groups.is_empty());
        assert!(st.annotation_triples().is_empty());
    }

    #[test]
    fn single_annotation_round_trips() {
        let mut g = graph();
        let main = main_triple(&mut g);

        let ann = Annotation::new(
            vocab::rdfs::COMMENT,
            AnnValue::Literal(Literal::simple("inferred from source data")),
        );
        let written = write_annotations(&mut g, main, std::slice::from_ref(&ann), false);
        // 4 skeleton triples + 1 annotation triple.
        assert_eq!(written.len(), 5);

        let profile = NodeProfile::new(&g);
        let st = read_statement(&g, &profile, main);
        assert_eq!(st.groups.len(), 1);
        assert_eq!(st.annotations(), vec![ann]);
        assert_eq!(st.annotation_triples().len(), 5);
    }

    #[test]
    fn nested_annotations_round_trip() {
        let mut g = graph();
        let main = main_triple(&mut g);

        let mut ann = Annotation::new(
            vocab::rdfs::LABEL,
            AnnValue::Literal(Literal::simple("outer")),
        );
        ann.annotations.push(Annotation::new(
            vocab::rdfs::COMMENT,
            AnnValue::Literal(Literal::simple("inner")),
        ));

        let written = write_annotations(&mut g, main, std::slice::from_ref(&ann), false);
        // Outer group (5) + nested group skeleton (4) + nested annotation (1).
        assert_eq!(written.len(), 10);

        let profile = NodeProfile::new(&g);
        let st = read_statement(&g, &profile, main);
        assert_eq!(st.annotations(), vec![ann]);
    }

    #[test]
    fn two_roots_form_independent_groups() {
        let mut g = graph();
        let main = main_triple(&mut g);

        let first = Annotation::new(
            vocab::rdfs::LABEL,
            AnnValue::Literal(Literal::simple("one")),
        );
        let second = Annotation::new(
            vocab::rdfs::LABEL,
            AnnValue::Literal(Literal::simple("two")),
        );
        write_annotations(&mut g, main, std::slice::from_ref(&first), false);
        write_annotations(&mut g, main, std::slice::from_ref(&second), false);

        let profile = NodeProfile::new(&g);
        let st = read_statement(&g, &profile, main);
        assert_eq!(st.groups.len(), 2);
        assert_eq!(st.annotations(), vec![first, second]);
    }

    #[test]
    fn undeclared_annotation_properties_are_skipped() {
        let mut g = graph();
        let main = main_triple(&mut g);
        let ids = AnnIds::of(&g);

        let root = g.fresh_blank();
        g.insert(Triple::new(root, ids.rdf_type, ids.axiom));
        g.insert(Triple::new(root, ids.source, main.s));
        g.insert(Triple::new(root, ids.property, main.p));
        g.insert(Triple::new(root, ids.target, main.o));
        // Predicate never declared as an annotation property.
        let stray = g.intern_iri("http://example.org/undeclared");
        let v = g.intern(&Term::Literal(Literal::simple("ignored")));
        g.insert(Triple::new(root, stray, v));

        let profile = NodeProfile::new(&g);
        let st = read_statement(&g, &profile, main);
        assert_eq!(st.groups.len(), 1);
        assert!(st.groups[0].annotations.is_empty());
    }
}
