//! Typed node views: the node-typing collaborator at its interface boundary.
//!
//! A node's capabilities are a small closed set ([`ViewKind`]), resolved
//! once per node from declaration triples and memoized in a cache shared by
//! every view of one model facade. Punning legality lives entirely here:
//! the translation core only ever asks `can_present_as`/`present_as`.
//!
//! Resolution rules:
//! - literals present as nothing (they are consumed directly as literals)
//! - `owl:Thing`/`owl:Nothing` are classes, XSD types and `rdfs:Literal`
//!   are datatypes, the builtin annotation properties (`rdfs:label` etc.)
//!   are annotation properties — all without declarations
//! - other reserved-vocabulary IRIs present as nothing
//! - declared IRIs collect capabilities from their `rdf:type` triples in
//!   graph order; an object/data property conflict is resolved first-wins
//! - a `rdf:type` pointing at a non-reserved IRI makes the subject an
//!   individual
//! - blank nodes are list cells if they carry `rdf:first`, nothing if they
//!   root a reification, and anonymous individuals otherwise

use dashmap::DashMap;
use ontograph_graph::{vocab, Graph, NodeId, Term, Triple, TriplePattern};
use serde::{Deserialize, Serialize};

use crate::error::OntError;

/// The closed capability set a node may present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    Class,
    ObjectProp,
    DataProp,
    AnnProp,
    Individual,
    Datatype,
    List,
}

const CAP_CLASS: u8 = 1 << 0;
const CAP_OBJECT_PROP: u8 = 1 << 1;
const CAP_DATA_PROP: u8 = 1 << 2;
const CAP_ANN_PROP: u8 = 1 << 3;
const CAP_INDIVIDUAL: u8 = 1 << 4;
const CAP_DATATYPE: u8 = 1 << 5;
const CAP_LIST: u8 = 1 << 6;

impl ViewKind {
    fn mask(self) -> u8 {
        match self {
            ViewKind::Class => CAP_CLASS,
            ViewKind::ObjectProp => CAP_OBJECT_PROP,
            ViewKind::DataProp => CAP_DATA_PROP,
            ViewKind::AnnProp => CAP_ANN_PROP,
            ViewKind::Individual => CAP_INDIVIDUAL,
            ViewKind::Datatype => CAP_DATATYPE,
            ViewKind::List => CAP_LIST,
        }
    }
}

/// A node together with the view it was granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedNode {
    pub id: NodeId,
    pub term: Term,
    pub kind: ViewKind,
}

/// Shared capability memo, owned by the facade and cleared on mutation.
pub type CapCache = DashMap<NodeId, u8, ahash::RandomState>;

/// Annotation properties usable without a declaration.
pub const BUILTIN_ANNOTATION_PROPS: [&str; 6] = [
    vocab::rdfs::LABEL,
    vocab::rdfs::COMMENT,
    vocab::rdfs::SEE_ALSO,
    vocab::rdfs::IS_DEFINED_BY,
    vocab::owl::VERSION_INFO,
    vocab::owl::DEPRECATED,
];

struct ProfileIds {
    rdf_type: NodeId,
    rdf_first: NodeId,
    owl_class: NodeId,
    owl_object_prop: NodeId,
    owl_data_prop: NodeId,
    owl_ann_prop: NodeId,
    owl_named_individual: NodeId,
    rdfs_datatype: NodeId,
    owl_axiom: NodeId,
    owl_annotation: NodeId,
    owl_neg_assertion: NodeId,
}

/// Per-snapshot view resolver over one graph.
pub struct NodeProfile<'g> {
    graph: &'g Graph,
    memo: Option<&'g CapCache>,
    memo_cap: usize,
    ids: ProfileIds,
}

impl<'g> NodeProfile<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_memo(graph, None, 0)
    }

    pub fn with_memo(graph: &'g Graph, memo: Option<&'g CapCache>, memo_cap: usize) -> Self {
        let ids = ProfileIds {
            rdf_type: graph.intern_iri(vocab::rdf::TYPE),
            rdf_first: graph.intern_iri(vocab::rdf::FIRST),
            owl_class: graph.intern_iri(vocab::owl::CLASS),
            owl_object_prop: graph.intern_iri(vocab::owl::OBJECT_PROPERTY),
            owl_data_prop: graph.intern_iri(vocab::owl::DATATYPE_PROPERTY),
            owl_ann_prop: graph.intern_iri(vocab::owl::ANNOTATION_PROPERTY),
            owl_named_individual: graph.intern_iri(vocab::owl::NAMED_INDIVIDUAL),
            rdfs_datatype: graph.intern_iri(vocab::rdfs::DATATYPE),
            owl_axiom: graph.intern_iri(vocab::owl::AXIOM),
            owl_annotation: graph.intern_iri(vocab::owl::ANNOTATION),
            owl_neg_assertion: graph.intern_iri(vocab::owl::NEGATIVE_PROPERTY_ASSERTION),
        };
        Self {
            graph,
            memo,
            memo_cap,
            ids,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn can_present_as(&self, node: NodeId, kind: ViewKind) -> bool {
        self.caps(node) & kind.mask() != 0
    }

    pub fn present_as(&self, node: NodeId, kind: ViewKind) -> Result<TypedNode, OntError> {
        if !self.can_present_as(node, kind) {
            return Err(OntError::CannotPresentAs {
                node: render_node(self.graph, node),
                kind,
            });
        }
        let term = self
            .graph
            .term(node)
            .ok_or(ontograph_graph::GraphError::UnknownNode(node))?;
        Ok(TypedNode {
            id: node,
            term,
            kind,
        })
    }

    /// Whether a node roots an annotation reification or a negative
    /// property assertion. Such nodes are encoding scaffolding and never
    /// present as individuals or annotation subjects.
    pub fn is_reification_root(&self, node: NodeId) -> bool {
        self.graph
            .contains_spo(node, self.ids.rdf_type, self.ids.owl_axiom)
            || self
                .graph
                .contains_spo(node, self.ids.rdf_type, self.ids.owl_annotation)
            || self
                .graph
                .contains_spo(node, self.ids.rdf_type, self.ids.owl_neg_assertion)
    }

    fn caps(&self, node: NodeId) -> u8 {
        if let Some(memo) = self.memo {
            if let Some(caps) = memo.get(&node) {
                return *caps;
            }
        }
        let caps = self.compute_caps(node);
        if let Some(memo) = self.memo {
            if memo.len() < self.memo_cap {
                memo.insert(node, caps);
            }
        }
        caps
    }

    fn compute_caps(&self, node: NodeId) -> u8 {
        let Some(term) = self.graph.term(node) else {
            return 0;
        };

        match term {
            Term::Literal(_) => 0,
            Term::Blank(_) => {
                let has_first = self
                    .graph
                    .matches(TriplePattern::new(Some(node), Some(self.ids.rdf_first), None))
                    .next()
                    .is_some();
                if has_first {
                    CAP_LIST
                } else if self.is_reification_root(node) {
                    0
                } else {
                    CAP_INDIVIDUAL
                }
            }
            Term::Iri(iri) => self.iri_caps(node, &iri),
        }
    }

    fn iri_caps(&self, node: NodeId, iri: &str) -> u8 {
        if iri == vocab::owl::THING || iri == vocab::owl::NOTHING {
            return CAP_CLASS;
        }
        if iri.starts_with(vocab::xsd::NS)
            || iri == vocab::rdfs::LITERAL
            || iri == vocab::rdf::LANG_STRING
        {
            return CAP_DATATYPE;
        }
        if BUILTIN_ANNOTATION_PROPS.contains(&iri) {
            return CAP_ANN_PROP;
        }
        if iri.starts_with(vocab::rdf::NS)
            || iri.starts_with(vocab::rdfs::NS)
            || iri.starts_with(vocab::owl::NS)
        {
            return 0;
        }

        let mut caps = 0u8;
        for t in self
            .graph
            .matches(TriplePattern::new(Some(node), Some(self.ids.rdf_type), None))
        {
            caps |= self.declared_cap(caps, t);
        }
        caps
    }

    fn declared_cap(&self, already: u8, t: Triple) -> u8 {
        // Object/data property and class/datatype punning are illegal;
        // the first declaration in graph order wins.
        if t.o == self.ids.owl_class {
            if already & CAP_DATATYPE != 0 {
                0
            } else {
                CAP_CLASS
            }
        } else if t.o == self.ids.owl_object_prop {
            if already & CAP_DATA_PROP != 0 {
                0
            } else {
                CAP_OBJECT_PROP
            }
        } else if t.o == self.ids.owl_data_prop {
            if already & CAP_OBJECT_PROP != 0 {
                0
            } else {
                CAP_DATA_PROP
            }
        } else if t.o == self.ids.owl_ann_prop {
            CAP_ANN_PROP
        } else if t.o == self.ids.owl_named_individual {
            CAP_INDIVIDUAL
        } else if t.o == self.ids.rdfs_datatype {
            if already & CAP_CLASS != 0 {
                0
            } else {
                CAP_DATATYPE
            }
        } else {
            // `rdf:type` pointing at a user-space IRI: an instance of it.
            match self.graph.term(t.o) {
                Some(Term::Iri(class_iri)) if !is_reserved(&class_iri) => CAP_INDIVIDUAL,
                _ => 0,
            }
        }
    }
}

pub(crate) fn is_reserved(iri: &str) -> bool {
    iri.starts_with(vocab::rdf::NS)
        || iri.starts_with(vocab::rdfs::NS)
        || iri.starts_with(vocab::owl::NS)
        || iri.starts_with(vocab::xsd::NS)
}

/// Human-readable rendering of a node for error messages.
pub(crate) fn render_node(graph: &Graph, node: NodeId) -> String {
    match graph.term(node) {
        Some(Term::Iri(iri)) => format!("<{iri}>"),
        Some(Term::Blank(label)) => format!("_:{label}"),
        Some(Term::Literal(lit)) => format!("{:?}", lit.lexical),
        None => format!("{node:?}"),
    }
}

/// Human-readable rendering of a triple for error messages.
pub(crate) fn render_triple(graph: &Graph, t: Triple) -> String {
    format!(
        "{} {} {}",
        render_node(graph, t.s),
        render_node(graph, t.p),
        render_node(graph, t.o)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_graph::NodeInterner;
    use std::sync::Arc;

    fn graph() -> Graph {
        Graph::new(Arc::new(NodeInterner::new()))
    }

    fn declare(g: &mut Graph, subject: &str, category: &str) -> NodeId {
        let s = g.intern_iri(subject);
        let t = g.intern_iri(vocab::rdf::TYPE);
        let c = g.intern_iri(category);
        g.insert(Triple::new(s, t, c));
        s
    }

    #[test]
    fn declared_class_presents_as_class_only() {
        let mut g = graph();
        let a = declare(&mut g, "http://example.org/A", vocab::owl::CLASS);
        let profile = NodeProfile::new(&g);

        assert!(profile.can_present_as(a, ViewKind::Class));
        assert!(!profile.can_present_as(a, ViewKind::ObjectProp));
        assert!(!profile.can_present_as(a, ViewKind::Individual));
    }

    #[test]
    fn object_data_punning_is_first_wins() {
        let mut g = graph();
        let p = declare(&mut g, "http://example.org/p", vocab::owl::OBJECT_PROPERTY);
        declare(&mut g, "http://example.org/p", vocab::owl::DATATYPE_PROPERTY);
        let profile = NodeProfile::new(&g);

        assert!(profile.can_present_as(p, ViewKind::ObjectProp));
        assert!(!profile.can_present_as(p, ViewKind::DataProp));
    }

    #[test]
    fn class_individual_punning_is_legal() {
        let mut g = graph();
        let a = declare(&mut g, "http://example.org/A", vocab::owl::CLASS);
        declare(&mut g, "http://example.org/A", vocab::owl::NAMED_INDIVIDUAL);
        let profile = NodeProfile::new(&g);

        assert!(profile.can_present_as(a, ViewKind::Class));
        assert!(profile.can_present_as(a, ViewKind::Individual));
    }

    #[test]
    fn builtins_present_without_declarations() {
        let mut g = graph();
        let thing = g.intern_iri(vocab::owl::THING);
        let label = g.intern_iri(vocab::rdfs::LABEL);
        let xsd_string = g.intern_iri(vocab::xsd::STRING);
        let owl_class = g.intern_iri(vocab::owl::CLASS);
        let profile = NodeProfile::new(&g);

        assert!(profile.can_present_as(thing, ViewKind::Class));
        assert!(profile.can_present_as(label, ViewKind::AnnProp));
        assert!(profile.can_present_as(xsd_string, ViewKind::Datatype));
        // The meta-vocabulary itself presents as nothing.
        assert!(!profile.can_present_as(owl_class, ViewKind::Class));
    }

    #[test]
    fn typed_instance_is_an_individual() {
        let mut g = graph();
        declare(&mut g, "http://example.org/A", vocab::owl::CLASS);
        let i = declare(&mut g, "http://example.org/i", "http://example.org/A");
        let profile = NodeProfile::new(&g);

        assert!(profile.can_present_as(i, ViewKind::Individual));
    }

    #[test]
    fn present_as_reports_the_offending_node() {
        let mut g = graph();
        let a = declare(&mut g, "http://example.org/A", vocab::owl::CLASS);
        let profile = NodeProfile::new(&g);

        let err = profile
            .present_as(a, ViewKind::DataProp)
            .expect_err("class is not a data property");
        assert!(matches!(err, OntError::CannotPresentAs { .. }));
        assert!(err.to_string().contains("http://example.org/A"));
    }
}
