//! Fixed-predicate binary kinds: one main triple `S <pred> O`, subject and
//! object each required to present a specific typed view.
//!
//! This family also carries the symmetric pairwise kinds (equivalence,
//! disjointness, `owl:inverseOf`, `owl:sameAs`, `owl:differentFrom`); their
//! merge behavior comes from `AxiomKind::mergeable`, not from anything in
//! this translator.

use ontograph_graph::{Graph, NodeInterner, Triple, TriplePattern};

use crate::axiom::{binary_parts, binary_payload, Axiom, AxiomKind, Payload};
use crate::config::OntConfig;
use crate::error::OntError;
use crate::profile::{render_triple, NodeProfile, ViewKind};
use crate::translator::{check_write_kind, Translator, WriteReceipt};
use crate::translators::{declare_term, write_axiom_annotations};

/// What the object position must be.
#[derive(Debug, Clone, Copy)]
pub enum ObjectRule {
    View(ViewKind),
    /// Any IRI, no typed view required (annotation property domain/range).
    AnyIri,
}

pub struct BinaryTranslator {
    pub(crate) kind: AxiomKind,
    pub(crate) predicate: &'static str,
    pub(crate) subject: ViewKind,
    pub(crate) object: ObjectRule,
}

impl Translator for BinaryTranslator {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn candidates(&self, g: &Graph, _config: &OntConfig) -> Vec<Triple> {
        let p = g.intern_iri(self.predicate);
        g.matches(TriplePattern::new(None, Some(p), None)).collect()
    }

    fn accepts(
        &self,
        g: &Graph,
        profile: &NodeProfile<'_>,
        t: Triple,
        config: &OntConfig,
    ) -> bool {
        if !profile.can_present_as(t.s, self.subject) {
            return false;
        }
        // When a subject is punned as both an annotation property and an
        // object/data property, the annotation reading of the shared
        // predicates (subPropertyOf, domain, range) yields to the stronger
        // one unless overlaps are requested.
        if self.subject == ViewKind::AnnProp
            && config.ignore_annotation_overlaps
            && (profile.can_present_as(t.s, ViewKind::ObjectProp)
                || profile.can_present_as(t.s, ViewKind::DataProp))
        {
            return false;
        }
        match self.object {
            ObjectRule::View(kind) => profile.can_present_as(t.o, kind),
            ObjectRule::AnyIri => g.term(t.o).is_some_and(|term| term.is_iri()),
        }
    }

    fn read_payload(
        &self,
        g: &Graph,
        _profile: &NodeProfile<'_>,
        t: Triple,
    ) -> Result<Payload, OntError> {
        let s = g.term(t.s);
        let o = g.term(t.o);
        s.as_ref()
            .zip(o.as_ref())
            .and_then(|(s, o)| binary_payload(self.kind, s, o))
            .ok_or_else(|| OntError::BadEncoding {
                triple: render_triple(g, t),
                reason: format!("not a {} component pair", self.kind),
            })
    }

    fn write(&self, g: &mut Graph, axiom: &Axiom) -> Result<WriteReceipt, OntError> {
        check_write_kind(self, axiom)?;
        let (s_term, o_term) = binary_parts(&axiom.payload).ok_or_else(|| {
            OntError::WriteContract(format!("{} payload has no subject/object pair", self.kind))
        })?;

        let main = g.insert_terms(&s_term, &ontograph_graph::Term::Iri(self.predicate.into()), &o_term);
        let mut triples = vec![main];

        declare_term(g, self.subject, &s_term, &mut triples);
        if let ObjectRule::View(kind) = self.object {
            declare_term(g, kind, &o_term, &mut triples);
        }
        write_axiom_annotations(g, main, axiom, &mut triples);

        Ok(WriteReceipt { main, triples })
    }

    fn search_pattern(&self, interner: &NodeInterner, axiom: &Axiom) -> Option<TriplePattern> {
        let (s_term, o_term) = binary_parts(&axiom.payload)?;
        Some(TriplePattern::new(
            Some(interner.intern(&s_term)),
            Some(interner.intern_iri(self.predicate)),
            Some(interner.intern(&o_term)),
        ))
    }
}
