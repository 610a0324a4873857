//! Property characteristic kinds: one type triple
//! `P rdf:type owl:<Characteristic>Property`.
//!
//! `owl:FunctionalProperty` is shared by the object and data variants; the
//! subject's property view decides which kind a statement encodes.

use ontograph_graph::{vocab, Graph, NodeInterner, Term, Triple, TriplePattern};

use crate::axiom::{characteristic_payload, characteristic_prop, Axiom, AxiomKind, Payload};
use crate::config::OntConfig;
use crate::error::OntError;
use crate::profile::{render_triple, NodeProfile, ViewKind};
use crate::translator::{check_write_kind, Translator, WriteReceipt};
use crate::translators::{declare_term, write_axiom_annotations};

pub struct CharacteristicTranslator {
    pub(crate) kind: AxiomKind,
    pub(crate) type_iri: &'static str,
    pub(crate) prop: ViewKind,
}

impl Translator for CharacteristicTranslator {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn candidates(&self, g: &Graph, _config: &OntConfig) -> Vec<Triple> {
        let p = g.intern_iri(vocab::rdf::TYPE);
        let o = g.intern_iri(self.type_iri);
        g.matches(TriplePattern::new(None, Some(p), Some(o)))
            .collect()
    }

    fn accepts(
        &self,
        _g: &Graph,
        profile: &NodeProfile<'_>,
        t: Triple,
        _config: &OntConfig,
    ) -> bool {
        profile.can_present_as(t.s, self.prop)
    }

    fn read_payload(
        &self,
        g: &Graph,
        _profile: &NodeProfile<'_>,
        t: Triple,
    ) -> Result<Payload, OntError> {
        g.term(t.s)
            .as_ref()
            .and_then(|s| characteristic_payload(self.kind, s))
            .ok_or_else(|| OntError::BadEncoding {
                triple: render_triple(g, t),
                reason: format!("subject is not a {} property", self.kind),
            })
    }

    fn write(&self, g: &mut Graph, axiom: &Axiom) -> Result<WriteReceipt, OntError> {
        check_write_kind(self, axiom)?;
        let prop_iri = characteristic_prop(&axiom.payload).ok_or_else(|| {
            OntError::WriteContract(format!("{} payload has no property", self.kind))
        })?;
        let prop_term = Term::Iri(prop_iri.to_string());

        let main = g.insert_terms(
            &prop_term,
            &Term::Iri(vocab::rdf::TYPE.into()),
            &Term::Iri(self.type_iri.into()),
        );
        let mut triples = vec![main];

        declare_term(g, self.prop, &prop_term, &mut triples);
        write_axiom_annotations(g, main, axiom, &mut triples);

        Ok(WriteReceipt { main, triples })
    }

    fn search_pattern(&self, interner: &NodeInterner, axiom: &Axiom) -> Option<TriplePattern> {
        let prop_iri = characteristic_prop(&axiom.payload)?;
        Some(TriplePattern::new(
            Some(interner.intern_iri(prop_iri)),
            Some(interner.intern_iri(vocab::rdf::TYPE)),
            Some(interner.intern_iri(self.type_iri)),
        ))
    }
}
