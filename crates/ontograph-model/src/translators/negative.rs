//! Negative property assertions, encoded as a reified blank node:
//!
//! - `_:x rdf:type owl:NegativePropertyAssertion` (the main triple)
//! - `_:x owl:sourceIndividual S`
//! - `_:x owl:assertionProperty P`
//! - `_:x owl:targetIndividual O` or `_:x owl:targetValue "v"`
//!
//! The skeleton triples are provenance (`aux_triples`); the blank root is
//! anonymous, so there is no search pattern and presence checks fall back
//! to a candidate scan.

use ontograph_graph::{vocab, Graph, NodeId, NodeInterner, Term, Triple, TriplePattern};

use crate::axiom::{Axiom, AxiomKind, DataProp, Individual, ObjectProp, Payload};
use crate::config::OntConfig;
use crate::error::OntError;
use crate::profile::{render_triple, NodeProfile, ViewKind};
use crate::translator::{check_write_kind, Translator, WriteReceipt};
use crate::translators::{declare_individual, declare_term, write_axiom_annotations};

struct NegIds {
    rdf_type: NodeId,
    assertion: NodeId,
    source: NodeId,
    property: NodeId,
    target: NodeId,
}

impl NegIds {
    fn of(g: &Graph, data: bool) -> Self {
        Self {
            rdf_type: g.intern_iri(vocab::rdf::TYPE),
            assertion: g.intern_iri(vocab::owl::NEGATIVE_PROPERTY_ASSERTION),
            source: g.intern_iri(vocab::owl::SOURCE_INDIVIDUAL),
            property: g.intern_iri(vocab::owl::ASSERTION_PROPERTY),
            target: g.intern_iri(if data {
                vocab::owl::TARGET_VALUE
            } else {
                vocab::owl::TARGET_INDIVIDUAL
            }),
        }
    }
}

pub struct NegativeAssertionTranslator {
    pub(crate) data: bool,
}

impl NegativeAssertionTranslator {
    fn parts(&self, g: &Graph, root: NodeId) -> Option<(NodeId, NodeId, NodeId)> {
        let ids = NegIds::of(g, self.data);
        Some((
            g.object(root, ids.source)?,
            g.object(root, ids.property)?,
            g.object(root, ids.target)?,
        ))
    }
}

impl Translator for NegativeAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        if self.data {
            AxiomKind::NegativeDataPropertyAssertion
        } else {
            AxiomKind::NegativeObjectPropertyAssertion
        }
    }

    fn candidates(&self, g: &Graph, _config: &OntConfig) -> Vec<Triple> {
        let ids = NegIds::of(g, self.data);
        g.matches(TriplePattern::new(
            None,
            Some(ids.rdf_type),
            Some(ids.assertion),
        ))
        .collect()
    }

    fn accepts(
        &self,
        g: &Graph,
        profile: &NodeProfile<'_>,
        t: Triple,
        _config: &OntConfig,
    ) -> bool {
        let Some((source, prop, target)) = self.parts(g, t.s) else {
            return false;
        };
        if !profile.can_present_as(source, ViewKind::Individual) {
            return false;
        }
        if self.data {
            profile.can_present_as(prop, ViewKind::DataProp)
                && g.term(target).is_some_and(|term| term.is_literal())
        } else {
            profile.can_present_as(prop, ViewKind::ObjectProp)
                && profile.can_present_as(target, ViewKind::Individual)
        }
    }

    fn read_payload(
        &self,
        g: &Graph,
        _profile: &NodeProfile<'_>,
        t: Triple,
    ) -> Result<Payload, OntError> {
        let bad = |reason: &str| OntError::BadEncoding {
            triple: render_triple(g, t),
            reason: reason.to_string(),
        };
        let (source, prop, target) = self
            .parts(g, t.s)
            .ok_or_else(|| bad("incomplete negative assertion skeleton"))?;

        let subject = g
            .term(source)
            .as_ref()
            .and_then(Individual::from_term)
            .ok_or_else(|| bad("source is not an individual"))?;
        let prop_iri = g
            .term(prop)
            .and_then(|term| term.as_iri().map(str::to_string))
            .ok_or_else(|| bad("assertion property is not an IRI"))?;

        if self.data {
            let value = g
                .term(target)
                .and_then(|term| term.as_literal().cloned())
                .ok_or_else(|| bad("target value is not a literal"))?;
            Ok(Payload::NegativeDataPropertyAssertion {
                subject,
                prop: DataProp(prop_iri),
                value,
            })
        } else {
            let object = g
                .term(target)
                .as_ref()
                .and_then(Individual::from_term)
                .ok_or_else(|| bad("target is not an individual"))?;
            Ok(Payload::NegativeObjectPropertyAssertion {
                subject,
                prop: ObjectProp(prop_iri),
                object,
            })
        }
    }

    fn aux_triples(&self, g: &Graph, t: Triple) -> Vec<Triple> {
        let ids = NegIds::of(g, self.data);
        let Some((source, prop, target)) = self.parts(g, t.s) else {
            return Vec::new();
        };
        vec![
            Triple::new(t.s, ids.source, source),
            Triple::new(t.s, ids.property, prop),
            Triple::new(t.s, ids.target, target),
        ]
    }

    fn write(&self, g: &mut Graph, axiom: &Axiom) -> Result<WriteReceipt, OntError> {
        check_write_kind(self, axiom)?;

        let (subject, prop_term, prop_kind, target_term, target_ind) = match &axiom.payload {
            Payload::NegativeObjectPropertyAssertion {
                subject,
                prop,
                object,
            } => (
                subject,
                Term::Iri(prop.0.clone()),
                ViewKind::ObjectProp,
                object.term(),
                Some(object),
            ),
            Payload::NegativeDataPropertyAssertion {
                subject,
                prop,
                value,
            } => (
                subject,
                Term::Iri(prop.0.clone()),
                ViewKind::DataProp,
                Term::Literal(value.clone()),
                None,
            ),
            _ => {
                return Err(OntError::WriteContract(
                    "negative assertion payload expected".to_string(),
                ))
            }
        };

        let ids = NegIds::of(g, self.data);
        let root = g.fresh_blank();
        let main = Triple::new(root, ids.rdf_type, ids.assertion);
        let source = g.intern(&subject.term());
        let prop = g.intern(&prop_term);
        let target = g.intern(&target_term);

        let mut triples = Vec::new();
        for t in [
            main,
            Triple::new(root, ids.source, source),
            Triple::new(root, ids.property, prop),
            Triple::new(root, ids.target, target),
        ] {
            g.insert(t);
            triples.push(t);
        }

        declare_term(g, prop_kind, &prop_term, &mut triples);
        declare_individual(g, subject, &mut triples);
        if let Some(object) = target_ind {
            declare_individual(g, object, &mut triples);
        }
        write_axiom_annotations(g, main, axiom, &mut triples);

        Ok(WriteReceipt { main, triples })
    }

    fn search_pattern(&self, _interner: &NodeInterner, _axiom: &Axiom) -> Option<TriplePattern> {
        // The root is a fresh blank node; nothing concrete to probe for.
        None
    }
}
