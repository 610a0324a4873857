//! Assertion kinds: class membership, property values, and annotations on
//! arbitrary subjects.
//!
//! Property assertions have no fixed predicate, so their candidate scans go
//! property-by-property over the declared properties of the right category;
//! `accepts` then re-checks every position against the node profile.

use ahash::AHashSet;
use ontograph_graph::{vocab, Graph, NodeId, NodeInterner, Term, Triple, TriplePattern};

use crate::axiom::{AnnProp, AnnSubject, AnnValue, Axiom, AxiomKind, Class, DataProp, Individual, ObjectProp, Payload};
use crate::config::OntConfig;
use crate::error::OntError;
use crate::profile::{render_triple, NodeProfile, ViewKind, BUILTIN_ANNOTATION_PROPS};
use crate::translator::{check_write_kind, Translator, WriteReceipt};
use crate::translators::{declare_individual, declare_term, write_axiom_annotations};

fn bad(g: &Graph, t: Triple, kind: AxiomKind) -> OntError {
    OntError::BadEncoding {
        triple: render_triple(g, t),
        reason: format!("not a {kind} statement"),
    }
}

/// Main triples whose predicate is any of `props`, property-major, each
/// block in graph order.
fn by_properties(g: &Graph, props: impl IntoIterator<Item = NodeId>) -> Vec<Triple> {
    let mut out = Vec::new();
    for p in props {
        out.extend(g.matches(TriplePattern::new(None, Some(p), None)));
    }
    out
}

/// Subjects declared as instances of `category`, deduplicated, in graph
/// order.
fn declared_subjects(g: &Graph, category: &str) -> Vec<NodeId> {
    let p = g.intern_iri(vocab::rdf::TYPE);
    let o = g.intern_iri(category);
    let mut seen = AHashSet::new();
    g.subjects(p, o).filter(|id| seen.insert(*id)).collect()
}

// ============================================================================
// Class Assertion
// ============================================================================

pub struct ClassAssertionTranslator;

impl Translator for ClassAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::ClassAssertion
    }

    fn candidates(&self, g: &Graph, _config: &OntConfig) -> Vec<Triple> {
        let p = g.intern_iri(vocab::rdf::TYPE);
        g.matches(TriplePattern::new(None, Some(p), None)).collect()
    }

    fn accepts(
        &self,
        _g: &Graph,
        profile: &NodeProfile<'_>,
        t: Triple,
        _config: &OntConfig,
    ) -> bool {
        profile.can_present_as(t.o, ViewKind::Class)
            && profile.can_present_as(t.s, ViewKind::Individual)
    }

    fn read_payload(
        &self,
        g: &Graph,
        _profile: &NodeProfile<'_>,
        t: Triple,
    ) -> Result<Payload, OntError> {
        let individual = g
            .term(t.s)
            .as_ref()
            .and_then(Individual::from_term)
            .ok_or_else(|| bad(g, t, self.kind()))?;
        let class = g
            .term(t.o)
            .and_then(|term| term.as_iri().map(str::to_string))
            .ok_or_else(|| bad(g, t, self.kind()))?;
        Ok(Payload::ClassAssertion {
            individual,
            class: Class(class),
        })
    }

    fn write(&self, g: &mut Graph, axiom: &Axiom) -> Result<WriteReceipt, OntError> {
        check_write_kind(self, axiom)?;
        let Payload::ClassAssertion { individual, class } = &axiom.payload else {
            return Err(OntError::WriteContract(
                "class assertion payload expected".to_string(),
            ));
        };

        let class_term = Term::Iri(class.0.clone());
        let main = g.insert_terms(
            &individual.term(),
            &Term::Iri(vocab::rdf::TYPE.into()),
            &class_term,
        );
        let mut triples = vec![main];

        declare_term(g, ViewKind::Class, &class_term, &mut triples);
        declare_individual(g, individual, &mut triples);
        write_axiom_annotations(g, main, axiom, &mut triples);

        Ok(WriteReceipt { main, triples })
    }

    fn search_pattern(&self, interner: &NodeInterner, axiom: &Axiom) -> Option<TriplePattern> {
        let Payload::ClassAssertion { individual, class } = &axiom.payload else {
            return None;
        };
        Some(TriplePattern::new(
            Some(interner.intern(&individual.term())),
            Some(interner.intern_iri(vocab::rdf::TYPE)),
            Some(interner.intern_iri(&class.0)),
        ))
    }
}

// ============================================================================
// Object Property Assertion
// ============================================================================

pub struct ObjectPropertyAssertionTranslator;

impl Translator for ObjectPropertyAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::ObjectPropertyAssertion
    }

    fn candidates(&self, g: &Graph, _config: &OntConfig) -> Vec<Triple> {
        by_properties(g, declared_subjects(g, vocab::owl::OBJECT_PROPERTY))
    }

    fn accepts(
        &self,
        _g: &Graph,
        profile: &NodeProfile<'_>,
        t: Triple,
        _config: &OntConfig,
    ) -> bool {
        profile.can_present_as(t.p, ViewKind::ObjectProp)
            && profile.can_present_as(t.s, ViewKind::Individual)
            && profile.can_present_as(t.o, ViewKind::Individual)
    }

    fn read_payload(
        &self,
        g: &Graph,
        _profile: &NodeProfile<'_>,
        t: Triple,
    ) -> Result<Payload, OntError> {
        let subject = g
            .term(t.s)
            .as_ref()
            .and_then(Individual::from_term)
            .ok_or_else(|| bad(g, t, self.kind()))?;
        let prop = g
            .term(t.p)
            .and_then(|term| term.as_iri().map(str::to_string))
            .ok_or_else(|| bad(g, t, self.kind()))?;
        let object = g
            .term(t.o)
            .as_ref()
            .and_then(Individual::from_term)
            .ok_or_else(|| bad(g, t, self.kind()))?;
        Ok(Payload::ObjectPropertyAssertion {
            subject,
            prop: ObjectProp(prop),
            object,
        })
    }

    fn write(&self, g: &mut Graph, axiom: &Axiom) -> Result<WriteReceipt, OntError> {
        check_write_kind(self, axiom)?;
        let Payload::ObjectPropertyAssertion {
            subject,
            prop,
            object,
        } = &axiom.payload
        else {
            return Err(OntError::WriteContract(
                "object property assertion payload expected".to_string(),
            ));
        };

        let prop_term = Term::Iri(prop.0.clone());
        let main = g.insert_terms(&subject.term(), &prop_term, &object.term());
        let mut triples = vec![main];

        declare_term(g, ViewKind::ObjectProp, &prop_term, &mut triples);
        declare_individual(g, subject, &mut triples);
        declare_individual(g, object, &mut triples);
        write_axiom_annotations(g, main, axiom, &mut triples);

        Ok(WriteReceipt { main, triples })
    }

    fn search_pattern(&self, interner: &NodeInterner, axiom: &Axiom) -> Option<TriplePattern> {
        let Payload::ObjectPropertyAssertion {
            subject,
            prop,
            object,
        } = &axiom.payload
        else {
            return None;
        };
        Some(TriplePattern::new(
            Some(interner.intern(&subject.term())),
            Some(interner.intern_iri(&prop.0)),
            Some(interner.intern(&object.term())),
        ))
    }
}

// ============================================================================
// Data Property Assertion
// ============================================================================

pub struct DataPropertyAssertionTranslator;

impl Translator for DataPropertyAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DataPropertyAssertion
    }

    fn candidates(&self, g: &Graph, _config: &OntConfig) -> Vec<Triple> {
        by_properties(g, declared_subjects(g, vocab::owl::DATATYPE_PROPERTY))
    }

    fn accepts(
        &self,
        g: &Graph,
        profile: &NodeProfile<'_>,
        t: Triple,
        _config: &OntConfig,
    ) -> bool {
        profile.can_present_as(t.p, ViewKind::DataProp)
            && profile.can_present_as(t.s, ViewKind::Individual)
            && g.term(t.o).is_some_and(|term| term.is_literal())
    }

    fn read_payload(
        &self,
        g: &Graph,
        _profile: &NodeProfile<'_>,
        t: Triple,
    ) -> Result<Payload, OntError> {
        let subject = g
            .term(t.s)
            .as_ref()
            .and_then(Individual::from_term)
            .ok_or_else(|| bad(g, t, self.kind()))?;
        let prop = g
            .term(t.p)
            .and_then(|term| term.as_iri().map(str::to_string))
            .ok_or_else(|| bad(g, t, self.kind()))?;
        let value = g
            .term(t.o)
            .and_then(|term| term.as_literal().cloned())
            .ok_or_else(|| bad(g, t, self.kind()))?;
        Ok(Payload::DataPropertyAssertion {
            subject,
            prop: DataProp(prop),
            value,
        })
    }

    fn write(&self, g: &mut Graph, axiom: &Axiom) -> Result<WriteReceipt, OntError> {
        check_write_kind(self, axiom)?;
        let Payload::DataPropertyAssertion {
            subject,
            prop,
            value,
        } = &axiom.payload
        else {
            return Err(OntError::WriteContract(
                "data property assertion payload expected".to_string(),
            ));
        };

        let prop_term = Term::Iri(prop.0.clone());
        let main = g.insert_terms(
            &subject.term(),
            &prop_term,
            &Term::Literal(value.clone()),
        );
        let mut triples = vec![main];

        declare_term(g, ViewKind::DataProp, &prop_term, &mut triples);
        declare_individual(g, subject, &mut triples);
        write_axiom_annotations(g, main, axiom, &mut triples);

        Ok(WriteReceipt { main, triples })
    }

    fn search_pattern(&self, interner: &NodeInterner, axiom: &Axiom) -> Option<TriplePattern> {
        let Payload::DataPropertyAssertion {
            subject,
            prop,
            value,
        } = &axiom.payload
        else {
            return None;
        };
        Some(TriplePattern::new(
            Some(interner.intern(&subject.term())),
            Some(interner.intern_iri(&prop.0)),
            Some(interner.intern(&Term::Literal(value.clone()))),
        ))
    }
}

// ============================================================================
// Annotation Assertion
// ============================================================================

pub struct AnnotationAssertionTranslator;

impl Translator for AnnotationAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::AnnotationAssertion
    }

    fn candidates(&self, g: &Graph, _config: &OntConfig) -> Vec<Triple> {
        let mut props: Vec<NodeId> = BUILTIN_ANNOTATION_PROPS
            .iter()
            .map(|iri| g.intern_iri(iri))
            .collect();
        let mut seen: AHashSet<NodeId> = props.iter().copied().collect();
        props.extend(
            declared_subjects(g, vocab::owl::ANNOTATION_PROPERTY)
                .into_iter()
                .filter(|id| seen.insert(*id)),
        );
        by_properties(g, props)
    }

    fn accepts(
        &self,
        g: &Graph,
        profile: &NodeProfile<'_>,
        t: Triple,
        config: &OntConfig,
    ) -> bool {
        if !profile.can_present_as(t.p, ViewKind::AnnProp) {
            return false;
        }
        // A predicate punned as a real property reads as that property's
        // assertion kind, not as an annotation, unless overlaps are wanted.
        if config.ignore_annotation_overlaps
            && (profile.can_present_as(t.p, ViewKind::ObjectProp)
                || profile.can_present_as(t.p, ViewKind::DataProp))
        {
            return false;
        }
        match g.term(t.s) {
            Some(Term::Iri(_)) => true,
            // Anonymous subjects: never encoding scaffolding, and only when
            // bulk annotation assertions are allowed at all.
            Some(Term::Blank(_)) => {
                config.allow_bulk_annotation_assertions
                    && profile.can_present_as(t.s, ViewKind::Individual)
            }
            _ => false,
        }
    }

    fn read_payload(
        &self,
        g: &Graph,
        _profile: &NodeProfile<'_>,
        t: Triple,
    ) -> Result<Payload, OntError> {
        let subject = g
            .term(t.s)
            .as_ref()
            .and_then(AnnSubject::from_term)
            .ok_or_else(|| bad(g, t, self.kind()))?;
        let prop = g
            .term(t.p)
            .and_then(|term| term.as_iri().map(str::to_string))
            .ok_or_else(|| bad(g, t, self.kind()))?;
        let value = g
            .term(t.o)
            .map(|term| AnnValue::from_term(&term))
            .ok_or_else(|| bad(g, t, self.kind()))?;
        Ok(Payload::AnnotationAssertion {
            subject,
            prop: AnnProp(prop),
            value,
        })
    }

    fn write(&self, g: &mut Graph, axiom: &Axiom) -> Result<WriteReceipt, OntError> {
        check_write_kind(self, axiom)?;
        let Payload::AnnotationAssertion {
            subject,
            prop,
            value,
        } = &axiom.payload
        else {
            return Err(OntError::WriteContract(
                "annotation assertion payload expected".to_string(),
            ));
        };

        let prop_term = Term::Iri(prop.0.clone());
        let main = g.insert_terms(&subject.term(), &prop_term, &value.term());
        let mut triples = vec![main];

        declare_term(g, ViewKind::AnnProp, &prop_term, &mut triples);
        write_axiom_annotations(g, main, axiom, &mut triples);

        Ok(WriteReceipt { main, triples })
    }

    fn search_pattern(&self, interner: &NodeInterner, axiom: &Axiom) -> Option<TriplePattern> {
        let Payload::AnnotationAssertion {
            subject,
            prop,
            value,
        } = &axiom.payload
        else {
            return None;
        };
        Some(TriplePattern::new(
            Some(interner.intern(&subject.term())),
            Some(interner.intern_iri(&prop.0)),
            Some(interner.intern(&value.term())),
        ))
    }
}
