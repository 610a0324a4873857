//! List-backed kinds: one main triple whose object heads an RDF collection
//! (`owl:disjointUnionOf`, `owl:hasKey`, `owl:propertyChainAxiom`).
//!
//! The collection's cell triples are provenance, so removal reclaims the
//! whole chain. `accepts` only shape-checks the head; item validation
//! happens at read time and surfaces as a malformed-encoding error, which
//! the facade skips or reports per `ignore_read_errors`.

use ontograph_graph::{list, vocab, Graph, NodeId, NodeInterner, Term, Triple, TriplePattern};

use crate::axiom::{Axiom, AxiomKind, Class, DataProp, ObjectProp, Payload, PropRef};
use crate::config::OntConfig;
use crate::error::OntError;
use crate::profile::{render_triple, NodeProfile, ViewKind};
use crate::translator::{check_write_kind, Translator, WriteReceipt};
use crate::translators::{declare_term, write_axiom_annotations};

/// What every collection item must be.
#[derive(Debug, Clone, Copy)]
pub enum ItemRule {
    Class,
    ObjectProp,
    /// Object or data property, decided per item by the profile.
    Prop,
}

pub struct ListTranslator {
    pub(crate) kind: AxiomKind,
    pub(crate) predicate: &'static str,
    pub(crate) subject: ViewKind,
    pub(crate) items: ItemRule,
}

impl ListTranslator {
    fn item_iri(&self, g: &Graph, t: Triple, item: NodeId) -> Result<String, OntError> {
        g.term(item)
            .and_then(|term| term.as_iri().map(str::to_string))
            .ok_or_else(|| OntError::BadEncoding {
                triple: render_triple(g, t),
                reason: "collection item is not an IRI".to_string(),
            })
    }
}

impl Translator for ListTranslator {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn validating(&self) -> bool {
        true
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
        _config: &OntConfig,
    ) -> bool {
        if !profile.can_present_as(t.s, self.subject) {
            return false;
        }
        match g.term(t.o) {
            Some(Term::Blank(_)) => true,
            Some(Term::Iri(iri)) => iri == vocab::rdf::NIL,
            _ => false,
        }
    }

    fn read_payload(
        &self,
        g: &Graph,
        profile: &NodeProfile<'_>,
        t: Triple,
    ) -> Result<Payload, OntError> {
        let subject = g
            .term(t.s)
            .and_then(|term| term.as_iri().map(str::to_string))
            .ok_or_else(|| OntError::BadEncoding {
                triple: render_triple(g, t),
                reason: "subject is not an IRI".to_string(),
            })?;
        let slice = list::read_list(g, t.o).map_err(|e| OntError::BadEncoding {
            triple: render_triple(g, t),
            reason: e.to_string(),
        })?;

        Ok(match self.kind {
            AxiomKind::DisjointUnion => {
                let mut members = Vec::with_capacity(slice.items.len());
                for item in &slice.items {
                    members.push(Class(self.item_iri(g, t, *item)?));
                }
                Payload::DisjointUnion {
                    class: Class(subject),
                    members,
                }
            }
            AxiomKind::SubPropertyChainOf => {
                let mut chain = Vec::with_capacity(slice.items.len());
                for item in &slice.items {
                    chain.push(ObjectProp(self.item_iri(g, t, *item)?));
                }
                Payload::SubPropertyChainOf {
                    chain,
                    sup: ObjectProp(subject),
                }
            }
            AxiomKind::HasKey => {
                let mut keys = Vec::with_capacity(slice.items.len());
                for item in &slice.items {
                    let iri = self.item_iri(g, t, *item)?;
                    if profile.can_present_as(*item, ViewKind::ObjectProp) {
                        keys.push(PropRef::Object(ObjectProp(iri)));
                    } else if profile.can_present_as(*item, ViewKind::DataProp) {
                        keys.push(PropRef::Data(DataProp(iri)));
                    } else {
                        return Err(OntError::BadEncoding {
                            triple: render_triple(g, t),
                            reason: format!("key <{iri}> is not a declared property"),
                        });
                    }
                }
                Payload::HasKey {
                    class: Class(subject),
                    keys,
                }
            }
            _ => {
                return Err(OntError::BadEncoding {
                    triple: render_triple(g, t),
                    reason: "not a list-backed kind".to_string(),
                })
            }
        })
    }

    fn aux_triples(&self, g: &Graph, t: Triple) -> Vec<Triple> {
        list::read_list(g, t.o)
            .map(|slice| slice.triples)
            .unwrap_or_default()
    }

    fn write(&self, g: &mut Graph, axiom: &Axiom) -> Result<WriteReceipt, OntError> {
        check_write_kind(self, axiom)?;

        let (subject_iri, item_terms): (&str, Vec<(ViewKind, Term)>) = match &axiom.payload {
            Payload::DisjointUnion { class, members } => (
                &class.0,
                members
                    .iter()
                    .map(|c| (ViewKind::Class, Term::Iri(c.0.clone())))
                    .collect(),
            ),
            Payload::SubPropertyChainOf { chain, sup } => (
                &sup.0,
                chain
                    .iter()
                    .map(|p| (ViewKind::ObjectProp, Term::Iri(p.0.clone())))
                    .collect(),
            ),
            Payload::HasKey { class, keys } => (
                &class.0,
                keys.iter()
                    .map(|k| match k {
                        PropRef::Object(p) => (ViewKind::ObjectProp, Term::Iri(p.0.clone())),
                        PropRef::Data(p) => (ViewKind::DataProp, Term::Iri(p.0.clone())),
                    })
                    .collect(),
            ),
            _ => {
                return Err(OntError::WriteContract(
                    "list-backed payload expected".to_string(),
                ))
            }
        };

        let subject_term = Term::Iri(subject_iri.to_string());
        let items: Vec<NodeId> = item_terms.iter().map(|(_, term)| g.intern(term)).collect();
        let slice = list::write_list(g, &items);

        let s = g.intern(&subject_term);
        let p = g.intern_iri(self.predicate);
        let main = Triple::new(s, p, slice.head);
        g.insert(main);

        let mut triples = vec![main];
        triples.extend(slice.triples);

        declare_term(g, self.subject, &subject_term, &mut triples);
        for (kind, term) in &item_terms {
            declare_term(g, *kind, term, &mut triples);
        }
        write_axiom_annotations(g, main, axiom, &mut triples);

        Ok(WriteReceipt { main, triples })
    }

    fn search_pattern(&self, interner: &NodeInterner, axiom: &Axiom) -> Option<TriplePattern> {
        let subject_iri = match &axiom.payload {
            Payload::DisjointUnion { class, .. } => &class.0,
            Payload::SubPropertyChainOf { sup, .. } => &sup.0,
            Payload::HasKey { class, .. } => &class.0,
            _ => return None,
        };
        // The list head is a blank node: probe subject + predicate only.
        Some(TriplePattern::new(
            Some(interner.intern_iri(subject_iri)),
            Some(interner.intern_iri(self.predicate)),
            None,
        ))
    }
}
