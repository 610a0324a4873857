//! Entity declarations: `E rdf:type <category>` for the six entity
//! categories.

use ontograph_graph::{vocab, Graph, NodeInterner, Term, Triple, TriplePattern};

use crate::axiom::{AnnProp, Axiom, AxiomKind, Class, DataProp, Datatype, Entity, ObjectProp, Payload};
use crate::config::OntConfig;
use crate::error::OntError;
use crate::profile::{is_reserved, render_triple, NodeProfile};
use crate::translator::{check_write_kind, Translator, WriteReceipt};
use crate::translators::write_axiom_annotations;

fn entity_class(iri: String) -> Entity {
    Entity::Class(Class(iri))
}
fn entity_object_prop(iri: String) -> Entity {
    Entity::ObjectProp(ObjectProp(iri))
}
fn entity_data_prop(iri: String) -> Entity {
    Entity::DataProp(DataProp(iri))
}
fn entity_ann_prop(iri: String) -> Entity {
    Entity::AnnProp(AnnProp(iri))
}
fn entity_individual(iri: String) -> Entity {
    Entity::NamedIndividual(iri)
}
fn entity_datatype(iri: String) -> Entity {
    Entity::Datatype(Datatype(iri))
}

/// Category class IRI and entity constructor, in enumeration order.
const CATEGORIES: [(&str, fn(String) -> Entity); 6] = [
    (vocab::owl::CLASS, entity_class),
    (vocab::owl::OBJECT_PROPERTY, entity_object_prop),
    (vocab::owl::DATATYPE_PROPERTY, entity_data_prop),
    (vocab::owl::ANNOTATION_PROPERTY, entity_ann_prop),
    (vocab::owl::NAMED_INDIVIDUAL, entity_individual),
    (vocab::rdfs::DATATYPE, entity_datatype),
];

fn category_of(entity: &Entity) -> &'static str {
    match entity {
        Entity::Class(_) => vocab::owl::CLASS,
        Entity::ObjectProp(_) => vocab::owl::OBJECT_PROPERTY,
        Entity::DataProp(_) => vocab::owl::DATATYPE_PROPERTY,
        Entity::AnnProp(_) => vocab::owl::ANNOTATION_PROPERTY,
        Entity::NamedIndividual(_) => vocab::owl::NAMED_INDIVIDUAL,
        Entity::Datatype(_) => vocab::rdfs::DATATYPE,
    }
}

pub struct DeclarationTranslator;

impl DeclarationTranslator {
    fn entity_from(&self, g: &Graph, t: Triple) -> Option<Entity> {
        let subject = g.term(t.s)?.as_iri()?.to_string();
        if is_reserved(&subject) {
            return None;
        }
        let category = g.term(t.o)?.as_iri()?.to_string();
        CATEGORIES
            .iter()
            .find(|(iri, _)| *iri == category)
            .map(|(_, build)| build(subject))
    }
}

impl Translator for DeclarationTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::Declaration
    }

    fn candidates(&self, g: &Graph, _config: &OntConfig) -> Vec<Triple> {
        let p = g.intern_iri(vocab::rdf::TYPE);
        let mut out = Vec::new();
        for (category, _) in CATEGORIES {
            let o = g.intern_iri(category);
            out.extend(g.matches(TriplePattern::new(None, Some(p), Some(o))));
        }
        out
    }

    fn accepts(
        &self,
        g: &Graph,
        _profile: &NodeProfile<'_>,
        t: Triple,
        _config: &OntConfig,
    ) -> bool {
        self.entity_from(g, t).is_some()
    }

    fn read_payload(
        &self,
        g: &Graph,
        _profile: &NodeProfile<'_>,
        t: Triple,
    ) -> Result<Payload, OntError> {
        self.entity_from(g, t)
            .map(|entity| Payload::Declaration { entity })
            .ok_or_else(|| OntError::BadEncoding {
                triple: render_triple(g, t),
                reason: "not a declarable entity".to_string(),
            })
    }

    fn write(&self, g: &mut Graph, axiom: &Axiom) -> Result<WriteReceipt, OntError> {
        check_write_kind(self, axiom)?;
        let Payload::Declaration { entity } = &axiom.payload else {
            return Err(OntError::WriteContract(
                "declaration payload expected".to_string(),
            ));
        };

        let main = g.insert_terms(
            &Term::Iri(entity.iri().to_string()),
            &Term::Iri(vocab::rdf::TYPE.into()),
            &Term::Iri(category_of(entity).into()),
        );
        let mut triples = vec![main];
        write_axiom_annotations(g, main, axiom, &mut triples);

        Ok(WriteReceipt { main, triples })
    }

    fn search_pattern(&self, interner: &NodeInterner, axiom: &Axiom) -> Option<TriplePattern> {
        let Payload::Declaration { entity } = &axiom.payload else {
            return None;
        };
        Some(TriplePattern::new(
            Some(interner.intern_iri(entity.iri())),
            Some(interner.intern_iri(vocab::rdf::TYPE)),
            Some(interner.intern_iri(category_of(entity))),
        ))
    }
}
