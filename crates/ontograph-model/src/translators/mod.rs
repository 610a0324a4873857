//! The translator registry: one strategy value per axiom kind.
//!
//! Generic families cover the encodings:
//!
//! - [`binary`]: fixed-predicate subject/object kinds (sub-class, domain,
//!   range, the symmetric pairwise kinds, ...)
//! - [`characteristic`]: `rdf:type` property-characteristic kinds
//! - [`declaration`]: entity declarations
//! - [`assertion`]: class / property / annotation assertions
//! - [`negative`]: reified negative property assertions
//! - [`listish`]: list-backed kinds (disjoint union, has-key, chains)
//!
//! `TRANSLATORS` is laid out in `AxiomKind` discriminant order; the facade
//! iterates it directly for all-kind enumeration.

pub mod assertion;
pub mod binary;
pub mod characteristic;
pub mod declaration;
pub mod listish;
pub mod negative;

use ontograph_graph::{vocab, Graph, Term, Triple};

use crate::axiom::{Annotation, AnnProp, Axiom, AxiomKind, Individual};
use crate::profile::{is_reserved, ViewKind, BUILTIN_ANNOTATION_PROPS};
use crate::translator::Translator;

use assertion::{
    AnnotationAssertionTranslator, ClassAssertionTranslator, DataPropertyAssertionTranslator,
    ObjectPropertyAssertionTranslator,
};
use binary::{BinaryTranslator, ObjectRule};
use characteristic::CharacteristicTranslator;
use declaration::DeclarationTranslator;
use listish::{ItemRule, ListTranslator};
use negative::NegativeAssertionTranslator;

// ============================================================================
// Registry
// ============================================================================

static DECLARATION: DeclarationTranslator = DeclarationTranslator;

static SUB_CLASS_OF: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::SubClassOf,
    predicate: vocab::rdfs::SUB_CLASS_OF,
    subject: ViewKind::Class,
    object: ObjectRule::View(ViewKind::Class),
};
static EQUIVALENT_CLASSES: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::EquivalentClasses,
    predicate: vocab::owl::EQUIVALENT_CLASS,
    subject: ViewKind::Class,
    object: ObjectRule::View(ViewKind::Class),
};
static DISJOINT_CLASSES: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::DisjointClasses,
    predicate: vocab::owl::DISJOINT_WITH,
    subject: ViewKind::Class,
    object: ObjectRule::View(ViewKind::Class),
};
static DISJOINT_UNION: ListTranslator = ListTranslator {
    kind: AxiomKind::DisjointUnion,
    predicate: vocab::owl::DISJOINT_UNION_OF,
    subject: ViewKind::Class,
    items: ItemRule::Class,
};
static SUB_OBJECT_PROPERTY_OF: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::SubObjectPropertyOf,
    predicate: vocab::rdfs::SUB_PROPERTY_OF,
    subject: ViewKind::ObjectProp,
    object: ObjectRule::View(ViewKind::ObjectProp),
};
static SUB_PROPERTY_CHAIN_OF: ListTranslator = ListTranslator {
    kind: AxiomKind::SubPropertyChainOf,
    predicate: vocab::owl::PROPERTY_CHAIN_AXIOM,
    subject: ViewKind::ObjectProp,
    items: ItemRule::ObjectProp,
};
static EQUIVALENT_OBJECT_PROPERTIES: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::EquivalentObjectProperties,
    predicate: vocab::owl::EQUIVALENT_PROPERTY,
    subject: ViewKind::ObjectProp,
    object: ObjectRule::View(ViewKind::ObjectProp),
};
static DISJOINT_OBJECT_PROPERTIES: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::DisjointObjectProperties,
    predicate: vocab::owl::PROPERTY_DISJOINT_WITH,
    subject: ViewKind::ObjectProp,
    object: ObjectRule::View(ViewKind::ObjectProp),
};
static INVERSE_OBJECT_PROPERTIES: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::InverseObjectProperties,
    predicate: vocab::owl::INVERSE_OF,
    subject: ViewKind::ObjectProp,
    object: ObjectRule::View(ViewKind::ObjectProp),
};
static OBJECT_PROPERTY_DOMAIN: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::ObjectPropertyDomain,
    predicate: vocab::rdfs::DOMAIN,
    subject: ViewKind::ObjectProp,
    object: ObjectRule::View(ViewKind::Class),
};
static OBJECT_PROPERTY_RANGE: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::ObjectPropertyRange,
    predicate: vocab::rdfs::RANGE,
    subject: ViewKind::ObjectProp,
    object: ObjectRule::View(ViewKind::Class),
};
static FUNCTIONAL_OBJECT_PROPERTY: CharacteristicTranslator = CharacteristicTranslator {
    kind: AxiomKind::FunctionalObjectProperty,
    type_iri: vocab::owl::FUNCTIONAL_PROPERTY,
    prop: ViewKind::ObjectProp,
};
static INVERSE_FUNCTIONAL_OBJECT_PROPERTY: CharacteristicTranslator = CharacteristicTranslator {
    kind: AxiomKind::InverseFunctionalObjectProperty,
    type_iri: vocab::owl::INVERSE_FUNCTIONAL_PROPERTY,
    prop: ViewKind::ObjectProp,
};
static REFLEXIVE_OBJECT_PROPERTY: CharacteristicTranslator = CharacteristicTranslator {
    kind: AxiomKind::ReflexiveObjectProperty,
    type_iri: vocab::owl::REFLEXIVE_PROPERTY,
    prop: ViewKind::ObjectProp,
};
static IRREFLEXIVE_OBJECT_PROPERTY: CharacteristicTranslator = CharacteristicTranslator {
    kind: AxiomKind::IrreflexiveObjectProperty,
    type_iri: vocab::owl::IRREFLEXIVE_PROPERTY,
    prop: ViewKind::ObjectProp,
};
static SYMMETRIC_OBJECT_PROPERTY: CharacteristicTranslator = CharacteristicTranslator {
    kind: AxiomKind::SymmetricObjectProperty,
    type_iri: vocab::owl::SYMMETRIC_PROPERTY,
    prop: ViewKind::ObjectProp,
};
static ASYMMETRIC_OBJECT_PROPERTY: CharacteristicTranslator = CharacteristicTranslator {
    kind: AxiomKind::AsymmetricObjectProperty,
    type_iri: vocab::owl::ASYMMETRIC_PROPERTY,
    prop: ViewKind::ObjectProp,
};
static TRANSITIVE_OBJECT_PROPERTY: CharacteristicTranslator = CharacteristicTranslator {
    kind: AxiomKind::TransitiveObjectProperty,
    type_iri: vocab::owl::TRANSITIVE_PROPERTY,
    prop: ViewKind::ObjectProp,
};
static SUB_DATA_PROPERTY_OF: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::SubDataPropertyOf,
    predicate: vocab::rdfs::SUB_PROPERTY_OF,
    subject: ViewKind::DataProp,
    object: ObjectRule::View(ViewKind::DataProp),
};
static EQUIVALENT_DATA_PROPERTIES: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::EquivalentDataProperties,
    predicate: vocab::owl::EQUIVALENT_PROPERTY,
    subject: ViewKind::DataProp,
    object: ObjectRule::View(ViewKind::DataProp),
};
static DISJOINT_DATA_PROPERTIES: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::DisjointDataProperties,
    predicate: vocab::owl::PROPERTY_DISJOINT_WITH,
    subject: ViewKind::DataProp,
    object: ObjectRule::View(ViewKind::DataProp),
};
static DATA_PROPERTY_DOMAIN: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::DataPropertyDomain,
    predicate: vocab::rdfs::DOMAIN,
    subject: ViewKind::DataProp,
    object: ObjectRule::View(ViewKind::Class),
};
static DATA_PROPERTY_RANGE: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::DataPropertyRange,
    predicate: vocab::rdfs::RANGE,
    subject: ViewKind::DataProp,
    object: ObjectRule::View(ViewKind::Datatype),
};
static FUNCTIONAL_DATA_PROPERTY: CharacteristicTranslator = CharacteristicTranslator {
    kind: AxiomKind::FunctionalDataProperty,
    type_iri: vocab::owl::FUNCTIONAL_PROPERTY,
    prop: ViewKind::DataProp,
};
static DATATYPE_DEFINITION: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::DatatypeDefinition,
    predicate: vocab::owl::EQUIVALENT_CLASS,
    subject: ViewKind::Datatype,
    object: ObjectRule::View(ViewKind::Datatype),
};
static HAS_KEY: ListTranslator = ListTranslator {
    kind: AxiomKind::HasKey,
    predicate: vocab::owl::HAS_KEY,
    subject: ViewKind::Class,
    items: ItemRule::Prop,
};
static SAME_INDIVIDUAL: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::SameIndividual,
    predicate: vocab::owl::SAME_AS,
    subject: ViewKind::Individual,
    object: ObjectRule::View(ViewKind::Individual),
};
static DIFFERENT_INDIVIDUALS: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::DifferentIndividuals,
    predicate: vocab::owl::DIFFERENT_FROM,
    subject: ViewKind::Individual,
    object: ObjectRule::View(ViewKind::Individual),
};
static CLASS_ASSERTION: ClassAssertionTranslator = ClassAssertionTranslator;
static OBJECT_PROPERTY_ASSERTION: ObjectPropertyAssertionTranslator =
    ObjectPropertyAssertionTranslator;
static NEGATIVE_OBJECT_PROPERTY_ASSERTION: NegativeAssertionTranslator =
    NegativeAssertionTranslator { data: false };
static DATA_PROPERTY_ASSERTION: DataPropertyAssertionTranslator = DataPropertyAssertionTranslator;
static NEGATIVE_DATA_PROPERTY_ASSERTION: NegativeAssertionTranslator =
    NegativeAssertionTranslator { data: true };
static ANNOTATION_ASSERTION: AnnotationAssertionTranslator = AnnotationAssertionTranslator;
static SUB_ANNOTATION_PROPERTY_OF: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::SubAnnotationPropertyOf,
    predicate: vocab::rdfs::SUB_PROPERTY_OF,
    subject: ViewKind::AnnProp,
    object: ObjectRule::View(ViewKind::AnnProp),
};
static ANNOTATION_PROPERTY_DOMAIN: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::AnnotationPropertyDomain,
    predicate: vocab::rdfs::DOMAIN,
    subject: ViewKind::AnnProp,
    object: ObjectRule::AnyIri,
};
static ANNOTATION_PROPERTY_RANGE: BinaryTranslator = BinaryTranslator {
    kind: AxiomKind::AnnotationPropertyRange,
    predicate: vocab::rdfs::RANGE,
    subject: ViewKind::AnnProp,
    object: ObjectRule::AnyIri,
};

/// All translators, in `AxiomKind` discriminant order.
pub static TRANSLATORS: [&'static (dyn Translator); AxiomKind::COUNT] = [
    &DECLARATION,
    &SUB_CLASS_OF,
    &EQUIVALENT_CLASSES,
    &DISJOINT_CLASSES,
    &DISJOINT_UNION,
    &SUB_OBJECT_PROPERTY_OF,
    &SUB_PROPERTY_CHAIN_OF,
    &EQUIVALENT_OBJECT_PROPERTIES,
    &DISJOINT_OBJECT_PROPERTIES,
    &INVERSE_OBJECT_PROPERTIES,
    &OBJECT_PROPERTY_DOMAIN,
    &OBJECT_PROPERTY_RANGE,
    &FUNCTIONAL_OBJECT_PROPERTY,
    &INVERSE_FUNCTIONAL_OBJECT_PROPERTY,
    &REFLEXIVE_OBJECT_PROPERTY,
    &IRREFLEXIVE_OBJECT_PROPERTY,
    &SYMMETRIC_OBJECT_PROPERTY,
    &ASYMMETRIC_OBJECT_PROPERTY,
    &TRANSITIVE_OBJECT_PROPERTY,
    &SUB_DATA_PROPERTY_OF,
    &EQUIVALENT_DATA_PROPERTIES,
    &DISJOINT_DATA_PROPERTIES,
    &DATA_PROPERTY_DOMAIN,
    &DATA_PROPERTY_RANGE,
    &FUNCTIONAL_DATA_PROPERTY,
    &DATATYPE_DEFINITION,
    &HAS_KEY,
    &SAME_INDIVIDUAL,
    &DIFFERENT_INDIVIDUALS,
    &CLASS_ASSERTION,
    &OBJECT_PROPERTY_ASSERTION,
    &NEGATIVE_OBJECT_PROPERTY_ASSERTION,
    &DATA_PROPERTY_ASSERTION,
    &NEGATIVE_DATA_PROPERTY_ASSERTION,
    &ANNOTATION_ASSERTION,
    &SUB_ANNOTATION_PROPERTY_OF,
    &ANNOTATION_PROPERTY_DOMAIN,
    &ANNOTATION_PROPERTY_RANGE,
];

/// The translator for one kind.
pub fn translator(kind: AxiomKind) -> &'static dyn Translator {
    TRANSLATORS[kind as usize]
}

// ============================================================================
// Shared Write Helpers
// ============================================================================

/// Insert `subject rdf:type category` unless present or reserved; newly
/// inserted declarations join the caller's receipt (write-time ownership).
pub(crate) fn ensure_declared(
    g: &mut Graph,
    subject_iri: &str,
    category: &'static str,
    out: &mut Vec<Triple>,
) {
    if is_reserved(subject_iri) {
        return;
    }
    let s = g.intern_iri(subject_iri);
    let p = g.intern_iri(vocab::rdf::TYPE);
    let o = g.intern_iri(category);
    let t = Triple::new(s, p, o);
    if g.insert(t) {
        out.push(t);
    }
}

/// Declare a component term for the view kind a translator requires.
pub(crate) fn declare_term(g: &mut Graph, kind: ViewKind, term: &Term, out: &mut Vec<Triple>) {
    let Some(iri) = term.as_iri() else {
        // Anonymous individuals and literals carry no declarations.
        return;
    };
    let iri = iri.to_string();
    match kind {
        ViewKind::Class => ensure_declared(g, &iri, vocab::owl::CLASS, out),
        ViewKind::ObjectProp => ensure_declared(g, &iri, vocab::owl::OBJECT_PROPERTY, out),
        ViewKind::DataProp => ensure_declared(g, &iri, vocab::owl::DATATYPE_PROPERTY, out),
        ViewKind::AnnProp => {
            if !BUILTIN_ANNOTATION_PROPS.contains(&iri.as_str()) {
                ensure_declared(g, &iri, vocab::owl::ANNOTATION_PROPERTY, out);
            }
        }
        ViewKind::Individual => ensure_declared(g, &iri, vocab::owl::NAMED_INDIVIDUAL, out),
        ViewKind::Datatype => ensure_declared(g, &iri, vocab::rdfs::DATATYPE, out),
        ViewKind::List => {}
    }
}

pub(crate) fn declare_individual(g: &mut Graph, ind: &Individual, out: &mut Vec<Triple>) {
    if let Individual::Named(iri) = ind {
        ensure_declared(g, iri, vocab::owl::NAMED_INDIVIDUAL, out);
    }
}

fn declare_annotation_prop(g: &mut Graph, prop: &AnnProp, out: &mut Vec<Triple>) {
    if !BUILTIN_ANNOTATION_PROPS.contains(&prop.0.as_str()) {
        ensure_declared(g, &prop.0, vocab::owl::ANNOTATION_PROPERTY, out);
    }
}

fn declare_annotation_props(g: &mut Graph, annotations: &[Annotation], out: &mut Vec<Triple>) {
    for ann in annotations {
        declare_annotation_prop(g, &ann.prop, out);
        declare_annotation_props(g, &ann.annotations, out);
    }
}

/// Write an axiom's annotations on its freshly written main triple:
/// declarations for the annotation properties, then the reification group.
pub(crate) fn write_axiom_annotations(
    g: &mut Graph,
    main: Triple,
    axiom: &Axiom,
    out: &mut Vec<Triple>,
) {
    declare_annotation_props(g, &axiom.annotations, out);
    out.extend(crate::annotation::write_annotations(
        g,
        main,
        &axiom.annotations,
        false,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_in_kind_order() {
        for (i, t) in TRANSLATORS.iter().enumerate() {
            assert_eq!(t.kind() as usize, i, "registry slot {i} out of order");
        }
    }

    #[test]
    fn every_kind_resolves_to_its_translator() {
        for kind in AxiomKind::ALL {
            assert_eq!(translator(kind).kind(), kind);
        }
    }

    #[test]
    fn mergeable_flags_follow_the_kind() {
        assert!(translator(AxiomKind::EquivalentClasses).mergeable());
        assert!(translator(AxiomKind::SameIndividual).mergeable());
        assert!(!translator(AxiomKind::SubClassOf).mergeable());
        assert!(!translator(AxiomKind::DatatypeDefinition).mergeable());
    }
}
