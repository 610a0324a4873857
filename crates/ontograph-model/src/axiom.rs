//! The axiom value model: kinds, components, annotations, payloads.
//!
//! Everything in this module is an **erased** domain value: plain owned
//! strings and literals, no node ids, no graph back-references. A value
//! obtained from [`crate::view::AxiomView::erase_origin`] is built solely
//! from these types, so exporting it cannot keep a store alive.

use ontograph_graph::{Literal, Term};
use serde::{Deserialize, Serialize};

// ============================================================================
// Axiom Kinds
// ============================================================================

/// The closed set of axiom kinds this core translates.
///
/// Discriminant order is the stable cross-kind enumeration order of a model
/// facade; the translator registry is laid out in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum AxiomKind {
    Declaration,
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    DisjointUnion,
    SubObjectPropertyOf,
    SubPropertyChainOf,
    EquivalentObjectProperties,
    DisjointObjectProperties,
    InverseObjectProperties,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    ReflexiveObjectProperty,
    IrreflexiveObjectProperty,
    SymmetricObjectProperty,
    AsymmetricObjectProperty,
    TransitiveObjectProperty,
    SubDataPropertyOf,
    EquivalentDataProperties,
    DisjointDataProperties,
    DataPropertyDomain,
    DataPropertyRange,
    FunctionalDataProperty,
    DatatypeDefinition,
    HasKey,
    SameIndividual,
    DifferentIndividuals,
    ClassAssertion,
    ObjectPropertyAssertion,
    NegativeObjectPropertyAssertion,
    DataPropertyAssertion,
    NegativeDataPropertyAssertion,
    AnnotationAssertion,
    SubAnnotationPropertyOf,
    AnnotationPropertyDomain,
    AnnotationPropertyRange,
}

impl AxiomKind {
    pub const COUNT: usize = 38;

    pub const ALL: [AxiomKind; Self::COUNT] = [
        AxiomKind::Declaration,
        AxiomKind::SubClassOf,
        AxiomKind::EquivalentClasses,
        AxiomKind::DisjointClasses,
        AxiomKind::DisjointUnion,
        AxiomKind::SubObjectPropertyOf,
        AxiomKind::SubPropertyChainOf,
        AxiomKind::EquivalentObjectProperties,
        AxiomKind::DisjointObjectProperties,
        AxiomKind::InverseObjectProperties,
        AxiomKind::ObjectPropertyDomain,
        AxiomKind::ObjectPropertyRange,
        AxiomKind::FunctionalObjectProperty,
        AxiomKind::InverseFunctionalObjectProperty,
        AxiomKind::ReflexiveObjectProperty,
        AxiomKind::IrreflexiveObjectProperty,
        AxiomKind::SymmetricObjectProperty,
        AxiomKind::AsymmetricObjectProperty,
        AxiomKind::TransitiveObjectProperty,
        AxiomKind::SubDataPropertyOf,
        AxiomKind::EquivalentDataProperties,
        AxiomKind::DisjointDataProperties,
        AxiomKind::DataPropertyDomain,
        AxiomKind::DataPropertyRange,
        AxiomKind::FunctionalDataProperty,
        AxiomKind::DatatypeDefinition,
        AxiomKind::HasKey,
        AxiomKind::SameIndividual,
        AxiomKind::DifferentIndividuals,
        AxiomKind::ClassAssertion,
        AxiomKind::ObjectPropertyAssertion,
        AxiomKind::NegativeObjectPropertyAssertion,
        AxiomKind::DataPropertyAssertion,
        AxiomKind::NegativeDataPropertyAssertion,
        AxiomKind::AnnotationAssertion,
        AxiomKind::SubAnnotationPropertyOf,
        AxiomKind::AnnotationPropertyDomain,
        AxiomKind::AnnotationPropertyRange,
    ];

    /// Kinds whose symmetric pairwise encodings denote one logical axiom,
    /// handled by the merge engine during enumeration.
    pub fn mergeable(self) -> bool {
        matches!(
            self,
            AxiomKind::EquivalentClasses
                | AxiomKind::DisjointClasses
                | AxiomKind::EquivalentObjectProperties
                | AxiomKind::DisjointObjectProperties
                | AxiomKind::InverseObjectProperties
                | AxiomKind::EquivalentDataProperties
                | AxiomKind::DisjointDataProperties
                | AxiomKind::SameIndividual
                | AxiomKind::DifferentIndividuals
        )
    }

    /// Kinds disabled as a block by `load_annotation_axioms = false`.
    pub fn is_annotation_kind(self) -> bool {
        matches!(
            self,
            AxiomKind::AnnotationAssertion
                | AxiomKind::SubAnnotationPropertyOf
                | AxiomKind::AnnotationPropertyDomain
                | AxiomKind::AnnotationPropertyRange
        )
    }
}

impl std::fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

// ============================================================================
// Components
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Class(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectProp(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DataProp(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnnProp(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Datatype(pub String);

/// A named or anonymous (blank-node-backed) individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Individual {
    Named(String),
    Anonymous(String),
}

impl Individual {
    pub fn term(&self) -> Term {
        match self {
            Individual::Named(iri) => Term::Iri(iri.clone()),
            Individual::Anonymous(label) => Term::Blank(label.clone()),
        }
    }

    pub fn from_term(term: &Term) -> Option<Self> {
        match term {
            Term::Iri(iri) => Some(Individual::Named(iri.clone())),
            Term::Blank(label) => Some(Individual::Anonymous(label.clone())),
            Term::Literal(_) => None,
        }
    }
}

/// An object or data property reference (e.g. one `owl:hasKey` key element).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropRef {
    Object(ObjectProp),
    Data(DataProp),
}

impl PropRef {
    pub fn iri(&self) -> &str {
        match self {
            PropRef::Object(p) => &p.0,
            PropRef::Data(p) => &p.0,
        }
    }
}

/// A declarable entity (the payload of a `Declaration`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Entity {
    Class(Class),
    ObjectProp(ObjectProp),
    DataProp(DataProp),
    AnnProp(AnnProp),
    NamedIndividual(String),
    Datatype(Datatype),
}

impl Entity {
    pub fn iri(&self) -> &str {
        match self {
            Entity::Class(c) => &c.0,
            Entity::ObjectProp(p) => &p.0,
            Entity::DataProp(p) => &p.0,
            Entity::AnnProp(p) => &p.0,
            Entity::NamedIndividual(iri) => iri,
            Entity::Datatype(d) => &d.0,
        }
    }
}

// ============================================================================
// Annotations
// ============================================================================

/// The subject of an annotation assertion: an IRI or an anonymous node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnnSubject {
    Iri(String),
    Anonymous(String),
}

impl AnnSubject {
    pub fn term(&self) -> Term {
        match self {
            AnnSubject::Iri(iri) => Term::Iri(iri.clone()),
            AnnSubject::Anonymous(label) => Term::Blank(label.clone()),
        }
    }

    pub fn from_term(term: &Term) -> Option<Self> {
        match term {
            Term::Iri(iri) => Some(AnnSubject::Iri(iri.clone())),
            Term::Blank(label) => Some(AnnSubject::Anonymous(label.clone())),
            Term::Literal(_) => None,
        }
    }
}

/// An annotation value: IRI, anonymous node, or literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnnValue {
    Iri(String),
    Anonymous(String),
    Literal(Literal),
}

impl AnnValue {
    pub fn term(&self) -> Term {
        match self {
            AnnValue::Iri(iri) => Term::Iri(iri.clone()),
            AnnValue::Anonymous(label) => Term::Blank(label.clone()),
            AnnValue::Literal(lit) => Term::Literal(lit.clone()),
        }
    }

    pub fn from_term(term: &Term) -> Self {
        match term {
            Term::Iri(iri) => AnnValue::Iri(iri.clone()),
            Term::Blank(label) => AnnValue::Anonymous(label.clone()),
            Term::Literal(lit) => AnnValue::Literal(lit.clone()),
        }
    }
}

/// One annotation property/value pair, itself recursively annotatable.
///
/// Insertion order of sibling annotations is irrelevant for equality
/// (compared as sorted multisets) and preserved for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Annotation {
    pub prop: AnnProp,
    pub value: AnnValue,
    pub annotations: Vec<Annotation>,
}

impl Annotation {
    pub fn new(prop: impl Into<String>, value: AnnValue) -> Self {
        Self {
            prop: AnnProp(prop.into()),
            value,
            annotations: Vec::new(),
        }
    }

    fn normalized(&self) -> Annotation {
        let mut nested: Vec<Annotation> = self.annotations.iter().map(|a| a.normalized()).collect();
        nested.sort();
        Annotation {
            prop: self.prop.clone(),
            value: self.value.clone(),
            annotations: nested,
        }
    }
}

/// Sort a slice of annotations into canonical order, recursively.
pub(crate) fn normalized_annotations(annotations: &[Annotation]) -> Vec<Annotation> {
    let mut out: Vec<Annotation> = annotations.iter().map(|a| a.normalized()).collect();
    out.sort();
    out
}

// ============================================================================
// Payloads
// ============================================================================

/// The fixed component tuple of one axiom, one variant per kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Payload {
    Declaration { entity: Entity },
    SubClassOf { sub: Class, sup: Class },
    EquivalentClasses { a: Class, b: Class },
    DisjointClasses { a: Class, b: Class },
    DisjointUnion { class: Class, members: Vec<Class> },
    SubObjectPropertyOf { sub: ObjectProp, sup: ObjectProp },
    SubPropertyChainOf { chain: Vec<ObjectProp>, sup: ObjectProp },
    EquivalentObjectProperties { a: ObjectProp, b: ObjectProp },
    DisjointObjectProperties { a: ObjectProp, b: ObjectProp },
    InverseObjectProperties { a: ObjectProp, b: ObjectProp },
    ObjectPropertyDomain { prop: ObjectProp, domain: Class },
    ObjectPropertyRange { prop: ObjectProp, range: Class },
    FunctionalObjectProperty { prop: ObjectProp },
    InverseFunctionalObjectProperty { prop: ObjectProp },
    ReflexiveObjectProperty { prop: ObjectProp },
    IrreflexiveObjectProperty { prop: ObjectProp },
    SymmetricObjectProperty { prop: ObjectProp },
    AsymmetricObjectProperty { prop: ObjectProp },
    TransitiveObjectProperty { prop: ObjectProp },
    SubDataPropertyOf { sub: DataProp, sup: DataProp },
    EquivalentDataProperties { a: DataProp, b: DataProp },
    DisjointDataProperties { a: DataProp, b: DataProp },
    DataPropertyDomain { prop: DataProp, domain: Class },
    DataPropertyRange { prop: DataProp, range: Datatype },
    FunctionalDataProperty { prop: DataProp },
    DatatypeDefinition { datatype: Datatype, definition: Datatype },
    HasKey { class: Class, keys: Vec<PropRef> },
    SameIndividual { a: Individual, b: Individual },
    DifferentIndividuals { a: Individual, b: Individual },
    ClassAssertion { individual: Individual, class: Class },
    ObjectPropertyAssertion { subject: Individual, prop: ObjectProp, object: Individual },
    NegativeObjectPropertyAssertion { subject: Individual, prop: ObjectProp, object: Individual },
    DataPropertyAssertion { subject: Individual, prop: DataProp, value: Literal },
    NegativeDataPropertyAssertion { subject: Individual, prop: DataProp, value: Literal },
    AnnotationAssertion { subject: AnnSubject, prop: AnnProp, value: AnnValue },
    SubAnnotationPropertyOf { sub: AnnProp, sup: AnnProp },
    AnnotationPropertyDomain { prop: AnnProp, domain: String },
    AnnotationPropertyRange { prop: AnnProp, range: String },
}

impl Payload {
    pub fn kind(&self) -> AxiomKind {
        match self {
            Payload::Declaration { .. } => AxiomKind::Declaration,
            Payload::SubClassOf { .. } => AxiomKind::SubClassOf,
            Payload::EquivalentClasses { .. } => AxiomKind::EquivalentClasses,
            Payload::DisjointClasses { .. } => AxiomKind::DisjointClasses,
            Payload::DisjointUnion { .. } => AxiomKind::DisjointUnion,
            Payload::SubObjectPropertyOf { .. } => AxiomKind::SubObjectPropertyOf,
            Payload::SubPropertyChainOf { .. } => AxiomKind::SubPropertyChainOf,
            Payload::EquivalentObjectProperties { .. } => AxiomKind::EquivalentObjectProperties,
            Payload::DisjointObjectProperties { .. } => AxiomKind::DisjointObjectProperties,
            Payload::InverseObjectProperties { .. } => AxiomKind::InverseObjectProperties,
            Payload::ObjectPropertyDomain { .. } => AxiomKind::ObjectPropertyDomain,
            Payload::ObjectPropertyRange { .. } => AxiomKind::ObjectPropertyRange,
            Payload::FunctionalObjectProperty { .. } => AxiomKind::FunctionalObjectProperty,
            Payload::InverseFunctionalObjectProperty { .. } => {
                AxiomKind::InverseFunctionalObjectProperty
            }
            Payload::ReflexiveObjectProperty { .. } => AxiomKind::ReflexiveObjectProperty,
            Payload::IrreflexiveObjectProperty { .. } => AxiomKind::IrreflexiveObjectProperty,
            Payload::SymmetricObjectProperty { .. } => AxiomKind::SymmetricObjectProperty,
            Payload::AsymmetricObjectProperty { .. } => AxiomKind::AsymmetricObjectProperty,
            Payload::TransitiveObjectProperty { .. } => AxiomKind::TransitiveObjectProperty,
            Payload::SubDataPropertyOf { .. } => AxiomKind::SubDataPropertyOf,
            Payload::EquivalentDataProperties { .. } => AxiomKind::EquivalentDataProperties,
            Payload::DisjointDataProperties { .. } => AxiomKind::DisjointDataProperties,
            Payload::DataPropertyDomain { .. } => AxiomKind::DataPropertyDomain,
            Payload::DataPropertyRange { .. } => AxiomKind::DataPropertyRange,
            Payload::FunctionalDataProperty { .. } => AxiomKind::FunctionalDataProperty,
            Payload::DatatypeDefinition { .. } => AxiomKind::DatatypeDefinition,
            Payload::HasKey { .. } => AxiomKind::HasKey,
            Payload::SameIndividual { .. } => AxiomKind::SameIndividual,
            Payload::DifferentIndividuals { .. } => AxiomKind::DifferentIndividuals,
            Payload::ClassAssertion { .. } => AxiomKind::ClassAssertion,
            Payload::ObjectPropertyAssertion { .. } => AxiomKind::ObjectPropertyAssertion,
            Payload::NegativeObjectPropertyAssertion { .. } => {
                AxiomKind::NegativeObjectPropertyAssertion
            }
            Payload::DataPropertyAssertion { .. } => AxiomKind::DataPropertyAssertion,
            Payload::NegativeDataPropertyAssertion { .. } => {
                AxiomKind::NegativeDataPropertyAssertion
            }
            Payload::AnnotationAssertion { .. } => AxiomKind::AnnotationAssertion,
            Payload::SubAnnotationPropertyOf { .. } => AxiomKind::SubAnnotationPropertyOf,
            Payload::AnnotationPropertyDomain { .. } => AxiomKind::AnnotationPropertyDomain,
            Payload::AnnotationPropertyRange { .. } => AxiomKind::AnnotationPropertyRange,
        }
    }
}

// ============================================================================
// Axioms
// ============================================================================

/// An immutable domain value: kind tag (via payload), fixed component tuple,
/// and a collection of annotations.
///
/// Equality ignores annotation order (sorted-multiset comparison); payload
/// comparison is structural. Symmetric pairwise kinds (`A sameAs B` vs
/// `B sameAs A`) are distinguished here and unified only by canonical
/// content in the merge engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Axiom {
    pub payload: Payload,
    pub annotations: Vec<Annotation>,
}

impl Axiom {
    pub fn new(payload: Payload) -> Self {
        Self {
            payload,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotations(payload: Payload, annotations: Vec<Annotation>) -> Self {
        Self {
            payload,
            annotations,
        }
    }

    pub fn kind(&self) -> AxiomKind {
        self.payload.kind()
    }
}

impl PartialEq for Axiom {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
            && normalized_annotations(&self.annotations) == normalized_annotations(&other.annotations)
    }
}

impl Eq for Axiom {}

// ============================================================================
// Term Construction Helpers (used by the translator families)
// ============================================================================

/// Build a binary-kind payload from the subject and object terms of its main
/// triple. Returns `None` when a term has the wrong shape for the kind.
pub(crate) fn binary_payload(kind: AxiomKind, s: &Term, o: &Term) -> Option<Payload> {
    let iri = |t: &Term| t.as_iri().map(str::to_string);
    Some(match kind {
        AxiomKind::SubClassOf => Payload::SubClassOf {
            sub: Class(iri(s)?),
            sup: Class(iri(o)?),
        },
        AxiomKind::EquivalentClasses => Payload::EquivalentClasses {
            a: Class(iri(s)?),
            b: Class(iri(o)?),
        },
        AxiomKind::DisjointClasses => Payload::DisjointClasses {
            a: Class(iri(s)?),
            b: Class(iri(o)?),
        },
        AxiomKind::SubObjectPropertyOf => Payload::SubObjectPropertyOf {
            sub: ObjectProp(iri(s)?),
            sup: ObjectProp(iri(o)?),
        },
        AxiomKind::EquivalentObjectProperties => Payload::EquivalentObjectProperties {
            a: ObjectProp(iri(s)?),
            b: ObjectProp(iri(o)?),
        },
        AxiomKind::DisjointObjectProperties => Payload::DisjointObjectProperties {
            a: ObjectProp(iri(s)?),
            b: ObjectProp(iri(o)?),
        },
        AxiomKind::InverseObjectProperties => Payload::InverseObjectProperties {
            a: ObjectProp(iri(s)?),
            b: ObjectProp(iri(o)?),
        },
        AxiomKind::ObjectPropertyDomain => Payload::ObjectPropertyDomain {
            prop: ObjectProp(iri(s)?),
            domain: Class(iri(o)?),
        },
        AxiomKind::ObjectPropertyRange => Payload::ObjectPropertyRange {
            prop: ObjectProp(iri(s)?),
            range: Class(iri(o)?),
        },
        AxiomKind::SubDataPropertyOf => Payload::SubDataPropertyOf {
            sub: DataProp(iri(s)?),
            sup: DataProp(iri(o)?),
        },
        AxiomKind::EquivalentDataProperties => Payload::EquivalentDataProperties {
            a: DataProp(iri(s)?),
            b: DataProp(iri(o)?),
        },
        AxiomKind::DisjointDataProperties => Payload::DisjointDataProperties {
            a: DataProp(iri(s)?),
            b: DataProp(iri(o)?),
        },
        AxiomKind::DataPropertyDomain => Payload::DataPropertyDomain {
            prop: DataProp(iri(s)?),
            domain: Class(iri(o)?),
        },
        AxiomKind::DataPropertyRange => Payload::DataPropertyRange {
            prop: DataProp(iri(s)?),
            range: Datatype(iri(o)?),
        },
        AxiomKind::DatatypeDefinition => Payload::DatatypeDefinition {
            datatype: Datatype(iri(s)?),
            definition: Datatype(iri(o)?),
        },
        AxiomKind::SameIndividual => Payload::SameIndividual {
            a: Individual::from_term(s)?,
            b: Individual::from_term(o)?,
        },
        AxiomKind::DifferentIndividuals => Payload::DifferentIndividuals {
            a: Individual::from_term(s)?,
            b: Individual::from_term(o)?,
        },
        AxiomKind::SubAnnotationPropertyOf => Payload::SubAnnotationPropertyOf {
            sub: AnnProp(iri(s)?),
            sup: AnnProp(iri(o)?),
        },
        AxiomKind::AnnotationPropertyDomain => Payload::AnnotationPropertyDomain {
            prop: AnnProp(iri(s)?),
            domain: iri(o)?,
        },
        AxiomKind::AnnotationPropertyRange => Payload::AnnotationPropertyRange {
            prop: AnnProp(iri(s)?),
            range: iri(o)?,
        },
        _ => return None,
    })
}

/// Subject and object terms of a binary-kind payload; inverse of
/// [`binary_payload`]. Returns `None` for non-binary payloads.
pub(crate) fn binary_parts(payload: &Payload) -> Option<(Term, Term)> {
    let iri = |s: &str| Term::Iri(s.to_string());
    Some(match payload {
        Payload::SubClassOf { sub, sup } => (iri(&sub.0), iri(&sup.0)),
        Payload::EquivalentClasses { a, b } => (iri(&a.0), iri(&b.0)),
        Payload::DisjointClasses { a, b } => (iri(&a.0), iri(&b.0)),
        Payload::SubObjectPropertyOf { sub, sup } => (iri(&sub.0), iri(&sup.0)),
        Payload::EquivalentObjectProperties { a, b } => (iri(&a.0), iri(&b.0)),
        Payload::DisjointObjectProperties { a, b } => (iri(&a.0), iri(&b.0)),
        Payload::InverseObjectProperties { a, b } => (iri(&a.0), iri(&b.0)),
        Payload::ObjectPropertyDomain { prop, domain } => (iri(&prop.0), iri(&domain.0)),
        Payload::ObjectPropertyRange { prop, range } => (iri(&prop.0), iri(&range.0)),
        Payload::SubDataPropertyOf { sub, sup } => (iri(&sub.0), iri(&sup.0)),
        Payload::EquivalentDataProperties { a, b } => (iri(&a.0), iri(&b.0)),
        Payload::DisjointDataProperties { a, b } => (iri(&a.0), iri(&b.0)),
        Payload::DataPropertyDomain { prop, domain } => (iri(&prop.0), iri(&domain.0)),
        Payload::DataPropertyRange { prop, range } => (iri(&prop.0), iri(&range.0)),
        Payload::DatatypeDefinition {
            datatype,
            definition,
        } => (iri(&datatype.0), iri(&definition.0)),
        Payload::SameIndividual { a, b } => (a.term(), b.term()),
        Payload::DifferentIndividuals { a, b } => (a.term(), b.term()),
        Payload::SubAnnotationPropertyOf { sub, sup } => (iri(&sub.0), iri(&sup.0)),
        Payload::AnnotationPropertyDomain { prop, domain } => (iri(&prop.0), iri(domain)),
        Payload::AnnotationPropertyRange { prop, range } => (iri(&prop.0), iri(range)),
        _ => return None,
    })
}

/// Build a characteristic-kind payload from the subject term of its type
/// triple.
pub(crate) fn characteristic_payload(kind: AxiomKind, prop: &Term) -> Option<Payload> {
    let iri = prop.as_iri()?.to_string();
    Some(match kind {
        AxiomKind::FunctionalObjectProperty => Payload::FunctionalObjectProperty {
            prop: ObjectProp(iri),
        },
        AxiomKind::InverseFunctionalObjectProperty => Payload::InverseFunctionalObjectProperty {
            prop: ObjectProp(iri),
        },
        AxiomKind::ReflexiveObjectProperty => Payload::ReflexiveObjectProperty {
            prop: ObjectProp(iri),
        },
        AxiomKind::IrreflexiveObjectProperty => Payload::IrreflexiveObjectProperty {
            prop: ObjectProp(iri),
        },
        AxiomKind::SymmetricObjectProperty => Payload::SymmetricObjectProperty {
            prop: ObjectProp(iri),
        },
        AxiomKind::AsymmetricObjectProperty => Payload::AsymmetricObjectProperty {
            prop: ObjectProp(iri),
        },
        AxiomKind::TransitiveObjectProperty => Payload::TransitiveObjectProperty {
            prop: ObjectProp(iri),
        },
        AxiomKind::FunctionalDataProperty => Payload::FunctionalDataProperty {
            prop: DataProp(iri),
        },
        _ => return None,
    })
}

/// The property IRI of a characteristic-kind payload.
pub(crate) fn characteristic_prop(payload: &Payload) -> Option<&str> {
    Some(match payload {
        Payload::FunctionalObjectProperty { prop } => &prop.0,
        Payload::InverseFunctionalObjectProperty { prop } => &prop.0,
        Payload::ReflexiveObjectProperty { prop } => &prop.0,
        Payload::IrreflexiveObjectProperty { prop } => &prop.0,
        Payload::SymmetricObjectProperty { prop } => &prop.0,
        Payload::AsymmetricObjectProperty { prop } => &prop.0,
        Payload::TransitiveObjectProperty { prop } => &prop.0,
        Payload::FunctionalDataProperty { prop } => &prop.0,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_order_matches_all_table() {
        for (i, kind) in AxiomKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn axiom_equality_ignores_annotation_order() {
        let payload = Payload::SubClassOf {
            sub: Class("http://example.org/A".into()),
            sup: Class("http://example.org/B".into()),
        };
        let a1 = Annotation::new(
            "http://www.w3.org/2000/01/rdf-schema#label",
            AnnValue::Literal(Literal::simple("x")),
        );
        let a2 = Annotation::new(
            "http://www.w3.org/2000/01/rdf-schema#comment",
            AnnValue::Literal(Literal::simple("y")),
        );

        let fwd = Axiom::with_annotations(payload.clone(), vec![a1.clone(), a2.clone()]);
        let rev = Axiom::with_annotations(payload, vec![a2, a1]);
        assert_eq!(fwd, rev);
    }

    #[test]
    fn binary_payload_round_trips_through_parts() {
        let payload = binary_payload(
            AxiomKind::SubClassOf,
            &Term::iri("http://example.org/A"),
            &Term::iri("http://example.org/B"),
        )
        .expect("class pair");
        let (s, o) = binary_parts(&payload).expect("binary payload");
        assert_eq!(s, Term::iri("http://example.org/A"));
        assert_eq!(o, Term::iri("http://example.org/B"));
    }

    #[test]
    fn binary_payload_rejects_literals_in_iri_positions() {
        assert!(binary_payload(
            AxiomKind::SubClassOf,
            &Term::Literal(Literal::simple("not a class")),
            &Term::iri("http://example.org/B"),
        )
        .is_none());
    }
}
