//! Integration tests for the complete Ontograph pipeline
//!
//! These tests verify end-to-end functionality across crates:
//! - Document ingestion → Graph → Model facade
//! - Axiom enumeration, addition, removal over an ingested graph
//! - Graph → N-Triples serialization → re-ingestion
//!
//! Run with: cargo test --test integration_tests

use std::sync::Arc;

use ontograph_graph::NodeInterner;
use ontograph_ingest_rdf::{graph_from_file, graph_from_str, graph_to_ntriples, RdfFormat};
use ontograph_model::{Axiom, AxiomKind, Class, Individual, OntConfig, OntModel, Payload};
use tempfile::tempdir;

const FAMILY_TTL: &str = r#"
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix ex: <http://example.org/family#> .

ex:Person a owl:Class .
ex:Parent a owl:Class .
ex:Parent rdfs:subClassOf ex:Person .

ex:hasChild a owl:ObjectProperty .
ex:hasChild a owl:TransitiveProperty .

ex:alice a owl:NamedIndividual .
ex:alice a ex:Parent .
ex:bob a owl:NamedIndividual .
ex:alice ex:hasChild ex:bob .
"#;

fn family_model() -> OntModel {
    let graph = graph_from_str(
        FAMILY_TTL,
        RdfFormat::Turtle,
        Arc::new(NodeInterner::new()),
    )
    .expect("parse family ontology");
    OntModel::from_graph(graph, OntConfig::default())
}

fn iri(n: &str) -> String {
    format!("http://example.org/family#{n}")
}

// ============================================================================
// Ingest → enumerate
// ============================================================================

#[test]
fn ingested_document_enumerates_expected_axioms() {
    let model = family_model();

    let declarations = model.axioms_of(AxiomKind::Declaration).expect("declarations");
    assert_eq!(declarations.len(), 5);

    let subclasses = model.axioms_of(AxiomKind::SubClassOf).expect("subclasses");
    assert_eq!(subclasses.len(), 1);
    assert_eq!(
        subclasses[0].erase_origin().expect("erase"),
        Axiom::new(Payload::SubClassOf {
            sub: Class(iri("Parent")),
            sup: Class(iri("Person")),
        })
    );

    let transitive = model
        .axioms_of(AxiomKind::TransitiveObjectProperty)
        .expect("transitive");
    assert_eq!(transitive.len(), 1);

    let class_assertions = model.axioms_of(AxiomKind::ClassAssertion).expect("assertions");
    assert_eq!(class_assertions.len(), 1, "only ex:alice a ex:Parent qualifies");

    let prop_assertions = model
        .axioms_of(AxiomKind::ObjectPropertyAssertion)
        .expect("property assertions");
    assert_eq!(prop_assertions.len(), 1);
}

#[test]
fn facade_mutation_over_an_ingested_graph() {
    let model = family_model();
    let before = model.graph_len();

    let axiom = Axiom::new(Payload::ObjectPropertyAssertion {
        subject: Individual::Named(iri("bob")),
        prop: ontograph_model::ObjectProp(iri("hasChild")),
        object: Individual::Named(iri("carol")),
    });
    let view = model.add(&axiom).expect("add");
    // Main triple plus carol's fresh declaration; bob and hasChild exist.
    assert_eq!(view.triples().len(), 2);
    assert_eq!(model.graph_len(), before + 2);

    assert_eq!(
        model
            .axioms_of(AxiomKind::ObjectPropertyAssertion)
            .expect("enumerate")
            .len(),
        2
    );

    model.remove(&view).expect("remove");
    assert_eq!(model.graph_len(), before);
}

// ============================================================================
// Serialize → re-ingest
// ============================================================================

#[test]
fn serialization_preserves_the_axiom_view() {
    let model = family_model();
    let nt = graph_to_ntriples(&model.read_graph()).expect("serialize");

    let reloaded = OntModel::from_graph(
        graph_from_str(&nt, RdfFormat::NTriples, Arc::new(NodeInterner::new()))
            .expect("reparse"),
        OntConfig::default(),
    );

    for kind in [
        AxiomKind::Declaration,
        AxiomKind::SubClassOf,
        AxiomKind::TransitiveObjectProperty,
        AxiomKind::ClassAssertion,
        AxiomKind::ObjectPropertyAssertion,
    ] {
        assert_eq!(
            model.axioms_of(kind).expect("original").len(),
            reloaded.axioms_of(kind).expect("reloaded").len(),
            "{kind} count survives a serialization round trip"
        );
    }
}

#[test]
fn file_based_pipeline() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("family.ttl");
    std::fs::write(&path, FAMILY_TTL).expect("write fixture");

    let graph = graph_from_file(&path, Arc::new(NodeInterner::new())).expect("ingest");
    let model = OntModel::from_graph(graph, OntConfig::default());

    let all = model.axioms().expect("all axioms");
    assert!(all.len() >= 8, "expected a full axiom inventory, got {}", all.len());

    // Kinds appear in registry order.
    let kinds: Vec<AxiomKind> = all.iter().map(|v| v.kind()).collect();
    let mut sorted = kinds.clone();
    sorted.sort();
    assert_eq!(kinds, sorted);
}
