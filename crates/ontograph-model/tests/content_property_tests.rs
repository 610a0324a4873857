//! Property tests over canonical content and write/read fidelity.

use ontograph_model::{
    Annotation, AnnValue, Axiom, AxiomKind, Class, Individual, ObjectProp, OntConfig, OntModel,
    Payload,
};
use ontograph_graph::Literal;
use proptest::prelude::*;

fn iri_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,12}".prop_map(|n| format!("http://example.org/{n}"))
}

fn literal_value() -> impl Strategy<Value = Literal> {
    // Printable, escape-worthy content included.
    "[ -~]{0,24}".prop_map(Literal::simple)
}

prop_compose! {
    fn subclass_axiom()(sub in iri_name(), sup in iri_name()) -> Axiom {
        Axiom::new(Payload::SubClassOf { sub: Class(sub), sup: Class(sup) })
    }
}

prop_compose! {
    fn assertion_axiom()(s in iri_name(), p in iri_name(), o in iri_name()) -> Axiom {
        Axiom::new(Payload::ObjectPropertyAssertion {
            subject: Individual::Named(s),
            prop: ObjectProp(p),
            object: Individual::Named(o),
        })
    }
}

proptest! {
    /// Any subclass axiom survives write-then-read, with or without an
    /// annotation.
    #[test]
    fn subclass_round_trips(axiom in subclass_axiom(), comment in literal_value()) {
        let model = OntModel::new(OntConfig::default());
        model.add(&axiom).expect("add");
        let views = model.axioms_of(AxiomKind::SubClassOf).expect("enumerate");
        prop_assert_eq!(views.len(), 1);
        prop_assert_eq!(&views[0].erase_origin().expect("erase"), &axiom);

        let mut annotated = axiom.clone();
        annotated.annotations.push(Annotation::new(
            "http://www.w3.org/2000/01/rdf-schema#comment",
            AnnValue::Literal(comment),
        ));
        let model = OntModel::new(OntConfig::default());
        model.add(&annotated).expect("add annotated");
        let views = model.axioms_of(AxiomKind::SubClassOf).expect("enumerate");
        prop_assert_eq!(views.len(), 1);
        prop_assert_eq!(&views[0].erase_origin().expect("erase"), &annotated);
    }

    /// Removing what was added always restores the starting store size.
    #[test]
    fn add_remove_restores_store_size(axioms in proptest::collection::vec(assertion_axiom(), 1..6)) {
        // Duplicate adds return the existing view rather than new
        // provenance; keep one of each.
        let mut unique: Vec<Axiom> = Vec::new();
        for axiom in axioms {
            if !unique.contains(&axiom) {
                unique.push(axiom);
            }
        }

        let model = OntModel::new(OntConfig::default());
        let mut views = Vec::new();
        for axiom in &unique {
            views.push(model.add(axiom).expect("add"));
        }
        // Remove in reverse order so shared declarations are released after
        // their dependents.
        for view in views.iter().rev() {
            let removed = model.remove(view).expect("remove");
            prop_assert_eq!(removed, view.triples().len());
        }
        prop_assert_eq!(model.graph_len(), 0);
    }

    /// Merge grouping is insensitive to the order encodings were added.
    #[test]
    fn merge_grouping_is_order_insensitive(a in iri_name(), b in iri_name()) {
        prop_assume!(a != b);
        let fwd = Axiom::new(Payload::EquivalentClasses {
            a: Class(a.clone()),
            b: Class(b.clone()),
        });
        let rev = Axiom::new(Payload::EquivalentClasses {
            a: Class(b),
            b: Class(a),
        });

        for (first, second) in [(&fwd, &rev), (&rev, &fwd)] {
            let model = OntModel::new(OntConfig::default());
            model.add(first).expect("add first");
            model.add(second).expect("add second");
            let views = model.axioms_of(AxiomKind::EquivalentClasses).expect("enumerate");
            prop_assert_eq!(views.len(), 1);
            prop_assert!(views[0].is_merged());
        }
    }

    /// Idempotent add never grows the store on the second call.
    #[test]
    fn double_add_is_size_stable(axiom in assertion_axiom()) {
        let model = OntModel::new(OntConfig::default());
        let first = model.add(&axiom).expect("first");
        let size = model.graph_len();
        let second = model.add(&axiom).expect("second");
        prop_assert_eq!(model.graph_len(), size);
        prop_assert!(first.same_content(&second).expect("compare"));
    }
}
