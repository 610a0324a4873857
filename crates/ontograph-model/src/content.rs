//! Canonical comparison content and its generation-stamped cache cells.
//!
//! A view's canonical content is a flat token array derived from its
//! realized axiom: the kind tag, the component terms (with symmetric pairs
//! and unordered collections sorted), and the normalized annotation tree.
//! Comparing token arrays is the cheap equality used for dedup and merge
//! grouping; full structural comparison of two `Axiom` values is reserved
//! for explicit equality checks against foreign values.
//!
//! Cache cells are stamped with the owning facade's generation counter, so
//! one `clear_cache()` bump invalidates every outstanding view without a
//! view registry.

use ontograph_graph::{Literal, Term};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::axiom::{
    binary_parts, characteristic_prop, normalized_annotations, Annotation, Axiom, Payload,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentToken {
    Kind(u8),
    Iri(String),
    Blank(String),
    Literal(Literal),
    /// Opens one annotation's nested block.
    Open,
    Close,
}

fn term_token(term: &Term) -> ContentToken {
    match term {
        Term::Iri(iri) => ContentToken::Iri(iri.clone()),
        Term::Blank(label) => ContentToken::Blank(label.clone()),
        Term::Literal(lit) => ContentToken::Literal(lit.clone()),
    }
}

fn push_annotations(out: &mut Vec<ContentToken>, annotations: &[Annotation]) {
    for ann in annotations {
        out.push(ContentToken::Open);
        out.push(ContentToken::Iri(ann.prop.0.clone()));
        out.push(term_token(&ann.value.term()));
        push_annotations(out, &ann.annotations);
        out.push(ContentToken::Close);
    }
}

/// Compute the canonical content of a realized axiom.
pub fn content_of(axiom: &Axiom) -> Vec<ContentToken> {
    let kind = axiom.kind();
    let mut out = vec![ContentToken::Kind(kind as u8)];

    if let Some((s, o)) = binary_parts(&axiom.payload) {
        let mut pair = [term_token(&s), term_token(&o)];
        if kind.mergeable() {
            pair.sort();
        }
        out.extend(pair);
    } else if let Some(prop) = characteristic_prop(&axiom.payload) {
        out.push(ContentToken::Iri(prop.to_string()));
    } else {
        match &axiom.payload {
            Payload::Declaration { entity } => {
                out.push(ContentToken::Iri(entity.iri().to_string()));
            }
            Payload::DisjointUnion { class, members } => {
                out.push(ContentToken::Iri(class.0.clone()));
                let mut tokens: Vec<ContentToken> = members
                    .iter()
                    .map(|c| ContentToken::Iri(c.0.clone()))
                    .collect();
                tokens.sort();
                out.extend(tokens);
            }
            Payload::SubPropertyChainOf { chain, sup } => {
                out.push(ContentToken::Iri(sup.0.clone()));
                // Chain order is semantic; keep it.
                out.extend(chain.iter().map(|p| ContentToken::Iri(p.0.clone())));
            }
            Payload::HasKey { class, keys } => {
                out.push(ContentToken::Iri(class.0.clone()));
                let mut tokens: Vec<ContentToken> = keys
                    .iter()
                    .map(|k| ContentToken::Iri(k.iri().to_string()))
                    .collect();
                tokens.sort();
                out.extend(tokens);
            }
            Payload::ClassAssertion { individual, class } => {
                out.push(term_token(&individual.term()));
                out.push(ContentToken::Iri(class.0.clone()));
            }
            Payload::ObjectPropertyAssertion {
                subject,
                prop,
                object,
            }
            | Payload::NegativeObjectPropertyAssertion {
                subject,
                prop,
                object,
            } => {
                out.push(term_token(&subject.term()));
                out.push(ContentToken::Iri(prop.0.clone()));
                out.push(term_token(&object.term()));
            }
            Payload::DataPropertyAssertion {
                subject,
                prop,
                value,
            }
            | Payload::NegativeDataPropertyAssertion {
                subject,
                prop,
                value,
            } => {
                out.push(term_token(&subject.term()));
                out.push(ContentToken::Iri(prop.0.clone()));
                out.push(ContentToken::Literal(value.clone()));
            }
            Payload::AnnotationAssertion {
                subject,
                prop,
                value,
            } => {
                out.push(term_token(&subject.term()));
                out.push(ContentToken::Iri(prop.0.clone()));
                out.push(term_token(&value.term()));
            }
            // Binary and characteristic payloads are handled above.
            _ => {}
        }
    }

    push_annotations(&mut out, &normalized_annotations(&axiom.annotations));
    out
}

// ============================================================================
// Generation-Stamped Cache Cells
// ============================================================================

/// A lazily filled slot whose value is valid for exactly one generation of
/// the owning facade.
#[derive(Debug)]
pub struct Stamped<T> {
    slot: Mutex<Option<(u64, Arc<T>)>>,
}

impl<T> Stamped<T> {
    pub fn empty() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    pub fn filled(generation: u64, value: Arc<T>) -> Self {
        Self {
            slot: Mutex::new(Some((generation, value))),
        }
    }

    /// The cached value, if it was computed for `generation`.
    pub fn get(&self, generation: u64) -> Option<Arc<T>> {
        let guard = self.slot.lock();
        match &*guard {
            Some((stamp, value)) if *stamp == generation => Some(value.clone()),
            _ => None,
        }
    }

    pub fn set(&self, generation: u64, value: Arc<T>) {
        *self.slot.lock() = Some((generation, value));
    }

    /// Discard the computed value; the next access recomputes.
    pub fn clear(&self) {
        *self.slot.lock() = None;
    }

    /// Whether a value is held at all, regardless of its stamp.
    pub fn is_cached(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Clone the slot as-is (used when a merged view borrows a
    /// contributor's cache).
    pub fn snapshot(&self) -> Self {
        Self {
            slot: Mutex::new(self.slot.lock().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axiom::{AnnValue, Class, Individual, ObjectProp};

    fn class(n: &str) -> Class {
        Class(format!("http://example.org/{n}"))
    }

    #[test]
    fn symmetric_pair_content_is_order_insensitive() {
        let fwd = Axiom::new(Payload::EquivalentClasses {
            a: class("A"),
            b: class("B"),
        });
        let rev = Axiom::new(Payload::EquivalentClasses {
            a: class("B"),
            b: class("A"),
        });
        assert_eq!(content_of(&fwd), content_of(&rev));
    }

    #[test]
    fn directed_pair_content_keeps_order() {
        let fwd = Axiom::new(Payload::SubClassOf {
            sub: class("A"),
            sup: class("B"),
        });
        let rev = Axiom::new(Payload::SubClassOf {
            sub: class("B"),
            sup: class("A"),
        });
        assert_ne!(content_of(&fwd), content_of(&rev));
    }

    #[test]
    fn chain_order_is_semantic() {
        let p = |n: &str| ObjectProp(format!("http://example.org/{n}"));
        let fwd = Axiom::new(Payload::SubPropertyChainOf {
            chain: vec![p("p"), p("q")],
            sup: p("r"),
        });
        let rev = Axiom::new(Payload::SubPropertyChainOf {
            chain: vec![p("q"), p("p")],
            sup: p("r"),
        });
        assert_ne!(content_of(&fwd), content_of(&rev));
    }

    #[test]
    fn annotation_order_does_not_change_content() {
        let payload = Payload::ClassAssertion {
            individual: Individual::Named("http://example.org/i".into()),
            class: class("A"),
        };
        let a1 = Annotation::new(
            "http://www.w3.org/2000/01/rdf-schema#label",
            AnnValue::Iri("http://example.org/x".into()),
        );
        let a2 = Annotation::new(
            "http://www.w3.org/2000/01/rdf-schema#comment",
            AnnValue::Iri("http://example.org/y".into()),
        );
        let fwd = Axiom::with_annotations(payload.clone(), vec![a1.clone(), a2.clone()]);
        let rev = Axiom::with_annotations(payload, vec![a2, a1]);
        assert_eq!(content_of(&fwd), content_of(&rev));
    }

    #[test]
    fn stamped_cell_honors_generation() {
        let cell: Stamped<u32> = Stamped::empty();
        assert!(!cell.is_cached());

        cell.set(1, Arc::new(7));
        assert_eq!(cell.get(1).as_deref(), Some(&7));
        // A generation bump invalidates without clearing.
        assert_eq!(cell.get(2), None);
        assert!(cell.is_cached());

        cell.clear();
        assert!(!cell.is_cached());
    }
}
