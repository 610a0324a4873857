//! Ontograph model: the triple-to-axiom translation core.
//!
//! Maps a mutable RDF-style triple graph (from `ontograph-graph`) to a
//! typed model of ontology axioms and back:
//!
//! 1. **Translators**: one stateless strategy per axiom kind recognizes,
//!    realizes, and writes that kind's triple encoding.
//! 2. **Axiom Views**: provenance-tracking values — each knows exactly
//!    which triples justify it, so removal leaves no residue.
//! 3. **Merge Engine**: multiple legal encodings of one logical axiom
//!    (pairwise equivalences and friends) fold into a single view and
//!    split back group-by-group on removal.
//! 4. **Content Cache**: canonical comparison data per view, generation-
//!    stamped so one `clear_cache()` invalidates everything outstanding.
//! 5. **Model Facade**: the per-ontology owner of store, caches, and
//!    configuration.
//!
//! ## Module Organization
//!
//! - `axiom`: the erased axiom value model (kinds, components, annotations)
//! - `profile`: typed node views and punning legality
//! - `annotation`: the reification pattern for axiom annotations
//! - `translator` / `translators`: the per-kind strategy contract and registry
//! - `view` / `content`: provenance-tracking views and canonical content
//! - `merge`: duplicate-encoding folding
//! - `facade`: the `OntModel` entry point

pub mod annotation;
pub mod axiom;
pub mod config;
pub mod content;
pub mod error;
pub mod facade;
mod merge;
pub mod profile;
pub mod translator;
pub mod translators;
pub mod view;

pub use axiom::{
    AnnProp, AnnSubject, AnnValue, Annotation, Axiom, AxiomKind, Class, DataProp, Datatype,
    Entity, Individual, ObjectProp, Payload, PropRef,
};
pub use config::{LockMode, OntConfig};
pub use content::ContentToken;
pub use error::OntError;
pub use facade::{OntModel, StoreHandle};
pub use profile::{NodeProfile, TypedNode, ViewKind};
pub use translator::{Translator, WriteReceipt};
pub use translators::{translator, TRANSLATORS};
pub use view::{AxiomView, TripleGroup};
