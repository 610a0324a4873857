//! The per-kind translation strategy contract.
//!
//! One stateless [`Translator`] per axiom kind. The registry (in
//! [`crate::translators`]) holds them in kind-discriminant order, which is
//! also the facade's stable cross-kind enumeration order.
//!
//! The read protocol is split so a facade can test one ad-hoc statement
//! without a full scan:
//!
//! - `candidates` is sound for recall but may over-approximate
//! - `accepts` is the precise filter every candidate passes through
//! - `read_payload`/`aux_triples` realize a statement that was accepted
//!
//! Wrapping accepted statements into views (eager `wrap` / lazy
//! `wrap_light`) lives in [`crate::view`]; writing is `write`, and
//! `search_pattern` produces the probe used for idempotent adds and
//! presence checks in O(matching) instead of O(store).

use ontograph_graph::{Graph, NodeInterner, Triple, TriplePattern};

use crate::axiom::{Axiom, AxiomKind, Payload};
use crate::config::OntConfig;
use crate::error::OntError;
use crate::profile::NodeProfile;

/// The triples one `write` call emitted.
///
/// `triples` is the new axiom's provenance: the main triple, annotation
/// group triples, encoding scaffolding (list cells, reification skeletons),
/// and any component declaration triples this call actually inserted.
/// Declarations that already existed are not claimed.
#[derive(Debug, Clone)]
pub struct WriteReceipt {
    pub main: Triple,
    pub triples: Vec<Triple>,
}

pub trait Translator: Send + Sync {
    fn kind(&self) -> AxiomKind;

    /// Whether enumeration runs the merge step for this kind.
    fn mergeable(&self) -> bool {
        self.kind().mergeable()
    }

    /// Whether this kind is loaded at all under `config`.
    fn enabled(&self, config: &OntConfig) -> bool {
        config.load_annotation_axioms || !self.kind().is_annotation_kind()
    }

    /// Whether `read_payload` can still fail after `accepts` (list-backed
    /// kinds validate their items at read time). The facade realizes such
    /// statements eagerly during enumeration so malformed ones are filtered
    /// or reported there.
    fn validating(&self) -> bool {
        false
    }

    /// A superset of the main triples that might encode this kind, in a
    /// deterministic order for a fixed store snapshot.
    fn candidates(&self, g: &Graph, config: &OntConfig) -> Vec<Triple>;

    /// Precise per-statement test. Conversion failures (a node that cannot
    /// present the required view) reject the statement rather than error.
    fn accepts(&self, g: &Graph, profile: &NodeProfile<'_>, t: Triple, config: &OntConfig)
        -> bool;

    /// Realize the fixed component tuple from an accepted main triple.
    fn read_payload(
        &self,
        g: &Graph,
        profile: &NodeProfile<'_>,
        t: Triple,
    ) -> Result<Payload, OntError>;

    /// Provenance triples beyond the main triple and its annotation groups:
    /// list cells, reified skeletons. Empty for most kinds.
    fn aux_triples(&self, g: &Graph, t: Triple) -> Vec<Triple> {
        let _ = (g, t);
        Vec::new()
    }

    /// Emit the axiom's triples into the store; inverse of the read side.
    fn write(&self, g: &mut Graph, axiom: &Axiom) -> Result<WriteReceipt, OntError>;

    /// A concrete or partially wildcarded probe for this axiom's presence,
    /// or `None` when its components are too anonymous to pin down (the
    /// caller then falls back to a full candidate scan).
    fn search_pattern(&self, interner: &NodeInterner, axiom: &Axiom) -> Option<TriplePattern>;
}

impl dyn Translator {
    /// Wrap an accepted statement into a fully realized view: payload and
    /// annotations are built up front.
    pub fn wrap(
        &self,
        handle: &std::sync::Arc<crate::facade::StoreHandle>,
        g: &Graph,
        profile: &NodeProfile<'_>,
        st: &crate::annotation::Statement,
        config: &OntConfig,
    ) -> Result<crate::view::AxiomView, OntError> {
        crate::view::wrap(self, handle, g, profile, st, None, config, true)
    }

    /// Wrap an accepted statement into a light view: provenance is tracked
    /// now, the axiom fields are realized lazily from the live store on
    /// first access. Preferred for bulk enumeration.
    pub fn wrap_light(
        &self,
        handle: &std::sync::Arc<crate::facade::StoreHandle>,
        g: &Graph,
        profile: &NodeProfile<'_>,
        st: &crate::annotation::Statement,
        config: &OntConfig,
    ) -> Result<crate::view::AxiomView, OntError> {
        crate::view::wrap(self, handle, g, profile, st, None, config, false)
    }
}

/// Reject a `write` call whose axiom belongs to a different translator.
pub(crate) fn check_write_kind(translator: &dyn Translator, axiom: &Axiom) -> Result<(), OntError> {
    if axiom.kind() == translator.kind() {
        Ok(())
    } else {
        Err(OntError::WriteContract(format!(
            "{} axiom handed to the {} translator",
            axiom.kind(),
            translator.kind()
        )))
    }
}
