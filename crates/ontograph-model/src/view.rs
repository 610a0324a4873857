//! Provenance-tracking axiom views.
//!
//! An [`AxiomView`] pairs an axiom with the exact triples that justify it
//! in a store snapshot (grouped per contributing encoding), a weak
//! re-resolvable origin, and generation-stamped caches for the realized
//! axiom and its canonical content. Views never retain their facade: a
//! dropped model invalidates every outstanding view (`NoOrigin`), and
//! [`AxiomView::erase_origin`] hands out a plain value with no
//! back-reference at all.
//!
//! Light views (bulk enumeration) realize their axiom lazily from the
//! *live* store on first access; after `clear_cache()` the same path
//! recomputes from current ground truth.

use std::sync::{Arc, Weak};

use ontograph_graph::{Graph, NodeId, Triple};

use crate::annotation::{self, Statement};
use crate::axiom::{Axiom, AxiomKind};
use crate::config::OntConfig;
use crate::content::{content_of, ContentToken, Stamped};
use crate::error::OntError;
use crate::facade::StoreHandle;
use crate::profile::NodeProfile;
use crate::translator::{Translator, WriteReceipt};
use crate::translators;

/// One contributing encoding: its main triple and the full triple closure
/// (main, scaffolding, annotation groups, owned declarations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripleGroup {
    pub main: Triple,
    pub triples: Vec<Triple>,
}

/// Cache pool key: a view is identified by its main triple, kind, and
/// (for split views) the annotation group it was pinned to.
pub(crate) type PoolKey = (Triple, AxiomKind, Option<NodeId>);

pub struct AxiomView {
    kind: AxiomKind,
    origin: Weak<StoreHandle>,
    groups: Vec<TripleGroup>,
    /// For split views: realize only the group rooted here.
    ann_root: Option<NodeId>,
    payload: Stamped<Axiom>,
    content: Stamped<Vec<ContentToken>>,
}

/// Build the axiom value for a statement: translator payload plus the
/// statement's annotations (all groups, or just `ann_root`'s).
pub(crate) fn realize_axiom(
    translator: &dyn Translator,
    g: &Graph,
    profile: &NodeProfile<'_>,
    st: &Statement,
    ann_root: Option<NodeId>,
) -> Result<Axiom, OntError> {
    let payload = translator.read_payload(g, profile, st.triple)?;
    let annotations = match ann_root {
        Some(root) => st
            .groups
            .iter()
            .filter(|group| group.root == root)
            .flat_map(|group| group.annotations.iter().cloned())
            .collect(),
        None => st.annotations(),
    };
    Ok(Axiom::with_annotations(payload, annotations))
}

/// Wrap an accepted statement. `eager` realizes the axiom up front (`wrap`);
/// otherwise fields are computed lazily from the live store (`wrap_light`).
pub(crate) fn wrap(
    translator: &dyn Translator,
    handle: &Arc<StoreHandle>,
    g: &Graph,
    profile: &NodeProfile<'_>,
    st: &Statement,
    ann_root: Option<NodeId>,
    config: &OntConfig,
    eager: bool,
) -> Result<AxiomView, OntError> {
    let mut triples = vec![st.triple];
    triples.extend(translator.aux_triples(g, st.triple));
    for group in &st.groups {
        // A split view owns only its pinned annotation group.
        if ann_root.map_or(true, |root| group.root == root) {
            triples.extend(group.triples.iter().copied());
        }
    }

    let view = AxiomView {
        kind: translator.kind(),
        origin: Arc::downgrade(handle),
        groups: vec![TripleGroup {
            main: st.triple,
            triples,
        }],
        ann_root,
        payload: Stamped::empty(),
        content: Stamped::empty(),
    };

    if eager {
        let axiom = Arc::new(realize_axiom(translator, g, profile, st, ann_root)?);
        view.store_axiom(handle, config, axiom);
    }
    Ok(view)
}

impl AxiomView {
    /// A view for an axiom that was just written.
    pub(crate) fn from_receipt(
        handle: &Arc<StoreHandle>,
        receipt: WriteReceipt,
        axiom: Axiom,
        config: &OntConfig,
    ) -> AxiomView {
        let view = AxiomView {
            kind: axiom.kind(),
            origin: Arc::downgrade(handle),
            groups: vec![TripleGroup {
                main: receipt.main,
                triples: receipt.triples,
            }],
            ann_root: None,
            payload: Stamped::empty(),
            content: Stamped::empty(),
        };
        view.store_axiom(handle, config, Arc::new(axiom));
        view
    }

    /// Fold content-equal contributors into one merged view. The first
    /// contributor donates its caches (same content, identical canonical
    /// data); provenance is the concatenation of all groups in order.
    pub(crate) fn merged(contributors: Vec<AxiomView>) -> AxiomView {
        debug_assert!(contributors.len() > 1);
        let mut groups = Vec::new();
        let mut head: Option<(AxiomKind, Weak<StoreHandle>, Option<NodeId>, Stamped<Axiom>, Stamped<Vec<ContentToken>>)> = None;

        for view in contributors {
            if head.is_none() {
                head = Some((
                    view.kind,
                    view.origin.clone(),
                    view.ann_root,
                    view.payload.snapshot(),
                    view.content.snapshot(),
                ));
            }
            groups.extend(view.groups);
        }

        let (kind, origin, ann_root, payload, content) =
            head.expect("merged() requires contributors");
        AxiomView {
            kind,
            origin,
            groups,
            ann_root,
            payload,
            content,
        }
    }

    fn store_axiom(&self, handle: &Arc<StoreHandle>, config: &OntConfig, axiom: Arc<Axiom>) {
        if config.cache_level == 0 {
            return;
        }
        let generation = handle.generation();
        self.payload.set(generation, axiom.clone());
        handle.pool_put(self.pool_key(), generation, axiom, config);
    }

    fn pool_key(&self) -> PoolKey {
        (self.main_triple(), self.kind, self.ann_root)
    }

    pub fn kind(&self) -> AxiomKind {
        self.kind
    }

    /// The main triple of the first contributing encoding.
    pub fn main_triple(&self) -> Triple {
        self.groups[0].main
    }

    pub fn groups(&self) -> &[TripleGroup] {
        &self.groups
    }

    /// Whether this view folds several contributing encodings.
    pub fn is_merged(&self) -> bool {
        self.groups.len() > 1
    }

    /// The full provenance: every triple of every contributing group, in
    /// group order. Removal deletes exactly these (one group at a time for
    /// merged views).
    pub fn triples(&self) -> Vec<Triple> {
        self.groups
            .iter()
            .flat_map(|group| group.triples.iter().copied())
            .collect()
    }

    /// Whether two views denote the same RDF assertion, regardless of
    /// logical content.
    pub fn same_triple(&self, other: &AxiomView) -> bool {
        self.main_triple() == other.main_triple()
    }

    /// Whether two views have equal canonical content, regardless of
    /// provenance.
    pub fn same_content(&self, other: &AxiomView) -> Result<bool, OntError> {
        Ok(self.content()? == other.content()?)
    }

    /// The realized axiom, recomputed from the live store when no cached
    /// value is valid for the facade's current generation.
    pub fn axiom(&self) -> Result<Arc<Axiom>, OntError> {
        let handle = self.origin.upgrade().ok_or(OntError::NoOrigin)?;
        let config = handle.config_snapshot();
        let generation = handle.generation();

        if config.cache_level > 0 {
            if let Some(axiom) = self.payload.get(generation) {
                return Ok(axiom);
            }
            if let Some(axiom) = handle.pool_get(&self.pool_key(), generation) {
                self.payload.set(generation, axiom.clone());
                return Ok(axiom);
            }
        }

        let axiom = {
            // Recursive read: this may run while the facade already holds
            // the read lock during an enumeration pass.
            let g = handle.read_graph_recursive();
            let profile = handle.profile(&g, &config);
            let translator = translators::translator(self.kind);
            let st = annotation::read_statement(&g, &profile, self.main_triple());
            Arc::new(realize_axiom(
                translator,
                &g,
                &profile,
                &st,
                self.ann_root,
            )?)
        };

        if config.cache_level > 0 {
            self.payload.set(generation, axiom.clone());
            handle.pool_put(self.pool_key(), generation, axiom.clone(), &config);
        }
        Ok(axiom)
    }

    /// The plain value, with no back-reference to any store. Everything
    /// reachable from the result is owned data.
    pub fn erase_origin(&self) -> Result<Axiom, OntError> {
        Ok((*self.axiom()?).clone())
    }

    /// Canonical comparison content, lazily computed and cached per the
    /// facade generation.
    pub fn content(&self) -> Result<Arc<Vec<ContentToken>>, OntError> {
        let handle = self.origin.upgrade().ok_or(OntError::NoOrigin)?;
        let config = handle.config_snapshot();
        let generation = handle.generation();

        if config.cache_level > 0 {
            if let Some(tokens) = self.content.get(generation) {
                return Ok(tokens);
            }
        }

        let axiom = self.axiom()?;
        let tokens = Arc::new(content_of(&axiom));
        if config.cache_level > 0 {
            self.content.set(generation, tokens.clone());
        }
        Ok(tokens)
    }

    /// Drop this view's computed caches; the next access recomputes from
    /// the live store.
    pub fn clear(&self) {
        self.payload.clear();
        self.content.clear();
    }

    /// Whether canonical content is currently held (observable for tests).
    pub fn is_cached(&self) -> bool {
        self.content.is_cached()
    }
}

impl std::fmt::Debug for AxiomView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxiomView")
            .field("kind", &self.kind)
            .field("groups", &self.groups.len())
            .field("main", &self.main_triple())
            .finish()
    }
}
