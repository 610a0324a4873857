//! The per-ontology model facade.
//!
//! [`OntModel`] owns the triple store, the shared caches, and the
//! generation counter behind an `Arc`'d [`StoreHandle`]; axiom views hold a
//! weak reference to that handle, so dropping the model invalidates every
//! outstanding view instead of being kept alive by one.
//!
//! Locking: the store sits behind a `parking_lot::RwLock` in both
//! disciplines. Under `LockMode::SingleWriter` callers serialize their own
//! access and the lock is uncontended; `LockMode::ReaderWriter` is the
//! supported concurrent mode. Either way the lock scope is one logical
//! operation (one add/remove, one enumeration pass), never the lifetime of
//! a view. Enumerating while another thread mutates under `SingleWriter`
//! has undefined results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use ontograph_graph::{Graph, NodeInterner, Triple};

use crate::annotation;
use crate::axiom::{Axiom, AxiomKind};
use crate::config::OntConfig;
use crate::error::OntError;
use crate::merge;
use crate::profile::{CapCache, NodeProfile};
use crate::translator::Translator;
use crate::translators;
use crate::view::{self, AxiomView, PoolKey};

/// The shared state one facade and all of its views agree on.
pub struct StoreHandle {
    graph: RwLock<Graph>,
    interner: Arc<NodeInterner>,
    config: RwLock<OntConfig>,
    /// Bumped by `clear_cache()`; stamps every view-side cache entry.
    generation: AtomicU64,
    /// Node-capability memo, cleared on every mutation.
    node_caps: CapCache,
    /// Realized axioms shared across views of the same statement.
    object_pool: DashMap<PoolKey, (u64, Arc<Axiom>), ahash::RandomState>,
}

impl StoreHandle {
    pub(crate) fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub(crate) fn config_snapshot(&self) -> OntConfig {
        self.config.read().clone()
    }

    /// Read access for view-side realization; recursive so it is safe under
    /// an enumeration pass that already holds the read lock.
    pub(crate) fn read_graph_recursive(&self) -> RwLockReadGuard<'_, Graph> {
        self.graph.read_recursive()
    }

    pub(crate) fn profile<'g>(&'g self, g: &'g Graph, config: &OntConfig) -> NodeProfile<'g> {
        NodeProfile::with_memo(g, Some(&self.node_caps), config.node_cache_size)
    }

    pub(crate) fn pool_get(&self, key: &PoolKey, generation: u64) -> Option<Arc<Axiom>> {
        let entry = self.object_pool.get(key)?;
        let (stamp, axiom) = entry.value();
        (*stamp == generation).then(|| axiom.clone())
    }

    pub(crate) fn pool_put(
        &self,
        key: PoolKey,
        generation: u64,
        axiom: Arc<Axiom>,
        config: &OntConfig,
    ) {
        if self.object_pool.len() < config.object_cache_size {
            self.object_pool.insert(key, (generation, axiom));
        }
    }
}

/// The per-ontology facade: axiom enumeration, addition, removal, and bulk
/// cache invalidation over one triple store.
pub struct OntModel {
    handle: Arc<StoreHandle>,
}

impl OntModel {
    pub fn new(config: OntConfig) -> Self {
        let interner = Arc::new(NodeInterner::new());
        Self::from_graph(Graph::new(interner), config)
    }

    /// Adopt an existing graph (e.g. a parsed document).
    pub fn from_graph(graph: Graph, config: OntConfig) -> Self {
        let interner = graph.interner().clone();
        Self {
            handle: Arc::new(StoreHandle {
                graph: RwLock::new(graph),
                interner,
                config: RwLock::new(config),
                generation: AtomicU64::new(0),
                node_caps: CapCache::default(),
                object_pool: DashMap::default(),
            }),
        }
    }

    pub fn interner(&self) -> &Arc<NodeInterner> {
        &self.handle.interner
    }

    /// The current configuration (re-read per operation; swapping it takes
    /// effect on the next call).
    pub fn config(&self) -> OntConfig {
        self.handle.config_snapshot()
    }

    pub fn set_config(&self, config: OntConfig) {
        *self.handle.config.write() = config;
    }

    /// Read access to the underlying store.
    pub fn read_graph(&self) -> RwLockReadGuard<'_, Graph> {
        self.handle.graph.read()
    }

    /// Direct mutable access to the underlying store (external edits).
    /// Call [`OntModel::clear_cache`] afterwards so outstanding views
    /// recompute from the new ground truth.
    pub fn write_graph(&self) -> RwLockWriteGuard<'_, Graph> {
        self.handle.graph.write()
    }

    pub fn graph_len(&self) -> usize {
        self.handle.graph.read().len()
    }

    /// Drop the content caches of every outstanding view and the shared
    /// caches. Does not touch the store.
    pub fn clear_cache(&self) {
        self.handle.generation.fetch_add(1, Ordering::SeqCst);
        self.handle.node_caps.clear();
        self.handle.object_pool.clear();
        debug!("cleared model caches");
    }

    /// Axioms of every kind, in kind-discriminant order (stable for one
    /// facade instance and store snapshot).
    pub fn axioms(&self) -> Result<Vec<AxiomView>, OntError> {
        let mut out = Vec::new();
        for kind in AxiomKind::ALL {
            out.extend(self.axioms_of(kind)?);
        }
        Ok(out)
    }

    /// Axioms of one kind: candidate scan, precise filter, wrap, and (for
    /// mergeable kinds) the merge step.
    pub fn axioms_of(&self, kind: AxiomKind) -> Result<Vec<AxiomView>, OntError> {
        let translator = translators::translator(kind);
        let config = self.handle.config_snapshot();
        if !translator.enabled(&config) {
            return Ok(Vec::new());
        }

        let g = self.handle.graph.read();
        let profile = self.handle.profile(&g, &config);
        // Merge needs content up front; validating kinds realize eagerly so
        // malformed statements are filtered here, not on first access.
        let eager = translator.mergeable() || translator.validating();

        let mut views = Vec::new();
        let mut first_error: Option<OntError> = None;

        for t in translator.candidates(&g, &config) {
            if !translator.accepts(&g, &profile, t, &config) {
                continue;
            }
            let st = annotation::read_statement(&g, &profile, t);

            let roots: Vec<Option<_>> = if config.split_axiom_annotations && st.groups.len() > 1 {
                st.groups.iter().map(|group| Some(group.root)).collect()
            } else {
                vec![None]
            };

            for ann_root in roots {
                let result = match ann_root {
                    // Split views realize eagerly, pinned to their group.
                    Some(_) => view::wrap(
                        translator,
                        &self.handle,
                        &g,
                        &profile,
                        &st,
                        ann_root,
                        &config,
                        true,
                    ),
                    None if eager => translator.wrap(&self.handle, &g, &profile, &st, &config),
                    None => translator.wrap_light(&self.handle, &g, &profile, &st, &config),
                };
                match result {
                    Ok(view) => views.push(view),
                    Err(err) => {
                        if config.ignore_read_errors {
                            debug!(%kind, error = %err, "skipping malformed statement");
                        } else if first_error.is_none() {
                            first_error = Some(err);
                        }
                    }
                }
            }
        }

        if let Some(err) = first_error {
            return Err(err);
        }

        debug!(%kind, count = views.len(), "enumerated axioms");
        if translator.mergeable() {
            merge::merge_views(views)
        } else {
            Ok(views)
        }
    }

    /// Write an axiom and return its view. Idempotent-safe: when an
    /// encoding of a content-equal axiom already exists, the existing one
    /// is wrapped instead of duplicating triples.
    pub fn add(&self, axiom: &Axiom) -> Result<AxiomView, OntError> {
        let translator = translators::translator(axiom.kind());
        let config = self.handle.config_snapshot();
        let mut g = self.handle.graph.write();

        if let Some(existing) = self.find_existing(translator, &g, axiom, &config)? {
            debug!(kind = %axiom.kind(), "add: axiom already present");
            return Ok(existing);
        }

        let receipt = translator.write(&mut g, axiom)?;
        self.handle.node_caps.clear();
        debug!(
            kind = %axiom.kind(),
            triples = receipt.triples.len(),
            "add: wrote axiom"
        );
        Ok(AxiomView::from_receipt(
            &self.handle,
            receipt,
            axiom.clone(),
            &config,
        ))
    }

    /// Whether an axiom equal to `axiom` (content and annotations) is
    /// present.
    pub fn contains(&self, axiom: &Axiom) -> Result<bool, OntError> {
        let translator = translators::translator(axiom.kind());
        let config = self.handle.config_snapshot();
        let g = self.handle.graph.read();
        Ok(self
            .find_existing(translator, &g, axiom, &config)?
            .is_some())
    }

    /// Probe the store for an existing encoding of `axiom`, using the
    /// translator's search pattern when it has one and a full candidate
    /// scan otherwise.
    fn find_existing(
        &self,
        translator: &'static dyn Translator,
        g: &Graph,
        axiom: &Axiom,
        config: &OntConfig,
    ) -> Result<Option<AxiomView>, OntError> {
        let profile = self.handle.profile(g, config);
        let candidates: Vec<Triple> = match translator.search_pattern(g.interner(), axiom) {
            Some(pattern) => g.matches(pattern).collect(),
            None => translator.candidates(g, config),
        };

        for t in candidates {
            if !translator.accepts(g, &profile, t, config) {
                continue;
            }
            let st = annotation::read_statement(g, &profile, t);
            let Ok(existing) = view::realize_axiom(translator, g, &profile, &st, None) else {
                continue;
            };
            if existing == *axiom {
                return Ok(Some(translator.wrap(&self.handle, g, &profile, &st, config)?));
            }
        }
        Ok(None)
    }

    /// Delete exactly one contributor group of `view` (its first group that
    /// is still present). A merged view loses one encoding per call and the
    /// axiom is gone only once all groups are removed. Returns the number
    /// of triples deleted.
    pub fn remove(&self, view: &AxiomView) -> Result<usize, OntError> {
        let mut g = self.handle.graph.write();
        for group in view.groups() {
            if !g.contains(&group.main) {
                continue;
            }
            let mut removed = 0;
            for t in &group.triples {
                if g.remove(t) {
                    removed += 1;
                }
            }
            self.handle.node_caps.clear();
            debug!(kind = %view.kind(), removed, "remove: deleted contributor group");
            return Ok(removed);
        }
        Ok(0)
    }
}
