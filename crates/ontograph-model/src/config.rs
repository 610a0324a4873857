//! Model configuration.
//!
//! One flat options value, threaded explicitly through every translator and
//! facade call. The facade re-reads its current config on every operation,
//! so a swap takes effect on the next read.

use serde::{Deserialize, Serialize};

/// Store locking discipline (see the facade docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LockMode {
    /// Callers serialize their own access; the internal lock is uncontended.
    #[default]
    SingleWriter,
    /// Reads take the read lock, writes the write lock, scoped to one
    /// logical operation each.
    ReaderWriter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntConfig {
    /// Load the annotation-axiom kinds (assertion, sub-property,
    /// domain, range). When false those kinds enumerate empty.
    pub load_annotation_axioms: bool,
    pub allow_bulk_annotation_assertions: bool,
    pub ignore_annotation_overlaps: bool,
    /// Enumerate a statement with several annotation groups as one view per
    /// group instead of one union view.
    pub split_axiom_annotations: bool,
    /// Skip malformed candidate statements silently. When false, a malformed
    /// statement surfaces as a `BadEncoding` error for its kind.
    pub ignore_read_errors: bool,
    /// Capacity bound of the shared node-capability memo.
    pub node_cache_size: usize,
    /// Capacity bound of the shared realized-axiom pool.
    pub object_cache_size: usize,
    /// 0 disables content/payload caching entirely.
    pub cache_level: u8,
    pub lock_mode: LockMode,
}

impl Default for OntConfig {
    fn default() -> Self {
        Self {
            load_annotation_axioms: true,
            allow_bulk_annotation_assertions: true,
            ignore_annotation_overlaps: true,
            split_axiom_annotations: false,
            ignore_read_errors: true,
            node_cache_size: 50_000,
            object_cache_size: 50_000,
            cache_level: 1,
            lock_mode: LockMode::SingleWriter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_caches_and_ignores_read_errors() {
        let config = OntConfig::default();
        assert!(config.ignore_read_errors);
        assert!(config.load_annotation_axioms);
        assert_eq!(config.cache_level, 1);
        assert_eq!(config.lock_mode, LockMode::SingleWriter);
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = OntConfig {
            split_axiom_annotations: true,
            cache_level: 0,
            ..OntConfig::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let back: OntConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(config, back);
    }
}
