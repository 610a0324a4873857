//! The merge engine: fold syntactically distinct encodings of one logical
//! axiom into a single view.
//!
//! Grouping is by canonical content, never by object identity or main
//! triple, so `A owl:sameAs B` and `B owl:sameAs A` land in one group.
//! Folding is read-side only; splitting happens incrementally at write time
//! as removal peels contributor groups off the merged view. The common case
//! (one encoding per axiom) passes through untouched.

use ahash::AHashMap;
use std::sync::Arc;

use crate::content::ContentToken;
use crate::error::OntError;
use crate::view::AxiomView;

/// Group content-equal views and fold each group of size > 1 into one
/// merged view. Output order is first-occurrence order.
pub(crate) fn merge_views(views: Vec<AxiomView>) -> Result<Vec<AxiomView>, OntError> {
    let mut buckets: Vec<Vec<AxiomView>> = Vec::new();
    let mut index: AHashMap<Arc<Vec<ContentToken>>, usize> = AHashMap::new();

    for view in views {
        let key = view.content()?;
        match index.get(&key) {
            Some(&slot) => buckets[slot].push(view),
            None => {
                index.insert(key, buckets.len());
                buckets.push(vec![view]);
            }
        }
    }

    Ok(buckets
        .into_iter()
        .map(|mut bucket| {
            if bucket.len() == 1 {
                bucket.remove(0)
            } else {
                AxiomView::merged(bucket)
            }
        })
        .collect())
}
