//! Keyed-fragment merge and the colimit maps
//!
//! The merge traversal order is part of the contract: fragments in list
//! order, records in fragment order, and values sharing a key folded
//! left to right through `combine` in the order encountered. For a
//! non-commutative `combine` the result depends on exactly this order,
//! so independent implementations agree bit for bit. Output records are
//! emitted in ascending key order regardless of input order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{Fragment, FragmentRecord};

/// Merge keyed fragments into one record per distinct key.
///
/// Zero fragments produce an empty fragment. A single fragment comes
/// back value for value, deduplicated by the same fold rule if it
/// carries duplicate keys. Callers wanting order-independent results
/// must supply a commutative, associative `combine`.
pub fn merge_fragments<K, V, F>(fragments: &[Fragment<K, V>], mut combine: F) -> Fragment<K, V>
where
    K: Ord + Clone,
    V: Clone,
    F: FnMut(V, V) -> V,
{
    let mut merged: BTreeMap<K, V> = BTreeMap::new();

    for fragment in fragments {
        for record in &fragment.records {
            let incoming = record.value.clone();
            let value = match merged.remove(&record.key) {
                Some(existing) => combine(existing, incoming),
                None => incoming,
            };
            merged.insert(record.key.clone(), value);
        }
    }

    debug!(
        fragments = fragments.len(),
        keys = merged.len(),
        "merged keyed fragments"
    );

    Fragment {
        records: merged
            .into_iter()
            .map(|(key, value)| FragmentRecord { key, value })
            .collect(),
    }
}

/// Canonical injection of a source fragment into the merged fragment.
///
/// Maps each source record position to the merged position holding the
/// same key. Keys absent from the merge are omitted, not errors.
pub fn canonical_injection<K: Ord, V>(
    source: &Fragment<K, V>,
    colimit: &Fragment<K, V>,
) -> BTreeMap<usize, usize> {
    let positions: BTreeMap<&K, usize> = colimit
        .records
        .iter()
        .enumerate()
        .map(|(i, r)| (&r.key, i))
        .collect();

    source
        .records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| positions.get(&r.key).map(|&j| (i, j)))
        .collect()
}

/// The mediating map from the merged fragment into a compatible target.
///
/// Maps each merged record position to the target position holding the
/// same key; misses are omitted. Together with the canonical injections
/// this lets tests check the universal property by direct computation.
/// The cocone maps are part of that statement but are not consulted
/// here.
pub fn mediating_morphism<K: Ord, V>(
    colimit: &Fragment<K, V>,
    target: &Fragment<K, V>,
    _cocone_maps: &[BTreeMap<usize, usize>],
) -> BTreeMap<usize, usize> {
    let positions: BTreeMap<&K, usize> = target
        .records
        .iter()
        .enumerate()
        .map(|(i, r)| (&r.key, i))
        .collect();

    colimit
        .records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| positions.get(&r.key).map(|&j| (i, j)))
        .collect()
}
