//! Key-to-feature index for one snapshot.

use crate::config::CollisionPolicy;
use crate::feature::Feature;
use crate::identity::resolve_key;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Diagnostics gathered while building a [`FeatureIndex`].
///
/// Unresolvable identities and key collisions are not errors, but callers
/// may want to surface them; these counts are the way to detect both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Features in the input collection.
    pub feature_count: usize,
    /// Distinct keys that made it into the index.
    pub indexed: usize,
    /// Features dropped because no identity key could be resolved.
    pub unresolved: usize,
    /// Features that hit an already-occupied key.
    pub collisions: usize,
}

/// Mapping from identity key to feature, built from one snapshot.
///
/// # Invariants
///
/// At most one feature per key. Iteration over [`keys`](FeatureIndex::keys)
/// is lexicographic, which is what makes diff output reproducible
/// run-over-run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureIndex {
    map: BTreeMap<String, Feature>,
    stats: IndexStats,
}

impl FeatureIndex {
    /// Index a feature collection.
    ///
    /// Features with no resolvable key are silently dropped (they are
    /// unidentifiable and therefore unmatchable); duplicate keys within the
    /// collection are resolved per `policy`.
    pub fn build(features: &[Feature], policy: CollisionPolicy) -> FeatureIndex {
        let mut map: BTreeMap<String, Feature> = BTreeMap::new();
        let mut stats = IndexStats {
            feature_count: features.len(),
            ..IndexStats::default()
        };

        for feature in features {
            let Some(key) = resolve_key(feature) else {
                stats.unresolved += 1;
                continue;
            };
            match map.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(feature.clone());
                }
                Entry::Occupied(mut slot) => {
                    stats.collisions += 1;
                    if policy == CollisionPolicy::LastWriteWins {
                        slot.insert(feature.clone());
                    }
                }
            }
        }

        stats.indexed = map.len();
        FeatureIndex { map, stats }
    }

    pub fn get(&self, key: &str) -> Option<&Feature> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.map.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Feature)> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }
}
