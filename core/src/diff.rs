//! Change records and reports for snapshot comparison.
//!
//! This module defines the types the diff engine emits:
//! - [`ChangeRecord`]: one reportable event (added/removed/modified feature)
//! - [`FieldChange`]: one tracked-field transition on a modified feature
//! - [`Summary`]: per-category counts, derived from the record sequence
//! - [`DiffReport`]: a versioned collection of records plus index diagnostics

use crate::address::compose_address;
use crate::feature::{Feature, PropertyValue};
use crate::geometry::extract_coordinate;
use crate::index::IndexStats;
use serde::{Deserialize, Serialize};

/// Pseudo-field name used when coordinate tracking is enabled.
pub const COORDINATE_FIELD: &str = "coordinate";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCategory {
    Added,
    Removed,
    Modified,
}

/// One tracked-field transition: `old` and `new` are each absent when the
/// field was missing on that side. Absent is distinct from a present empty
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<PropertyValue>,
}

/// One reportable event produced by the diff engine.
///
/// Created once per qualifying key, immutable afterward, consumed by
/// rendering. Display attributes (`name`, `address`, `coordinate`) come from
/// the new-side feature for added/modified records and from the old-side
/// feature for removed ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub category: ChangeCategory,
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<(f64, f64)>,
    /// Tracked-field transitions, in tracked-field order. Empty for
    /// added/removed records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<FieldChange>,
}

impl ChangeRecord {
    pub fn added(key: String, feature: &Feature) -> ChangeRecord {
        Self::from_feature(ChangeCategory::Added, key, feature, Vec::new())
    }

    pub fn removed(key: String, feature: &Feature) -> ChangeRecord {
        Self::from_feature(ChangeCategory::Removed, key, feature, Vec::new())
    }

    pub fn modified(key: String, feature: &Feature, changes: Vec<FieldChange>) -> ChangeRecord {
        debug_assert!(!changes.is_empty(), "modified record needs at least one change");
        Self::from_feature(ChangeCategory::Modified, key, feature, changes)
    }

    fn from_feature(
        category: ChangeCategory,
        key: String,
        feature: &Feature,
        changes: Vec<FieldChange>,
    ) -> ChangeRecord {
        ChangeRecord {
            category,
            key,
            name: feature.display_name(),
            address: compose_address(feature),
            coordinate: extract_coordinate(feature),
            changes,
        }
    }
}

/// Per-category record counts.
///
/// Always recomputed from the emitted records, never tracked independently;
/// `modified` can be smaller than the number of common keys since unchanged
/// features produce no record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl Summary {
    pub fn from_records(records: &[ChangeRecord]) -> Summary {
        let mut summary = Summary::default();
        for record in records {
            match record.category {
                ChangeCategory::Added => summary.added += 1,
                ChangeCategory::Removed => summary.removed += 1,
                ChangeCategory::Modified => summary.modified += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// A versioned collection of change records between two snapshots.
///
/// The `version` field indicates the schema version for forwards
/// compatibility. `old_stats`/`new_stats` carry the index diagnostics
/// (unresolved features, key collisions) for the two input snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Schema version (currently "1").
    pub version: String,
    /// Added records first, then removed, then modified; each block sorted
    /// lexicographically by key.
    pub records: Vec<ChangeRecord>,
    pub summary: Summary,
    #[serde(default)]
    pub old_stats: IndexStats,
    #[serde(default)]
    pub new_stats: IndexStats,
}

impl DiffReport {
    pub const SCHEMA_VERSION: &'static str = "1";

    pub fn new(records: Vec<ChangeRecord>) -> DiffReport {
        let summary = Summary::from_records(&records);
        DiffReport {
            version: Self::SCHEMA_VERSION.to_string(),
            records,
            summary,
            old_stats: IndexStats::default(),
            new_stats: IndexStats::default(),
        }
    }

    pub fn with_stats(
        records: Vec<ChangeRecord>,
        old_stats: IndexStats,
        new_stats: IndexStats,
    ) -> DiffReport {
        let mut report = DiffReport::new(records);
        report.old_stats = old_stats;
        report.new_stats = new_stats;
        report
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn added(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.by_category(ChangeCategory::Added)
    }

    pub fn removed(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.by_category(ChangeCategory::Removed)
    }

    pub fn modified(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.by_category(ChangeCategory::Modified)
    }

    fn by_category(&self, category: ChangeCategory) -> impl Iterator<Item = &ChangeRecord> {
        self.records.iter().filter(move |r| r.category == category)
    }
}
