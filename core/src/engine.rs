//! The diff calculator.
//!
//! Pure and single-threaded: a function of two indices and a config, with
//! no shared state across calls. All malformed inputs degrade to "no match"
//! or "no coordinate" long before they reach this point, so nothing here
//! can fail.

use crate::config::DiffConfig;
use crate::diff::{ChangeRecord, DiffReport, FieldChange, COORDINATE_FIELD};
use crate::feature::{Feature, PropertyValue};
use crate::geometry::extract_coordinate;
use crate::index::FeatureIndex;
use std::collections::BTreeSet;

/// Compare two snapshot indices and produce a change report.
///
/// Every key in either index lands in exactly one of three partitions:
/// added (new only), removed (old only), common (both). Partitions are
/// processed in that order and each is walked in lexicographic key order,
/// so identical inputs always produce an identical report. Common keys
/// contribute a record only when at least one tracked field differs.
pub fn diff_indices(old: &FeatureIndex, new: &FeatureIndex, config: &DiffConfig) -> DiffReport {
    let old_keys: BTreeSet<&String> = old.keys().collect();
    let new_keys: BTreeSet<&String> = new.keys().collect();

    let mut records = Vec::new();

    for key in new_keys.difference(&old_keys) {
        if let Some(feature) = new.get(key) {
            records.push(ChangeRecord::added((*key).clone(), feature));
        }
    }

    for key in old_keys.difference(&new_keys) {
        if let Some(feature) = old.get(key) {
            records.push(ChangeRecord::removed((*key).clone(), feature));
        }
    }

    for key in old_keys.intersection(&new_keys) {
        let (Some(old_feature), Some(new_feature)) = (old.get(key), new.get(key)) else {
            continue;
        };
        let changes = compare_tracked_fields(old_feature, new_feature, config);
        if !changes.is_empty() {
            records.push(ChangeRecord::modified((*key).clone(), new_feature, changes));
        }
    }

    DiffReport::with_stats(records, old.stats(), new.stats())
}

/// Field-level comparison for one matched feature pair, restricted to the
/// configured tracked fields and reported in their configured order.
fn compare_tracked_fields(
    old: &Feature,
    new: &Feature,
    config: &DiffConfig,
) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    for field in &config.tracked_fields {
        let old_value = old.property(field);
        let new_value = new.property(field);
        // Missing is distinct from present-but-empty; two absents are equal.
        if old_value != new_value {
            changes.push(FieldChange {
                field: field.clone(),
                old: old_value.cloned(),
                new: new_value.cloned(),
            });
        }
    }

    if config.track_coordinates {
        let before = extract_coordinate(old);
        let after = extract_coordinate(new);
        if before != after {
            changes.push(FieldChange {
                field: COORDINATE_FIELD.to_string(),
                old: before.map(coordinate_value),
                new: after.map(coordinate_value),
            });
        }
    }

    changes
}

fn coordinate_value((lon, lat): (f64, f64)) -> PropertyValue {
    PropertyValue::Other(serde_json::json!([lon, lat]))
}
