mod common;

use common::{poi, snapshot};
use geojson_diff::{serialize_diff_report, ChangeCategory, DiffConfig, Snapshot};
use std::collections::BTreeSet;

fn scrambled_pair() -> (Snapshot, Snapshot) {
    let old = Snapshot::from_features(vec![
        poi("node/30", "c", 7.3, 47.3, &[("status", "a")]),
        poi("node/10", "a", 7.1, 47.1, &[]),
        poi("node/20", "b", 7.2, 47.2, &[]),
    ]);
    let new = Snapshot::from_features(vec![
        poi("node/40", "d", 7.4, 47.4, &[]),
        poi("node/30", "c", 7.3, 47.3, &[("status", "b")]),
        poi("node/10", "a", 7.1, 47.1, &[]),
    ]);
    (old, new)
}

#[test]
fn repeated_runs_serialize_byte_identically() {
    let (old, new) = scrambled_pair();
    let config = DiffConfig::with_fields(["status", "name"]);

    let first = serialize_diff_report(&old.diff(&new, &config)).expect("serialize");
    for _ in 0..5 {
        let again = serialize_diff_report(&old.diff(&new, &config)).expect("serialize");
        assert_eq!(first, again);
    }
}

#[test]
fn input_order_does_not_affect_the_report() {
    let (old, new) = scrambled_pair();
    let mut old_reversed = old.clone();
    old_reversed.features.reverse();
    let mut new_reversed = new.clone();
    new_reversed.features.reverse();

    let config = DiffConfig::with_fields(["status"]);
    assert_eq!(
        old.diff(&new, &config),
        old_reversed.diff(&new_reversed, &config)
    );
}

#[test]
fn every_key_lands_in_exactly_one_partition() {
    let (old, new) = scrambled_pair();
    let config = DiffConfig::builder()
        .tracked_field("status")
        .build()
        .expect("valid config");

    let old_index = old.index(&config);
    let new_index = new.index(&config);
    let report = old.diff(&new, &config);

    let all_keys: BTreeSet<&String> = old_index.keys().chain(new_index.keys()).collect();

    for key in all_keys {
        let in_old = old_index.contains_key(key);
        let in_new = new_index.contains_key(key);
        let categories: Vec<ChangeCategory> = report
            .records
            .iter()
            .filter(|r| &r.key == key)
            .map(|r| r.category)
            .collect();

        match (in_old, in_new) {
            (false, true) => assert_eq!(categories, [ChangeCategory::Added]),
            (true, false) => assert_eq!(categories, [ChangeCategory::Removed]),
            (true, true) => assert!(
                categories.is_empty() || categories == [ChangeCategory::Modified],
                "common key {key} may only appear as modified"
            ),
            (false, false) => unreachable!(),
        }
    }
}

#[test]
fn summary_matches_emitted_records_not_key_sets() {
    let old = snapshot(
        r#"[
            {"properties": {"id": "node/1", "name": "same"}},
            {"properties": {"id": "node/2", "name": "old"}}
        ]"#,
    );
    let new = snapshot(
        r#"[
            {"properties": {"id": "node/1", "name": "same"}},
            {"properties": {"id": "node/2", "name": "new"}}
        ]"#,
    );

    let report = old.diff(&new, &DiffConfig::with_fields(["name"]));

    // Two common keys, but only one produced a record.
    assert_eq!(report.summary.modified, 1);
    assert_eq!(report.summary.total(), report.records.len());
}

#[test]
fn json_report_shape_is_stable() {
    let old = Snapshot::default();
    let new = snapshot(r#"[{"properties": {"id": "node/7", "name": "N"}}]"#);

    let report = old.diff(&new, &DiffConfig::with_fields(["name"]));
    let json = serialize_diff_report(&report).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("reparse");

    assert_eq!(value["version"], "1");
    assert_eq!(value["summary"]["added"], 1);
    assert_eq!(value["records"][0]["category"], "added");
    assert_eq!(value["records"][0]["key"], "node/7");
    assert!(
        value["records"][0].get("changes").is_none(),
        "empty change list is omitted"
    );
}
