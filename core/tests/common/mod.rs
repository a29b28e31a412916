//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use geojson_diff::{DiffConfig, DiffReport, Feature, Snapshot};

/// Parse one feature from raw JSON.
pub fn feature(json: &str) -> Feature {
    serde_json::from_str(json).expect("test feature should parse")
}

/// Build a snapshot from a JSON array of features.
pub fn snapshot(features_json: &str) -> Snapshot {
    let features: Vec<Feature> =
        serde_json::from_str(features_json).expect("test features should parse");
    Snapshot::from_features(features)
}

/// A point feature with an id property, a name, and extra string properties.
pub fn poi(id: &str, name: &str, lon: f64, lat: f64, extra: &[(&str, &str)]) -> Feature {
    let mut properties = serde_json::Map::new();
    properties.insert("id".to_string(), serde_json::json!(id));
    properties.insert("name".to_string(), serde_json::json!(name));
    for (field, value) in extra {
        properties.insert((*field).to_string(), serde_json::json!(value));
    }
    serde_json::from_value(serde_json::json!({
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [lon, lat]},
        "properties": properties,
    }))
    .expect("built feature should parse")
}

pub fn diff_with_fields(old: &Snapshot, new: &Snapshot, fields: &[&str]) -> DiffReport {
    old.diff(new, &DiffConfig::with_fields(fields.iter().copied()))
}
