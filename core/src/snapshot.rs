//! Snapshot parsing and the package-level diff entry point.

use crate::config::DiffConfig;
use crate::diff::DiffReport;
use crate::engine::diff_indices;
use crate::error_codes;
use crate::feature::Feature;
use crate::index::FeatureIndex;
use serde::Deserialize;
use thiserror::Error;

/// Errors produced while parsing a snapshot.
///
/// These belong to the snapshot-source boundary; once a [`Snapshot`] exists,
/// diffing it cannot fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("[GJDIFF_SNAP_001] invalid JSON: {source}. Suggestion: check that the input is a GeoJSON export.")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },

    #[error("[GJDIFF_SNAP_002] root object is not a FeatureCollection (found \"{found}\"). Suggestion: export the dataset as a FeatureCollection.")]
    NotAFeatureCollection { found: String },
}

impl SnapshotError {
    pub fn code(&self) -> &'static str {
        match self {
            SnapshotError::InvalidJson { .. } => error_codes::SNAPSHOT_INVALID_JSON,
            SnapshotError::NotAFeatureCollection { .. } => {
                error_codes::SNAPSHOT_NOT_A_COLLECTION
            }
        }
    }
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    features: Vec<Feature>,
}

/// One full feature collection captured at one point in time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub features: Vec<Feature>,
}

impl Snapshot {
    pub fn from_slice(bytes: &[u8]) -> Result<Snapshot, SnapshotError> {
        let raw: RawCollection = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    pub fn from_json_str(text: &str) -> Result<Snapshot, SnapshotError> {
        let raw: RawCollection = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Snapshot, SnapshotError> {
        let raw: RawCollection = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCollection) -> Result<Snapshot, SnapshotError> {
        if raw.kind != "FeatureCollection" {
            return Err(SnapshotError::NotAFeatureCollection { found: raw.kind });
        }
        Ok(Snapshot {
            features: raw.features,
        })
    }

    pub fn from_features(features: Vec<Feature>) -> Snapshot {
        Snapshot { features }
    }

    /// Build this snapshot's identity index under the configured collision
    /// policy.
    pub fn index(&self, config: &DiffConfig) -> FeatureIndex {
        FeatureIndex::build(&self.features, config.collision_policy)
    }

    /// Diff this snapshot (old) against `new`.
    pub fn diff(&self, new: &Snapshot, config: &DiffConfig) -> DiffReport {
        diff_indices(&self.index(config), &new.index(config), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_feature_collection() {
        let snapshot = Snapshot::from_json_str(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature", "properties": {"id": "node/1", "name": "A"}}
                ]
            }"#,
        )
        .expect("collection should parse");
        assert_eq!(snapshot.features.len(), 1);
    }

    #[test]
    fn missing_features_array_means_empty_snapshot() {
        let snapshot =
            Snapshot::from_json_str(r#"{"type": "FeatureCollection"}"#).expect("parse");
        assert!(snapshot.features.is_empty());
    }

    #[test]
    fn rejects_non_collection_roots() {
        let err = Snapshot::from_json_str(r#"{"type": "Feature", "properties": {}}"#)
            .expect_err("a bare feature is not a snapshot");
        assert!(matches!(
            err,
            SnapshotError::NotAFeatureCollection { ref found } if found == "Feature"
        ));
        assert_eq!(err.code(), "GJDIFF_SNAP_002");
    }

    #[test]
    fn rejects_invalid_json() {
        let err = Snapshot::from_slice(b"{not json").expect_err("garbage should fail");
        assert_eq!(err.code(), "GJDIFF_SNAP_001");
    }
}
