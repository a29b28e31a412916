//! GeoJSON Diff: a library for comparing point-feature GeoJSON snapshots.
//!
//! This crate provides functionality for:
//! - Parsing GeoJSON feature collections into snapshots
//! - Resolving a stable cross-snapshot identity key per feature
//! - Computing added/removed/modified change records between two snapshots
//! - Serializing diff reports to JSON
//!
//! # Quick Start
//!
//! ```
//! use geojson_diff::{DiffConfig, Snapshot};
//!
//! let old = Snapshot::from_json_str(r#"{
//!     "type": "FeatureCollection",
//!     "features": [{"type": "Feature", "properties": {"id": "node/1", "name": "A"}}]
//! }"#)?;
//! let new = Snapshot::from_json_str(r#"{
//!     "type": "FeatureCollection",
//!     "features": [{"type": "Feature", "properties": {"id": "node/1", "name": "B"}}]
//! }"#)?;
//!
//! let config = DiffConfig::with_fields(["name"]);
//! let report = old.diff(&new, &config);
//! assert_eq!(report.summary.modified, 1);
//! # Ok::<(), geojson_diff::SnapshotError>(())
//! ```

mod address;
mod config;
mod diff;
mod engine;
mod error_codes;
mod feature;
mod geometry;
mod identity;
mod index;
mod output;
mod snapshot;

pub use address::compose_address;
pub use config::{CollisionPolicy, ConfigError, DiffConfig, DiffConfigBuilder};
pub use diff::{
    ChangeCategory, ChangeRecord, DiffReport, FieldChange, Summary, COORDINATE_FIELD,
};
pub use engine::diff_indices;
pub use feature::{Feature, FeatureId, Geometry, PropertyValue, NO_NAME_PLACEHOLDER};
pub use geometry::extract_coordinate;
pub use identity::resolve_key;
pub use index::{FeatureIndex, IndexStats};
pub use output::json::{serialize_diff_report, serialize_diff_report_pretty};
pub use snapshot::{Snapshot, SnapshotError};
