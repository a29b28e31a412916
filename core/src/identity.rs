//! Identity key resolution.
//!
//! Two exports of the same dataset rarely agree on where a feature's
//! identifier lives: overpass-style exports carry `@id`, others use
//! `osm_id` variants, some only set the root-level GeoJSON id, and
//! hand-maintained entries may have no identifier at all. This module
//! derives one stable key per feature so the diff engine can match the
//! same real-world entity across both snapshots.

use crate::feature::Feature;
use crate::geometry::extract_coordinate;

/// Property fields consulted for an identifier, in priority order.
const ID_PROPERTY_FIELDS: [&str; 6] = ["@id", "osm_id", "osm:id", "id", "osmid", "osmId"];

/// Resolve a feature's stable identity key.
///
/// The resolution chain is a strict priority order; the first source that
/// yields a non-empty value wins:
///
/// 1. the property fields `@id`, `osm_id`, `osm:id`, `id`, `osmid`, `osmId`;
/// 2. the feature's root-level GeoJSON id;
/// 3. a composite `fallback:<name>:<lon>:<lat>` key, requiring a non-empty
///    `name` property and an extractable point coordinate.
///
/// Returns `None` when every source fails; such a feature cannot be matched
/// and is excluded from indexing. Malformed values never abort the chain,
/// they simply fail their check.
pub fn resolve_key(feature: &Feature) -> Option<String> {
    for field in ID_PROPERTY_FIELDS {
        if let Some(raw) = feature.property(field).and_then(|v| v.as_id_string()) {
            return Some(normalize_id(&raw));
        }
    }

    if let Some(raw) = feature.id.as_ref().and_then(|id| id.as_id_string()) {
        return Some(normalize_id(&raw));
    }

    let name = feature.name()?;
    let (lon, lat) = extract_coordinate(feature)?;
    Some(format!("fallback:{name}:{lon}:{lat}"))
}

/// Normalize a raw identifier value into its canonical key form.
///
/// `node/123`, `way/123`, and `relation/123` are kept as-is; a bare
/// non-negative integer string denotes a point node and gets the `node/`
/// prefix; anything else passes through unchanged (opaque non-OSM ids).
fn normalize_id(raw: &str) -> String {
    if is_osm_element_ref(raw) {
        return raw.to_string();
    }
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        return format!("node/{raw}");
    }
    raw.to_string()
}

fn is_osm_element_ref(raw: &str) -> bool {
    let Some((kind, id)) = raw.split_once('/') else {
        return false;
    };
    matches!(kind, "node" | "way" | "relation")
        && !id.is_empty()
        && id.bytes().all(|b| b.is_ascii_digit())
}
