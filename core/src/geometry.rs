//! Coordinate extraction from point features.

use crate::feature::Feature;

/// Extract the `(lon, lat)` pair from a point feature.
///
/// Returns `Some` only when the geometry kind is exactly `"Point"` and the
/// coordinate array holds at least two numeric entries. A third elevation
/// entry, if present, is ignored. Any other geometry kind, a malformed or
/// missing coordinate array, or a missing geometry yields `None`; this
/// function never panics.
pub fn extract_coordinate(feature: &Feature) -> Option<(f64, f64)> {
    let geometry = feature.geometry.as_ref()?;
    if geometry.kind != "Point" {
        return None;
    }
    let coords = geometry.coordinates.as_array()?;
    let lon = coords.first()?.as_f64()?;
    let lat = coords.get(1)?.as_f64()?;
    Some((lon, lat))
}
