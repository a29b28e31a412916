//! Postal address composition from OSM address tags.

use crate::feature::{Feature, PropertyValue};

const STREET: &str = "addr:street";
const HOUSENUMBER: &str = "addr:housenumber";
const POSTCODE: &str = "addr:postcode";
const CITY: &str = "addr:city";

/// Compose a display address from the feature's `addr:*` tags.
///
/// Produces up to two comma-joined segments: street + house number, and
/// postal code + city. Each segment is included when at least one of its
/// parts is present. Returns `None` when neither segment is producible.
pub fn compose_address(feature: &Feature) -> Option<String> {
    let street = segment(feature, STREET, HOUSENUMBER);
    let city = segment(feature, POSTCODE, CITY);

    let segments: Vec<String> = [street, city].into_iter().flatten().collect();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join(", "))
    }
}

fn segment(feature: &Feature, first: &str, second: &str) -> Option<String> {
    let parts: Vec<String> = [first, second]
        .into_iter()
        .filter_map(|field| address_part(feature.property(field)?))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

// House numbers and postcodes show up as JSON numbers in some exports.
fn address_part(value: &PropertyValue) -> Option<String> {
    match value {
        PropertyValue::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        PropertyValue::Number(_) => Some(value.render()),
        _ => None,
    }
}
