//! Feature data structures.
//!
//! This module defines the in-memory representation of one GeoJSON
//! point-of-interest record:
//! - [`Feature`]: root-level id, geometry, and a property map
//! - [`Geometry`]: geometry kind plus the raw coordinate value
//! - [`PropertyValue`]: one scalar property value
//!
//! Deserialization is deliberately lenient: a feature with a malformed
//! geometry or id still parses, the broken part just degrades to absent.
//! Whether that feature can participate in a diff is decided later by the
//! identity resolver, not here.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder display name for features whose `name` property is absent or empty.
pub const NO_NAME_PLACEHOLDER: &str = "(no name)";

/// A single property value attached to a feature.
///
/// GeoJSON properties are scalars in this dataset; `Other` keeps anything
/// non-scalar (arrays, nested objects) comparable and round-trippable
/// without flattening it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Value usable as an identifier: non-empty text, or an integral number.
    ///
    /// Anything else (booleans, floats with a fractional part, nested JSON)
    /// fails the check so the identity chain can move on to its next source.
    pub(crate) fn as_id_string(&self) -> Option<String> {
        match self {
            PropertyValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            PropertyValue::Number(n) if n.fract() == 0.0 && n.abs() < 9e15 => {
                Some(format!("{}", *n as i64))
            }
            _ => None,
        }
    }

    /// Human-readable rendering used by text reports.
    pub fn render(&self) -> String {
        match self {
            PropertyValue::Null => "null".to_string(),
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Number(n) => format_number(*n),
            PropertyValue::Text(s) => s.clone(),
            PropertyValue::Other(v) => v.to_string(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

/// Root-level identifier of a GeoJSON feature (distinct from its property map).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Text(String),
    Number(f64),
}

impl FeatureId {
    pub(crate) fn as_id_string(&self) -> Option<String> {
        match self {
            FeatureId::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            FeatureId::Number(n) if n.fract() == 0.0 && n.abs() < 9e15 => {
                Some(format!("{}", *n as i64))
            }
            _ => None,
        }
    }
}

/// A feature's geometry: kind string plus the raw coordinate value.
///
/// Coordinates stay as raw JSON so that malformed arrays are representable;
/// [`crate::extract_coordinate`] decides whether they yield a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

/// One point-of-interest record with geometry and properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<FeatureId>,
    #[serde(default, deserialize_with = "lenient_geometry", skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Feature {
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub fn property_str(&self, name: &str) -> Option<&str> {
        self.property(name).and_then(PropertyValue::as_str)
    }

    /// The feature's `name` property, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.property_str("name").filter(|s| !s.is_empty())
    }

    /// Display name for reports: the `name` property or a fixed placeholder.
    pub fn display_name(&self) -> String {
        self.name().unwrap_or(NO_NAME_PLACEHOLDER).to_string()
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<FeatureId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(FeatureId::Text(s)),
        serde_json::Value::Number(n) => n.as_f64().map(FeatureId::Number),
        _ => None,
    })
}

fn lenient_geometry<'de, D>(deserializer: D) -> Result<Option<Geometry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Object(mut obj) = value else {
        return Ok(None);
    };
    let Some(serde_json::Value::String(kind)) = obj.remove("type") else {
        return Ok(None);
    };
    let coordinates = obj
        .remove("coordinates")
        .unwrap_or(serde_json::Value::Null);
    Ok(Some(Geometry { kind, coordinates }))
}

fn lenient_properties<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, PropertyValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<BTreeMap<String, PropertyValue>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_parses_from_geojson() {
        let feature: Feature = serde_json::from_str(
            r#"{
                "type": "Feature",
                "id": "node/42",
                "geometry": {"type": "Point", "coordinates": [7.44, 46.95]},
                "properties": {"name": "Bahnhof", "level": 1}
            }"#,
        )
        .expect("feature should parse");

        assert_eq!(feature.id, Some(FeatureId::Text("node/42".to_string())));
        assert_eq!(feature.geometry.as_ref().map(|g| g.kind.as_str()), Some("Point"));
        assert_eq!(feature.property_str("name"), Some("Bahnhof"));
        assert_eq!(feature.property("level"), Some(&PropertyValue::Number(1.0)));
    }

    #[test]
    fn malformed_geometry_degrades_to_none() {
        let feature: Feature =
            serde_json::from_str(r#"{"geometry": 5, "properties": {"name": "x"}}"#)
                .expect("feature should still parse");
        assert!(feature.geometry.is_none());

        let feature: Feature =
            serde_json::from_str(r#"{"geometry": {"coordinates": [1, 2]}}"#).expect("parse");
        assert!(feature.geometry.is_none(), "geometry without a kind is dropped");
    }

    #[test]
    fn null_properties_become_empty_map() {
        let feature: Feature = serde_json::from_str(r#"{"properties": null}"#).expect("parse");
        assert!(feature.properties.is_empty());
    }

    #[test]
    fn non_scalar_id_degrades_to_none() {
        let feature: Feature = serde_json::from_str(r#"{"id": ["not", "an", "id"]}"#).expect("parse");
        assert!(feature.id.is_none());
    }

    #[test]
    fn display_name_falls_back_to_placeholder() {
        let named: Feature =
            serde_json::from_str(r#"{"properties": {"name": "Kiosk"}}"#).expect("parse");
        assert_eq!(named.display_name(), "Kiosk");

        let empty: Feature = serde_json::from_str(r#"{"properties": {"name": ""}}"#).expect("parse");
        assert_eq!(empty.display_name(), NO_NAME_PLACEHOLDER);

        let missing: Feature = serde_json::from_str(r#"{"properties": {}}"#).expect("parse");
        assert_eq!(missing.display_name(), NO_NAME_PLACEHOLDER);
    }

    #[test]
    fn absent_and_empty_string_properties_are_distinct() {
        let feature: Feature =
            serde_json::from_str(r#"{"properties": {"operator": ""}}"#).expect("parse");
        assert_eq!(
            feature.property("operator"),
            Some(&PropertyValue::Text(String::new()))
        );
        assert_eq!(feature.property("missing"), None);
    }

    #[test]
    fn property_value_renders_for_text_output() {
        assert_eq!(PropertyValue::Text("yes".into()).render(), "yes");
        assert_eq!(PropertyValue::Number(2.0).render(), "2");
        assert_eq!(PropertyValue::Number(2.5).render(), "2.5");
        assert_eq!(PropertyValue::Bool(true).render(), "true");
        assert_eq!(PropertyValue::Null.render(), "null");
    }
}
