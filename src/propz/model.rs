//! Core data types.
//!
//! The dataset is externally authored JSON, so [`Property`] is deliberately
//! lenient: every field is optional, numeric fields accept either numbers or
//! numeric strings, and keys the crate does not interpret are preserved
//! verbatim in `extra` so a stored snapshot round-trips with its content
//! intact.
//!
//! Records in the wild also carry alternate-cased key variants (`Type`,
//! `Location`, `floorplan`, `latitude`/`longitude`). Those land in `extra`
//! like any unknown key; the accessor methods try the canonical field first
//! and the variants second, so the "which name wins" logic lives in exactly
//! one place per field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single property listing as supplied by the dataset.
///
/// Records are read-only to the core: the filter engine borrows them and the
/// favourites store clones them as snapshots. An empty `id` marks a record
/// that cannot be favourited or looked up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Category such as "House" or "Flat". Free text, compared
    /// case-insensitively. Prefer [`Property::type_name`].
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Asking price. Number or numeric string; use [`Property::price_value`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,

    /// Bedroom count. Number or numeric string; use
    /// [`Property::bedroom_count`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<Value>,

    /// Free-text location, usually ending in a postcode token
    /// (e.g. "London NW1"). Prefer [`Property::location_text`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Explicit postcode area, when the dataset provides one.
    #[serde(rename = "postcodeArea", default, skip_serializing_if = "Option::is_none")]
    pub postcode_area: Option<String>,

    /// Explicit date string, e.g. "2025-01-12".
    #[serde(rename = "dateAdded", default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,

    /// Structured added date, e.g. `{"month": "October", "day": 12,
    /// "year": 2022}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<AddedDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "shortDescription", default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenure: Option<String>,

    /// Primary image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    /// Gallery image paths.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    #[serde(rename = "floorPlan", default, skip_serializing_if = "Option::is_none")]
    pub floor_plan: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Keys the crate does not interpret, including alternate-cased
    /// variants of the fields above. Round-tripped untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Property {
    /// The property type: `type`, falling back to an alternate-cased
    /// `Type` key.
    pub fn type_name(&self) -> Option<&str> {
        self.kind
            .as_deref()
            .or_else(|| self.extra.get("Type").and_then(Value::as_str))
    }

    /// The location text: `location`, falling back to `Location`.
    pub fn location_text(&self) -> Option<&str> {
        self.location
            .as_deref()
            .or_else(|| self.extra.get("Location").and_then(Value::as_str))
    }

    pub fn price_value(&self) -> Option<f64> {
        self.price.as_ref().and_then(coerce_number)
    }

    pub fn bedroom_count(&self) -> Option<f64> {
        self.bedrooms.as_ref().and_then(coerce_number)
    }

    pub fn bathroom_count(&self) -> Option<f64> {
        self.bathrooms.as_ref().and_then(coerce_number)
    }

    /// `lat`, falling back to `latitude`.
    pub fn latitude(&self) -> Option<f64> {
        self.lat
            .as_ref()
            .or_else(|| self.extra.get("latitude"))
            .and_then(coerce_number)
    }

    /// `lng`, falling back to `longitude`.
    pub fn longitude(&self) -> Option<f64> {
        self.lng
            .as_ref()
            .or_else(|| self.extra.get("longitude"))
            .and_then(coerce_number)
    }

    /// `floorPlan`, falling back to an all-lowercase `floorplan` key.
    pub fn floor_plan_path(&self) -> Option<&str> {
        self.floor_plan
            .as_deref()
            .or_else(|| self.extra.get("floorplan").and_then(Value::as_str))
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Structured "added" date: a month name plus coercible day and year.
/// Month defaults to January and day to the 1st; a record without a year has
/// no usable structured date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddedDate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
}

/// Coerce a JSON value to a number: numbers pass through, numeric strings
/// parse, everything else (and non-numeric strings) yields `None`.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_numbers_and_numeric_strings() {
        assert_eq!(coerce_number(&json!(250000)), Some(250000.0));
        assert_eq!(coerce_number(&json!(1.5)), Some(1.5));
        assert_eq!(coerce_number(&json!("250000")), Some(250000.0));
        assert_eq!(coerce_number(&json!(" 3 ")), Some(3.0));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(coerce_number(&json!("expensive")), None);
        assert_eq!(coerce_number(&json!(null)), None);
        assert_eq!(coerce_number(&json!([1, 2])), None);
        assert_eq!(coerce_number(&json!({"amount": 1})), None);
    }

    #[test]
    fn accessors_fall_back_to_alternate_cased_keys() {
        let p: Property = serde_json::from_value(json!({
            "id": "p1",
            "Type": "House",
            "Location": "London NW1"
        }))
        .unwrap();

        assert_eq!(p.kind, None);
        assert_eq!(p.type_name(), Some("House"));
        assert_eq!(p.location_text(), Some("London NW1"));
    }

    #[test]
    fn canonical_keys_win_over_variants() {
        let p: Property = serde_json::from_value(json!({
            "id": "p1",
            "type": "Flat",
            "Type": "House"
        }))
        .unwrap();

        assert_eq!(p.type_name(), Some("Flat"));
    }

    #[test]
    fn coordinates_accept_long_key_names() {
        let p: Property = serde_json::from_value(json!({
            "id": "p1",
            "latitude": "51.5",
            "longitude": -0.15
        }))
        .unwrap();

        assert_eq!(p.latitude(), Some(51.5));
        assert_eq!(p.longitude(), Some(-0.15));
    }

    #[test]
    fn missing_id_defaults_to_empty() {
        let p: Property = serde_json::from_value(json!({"price": 100})).unwrap();
        assert!(!p.has_id());
    }

    #[test]
    fn unknown_fields_round_trip() {
        let raw = json!({
            "id": "p1",
            "type": "Flat",
            "agentRef": "XYZ-1",
            "epcRating": "B"
        });

        let p: Property = serde_json::from_value(raw).unwrap();
        assert_eq!(p.extra.get("agentRef"), Some(&json!("XYZ-1")));

        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back.get("agentRef"), Some(&json!("XYZ-1")));
        assert_eq!(back.get("epcRating"), Some(&json!("B")));
        assert_eq!(back.get("type"), Some(&json!("Flat")));
    }

    #[test]
    fn serde_round_trip_preserves_content() {
        let p: Property = serde_json::from_value(json!({
            "id": "p2",
            "type": "Flat",
            "price": "250000",
            "bedrooms": 1,
            "location": "London SE1",
            "added": {"month": "December", "day": 1, "year": 2025}
        }))
        .unwrap();

        let text = serde_json::to_string(&p).unwrap();
        let again: Property = serde_json::from_str(&text).unwrap();
        assert_eq!(p, again);
    }
}
