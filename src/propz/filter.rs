//! The filter engine.
//!
//! [`filter_properties`] is a pure function from (dataset, criteria) to the
//! matching subset. It preserves the input order, performs no I/O, and never
//! panics on malformed records: a record that fails numeric or date coercion
//! simply fails the predicate that needed the value.
//!
//! A property is retained iff it passes every *active* sub-predicate (logical
//! AND). A criteria field that is absent, the `"all"` sentinel, blank, or
//! malformed imposes no constraint.

use chrono::{DateTime, NaiveDate};

use crate::criteria::{Bounds, Criteria};
use crate::model::{coerce_number, Property};

/// Date formats tried in order when parsing a property's date field.
/// The last one covers the composed "MonthName Day, Year" form built from
/// structured `added` fields.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y"];

/// Apply `criteria` to `properties`, keeping relative order.
pub fn filter_properties<'a>(properties: &'a [Property], criteria: &Criteria) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| matches(p, criteria))
        .collect()
}

fn matches(property: &Property, criteria: &Criteria) -> bool {
    kind_matches(property, criteria)
        && range_matches(property.price_value(), criteria.price.as_ref())
        && range_matches(property.bedroom_count(), criteria.bedrooms.as_ref())
        && date_matches(property, criteria)
        && postcode_matches(property, criteria)
}

fn kind_matches(property: &Property, criteria: &Criteria) -> bool {
    let wanted = match criteria.kind.as_deref() {
        Some(k) if k != "all" => k,
        _ => return true,
    };
    match property.type_name() {
        Some(kind) => kind.to_lowercase() == wanted.to_lowercase(),
        None => false,
    }
}

fn range_matches(value: Option<f64>, bounds: Option<&Bounds>) -> bool {
    let bounds = match bounds {
        // Malformed bounds impose no constraint.
        Some(b) if b.is_usable() => b,
        _ => return true,
    };
    match value {
        Some(v) => bounds.contains(v),
        None => false,
    }
}

fn date_matches(property: &Property, criteria: &Criteria) -> bool {
    let threshold = match criteria.added_since {
        Some(t) => t,
        None => return true,
    };
    match property_added_date(property) {
        // On or after: the boundary date itself is retained.
        Some(added) => added >= threshold,
        None => false,
    }
}

fn postcode_matches(property: &Property, criteria: &Criteria) -> bool {
    let token = match criteria.postcode.as_deref() {
        Some(raw) => raw.trim().to_uppercase(),
        None => return true,
    };
    if token.is_empty() {
        return true;
    }

    // A dedicated postcode-area field decides by exact match; the substring
    // path is never consulted when it is present.
    if let Some(area) = property.postcode_area.as_deref() {
        return area.to_uppercase() == token;
    }

    match property.location_text() {
        Some(location) => location.to_uppercase().contains(&token),
        None => false,
    }
}

/// Derive the "added" date of a property.
///
/// Strategies, tried in order, stopping at the first applicable field:
/// 1. the explicit `dateAdded` string, parsed directly; an unparsable value
///    yields `None` without falling through;
/// 2. the structured `added` object, when it has a coercible year: composed
///    into `"MonthName Day, Year"` and parsed;
/// 3. neither field present yields `None`.
pub fn property_added_date(property: &Property) -> Option<NaiveDate> {
    if let Some(raw) = property.date_added.as_deref() {
        return parse_date(raw);
    }

    let added = property.added.as_ref()?;
    let year = added.year.as_ref().and_then(coerce_number)?;
    let month = added.month.as_deref().unwrap_or("January");
    let day = added
        .day
        .as_ref()
        .and_then(coerce_number)
        .unwrap_or(1.0);

    let composed = format!("{} {}, {}", month, day as i64, year as i64);
    parse_date(&composed)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    // Full timestamps, e.g. "2025-01-12T09:30:00Z".
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
