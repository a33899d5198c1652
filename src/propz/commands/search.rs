use crate::commands::{CmdMessage, CmdResult};
use crate::criteria::Criteria;
use crate::error::Result;
use crate::filter::filter_properties;
use crate::model::Property;

pub fn run(properties: &[Property], criteria: &Criteria) -> Result<CmdResult> {
    let listed: Vec<Property> = filter_properties(properties, criteria)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No properties match the current filters."));
    }
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Bounds;
    use chrono::NaiveDate;
    use serde_json::json;

    fn sample() -> Vec<Property> {
        serde_json::from_value(json!([
            {
                "id": "p1",
                "type": "House",
                "bedrooms": 3,
                "price": 500000,
                "location": "London NW1",
                "added": {"month": "October", "day": 12, "year": 2022}
            },
            {
                "id": "p2",
                "type": "Flat",
                "bedrooms": 1,
                "price": 250000,
                "location": "London SE1",
                "added": {"month": "December", "day": 1, "year": 2025}
            }
        ]))
        .unwrap()
    }

    #[test]
    fn filters_by_type_price_and_bedrooms() {
        let criteria = Criteria {
            kind: Some("House".to_string()),
            price: Some(Bounds::new(400000.0, 600000.0)),
            bedrooms: Some(Bounds::new(2.0, 4.0)),
            ..Criteria::default()
        };

        let result = run(&sample(), &criteria).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].id, "p1");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filters_by_date_added() {
        let criteria = Criteria {
            added_since: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..Criteria::default()
        };

        let result = run(&sample(), &criteria).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].id, "p2");
    }

    #[test]
    fn filters_by_postcode_substring() {
        let criteria = Criteria {
            postcode: Some("NW1".to_string()),
            ..Criteria::default()
        };

        let result = run(&sample(), &criteria).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].id, "p1");
    }

    #[test]
    fn empty_criteria_lists_everything_in_order() {
        let result = run(&sample(), &Criteria::default()).unwrap();
        let ids: Vec<&str> = result.listed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn no_matches_reports_an_info_message() {
        let criteria = Criteria {
            kind: Some("Castle".to_string()),
            ..Criteria::default()
        };

        let result = run(&sample(), &criteria).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
