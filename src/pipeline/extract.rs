//! Availability extraction.
//!
//! Turns a raw calendar payload into the ordered list of dates where at
//! least one bookable product has remaining capacity.

use crate::models::AvailabilityResponse;

/// Extract available dates from a calendar payload.
///
/// A day qualifies when at least one of its products has capacity > 0, and
/// contributes exactly one entry regardless of how many products qualify.
/// Input day ordering is preserved; the payload is assumed chronological
/// and is never re-sorted. A payload without the expected structure yields
/// an empty list.
pub fn extract_available_dates(payload: &AvailabilityResponse) -> Vec<String> {
    let Some(data) = &payload.data else {
        return Vec::new();
    };

    data.availability_list
        .iter()
        .filter(|day| !day.date.is_empty())
        .filter(|day| day.products.iter().any(|p| p.available > 0.0))
        .map(|day| day.date.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> AvailabilityResponse {
        AvailabilityResponse::from_value(value)
    }

    #[test]
    fn test_scenario_one_available_one_sold_out() {
        let payload = response(json!({
            "data": {
                "availabilityList": [
                    { "date": "2022-01-01", "products": [{ "available": 1 }] },
                    { "date": "2022-01-02", "products": [{ "available": 0 }] }
                ]
            }
        }));

        assert_eq!(extract_available_dates(&payload), vec!["2022-01-01"]);
    }

    #[test]
    fn test_no_data_key_yields_empty() {
        let payload = response(json!({ "unexpected": true }));
        assert!(extract_available_dates(&payload).is_empty());
    }

    #[test]
    fn test_day_appears_once_with_multiple_products() {
        let payload = response(json!({
            "data": {
                "availabilityList": [
                    {
                        "date": "2022-01-01",
                        "products": [{ "available": 2 }, { "available": 5 }]
                    }
                ]
            }
        }));

        assert_eq!(extract_available_dates(&payload), vec!["2022-01-01"]);
    }

    #[test]
    fn test_missing_capacity_counts_as_zero() {
        let payload = response(json!({
            "data": {
                "availabilityList": [
                    { "date": "2022-01-01", "products": [{}] }
                ]
            }
        }));

        assert!(extract_available_dates(&payload).is_empty());
    }

    #[test]
    fn test_day_without_products_is_skipped() {
        let payload = response(json!({
            "data": {
                "availabilityList": [
                    { "date": "2022-01-01" },
                    { "date": "2022-01-02", "products": [{ "available": 1 }] }
                ]
            }
        }));

        assert_eq!(extract_available_dates(&payload), vec!["2022-01-02"]);
    }

    #[test]
    fn test_input_ordering_preserved() {
        let payload = response(json!({
            "data": {
                "availabilityList": [
                    { "date": "2022-03-01", "products": [{ "available": 1 }] },
                    { "date": "2022-01-01", "products": [{ "available": 1 }] },
                    { "date": "2022-02-01", "products": [{ "available": 1 }] }
                ]
            }
        }));

        assert_eq!(
            extract_available_dates(&payload),
            vec!["2022-03-01", "2022-01-01", "2022-02-01"]
        );
    }
}
