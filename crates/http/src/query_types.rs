//! Request/query types (Deserialize)

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// 1-based page; the current page when omitted.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_query_defaults() {
        let q: PageQuery = serde_json::from_value(json!({})).expect("valid PageQuery");
        assert_eq!(q.page, None);
        assert_eq!(q.page_size, None);
    }

    #[test]
    fn test_page_query_rejects_negative_page() {
        assert!(serde_json::from_value::<PageQuery>(json!({"page": -1})).is_err());
    }

    #[test]
    fn test_range_query_parses_dates() {
        let q: RangeQuery = serde_json::from_value(json!({"from": "2025-03-01", "to": "2025-03-31"}))
            .expect("valid RangeQuery");
        assert_eq!(q.from, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(serde_json::from_value::<RangeQuery>(json!({"from": "March", "to": "2025-03-31"}))
            .is_err());
    }
}
