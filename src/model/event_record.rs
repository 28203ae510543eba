//! Server-defined event records and result pages.
//!
//! These are read-only display types decoded from the API response body.
//! No client-side validation or mutation happens here.

use serde::Deserialize;

/// One row of the results table, exactly as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventRecord {
    /// Event name; also used to pick the row accent in the table.
    pub event: String,
    /// Human-readable location.
    pub location: String,
    /// Human-readable zone within the location.
    pub zone: String,
    /// Event type label.
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form reference string.
    pub reference: String,
    /// Timestamp as formatted by the server.
    pub timestamp: String,
}

/// One server-returned batch of records plus pagination metadata.
///
/// Superseded wholesale by the next successful fetch; pages are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPage {
    /// Page number echoed by the server (1-based).
    pub page: u32,
    /// Page size echoed by the server.
    pub page_size: u32,
    /// Total number of records matching the filters.
    pub total_results: u64,
    /// Records on this page, in server order.
    pub results: Vec<EventRecord>,
}

impl ResultsPage {
    /// Build an empty page with the given pagination metadata.
    #[cfg(test)]
    pub fn empty(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            total_results: 0,
            results: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_page() {
        let body = r#"{
            "page": 2,
            "pageSize": 20,
            "totalResults": 45,
            "results": [
                {"event": "ALARM", "location": "North", "zone": "Z1", "type": "intrusion",
                 "reference": "R-17", "timestamp": "2026-10-18 08:15"}
            ]
        }"#;

        let page: ResultsPage = serde_json::from_str(body).expect("valid page");

        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.total_results, 45);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].kind, "intrusion");
        assert_eq!(page.results[0].reference, "R-17");
    }

    #[test]
    fn rejects_record_missing_field() {
        let body = r#"{"page": 1, "pageSize": 20, "totalResults": 1,
            "results": [{"event": "ALARM"}]}"#;

        assert!(serde_json::from_str::<ResultsPage>(body).is_err());
    }

    #[test]
    fn empty_page_has_no_results() {
        let page = ResultsPage::empty(1, 20);
        assert_eq!(page.total_results, 0);
        assert!(page.results.is_empty());
    }
}
