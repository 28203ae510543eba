//! Filter snapshots and partial updates.
//!
//! `FilterState` is the full set of query parameters controlling what is
//! fetched and how it is paginated. Snapshots are never mutated in place:
//! every update merges a `FilterPatch` over the previous snapshot and
//! yields a new value.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Wire format for dates in query parameters (ISO-8601, no offset).
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Display format for the date range input.
const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Immutable snapshot of all query parameters.
///
/// Invariants (upheld by every constructor and by [`FilterState::merge`]):
/// - `start_date <= end_date`
/// - `page >= 1` and `page_size >= 1`
/// - `location_id` / `zone_id` are never `Some("")`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterState {
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    location_id: Option<String>,
    zone_id: Option<String>,
    page: u32,
    page_size: u32,
}

impl FilterState {
    /// Default filters for `today`: today 00:00:00 through tomorrow 23:59:59,
    /// no location or zone, page 1.
    pub fn defaults_for(today: NaiveDate, page_size: u32) -> Self {
        let tomorrow = today.succ_opt().unwrap_or(today);
        Self {
            start_date: start_of_day(today),
            end_date: end_of_day(tomorrow),
            location_id: None,
            zone_id: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Start of the date range (inclusive).
    pub fn start_date(&self) -> NaiveDateTime {
        self.start_date
    }

    /// End of the date range (inclusive).
    pub fn end_date(&self) -> NaiveDateTime {
        self.end_date
    }

    /// Selected location, if filtering by location.
    pub fn location_id(&self) -> Option<&str> {
        self.location_id.as_deref()
    }

    /// Selected zone, if filtering by zone.
    pub fn zone_id(&self) -> Option<&str> {
        self.zone_id.as_deref()
    }

    /// Requested page (1-based).
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Shallow right-biased merge of `patch` over `self`.
    ///
    /// Fields absent from the patch keep their current value. When the
    /// result set changes (date range, location, zone or page size) the
    /// page goes back to 1, whatever page the patch asked for. A reversed
    /// date range is normalized by swapping its endpoints.
    pub fn merge(&self, patch: &FilterPatch) -> FilterState {
        let mut start_date = patch.start_date.unwrap_or(self.start_date);
        let mut end_date = patch.end_date.unwrap_or(self.end_date);
        if start_date > end_date {
            std::mem::swap(&mut start_date, &mut end_date);
        }

        let location_id = match &patch.location_id {
            Some(id) => normalize_id(id.clone()),
            None => self.location_id.clone(),
        };
        let zone_id = match &patch.zone_id {
            Some(id) => normalize_id(id.clone()),
            None => self.zone_id.clone(),
        };
        let page_size = patch
            .page_size
            .filter(|&size| size > 0)
            .unwrap_or(self.page_size);

        let result_set_changed = start_date != self.start_date
            || end_date != self.end_date
            || location_id != self.location_id
            || zone_id != self.zone_id
            || page_size != self.page_size;

        let page = if result_set_changed {
            1
        } else {
            patch.page.unwrap_or(self.page).max(1)
        };

        FilterState {
            start_date,
            end_date,
            location_id,
            zone_id,
            page,
            page_size,
        }
    }

    /// Every field as a query parameter, in a stable order.
    ///
    /// Absent location and zone are sent as empty values.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "startDate",
                self.start_date.format(QUERY_DATE_FORMAT).to_string(),
            ),
            ("endDate", self.end_date.format(QUERY_DATE_FORMAT).to_string()),
            ("locationId", self.location_id.clone().unwrap_or_default()),
            ("zoneId", self.zone_id.clone().unwrap_or_default()),
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }

    /// Human-readable date range, e.g. `2026-10-18 00:00 – 2026-10-19 23:59`.
    pub fn date_range_label(&self) -> String {
        format!(
            "{} – {}",
            self.start_date.format(DISPLAY_DATE_FORMAT),
            self.end_date.format(DISPLAY_DATE_FORMAT)
        )
    }
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59 on `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| start_of_day(date))
}

fn normalize_id(id: Option<String>) -> Option<String> {
    id.filter(|s| !s.trim().is_empty())
}

/// Partial update to a [`FilterState`].
///
/// `None` means "leave unchanged". For the optional ids, `Some(None)`
/// clears the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    /// New range start.
    pub start_date: Option<NaiveDateTime>,
    /// New range end.
    pub end_date: Option<NaiveDateTime>,
    /// New location filter (`Some(None)` clears it).
    pub location_id: Option<Option<String>>,
    /// New zone filter (`Some(None)` clears it).
    pub zone_id: Option<Option<String>>,
    /// New page.
    pub page: Option<u32>,
    /// New page size.
    pub page_size: Option<u32>,
}

impl FilterPatch {
    /// Patch setting both ends of the date range.
    pub fn date_range(start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            ..Self::default()
        }
    }

    /// Patch setting (or clearing) the location filter.
    pub fn location(location_id: Option<String>) -> Self {
        Self {
            location_id: Some(location_id),
            ..Self::default()
        }
    }

    /// Patch setting (or clearing) the zone filter.
    pub fn zone(zone_id: Option<String>) -> Self {
        Self {
            zone_id: Some(zone_id),
            ..Self::default()
        }
    }

    /// Patch requesting a page.
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// Patch changing the page size.
    #[cfg(test)]
    pub fn page_size(page_size: u32) -> Self {
        Self {
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    /// Combine with another patch; fields set in `other` win.
    pub fn and(self, other: FilterPatch) -> Self {
        Self {
            start_date: other.start_date.or(self.start_date),
            end_date: other.end_date.or(self.end_date),
            location_id: other.location_id.or(self.location_id),
            zone_id: other.zone_id.or(self.zone_id),
            page: other.page.or(self.page),
            page_size: other.page_size.or(self.page_size),
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
