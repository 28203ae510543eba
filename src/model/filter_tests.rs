//! Tests for filter snapshots and merging.

use super::*;
use proptest::prelude::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn base() -> FilterState {
    FilterState::defaults_for(day(2026, 10, 18), DEFAULT_PAGE_SIZE)
}

fn on_page(page: u32) -> FilterState {
    base().merge(&FilterPatch::page(page))
}

// ===== Defaults =====

#[test]
fn defaults_span_today_through_end_of_tomorrow() {
    let filters = base();
    assert_eq!(filters.start_date(), at(2026, 10, 18, 0, 0));
    assert_eq!(
        filters.end_date(),
        day(2026, 10, 19).and_hms_opt(23, 59, 59).unwrap()
    );
    assert_eq!(filters.location_id(), None);
    assert_eq!(filters.zone_id(), None);
    assert_eq!(filters.page(), 1);
    assert_eq!(filters.page_size(), 20);
}

#[test]
fn defaults_reject_zero_page_size() {
    let filters = FilterState::defaults_for(day(2026, 10, 18), 0);
    assert_eq!(filters.page_size(), 1);
}

// ===== Merge =====

#[test]
fn empty_patch_returns_equal_snapshot() {
    let filters = on_page(4);
    assert_eq!(filters.merge(&FilterPatch::default()), filters);
}

#[test]
fn page_patch_keeps_other_fields() {
    let filters = base().merge(&FilterPatch::location(Some("north".into())));
    let next = filters.merge(&FilterPatch::page(2));
    assert_eq!(next.page(), 2);
    assert_eq!(next.location_id(), Some("north"));
    assert_eq!(next.start_date(), filters.start_date());
}

#[test]
fn location_change_resets_page() {
    let filters = on_page(5);
    let next = filters.merge(&FilterPatch::location(Some("north".into())));
    assert_eq!(next.page(), 1);
    assert_eq!(next.location_id(), Some("north"));
}

#[test]
fn zone_change_resets_page() {
    let next = on_page(5).merge(&FilterPatch::zone(Some("z1".into())));
    assert_eq!(next.page(), 1);
}

#[test]
fn date_change_resets_page_even_when_page_requested() {
    let patch = FilterPatch::date_range(at(2026, 10, 1, 0, 0), at(2026, 10, 2, 0, 0))
        .and(FilterPatch::page(3));
    let next = on_page(5).merge(&patch);
    assert_eq!(next.page(), 1);
}

#[test]
fn page_size_change_resets_page() {
    let next = on_page(5).merge(&FilterPatch::page_size(50));
    assert_eq!(next.page(), 1);
    assert_eq!(next.page_size(), 50);
}

#[test]
fn setting_same_location_keeps_page() {
    let filters = base()
        .merge(&FilterPatch::location(Some("north".into())))
        .merge(&FilterPatch::page(3));
    let next = filters.merge(&FilterPatch::location(Some("north".into())));
    assert_eq!(next, filters);
}

#[test]
fn clearing_location_removes_filter() {
    let filters = base().merge(&FilterPatch::location(Some("north".into())));
    let next = filters.merge(&FilterPatch::location(None));
    assert_eq!(next.location_id(), None);
}

#[test]
fn blank_location_means_no_filter() {
    let next = base().merge(&FilterPatch::location(Some("  ".into())));
    assert_eq!(next.location_id(), None);
    assert_eq!(next, base());
}

#[test]
fn reversed_range_is_swapped() {
    let patch = FilterPatch::date_range(at(2026, 10, 20, 0, 0), at(2026, 10, 10, 0, 0));
    let next = base().merge(&patch);
    assert_eq!(next.start_date(), at(2026, 10, 10, 0, 0));
    assert_eq!(next.end_date(), at(2026, 10, 20, 0, 0));
}

#[test]
fn start_only_patch_past_end_is_swapped() {
    let patch = FilterPatch {
        start_date: Some(at(2026, 11, 1, 0, 0)),
        ..FilterPatch::default()
    };
    let next = base().merge(&patch);
    assert!(next.start_date() <= next.end_date());
    assert_eq!(next.end_date(), at(2026, 11, 1, 0, 0));
}

#[test]
fn zero_page_clamps_to_one() {
    let next = on_page(3).merge(&FilterPatch::page(0));
    assert_eq!(next.page(), 1);
}

#[test]
fn zero_page_size_is_ignored() {
    let next = on_page(3).merge(&FilterPatch::page_size(0));
    assert_eq!(next.page_size(), 20);
    assert_eq!(next.page(), 3);
}

#[test]
fn later_patch_wins_when_combined() {
    let patch = FilterPatch::page(2).and(FilterPatch::page(4));
    assert_eq!(patch.page, Some(4));
    assert_ne!(patch, FilterPatch::default());
}

// ===== Query serialization =====

#[test]
fn query_pairs_serialize_every_field() {
    let filters = base()
        .merge(&FilterPatch::location(Some("north".into())))
        .merge(&FilterPatch::page(2));
    let pairs = filters.query_pairs();
    let keys: Vec<_> = pairs.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        vec!["startDate", "endDate", "locationId", "zoneId", "page", "pageSize"]
    );
    assert_eq!(pairs[0].1, "2026-10-18T00:00:00");
    assert_eq!(pairs[1].1, "2026-10-19T23:59:59");
    assert_eq!(pairs[2].1, "north");
    assert_eq!(pairs[3].1, "");
    assert_eq!(pairs[4].1, "2");
    assert_eq!(pairs[5].1, "20");
}

#[test]
fn query_dates_parse_back() {
    let filters = base();
    let pairs = filters.query_pairs();
    let parse = |raw: &str| NaiveDateTime::parse_from_str(raw, QUERY_DATE_FORMAT).unwrap();
    assert_eq!(parse(&pairs[0].1), filters.start_date());
    assert_eq!(parse(&pairs[1].1), filters.end_date());
}

#[test]
fn date_range_label_formats_both_endpoints() {
    insta::assert_snapshot!(base().date_range_label(), @"2026-10-18 00:00 – 2026-10-19 23:59");
}

// ===== Properties =====

fn arb_patch() -> impl Strategy<Value = FilterPatch> {
    let date = (0i64..400, 0u32..24).prop_map(|(offset, hour)| {
        (day(2026, 1, 1) + chrono::Days::new(offset as u64))
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    });
    let id = prop::option::of(prop::option::of(prop_oneof![
        Just(String::new()),
        Just("a".to_string()),
        Just("b".to_string()),
    ]));
    (
        prop::option::of(date.clone()),
        prop::option::of(date),
        id.clone(),
        id,
        prop::option::of(0u32..10),
        prop::option::of(0u32..100),
    )
        .prop_map(
            |(start_date, end_date, location_id, zone_id, page, page_size)| FilterPatch {
                start_date,
                end_date,
                location_id,
                zone_id,
                page,
                page_size,
            },
        )
}

proptest! {
    #[test]
    fn merge_is_idempotent_under_empty_patch(p in arb_patch()) {
        let merged = on_page(3).merge(&p);
        prop_assert_eq!(merged.merge(&FilterPatch::default()), merged);
    }

    #[test]
    fn merge_upholds_invariants(p in arb_patch(), q in arb_patch()) {
        let merged = base().merge(&p).merge(&q);
        prop_assert!(merged.start_date() <= merged.end_date());
        prop_assert!(merged.page() >= 1);
        prop_assert!(merged.page_size() >= 1);
        prop_assert_ne!(merged.location_id(), Some(""));
        prop_assert_ne!(merged.zone_id(), Some(""));
    }

    #[test]
    fn result_set_change_lands_on_page_one(p in arb_patch()) {
        let before = on_page(4);
        let after = before.merge(&p);
        let changed = after.start_date() != before.start_date()
            || after.end_date() != before.end_date()
            || after.location_id() != before.location_id()
            || after.zone_id() != before.zone_id();
        if changed {
            prop_assert_eq!(after.page(), 1);
        }
    }
}
