//! Date label tests.

mod common;

use common::{at, date, income};
use owner_dashboard::aggregate_through;
use owner_dashboard::error::DashboardError;
use owner_dashboard::labels::{check_alignment, format_label, labels, labels_for};
use owner_dashboard::models::DailySeries;

#[test]
fn labels_are_month_day() {
    assert_eq!(format_label(date(2024, 1, 5)), "01-05");
    assert_eq!(format_label(date(2024, 12, 31)), "12-31");
}

#[test]
fn labels_cover_anchor_through_today() {
    let out = labels(date(2024, 2, 27), date(2024, 3, 1));
    assert_eq!(out, vec!["02-27", "02-28", "02-29", "03-01"]);
}

#[test]
fn single_day_has_one_label() {
    assert_eq!(labels(date(2024, 6, 1), date(2024, 6, 1)), vec!["06-01"]);
}

#[test]
fn today_before_anchor_is_appended_once() {
    let out = labels(date(2024, 6, 10), date(2024, 6, 8));
    assert_eq!(out, vec!["06-08"]);
}

#[test]
fn labels_cross_year_boundary_in_order() {
    let out = labels(date(2023, 12, 30), date(2024, 1, 2));
    assert_eq!(out, vec!["12-30", "12-31", "01-01", "01-02"]);
}

#[test]
fn empty_series_has_no_labels() {
    assert!(labels_for(&DailySeries::empty(), date(2024, 1, 1)).is_empty());
}

#[test]
fn labels_match_series_built_from_same_snapshot() {
    let today = date(2024, 3, 9);
    let records = vec![income(1, at(2024, 3, 1, 8)), income(2, at(2024, 3, 4, 8))];
    let series = aggregate_through(&records, today).series();
    let out = labels_for(&series, today);

    assert_eq!(out.len(), series.len());
    assert!(check_alignment(&out, &series).is_ok());
    assert_eq!(out.first().map(String::as_str), Some("03-01"));
    assert_eq!(out.last().map(String::as_str), Some("03-09"));
}

#[test]
fn mismatched_lengths_are_reported() {
    let records = vec![income(1, at(2024, 3, 1, 8))];
    let series = aggregate_through(&records, date(2024, 3, 3)).series();
    let short = labels(date(2024, 3, 1), date(2024, 3, 2));

    match check_alignment(&short, &series) {
        Err(DashboardError::SpanMismatch { labels, days }) => {
            assert_eq!(labels, 2);
            assert_eq!(days, 3);
        }
        other => panic!("expected SpanMismatch, got {:?}", other),
    }
}
