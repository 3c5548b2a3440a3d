//! Chart axis labels for a daily series.

use chrono::NaiveDate;

use crate::error::{DashboardError, Result};
use crate::models::DailySeries;

/// Short `MM-DD` label for a day.
pub fn format_label(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

/// One label per day from `anchor` through `today`, ascending.
///
/// If `today` is not the last generated day (for instance it precedes
/// `anchor`), its label is appended once at the end.
pub fn labels(anchor: NaiveDate, today: NaiveDate) -> Vec<String> {
    let mut out: Vec<String> = anchor
        .iter_days()
        .take_while(|d| *d <= today)
        .map(format_label)
        .collect();

    let today_label = format_label(today);
    if out.last() != Some(&today_label) {
        out.push(today_label);
    }
    out
}

/// Labels for `series` as of `today`, or nothing for an empty series.
pub fn labels_for(series: &DailySeries, today: NaiveDate) -> Vec<String> {
    match series.anchor() {
        Some(anchor) => labels(anchor, today),
        None => Vec::new(),
    }
}

/// Fail with [`DashboardError::SpanMismatch`] unless there is one label per day.
pub fn check_alignment(labels: &[String], series: &DailySeries) -> Result<()> {
    if labels.len() != series.len() {
        return Err(DashboardError::SpanMismatch {
            labels: labels.len(),
            days: series.len(),
        });
    }
    Ok(())
}
