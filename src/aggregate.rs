//! Daily income/expense/profit aggregation over cash-book transactions.
//!
//! Records are bucketed by their calendar day offset from the earliest record,
//! giving a dense series with one entry per day and no gaps.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{DailySeries, Totals, TransactionRecord, TransactionType};

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Result of aggregating a batch of transactions.
///
/// `Empty` is a normal outcome for an account with no transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregation {
    Empty,
    Series { series: DailySeries, totals: Totals },
}

impl Aggregation {
    pub fn series(&self) -> DailySeries {
        match self {
            Aggregation::Empty => DailySeries::empty(),
            Aggregation::Series { series, .. } => series.clone(),
        }
    }

    pub fn totals(&self) -> Totals {
        match self {
            Aggregation::Empty => Totals::default(),
            Aggregation::Series { totals, .. } => *totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Aggregation::Empty)
    }

    /// Split into owned series and totals.
    pub fn into_parts(self) -> (DailySeries, Totals) {
        match self {
            Aggregation::Empty => (DailySeries::empty(), Totals::default()),
            Aggregation::Series { series, totals } => (series, totals),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Aggregate records into a series spanning the earliest to the latest record day.
pub fn aggregate(records: &[TransactionRecord]) -> Aggregation {
    aggregate_until(records, None)
}

/// Aggregate records into a series that reaches at least `today`.
///
/// Days after the last transaction up to `today` are zero-filled. A `today`
/// that falls before the last transaction day has no effect.
pub fn aggregate_through(records: &[TransactionRecord], today: NaiveDate) -> Aggregation {
    aggregate_until(records, Some(today))
}

fn aggregate_until(records: &[TransactionRecord], today: Option<NaiveDate>) -> Aggregation {
    let (Some(earliest), Some(latest)) = (
        records.iter().min_by_key(|r| r.timestamp),
        records.iter().max_by_key(|r| r.timestamp),
    ) else {
        return Aggregation::Empty;
    };

    let anchor = earliest.day();
    let mut end = latest.day();
    if let Some(today) = today {
        end = end.max(today);
    }

    // Mixed offsets can put a later instant on an earlier calendar day.
    let (anchor, end) = records.iter().fold((anchor, end), |(lo, hi), r| {
        (lo.min(r.day()), hi.max(r.day()))
    });

    let span = day_offset(anchor, end) + 1;
    let mut income = vec![Decimal::ZERO; span];
    let mut expense = vec![Decimal::ZERO; span];

    let mut skipped = 0usize;
    for record in records {
        let idx = day_offset(anchor, record.day());
        match record.kind {
            TransactionType::Income => income[idx] += record.amount,
            TransactionType::Expense => expense[idx] += record.amount,
            TransactionType::Other => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "ignored transactions with unknown type");
    }

    let series = DailySeries::from_buckets(anchor, income, expense);
    let totals = series.totals();
    tracing::debug!(
        records = records.len(),
        days = series.len(),
        %anchor,
        "aggregated daily series"
    );

    Aggregation::Series { series, totals }
}

/// Whole days from `anchor` to `day`; callers guarantee `day >= anchor`.
fn day_offset(anchor: NaiveDate, day: NaiveDate) -> usize {
    (day - anchor).num_days().max(0) as usize
}
