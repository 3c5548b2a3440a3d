//! Home screen state: daily series, totals, labels and the two chart cursors.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::aggregate_through;
use crate::api::OwnerApi;
use crate::config::ACCESS_TOKEN_KEY;
use crate::error::{DashboardError, Result};
use crate::labels::{check_alignment, labels};
use crate::models::{flatten_accounts, DailySeries, Totals, TransactionRecord};
use crate::paginate::{newest_first, Chart, Direction, PageCursor, SeriesPaginator};
use crate::token_store::TokenStore;

// ---------------------------------------------------------------------------
// ChartPage: what a chart draws for its current cursor
// ---------------------------------------------------------------------------

/// One page of chart data in chronological order. All columns have the same
/// length and index `i` refers to the same day in each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartPage {
    pub labels: Vec<String>,
    pub income: Vec<Decimal>,
    pub expense: Vec<Decimal>,
    pub profit: Vec<Decimal>,
}

impl ChartPage {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Snapshot: the fully derived state published by a refresh
// ---------------------------------------------------------------------------

/// Derived dashboard data for one set of records and one "today".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub series: DailySeries,
    pub totals: Totals,
    pub labels: Vec<String>,
    pub today: Option<NaiveDate>,
}

impl Snapshot {
    /// Derive series, totals and labels from `records` as of `today`.
    pub fn build(records: &[TransactionRecord], today: NaiveDate) -> Result<Self> {
        let (series, totals) = aggregate_through(records, today).into_parts();
        let labels = match (series.anchor(), series.last_date()) {
            (Some(anchor), Some(end)) => labels(anchor, end),
            _ => Vec::new(),
        };
        check_alignment(&labels, &series)?;
        Ok(Self {
            series,
            totals,
            labels,
            today: Some(today),
        })
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub struct Dashboard {
    snapshot: Snapshot,
    paginator: SeriesPaginator,
}

impl Dashboard {
    pub fn new(page_size: usize) -> Result<Self> {
        Ok(Self {
            snapshot: Snapshot::default(),
            paginator: SeriesPaginator::new(page_size, 0)?,
        })
    }

    /// Fetch transactions and rebuild, dated by the local clock.
    pub fn refresh(&mut self, api: &dyn OwnerApi, store: &dyn TokenStore) -> Result<()> {
        self.refresh_at(api, store, Local::now().date_naive())
    }

    /// Fetch transactions and rebuild as of `today`.
    ///
    /// On any failure the previously published data stays in place.
    pub fn refresh_at(
        &mut self,
        api: &dyn OwnerApi,
        store: &dyn TokenStore,
        today: NaiveDate,
    ) -> Result<()> {
        let records = fetch_records(api, store)?;
        self.rebuild(&records, today)
    }

    /// Replace all derived data from `records` and reset both chart cursors.
    pub fn rebuild(&mut self, records: &[TransactionRecord], today: NaiveDate) -> Result<()> {
        let snapshot = Snapshot::build(records, today)?;
        self.publish(snapshot);
        Ok(())
    }

    /// Install an already-built snapshot, series first, cursors second.
    pub fn publish(&mut self, snapshot: Snapshot) {
        let len = snapshot.series.len();
        self.snapshot = snapshot;
        self.paginator.reset(len);
        tracing::info!(
            days = len,
            income = %self.snapshot.totals.income,
            expense = %self.snapshot.totals.expense,
            "dashboard rebuilt"
        );
    }

    pub fn series(&self) -> &DailySeries {
        &self.snapshot.series
    }

    pub fn totals(&self) -> Totals {
        self.snapshot.totals
    }

    pub fn labels(&self) -> &[String] {
        &self.snapshot.labels
    }

    /// Income recorded on the snapshot's "today", the "Today Sales" card.
    pub fn today_income(&self) -> Decimal {
        self.snapshot
            .today
            .and_then(|today| self.snapshot.series.get(today))
            .map(|p| p.income)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn cursor(&self, chart: Chart) -> PageCursor {
        self.paginator.cursor(chart)
    }

    pub fn advance(&mut self, chart: Chart, direction: Direction) -> PageCursor {
        self.paginator.advance(chart, direction)
    }

    /// Data for `chart` at its current page.
    pub fn page(&self, chart: Chart) -> ChartPage {
        let cursor = self.paginator.cursor(chart);
        let series = &self.snapshot.series;

        let page_of = |ascending: Vec<Decimal>| -> Vec<Decimal> {
            let ordered = newest_first(&ascending);
            let mut window = cursor.window(&ordered).to_vec();
            window.reverse();
            window
        };

        let ordered_labels = newest_first(&self.snapshot.labels);
        let mut labels = cursor.window(&ordered_labels).to_vec();
        labels.reverse();

        ChartPage {
            labels,
            income: page_of(series.income()),
            expense: page_of(series.expense()),
            profit: page_of(series.profit()),
        }
    }
}

/// Read the access token once and pull every account's transactions.
pub fn fetch_records(api: &dyn OwnerApi, store: &dyn TokenStore) -> Result<Vec<TransactionRecord>> {
    let token = store
        .get(ACCESS_TOKEN_KEY)?
        .ok_or(DashboardError::NotSignedIn)?;
    let accounts = match api.owner_accounts(&token) {
        Ok(accounts) => accounts,
        Err(e) => {
            tracing::warn!(error = %e, "owner account fetch failed");
            return Err(e);
        }
    };
    let records = flatten_accounts(accounts);
    tracing::debug!(records = records.len(), "fetched transactions");
    Ok(records)
}
