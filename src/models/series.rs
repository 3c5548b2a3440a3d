use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DailyPoint: one calendar day of the series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
    pub profit: Decimal,
}

impl DailyPoint {
    pub fn new(date: NaiveDate, income: Decimal, expense: Decimal) -> Self {
        Self {
            date,
            income,
            expense,
            profit: income - expense,
        }
    }
}

// ---------------------------------------------------------------------------
// DailySeries: dense, gap-free run of days starting at `anchor`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeries {
    anchor: Option<NaiveDate>,
    points: Vec<DailyPoint>,
}

impl DailySeries {
    /// Build a series from per-day buckets starting at `anchor`.
    ///
    /// `income` and `expense` must have equal length; the date of entry `i`
    /// is `anchor + i` days.
    pub(crate) fn from_buckets(
        anchor: NaiveDate,
        income: Vec<Decimal>,
        expense: Vec<Decimal>,
    ) -> Self {
        let points = anchor
            .iter_days()
            .zip(income.into_iter().zip(expense))
            .map(|(date, (inc, exp))| DailyPoint::new(date, inc, exp))
            .collect();
        Self {
            anchor: Some(anchor),
            points,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// First day of the series, `None` when empty.
    pub fn anchor(&self) -> Option<NaiveDate> {
        self.anchor
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[DailyPoint] {
        &self.points
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyPoint> {
        let anchor = self.anchor?;
        let offset = usize::try_from((date - anchor).num_days()).ok()?;
        self.points.get(offset)
    }

    pub fn income(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.income).collect()
    }

    pub fn expense(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.expense).collect()
    }

    pub fn profit(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.profit).collect()
    }

    /// Column sums over the whole series.
    pub fn totals(&self) -> Totals {
        let (income, expense) = self
            .points
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), p| {
                (inc + p.income, exp + p.expense)
            });
        Totals {
            income,
            expense,
            profit: income - expense,
        }
    }
}

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub profit: Decimal,
}
