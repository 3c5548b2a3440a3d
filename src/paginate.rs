//! Fixed-size paging over a daily series, one cursor per chart.
//!
//! Page 0 is the most recent window. Sequences are paged in newest-first
//! order; [`newest_first`] produces that order from an ascending sequence.

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Direction / Chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Older,
    Newer,
}

/// The two independently paged charts on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chart {
    /// Bar chart of daily income.
    DailySales,
    /// Line chart of income, expense and profit.
    FinancialMetrics,
}

impl Chart {
    pub const ALL: [Chart; 2] = [Chart::DailySales, Chart::FinancialMetrics];
}

// ---------------------------------------------------------------------------
// PageCursor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    page_index: usize,
    page_size: usize,
    total_pages: usize,
}

impl PageCursor {
    /// Cursor at page 0 over a series of `series_len` entries.
    pub fn new(page_size: usize, series_len: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(DashboardError::InvalidArgument(
                "page size must be positive".into(),
            ));
        }
        Ok(Self {
            page_index: 0,
            page_size,
            total_pages: series_len.div_ceil(page_size),
        })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_older(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }

    pub fn has_newer(&self) -> bool {
        self.page_index > 0
    }

    /// Step one page; requests past either end leave the cursor unchanged.
    pub fn advance(self, direction: Direction) -> Self {
        let page_index = match direction {
            Direction::Older if self.has_older() => self.page_index + 1,
            Direction::Newer if self.has_newer() => self.page_index - 1,
            _ => self.page_index,
        };
        Self { page_index, ..self }
    }

    /// Same page size, back to page 0, page count recomputed for `series_len`.
    pub fn reset(self, series_len: usize) -> Self {
        Self {
            page_index: 0,
            page_size: self.page_size,
            total_pages: series_len.div_ceil(self.page_size),
        }
    }

    /// The slice this cursor selects, clipped to `items`.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        window_for(self, items)
    }
}

/// `items[page * size .. page * size + size]`, clipped to the slice bounds.
pub fn window_for<'a, T>(cursor: &PageCursor, items: &'a [T]) -> &'a [T] {
    let start = cursor
        .page_index
        .saturating_mul(cursor.page_size)
        .min(items.len());
    let end = start.saturating_add(cursor.page_size).min(items.len());
    &items[start..end]
}

/// Reverse an ascending sequence into the newest-first paging order.
pub fn newest_first<T: Clone>(ascending: &[T]) -> Vec<T> {
    ascending.iter().rev().cloned().collect()
}

// ---------------------------------------------------------------------------
// SeriesPaginator
// ---------------------------------------------------------------------------

/// Holds one independent [`PageCursor`] per [`Chart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPaginator {
    daily_sales: PageCursor,
    financial_metrics: PageCursor,
}

impl SeriesPaginator {
    pub fn new(page_size: usize, series_len: usize) -> Result<Self> {
        let cursor = PageCursor::new(page_size, series_len)?;
        Ok(Self {
            daily_sales: cursor,
            financial_metrics: cursor,
        })
    }

    pub fn cursor(&self, chart: Chart) -> PageCursor {
        match chart {
            Chart::DailySales => self.daily_sales,
            Chart::FinancialMetrics => self.financial_metrics,
        }
    }

    fn cursor_mut(&mut self, chart: Chart) -> &mut PageCursor {
        match chart {
            Chart::DailySales => &mut self.daily_sales,
            Chart::FinancialMetrics => &mut self.financial_metrics,
        }
    }

    /// Move one chart's cursor and return its new state.
    pub fn advance(&mut self, chart: Chart, direction: Direction) -> PageCursor {
        let cursor = self.cursor_mut(chart);
        *cursor = cursor.advance(direction);
        *cursor
    }

    /// Put every cursor back on page 0 for a rebuilt series.
    pub fn reset(&mut self, series_len: usize) {
        for chart in Chart::ALL {
            let cursor = self.cursor_mut(chart);
            *cursor = cursor.reset(series_len);
        }
    }
}
