//! Pagination tests: page counts, clamping, windows and cursor independence.

use owner_dashboard::paginate::{newest_first, window_for};
use owner_dashboard::{Chart, Direction, PageCursor, SeriesPaginator};

// ---------------------------------------------------------------------------
// PageCursor
// ---------------------------------------------------------------------------

#[test]
fn zero_page_size_is_rejected() {
    assert!(PageCursor::new(0, 10).is_err());
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(PageCursor::new(7, 10).unwrap().total_pages(), 2);
    assert_eq!(PageCursor::new(7, 14).unwrap().total_pages(), 2);
    assert_eq!(PageCursor::new(7, 15).unwrap().total_pages(), 3);
    assert_eq!(PageCursor::new(7, 1).unwrap().total_pages(), 1);
}

#[test]
fn empty_series_has_no_pages() {
    let cursor = PageCursor::new(7, 0).unwrap();
    assert_eq!(cursor.total_pages(), 0);
    assert_eq!(cursor.advance(Direction::Older).page_index(), 0);
    assert_eq!(cursor.advance(Direction::Newer).page_index(), 0);
}

#[test]
fn seven_per_page_over_ten_days() {
    let cursor = PageCursor::new(7, 10).unwrap();
    assert_eq!(cursor.page_index(), 0);

    let cursor = cursor.advance(Direction::Older);
    assert_eq!(cursor.page_index(), 1);

    let cursor = cursor.advance(Direction::Older);
    assert_eq!(cursor.page_index(), 1);
}

#[test]
fn repeated_moves_clamp_at_both_ends() {
    let mut cursor = PageCursor::new(3, 10).unwrap();
    for _ in 0..20 {
        cursor = cursor.advance(Direction::Older);
    }
    assert_eq!(cursor.page_index(), cursor.total_pages() - 1);
    assert!(!cursor.has_older());

    for _ in 0..20 {
        cursor = cursor.advance(Direction::Newer);
    }
    assert_eq!(cursor.page_index(), 0);
    assert!(!cursor.has_newer());
}

#[test]
fn reset_returns_to_first_page() {
    let cursor = PageCursor::new(2, 10)
        .unwrap()
        .advance(Direction::Older)
        .advance(Direction::Older);
    assert_eq!(cursor.page_index(), 2);

    let cursor = cursor.reset(3);
    assert_eq!(cursor.page_index(), 0);
    assert_eq!(cursor.total_pages(), 2);
    assert_eq!(cursor.page_size(), 2);
}

// ---------------------------------------------------------------------------
// window_for
// ---------------------------------------------------------------------------

#[test]
fn windows_cover_series_without_overlap() {
    let items: Vec<u32> = (0..10).collect();
    let cursor = PageCursor::new(7, items.len()).unwrap();

    assert_eq!(window_for(&cursor, &items), &[0, 1, 2, 3, 4, 5, 6]);
    let cursor = cursor.advance(Direction::Older);
    assert_eq!(window_for(&cursor, &items), &[7, 8, 9]);
}

#[test]
fn window_past_the_end_is_empty() {
    let cursor = PageCursor::new(4, 12)
        .unwrap()
        .advance(Direction::Older)
        .advance(Direction::Older);
    let short = [1, 2, 3];
    assert!(cursor.window(&short).is_empty());
}

#[test]
fn labels_and_values_stay_aligned_on_every_page() {
    let labels: Vec<String> = (1..=10).map(|d| format!("03-{:02}", d)).collect();
    let values: Vec<u32> = (1..=10).collect();
    let labels = newest_first(&labels);
    let values = newest_first(&values);

    let mut cursor = PageCursor::new(4, labels.len()).unwrap();
    for _ in 0..cursor.total_pages() {
        let l = cursor.window(&labels);
        let v = cursor.window(&values);
        assert_eq!(l.len(), v.len());
        for (label, value) in l.iter().zip(v) {
            assert_eq!(label, &format!("03-{:02}", value));
        }
        cursor = cursor.advance(Direction::Older);
    }
}

#[test]
fn newest_first_reverses() {
    assert_eq!(newest_first(&[1, 2, 3]), vec![3, 2, 1]);
}

// ---------------------------------------------------------------------------
// SeriesPaginator
// ---------------------------------------------------------------------------

#[test]
fn chart_cursors_are_independent() {
    let mut paginator = SeriesPaginator::new(7, 20).unwrap();
    paginator.advance(Chart::DailySales, Direction::Older);
    paginator.advance(Chart::DailySales, Direction::Older);

    assert_eq!(paginator.cursor(Chart::DailySales).page_index(), 2);
    assert_eq!(paginator.cursor(Chart::FinancialMetrics).page_index(), 0);
}

#[test]
fn paginator_reset_moves_every_cursor_to_zero() {
    let mut paginator = SeriesPaginator::new(5, 20).unwrap();
    paginator.advance(Chart::DailySales, Direction::Older);
    paginator.advance(Chart::FinancialMetrics, Direction::Older);

    paginator.reset(6);
    for chart in Chart::ALL {
        let cursor = paginator.cursor(chart);
        assert_eq!(cursor.page_index(), 0);
        assert_eq!(cursor.total_pages(), 2);
    }
}
