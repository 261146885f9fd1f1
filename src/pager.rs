//! Pagination arithmetic for numbered page controls.
//!
//! This module holds the pure computation behind the paginator widget: given the
//! total number of items, the selected page and the page size, it derives the
//! number of pages, the window of page numbers to show and the slice of items
//! that belongs to the selected page.
//!
//! Pages are **1-based** throughout. Item indices are 0-based.
//!
//! # Page Window
//!
//! At most [`MAX_VISIBLE_PAGES`] page numbers are shown at once. When there are
//! more pages than that, the window slides with the current page, keeping five
//! pages before it and four after it:
//!
//! ```rust
//! use bubbletea_pager::pager::compute_pager;
//!
//! // 100 pages, somewhere in the middle
//! let pager = compute_pager(1000, 50, 10);
//! assert_eq!((pager.start_page, pager.end_page), (45, 54));
//!
//! // Near the end the window sticks to the last ten pages
//! let pager = compute_pager(1000, 97, 10);
//! assert_eq!((pager.start_page, pager.end_page), (91, 100));
//! ```

use std::ops::{Range, RangeInclusive};

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of page numbers in the displayed window.
pub const MAX_VISIBLE_PAGES: usize = 10;

const PAGES_BEFORE_CURRENT: usize = 5;
const PAGES_AFTER_CURRENT: usize = 4;

/// Computed pagination state for one selected page.
///
/// A `Pager` is an immutable snapshot. Changing page means computing a new one
/// with [`compute_pager`]; nothing here is updated in place.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pager::pager::compute_pager;
///
/// let items: Vec<u32> = (1..=25).collect();
/// let pager = compute_pager(items.len(), 3, 10);
///
/// assert_eq!(pager.total_pages, 3);
/// assert_eq!(pager.pages, vec![1, 2, 3]);
/// assert_eq!((pager.start_index, pager.end_index), (20, 24));
/// assert_eq!(&items[pager.item_range()], &[21, 22, 23, 24, 25]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pager {
    /// Size of the source collection.
    pub total_items: usize,
    /// The selected page (1-based).
    pub current_page: usize,
    /// Number of items per page.
    pub page_size: usize,
    /// Total number of pages, `ceil(total_items / page_size)`.
    pub total_pages: usize,
    /// First page number in the displayed window.
    pub start_page: usize,
    /// Last page number in the displayed window.
    pub end_page: usize,
    /// Index of the first item on the current page (inclusive).
    pub start_index: usize,
    /// Index of the last item on the current page (inclusive).
    pub end_index: usize,
    /// Page numbers of the displayed window, ascending.
    pub pages: Vec<usize>,
}

impl Pager {
    /// Returns the half-open range of item indices on the current page.
    ///
    /// The range is always safe to slice the source collection with. It is empty
    /// when the collection is empty or the page lies past the last item.
    ///
    /// ```rust
    /// use bubbletea_pager::pager::compute_pager;
    ///
    /// assert_eq!(compute_pager(25, 1, 10).item_range(), 0..10);
    /// assert_eq!(compute_pager(25, 3, 10).item_range(), 20..25);
    /// assert!(compute_pager(0, 1, 10).item_range().is_empty());
    /// ```
    pub fn item_range(&self) -> Range<usize> {
        if self.start_index >= self.total_items {
            return self.total_items..self.total_items;
        }
        self.start_index..self.end_index + 1
    }

    /// Returns the displayed page numbers as an inclusive range.
    pub fn window(&self) -> RangeInclusive<usize> {
        self.start_page..=self.end_page
    }

    /// Number of items on the current page.
    pub fn items_on_page(&self) -> usize {
        self.item_range().len()
    }

    /// Returns true if `page` is a selectable page for this collection.
    pub fn contains_page(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages
    }

    /// Returns true if the current page is the first page.
    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Returns true if the current page is the last page.
    ///
    /// An empty pager (no pages at all) also counts as being on the last page.
    pub fn on_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }
}

/// Computes the pager for `current_page` of a collection of `total_items`.
///
/// A `current_page` of 0 is treated as unset and becomes page 1; a `page_size`
/// of 0 falls back to [`DEFAULT_PAGE_SIZE`]. No other correction is made: a
/// page past `total_pages` is computed as given, so callers must check
/// [`Pager::contains_page`] (or an equivalent bound) before asking for it.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pager::pager::compute_pager;
///
/// let pager = compute_pager(1000, 1, 10);
/// assert_eq!(pager.total_pages, 100);
/// assert_eq!(pager.pages, (1..=10).collect::<Vec<_>>());
/// assert_eq!((pager.start_index, pager.end_index), (0, 9));
///
/// let empty = compute_pager(0, 1, 10);
/// assert_eq!(empty.total_pages, 0);
/// assert!(empty.pages.is_empty());
/// ```
pub fn compute_pager(total_items: usize, current_page: usize, page_size: usize) -> Pager {
    let current_page = current_page.max(1);
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };

    let total_pages = total_items.div_ceil(page_size);
    let (start_page, end_page) = page_window(current_page, total_pages);

    let start_index = (current_page - 1).saturating_mul(page_size);
    let end_index = start_index
        .saturating_add(page_size - 1)
        .min(total_items.saturating_sub(1));

    let pager = Pager {
        total_items,
        current_page,
        page_size,
        total_pages,
        start_page,
        end_page,
        start_index,
        end_index,
        pages: (start_page..=end_page).collect(),
    };
    log::trace!(
        "computed pager: page {}/{} window {}..={} items {}..={}",
        pager.current_page,
        pager.total_pages,
        pager.start_page,
        pager.end_page,
        pager.start_index,
        pager.end_index
    );
    pager
}

/// Returns the inclusive `(start_page, end_page)` window for `current_page`.
///
/// With no pages at all this is `(1, 0)`, an empty window.
fn page_window(current_page: usize, total_pages: usize) -> (usize, usize) {
    if total_pages <= MAX_VISIBLE_PAGES {
        (1, total_pages)
    } else if current_page <= PAGES_BEFORE_CURRENT + 1 {
        (1, MAX_VISIBLE_PAGES)
    } else if current_page.saturating_add(PAGES_AFTER_CURRENT) >= total_pages {
        (total_pages - (MAX_VISIBLE_PAGES - 1), total_pages)
    } else {
        (
            current_page - PAGES_BEFORE_CURRENT,
            current_page + PAGES_AFTER_CURRENT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_few_items_shows_every_page() {
        let pager = compute_pager(25, 1, 10);

        assert_eq!(pager.total_items, 25);
        assert_eq!(pager.current_page, 1);
        assert_eq!(pager.page_size, 10);
        assert_eq!(pager.total_pages, 3);
        assert_eq!(pager.start_page, 1);
        assert_eq!(pager.end_page, 3);
        assert_eq!(pager.pages, vec![1, 2, 3]);
        assert_eq!(pager.start_index, 0);
        assert_eq!(pager.end_index, 9);
    }

    #[test]
    fn test_first_page_of_many() {
        let pager = compute_pager(1000, 1, 10);

        assert_eq!(pager.total_pages, 100);
        assert_eq!(pager.start_page, 1);
        assert_eq!(pager.end_page, 10);
        assert_eq!(pager.pages, (1..=10).collect::<Vec<_>>());
        assert_eq!(pager.start_index, 0);
        assert_eq!(pager.end_index, 9);
    }

    #[test]
    fn test_window_slides_around_current_page() {
        let pager = compute_pager(1000, 50, 10);

        assert_eq!(pager.total_pages, 100);
        assert_eq!(pager.start_page, 45);
        assert_eq!(pager.end_page, 54);
        assert_eq!(pager.start_index, 490);
        assert_eq!(pager.end_index, 499);
    }

    #[test]
    fn test_window_sticks_to_the_end() {
        let pager = compute_pager(1000, 97, 10);

        assert_eq!(pager.start_page, 91);
        assert_eq!(pager.end_page, 100);
    }

    #[test]
    fn test_window_boundaries() {
        // Page 6 is the last page that keeps the window at the start
        assert_eq!(compute_pager(1000, 6, 10).window(), 1..=10);
        assert_eq!(compute_pager(1000, 7, 10).window(), 2..=11);

        // current + 4 == total pins the window to the end
        assert_eq!(compute_pager(1000, 96, 10).window(), 91..=100);
        assert_eq!(compute_pager(1000, 95, 10).window(), 90..=99);

        // Exactly ten pages never slides
        assert_eq!(compute_pager(100, 10, 10).window(), 1..=10);
        // Eleven pages is the smallest collection that does
        assert_eq!(compute_pager(110, 11, 10).window(), 2..=11);
    }

    #[test]
    fn test_empty_collection() {
        let pager = compute_pager(0, 1, 10);

        assert_eq!(pager.total_pages, 0);
        assert!(pager.pages.is_empty());
        assert_eq!(pager.window().count(), 0);
        assert_eq!(pager.item_range(), 0..0);
        assert_eq!(pager.items_on_page(), 0);
        assert!(!pager.contains_page(1));
    }

    #[test]
    fn test_partial_last_page() {
        let pager = compute_pager(95, 10, 10);

        assert_eq!(pager.start_index, 90);
        assert_eq!(pager.end_index, 94);
        assert_eq!(pager.items_on_page(), 5);
        assert!(pager.on_last_page());
        assert!(!pager.on_first_page());
    }

    #[test]
    fn test_unset_inputs_use_defaults() {
        let pager = compute_pager(25, 0, 0);

        assert_eq!(pager.current_page, 1);
        assert_eq!(pager.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(pager.total_pages, 3);
    }

    #[test]
    fn test_page_past_the_end_is_not_clamped() {
        let pager = compute_pager(25, 4, 10);

        assert_eq!(pager.current_page, 4);
        assert_eq!(pager.start_index, 30);
        assert!(pager.item_range().is_empty());
        assert!(!pager.contains_page(4));
    }

    #[test]
    fn test_huge_unchecked_page_does_not_panic() {
        let pager = compute_pager(1000, usize::MAX, 10);

        assert_eq!(pager.window(), 91..=100);
        assert!(pager.item_range().is_empty());
    }

    #[test]
    fn test_total_pages_is_ceiling_division() {
        for page_size in 1..=12 {
            for total_items in 0..=150 {
                let pager = compute_pager(total_items, 1, page_size);
                let expected = (total_items + page_size - 1) / page_size;
                assert_eq!(
                    pager.total_pages, expected,
                    "total_items={} page_size={}",
                    total_items, page_size
                );
            }
        }
    }

    #[test]
    fn test_window_and_slice_hold_for_every_valid_page() {
        for page_size in [1, 3, 10, 25] {
            for total_items in [1, 9, 10, 11, 99, 100, 101, 250, 1000] {
                let total_pages = compute_pager(total_items, 1, page_size).total_pages;
                for page in 1..=total_pages {
                    let pager = compute_pager(total_items, page, page_size);
                    let ctx = format!(
                        "total_items={} page={} page_size={}",
                        total_items, page, page_size
                    );

                    assert_eq!(
                        pager.pages.len(),
                        total_pages.min(MAX_VISIBLE_PAGES),
                        "{}",
                        ctx
                    );
                    assert_eq!(
                        pager.pages.len(),
                        pager.end_page - pager.start_page + 1,
                        "{}",
                        ctx
                    );
                    assert!(pager.pages.windows(2).all(|w| w[1] == w[0] + 1), "{}", ctx);
                    if total_pages > MAX_VISIBLE_PAGES {
                        assert!(pager.window().contains(&page), "{}", ctx);
                    }

                    assert_eq!(pager.start_index, (page - 1) * page_size, "{}", ctx);
                    assert!(pager.start_index <= pager.end_index, "{}", ctx);
                    let len = pager.end_index - pager.start_index + 1;
                    assert!(pager.start_index + len <= total_items, "{}", ctx);
                    assert_eq!(pager.item_range().len(), len, "{}", ctx);
                }
            }
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        assert_eq!(compute_pager(1000, 42, 10), compute_pager(1000, 42, 10));
        assert_eq!(compute_pager(0, 1, 7), compute_pager(0, 1, 7));
    }
}
