/// Fixed page size of the listings grid
pub const ITEMS_PER_PAGE: usize = 9;

/// Number of pages needed for `item_count` listings; 0 for an empty set
pub fn total_pages(item_count: usize) -> usize {
    (item_count + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE
}

/// 1-indexed cursor into the paginated listings.
///
/// Invariant: the current page never leaves [1, total_pages], falling back
/// to 1 when the filtered set is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl PageState {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self, item_count: usize) -> bool {
        self.current < total_pages(item_count)
    }

    /// Advance one page, saturating at the last page
    pub fn next(self, item_count: usize) -> Self {
        self.jump_to(self.current + 1, item_count)
    }

    /// Go back one page, saturating at page 1
    pub fn previous(self) -> Self {
        Self {
            current: self.current.saturating_sub(1).max(1),
        }
    }

    /// Jump straight to `page`, clamped into the valid range
    pub fn jump_to(self, page: usize, item_count: usize) -> Self {
        Self {
            current: page.clamp(1, total_pages(item_count).max(1)),
        }
    }

    /// Re-clamp after the underlying item count changed
    pub fn clamp(self, item_count: usize) -> Self {
        self.jump_to(self.current, item_count)
    }
}

/// Slice of the ordered sequence the given page shows
pub fn page_slice<T>(items: &[T], page: PageState) -> &[T] {
    let start = (page.current - 1) * ITEMS_PER_PAGE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + ITEMS_PER_PAGE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(9), 1);
        assert_eq!(total_pages(10), 2);
        assert_eq!(total_pages(18), 2);
        assert_eq!(total_pages(19), 3);
    }

    #[test]
    fn pages_cover_the_sequence_without_gaps_or_overlaps() {
        let items: Vec<usize> = (0..25).collect();
        let mut seen = Vec::new();
        let mut page = PageState::default();
        loop {
            seen.extend_from_slice(page_slice(&items, page));
            if !page.has_next(items.len()) {
                break;
            }
            page = page.next(items.len());
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn tenth_item_sits_alone_on_page_two() {
        let items: Vec<usize> = (0..10).collect();
        let page = PageState::default().jump_to(2, items.len());
        assert_eq!(page_slice(&items, page), &[9]);
    }

    #[test]
    fn previous_saturates_at_first_page() {
        let page = PageState::default();
        assert!(!page.has_previous());
        assert_eq!(page.previous().current(), 1);
    }

    #[test]
    fn next_saturates_at_last_page() {
        let items: Vec<usize> = (0..10).collect();
        let page = PageState::default().jump_to(2, items.len());
        assert!(!page.has_next(items.len()));
        assert_eq!(page.next(items.len()).current(), 2);
    }

    #[test]
    fn jump_clamps_into_valid_range() {
        let page = PageState::default().jump_to(7, 10);
        assert_eq!(page.current(), 2);
        let page = page.jump_to(0, 10);
        assert_eq!(page.current(), 1);
    }

    #[test]
    fn empty_set_pins_the_cursor_to_page_one() {
        let page = PageState::default().jump_to(5, 100).clamp(0);
        assert_eq!(page.current(), 1);
        let empty: [u8; 0] = [];
        assert!(page_slice(&empty, page).is_empty());
    }
}
