//! Client-side pagination over an in-memory record list.

/// A record that can be removed from a list by its identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// In-memory collection of remote records plus the page currently shown.
///
/// Items keep the order the server returned them in. `page` is 1-indexed and
/// is only moved by explicit navigation: shrinking the collection does not
/// pull it back into range (call [`ListState::clamp_page`] for that).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<T> {
    items: Vec<T>,
    page: usize,
    page_size: usize,
}

impl<T> ListState<T> {
    /// Creates an empty list on page 1. A zero page size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(len / page_size)`; zero for an empty list.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Highest page navigation may reach. At least 1, even when empty.
    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// 1-based row number of the first row on the current page.
    pub fn first_row_number(&self) -> usize {
        (self.page - 1) * self.page_size + 1
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Slice `[(page-1)*size, page*size)` clamped to the collection bounds.
    ///
    /// Returns an empty slice when the page lies past the end.
    pub fn current_page_view(&self) -> &[T] {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= self.items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Moves one page forward. No-op on the last page or when empty.
    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    /// Moves one page back. No-op on page 1.
    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Jumps to `page`, clamped to `[1, last_page()]`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.last_page());
    }

    /// Pulls `page` back to the last page if it ran past the end.
    pub fn clamp_page(&mut self) {
        if self.page > self.last_page() {
            self.page = self.last_page();
        }
    }

    /// Replaces the whole collection. The current page is left alone.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }
}

impl<T: Identified> ListState<T> {
    /// Drops every item whose id equals `id`, returning how many were removed.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        before - self.items.len()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row(String);

    impl Identified for Row {
        fn id(&self) -> &str {
            &self.0
        }
    }

    fn rows(ids: &[&str]) -> Vec<Row> {
        ids.iter().map(|id| Row(id.to_string())).collect()
    }

    fn state_with(n: usize) -> ListState<Row> {
        let mut state = ListState::new(4);
        state.replace_all((0..n).map(|i| Row(format!("r{i}"))).collect());
        state
    }

    #[test]
    fn test_five_records_scenario() {
        let mut state = ListState::new(4);
        state.replace_all(rows(&["A", "B", "C", "D", "E"]));

        assert_eq!(state.current_page_view(), rows(&["A", "B", "C", "D"]).as_slice());

        state.next_page();
        assert_eq!(state.page(), 2);
        assert_eq!(state.current_page_view(), rows(&["E"]).as_slice());

        state.next_page();
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_page_lengths_and_concatenation() {
        for n in 0..=13 {
            let mut state = state_with(n);
            let mut collected = Vec::new();
            loop {
                let page = state.page();
                let expected = 4.min(n.saturating_sub((page - 1) * 4));
                assert_eq!(state.current_page_view().len(), expected, "n={n} page={page}");
                collected.extend_from_slice(state.current_page_view());
                if !state.has_next() {
                    break;
                }
                state.next_page();
            }
            assert_eq!(collected.as_slice(), state.items(), "n={n}");
        }
    }

    #[test]
    fn test_next_page_is_noop_when_empty() {
        let mut state: ListState<Row> = ListState::new(4);
        state.next_page();
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.last_page(), 1);
        assert!(state.current_page_view().is_empty());
    }

    #[test]
    fn test_previous_page_is_noop_on_first_page() {
        let mut state = state_with(9);
        state.previous_page();
        assert_eq!(state.page(), 1);

        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 3);
        state.previous_page();
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_shrink_does_not_clamp_page() {
        let mut state = state_with(5);
        state.next_page();
        assert_eq!(state.page(), 2);

        assert_eq!(state.remove_by_id("r4"), 1);
        assert_eq!(state.page(), 2);
        assert!(state.current_page_view().is_empty());

        state.clamp_page();
        assert_eq!(state.page(), 1);
        assert_eq!(state.current_page_view().len(), 4);
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut state = state_with(10);
        state.set_page(99);
        assert_eq!(state.page(), 3);
        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_row_numbering_and_navigation_flags() {
        let mut state = state_with(6);
        assert_eq!(state.first_row_number(), 1);
        assert!(!state.has_previous());
        assert!(state.has_next());

        state.next_page();
        assert_eq!(state.first_row_number(), 5);
        assert!(state.has_previous());
        assert!(!state.has_next());
    }

    #[test]
    fn test_remove_by_id_keeps_order() {
        let mut state = ListState::new(4);
        state.replace_all(rows(&["A", "B", "C"]));
        assert_eq!(state.remove_by_id("B"), 1);
        assert_eq!(state.items(), rows(&["A", "C"]).as_slice());
        assert_eq!(state.remove_by_id("missing"), 0);
        assert!(!state.contains_id("B"));
    }
}
