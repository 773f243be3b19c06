use crate::traits::{SearchHit, SearchResults};

/// Number of hits shown per page.
pub const PAGE_SIZE: usize = 10;

/// Highest reachable page index. Together with [`PAGE_SIZE`] this caps the
/// view at 30 hits, matching the query limit.
pub const MAX_PAGE: usize = 2;

/// Cursor over the current result set.
///
/// Owns the installed [`SearchResults`] and a zero-based page cursor, and
/// computes the visible window. Three states are distinguished: no query
/// issued yet, a query that returned nothing, and a query with hits.
#[derive(Debug, Default)]
pub struct ResultsPager {
    results: Option<SearchResults>,
    page: Option<usize>,
}

impl ResultsPager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored result set. The cursor lands on the first page
    /// when there are hits and goes dormant otherwise.
    pub fn install(&mut self, results: SearchResults) {
        self.page = if results.hits.is_empty() { None } else { Some(0) };
        self.results = Some(results);
    }

    /// Clears the result set and cursor back to the initial state, as when
    /// switching top-level modes.
    pub fn reset(&mut self) {
        self.results = None;
        self.page = None;
    }

    /// Advances one page. No-op on the last page or before the first query.
    pub fn next(&mut self) {
        if let Some(page) = self.page
            && page < MAX_PAGE
        {
            self.page = Some(page + 1);
        }
    }

    /// Steps back one page. No-op on the first page or before the first
    /// query.
    pub fn previous(&mut self) {
        if let Some(page) = self.page
            && page > 0
        {
            self.page = Some(page - 1);
        }
    }

    /// The hits visible on the current page: exactly the window
    /// `[page * PAGE_SIZE, page * PAGE_SIZE + PAGE_SIZE)` clamped to the
    /// hit count, or nothing while the cursor is dormant.
    pub fn visible_slice(&self) -> &[SearchHit] {
        match (&self.results, self.page) {
            (Some(results), Some(page)) => {
                let start = (page * PAGE_SIZE).min(results.hits.len());
                let end = (start + PAGE_SIZE).min(results.hits.len());
                &results.hits[start..end]
            }
            _ => &[],
        }
    }

    /// Human-readable 1-based page label, or nothing to display while the
    /// cursor is dormant.
    pub fn page_label(&self) -> Option<String> {
        self.page.map(|page| (page + 1).to_string())
    }

    /// Offset of the first visible hit within the full result set.
    pub fn offset(&self) -> usize {
        self.page.unwrap_or(0) * PAGE_SIZE
    }

    /// Whether any result set has been installed since the last reset.
    pub fn has_query(&self) -> bool {
        self.results.is_some()
    }

    /// Whether the last query returned no hits.
    pub fn is_empty(&self) -> bool {
        matches!(&self.results, Some(results) if results.hits.is_empty())
    }

    pub fn current_page(&self) -> Option<usize> {
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Highlights;

    fn results_with(count: usize) -> SearchResults {
        let hits = (0..count)
            .map(|i| SearchHit {
                url: format!("https://example.com/{}", i),
                title: format!("Article {}", i),
                body: format!("Body of article {}", i),
                scraped_from: "blogs".to_string(),
                score: 1.0 - i as f64 / 100.0,
                highlights: Highlights::None,
            })
            .collect();
        SearchResults {
            hits,
            processing_time_ms: None,
        }
    }

    #[test]
    fn test_initial_state_shows_nothing() {
        let pager = ResultsPager::new();
        assert!(!pager.has_query());
        assert!(!pager.is_empty());
        assert!(pager.visible_slice().is_empty());
        assert!(pager.page_label().is_none());
        assert!(pager.current_page().is_none());
    }

    #[test]
    fn test_install_non_empty_lands_on_first_page() {
        let mut pager = ResultsPager::new();
        pager.install(results_with(25));
        assert_eq!(pager.current_page(), Some(0));
        assert!(pager.has_query());
        assert!(!pager.is_empty());
    }

    #[test]
    fn test_install_empty_keeps_cursor_dormant() {
        let mut pager = ResultsPager::new();
        pager.install(results_with(0));
        assert_eq!(pager.current_page(), None);
        assert!(pager.has_query());
        assert!(pager.is_empty());
        assert!(pager.visible_slice().is_empty());
        assert!(pager.page_label().is_none());
    }

    #[test]
    fn test_install_overwrites_previous_results() {
        let mut pager = ResultsPager::new();
        pager.install(results_with(25));
        pager.next();
        assert_eq!(pager.current_page(), Some(1));

        pager.install(results_with(5));
        assert_eq!(pager.current_page(), Some(0));
        assert_eq!(pager.visible_slice().len(), 5);

        pager.install(results_with(0));
        assert_eq!(pager.current_page(), None);
    }

    #[test]
    fn test_visible_slice_windows() {
        let mut pager = ResultsPager::new();
        pager.install(results_with(30));

        assert_eq!(pager.visible_slice().len(), PAGE_SIZE);
        assert_eq!(pager.visible_slice()[0].title, "Article 0");
        assert_eq!(pager.offset(), 0);

        pager.next();
        assert_eq!(pager.visible_slice().len(), PAGE_SIZE);
        assert_eq!(pager.visible_slice()[0].title, "Article 10");
        assert_eq!(pager.offset(), 10);

        pager.next();
        assert_eq!(pager.visible_slice().len(), PAGE_SIZE);
        assert_eq!(pager.visible_slice()[0].title, "Article 20");
        assert_eq!(pager.offset(), 20);
    }

    #[test]
    fn test_next_stops_at_max_page() {
        let mut pager = ResultsPager::new();
        pager.install(results_with(30));
        for _ in 0..5 {
            pager.next();
        }
        assert_eq!(pager.current_page(), Some(MAX_PAGE));
    }

    #[test]
    fn test_previous_stops_at_first_page() {
        let mut pager = ResultsPager::new();
        pager.install(results_with(30));
        pager.previous();
        assert_eq!(pager.current_page(), Some(0));
    }

    #[test]
    fn test_navigation_noop_before_first_query() {
        let mut pager = ResultsPager::new();
        pager.next();
        pager.previous();
        assert_eq!(pager.current_page(), None);
    }

    #[test]
    fn test_page_label_is_one_based() {
        let mut pager = ResultsPager::new();
        pager.install(results_with(30));
        assert_eq!(pager.page_label().as_deref(), Some("1"));
        pager.next();
        assert_eq!(pager.page_label().as_deref(), Some("2"));
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut pager = ResultsPager::new();
        pager.install(results_with(12));
        pager.next();
        pager.reset();
        assert!(!pager.has_query());
        assert!(pager.visible_slice().is_empty());
        assert_eq!(pager.current_page(), None);
    }

    #[test]
    fn test_short_tail_page() {
        let mut pager = ResultsPager::new();
        pager.install(results_with(25));
        assert_eq!(pager.visible_slice().len(), 10);
        pager.next();
        pager.next();
        assert_eq!(pager.current_page(), Some(2));
        assert_eq!(pager.visible_slice().len(), 5);
        pager.next();
        assert_eq!(pager.current_page(), Some(2));
        assert_eq!(pager.visible_slice().len(), 5);
    }
}
