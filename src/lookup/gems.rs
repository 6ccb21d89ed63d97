//! # Gem Finder
//!
//! Runs the fixed "hidden gems" search and keeps at most `limit` results in
//! the order the search service ranked them.
//!
//! An upstream failure and "no gems here" both come back as an empty list.
//! The difference is only visible through `Fetched::failure` and the log.

use std::sync::Arc;

use log::{info, warn};

use crate::lookup::{Fetched, GemRecord, PlaceSearch, SearchQuery};

pub struct GemFinder {
    search: Arc<dyn PlaceSearch>,
}

impl GemFinder {
    pub fn new(search: Arc<dyn PlaceSearch>) -> Self {
        Self { search }
    }

    pub async fn find_gems(&self, location: &str, limit: usize) -> Fetched<Vec<GemRecord>> {
        let location = location.trim();
        if location.is_empty() || limit == 0 {
            return Fetched::ok(Vec::new());
        }

        let query = SearchQuery::hidden_gems(location, limit);
        match self.search.search(&query).await {
            Ok(businesses) => {
                let gems: Vec<GemRecord> = businesses
                    .into_iter()
                    .take(limit)
                    .map(GemRecord::from)
                    .collect();
                info!(
                    "{} found {} gems near '{}'",
                    self.search.name(),
                    gems.len(),
                    location
                );
                Fetched::ok(gems)
            }
            Err(e) => {
                warn!("Gem search near '{}' failed: {}", location, e);
                Fetched::failed(Vec::new(), e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupError;
    use crate::test_support::FakeSearch;

    #[test]
    fn test_find_gems_passes_limit_upstream() {
        let search = Arc::new(FakeSearch::with_names(&["A", "B"]));
        let finder = GemFinder::new(search.clone());
        let found = tokio_test::block_on(finder.find_gems("Oslo", 3));
        assert_eq!(found.value.len(), 2);
        assert_eq!(search.last_query().unwrap().limit, 3);
        assert_eq!(search.last_query().unwrap().location, "Oslo");
    }

    #[test]
    fn test_find_gems_truncates_oversized_pages() {
        let finder = GemFinder::new(Arc::new(FakeSearch::with_names(&["1", "2", "3", "4"])));
        let found = tokio_test::block_on(finder.find_gems("Rome", 2));
        let names: Vec<_> = found.value.iter().map(|g| g.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["1", "2"]);
        assert!(found.failure.is_none());
    }

    #[test]
    fn test_find_gems_blank_location_sends_nothing() {
        let search = Arc::new(FakeSearch::with_names(&["A"]));
        let finder = GemFinder::new(search.clone());
        let found = tokio_test::block_on(finder.find_gems("  ", 5));
        assert!(found.value.is_empty());
        assert!(search.last_query().is_none());
    }

    #[test]
    fn test_find_gems_failure_is_empty_with_reason() {
        let finder = GemFinder::new(Arc::new(FakeSearch::failing(LookupError::Config(
            "no key".into(),
        ))));
        let found = tokio_test::block_on(finder.find_gems("Rome", 5));
        assert!(found.value.is_empty());
        assert!(matches!(found.failure, Some(LookupError::Config(_))));
    }
}
