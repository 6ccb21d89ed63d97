//! Country facts and nearby gems for one place, fetched side by side.

use crate::lookup::{CountryInfoResolver, CountryRecord, Fetched, GemFinder, GemRecord};

/// Everything the home page shows about one country.
#[derive(Debug, Clone, PartialEq)]
pub struct Exploration {
    pub record: CountryRecord,
    pub gems: Fetched<Vec<GemRecord>>,
}

/// The two lookups a session talks to, shared by every spawned request.
pub struct Lookups {
    pub countries: CountryInfoResolver,
    pub gems: GemFinder,
    pub gem_limit: usize,
}

impl Lookups {
    pub fn new(countries: CountryInfoResolver, gems: GemFinder, gem_limit: usize) -> Self {
        Self {
            countries,
            gems,
            gem_limit,
        }
    }

    /// Resolves the country and searches for gems in it concurrently.
    /// The two requests share no data, so neither waits on the other.
    pub async fn explore(&self, name: &str) -> Exploration {
        let (record, gems) = tokio::join!(
            self.countries.resolve(name),
            self.gems.find_gems(name, self.gem_limit)
        );
        Exploration { record, gems }
    }

    pub async fn find_gems(&self, location: &str) -> Fetched<Vec<GemRecord>> {
        self.gems.find_gems(location, self.gem_limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupError;
    use crate::test_support::{FakeDirectory, FakeSearch};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_explore_combines_both_lookups() {
        let lookups = Lookups::new(
            CountryInfoResolver::new(Arc::new(FakeDirectory::with_countries(vec![
                json!({"name": {"common": "Italy"}, "capital": ["Rome"]}),
            ]))),
            GemFinder::new(Arc::new(FakeSearch::with_names(&["Trattoria"]))),
            5,
        );

        let exploration = tokio_test::block_on(lookups.explore("Italy"));
        assert_eq!(exploration.record.capital.as_deref(), Some("Rome"));
        assert_eq!(exploration.gems.value.len(), 1);
    }

    #[test]
    fn test_explore_failures_are_independent() {
        let lookups = Lookups::new(
            CountryInfoResolver::new(Arc::new(FakeDirectory::with_countries(vec![
                json!({"name": {"common": "Italy"}}),
            ]))),
            GemFinder::new(Arc::new(FakeSearch::failing(LookupError::Api {
                status: 500,
                message: "boom".into(),
            }))),
            5,
        );

        let exploration = tokio_test::block_on(lookups.explore("Italy"));
        assert_eq!(exploration.record.name.as_deref(), Some("Italy"));
        assert!(exploration.gems.value.is_empty());
        assert!(exploration.gems.failure.is_some());
    }
}
