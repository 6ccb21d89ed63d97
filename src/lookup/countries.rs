//! # Country Info Resolver
//!
//! Turns directory lookups into `CountryRecord`s and `CountryPin`s.
//! Nothing here returns an error to the caller: a failed or empty lookup
//! becomes the all-unavailable record, a failed list becomes an empty one.

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::OnceCell;

use crate::lookup::{CountryDirectory, CountryPin, CountryRecord, Fetched, LookupError};

pub struct CountryInfoResolver {
    directory: Arc<dyn CountryDirectory>,
    // Filled on the first successful list fetch; the directory does not change mid-session.
    country_list: OnceCell<Vec<CountryPin>>,
}

impl CountryInfoResolver {
    pub fn new(directory: Arc<dyn CountryDirectory>) -> Self {
        Self {
            directory,
            country_list: OnceCell::new(),
        }
    }

    /// Exact-name lookup, always returning a fully constructed record.
    pub async fn resolve(&self, name: &str) -> CountryRecord {
        let name = name.trim();
        if name.is_empty() {
            return CountryRecord::unavailable();
        }

        match self.directory.find_by_name(name).await {
            Ok(Some(raw)) => {
                info!("Resolved '{}' via {}", name, self.directory.name());
                CountryRecord::from(raw)
            }
            Ok(None) => {
                info!("{} has no match for '{}'", self.directory.name(), name);
                CountryRecord::unavailable()
            }
            Err(e) => {
                warn!("Country lookup for '{}' failed: {}", name, e);
                CountryRecord::unavailable()
            }
        }
    }

    /// Every country that can be pinned on the map, fetched once per session.
    pub async fn resolve_country_list(&self) -> Fetched<Vec<CountryPin>> {
        let result = self
            .country_list
            .get_or_try_init(|| async {
                let raw = self.directory.all_countries().await?;
                let pins: Vec<CountryPin> = raw.iter().filter_map(CountryPin::from_raw).collect();
                info!(
                    "Country list loaded: {} of {} entries usable",
                    pins.len(),
                    raw.len()
                );
                Ok::<_, LookupError>(pins)
            })
            .await;

        match result {
            Ok(pins) => Fetched::ok(pins.clone()),
            Err(e) => {
                warn!("Error fetching countries data: {}", e);
                Fetched::failed(Vec::new(), e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeDirectory;
    use serde_json::json;

    fn resolver(directory: FakeDirectory) -> CountryInfoResolver {
        CountryInfoResolver::new(Arc::new(directory))
    }

    #[test]
    fn test_resolve_blank_name_skips_lookup() {
        let directory = Arc::new(FakeDirectory::default());
        let resolver = CountryInfoResolver::new(directory.clone());
        let record = tokio_test::block_on(resolver.resolve("   "));
        assert!(record.is_unavailable());
        assert_eq!(directory.calls(), 0);
    }

    #[test]
    fn test_resolve_trims_the_name() {
        let directory = FakeDirectory::with_countries(vec![json!({"name": {"common": "Peru"}})]);
        let record = tokio_test::block_on(resolver(directory).resolve("  Peru "));
        assert_eq!(record.name.as_deref(), Some("Peru"));
    }

    #[test]
    fn test_resolve_failure_is_all_unavailable() {
        let directory = FakeDirectory::failing(LookupError::Network("connection refused".into()));
        let record = tokio_test::block_on(resolver(directory).resolve("Japan"));
        assert_eq!(record, CountryRecord::unavailable());
    }

    #[test]
    fn test_country_list_failure_is_not_cached() {
        let directory = Arc::new(FakeDirectory::failing(LookupError::Api {
            status: 503,
            message: "down".into(),
        }));
        let resolver = CountryInfoResolver::new(directory.clone());

        let first = tokio_test::block_on(resolver.resolve_country_list());
        assert!(first.value.is_empty());
        assert!(matches!(first.failure, Some(LookupError::Api { status: 503, .. })));

        let second = tokio_test::block_on(resolver.resolve_country_list());
        assert!(second.failure.is_some());
        assert_eq!(directory.calls(), 2);
    }

    #[test]
    fn test_country_list_is_cached_after_success() {
        let directory = Arc::new(FakeDirectory::with_countries(vec![
            json!({"name": {"common": "Chile"}, "latlng": [-30.0, -71.0]}),
            json!({"name": {"common": "Antarctica"}}),
        ]));
        let resolver = CountryInfoResolver::new(directory.clone());

        let first = tokio_test::block_on(resolver.resolve_country_list());
        let second = tokio_test::block_on(resolver.resolve_country_list());

        assert_eq!(first.value.len(), 1);
        assert_eq!(first.value[0].name, "Chile");
        assert_eq!(first, second);
        assert_eq!(directory.calls(), 1);
    }
}
