//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};

use crate::core::state::App;
use crate::lookup::{
    CountryDirectory, LookupError, PlaceSearch, RawBusiness, RawCountry, SearchQuery,
};

/// An in-memory directory. Lookups match `name.common` case-insensitively.
#[derive(Default)]
pub struct FakeDirectory {
    countries: Vec<Value>,
    failure: Option<LookupError>,
    calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn with_countries(countries: Vec<Value>) -> Self {
        Self {
            countries,
            ..Default::default()
        }
    }

    pub fn failing(failure: LookupError) -> Self {
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    /// Number of requests that reached the directory.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryDirectory for FakeDirectory {
    fn name(&self) -> &str {
        "fake-directory"
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<RawCountry>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        let found = self.countries.iter().find(|c| {
            c["name"]["common"]
                .as_str()
                .is_some_and(|common| common.eq_ignore_ascii_case(name))
        });
        Ok(found.map(|c| serde_json::from_value(c.clone()).unwrap()))
    }

    async fn all_countries(&self) -> Result<Vec<RawCountry>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        Ok(self
            .countries
            .iter()
            .map(|c| serde_json::from_value(c.clone()).unwrap())
            .collect())
    }
}

/// A search that returns a fixed page of businesses and records the last query.
#[derive(Default)]
pub struct FakeSearch {
    businesses: Vec<Value>,
    failure: Option<LookupError>,
    last_query: Mutex<Option<SearchQuery>>,
}

impl FakeSearch {
    pub fn with_names(names: &[&str]) -> Self {
        let businesses = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                json!({
                    "name": name,
                    "rating": 5.0 - i as f64 * 0.5,
                    "location": {"display_address": [format!("{} Main St", i + 1)]}
                })
            })
            .collect();
        Self {
            businesses,
            ..Default::default()
        }
    }

    pub fn failing(failure: LookupError) -> Self {
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    pub fn last_query(&self) -> Option<SearchQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaceSearch for FakeSearch {
    fn name(&self) -> &str {
        "fake-search"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawBusiness>, LookupError> {
        *self.last_query.lock().unwrap() = Some(query.clone());
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        Ok(self
            .businesses
            .iter()
            .map(|b| serde_json::from_value(b.clone()).unwrap())
            .collect())
    }
}

/// Creates a test App past the welcome page with a seeded RNG.
pub fn test_app() -> App {
    let mut app = App::new(StdRng::seed_from_u64(7));
    app.selection.dismiss_welcome();
    app
}
