use std::fmt;

use async_trait::async_trait;

use super::types::{RawBusiness, RawCountry, SearchQuery};

/// Errors that can occur while talking to an upstream service.
/// None of these reach the UI as faults: the resolvers turn them into
/// sentinel/empty values and keep the error only as a diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Client misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body did not have the expected shape.
    Parse(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Config(msg) => write!(f, "config error: {msg}"),
            LookupError::Network(msg) => write!(f, "network error: {msg}"),
            LookupError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            LookupError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LookupError::Parse(e.to_string())
        } else {
            LookupError::Network(e.to_string())
        }
    }
}

/// A value that is always well-formed, plus the reason it may be empty.
///
/// `failure` is `None` both for real results and for a legitimate
/// "zero matches"; it is only set when the upstream could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub value: T,
    pub failure: Option<LookupError>,
}

impl<T> Fetched<T> {
    pub fn ok(value: T) -> Self {
        Self { value, failure: None }
    }

    pub fn failed(value: T, failure: LookupError) -> Self {
        Self {
            value,
            failure: Some(failure),
        }
    }
}

/// A directory of countries (REST Countries in production).
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// Returns the name of the directory service.
    fn name(&self) -> &str;

    /// Exact-name lookup. `Ok(None)` means the service has no such country.
    async fn find_by_name(&self, name: &str) -> Result<Option<RawCountry>, LookupError>;

    /// Every known country, in the order the service returns them.
    async fn all_countries(&self) -> Result<Vec<RawCountry>, LookupError>;
}

/// A local business search (Yelp in production).
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Returns the name of the search service.
    fn name(&self) -> &str;

    /// Runs one search and returns the first page of businesses as received.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawBusiness>, LookupError>;
}
