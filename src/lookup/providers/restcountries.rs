//! REST Countries (v3.1) directory client.
//!
//! - `GET {base}/name/{name}?fullText=true` for exact-name lookups. The service
//!   answers 404 when nothing matches, which is "no match", not an error.
//! - `GET {base}/all?fields=name,latlng` for the country list. The bulk endpoint
//!   requires an explicit field list.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{StatusCode, Url};
use serde_json::Value;

use crate::lookup::{CountryDirectory, LookupError, RawCountry};

pub const DEFAULT_COUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from the bulk endpoint (enough for map pins).
const LIST_FIELDS: &str = "name,latlng";

pub struct RestCountriesClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesClient {
    pub fn new(base_url: Option<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_COUNTRIES_BASE_URL.to_string()),
            client,
        }
    }

    /// Builds `{base}/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::Config(format!("bad countries base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::Config("countries base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Option<Value>, LookupError> {
        debug!("REST Countries request: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        debug!("REST Countries response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("REST Countries API error: {} - {}", status.as_u16(), err_body);
            return Err(LookupError::Api {
                status: status.as_u16(),
                message: err_body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;
        Ok(Some(body))
    }
}

#[async_trait]
impl CountryDirectory for RestCountriesClient {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<RawCountry>, LookupError> {
        let mut url = self.endpoint(&["name", name])?;
        url.query_pairs_mut().append_pair("fullText", "true");

        let Some(body) = self.get_json(url).await? else {
            info!("No country named '{}'", name);
            return Ok(None);
        };

        let Value::Array(matches) = body else {
            return Err(LookupError::Parse(format!(
                "expected a list of countries for '{name}'"
            )));
        };

        match matches.into_iter().next() {
            Some(first) => serde_json::from_value(first)
                .map(Some)
                .map_err(|e| LookupError::Parse(e.to_string())),
            None => Ok(None),
        }
    }

    async fn all_countries(&self) -> Result<Vec<RawCountry>, LookupError> {
        let mut url = self.endpoint(&["all"])?;
        url.query_pairs_mut().append_pair("fields", LIST_FIELDS);

        let Some(body) = self.get_json(url).await? else {
            return Err(LookupError::Api {
                status: StatusCode::NOT_FOUND.as_u16(),
                message: "country list endpoint not found".to_string(),
            });
        };

        let Value::Array(entries) = body else {
            return Err(LookupError::Parse("expected a list of countries".to_string()));
        };

        let total = entries.len();
        let countries: Vec<RawCountry> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();

        if countries.len() < total {
            debug!("Skipped {} undecodable country entries", total - countries.len());
        }
        info!("REST Countries returned {} countries", countries.len());
        Ok(countries)
    }
}
