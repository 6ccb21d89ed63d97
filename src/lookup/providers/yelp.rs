//! Yelp Fusion business search client.
//!
//! One `GET {base}/businesses/search` per query, bearer-token auth, first page only.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::lookup::{LookupError, PlaceSearch, RawBusiness, SearchQuery, SearchResponse};

pub const DEFAULT_YELP_BASE_URL: &str = "https://api.yelp.com/v3";

pub struct YelpClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl YelpClient {
    /// `api_key` must come from config or the environment; there is no built-in key.
    pub fn new(api_key: Option<String>, base_url: Option<String>, client: reqwest::Client) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_YELP_BASE_URL.to_string()),
            client,
        }
    }
}

#[async_trait]
impl PlaceSearch for YelpClient {
    fn name(&self) -> &str {
        "yelp"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawBusiness>, LookupError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            LookupError::Config(
                "Yelp API key must be set (config file or YELP_API_KEY env var)".to_string(),
            )
        })?;

        info!(
            "Yelp search: location='{}', limit={}",
            query.location, query.limit
        );

        let radius = query.radius_meters.to_string();
        let limit = query.limit.to_string();
        let response = self
            .client
            .get(format!("{}/businesses/search", self.base_url.trim_end_matches('/')))
            .header("Authorization", format!("Bearer {}", api_key))
            .query(&[
                ("term", query.term),
                ("location", query.location.as_str()),
                ("categories", query.categories),
                ("sort_by", query.sort_by),
                ("radius", radius.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        debug!("Yelp response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Yelp API error: {} - {}", status, err_body);
            return Err(LookupError::Api {
                status,
                message: err_body,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        debug!("Yelp returned {} businesses", body.businesses.len());
        Ok(body.businesses)
    }
}
