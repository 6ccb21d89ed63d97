//! # Lookup Types
//!
//! Two layers live here:
//!
//! - **Raw payloads** (`RawCountry`, `RawBusiness`): what the upstream services send.
//!   Every field is decoded leniently, so a missing or wrongly-typed field becomes
//!   `None` on its own instead of failing the whole payload.
//! - **Records** (`CountryRecord`, `GemRecord`, `CountryPin`): the stable shapes the
//!   rest of the app reads. Every field has an "unavailable" representation (`None`)
//!   and records are always fully constructed.

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// How an unavailable field is shown to the user.
pub const NOT_AVAILABLE: &str = "Not available";

/// Fixed search phrase for the local search service.
pub const HIDDEN_GEMS_TERM: &str = "hidden gems";
/// Only restaurants are searched.
pub const GEM_CATEGORY: &str = "restaurants";
/// Upstream sort order (rating, descending).
pub const GEM_SORT_BY: &str = "rating";
/// Search radius around the location, in meters.
pub const GEM_RADIUS_METERS: u32 = 20_000;
/// Default number of gems kept per search.
pub const DEFAULT_GEM_LIMIT: usize = 5;

/// Decodes a field into `Some(T)` if it has the expected shape, `None` otherwise.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// ============================================================================
// Raw country payload (REST Countries)
// ============================================================================

/// `name` is an object with `common` in v3.1, but older payloads use a bare string.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawName {
    Plain(String),
    Detailed {
        #[serde(default, deserialize_with = "lenient")]
        common: Option<String>,
    },
}

/// A field that is sometimes a scalar and sometimes a list (e.g. `capital`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn first(self) -> Option<String> {
        match self {
            OneOrMany::One(s) => Some(s),
            OneOrMany::Many(list) => list.into_iter().next(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawFlags {
    #[serde(default, deserialize_with = "lenient")]
    pub png: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
struct RawCurrency {
    #[serde(default, deserialize_with = "lenient")]
    code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    symbol: Option<String>,
}

/// Currencies come keyed by ISO code (v3.1) or as a list of objects (v2).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawCurrencies {
    Listed(Vec<Value>),
    Keyed(Map<String, Value>),
}

impl RawCurrencies {
    /// Only the first listed currency is used.
    fn first(self) -> Option<Currency> {
        match self {
            RawCurrencies::Listed(list) => {
                let raw: RawCurrency = serde_json::from_value(list.into_iter().next()?).ok()?;
                Some(Currency {
                    code: raw.code,
                    name: raw.name,
                    symbol: raw.symbol,
                })
            }
            RawCurrencies::Keyed(map) => {
                let (code, value) = map.into_iter().next()?;
                let raw: RawCurrency = serde_json::from_value(value).unwrap_or_default();
                Some(Currency {
                    code: raw.code.or(Some(code)),
                    name: raw.name,
                    symbol: raw.symbol,
                })
            }
        }
    }
}

/// One country as the directory service sends it.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawCountry {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<RawName>,
    #[serde(default, deserialize_with = "lenient")]
    pub capital: Option<OneOrMany>,
    #[serde(default, deserialize_with = "lenient")]
    pub population: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub subregion: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub flags: Option<RawFlags>,
    #[serde(default, deserialize_with = "lenient")]
    pub borders: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub languages: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub timezones: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub latlng: Option<Vec<f64>>,
    #[serde(default, deserialize_with = "lenient")]
    pub currencies: Option<RawCurrencies>,
}

impl RawCountry {
    fn display_name(&self) -> Option<String> {
        match self.name.as_ref()? {
            RawName::Plain(s) => Some(s.clone()),
            RawName::Detailed { common } => common.clone(),
        }
    }

    fn coordinates(&self) -> Option<Coordinates> {
        match self.latlng.as_deref()? {
            [latitude, longitude, ..] if latitude.is_finite() && longitude.is_finite() => {
                Some(Coordinates {
                    latitude: *latitude,
                    longitude: *longitude,
                })
            }
            _ => None,
        }
    }
}

// ============================================================================
// Country records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Currency {
    pub code: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

impl Currency {
    /// `"Japanese yen (JPY, ¥)"`, with missing parts shown as unavailable.
    pub fn label(&self) -> String {
        format!(
            "{} ({}, {})",
            or_not_available(self.name.as_deref()),
            or_not_available(self.code.as_deref()),
            or_not_available(self.symbol.as_deref()),
        )
    }
}

/// Normalized facts about one country. `None` means "not available".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryRecord {
    pub name: Option<String>,
    pub capital: Option<String>,
    pub population: Option<u64>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub flag_image_url: Option<String>,
    pub borders: Option<Vec<String>>,
    pub languages: Option<BTreeSet<String>>,
    pub timezones: Option<Vec<String>>,
    pub currency: Option<Currency>,
    pub coordinates: Option<Coordinates>,
}

impl CountryRecord {
    /// The record with every field unavailable.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// True when no field carries data.
    pub fn is_unavailable(&self) -> bool {
        *self == Self::unavailable()
    }

    /// Map position; `(0.0, 0.0)` stands for "unknown", not a real place.
    pub fn lat_lng(&self) -> (f64, f64) {
        self.coordinates
            .map(|c| (c.latitude, c.longitude))
            .unwrap_or((0.0, 0.0))
    }

    /// Label/value pairs in display order, with unavailable fields spelled out.
    pub fn facts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Capital", or_not_available(self.capital.as_deref()).to_string()),
            (
                "Population",
                self.population
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            ("Region", or_not_available(self.region.as_deref()).to_string()),
            ("Subregion", or_not_available(self.subregion.as_deref()).to_string()),
            ("Borders", join_or_not_available(self.borders.iter().flatten())),
            ("Languages", join_or_not_available(self.languages.iter().flatten())),
            ("Timezones", join_or_not_available(self.timezones.iter().flatten())),
            (
                "Currency",
                self.currency
                    .as_ref()
                    .map(Currency::label)
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            ("Flag", or_not_available(self.flag_image_url.as_deref()).to_string()),
        ]
    }
}

impl From<RawCountry> for CountryRecord {
    fn from(raw: RawCountry) -> Self {
        let name = raw.display_name();
        let coordinates = raw.coordinates();
        let languages = raw.languages.map(|map| {
            map.values()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        });

        CountryRecord {
            name,
            capital: raw.capital.and_then(OneOrMany::first),
            population: raw.population,
            region: raw.region,
            subregion: raw.subregion,
            flag_image_url: raw.flags.and_then(|f| f.png),
            borders: raw.borders,
            languages,
            timezones: raw.timezones,
            currency: raw.currencies.and_then(RawCurrencies::first),
            coordinates,
        }
    }
}

/// A country on the map and in the random pool.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryPin {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CountryPin {
    /// Only countries with a display name and a usable coordinate pair become pins.
    pub fn from_raw(raw: &RawCountry) -> Option<CountryPin> {
        let name = raw.display_name().filter(|n| !n.trim().is_empty())?;
        let coordinates = raw.coordinates()?;
        Some(CountryPin {
            name,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        })
    }
}

// ============================================================================
// Local search (Yelp)
// ============================================================================

/// Parameters of one local search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub term: &'static str,
    pub location: String,
    pub categories: &'static str,
    pub sort_by: &'static str,
    pub radius_meters: u32,
    pub limit: usize,
}

impl SearchQuery {
    /// The fixed "hidden gems" restaurant search around `location`.
    pub fn hidden_gems(location: &str, limit: usize) -> Self {
        Self {
            term: HIDDEN_GEMS_TERM,
            location: location.to_string(),
            categories: GEM_CATEGORY,
            sort_by: GEM_SORT_BY,
            radius_meters: GEM_RADIUS_METERS,
            limit,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawLocation {
    #[serde(default, deserialize_with = "lenient")]
    pub display_address: Option<Vec<String>>,
}

/// One business as the search service sends it.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawBusiness {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<RawLocation>,
}

/// Envelope of a search response.
#[derive(Deserialize, Debug, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub businesses: Vec<RawBusiness>,
}

/// A nearby point of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct GemRecord {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub display_address: Vec<String>,
}

impl GemRecord {
    pub fn address_line(&self) -> String {
        if self.display_address.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.display_address.join(", ")
        }
    }
}

impl From<RawBusiness> for GemRecord {
    fn from(raw: RawBusiness) -> Self {
        GemRecord {
            name: raw.name,
            rating: raw.rating,
            display_address: raw
                .location
                .and_then(|l| l.display_address)
                .unwrap_or_default(),
        }
    }
}

// ============================================================================
// Display helpers
// ============================================================================

pub fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

fn join_or_not_available<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let joined = items.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}
