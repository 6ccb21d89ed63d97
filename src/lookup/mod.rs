pub mod countries;
pub mod explore;
pub mod gems;
pub mod providers;
pub mod service;
pub mod types;

pub use countries::CountryInfoResolver;
pub use explore::{Exploration, Lookups};
pub use gems::GemFinder;
pub use providers::{RestCountriesClient, YelpClient};
pub use service::{CountryDirectory, Fetched, LookupError, PlaceSearch};
pub use types::{
    CountryPin, CountryRecord, Currency, GemRecord, RawBusiness, RawCountry, SearchQuery,
    SearchResponse, DEFAULT_GEM_LIMIT, NOT_AVAILABLE,
};
