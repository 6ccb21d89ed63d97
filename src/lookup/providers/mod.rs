pub mod restcountries;
pub mod yelp;

pub use restcountries::{DEFAULT_COUNTRIES_BASE_URL, RestCountriesClient};
pub use yelp::{DEFAULT_YELP_BASE_URL, YelpClient};
