//! # Application State
//!
//! Core session state for Treasure Hunter. Domain data only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── selection: SelectionState        // current country, favorites, first visit
//! ├── page: Page                       // Home or Hidden Gems
//! ├── countries: Vec<CountryPin>       // map pins + random pool (once per session)
//! ├── countries_loaded: bool           // list fetched successfully
//! ├── country: Option<CountryRecord>   // facts for the current selection
//! ├── nearby_gems: Vec<GemRecord>      // gems shown under the facts
//! ├── gem_search: Option<GemSearch>    // Hidden Gems page results
//! ├── pending: Pending                 // what is being fetched right now
//! ├── status_message: String           // status bar text
//! └── rng: StdRng                      // random country picks
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Page;
use crate::core::config::ResolvedConfig;
use crate::core::selection::SelectionState;
use crate::lookup::{CountryPin, CountryRecord, GemRecord};

/// Results of the last search on the Hidden Gems page.
#[derive(Debug, Clone, PartialEq)]
pub struct GemSearch {
    pub location: String,
    pub gems: Vec<GemRecord>,
    /// True when the search service could not be used (as opposed to "no matches").
    pub upstream_failed: bool,
}

/// Requests in flight. Results that no longer match are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pending {
    pub countries: bool,
    pub explore: Option<String>,
    pub gems: Option<String>,
}

impl Pending {
    pub fn any(&self) -> bool {
        self.countries || self.explore.is_some() || self.gems.is_some()
    }
}

pub struct App {
    pub selection: SelectionState,
    pub page: Page,
    pub countries: Vec<CountryPin>,
    pub countries_loaded: bool,
    pub country: Option<CountryRecord>,
    pub nearby_gems: Vec<GemRecord>,
    pub gem_search: Option<GemSearch>,
    pub pending: Pending,
    pub status_message: String,
    pub rng: StdRng,
}

impl App {
    pub fn new(rng: StdRng) -> Self {
        Self {
            selection: SelectionState::new(),
            page: Page::default(),
            countries: Vec::new(),
            countries_loaded: false,
            country: None,
            nearby_gems: Vec::new(),
            gem_search: None,
            pending: Pending::default(),
            status_message: String::from("Welcome to Treasure Hunter!"),
            rng,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(StdRng::from_entropy());
        app.page = config.start_page;
        if !config.show_welcome {
            app.selection.dismiss_welcome();
        }
        app
    }

    pub fn is_loading(&self) -> bool {
        self.pending.any()
    }

    /// The map pin of the selected country, if the list knows it.
    pub fn selected_pin(&self) -> Option<&CountryPin> {
        let current = self.selection.current_country()?;
        self.countries
            .iter()
            .find(|pin| pin.name.eq_ignore_ascii_case(current))
    }

    pub fn country_names(&self) -> Vec<&str> {
        self.countries.iter().map(|pin| pin.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(StdRng::seed_from_u64(0));
        assert_eq!(app.status_message, "Welcome to Treasure Hunter!");
        assert!(app.selection.first_visit());
        assert!(!app.is_loading());
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn test_selected_pin_ignores_case() {
        let mut app = test_app();
        app.countries = vec![CountryPin {
            name: "New Zealand".to_string(),
            latitude: -41.0,
            longitude: 174.0,
        }];
        app.selection.select_country("new zealand");
        assert_eq!(app.selected_pin().map(|p| p.longitude), Some(174.0));
        app.selection.select_country("Atlantis");
        assert!(app.selected_pin().is_none());
    }
}
