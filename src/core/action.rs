//! # Actions
//!
//! Everything that can happen in Treasure Hunter becomes an `Action`.
//! User presses Ctrl+F? That's `Action::AddFavorite`.
//! The country directory answers? That's `Action::Explored { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing any I/O the adapter must start.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::Page;
use crate::core::selection::FavoriteChange;
use crate::core::state::{App, GemSearch};
use crate::lookup::{CountryPin, Exploration, Fetched, GemRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    DismissWelcome,
    /// Search box submitted on the home page.
    SubmitCountry(String),
    Randomize,
    ClearSelection,
    /// Favorite the current selection.
    AddFavorite,
    /// Unfavorite the current selection.
    RemoveFavorite,
    /// Unfavorite from the sidebar.
    RemoveFavoriteNamed(String),
    /// Search box submitted on the Hidden Gems page.
    SubmitGemLocation(String),
    SwitchPage(Page),
    CountriesLoaded(Fetched<Vec<CountryPin>>),
    Explored {
        name: String,
        exploration: Exploration,
    },
    GemsFound {
        location: String,
        gems: Fetched<Vec<GemRecord>>,
    },
    Quit,
}

/// I/O the adapter has to perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    LoadCountries,
    Explore(String),
    FindGems(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::DismissWelcome => {
            if app.selection.first_visit() {
                app.selection.dismiss_welcome();
                app.status_message = String::from("Allons-y!");
            }
            request_countries(app)
        }
        Action::SubmitCountry(name) => {
            app.selection.select_country(&name);
            explore_selection(app)
        }
        Action::Randomize => {
            let names: Vec<&str> = app.countries.iter().map(|p| p.name.as_str()).collect();
            let picked = app
                .selection
                .randomize_selection(&names, &mut app.rng)
                .map(str::to_string);
            match picked {
                Some(name) => {
                    debug!("Randomly landed on {}", name);
                    explore_selection(app)
                }
                None => {
                    app.status_message = String::from("No countries to pick from yet.");
                    request_countries(app)
                }
            }
        }
        Action::ClearSelection => {
            app.selection.clear_selection();
            reset_country_view(app);
            app.status_message = String::from("Selection cleared.");
            Effect::None
        }
        Action::AddFavorite => {
            let Some(name) = app.selection.current_country().map(str::to_string) else {
                app.status_message = String::from("Select a country first.");
                return Effect::None;
            };
            app.status_message = match app.selection.add_favorite(&name) {
                FavoriteChange::Added => format!("Added {name} to favorites!"),
                _ => String::from("Country already in favorites."),
            };
            Effect::None
        }
        Action::RemoveFavorite => {
            let Some(name) = app.selection.current_country().map(str::to_string) else {
                app.status_message = String::from("Select a country first.");
                return Effect::None;
            };
            app.status_message = unfavorite_message(app.selection.remove_favorite(&name), &name);
            Effect::None
        }
        Action::RemoveFavoriteNamed(name) => {
            app.status_message = unfavorite_message(app.selection.remove_favorite(&name), &name);
            Effect::None
        }
        Action::SubmitGemLocation(location) => {
            let location = location.trim().to_string();
            if location.is_empty() {
                app.gem_search = None;
                app.pending.gems = None;
                app.status_message = String::from("Enter a location to find hidden gems.");
                return Effect::None;
            }
            app.gem_search = None;
            app.pending.gems = Some(location.clone());
            app.status_message = String::from("Hunting the treasures...");
            Effect::FindGems(location)
        }
        Action::SwitchPage(page) => {
            app.page = page;
            app.status_message = page.label().to_string();
            Effect::None
        }
        Action::CountriesLoaded(fetched) => {
            app.pending.countries = false;
            match fetched.failure {
                Some(e) => {
                    app.status_message = format!("Error fetching countries data: {e}");
                }
                None => {
                    app.countries = fetched.value;
                    app.countries_loaded = true;
                    app.status_message = format!("{} countries on the map.", app.countries.len());
                }
            }
            Effect::None
        }
        Action::Explored { name, exploration } => {
            if app.pending.explore.as_deref() != Some(name.as_str()) {
                debug!("Dropping stale country result for {}", name);
                return Effect::None;
            }
            app.pending.explore = None;

            let Exploration { record, gems } = exploration;
            app.status_message = if record.is_unavailable() {
                format!("No information found for {name}.")
            } else if gems.failure.is_some() {
                format!("Information about {name}. Hidden gems are unavailable right now.")
            } else {
                format!("Information about {name}.")
            };
            app.country = Some(record);
            app.nearby_gems = gems.value;
            Effect::None
        }
        Action::GemsFound { location, gems } => {
            if app.pending.gems.as_deref() != Some(location.as_str()) {
                debug!("Dropping stale gem result for {}", location);
                return Effect::None;
            }
            app.pending.gems = None;

            let upstream_failed = gems.failure.is_some();
            app.status_message = if upstream_failed {
                String::from("Treasure Hunter is empty handed :(")
            } else if gems.value.is_empty() {
                String::from(
                    "That's a great choice :). But unfortunately, we don't have enough information on this location yet.",
                )
            } else {
                format!("Found them! Treasure spots for you to visit in {location}:")
            };
            app.gem_search = Some(GemSearch {
                location,
                gems: gems.value,
                upstream_failed,
            });
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Starts the country-list fetch unless it already succeeded or is running.
fn request_countries(app: &mut App) -> Effect {
    if app.countries_loaded || app.pending.countries {
        return Effect::None;
    }
    app.pending.countries = true;
    Effect::LoadCountries
}

/// Fetches facts and gems for whatever is selected now.
fn explore_selection(app: &mut App) -> Effect {
    reset_country_view(app);
    match app.selection.current_country().map(str::to_string) {
        Some(name) => {
            app.status_message = format!("Looking up {name}...");
            app.pending.explore = Some(name.clone());
            Effect::Explore(name)
        }
        None => {
            app.status_message = String::from("Enter a destination to get started.");
            Effect::None
        }
    }
}

fn reset_country_view(app: &mut App) {
    app.country = None;
    app.nearby_gems.clear();
    app.pending.explore = None;
}

fn unfavorite_message(change: FavoriteChange, name: &str) -> String {
    match change {
        FavoriteChange::Removed => format!("Removed {name} from favorites."),
        _ => String::from("Country not in favorites."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{CountryRecord, LookupError};
    use crate::test_support::test_app;

    fn pins(names: &[&str]) -> Vec<CountryPin> {
        names
            .iter()
            .map(|n| CountryPin {
                name: n.to_string(),
                latitude: 10.0,
                longitude: 20.0,
            })
            .collect()
    }

    fn gem(name: &str) -> GemRecord {
        GemRecord {
            name: Some(name.to_string()),
            rating: Some(4.5),
            display_address: vec!["1 Rue".to_string()],
        }
    }

    fn japan() -> CountryRecord {
        CountryRecord {
            name: Some("Japan".to_string()),
            capital: Some("Tokyo".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_dismiss_welcome_requests_country_list_once() {
        let mut app = crate::core::state::App::new(rand::SeedableRng::seed_from_u64(3));
        assert_eq!(update(&mut app, Action::DismissWelcome), Effect::LoadCountries);
        assert!(!app.selection.first_visit());
        // Still pending: no second request
        assert_eq!(update(&mut app, Action::DismissWelcome), Effect::None);
    }

    #[test]
    fn test_failed_country_list_is_retried() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::DismissWelcome), Effect::LoadCountries);
        let failed = Fetched::failed(Vec::new(), LookupError::Network("offline".into()));
        update(&mut app, Action::CountriesLoaded(failed));
        assert!(app.status_message.starts_with("Error fetching countries data"));
        assert!(!app.countries_loaded);
        assert_eq!(update(&mut app, Action::Randomize), Effect::LoadCountries);
    }

    #[test]
    fn test_loaded_country_list_is_kept() {
        let mut app = test_app();
        update(&mut app, Action::DismissWelcome);
        update(&mut app, Action::CountriesLoaded(Fetched::ok(pins(&["Chad", "Niger"]))));
        assert!(app.countries_loaded);
        assert_eq!(app.countries.len(), 2);
        assert_eq!(update(&mut app, Action::DismissWelcome), Effect::None);
    }

    #[test]
    fn test_submit_country_explores() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SubmitCountry("Japan".into()));
        assert_eq!(effect, Effect::Explore("Japan".into()));
        assert_eq!(app.selection.current_country(), Some("Japan"));
        assert!(app.is_loading());
    }

    #[test]
    fn test_submit_blank_country_clears() {
        let mut app = test_app();
        update(&mut app, Action::SubmitCountry("Japan".into()));
        assert_eq!(update(&mut app, Action::SubmitCountry("".into())), Effect::None);
        assert_eq!(app.selection.current_country(), None);
        assert!(!app.is_loading());
    }

    #[test]
    fn test_explored_result_is_stored() {
        let mut app = test_app();
        update(&mut app, Action::SubmitCountry("Japan".into()));
        update(
            &mut app,
            Action::Explored {
                name: "Japan".into(),
                exploration: Exploration {
                    record: japan(),
                    gems: Fetched::ok(vec![gem("Sushi Dai")]),
                },
            },
        );
        assert_eq!(app.country, Some(japan()));
        assert_eq!(app.nearby_gems.len(), 1);
        assert_eq!(app.status_message, "Information about Japan.");
        assert!(!app.is_loading());
    }

    #[test]
    fn test_stale_explored_result_is_dropped() {
        let mut app = test_app();
        update(&mut app, Action::SubmitCountry("Japan".into()));
        update(&mut app, Action::SubmitCountry("Peru".into()));
        update(
            &mut app,
            Action::Explored {
                name: "Japan".into(),
                exploration: Exploration {
                    record: japan(),
                    gems: Fetched::ok(vec![]),
                },
            },
        );
        assert_eq!(app.country, None);
        assert_eq!(app.pending.explore.as_deref(), Some("Peru"));
    }

    #[test]
    fn test_unknown_country_status() {
        let mut app = test_app();
        update(&mut app, Action::SubmitCountry("Wakanda".into()));
        update(
            &mut app,
            Action::Explored {
                name: "Wakanda".into(),
                exploration: Exploration {
                    record: CountryRecord::unavailable(),
                    gems: Fetched::ok(vec![]),
                },
            },
        );
        assert_eq!(app.status_message, "No information found for Wakanda.");
        assert_eq!(app.country, Some(CountryRecord::unavailable()));
    }

    #[test]
    fn test_randomize_lands_in_pool() {
        let mut app = test_app();
        update(&mut app, Action::CountriesLoaded(Fetched::ok(pins(&["Chad", "Niger", "Mali"]))));
        let Effect::Explore(name) = update(&mut app, Action::Randomize) else {
            panic!("randomize should explore");
        };
        assert!(["Chad", "Niger", "Mali"].contains(&name.as_str()));
        assert_eq!(app.selection.current_country(), Some(name.as_str()));
    }

    #[test]
    fn test_randomize_without_pool_keeps_selection() {
        let mut app = test_app();
        app.countries_loaded = true;
        update(&mut app, Action::SubmitCountry("Chad".into()));
        assert_eq!(update(&mut app, Action::Randomize), Effect::None);
        assert_eq!(app.selection.current_country(), Some("Chad"));
        assert_eq!(app.status_message, "No countries to pick from yet.");
    }

    #[test]
    fn test_clear_selection_resets_view() {
        let mut app = test_app();
        update(&mut app, Action::SubmitCountry("Japan".into()));
        app.country = Some(japan());
        app.nearby_gems = vec![gem("A")];
        update(&mut app, Action::ClearSelection);
        assert_eq!(app.selection.current_country(), None);
        assert!(app.country.is_none());
        assert!(app.nearby_gems.is_empty());
        assert!(!app.is_loading());
    }

    #[test]
    fn test_favorite_messages() {
        let mut app = test_app();
        update(&mut app, Action::AddFavorite);
        assert_eq!(app.status_message, "Select a country first.");

        update(&mut app, Action::SubmitCountry("Japan".into()));
        update(&mut app, Action::AddFavorite);
        assert_eq!(app.status_message, "Added Japan to favorites!");
        update(&mut app, Action::AddFavorite);
        assert_eq!(app.status_message, "Country already in favorites.");
        assert_eq!(app.selection.favorite_count(), 1);

        update(&mut app, Action::RemoveFavorite);
        assert_eq!(app.status_message, "Removed Japan from favorites.");
        update(&mut app, Action::RemoveFavorite);
        assert_eq!(app.status_message, "Country not in favorites.");
    }

    #[test]
    fn test_remove_favorite_named() {
        let mut app = test_app();
        app.selection.add_favorite("Chile");
        update(&mut app, Action::RemoveFavoriteNamed("Chile".into()));
        assert_eq!(app.selection.favorite_count(), 0);
        update(&mut app, Action::RemoveFavoriteNamed("Chile".into()));
        assert_eq!(app.status_message, "Country not in favorites.");
    }

    #[test]
    fn test_gem_search_outcomes() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::SubmitGemLocation(" Paris ".into())),
            Effect::FindGems("Paris".into())
        );

        update(
            &mut app,
            Action::GemsFound {
                location: "Paris".into(),
                gems: Fetched::ok(vec![gem("Chez Janou")]),
            },
        );
        let search = app.gem_search.clone().unwrap();
        assert_eq!(search.gems.len(), 1);
        assert!(!search.upstream_failed);
        assert!(app.status_message.starts_with("Found them!"));

        update(&mut app, Action::SubmitGemLocation("Nowhere".into()));
        update(
            &mut app,
            Action::GemsFound {
                location: "Nowhere".into(),
                gems: Fetched::failed(vec![], LookupError::Api { status: 400, message: "bad".into() }),
            },
        );
        let search = app.gem_search.clone().unwrap();
        assert!(search.gems.is_empty());
        assert!(search.upstream_failed);
        assert_eq!(app.status_message, "Treasure Hunter is empty handed :(");
    }

    #[test]
    fn test_stale_gem_result_is_dropped() {
        let mut app = test_app();
        update(&mut app, Action::SubmitGemLocation("Paris".into()));
        update(&mut app, Action::SubmitGemLocation("Lyon".into()));
        update(
            &mut app,
            Action::GemsFound {
                location: "Paris".into(),
                gems: Fetched::ok(vec![gem("A")]),
            },
        );
        assert!(app.gem_search.is_none());
        assert_eq!(app.pending.gems.as_deref(), Some("Lyon"));
    }

    #[test]
    fn test_new_gem_search_hides_previous_results() {
        let mut app = test_app();
        update(&mut app, Action::SubmitGemLocation("Paris".into()));
        update(
            &mut app,
            Action::GemsFound {
                location: "Paris".into(),
                gems: Fetched::ok(vec![gem("Chez Janou")]),
            },
        );
        assert!(app.gem_search.is_some());

        update(&mut app, Action::SubmitGemLocation("Lyon".into()));
        assert!(app.gem_search.is_none());
        assert_eq!(app.pending.gems.as_deref(), Some("Lyon"));
    }

    #[test]
    fn test_switch_page_and_quit() {
        let mut app = test_app();
        update(&mut app, Action::SwitchPage(Page::HiddenGems));
        assert_eq!(app.page, Page::HiddenGems);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
