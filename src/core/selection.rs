//! # Selection State
//!
//! The current country, the favorites set, and the first-visit flag.
//!
//! ```text
//! SelectionState
//! ├── current_country: Option<String>   // None = nothing selected
//! ├── favorites: BTreeSet<String>       // membership only
//! └── first_visit: bool                 // true until the welcome page is dismissed
//! ```
//!
//! Every transition is total. Preconditions that don't hold turn the call into
//! a no-op, and the favorite operations report which branch they took.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;

/// What a favorite/unfavorite call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    AlreadyPresent,
    Removed,
    NotPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    current_country: Option<String>,
    favorites: BTreeSet<String>,
    first_visit: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            current_country: None,
            favorites: BTreeSet::new(),
            first_visit: true,
        }
    }

    pub fn current_country(&self) -> Option<&str> {
        self.current_country.as_deref()
    }

    pub fn favorites(&self) -> impl Iterator<Item = &str> {
        self.favorites.iter().map(String::as_str)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.contains(name)
    }

    pub fn first_visit(&self) -> bool {
        self.first_visit
    }

    /// A blank name clears the selection, like an emptied search box.
    pub fn select_country(&mut self, name: &str) {
        let name = name.trim();
        self.current_country = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
    }

    pub fn clear_selection(&mut self) {
        self.current_country = None;
    }

    pub fn add_favorite(&mut self, name: &str) -> FavoriteChange {
        if self.favorites.insert(name.to_string()) {
            FavoriteChange::Added
        } else {
            FavoriteChange::AlreadyPresent
        }
    }

    pub fn remove_favorite(&mut self, name: &str) -> FavoriteChange {
        if self.favorites.remove(name) {
            FavoriteChange::Removed
        } else {
            FavoriteChange::NotPresent
        }
    }

    /// Selects a uniformly random entry of `pool`. An empty pool changes nothing.
    pub fn randomize_selection<S, R>(&mut self, pool: &[S], rng: &mut R) -> Option<&str>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let picked = pool.choose(rng)?;
        self.current_country = Some(picked.as_ref().to_string());
        self.current_country.as_deref()
    }

    /// One-way: the welcome page never comes back within a session.
    pub fn dismiss_welcome(&mut self) {
        self.first_visit = false;
    }
}
