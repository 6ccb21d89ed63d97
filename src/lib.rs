//! Treasure Hunter library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod lookup;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// The two screens of the app. The welcome page sits in front of both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Page {
    #[default]
    Home,
    HiddenGems,
}

impl Page {
    /// Cycles to the other page (Tab).
    pub fn next(self) -> Page {
        match self {
            Page::Home => Page::HiddenGems,
            Page::HiddenGems => Page::Home,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::HiddenGems => "Discover Hidden Gems",
        }
    }
}
