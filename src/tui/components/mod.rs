//! # TUI Components
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields, built fresh each frame:
//! - `TitleBar`: app name, page, status message, spinner
//! - `WelcomePage`: first-visit greeting
//! - `WorldMap`: country pins on a braille world map
//! - `CountryPanel`: facts about the selected country
//! - `GemList`: ranked hidden gems
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state in `TuiState` and emit events:
//! - `InputBox`: single-line search field
//! - `FavoritesSidebar`: favorites list with a movable highlight
//!
//! Components never read `App` directly. Dependencies are explicit:
//!
//! ```rust,ignore
//! CountryPanel::new(current, is_favorite, app.country.as_ref(), loading).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (top status bar)
//! ├── welcome.rs        (welcome page)
//! ├── input_box.rs      (search field)
//! ├── world_map.rs      (map canvas)
//! ├── country_panel.rs  (country facts)
//! ├── gem_list.rs       (hidden gems)
//! └── favorites.rs      (favorites sidebar)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod country_panel;
pub mod favorites;
pub mod gem_list;
pub mod input_box;
pub mod welcome;
pub mod world_map;

pub use country_panel::CountryPanel;
pub use favorites::{FavoritesEvent, FavoritesSidebar, FavoritesState};
pub use gem_list::GemList;
pub use input_box::{InputBox, InputEvent};
pub use welcome::WelcomePage;
pub use world_map::WorldMap;
