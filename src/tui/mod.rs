//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Background Work
//!
//! `update()` answers with an `Effect`; `dispatch()` turns that effect into a
//! tokio task that runs the lookup and sends the result back as an `Action`
//! over a std channel. The loop drains that channel between frames, so the
//! interface never waits on the network.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 250ms, only redraws on events or background results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::Page;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::lookup::{CountryInfoResolver, GemFinder, Lookups, RestCountriesClient, YelpClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{FavoritesEvent, FavoritesState, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const LOADING_POLL: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub country_input: InputBox,
    pub gem_input: InputBox,
    pub favorites: FavoritesState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            country_input: InputBox::new(" Where to? ", "Type a country, e.g. Japan"),
            gem_input: InputBox::new(" Hidden Gems ", "Type a city or area, e.g. Lisbon"),
            favorites: FavoritesState::default(),
        }
    }

    /// The search box of the page being shown.
    fn active_input(&mut self, page: Page) -> &mut InputBox {
        match page {
            Page::Home => &mut self.country_input,
            Page::HiddenGems => &mut self.gem_input,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Wire the HTTP clients for both external services from a resolved config.
pub fn build_lookups(config: &ResolvedConfig) -> std::io::Result<Lookups> {
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(std::io::Error::other)?;

    if config.yelp_api_key.is_none() {
        warn!("No Yelp API key configured; hidden gem searches will come back empty");
    }

    let directory = RestCountriesClient::new(Some(config.countries_base_url.clone()), client.clone());
    let search = YelpClient::new(
        config.yelp_api_key.clone(),
        Some(config.yelp_base_url.clone()),
        client,
    );

    Ok(Lookups::new(
        CountryInfoResolver::new(Arc::new(directory)),
        GemFinder::new(Arc::new(search)),
        config.gem_limit,
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let lookups = Arc::new(build_lookups(&config)?);
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Welcome skipped: start fetching the country list right away
    if !app.selection.first_visit() {
        let effect = update(&mut app, Action::DismissWelcome);
        dispatch(effect, &lookups, &tx);
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let loading = app.is_loading();
        if loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if loading { LOADING_POLL } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&event, &app, &mut tui) {
                let effect = update(&mut app, action.clone());
                sync_inputs(&action, &app, &mut tui);
                if dispatch(effect, &lookups, &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        // Results from background lookups
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            dispatch(effect, &lookups, &tx);
        }
    }

    info!("Treasure Hunter shutting down");
    ratatui::restore();
    Ok(())
}

/// Translate a terminal event into an action, handling TUI-local events in place.
fn handle_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Escape => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    // The welcome page only understands Enter
    if app.selection.first_visit() {
        return matches!(event, TuiEvent::Submit).then_some(Action::DismissWelcome);
    }

    match event {
        TuiEvent::SwitchPage => Some(Action::SwitchPage(app.page.next())),
        TuiEvent::Randomize => Some(Action::Randomize),
        TuiEvent::ClearSelection => Some(Action::ClearSelection),
        TuiEvent::AddFavorite => Some(Action::AddFavorite),
        TuiEvent::RemoveFavorite => Some(Action::RemoveFavorite),
        TuiEvent::FavoriteUp | TuiEvent::FavoriteDown | TuiEvent::RemoveHighlighted => {
            let favorites: Vec<&str> = app.selection.favorites().collect();
            match tui.favorites.handle_event(event, &favorites)? {
                FavoritesEvent::Remove(name) => Some(Action::RemoveFavoriteNamed(name)),
            }
        }
        _ => match tui.active_input(app.page).handle_event(event)? {
            InputEvent::Submit(text) => Some(match app.page {
                Page::Home => Action::SubmitCountry(text),
                Page::HiddenGems => Action::SubmitGemLocation(text),
            }),
            InputEvent::ContentChanged => None,
        },
    }
}

/// Keep the country search box in step with selections made without typing.
fn sync_inputs(action: &Action, app: &App, tui: &mut TuiState) {
    match action {
        Action::Randomize => {
            if let Some(name) = app.selection.current_country() {
                tui.country_input.set_text(name);
            }
        }
        Action::ClearSelection => tui.country_input.set_text(""),
        _ => {}
    }
}

/// Start the I/O an effect asks for. Returns true when the app should quit.
fn dispatch(effect: Effect, lookups: &Arc<Lookups>, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::LoadCountries => {
            info!("Spawning country list request");
            let lookups = Arc::clone(lookups);
            let tx = tx.clone();
            tokio::spawn(async move {
                let fetched = lookups.countries.resolve_country_list().await;
                if tx.send(Action::CountriesLoaded(fetched)).is_err() {
                    warn!("Failed to send country list: receiver dropped");
                }
            });
            false
        }
        Effect::Explore(name) => {
            info!("Spawning lookups for {}", name);
            let lookups = Arc::clone(lookups);
            let tx = tx.clone();
            tokio::spawn(async move {
                let exploration = lookups.explore(&name).await;
                if tx.send(Action::Explored { name, exploration }).is_err() {
                    warn!("Failed to send country lookup: receiver dropped");
                }
            });
            false
        }
        Effect::FindGems(location) => {
            info!("Spawning gem search for {}", location);
            let lookups = Arc::clone(lookups);
            let tx = tx.clone();
            tokio::spawn(async move {
                let gems = lookups.find_gems(&location).await;
                if tx.send(Action::GemsFound { location, gems }).is_err() {
                    warn!("Failed to send gem search: receiver dropped");
                }
            });
            false
        }
    }
}
