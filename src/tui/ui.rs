use crate::Page;
use crate::core::state::App;
use crate::lookup::GemRecord;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CountryPanel, FavoritesSidebar, GemList, TitleBar, WelcomePage, WorldMap,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const SIDEBAR_WIDTH: u16 = 28;

const HELP_TEXT: &str =
    " Enter search | Tab page | Ctrl+R random | Ctrl+F fav | Ctrl+D unfav | Ctrl+L clear | Esc quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    if app.selection.first_visit() {
        WelcomePage.render(frame, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [sidebar_area, main_area] =
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(body_area);

    TitleBar::new(
        app.page.label().to_string(),
        app.status_message.clone(),
        app.is_loading(),
        spinner_frame,
    )
    .render(frame, title_area);

    let favorites: Vec<&str> = app.selection.favorites().collect();
    FavoritesSidebar::new(&mut tui.favorites, &favorites, app.selection.current_country())
        .render(frame, sidebar_area);

    match app.page {
        Page::Home => draw_home(frame, main_area, app, tui),
        Page::HiddenGems => draw_hidden_gems(frame, main_area, app, tui),
    }

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let [input_area, content_area] = Layout::vertical([Length(3), Min(0)]).areas(area);
    let [map_area, info_area] =
        Layout::horizontal([Percentage(55), Percentage(45)]).areas(content_area);
    let [facts_area, gems_area] =
        Layout::vertical([Percentage(60), Percentage(40)]).areas(info_area);

    tui.country_input.render(frame, input_area);

    WorldMap::new(&app.countries, app.selected_pin()).render(frame, map_area);

    let current = app.selection.current_country();
    let exploring = app.pending.explore.is_some();
    CountryPanel::new(
        current,
        current.is_some_and(|name| app.selection.is_favorite(name)),
        app.country.as_ref(),
        exploring,
    )
    .render(frame, facts_area);

    let empty_message = if app.country.is_some() {
        "No hidden gems found nearby."
    } else {
        ""
    };
    GemList::new(
        String::from(" Hidden gems nearby "),
        &app.nearby_gems,
        empty_message,
    )
    .render(frame, gems_area);
}

fn draw_hidden_gems(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [input_area, list_area] = Layout::vertical([Length(3), Min(0)]).areas(area);

    tui.gem_input.render(frame, input_area);

    let gems: &[GemRecord] = app
        .gem_search
        .as_ref()
        .map(|search| search.gems.as_slice())
        .unwrap_or(&[]);
    let (title, empty_message) = match &app.gem_search {
        Some(search) if search.upstream_failed => (
            format!(" Hidden gems in {} ", search.location),
            "Treasure Hunter is empty handed :(",
        ),
        Some(search) => (
            format!(" Hidden gems in {} ", search.location),
            "We don't have enough information on this location yet.",
        ),
        None if app.pending.gems.is_some() => {
            (String::from(" Hidden Gems "), "Hunting the treasures...")
        }
        None => (
            String::from(" Hidden Gems "),
            "Enter a city or area to find the best rated restaurants.",
        ),
    };
    GemList::new(title, gems, empty_message).render(frame, list_area);
}
