//! # Favorites Sidebar
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FavoritesState` lives in `TuiState` (which entry is highlighted)
//! - `FavoritesSidebar` is created each frame with borrowed state and the
//!   favorites from `SelectionState`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};

use crate::tui::event::TuiEvent;

/// Persistent state for the sidebar.
#[derive(Debug, Default)]
pub struct FavoritesState {
    pub highlighted: usize,
    pub list_state: ListState,
}

/// Events emitted by the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesEvent {
    Remove(String),
}

impl FavoritesState {
    /// Moves the highlight or asks for the highlighted entry to be removed.
    pub fn handle_event(&mut self, event: &TuiEvent, favorites: &[&str]) -> Option<FavoritesEvent> {
        self.clamp(favorites.len());
        match event {
            TuiEvent::FavoriteUp => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            TuiEvent::FavoriteDown => {
                if !favorites.is_empty() {
                    self.highlighted = (self.highlighted + 1).min(favorites.len() - 1);
                }
                None
            }
            TuiEvent::RemoveHighlighted => favorites
                .get(self.highlighted)
                .map(|name| FavoritesEvent::Remove(name.to_string())),
            _ => None,
        }
    }

    /// Keeps the highlight on an existing entry after the list shrinks.
    pub fn clamp(&mut self, len: usize) {
        self.highlighted = self.highlighted.min(len.saturating_sub(1));
    }
}

/// Transient render wrapper for the sidebar.
pub struct FavoritesSidebar<'a> {
    state: &'a mut FavoritesState,
    favorites: &'a [&'a str],
    current: Option<&'a str>,
}

impl<'a> FavoritesSidebar<'a> {
    pub fn new(state: &'a mut FavoritesState, favorites: &'a [&'a str], current: Option<&'a str>) -> Self {
        Self {
            state,
            favorites,
            current,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" My Favorites ({}) ", self.favorites.len()))
            .title_bottom(Line::from(" ↑↓ Ctrl+X remove ").centered());

        if self.favorites.is_empty() {
            let empty = Paragraph::new("No favorite countries yet. Add some!")
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.favorites.len());
        self.state.list_state.select(Some(self.state.highlighted));

        let items: Vec<ListItem> = self
            .favorites
            .iter()
            .map(|name| {
                let style = if Some(*name) == self.current {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(format!("★ {name}"), style))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
