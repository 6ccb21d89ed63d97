use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Always handled first
    ForceQuit, // Ctrl+C
    Escape,
    Resize,

    // Commands (translated into core::Action)
    Submit,
    SwitchPage,         // Tab
    Randomize,          // Ctrl+R
    ClearSelection,     // Ctrl+L
    AddFavorite,        // Ctrl+F
    RemoveFavorite,     // Ctrl+D
    RemoveHighlighted,  // Ctrl+X removes the highlighted sidebar favorite

    // TUI-local events (handled directly in TUI)
    InputChar(char),
    Paste(String),
    Backspace,
    FavoriteUp,
    FavoriteDown,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event.modifiers, key_event.code)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Randomize),
        (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::ClearSelection),
        (KeyModifiers::CONTROL, KeyCode::Char('f')) => Some(TuiEvent::AddFavorite),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(TuiEvent::RemoveFavorite),
        (KeyModifiers::CONTROL, KeyCode::Char('x')) => Some(TuiEvent::RemoveHighlighted),
        // Other control chords are not text
        (KeyModifiers::CONTROL, KeyCode::Char(_)) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Tab) => Some(TuiEvent::SwitchPage),
        (_, KeyCode::Up) => Some(TuiEvent::FavoriteUp),
        (_, KeyCode::Down) => Some(TuiEvent::FavoriteDown),
        _ => None,
    }
}
