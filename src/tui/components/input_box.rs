//! # InputBox Component
//!
//! Single-line text input used for the country search (Home) and the
//! location search (Hidden Gems). The buffer is internal state; the title
//! and placeholder are props.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Border title (Prop)
    pub title: &'static str,
    /// Shown dimmed while the buffer is empty (Prop)
    pub placeholder: &'static str,
}

impl InputBox {
    pub fn new(title: &'static str, placeholder: &'static str) -> Self {
        Self {
            buffer: String::new(),
            title,
            placeholder,
        }
    }

    /// Replaces the buffer, e.g. when a random pick fills the search box.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(self.title);
        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };
        frame.render_widget(paragraph.block(block), area);

        // Cursor after the last character, kept inside the border
        let max_x = area.x + area.width.saturating_sub(2);
        let width = u16::try_from(self.buffer.width()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(width).min(max_x);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single line: pasted newlines become spaces
                self.buffer.extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.trim().to_string())),
            _ => None,
        }
    }
}
