//! # TitleBar Component
//!
//! Top status bar: app name, current page, status message, and a spinner
//! while lookups are in flight.
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Treasure Hunter | Home | Looking up Japan... ⠋"`
//! 2. **Status message**: `"Treasure Hunter | Home | Added Japan to favorites!"`
//! 3. **Default**: `"Treasure Hunter | Home"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Top status bar component. All fields are props.
pub struct TitleBar {
    pub page_label: String,
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(page_label: String, status_message: String, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            page_label,
            status_message,
            is_loading,
            spinner_frame,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Treasure Hunter | {}", self.page_label);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.is_loading {
            text.push(' ');
            text.push_str(SPINNER[self.spinner_frame % SPINNER.len()]);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Home".to_string(), "Added Japan to favorites!".to_string(), false, 0);
        let text = rendered(&mut title_bar);
        assert!(text.contains("Treasure Hunter | Home"));
        assert!(text.contains("Added Japan to favorites!"));
        assert!(!text.contains('⠋'));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Home".to_string(), "".to_string(), false, 0);
        let text = rendered(&mut title_bar);
        assert_eq!(text.matches('|').count(), 1);
    }

    #[test]
    fn test_title_bar_spinner_while_loading() {
        let title_bar = TitleBar::new("Home".to_string(), "Looking up Peru...".to_string(), true, 1);
        assert!(title_bar.text().ends_with("⠙"));
    }
}
