//! # GemList Component
//!
//! Name, rating and address of each gem, in the order the search ranked them.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::lookup::{GemRecord, NOT_AVAILABLE};
use crate::tui::component::Component;

pub struct GemList<'a> {
    pub title: String,
    pub gems: &'a [GemRecord],
    /// Shown instead of the list when `gems` is empty.
    pub empty_message: &'a str,
}

impl<'a> GemList<'a> {
    pub fn new(title: String, gems: &'a [GemRecord], empty_message: &'a str) -> Self {
        Self {
            title,
            gems,
            empty_message,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        if self.gems.is_empty() {
            return vec![Line::from(Span::styled(
                self.empty_message,
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let mut lines = Vec::new();
        for (i, gem) in self.gems.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from("---"));
            }
            lines.push(Line::from(vec![
                Span::styled("Name: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(gem.name.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Rating: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    gem.rating
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Address: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(gem.address_line()),
            ]));
        }
        lines
    }
}

impl Component for GemList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .block(Block::bordered().title(self.title.as_str()))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
