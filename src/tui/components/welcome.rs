//! # Welcome Page Component
//!
//! Shown once per session, before the first page. Enter dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const TITLE_COLOR: Color = Color::Rgb(245, 245, 220);
const SUBTITLE_COLOR: Color = Color::Rgb(173, 216, 230);

pub struct WelcomePage;

impl Component for WelcomePage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text_lines = vec![
            Line::from(Span::styled(
                "Welcome to Treasure Hunter...",
                Style::default().fg(TITLE_COLOR).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to Embark on Your Next Adventure...",
                Style::default().fg(SUBTITLE_COLOR),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[ Allons-y! ]",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        // Center the block of text vertically
        let height = text_lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}
