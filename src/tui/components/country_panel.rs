//! # CountryPanel Component
//!
//! Facts about the selected country. Every field is rendered, with
//! "Not available" standing in for anything the directory did not provide.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::lookup::CountryRecord;
use crate::tui::component::Component;

pub struct CountryPanel<'a> {
    pub current: Option<&'a str>,
    pub is_favorite: bool,
    pub record: Option<&'a CountryRecord>,
    pub is_loading: bool,
}

impl<'a> CountryPanel<'a> {
    pub fn new(
        current: Option<&'a str>,
        is_favorite: bool,
        record: Option<&'a CountryRecord>,
        is_loading: bool,
    ) -> Self {
        Self {
            current,
            is_favorite,
            record,
            is_loading,
        }
    }

    fn title(&self) -> String {
        match self.current {
            Some(name) if self.is_favorite => format!(" ★ {name} "),
            Some(name) => format!(" {name} "),
            None => String::from(" Destination "),
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let hint = |text: String| vec![Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))];

        let Some(name) = self.current else {
            return hint(String::from(
                "Type a country and press Enter, or Ctrl+R for a surprise.",
            ));
        };
        if self.is_loading {
            return hint(format!("Looking up {name}..."));
        }
        let Some(record) = self.record else {
            return hint(String::new());
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!("Information about {name}:"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(record.facts().into_iter().map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
                Span::raw(value),
            ])
        }));
        lines
    }
}

impl Component for CountryPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .block(Block::bordered().title(self.title()))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(panel: &CountryPanel) -> Vec<String> {
        panel
            .lines()
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_prompt_without_selection() {
        let panel = CountryPanel::new(None, false, None, false);
        assert_eq!(panel.title(), " Destination ");
        assert!(text(&panel)[0].contains("Ctrl+R"));
    }

    #[test]
    fn test_loading_hint() {
        let panel = CountryPanel::new(Some("Japan"), false, None, true);
        assert_eq!(text(&panel), vec!["Looking up Japan..."]);
    }

    #[test]
    fn test_unavailable_record_lists_every_field() {
        let record = CountryRecord::unavailable();
        let panel = CountryPanel::new(Some("Wakanda"), true, Some(&record), false);
        let lines = text(&panel);

        assert_eq!(panel.title(), " ★ Wakanda ");
        assert_eq!(lines[0], "Information about Wakanda:");
        assert!(lines.contains(&"Capital: Not available".to_string()));
        assert!(lines.contains(&"Population: Not available".to_string()));
    }
}
