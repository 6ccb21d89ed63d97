//! # WorldMap Component
//!
//! Every known country as a dim dot on a world map, the selected one
//! highlighted and labelled. With a selection the view zooms in around it;
//! without one it shows the whole world.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};

use crate::lookup::CountryPin;
use crate::tui::component::Component;

/// Half-width of the zoomed view, in degrees.
const ZOOM_LONGITUDE_SPAN: f64 = 40.0;
const ZOOM_LATITUDE_SPAN: f64 = 20.0;

pub struct WorldMap<'a> {
    pub pins: &'a [CountryPin],
    pub selected: Option<&'a CountryPin>,
}

impl<'a> WorldMap<'a> {
    pub fn new(pins: &'a [CountryPin], selected: Option<&'a CountryPin>) -> Self {
        Self { pins, selected }
    }

    /// `(x_bounds, y_bounds)` of the visible region.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        match self.selected {
            Some(pin) => (
                window(pin.longitude, ZOOM_LONGITUDE_SPAN, 180.0),
                window(pin.latitude, ZOOM_LATITUDE_SPAN, 90.0),
            ),
            None => ([-180.0, 180.0], [-90.0, 90.0]),
        }
    }
}

/// A `[center - span, center + span]` window shifted to stay inside `[-limit, limit]`.
fn window(center: f64, span: f64, limit: f64) -> [f64; 2] {
    let low = (center - span).max(-limit);
    let high = (center + span).min(limit);
    if high - low < span * 2.0 {
        if low <= -limit {
            return [-limit, (-limit + span * 2.0).min(limit)];
        }
        return [(limit - span * 2.0).max(-limit), limit];
    }
    [low, high]
}

impl Component for WorldMap<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (x_bounds, y_bounds) = self.bounds();
        let coords: Vec<(f64, f64)> = self
            .pins
            .iter()
            .map(|p| (p.longitude, p.latitude))
            .collect();
        let selected = self
            .selected
            .map(|p| (p.longitude, p.latitude, p.name.clone()));

        let title = match self.selected {
            Some(pin) => format!("Map: {}", pin.name),
            None => String::from("Map"),
        };

        let canvas = Canvas::default()
            .block(Block::bordered().title(title))
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Map {
                    color: Color::DarkGray,
                    resolution: MapResolution::High,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &coords,
                    color: Color::Gray,
                });
                if let Some((x, y, name)) = &selected {
                    ctx.draw(&Points {
                        coords: &[(*x, *y)],
                        color: Color::Yellow,
                    });
                    ctx.print(
                        *x,
                        *y,
                        Line::from(Span::styled(format!(" {name}"), Style::default().fg(Color::Yellow))),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }
}
