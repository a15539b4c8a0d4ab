//! A clickable on-screen button.
//!
//! Hit zones are recorded by the render layer; this widget only draws.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ButtonWidget<'a> {
    label: &'a str,
    style: Style,
}

impl<'a> ButtonWidget<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for ButtonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(Span::styled(
            self.label,
            self.style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(inner, buf);
    }
}
