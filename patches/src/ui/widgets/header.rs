//! Header widget: level progress and prompt title.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use patches_core::Header;

use crate::ui::theme::GameTheme;

pub struct HeaderWidget<'a> {
    header: &'a Header,
    theme: &'a GameTheme,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(header: &'a Header, theme: &'a GameTheme) -> Self {
        Self { header, theme }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                self.header.title.as_str(),
                self.theme.title_style(self.header.tone),
            )),
            Line::from(Span::raw(self.header.subtitle.as_str())),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
