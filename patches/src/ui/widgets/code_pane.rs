//! Read-only code pane with a line-number gutter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::GameTheme;

pub struct CodePaneWidget<'a> {
    title: &'a str,
    contents: &'a str,
    theme: &'a GameTheme,
    focused: bool,
    scroll: u16,
}

impl<'a> CodePaneWidget<'a> {
    pub fn new(title: &'a str, contents: &'a str, theme: &'a GameTheme) -> Self {
        Self {
            title,
            contents,
            theme,
            focused: false,
            scroll: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for CodePaneWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.contents.is_empty() {
            return;
        }

        let line_count = self.contents.lines().count();
        let gutter_width = digits(line_count).max(3);

        let lines: Vec<Line> = self
            .contents
            .lines()
            .enumerate()
            .map(|(i, text)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>gutter_width$} ", i + 1),
                        self.theme.line_number_style(),
                    ),
                    Span::raw(text),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}

fn digits(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
