//! Screen layout calculations.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Game screen layout: header on top, two code panes beside the sidebar,
/// status bar at the bottom.
pub struct AppLayout {
    pub header_area: Rect,
    pub left_editor_area: Rect,
    pub right_editor_area: Rect,
    pub sidebar_area: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header (title + subtitle)
                Constraint::Min(0),    // Main
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // Three equal columns: two editors plus the sidebar
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(chunks[1]);

        Self {
            header_area: chunks[0],
            left_editor_area: main[0],
            right_editor_area: main[1],
            sidebar_area: main[2],
            status_bar: chunks[2],
        }
    }
}

/// Menu screen layout: title over a centered start button.
pub struct MenuLayout {
    pub title_area: Rect,
    pub button_area: Rect,
}

impl MenuLayout {
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1), // Title
                Constraint::Length(1), // Gap
                Constraint::Length(3), // Button
                Constraint::Min(0),
            ])
            .split(area);

        Self {
            title_area: chunks[1],
            button_area: centered_rect_fixed(20, 3, chunks[3]),
        }
    }
}

/// Center a fixed-size rect inside an area, clamped to fit.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_full_height() {
        let layout = AppLayout::calculate(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header_area.height, 4);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(
            layout.header_area.height + layout.left_editor_area.height + layout.status_bar.height,
            40
        );
    }

    #[test]
    fn test_editors_and_sidebar_split_the_width() {
        let layout = AppLayout::calculate(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.left_editor_area.width, 40);
        assert_eq!(layout.right_editor_area.width, 40);
        assert_eq!(layout.sidebar_area.width, 40);
    }

    #[test]
    fn test_centered_rect_is_clamped() {
        let rect = centered_rect_fixed(100, 10, Rect::new(0, 0, 20, 5));
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
