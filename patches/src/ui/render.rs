//! Render orchestration for the game client.
//!
//! Everything here draws from the current [`ViewModel`]; the only state
//! written back is the frame's mouse hit zones.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use patches_core::{ButtonSet, ViewModel};

use crate::app::{App, Control, FocusedPane, Screen};
use crate::ui::layout::{AppLayout, MenuLayout};
use crate::ui::widgets::{ButtonWidget, CodePaneWidget, HeaderWidget};

/// Main render function.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.clear_hit_zones();
    match app.screen {
        Screen::Menu => render_menu(frame, app),
        Screen::Game => render_game(frame, app),
    }
}

fn render_menu(frame: &mut Frame, app: &mut App) {
    let layout = MenuLayout::calculate(frame.area());

    let title = Line::from(Span::styled(
        "Patches Please",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        layout.title_area,
    );

    let style = Style::default().fg(app.theme.button_start);
    frame.render_widget(ButtonWidget::new("Start").style(style), layout.button_area);
    app.push_hit_zone(layout.button_area, Control::MenuStart);
}

fn render_game(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::calculate(frame.area());
    let view = app.view().clone();

    frame.render_widget(
        HeaderWidget::new(&view.header, &app.theme),
        layout.header_area,
    );

    let panes_active = !view.editors.left.is_empty() || !view.editors.right.is_empty();
    frame.render_widget(
        CodePaneWidget::new("File A", &view.editors.left, &app.theme)
            .focused(panes_active && app.focused_pane == FocusedPane::Left)
            .scroll(app.pane_scroll(FocusedPane::Left)),
        layout.left_editor_area,
    );
    frame.render_widget(
        CodePaneWidget::new("File B", &view.editors.right, &app.theme)
            .focused(panes_active && app.focused_pane == FocusedPane::Right)
            .scroll(app.pane_scroll(FocusedPane::Right)),
        layout.right_editor_area,
    );

    render_sidebar(frame, app, &view, layout.sidebar_area);
    render_status_bar(frame, app, layout.status_bar);
}

fn render_sidebar(frame: &mut Frame, app: &mut App, view: &ViewModel, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Lives
            Constraint::Length(1), // Score
            Constraint::Length(1), // Gap
            Constraint::Length(3), // First button
            Constraint::Length(3), // Second button
            Constraint::Min(0),
        ])
        .split(inner);

    let lives_text = match view.sidebar.lives {
        Some(lives) => lives.to_string(),
        None => "-".to_string(),
    };
    let lives_line = Line::from(vec![
        Span::raw("Lives: "),
        Span::styled(lives_text, app.theme.lives_style(view.sidebar.low_lives)),
    ]);
    frame.render_widget(Paragraph::new(lives_line), chunks[0]);

    let score_text = match view.sidebar.score {
        Some(score) => score.to_string(),
        None => "-".to_string(),
    };
    let score_line = Line::from(vec![
        Span::raw("Score: "),
        Span::styled(score_text, app.theme.score_style()),
    ]);
    frame.render_widget(Paragraph::new(score_line), chunks[1]);

    let buttons: Vec<(&str, Color, Control)> = match view.sidebar.buttons {
        ButtonSet::Idle => vec![("(Space) Start", app.theme.button_start, Control::Start)],
        ButtonSet::Judging => vec![
            ("(y) Accept", app.theme.button_accept, Control::Accept),
            ("(n) Deny", app.theme.button_deny, Control::Deny),
        ],
    };
    for (i, (label, color, control)) in buttons.into_iter().enumerate() {
        let button_area = chunks[3 + i];
        frame.render_widget(
            ButtonWidget::new(label).style(Style::default().fg(color)),
            button_area,
        );
        app.push_hit_zone(button_area, control);
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.status() {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status.text),
            app.theme.status_style(status.is_error),
        )),
        None => Line::from(Span::styled(
            " Space start | y accept | n deny | Esc end | Tab pane | j/k scroll | q quit",
            app.theme.status_style(false),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
