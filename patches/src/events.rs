//! Event handling for the game client.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, Control, Screen};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event.
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcut (always works)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match app.screen {
        Screen::Menu => handle_menu_key(app, key),
        Screen::Game => handle_game_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.enter_game();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,
        _ => EventResult::Continue,
    }
}

fn handle_game_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        // Game actions
        KeyCode::Char(' ') => {
            app.start();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('y') => {
            app.accept();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('n') => {
            app.deny();
            EventResult::NeedsRedraw
        }
        KeyCode::Esc => {
            app.end();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('q') => EventResult::Quit,

        // Pane focus and scrolling
        KeyCode::Tab => {
            app.cycle_pane();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up(1);
            EventResult::NeedsRedraw
        }
        KeyCode::PageDown => {
            app.scroll_down(10);
            EventResult::NeedsRedraw
        }
        KeyCode::PageUp => {
            app.scroll_up(10);
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_up(3);
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.scroll_down(3);
            EventResult::NeedsRedraw
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match app.control_at(mouse.column, mouse.row) {
                Some(Control::MenuStart) => app.enter_game(),
                Some(Control::Start) => app.start(),
                Some(Control::Accept) => app.accept(),
                Some(Control::Deny) => app.deny(),
                None => return EventResult::Continue,
            }
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::WorkerRequest;
    use ratatui::layout::Rect;
    use tokio::sync::mpsc;

    fn test_app() -> (App, mpsc::Receiver<WorkerRequest>) {
        let (request_tx, request_rx) = mpsc::channel(8);
        let (_response_tx, response_rx) = mpsc::channel(8);
        (App::new(request_tx, response_rx), request_rx)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_menu_enter_switches_to_game_and_requests_session() {
        let (mut app, mut requests) = test_app();

        let result = handle_event(&mut app, key(KeyCode::Enter));
        assert_eq!(result, EventResult::NeedsRedraw);
        assert_eq!(app.screen, Screen::Game);
        assert_eq!(requests.try_recv(), Ok(WorkerRequest::NewGame));
    }

    #[test]
    fn test_space_requests_level_when_not_playing() {
        let (mut app, mut requests) = test_app();
        app.screen = Screen::Game;

        handle_event(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(requests.try_recv(), Ok(WorkerRequest::StartLevel));
    }

    #[test]
    fn test_double_trigger_sends_one_request() {
        let (mut app, mut requests) = test_app();
        app.screen = Screen::Game;

        handle_event(&mut app, key(KeyCode::Char(' ')));
        handle_event(&mut app, key(KeyCode::Char(' ')));

        assert_eq!(requests.try_recv(), Ok(WorkerRequest::StartLevel));
        assert!(requests.try_recv().is_err());
    }

    #[test]
    fn test_judgment_keys_ignored_while_idle() {
        let (mut app, mut requests) = test_app();
        app.screen = Screen::Game;

        handle_event(&mut app, key(KeyCode::Char('y')));
        handle_event(&mut app, key(KeyCode::Char('n')));
        assert!(requests.try_recv().is_err());
    }

    #[test]
    fn test_q_and_ctrl_c_quit() {
        let (mut app, _requests) = test_app();
        app.screen = Screen::Game;

        assert_eq!(handle_event(&mut app, key(KeyCode::Char('q'))), EventResult::Quit);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut app, ctrl_c), EventResult::Quit);
    }

    #[test]
    fn test_click_routes_through_hit_zones() {
        let (mut app, mut requests) = test_app();
        app.push_hit_zone(Rect::new(10, 5, 12, 3), Control::MenuStart);

        let miss = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(handle_event(&mut app, miss), EventResult::Continue);

        let hit = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 11,
            row: 6,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(handle_event(&mut app, hit), EventResult::NeedsRedraw);
        assert_eq!(app.screen, Screen::Game);
        assert_eq!(requests.try_recv(), Ok(WorkerRequest::NewGame));
    }
}
