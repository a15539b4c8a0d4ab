//! Main application state.

use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;

use patches_core::{Answer, SessionState, ViewModel};

use crate::ui::theme::GameTheme;
use crate::worker::{WorkerRequest, WorkerResponse};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Game,
}

/// Which code pane has scroll focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPane {
    #[default]
    Left,
    Right,
}

/// An on-screen control the mouse can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    MenuStart,
    Start,
    Accept,
    Deny,
}

/// A status bar message.
#[derive(Debug, Clone)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    // Channel communication with the network worker
    pub request_tx: mpsc::Sender<WorkerRequest>,
    pub response_rx: mpsc::Receiver<WorkerResponse>,

    // Session state snapshot for rendering
    state: SessionState,
    view: ViewModel,

    // UI state
    pub theme: GameTheme,
    pub screen: Screen,
    pub focused_pane: FocusedPane,
    left_scroll: u16,
    right_scroll: u16,

    // Mouse hit zones, recorded at render time
    hit_zones: Vec<(Rect, Control)>,

    // Status
    status: Option<Status>,

    // A request is in flight; suppress re-triggering
    pub busy: bool,
}

impl App {
    /// Create a new application with channel endpoints to the worker.
    pub fn new(
        request_tx: mpsc::Sender<WorkerRequest>,
        response_rx: mpsc::Receiver<WorkerResponse>,
    ) -> Self {
        let state = SessionState::default();
        let view = ViewModel::from_state(&state);
        Self {
            request_tx,
            response_rx,
            state,
            view,
            theme: GameTheme::default(),
            screen: Screen::default(),
            focused_pane: FocusedPane::default(),
            left_scroll: 0,
            right_scroll: 0,
            hit_zones: Vec::new(),
            status: None,
            busy: false,
        }
    }

    /// The current render model.
    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// The latest session state received from the worker.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Switch to the game screen and create a session.
    pub fn enter_game(&mut self) {
        self.screen = Screen::Game;
        self.send(WorkerRequest::NewGame);
    }

    /// Start action: request the next level unless one is active.
    pub fn start(&mut self) {
        if !self.state.playing() {
            self.send(WorkerRequest::StartLevel);
        }
    }

    /// Accept action: judge the current prompt as the real file.
    pub fn accept(&mut self) {
        if self.state.playing() {
            self.send(WorkerRequest::Submit(Answer::Yes));
        }
    }

    /// Deny action: judge the current prompt as the fake.
    pub fn deny(&mut self) {
        if self.state.playing() {
            self.send(WorkerRequest::Submit(Answer::No));
        }
    }

    /// End the game explicitly. Bypasses the busy guard so an in-flight
    /// answer cannot swallow the request; the worker applies it in order.
    pub fn end(&mut self) {
        if self.state.playing() {
            let _ = self.request_tx.try_send(WorkerRequest::End);
        }
    }

    fn send(&mut self, request: WorkerRequest) {
        if self.busy {
            self.set_status("Working...");
            return;
        }
        if self.request_tx.try_send(request).is_ok() {
            self.busy = true;
            self.set_status("Working...");
        } else {
            self.set_status("Worker busy, please wait...");
        }
    }

    /// Apply a worker response.
    pub fn apply_response(&mut self, response: WorkerResponse) {
        self.busy = false;
        match response.error {
            Some(message) => self.set_error(message),
            None => {
                self.clear_status();
                // A fresh snapshot means fresh pane contents.
                self.left_scroll = 0;
                self.right_scroll = 0;
            }
        }
        self.state = response.state;
        self.view = ViewModel::from_state(&self.state);
    }

    // =========================================================================
    // Pane focus and scrolling
    // =========================================================================

    pub fn cycle_pane(&mut self) {
        self.focused_pane = match self.focused_pane {
            FocusedPane::Left => FocusedPane::Right,
            FocusedPane::Right => FocusedPane::Left,
        };
    }

    pub fn pane_scroll(&self, pane: FocusedPane) -> u16 {
        match pane {
            FocusedPane::Left => self.left_scroll,
            FocusedPane::Right => self.right_scroll,
        }
    }

    /// Scroll the focused pane up.
    pub fn scroll_up(&mut self, lines: u16) {
        let scroll = self.focused_scroll_mut();
        *scroll = scroll.saturating_sub(lines);
    }

    /// Scroll the focused pane down, capped at the last content line.
    pub fn scroll_down(&mut self, lines: u16) {
        let contents = match self.focused_pane {
            FocusedPane::Left => &self.view.editors.left,
            FocusedPane::Right => &self.view.editors.right,
        };
        let max = contents.lines().count().saturating_sub(1) as u16;
        let scroll = self.focused_scroll_mut();
        *scroll = scroll.saturating_add(lines).min(max);
    }

    fn focused_scroll_mut(&mut self) -> &mut u16 {
        match self.focused_pane {
            FocusedPane::Left => &mut self.left_scroll,
            FocusedPane::Right => &mut self.right_scroll,
        }
    }

    // =========================================================================
    // Mouse hit zones
    // =========================================================================

    /// Forget the previous frame's controls.
    pub fn clear_hit_zones(&mut self) {
        self.hit_zones.clear();
    }

    /// Record a control's screen area for click routing.
    pub fn push_hit_zone(&mut self, area: Rect, control: Control) {
        self.hit_zones.push((area, control));
    }

    /// The control under the given screen position, if any.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        self.hit_zones
            .iter()
            .find(|(area, _)| area.contains(Position::new(column, row)))
            .map(|(_, control)| *control)
    }

    // =========================================================================
    // Status
    // =========================================================================

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            text: message.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            text: message.into(),
            is_error: true,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }
}
