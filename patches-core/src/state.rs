//! Session state machine for the game client.
//!
//! All state lives in an immutable [`SessionState`] value and changes only
//! through [`SessionState::apply`], a pure reducer over [`SessionEvent`]s.
//! Invariants:
//! - `Playing` holds only while the snapshot has an active level and the
//!   game is not over.
//! - `GameOver` is sticky until a `GameCreated` event starts a fresh
//!   session.

use patches_api::{GameSnapshot, SessionId};

/// Where the session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No session exists yet.
    #[default]
    NotStarted,
    /// A session exists but no level is active.
    Idle,
    /// A level is actively being answered.
    Playing,
    /// Lives exhausted, explicit end, or poisoned session.
    GameOver,
}

/// The complete client-side session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    session: Option<SessionId>,
    snapshot: Option<GameSnapshot>,
    phase: Phase,
}

/// Events that drive the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A fresh session was created. Invalidates the previous snapshot.
    GameCreated(SessionId),
    /// The server returned updated game state.
    SnapshotReceived(GameSnapshot),
    /// The player ended the game explicitly.
    Ended,
    /// The server sent something the client could not understand; the
    /// session can no longer be trusted.
    Poisoned,
}

impl SessionState {
    /// Apply an event, producing the next state.
    pub fn apply(mut self, event: SessionEvent) -> SessionState {
        match event {
            SessionEvent::GameCreated(id) => {
                self.session = Some(id);
                self.snapshot = None;
                self.phase = Phase::Idle;
            }
            SessionEvent::SnapshotReceived(snapshot) => {
                // A finished game ignores late responses until a new one starts.
                if self.phase == Phase::GameOver {
                    return self;
                }
                self.phase = if snapshot.out_of_lives() {
                    Phase::GameOver
                } else if snapshot.current_level.is_none() {
                    Phase::Idle
                } else {
                    Phase::Playing
                };
                self.snapshot = Some(snapshot);
            }
            SessionEvent::Ended => {
                if self.phase == Phase::Playing {
                    self.phase = Phase::GameOver;
                }
            }
            SessionEvent::Poisoned => {
                self.phase = Phase::GameOver;
            }
        }
        self
    }

    /// The current session id, if a session exists.
    pub fn session(&self) -> Option<&SessionId> {
        self.session.as_ref()
    }

    /// The most recent snapshot, retained for rendering.
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a level is actively being answered.
    pub fn playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
