//! High-level session driver.
//!
//! `GameController` wraps a [`Backend`] and a [`SessionState`] into the
//! client's primary API: it issues the network operations, feeds the
//! results through the state reducer, and guards against actions that make
//! no sense in the current phase (a second Start while a level is active,
//! a judgment while idle). Duplicate triggers are therefore no-ops rather
//! than duplicate requests.

use thiserror::Error;

use patches_api::{Answer, SessionId};

use crate::backend::Backend;
use crate::state::{SessionEvent, SessionState};
use crate::view_model::ViewModel;

/// Errors from controller operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("API error: {0}")]
    Api(#[from] patches_api::Error),
}

impl SessionError {
    /// Whether this failure means the session can no longer be trusted.
    ///
    /// Protocol failures poison the session: the controller forces the
    /// game over, so the only recovery path is starting a fresh game.
    pub fn is_protocol(&self) -> bool {
        matches!(self, SessionError::Api(patches_api::Error::Parse(_)))
    }
}

/// Drives a game session against a backend.
pub struct GameController<B> {
    backend: B,
    state: SessionState,
}

impl<B: Backend> GameController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: SessionState::default(),
        }
    }

    /// The current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Derive the render model for the current state.
    pub fn view_model(&self) -> ViewModel {
        ViewModel::from_state(&self.state)
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Start a fresh session, invalidating any previous one.
    pub async fn new_game(&mut self) -> Result<SessionId, SessionError> {
        let result = self.backend.new_game().await;
        let id = result.map_err(|e| self.fail(e))?;
        self.dispatch(SessionEvent::GameCreated(id.clone()));
        Ok(id)
    }

    /// Request the next level. No-op while a level is already active.
    ///
    /// After a game over (or before any session exists) this first awaits
    /// a fresh `new_game`, then requests the level against it.
    pub async fn start_level(&mut self) -> Result<(), SessionError> {
        if self.state.playing() {
            return Ok(());
        }

        let session = match self.state.session() {
            Some(s) if !self.state.game_over() => s.clone(),
            _ => self.new_game().await?,
        };

        let result = self.backend.generate_level(&session).await;
        let snapshot = result.map_err(|e| self.fail(e))?;
        self.dispatch(SessionEvent::SnapshotReceived(snapshot));
        Ok(())
    }

    /// Submit a judgment for the active prompt. No-op unless playing.
    pub async fn submit(&mut self, answer: Answer) -> Result<(), SessionError> {
        if !self.state.playing() {
            return Ok(());
        }
        let Some(session) = self.state.session().cloned() else {
            return Ok(());
        };

        let result = self.backend.submit_answer(&session, answer).await;
        let snapshot = result.map_err(|e| self.fail(e))?;
        self.dispatch(SessionEvent::SnapshotReceived(snapshot));
        Ok(())
    }

    /// End the current game explicitly. Sticky until a new game starts.
    pub fn end(&mut self) {
        self.dispatch(SessionEvent::Ended);
    }

    fn dispatch(&mut self, event: SessionEvent) {
        self.state = std::mem::take(&mut self.state).apply(event);
    }

    fn fail(&mut self, error: patches_api::Error) -> SessionError {
        let error = SessionError::Api(error);
        if error.is_protocol() {
            self.dispatch(SessionEvent::Poisoned);
        }
        error
    }
}
