//! Testing utilities for the game client.
//!
//! This module provides tools for deterministic tests without network:
//! - [`MockBackend`], a scripted [`Backend`] returning queued results
//! - snapshot fixture helpers

use std::collections::VecDeque;

use patches_api::{Answer, Error, GameSnapshot, LevelInfo, PromptInfo, SessionId};

use crate::backend::Backend;

/// A scripted backend that returns queued results in order.
#[derive(Default)]
pub struct MockBackend {
    sessions: VecDeque<Result<String, Error>>,
    snapshots: VecDeque<Result<GameSnapshot, Error>>,
    /// Every call made, in order, for assertions.
    pub calls: Vec<MockCall>,
}

/// A recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    NewGame,
    GenerateLevel(String),
    Submit(String, Answer),
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a session id for the next `new_game` call.
    pub fn queue_session(&mut self, id: impl Into<String>) {
        self.sessions.push_back(Ok(id.into()));
    }

    /// Queue a failure for the next `new_game` call.
    pub fn queue_session_error(&mut self, error: Error) {
        self.sessions.push_back(Err(error));
    }

    /// Queue a snapshot for the next `generate_level` or `submit_answer`
    /// call.
    pub fn queue_snapshot(&mut self, snapshot: GameSnapshot) {
        self.snapshots.push_back(Ok(snapshot));
    }

    /// Queue a failure for the next snapshot-returning call.
    pub fn queue_snapshot_error(&mut self, error: Error) {
        self.snapshots.push_back(Err(error));
    }
}

impl Backend for MockBackend {
    async fn new_game(&mut self) -> Result<SessionId, Error> {
        self.calls.push(MockCall::NewGame);
        match self.sessions.pop_front() {
            Some(result) => result.map(SessionId::new),
            None => Err(Error::Network("mock has no more sessions".to_string())),
        }
    }

    async fn generate_level(&mut self, session: &SessionId) -> Result<GameSnapshot, Error> {
        self.calls
            .push(MockCall::GenerateLevel(session.as_str().to_string()));
        self.next_snapshot()
    }

    async fn submit_answer(
        &mut self,
        session: &SessionId,
        answer: Answer,
    ) -> Result<GameSnapshot, Error> {
        self.calls
            .push(MockCall::Submit(session.as_str().to_string(), answer));
        self.next_snapshot()
    }
}

impl MockBackend {
    fn next_snapshot(&mut self) -> Result<GameSnapshot, Error> {
        match self.snapshots.pop_front() {
            Some(result) => result,
            None => Err(Error::Network("mock has no more snapshots".to_string())),
        }
    }
}

// ============================================================================
// Snapshot fixtures
// ============================================================================

/// A snapshot with no active level.
pub fn idle_snapshot(lives: i32, score: i64) -> GameSnapshot {
    GameSnapshot {
        current_level: None,
        current_prompt: None,
        lives,
        score,
    }
}

/// A snapshot with an active level and a fully specified prompt.
#[allow(clippy::too_many_arguments)]
pub fn snapshot(
    repo_id: &str,
    prompt_number: u32,
    max_prompts: u32,
    title: &str,
    file_a: &str,
    file_b: &str,
    lives: i32,
    score: i64,
) -> GameSnapshot {
    GameSnapshot {
        current_level: Some(LevelInfo {
            repo_id: repo_id.to_string(),
            prompt_number,
            max_prompts,
        }),
        current_prompt: Some(PromptInfo {
            title: title.to_string(),
            file_a_contents: file_a.to_string(),
            file_b_contents: file_b.to_string(),
        }),
        lives,
        score,
    }
}

/// A snapshot with an active level and a placeholder prompt.
pub fn playing_snapshot(
    repo_id: &str,
    prompt_number: u32,
    max_prompts: u32,
    lives: i32,
    score: i64,
) -> GameSnapshot {
    snapshot(
        repo_id,
        prompt_number,
        max_prompts,
        "Which file is real?",
        "fn a() {}",
        "fn b() {}",
        lives,
        score,
    )
}
