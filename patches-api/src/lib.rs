//! Minimal HTTP client for the Patches Please game API.
//!
//! This crate provides a focused client for the game backend with:
//! - Session creation (`/new`)
//! - Level generation (`/genlevel/{session}`)
//! - Answer submission (`/submit/{session}/{yes|no}`)
//!
//! All endpoints are GET and return JSON. The client performs no retries;
//! failures surface to the caller untouched.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "PATCHES_API_URL";

/// Errors that can occur when talking to the game API.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Game API client.
#[derive(Clone)]
pub struct GameApi {
    client: reqwest::Client,
    base_url: String,
}

impl GameApi {
    /// Create a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: trim_trailing_slash(base_url.into()),
        }
    }

    /// Create a client from the `PATCHES_API_URL` environment variable,
    /// falling back to the default local server address.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a new game session.
    pub async fn new_game(&self) -> Result<SessionId, Error> {
        let wire: NewGameWire = self.get_json("new").await?;
        Ok(SessionId(wire.id))
    }

    /// Fetch the next level/prompt for a session.
    pub async fn generate_level(&self, session: &SessionId) -> Result<GameSnapshot, Error> {
        self.get_json(&format!("genlevel/{session}")).await
    }

    /// Submit a yes/no judgment and return the updated game state.
    pub async fn submit_answer(
        &self,
        session: &SessionId,
        answer: Answer,
    ) -> Result<GameSnapshot, Error> {
        self.get_json(&format!("submit/{session}/{}", answer.as_path()))
            .await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self
            .client
            .get(format!("{}/{path}", self.base_url))
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

// ============================================================================
// Public types
// ============================================================================

/// Opaque server-issued session identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The player's judgment on the current prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// The path segment the API expects.
    pub fn as_path(self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
        }
    }
}

/// Game state as returned by `/genlevel` and `/submit`.
///
/// `current_level` being `None` means no level is active; the game ends
/// when `lives` drops to zero or below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSnapshot {
    pub current_level: Option<LevelInfo>,
    pub current_prompt: Option<PromptInfo>,
    pub lives: i32,
    pub score: i64,
}

impl GameSnapshot {
    /// Whether this snapshot ends the game.
    pub fn out_of_lives(&self) -> bool {
        self.lives <= 0
    }
}

/// The level a session is currently on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelInfo {
    pub repo_id: String,
    pub prompt_number: u32,
    pub max_prompts: u32,
}

/// A single prompt: two candidate files, one real.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptInfo {
    pub title: String,
    pub file_a_contents: String,
    pub file_b_contents: String,
}

// ============================================================================
// Internal wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct NewGameWire {
    id: String,
}
