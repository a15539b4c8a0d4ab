//! Backend seam between the session controller and the network.

use patches_api::{Answer, Error, GameApi, GameSnapshot, SessionId};

/// The three game operations the controller needs.
///
/// Implemented by the real HTTP client and by the scripted
/// [`MockBackend`](crate::testing::MockBackend) for tests.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Start a new session.
    async fn new_game(&mut self) -> Result<SessionId, Error>;

    /// Fetch the next level for a session.
    async fn generate_level(&mut self, session: &SessionId) -> Result<GameSnapshot, Error>;

    /// Submit a judgment for the active prompt.
    async fn submit_answer(
        &mut self,
        session: &SessionId,
        answer: Answer,
    ) -> Result<GameSnapshot, Error>;
}

impl Backend for GameApi {
    async fn new_game(&mut self) -> Result<SessionId, Error> {
        GameApi::new_game(self).await
    }

    async fn generate_level(&mut self, session: &SessionId) -> Result<GameSnapshot, Error> {
        GameApi::generate_level(self, session).await
    }

    async fn submit_answer(
        &mut self,
        session: &SessionId,
        answer: Answer,
    ) -> Result<GameSnapshot, Error> {
        GameApi::submit_answer(self, session, answer).await
    }
}
