//! Network worker task.
//!
//! The UI never talks to the API directly: it sends [`WorkerRequest`]s over
//! an mpsc channel to this task, which owns the [`GameController`] and
//! processes one request at a time. Serializing requests here rules out
//! overlapping calls against the same session, and a request from a
//! previous session can never complete after a new game has started.

use tokio::sync::mpsc;

use patches_core::{Answer, Backend, GameController, SessionError, SessionState};

/// Requests from the UI to the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerRequest {
    NewGame,
    StartLevel,
    Submit(Answer),
    End,
}

/// Reply from the worker after processing a request.
#[derive(Debug)]
pub struct WorkerResponse {
    /// Session state after the request.
    pub state: SessionState,
    /// Banner text when the request failed.
    pub error: Option<String>,
}

/// Process requests until the UI drops its sender.
pub async fn run<B: Backend>(
    backend: B,
    mut requests: mpsc::Receiver<WorkerRequest>,
    responses: mpsc::Sender<WorkerResponse>,
) {
    let mut controller = GameController::new(backend);

    while let Some(request) = requests.recv().await {
        let result = match request {
            WorkerRequest::NewGame => controller.new_game().await.map(|_| ()),
            WorkerRequest::StartLevel => controller.start_level().await,
            WorkerRequest::Submit(answer) => controller.submit(answer).await,
            WorkerRequest::End => {
                controller.end();
                Ok(())
            }
        };

        let response = WorkerResponse {
            state: controller.state().clone(),
            error: result.err().map(|e| banner(&e)),
        };
        if responses.send(response).await.is_err() {
            break;
        }
    }
}

fn banner(error: &SessionError) -> String {
    if error.is_protocol() {
        format!("{error} - press Space to start a new game")
    } else {
        format!("{error} - check the server and try again")
    }
}
