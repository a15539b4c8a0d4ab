//! Session state machine and view model for the Patches Please client.
//!
//! This crate owns everything between the HTTP client and the terminal UI:
//! - the session state reducer ([`state`])
//! - pure view-model derivation for the three screen regions ([`view_model`])
//! - the backend seam and a scripted mock for tests ([`backend`], [`testing`])
//! - the high-level session driver ([`controller`])
//!
//! # Quick Start
//!
//! ```ignore
//! use patches_core::{GameApi, GameController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut controller = GameController::new(GameApi::from_env());
//!     controller.new_game().await?;
//!     controller.start_level().await?;
//!     println!("{}", controller.view_model().header.title);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod controller;
pub mod state;
pub mod testing;
pub mod view_model;

// Re-export the API client types the UI needs.
pub use patches_api::{
    Answer, Error as ApiError, GameApi, GameSnapshot, LevelInfo, PromptInfo, SessionId,
};

// Primary public API
pub use backend::Backend;
pub use controller::{GameController, SessionError};
pub use state::{Phase, SessionEvent, SessionState};
pub use view_model::{ButtonSet, Editors, Header, HeaderTone, Sidebar, ViewModel};
