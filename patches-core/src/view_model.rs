//! Declarative render model for the game screen.
//!
//! [`ViewModel::from_state`] derives everything the three screen regions
//! (header, sidebar, editors) need to draw, as a pure function of
//! [`SessionState`]. The rendering layer draws from this value alone, so
//! re-deriving from identical state is trivially idempotent and there is no
//! mount/unmount bookkeeping anywhere.

use patches_api::GameSnapshot;

use crate::state::SessionState;

/// Everything the game screen needs to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub header: Header,
    pub sidebar: Sidebar,
    pub editors: Editors,
}

/// Styling intent for the header region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTone {
    Idle,
    Active,
    GameOver,
}

/// Title and subtitle lines at the top of the game screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
    pub tone: HeaderTone,
}

/// Lives, score, and the visible action buttons.
///
/// `lives` and `score` are absent until the first snapshot arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub lives: Option<i32>,
    /// Exactly one life left; rendered with the low-lives style.
    pub low_lives: bool,
    pub score: Option<i64>,
    pub buttons: ButtonSet,
}

/// Exactly one button set is visible at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSet {
    /// The game is waiting for a level to start.
    Idle,
    /// A prompt is on screen awaiting judgment.
    Judging,
}

impl ButtonSet {
    /// On-screen button labels, matching the key bindings.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            ButtonSet::Idle => &["(Space) Start"],
            ButtonSet::Judging => &["(y) Accept", "(n) Deny"],
        }
    }
}

/// Contents of the two code panes; both empty when no level is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Editors {
    pub left: String,
    pub right: String,
}

impl ViewModel {
    /// Derive the view model from the current session state.
    pub fn from_state(state: &SessionState) -> Self {
        let snapshot = state.snapshot();
        let game_over = state.game_over();
        let level_active = snapshot.is_some_and(|s| s.current_level.is_some());

        Self {
            header: header_for(snapshot, game_over),
            sidebar: Sidebar {
                lives: snapshot.map(|s| s.lives),
                low_lives: snapshot.map(|s| s.lives) == Some(1),
                score: snapshot.map(|s| s.score),
                buttons: if !level_active || game_over {
                    ButtonSet::Idle
                } else {
                    ButtonSet::Judging
                },
            },
            editors: editors_for(snapshot, game_over),
        }
    }
}

// The no-level check wins over game-over, matching the server's contract:
// a snapshot without a level always reads as "waiting to start".
fn header_for(snapshot: Option<&GameSnapshot>, game_over: bool) -> Header {
    let Some(snapshot) = snapshot else {
        return Header::press_start();
    };
    let Some(level) = &snapshot.current_level else {
        return Header::press_start();
    };
    if game_over || snapshot.out_of_lives() {
        return Header::game_over();
    }

    let subtitle = snapshot
        .current_prompt
        .as_ref()
        .map(|p| p.title.clone())
        .unwrap_or_default();

    Header {
        title: format!(
            "{} ({}/{})",
            level.repo_id, level.prompt_number, level.max_prompts
        ),
        subtitle,
        tone: HeaderTone::Active,
    }
}

fn editors_for(snapshot: Option<&GameSnapshot>, game_over: bool) -> Editors {
    match snapshot {
        Some(s) if s.current_level.is_some() && !game_over => match &s.current_prompt {
            Some(prompt) => Editors {
                left: prompt.file_a_contents.clone(),
                right: prompt.file_b_contents.clone(),
            },
            None => Editors::default(),
        },
        _ => Editors::default(),
    }
}

impl Header {
    fn press_start() -> Self {
        Self {
            title: "Please press Start...".to_string(),
            subtitle: String::new(),
            tone: HeaderTone::Idle,
        }
    }

    fn game_over() -> Self {
        Self {
            title: "Game Over!".to_string(),
            subtitle: "Try again by pressing Start.".to_string(),
            tone: HeaderTone::GameOver,
        }
    }
}
