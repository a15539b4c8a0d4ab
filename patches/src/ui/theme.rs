//! Color theme and styling for the game client.

use ratatui::style::{Color, Modifier, Style};

use patches_core::HeaderTone;

/// Game UI color theme.
#[derive(Debug, Clone)]
pub struct GameTheme {
    // Base colors
    pub border: Color,
    pub border_focused: Color,

    // Header colors
    pub title_idle: Color,
    pub title_active: Color,
    pub title_game_over: Color,

    // Sidebar colors
    pub lives_ok: Color,
    pub lives_low: Color,
    pub score: Color,

    // Button colors
    pub button_start: Color,
    pub button_accept: Color,
    pub button_deny: Color,

    // Text colors
    pub line_number: Color,
    pub status_text: Color,
    pub error_text: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            title_idle: Color::White,
            title_active: Color::Green,
            title_game_over: Color::Red,

            lives_ok: Color::White,
            lives_low: Color::Red,
            score: Color::White,

            button_start: Color::Blue,
            button_accept: Color::Green,
            button_deny: Color::Red,

            line_number: Color::DarkGray,
            status_text: Color::DarkGray,
            error_text: Color::Red,
        }
    }
}

impl GameTheme {
    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Get style for the header title line
    pub fn title_style(&self, tone: HeaderTone) -> Style {
        let color = match tone {
            HeaderTone::Idle => self.title_idle,
            HeaderTone::Active => self.title_active,
            HeaderTone::GameOver => self.title_game_over,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Get style for the lives count; one life left blinks red
    pub fn lives_style(&self, low: bool) -> Style {
        if low {
            Style::default()
                .fg(self.lives_low)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
        } else {
            Style::default().fg(self.lives_ok)
        }
    }

    /// Get style for the score line
    pub fn score_style(&self) -> Style {
        Style::default().fg(self.score)
    }

    /// Get style for line-number gutters
    pub fn line_number_style(&self) -> Style {
        Style::default().fg(self.line_number).add_modifier(Modifier::DIM)
    }

    /// Get style for the status bar
    pub fn status_style(&self, is_error: bool) -> Style {
        if is_error {
            Style::default().fg(self.error_text)
        } else {
            Style::default().fg(self.status_text)
        }
    }
}
