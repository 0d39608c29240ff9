//! Rule configuration for turn resolution.

use bnw_core::{Choice, GameStats};

/// Choice id that restarts the game from the intro.
pub const DEFAULT_RESTART_ID: &str = "intro";

/// Text of the synthetic choice offered after death.
pub const DEFAULT_RESTART_TEXT: &str = "Your soul returns to the cycle (New Game)";

/// Configuration for the turn resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    /// Stats a fresh or restarted session starts with.
    pub initial_stats: GameStats,
    /// Choice id that resets the session before resolving.
    pub restart_choice_id: String,
    /// Text of the restart choice offered after death.
    pub restart_choice_text: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            initial_stats: GameStats::INITIAL,
            restart_choice_id: DEFAULT_RESTART_ID.to_string(),
            restart_choice_text: DEFAULT_RESTART_TEXT.to_string(),
        }
    }
}

impl RulesConfig {
    /// Set the starting stats.
    pub fn with_initial_stats(mut self, stats: GameStats) -> Self {
        self.initial_stats = stats;
        self
    }

    /// Set the restart choice id.
    pub fn with_restart_id(mut self, id: impl Into<String>) -> Self {
        self.restart_choice_id = id.into();
        self
    }

    /// Set the restart choice text.
    pub fn with_restart_text(mut self, text: impl Into<String>) -> Self {
        self.restart_choice_text = text.into();
        self
    }

    /// Returns true if the given choice id restarts the game.
    pub fn is_restart(&self, choice_id: &str) -> bool {
        choice_id == self.restart_choice_id
    }

    /// The single choice offered once the player is dead.
    pub fn restart_choice(&self) -> Choice {
        Choice::new(&self.restart_choice_id, &self.restart_choice_text)
    }
}
