//! The running transcript of a playthrough.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The player's chosen action.
    Player,
    /// Narrative text shown to the player.
    Narrator,
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Who said it.
    pub role: Role,
    /// What was said.
    pub text: String,
    /// When it was recorded.
    pub at: DateTime<Utc>,
}

/// Ordered transcript handed to node providers as context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a player action.
    pub fn record_player(&mut self, text: impl Into<String>) {
        self.push(Role::Player, text.into());
    }

    /// Record narrative text.
    pub fn record_narrator(&mut self, text: impl Into<String>) {
        self.push(Role::Narrator, text.into());
    }

    fn push(&mut self, role: Role, text: String) {
        self.entries.push(HistoryEntry {
            role,
            text,
            at: Utc::now(),
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recent player action, if any.
    pub fn last_player_text(&self) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.role == Role::Player)
            .map(|e| e.text.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut history = History::new();
        history.record_player("Where am I?");
        history.record_narrator("Among the stars.");
        let roles: Vec<_> = history.entries().iter().map(|e| e.role).collect();
        assert_eq!(roles, [Role::Player, Role::Narrator]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn last_player_text() {
        let mut history = History::new();
        assert_eq!(history.last_player_text(), None);
        history.record_player("First");
        history.record_narrator("...");
        history.record_player("Second");
        history.record_narrator("...");
        assert_eq!(history.last_player_text(), Some("Second"));
    }

    #[test]
    fn clear() {
        let mut history = History::new();
        history.record_player("x");
        history.clear();
        assert!(history.is_empty());
    }
}
