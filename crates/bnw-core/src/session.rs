//! The per-playthrough session aggregate.

use serde::{Deserialize, Serialize};

use crate::effect::ActiveEffect;
use crate::item::Inventory;
use crate::node::StoryNode;
use crate::stats::GameStats;

/// Everything that changes as a single playthrough advances.
///
/// A session is owned by exactly one playthrough. The turn resolver takes
/// it by value and returns the next one; nothing mutates it in place from
/// outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    /// Current resources.
    pub stats: GameStats,
    /// Held items.
    pub inventory: Inventory,
    /// Live status effect instances, in application order.
    pub active_effects: Vec<ActiveEffect>,
    /// The node currently displayed, with composed text.
    pub current_node: Option<StoryNode>,
    /// Whether the playthrough has ended.
    pub is_game_over: bool,
    /// Turns resolved since the last restart.
    pub turn: u32,
}

impl GameSession {
    /// Start a fresh session with the given stats.
    pub fn new(stats: GameStats) -> Self {
        Self {
            stats,
            inventory: Inventory::new(),
            active_effects: Vec::new(),
            current_node: None,
            is_game_over: false,
            turn: 0,
        }
    }

    /// Count live instances of an effect id.
    pub fn effect_count(&self, effect_id: &str) -> usize {
        self.active_effects
            .iter()
            .filter(|e| e.id() == effect_id)
            .count()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameStats::INITIAL)
    }
}
