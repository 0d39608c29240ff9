//! Stat clamping and death detection.
//!
//! HP is capped at the maximum before the death check but is not floored,
//! so overkill still registers as death. Once the check has run, HP is
//! floored at zero so a stored session never carries negative HP.

use bnw_core::GameStats;

/// Stats after a turn's deltas have been applied and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vitals {
    /// Final stats, within bounds.
    pub stats: GameStats,
    /// HP as seen by the death check (capped, not floored).
    pub checked_hp: i32,
    /// Whether the player died or the node ended the game.
    pub is_dead: bool,
}

/// Apply summed deltas to `base`, clamp, and check for death.
pub fn settle(base: GameStats, hp_delta: i32, mana_delta: i32, game_over: bool) -> Vitals {
    let checked_hp = base.hp.saturating_add(hp_delta).min(base.max_hp);
    let mana = base.mana.saturating_add(mana_delta).max(0).min(base.max_mana);

    let is_dead = checked_hp <= 0 || game_over;

    Vitals {
        stats: GameStats {
            hp: checked_hp.max(0),
            mana,
            ..base
        },
        checked_hp,
        is_dead,
    }
}
