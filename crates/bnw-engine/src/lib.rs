//! Turn resolution for Beautiful New World.
//!
//! Given the current [`GameSession`](bnw_core::GameSession) and the story
//! node a provider returned for the player's choice, [`TurnResolver`]
//! computes the next session: status effects are applied and ticked, the
//! node's own stat change lands, stats are clamped, death is detected, loot
//! is merged into the inventory, and the effect log is appended to the
//! displayed text.
//!
//! Resolution is deterministic and performs no I/O. Missing catalog entries
//! are skipped rather than reported.

/// Rule knobs: starting stats and the restart choice.
pub mod config;
/// Effect instantiation and per-turn ticking.
pub mod effects;
/// Loot merging into the inventory.
pub mod loot;
/// The turn resolver itself.
pub mod resolver;
/// Display text composition.
pub mod text;
/// Stat clamping and death detection.
pub mod vitals;

pub use config::RulesConfig;
pub use effects::{EffectEvent, EffectTick};
pub use resolver::TurnResolver;
pub use vitals::Vitals;
