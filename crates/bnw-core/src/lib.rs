//! Core types for Beautiful New World: stats, items, status effects, story
//! nodes, and the session aggregate.
//!
//! This crate holds data only. Turn resolution lives in `bnw-engine` and
//! node providers live in `bnw-story`; both speak in the types defined here.

/// Read-only item and effect registries.
pub mod catalog;
/// Status effect definitions and live instances.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// Items and the deduplicating inventory.
pub mod item;
/// Story nodes, choices, and scene tags.
pub mod node;
/// The per-playthrough session aggregate.
pub mod session;
/// Player resource stats.
pub mod stats;

/// Re-export catalog types.
pub use catalog::{EffectCatalog, ItemCatalog};
/// Re-export effect types.
pub use effect::{ActiveEffect, EffectKind, StatusEffect};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Inventory, Item, ItemKind};
/// Re-export story node types.
pub use node::{Choice, SceneTag, StoryNode};
/// Re-export session types.
pub use session::GameSession;
/// Re-export stat types.
pub use stats::GameStats;
