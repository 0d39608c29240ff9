//! Story node providers and the turn-by-turn game driver.
//!
//! A [`NodeProvider`] answers "what happens after this choice?" with a
//! [`StoryNode`](bnw_core::StoryNode). Providers may be static tables or
//! remote generators; [`Game`] treats them uniformly, bounds each fetch with
//! a timeout, substitutes a fallback node when a fetch fails, and hands the
//! result to the turn resolver.

/// Game configuration.
pub mod config;
/// Error types for providers and the game driver.
pub mod error;
/// Fallback nodes for failed fetches.
pub mod fallback;
/// The turn-by-turn game driver.
pub mod game;
/// The transcript passed to providers.
pub mod history;
/// The node provider contract.
pub mod provider;
/// Scene classification and asset lookup.
pub mod scene;
/// Static story table provider.
pub mod table;
/// Deadline wrapper for providers.
pub mod timeout;
/// Provider-boundary validation of nodes.
pub mod validate;

pub use config::GameConfig;
pub use error::{GameError, GameResult, ProviderError};
pub use game::Game;
pub use history::{History, HistoryEntry, Role};
pub use provider::NodeProvider;
pub use scene::{SceneAsset, classify_prompt, resolve_scene_asset};
pub use table::StoryTable;
pub use timeout::TimeoutProvider;
