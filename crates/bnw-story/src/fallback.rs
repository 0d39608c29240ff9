//! Fallback nodes for failed fetches.

use bnw_core::{SceneTag, StoryNode};

use crate::config::GameConfig;

/// Build the node shown when the provider could not answer `choice_id`.
///
/// The node carries no deltas and offers a single choice that retries the
/// same id. It is resolved like any other node, so live effects still tick.
pub fn fallback_node(choice_id: &str, config: &GameConfig) -> StoryNode {
    StoryNode::new(config.fallback_text.as_str())
        .with_choice(choice_id, config.retry_text.as_str())
        .with_scene(SceneTag::Hiding)
}
