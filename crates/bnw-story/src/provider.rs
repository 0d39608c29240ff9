//! The node provider contract.

use async_trait::async_trait;
use bnw_core::StoryNode;

use crate::error::ProviderError;
use crate::history::History;

/// Produces the next story node for a chosen action.
///
/// Implementations may be deterministic lookups or remote generators. The
/// game driver always awaits a concrete node (or error) before resolving
/// the turn, so both kinds are interchangeable.
#[async_trait]
pub trait NodeProvider: Send + Sync {
    /// Fetch the node that follows `choice_id`, given the transcript so far.
    async fn fetch_node(
        &self,
        choice_id: &str,
        history: &History,
    ) -> Result<StoryNode, ProviderError>;
}
