//! Deadline wrapper for node providers.
//!
//! There is no way to cancel a request that is already with a remote
//! provider. When the deadline passes the pending fetch is dropped and the
//! caller gets [`ProviderError::Timeout`]; whatever the provider eventually
//! answers is ignored.

use std::time::Duration;

use async_trait::async_trait;
use bnw_core::StoryNode;

use crate::error::ProviderError;
use crate::history::History;
use crate::provider::NodeProvider;

/// Wraps a provider so every fetch either finishes or fails by a deadline.
#[derive(Debug, Clone)]
pub struct TimeoutProvider<P> {
    inner: P,
    deadline: Duration,
}

impl<P> TimeoutProvider<P> {
    /// Wrap `inner` with the given deadline.
    pub fn new(inner: P, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    /// The configured deadline.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[async_trait]
impl<P: NodeProvider> NodeProvider for TimeoutProvider<P> {
    async fn fetch_node(
        &self,
        choice_id: &str,
        history: &History,
    ) -> Result<StoryNode, ProviderError> {
        match tokio::time::timeout(self.deadline, self.inner.fetch_node(choice_id, history)).await
        {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.deadline)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowProvider {
        delay: Duration,
    }

    #[async_trait]
    impl NodeProvider for SlowProvider {
        async fn fetch_node(
            &self,
            _choice_id: &str,
            _history: &History,
        ) -> Result<StoryNode, ProviderError> {
            tokio::time::sleep(self.delay).await;
            Ok(StoryNode::new("Finally.").with_choice("a", "On"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fast_enough() {
        let provider = TimeoutProvider::new(
            SlowProvider {
                delay: Duration::from_millis(100),
            },
            Duration::from_secs(1),
        );
        let node = provider.fetch_node("a", &History::new()).await.unwrap();
        assert_eq!(node.text, "Finally.");
    }

    #[tokio::test(start_paused = true)]
    async fn too_slow() {
        let provider = TimeoutProvider::new(
            SlowProvider {
                delay: Duration::from_secs(30),
            },
            Duration::from_secs(2),
        );
        let err = provider.fetch_node("a", &History::new()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Timeout(d) if d == Duration::from_secs(2)));
    }
}
