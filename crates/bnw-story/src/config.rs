//! Configuration for a game.

use std::time::Duration;

use bnw_core::{CoreResult, GameStats};
use bnw_engine::RulesConfig;
use serde::Deserialize;

/// Configuration for a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Turn resolution rules.
    pub rules: RulesConfig,
    /// How long to wait for the node provider before falling back.
    pub provider_timeout: Duration,
    /// Narrative text of the fallback node.
    pub fallback_text: String,
    /// Text of the fallback node's retry choice.
    pub retry_text: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            provider_timeout: Duration::from_secs(10),
            fallback_text: "The threads of fate tangle for a moment and the world goes \
                            quiet. Something went wrong while weaving the story."
                .to_string(),
            retry_text: "Try again".to_string(),
        }
    }
}

/// On-disk form of [`GameConfig`]; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GameConfigFile {
    initial_stats: Option<GameStats>,
    restart_choice_id: Option<String>,
    restart_choice_text: Option<String>,
    provider_timeout_ms: Option<u64>,
    fallback_text: Option<String>,
    retry_text: Option<String>,
}

impl GameConfig {
    /// Parse a JSON config, filling unspecified fields with defaults.
    ///
    /// Starting stats must already satisfy `0 <= hp <= maxHp` and
    /// `0 <= mana <= maxMana`; anything else is
    /// [`CoreError::InvalidStats`](bnw_core::CoreError::InvalidStats).
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let file: GameConfigFile = serde_json::from_str(json)?;
        let mut config = Self::default();
        if let Some(stats) = file.initial_stats {
            config.rules = config.rules.with_initial_stats(stats.validate()?);
        }
        if let Some(id) = file.restart_choice_id {
            config.rules = config.rules.with_restart_id(id);
        }
        if let Some(text) = file.restart_choice_text {
            config.rules = config.rules.with_restart_text(text);
        }
        if let Some(ms) = file.provider_timeout_ms {
            config.provider_timeout = Duration::from_millis(ms);
        }
        if let Some(text) = file.fallback_text {
            config.fallback_text = text;
        }
        if let Some(text) = file.retry_text {
            config.retry_text = text;
        }
        Ok(config)
    }

    /// Set the resolution rules.
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Set the provider timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Set the fallback node text.
    pub fn with_fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = text.into();
        self
    }

    /// Set the retry choice text.
    pub fn with_retry_text(mut self, text: impl Into<String>) -> Self {
        self.retry_text = text.into();
        self
    }
}
