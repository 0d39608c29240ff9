//! The turn-by-turn game driver.
//!
//! [`Game`] owns one playthrough: its session, transcript, catalogs, and
//! node provider. Each choice goes through the same pipeline: fetch (with a
//! deadline), fall back on failure, validate, resolve, record.

use bnw_core::{EffectCatalog, GameSession, ItemCatalog};
use bnw_engine::TurnResolver;
use uuid::Uuid;

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::fallback::fallback_node;
use crate::history::History;
use crate::provider::NodeProvider;
use crate::timeout::TimeoutProvider;
use crate::validate::validate_node;

/// A single playthrough driven by a node provider.
///
/// Turn methods take `&mut self`, so a game never has two turns in flight.
pub struct Game<P> {
    id: Uuid,
    provider: TimeoutProvider<P>,
    items: ItemCatalog,
    effects: EffectCatalog,
    config: GameConfig,
    session: GameSession,
    history: History,
}

impl<P: NodeProvider> Game<P> {
    /// Create a game over the built-in item and effect catalogs.
    pub fn new(provider: P, config: GameConfig) -> Self {
        Self::with_catalogs(
            provider,
            config,
            ItemCatalog::builtin(),
            EffectCatalog::builtin(),
        )
    }

    /// Create a game with explicit catalogs.
    pub fn with_catalogs(
        provider: P,
        config: GameConfig,
        items: ItemCatalog,
        effects: EffectCatalog,
    ) -> Self {
        let session = GameSession::new(config.rules.initial_stats);
        Self {
            id: Uuid::new_v4(),
            provider: TimeoutProvider::new(provider, config.provider_timeout),
            items,
            effects,
            config,
            session,
            history: History::new(),
        }
    }

    /// Unique id of this playthrough, used in log spans.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The transcript since the last restart.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Begin (or begin again) from the intro node.
    ///
    /// The very first start records no player line, so the provider sees an
    /// empty transcript for the intro.
    pub async fn start(&mut self) -> &GameSession {
        let rules = &self.config.rules;
        let id = rules.restart_choice_id.clone();
        let text = self
            .session
            .current_node
            .is_some()
            .then(|| rules.restart_choice_text.clone());
        self.play(&id, text).await
    }

    /// Take the offered choice with the given id.
    ///
    /// The restart id is always accepted; any other id must be offered by
    /// the current node.
    pub async fn choose(&mut self, choice_id: &str) -> GameResult<&GameSession> {
        let rules = &self.config.rules;
        let text = match &self.session.current_node {
            _ if rules.is_restart(choice_id) => rules.restart_choice_text.clone(),
            None => return Err(GameError::NotStarted),
            Some(node) => node
                .choice(choice_id)
                .map(|c| c.text.clone())
                .ok_or_else(|| GameError::UnknownChoice(choice_id.to_string()))?,
        };
        Ok(self.play(choice_id, Some(text)).await)
    }

    /// Take the offered choice at a 1-based position.
    pub async fn choose_index(&mut self, index: usize) -> GameResult<&GameSession> {
        let node = self
            .session
            .current_node
            .as_ref()
            .ok_or(GameError::NotStarted)?;
        let available = node.choices.len();
        let choice = index
            .checked_sub(1)
            .and_then(|i| node.choices.get(i))
            .ok_or(GameError::ChoiceOutOfRange { index, available })?;
        let id = choice.id.clone();
        self.choose(&id).await
    }

    #[tracing::instrument(skip_all, fields(game = %self.id, choice = %choice_id))]
    async fn play(&mut self, choice_id: &str, choice_text: Option<String>) -> &GameSession {
        let restarting = self.config.rules.is_restart(choice_id);
        if restarting {
            tracing::info!("starting a new playthrough");
            self.history.clear();
        }
        if let Some(text) = choice_text {
            self.history.record_player(text);
        }

        let fetched = self
            .provider
            .fetch_node(choice_id, &self.history)
            .await
            .and_then(validate_node);
        let node = match fetched {
            Ok(node) => node,
            Err(error) => {
                tracing::warn!(%error, "node provider failed, showing fallback node");
                fallback_node(choice_id, &self.config)
            }
        };

        let resolver = TurnResolver::new(&self.items, &self.effects, &self.config.rules);
        let previous = std::mem::take(&mut self.session);
        self.session = resolver.resolve(previous, choice_id, &node);

        if let Some(display) = &self.session.current_node {
            self.history.record_narrator(display.text.as_str());
        }

        tracing::info!(
            turn = self.session.turn,
            hp = self.session.stats.hp,
            mana = self.session.stats.mana,
            game_over = self.session.is_game_over,
            "turn complete"
        );
        &self.session
    }
}
