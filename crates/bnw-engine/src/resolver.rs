//! The turn resolver.

use bnw_core::{EffectCatalog, GameSession, ItemCatalog, StoryNode};

use crate::config::RulesConfig;
use crate::{effects, loot, text, vitals};

/// Merges a story node into a session to produce the next session.
///
/// The resolver borrows its catalogs and rules; it holds no state of its own
/// and can be rebuilt cheaply for every turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnResolver<'a> {
    items: &'a ItemCatalog,
    effects: &'a EffectCatalog,
    rules: &'a RulesConfig,
}

impl<'a> TurnResolver<'a> {
    /// Create a resolver over the given catalogs and rules.
    pub fn new(items: &'a ItemCatalog, effects: &'a EffectCatalog, rules: &'a RulesConfig) -> Self {
        Self {
            items,
            effects,
            rules,
        }
    }

    /// A session with starting stats, no items, and no effects.
    pub fn fresh_session(&self) -> GameSession {
        GameSession::new(self.rules.initial_stats)
    }

    /// Resolve the player's choice of `choice_id`, which produced `node`.
    ///
    /// Choosing the restart id resets the session before the node is
    /// applied, so stray deltas on the intro node act on a clean slate.
    pub fn resolve(&self, session: GameSession, choice_id: &str, node: &StoryNode) -> GameSession {
        let session = if self.rules.is_restart(choice_id) {
            tracing::debug!("restart choice, resetting session");
            self.fresh_session()
        } else {
            session
        };
        self.resolve_node(session, node)
    }

    /// Merge `node` into `session`.
    ///
    /// Steps run in a fixed order: new effects are attached, all effects
    /// tick, the node's own deltas apply, stats are clamped, death is
    /// checked, loot is merged, and the effect log is appended to the text.
    pub fn resolve_node(&self, session: GameSession, node: &StoryNode) -> GameSession {
        let GameSession {
            stats,
            mut inventory,
            mut active_effects,
            turn,
            ..
        } = session;

        let mut events = effects::instantiate(&node.add_effects, self.effects, &mut active_effects);
        let tick = effects::tick(active_effects);
        events.extend(tick.events);

        let hp_delta = tick.hp.saturating_add(node.hp_change.unwrap_or(0));
        let mana_delta = tick.mana.saturating_add(node.mana_change.unwrap_or(0));
        let vitals = vitals::settle(stats, hp_delta, mana_delta, node.game_over);

        let choices = if vitals.is_dead {
            vec![self.rules.restart_choice()]
        } else {
            node.choices.clone()
        };

        let gained: Vec<String> = loot::merge(&mut inventory, &node.loot, self.items)
            .into_iter()
            .map(|item| item.id)
            .collect();

        let display = StoryNode {
            text: text::compose(&node.text, &events),
            choices,
            scene: Some(node.scene_or_default()),
            game_over: vitals.is_dead,
            ..node.clone()
        };

        tracing::debug!(
            turn = turn.saturating_add(1),
            hp = vitals.stats.hp,
            checked_hp = vitals.checked_hp,
            mana = vitals.stats.mana,
            effects = tick.survivors.len(),
            items = inventory.len(),
            gained = ?gained,
            dead = vitals.is_dead,
            "turn resolved"
        );

        GameSession {
            stats: vitals.stats,
            inventory,
            active_effects: tick.survivors,
            current_node: Some(display),
            is_game_over: vitals.is_dead,
            turn: turn.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bnw_core::{ActiveEffect, Choice, EffectKind, GameStats, SceneTag, StatusEffect};

    struct Fixture {
        items: ItemCatalog,
        effects: EffectCatalog,
        rules: RulesConfig,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                items: ItemCatalog::builtin(),
                effects: EffectCatalog::builtin(),
                rules: RulesConfig::default(),
            }
        }

        fn resolver(&self) -> TurnResolver<'_> {
            TurnResolver::new(&self.items, &self.effects, &self.rules)
        }
    }

    fn forward() -> StoryNode {
        StoryNode::new("You walk on.")
            .with_choice("a", "Left")
            .with_choice("b", "Right")
            .with_choice("c", "Back")
    }

    fn current_text(session: &GameSession) -> &str {
        session
            .current_node
            .as_ref()
            .map(|n| n.text.as_str())
            .unwrap_or_default()
    }

    #[test]
    fn overkill_death_scenario() {
        let fx = Fixture::new();
        let mut session = GameSession::new(GameStats::new(30, 100, 0, 100));
        session.active_effects.push(ActiveEffect::new(
            StatusEffect::new("bleeding", "Bleeding", EffectKind::Debuff, 1).with_hp_per_turn(-8),
        ));
        let node = forward().with_hp_change(-25);

        let next = fx.resolver().resolve(session, "a", &node);

        assert_eq!(next.stats.hp, 0);
        assert!(next.is_game_over);
        assert!(next.active_effects.is_empty());
        let display = next.current_node.unwrap();
        assert!(display.game_over);
        assert_eq!(
            display.choices,
            vec![Choice::new("intro", "Your soul returns to the cycle (New Game)")]
        );
        assert!(display.text.contains("[Bleeding: -8 HP]"));
        assert!(display.text.contains("[Bleeding wore off.]"));
    }

    #[test]
    fn effects_tick_before_node_heal_is_capped() {
        let fx = Fixture::new();
        let mut session = GameSession::new(GameStats::new(98, 100, 50, 100));
        session.active_effects.push(ActiveEffect::new(
            StatusEffect::new("bleeding", "Bleeding", EffectKind::Debuff, 2).with_hp_per_turn(-5),
        ));
        // 98 - 5 + 10 = 103, capped to 100
        let next = fx
            .resolver()
            .resolve_node(session, &forward().with_hp_change(10));
        assert_eq!(next.stats.hp, 100);
        assert_eq!(next.active_effects[0].remaining, 1);
    }

    #[test]
    fn fresh_effect_ticks_on_the_turn_it_lands() {
        let fx = Fixture::new();
        let node = forward().with_effect("bleeding");
        let next = fx.resolver().resolve_node(GameSession::default(), &node);
        assert_eq!(next.stats.hp, 95);
        assert_eq!(next.active_effects.len(), 1);
        assert_eq!(next.active_effects[0].remaining, 2);
        assert_eq!(
            current_text(&next),
            "You walk on.\n\n[You are under the effect of Bleeding!] [Bleeding: -5 HP]"
        );
    }

    #[test]
    fn duration_one_effect_gone_next_turn() {
        let fx = Fixture::new();
        let short = StatusEffect::new("sting", "Sting", EffectKind::Debuff, 1).with_hp_per_turn(-1);
        let effects = EffectCatalog::from_effects([short]).unwrap();
        let resolver = TurnResolver::new(&fx.items, &effects, &fx.rules);

        let after_first = resolver.resolve_node(GameSession::default(), &forward().with_effect("sting"));
        assert_eq!(after_first.stats.hp, 99);
        assert!(after_first.active_effects.is_empty());

        let after_second = resolver.resolve_node(after_first, &forward());
        assert_eq!(after_second.stats.hp, 99);
        assert_eq!(current_text(&after_second), "You walk on.");
    }

    #[test]
    fn stacking_instances_decay_independently() {
        let fx = Fixture::new();
        let resolver = fx.resolver();

        let t1 = resolver.resolve_node(GameSession::default(), &forward().with_effect("bleeding"));
        let t2 = resolver.resolve_node(t1, &forward().with_effect("bleeding"));

        assert_eq!(t2.effect_count("bleeding"), 2);
        let remaining: Vec<_> = t2.active_effects.iter().map(|e| e.remaining).collect();
        assert_eq!(remaining, [1, 2]);
        // 100 - 5 (t1) - 5 - 5 (t2)
        assert_eq!(t2.stats.hp, 85);

        let t3 = resolver.resolve_node(t2, &forward());
        assert_eq!(t3.effect_count("bleeding"), 1);
        assert_eq!(t3.active_effects[0].remaining, 1);
        assert_eq!(t3.stats.hp, 75);
    }

    #[test]
    fn loot_is_idempotent_for_held_items() {
        let fx = Fixture::new();
        let mut session = GameSession::default();
        session
            .inventory
            .insert(fx.items.get("health_potion").unwrap());
        let node = forward()
            .with_loot("health_potion")
            .with_loot("health_potion");

        let next = fx.resolver().resolve_node(session.clone(), &node);
        assert_eq!(next.inventory, session.inventory);
    }

    #[test]
    fn unknown_catalog_ids_are_noops() {
        let fx = Fixture::new();
        let node = forward().with_loot("excalibur").with_effect("petrified");
        let next = fx.resolver().resolve_node(GameSession::default(), &node);
        assert!(next.inventory.is_empty());
        assert!(next.active_effects.is_empty());
        assert_eq!(next.stats, GameStats::INITIAL);
        assert_eq!(current_text(&next), "You walk on.");
    }

    #[test]
    fn game_over_node_gets_single_restart_choice() {
        let fx = Fixture::new();
        let node = forward().with_game_over();
        let next = fx.resolver().resolve_node(GameSession::default(), &node);
        assert!(next.is_game_over);
        let display = next.current_node.unwrap();
        assert_eq!(display.choices.len(), 1);
        assert_eq!(display.choices[0].id, "intro");
        assert_eq!(next.stats.hp, 100);
    }

    #[test]
    fn loot_still_merges_on_death() {
        let fx = Fixture::new();
        let node = forward().with_hp_change(-500).with_loot("moon_key");
        let next = fx.resolver().resolve_node(GameSession::default(), &node);
        assert!(next.is_game_over);
        assert!(next.inventory.contains("moon_key"));
    }

    #[test]
    fn restart_clears_everything() {
        let fx = Fixture::new();
        let mut session = GameSession::new(GameStats::new(3, 100, 0, 100));
        session.inventory.insert(fx.items.get("rusty_sword").unwrap());
        session
            .active_effects
            .push(ActiveEffect::new(fx.effects.get("poisoned").unwrap()));
        session.is_game_over = true;
        session.turn = 12;

        let intro = StoryNode::new("Stars swirl.")
            .with_choice("1a", "Where am I?")
            .with_scene(SceneTag::Void);
        let next = fx.resolver().resolve(session, "intro", &intro);

        assert_eq!(next.stats, GameStats::INITIAL);
        assert!(next.inventory.is_empty());
        assert!(next.active_effects.is_empty());
        assert!(!next.is_game_over);
        assert_eq!(next.turn, 1);
        assert_eq!(current_text(&next), "Stars swirl.");
    }

    #[test]
    fn restart_applies_stray_intro_deltas_to_clean_slate() {
        let fx = Fixture::new();
        let mut session = GameSession::new(GameStats::new(1, 100, 0, 100));
        session.inventory.insert(fx.items.get("moon_key").unwrap());
        let intro = StoryNode::new("Again.")
            .with_choice("1a", "Go")
            .with_hp_change(-10)
            .with_mana_change(5);

        let next = fx.resolver().resolve(session, "intro", &intro);
        assert_eq!(next.stats.hp, 90);
        assert_eq!(next.stats.mana, 55);
        assert!(next.inventory.is_empty());
    }

    #[test]
    fn non_restart_choice_keeps_state() {
        let fx = Fixture::new();
        let mut session = GameSession::default();
        session.inventory.insert(fx.items.get("oak_branch").unwrap());
        let next = fx.resolver().resolve(session, "4b", &forward());
        assert!(next.inventory.contains("oak_branch"));
        assert_eq!(next.turn, 1);
    }

    #[test]
    fn display_node_keeps_source_fields() {
        let fx = Fixture::new();
        let node = forward()
            .with_image_prompt("a dark forest")
            .with_scene(SceneTag::Forest)
            .with_mana_change(10);
        let next = fx.resolver().resolve_node(GameSession::default(), &node);
        let display = next.current_node.unwrap();
        assert_eq!(display.image_prompt, "a dark forest");
        assert_eq!(display.scene, Some(SceneTag::Forest));
        assert_eq!(display.choices.len(), 3);
        assert!(!display.game_over);
        assert_eq!(next.stats.mana, 60);
    }

    #[test]
    fn missing_scene_defaults_on_display() {
        let fx = Fixture::new();
        let next = fx.resolver().resolve_node(GameSession::default(), &forward());
        assert_eq!(
            next.current_node.and_then(|n| n.scene),
            Some(SceneTag::Hiding)
        );
    }
}
