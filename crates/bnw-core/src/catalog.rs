//! Read-only registries of item and effect definitions.
//!
//! Lookups never fail loudly: a missing id is an ordinary `None`, and the
//! turn resolver skips it. Every lookup hands out an owned copy so that a
//! live effect instance never aliases its catalog definition.

use std::collections::BTreeMap;

use crate::effect::{EffectKind, StatusEffect};
use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemKind};

/// Registry of item definitions keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: BTreeMap<String, Item>,
}

impl ItemCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> CoreResult<Self> {
        let mut map = BTreeMap::new();
        for item in items {
            if map.contains_key(&item.id) {
                return Err(CoreError::DuplicateId(item.id));
            }
            map.insert(item.id.clone(), item);
        }
        Ok(Self { items: map })
    }

    /// Parse a JSON array of items.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// The items that ship with the game.
    pub fn builtin() -> Self {
        let items = [
            Item::new("health_potion", "Health Potion", ItemKind::Consumable)
                .with_description("A red draught that knits flesh back together.")
                .with_icon("🧪"),
            Item::new("mana_potion", "Mana Potion", ItemKind::Consumable)
                .with_description("Tastes of ozone and starlight.")
                .with_icon("🔷"),
            Item::new("oak_branch", "Oak Branch", ItemKind::Weapon)
                .with_description("Heavy, crooked, and better than nothing.")
                .with_icon("🪵"),
            Item::new("rusty_sword", "Rusty Sword", ItemKind::Weapon)
                .with_description("Someone lost this a long time ago.")
                .with_icon("🗡️"),
            Item::new("leather_armor", "Leather Armor", ItemKind::Armor)
                .with_description("Stiff boiled leather, stitched by a careful hand.")
                .with_icon("🛡️"),
            Item::new("boar_tusk", "Boar Tusk", ItemKind::Key)
                .with_description("Proof that you survived the red-eyed beast.")
                .with_icon("🦴"),
            Item::new("moon_key", "Moon Key", ItemKind::Key)
                .with_description("A silver key that glows under both moons.")
                .with_icon("🗝️"),
        ];
        let mut map = BTreeMap::new();
        for item in items {
            map.insert(item.id.clone(), item);
        }
        Self { items: map }
    }

    /// Look up an item by id, returning an owned copy.
    pub fn get(&self, id: &str) -> Option<Item> {
        self.items.get(id).cloned()
    }

    /// Check if an id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Iterate over all items sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Registry of status effect definitions keyed by id.
#[derive(Debug, Clone, Default)]
pub struct EffectCatalog {
    effects: BTreeMap<String, StatusEffect>,
}

impl EffectCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn from_effects(effects: impl IntoIterator<Item = StatusEffect>) -> CoreResult<Self> {
        let mut map = BTreeMap::new();
        for effect in effects {
            if map.contains_key(&effect.id) {
                return Err(CoreError::DuplicateId(effect.id));
            }
            map.insert(effect.id.clone(), effect);
        }
        Ok(Self { effects: map })
    }

    /// Parse a JSON array of effects.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let effects: Vec<StatusEffect> = serde_json::from_str(json)?;
        Self::from_effects(effects)
    }

    /// The effects that ship with the game.
    pub fn builtin() -> Self {
        let effects = [
            StatusEffect::new("bleeding", "Bleeding", EffectKind::Debuff, 3)
                .with_hp_per_turn(-5)
                .with_description("An open wound that will not close.")
                .with_icon("🩸"),
            StatusEffect::new("poisoned", "Poisoned", EffectKind::Debuff, 4)
                .with_hp_per_turn(-3)
                .with_description("Venom crawls through your veins.")
                .with_icon("☠️"),
            StatusEffect::new("exhausted", "Exhausted", EffectKind::Debuff, 2)
                .with_mana_per_turn(-5)
                .with_description("Spellcasting has drained you.")
                .with_icon("💤"),
            StatusEffect::new("regeneration", "Regeneration", EffectKind::Buff, 3)
                .with_hp_per_turn(5)
                .with_description("Your wounds close on their own.")
                .with_icon("💚"),
            StatusEffect::new("mana_surge", "Mana Surge", EffectKind::Buff, 2)
                .with_mana_per_turn(10)
                .with_description("The runes under your skin burn bright.")
                .with_icon("⚡"),
            StatusEffect::new("divine_blessing", "Divine Blessing", EffectKind::Buff, 5)
                .with_hp_per_turn(3)
                .with_mana_per_turn(3)
                .with_description("The goddess watches over you.")
                .with_icon("✨"),
        ];
        let mut map = BTreeMap::new();
        for effect in effects {
            map.insert(effect.id.clone(), effect);
        }
        Self { effects: map }
    }

    /// Look up an effect by id, returning a fresh copy of the definition.
    pub fn get(&self, id: &str) -> Option<StatusEffect> {
        self.effects.get(id).cloned()
    }

    /// Check if an id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.effects.contains_key(id)
    }

    /// Iterate over all effects sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.values()
    }

    /// Number of registered effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
