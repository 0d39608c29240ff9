//! Status effects: catalog definitions and the live instances attached to a
//! session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an effect helps or hurts the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// A beneficial effect.
    Buff,
    /// A harmful effect.
    Debuff,
}

impl EffectKind {
    /// Lowercase display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buff => "buff",
            Self::Debuff => "debuff",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status effect template as stored in the effect catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEffect {
    /// Stable identifier, unique within the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Buff or debuff.
    #[serde(rename = "type")]
    pub kind: EffectKind,
    /// Flavor text.
    pub description: String,
    /// Short icon glyph.
    pub icon: String,
    /// Number of turns a fresh instance lasts.
    pub duration: u32,
    /// HP change applied on every tick.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_per_turn: Option<i32>,
    /// Mana change applied on every tick.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_per_turn: Option<i32>,
}

impl StatusEffect {
    /// Create a new effect definition with no per-turn deltas.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: EffectKind,
        duration: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            description: String::new(),
            icon: String::new(),
            duration,
            hp_per_turn: None,
            mana_per_turn: None,
        }
    }

    /// Set the per-turn HP delta.
    pub fn with_hp_per_turn(mut self, hp: i32) -> Self {
        self.hp_per_turn = Some(hp);
        self
    }

    /// Set the per-turn Mana delta.
    pub fn with_mana_per_turn(mut self, mana: i32) -> Self {
        self.mana_per_turn = Some(mana);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// A live application of a status effect to a session.
///
/// Instances of the same effect id are independent: applying an effect
/// twice yields two instances that each count down on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// The definition this instance was created from.
    pub effect: StatusEffect,
    /// Turns left before the instance expires.
    pub remaining: u32,
}

impl ActiveEffect {
    /// Start a fresh instance with the definition's full duration.
    pub fn new(effect: StatusEffect) -> Self {
        let remaining = effect.duration;
        Self { effect, remaining }
    }

    /// Identifier of the underlying effect.
    pub fn id(&self) -> &str {
        &self.effect.id
    }

    /// Display name of the underlying effect.
    pub fn name(&self) -> &str {
        &self.effect.name
    }

    /// Per-turn HP delta, zero when unset.
    pub fn hp_per_turn(&self) -> i32 {
        self.effect.hp_per_turn.unwrap_or(0)
    }

    /// Per-turn Mana delta, zero when unset.
    pub fn mana_per_turn(&self) -> i32 {
        self.effect.mana_per_turn.unwrap_or(0)
    }
}
