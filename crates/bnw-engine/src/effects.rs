//! Status effect engine.
//!
//! New instances are appended without merging, so the same effect can stack.
//! Every live instance, including one applied this very turn, ticks once
//! per turn and is dropped when its counter reaches zero.

use std::fmt;

use bnw_core::{ActiveEffect, EffectCatalog};

/// Something the effect engine reports to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectEvent {
    /// A new instance was attached.
    Applied {
        /// Effect display name.
        name: String,
    },
    /// An instance changed HP and/or Mana.
    Ticked {
        /// Effect display name.
        name: String,
        /// HP delta applied.
        hp: i32,
        /// Mana delta applied.
        mana: i32,
    },
    /// An instance ran out.
    Expired {
        /// Effect display name.
        name: String,
    },
}

impl fmt::Display for EffectEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied { name } => write!(f, "You are under the effect of {name}!"),
            Self::Ticked { name, hp, mana } => {
                let mut parts = Vec::with_capacity(2);
                if *hp != 0 {
                    parts.push(format!("{hp:+} HP"));
                }
                if *mana != 0 {
                    parts.push(format!("{mana:+} Mana"));
                }
                write!(f, "{name}: {}", parts.join(", "))
            }
            Self::Expired { name } => write!(f, "{name} wore off."),
        }
    }
}

/// Append a fresh instance for every known effect id.
///
/// Unknown ids are skipped. Returns one [`EffectEvent::Applied`] per new
/// instance.
pub fn instantiate(
    effect_ids: &[String],
    catalog: &EffectCatalog,
    active: &mut Vec<ActiveEffect>,
) -> Vec<EffectEvent> {
    let mut events = Vec::new();
    for id in effect_ids {
        let Some(effect) = catalog.get(id) else {
            tracing::debug!(effect_id = %id, "unknown effect id, skipping");
            continue;
        };
        events.push(EffectEvent::Applied {
            name: effect.name.clone(),
        });
        active.push(ActiveEffect::new(effect));
    }
    events
}

/// Result of ticking every live instance once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectTick {
    /// Summed HP delta.
    pub hp: i32,
    /// Summed Mana delta.
    pub mana: i32,
    /// Instances that carry into the next turn.
    pub survivors: Vec<ActiveEffect>,
    /// Tick and expiry events, in instance order.
    pub events: Vec<EffectEvent>,
}

/// Tick every instance once, in order.
pub fn tick(active: Vec<ActiveEffect>) -> EffectTick {
    let mut out = EffectTick::default();

    for mut instance in active {
        let hp = instance.hp_per_turn();
        let mana = instance.mana_per_turn();
        out.hp = out.hp.saturating_add(hp);
        out.mana = out.mana.saturating_add(mana);

        if hp != 0 || mana != 0 {
            out.events.push(EffectEvent::Ticked {
                name: instance.name().to_string(),
                hp,
                mana,
            });
        }

        instance.remaining = instance.remaining.saturating_sub(1);
        if instance.remaining > 0 {
            out.survivors.push(instance);
        } else {
            out.events.push(EffectEvent::Expired {
                name: instance.name().to_string(),
            });
        }
    }

    out
}
