//! Items and the player's inventory.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The broad category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Something to fight with.
    Weapon,
    /// Something worn for protection.
    Armor,
    /// Something used up on use (potions, food).
    Consumable,
    /// A key or quest token that unlocks progress.
    Key,
}

impl ItemKind {
    /// Lowercase display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Consumable => "consumable",
            Self::Key => "key",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item definition from the item catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier, unique within the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Item category.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Flavor text.
    pub description: String,
    /// Short icon glyph (usually an emoji).
    pub icon: String,
}

impl Item {
    /// Create a new item with an empty description and icon.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            description: String::new(),
            icon: String::new(),
        }
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

/// The items a player holds, in pickup order, with at most one item per id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item unless one with the same id is already held.
    ///
    /// Returns true if the item was added.
    pub fn insert(&mut self, item: Item) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Check if an item with this id is held.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Look up a held item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Iterate over held items in pickup order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
