//! Story nodes: the narrative beats a node provider hands to the resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One selectable action offered by a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier passed back to the node provider when selected.
    pub id: String,
    /// Text shown to the player.
    pub text: String,
}

impl Choice {
    /// Create a new choice.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Visual category of a scene, chosen by the node provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneTag {
    /// The star nebula between worlds.
    Void,
    /// The radiant figure who greets the traveller.
    Goddess,
    /// Dark, ancient woods.
    Forest,
    /// A beast or monster in the dark.
    Wolf,
    /// Flames, battle, and burning things.
    Fire,
    /// Towns, castles, and ruins.
    City,
    /// An inn or tavern interior.
    Tavern,
    /// Anything else; a quiet, concealed place.
    #[default]
    Hiding,
}

impl SceneTag {
    /// Every tag, in declaration order.
    pub const ALL: [SceneTag; 8] = [
        Self::Void,
        Self::Goddess,
        Self::Forest,
        Self::Wolf,
        Self::Fire,
        Self::City,
        Self::Tavern,
        Self::Hiding,
    ];

    /// Lowercase key, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Goddess => "goddess",
            Self::Forest => "forest",
            Self::Wolf => "wolf",
            Self::Fire => "fire",
            Self::City => "city",
            Self::Tavern => "tavern",
            Self::Hiding => "hiding",
        }
    }
}

impl fmt::Display for SceneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A narrative beat with its mechanical consequences.
///
/// Nodes are produced by a node provider and never mutated afterwards; the
/// resolver builds a fresh display node from each one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryNode {
    /// Narrative text.
    pub text: String,
    /// Actions the player may take next.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Free-form description of the scene's visuals.
    #[serde(default)]
    pub image_prompt: String,
    /// Visual category; filled in at the provider boundary when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<SceneTag>,
    /// Immediate HP change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_change: Option<i32>,
    /// Immediate Mana change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_change: Option<i32>,
    /// Whether this node ends the playthrough.
    #[serde(default)]
    pub game_over: bool,
    /// Item ids granted by this node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loot: Vec<String>,
    /// Effect ids applied by this node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_effects: Vec<String>,
}

impl StoryNode {
    /// Create a node with only narrative text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Append a choice.
    pub fn with_choice(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.choices.push(Choice::new(id, text));
        self
    }

    /// Set the image prompt.
    pub fn with_image_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.image_prompt = prompt.into();
        self
    }

    /// Set the scene tag.
    pub fn with_scene(mut self, scene: SceneTag) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Set the immediate HP change.
    pub fn with_hp_change(mut self, delta: i32) -> Self {
        self.hp_change = Some(delta);
        self
    }

    /// Set the immediate Mana change.
    pub fn with_mana_change(mut self, delta: i32) -> Self {
        self.mana_change = Some(delta);
        self
    }

    /// Mark the node as ending the playthrough.
    pub fn with_game_over(mut self) -> Self {
        self.game_over = true;
        self
    }

    /// Grant an item.
    pub fn with_loot(mut self, item_id: impl Into<String>) -> Self {
        self.loot.push(item_id.into());
        self
    }

    /// Apply an effect.
    pub fn with_effect(mut self, effect_id: impl Into<String>) -> Self {
        self.add_effects.push(effect_id.into());
        self
    }

    /// Find an offered choice by id.
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// The scene tag, or the default when the provider gave none.
    pub fn scene_or_default(&self) -> SceneTag {
        self.scene.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_node() {
        let json = r#"{
            "text": "You wake in a forest.",
            "choices": [{"id": "3a", "text": "Stand up."}],
            "imagePrompt": "dark forest at dawn"
        }"#;
        let node: StoryNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.choices.len(), 1);
        assert_eq!(node.hp_change, None);
        assert!(!node.game_over);
        assert!(node.loot.is_empty());
        assert!(node.scene.is_none());
    }

    #[test]
    fn deserialize_full_node() {
        let json = r#"{
            "text": "The boar charges.",
            "choices": [],
            "imagePrompt": "battle",
            "scene": "fire",
            "hpChange": -5,
            "manaChange": -20,
            "gameOver": true,
            "loot": ["boar_tusk"],
            "addEffects": ["bleeding"]
        }"#;
        let node: StoryNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.scene, Some(SceneTag::Fire));
        assert_eq!(node.hp_change, Some(-5));
        assert_eq!(node.mana_change, Some(-20));
        assert!(node.game_over);
        assert_eq!(node.loot, ["boar_tusk"]);
        assert_eq!(node.add_effects, ["bleeding"]);
    }

    #[test]
    fn builder_and_lookup() {
        let node = StoryNode::new("Two paths.")
            .with_choice("left", "Go left")
            .with_choice("right", "Go right");
        assert_eq!(node.choice("right").map(|c| c.text.as_str()), Some("Go right"));
        assert!(node.choice("up").is_none());
        assert_eq!(node.scene_or_default(), SceneTag::Hiding);
    }

    #[test]
    fn scene_tag_keys_match_serde() {
        for tag in SceneTag::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
        }
    }
}
