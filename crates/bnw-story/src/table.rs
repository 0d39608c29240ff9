//! Static story table: a deterministic node provider.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bnw_core::{CoreResult, SceneTag, StoryNode};

use crate::error::ProviderError;
use crate::history::History;
use crate::provider::NodeProvider;

/// A fixed map from choice id to the node that follows it.
#[derive(Debug, Clone, Default)]
pub struct StoryTable {
    nodes: BTreeMap<String, StoryNode>,
}

impl StoryTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the node for a choice id.
    pub fn insert(&mut self, choice_id: impl Into<String>, node: StoryNode) {
        self.nodes.insert(choice_id.into(), node);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_node(mut self, choice_id: impl Into<String>, node: StoryNode) -> Self {
        self.insert(choice_id, node);
        self
    }

    /// Parse a JSON object mapping choice ids to nodes.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let nodes: BTreeMap<String, StoryNode> = serde_json::from_str(json)?;
        Ok(Self { nodes })
    }

    /// Look up the node for a choice id.
    pub fn get(&self, choice_id: &str) -> Option<&StoryNode> {
        self.nodes.get(choice_id)
    }

    /// All choice ids this table answers, sorted.
    pub fn choice_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the table has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The demo story that ships with the game.
    pub fn builtin() -> Self {
        let arrival = StoryNode::new(
            "A flash of light blinds you. It feels as if every cell of your body is taken \
             apart and put back together.\n\nWhen you come to, you are lying on your back. A \
             cool breeze brushes your face and the smell of damp earth and pine fills your \
             nose. You are in the middle of a dense, ancient forest. The leaves shimmer violet, \
             and two pale moons hang in the sky.",
        )
        .with_choice("3a", "Stand up and look around.")
        .with_choice("3b", "Check whether anything about me has changed.")
        .with_image_prompt("ancient violet forest under two moons")
        .with_scene(SceneTag::Forest)
        .with_mana_change(10);

        let goddess = StoryNode::new(
            "\"I am the keeper of the Beginning and the End in this sector,\" the being answers \
             as the stars begin to dance around it. \"The world you came from is the past. But \
             I offer you a chance. A new world, full of magic, danger, and possibility. The \
             Beautiful New World awaits.\"",
        )
        .with_choice("2a", "I accept. I am ready for a new life!")
        .with_choice("2b", "What powers will I receive?")
        .with_image_prompt("radiant goddess among the stars")
        .with_scene(SceneTag::Goddess);

        let boar = StoryNode::new(
            "Your body feels younger, stronger. Faint runes glow beneath the skin of your palms. \
             Suddenly a branch snaps behind you. A huge tusked boar bursts out of the bushes, its \
             eyes burning red. It does not look friendly.",
        )
        .with_choice("4a", "Try to cast a spell (Fireball).")
        .with_choice("4b", "Grab a branch and defend myself.")
        .with_choice("4c", "Run.")
        .with_image_prompt("red-eyed boar charging from the bushes")
        .with_scene(SceneTag::Wolf);

        let to_village = |text: &str| {
            StoryNode::new(text)
                .with_choice("6a", "Follow the path toward the smoke.")
                .with_image_prompt("forest path, smoke rising in the distance")
                .with_scene(SceneTag::Forest)
        };

        let chapter_end = StoryNode::new(
            "The adventure continues... (This is the end of the demo story. Connect a \
             generative node provider to keep the tale going.)",
        )
        .with_image_prompt("village at dusk")
        .with_scene(SceneTag::City)
        .with_game_over();

        Self::new()
            .with_node(
                "intro",
                StoryNode::new(
                    "The memory of screeching brakes and a dull crash slowly fades. You feel no \
                     pain. You feel nothing at all. You open your eyes, but instead of a hospital \
                     ceiling you see an endless, swirling nebula. A radiant figure floats before \
                     you; you cannot make out its face, yet its presence is at once soothing and \
                     terrifying.\n\n\"Welcome, traveller,\" its voice says inside your mind. \"The \
                     thread of your life on Earth has snapped, but your soul is too strong to \
                     fade.\"",
                )
                .with_choice("1a", "Where am I? Who are you?")
                .with_choice("1b", "Is this heaven? Or hell?")
                .with_image_prompt("endless swirling nebula")
                .with_scene(SceneTag::Void),
            )
            .with_node("1a", goddess.clone())
            .with_node("1b", goddess)
            .with_node("2a", arrival)
            .with_node(
                "2b",
                StoryNode::new(
                    "The goddess laughs softly. \"Powers are earned, not given. But take this \
                     blessing for the road.\" Warmth spreads through your chest.",
                )
                .with_choice("2a", "I accept. I am ready for a new life!")
                .with_image_prompt("divine light pouring over the traveller")
                .with_scene(SceneTag::Goddess)
                .with_effect("divine_blessing"),
            )
            .with_node("3a", boar.clone())
            .with_node("3b", boar)
            .with_node(
                "4a",
                StoryNode::new(
                    "You stretch out your hand on instinct. The runes flare and a jet of flame \
                     bursts from your palm! The boar squeals and reels back, its hide scorched. \
                     The magic drains you, though, and your head starts to spin.",
                )
                .with_choice("5a", "Finish it with another attack!")
                .with_choice("5b", "Use its confusion to escape.")
                .with_image_prompt("a jet of flame from an outstretched palm")
                .with_scene(SceneTag::Fire)
                .with_hp_change(-5)
                .with_mana_change(-20)
                .with_effect("exhausted"),
            )
            .with_node(
                "4b",
                StoryNode::new(
                    "You snatch up a heavy oak branch just as the boar hits you. A tusk rakes \
                     your thigh, but you drive the branch into its snout and it staggers.",
                )
                .with_choice("5a", "Finish it with another attack!")
                .with_choice("5b", "Use its confusion to escape.")
                .with_image_prompt("struggle with a wild boar")
                .with_scene(SceneTag::Wolf)
                .with_hp_change(-15)
                .with_loot("oak_branch")
                .with_effect("bleeding"),
            )
            .with_node(
                "4c",
                to_village(
                    "You run blindly through the trees, branches whipping your face. The boar's \
                     grunts fade behind you. Scratched and winded, you find a narrow path.",
                )
                .with_hp_change(-10),
            )
            .with_node(
                "5a",
                to_village(
                    "One last strike and the beast collapses. Among the roots lies an old sword, \
                     and in a leather pouch beside it, a small red vial.",
                )
                .with_loot("boar_tusk")
                .with_loot("rusty_sword")
                .with_loot("health_potion"),
            )
            .with_node(
                "5b",
                to_village(
                    "You slip away while the boar shakes its head. It does not follow.",
                ),
            )
            .with_node(
                "6a",
                StoryNode::new(
                    "The path leads to a village of crooked roofs. Lanterns are being lit. A \
                     tavern sign creaks in the wind, and beyond the houses stands a ruined \
                     chapel.",
                )
                .with_choice("7a", "Enter the tavern.")
                .with_choice("7b", "Explore the ruined chapel.")
                .with_image_prompt("village at dusk with lanterns")
                .with_scene(SceneTag::City),
            )
            .with_node(
                "7a",
                StoryNode::new(
                    "The innkeeper takes one look at you and sets down a bowl of stew and a \
                     blue vial. \"On the house, stranger. You look like you fell from the sky.\"",
                )
                .with_choice("8a", "Rest for the night.")
                .with_image_prompt("warm tavern interior")
                .with_scene(SceneTag::Tavern)
                .with_loot("mana_potion")
                .with_effect("regeneration"),
            )
            .with_node(
                "7b",
                StoryNode::new(
                    "Among the broken pews you find a silver key that glows under the moons. As \
                     you lift it, a needle trap pricks your finger.",
                )
                .with_choice("8a", "Return to the village and rest.")
                .with_image_prompt("ruined chapel by moonlight")
                .with_scene(SceneTag::City)
                .with_loot("moon_key")
                .with_effect("poisoned"),
            )
            .with_node("8a", chapter_end)
    }
}

#[async_trait]
impl NodeProvider for StoryTable {
    async fn fetch_node(
        &self,
        choice_id: &str,
        _history: &History,
    ) -> Result<StoryNode, ProviderError> {
        self.get(choice_id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(choice_id.to_string()))
    }
}
