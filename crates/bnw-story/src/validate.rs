//! Provider-boundary validation.
//!
//! The turn resolver assumes a well-formed node. Anything a provider
//! returns passes through here first; a rejected node is treated like any
//! other provider failure.

use bnw_core::StoryNode;

use crate::error::ProviderError;
use crate::scene::classify_prompt;

/// Check a provider's node and fill in defaults.
///
/// Rejects blank text, blank choice ids, and nodes that offer no way
/// forward without ending the game. A missing scene tag is classified from
/// the image prompt.
pub fn validate_node(mut node: StoryNode) -> Result<StoryNode, ProviderError> {
    if node.text.trim().is_empty() {
        return Err(ProviderError::Malformed("node text is empty".into()));
    }
    if node.choices.iter().any(|c| c.id.trim().is_empty()) {
        return Err(ProviderError::Malformed("choice with empty id".into()));
    }
    if node.choices.is_empty() && !node.game_over {
        return Err(ProviderError::Malformed(
            "node offers no choices and does not end the game".into(),
        ));
    }
    if node.scene.is_none() {
        node.scene = Some(classify_prompt(&node.image_prompt));
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bnw_core::SceneTag;

    #[test]
    fn accepts_and_classifies() {
        let node = StoryNode::new("Trees everywhere.")
            .with_choice("a", "Walk")
            .with_image_prompt("dark woods");
        let node = validate_node(node).unwrap();
        assert_eq!(node.scene, Some(SceneTag::Forest));
    }

    #[test]
    fn keeps_explicit_scene() {
        let node = StoryNode::new("Ale and song.")
            .with_choice("a", "Drink")
            .with_image_prompt("dark woods")
            .with_scene(SceneTag::Tavern);
        assert_eq!(validate_node(node).unwrap().scene, Some(SceneTag::Tavern));
    }

    #[test]
    fn rejects_blank_text() {
        let node = StoryNode::new("   ").with_choice("a", "Walk");
        assert!(matches!(validate_node(node), Err(ProviderError::Malformed(_))));
    }

    #[test]
    fn rejects_dead_end() {
        let node = StoryNode::new("Nothing.");
        assert!(matches!(validate_node(node), Err(ProviderError::Malformed(_))));
    }

    #[test]
    fn game_over_may_have_no_choices() {
        let node = StoryNode::new("The end.").with_game_over();
        assert!(validate_node(node).is_ok());
    }

    #[test]
    fn rejects_blank_choice_id() {
        let node = StoryNode::new("Hm.").with_choice("", "???");
        assert!(matches!(validate_node(node), Err(ProviderError::Malformed(_))));
    }
}
