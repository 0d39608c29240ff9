//! Scene classification and asset lookup.
//!
//! Providers that only emit a free-form image prompt get a [`SceneTag`]
//! assigned by keyword at the provider boundary. Front ends then map the
//! tag to a style key and a fallback image.

use bnw_core::SceneTag;

/// Keyword groups checked in order; the first hit wins.
const KEYWORDS: &[(SceneTag, &[&str])] = &[
    (SceneTag::Void, &["space", "void", "nebula"]),
    (SceneTag::Forest, &["forest", "tree", "woods"]),
    (SceneTag::Fire, &["fire", "fireball", "flame", "burn", "battle"]),
    (SceneTag::City, &["city", "castle", "town", "ruin", "village"]),
    (SceneTag::Wolf, &["wolf", "wolves", "beast", "monster", "boar"]),
    (SceneTag::Tavern, &["tavern", "inn", "innkeeper", "bar"]),
    (SceneTag::Goddess, &["god", "goddess", "divine", "light"]),
];

/// Endings a word may add to a keyword and still match it.
const INFLECTIONS: &[&str] = &["", "s", "es", "ed", "ing"];

fn word_matches(word: &str, keyword: &str) -> bool {
    word.strip_prefix(keyword)
        .is_some_and(|rest| INFLECTIONS.contains(&rest))
}

/// Pick a scene tag for a free-form image prompt.
///
/// The prompt is split into lowercase words and a keyword matches a whole
/// word, optionally with a plain inflection ("trees", "burning"). An empty
/// or unmatched prompt yields [`SceneTag::Hiding`].
pub fn classify_prompt(prompt: &str) -> SceneTag {
    let lower = prompt.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|k| words.iter().any(|w| word_matches(w, k)))
        })
        .map(|(tag, _)| *tag)
        .unwrap_or_default()
}

/// How a front end should present a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneAsset {
    /// The tag this asset was resolved from.
    pub tag: SceneTag,
    /// Style key for themed backgrounds.
    pub style_key: &'static str,
    /// Stock image shown when no generated image is available.
    pub image_url: &'static str,
    /// One-line caption for text front ends.
    pub caption: &'static str,
}

const IMAGE_VOID: &str = "https://images.unsplash.com/photo-1534447677768-be436bb09401?q=80&w=2894&auto=format&fit=crop";
const IMAGE_GODDESS: &str = "https://images.unsplash.com/photo-1531384441138-2736e62e0919?q=80&w=2787&auto=format&fit=crop";
const IMAGE_FOREST: &str = "https://images.unsplash.com/photo-1511497584788-876760111969?q=80&w=2832&auto=format&fit=crop";
const IMAGE_VILLAGE: &str = "https://images.unsplash.com/photo-1595878715977-2e8f8df18ea8?q=80&w=2787&auto=format&fit=crop";
const IMAGE_BATTLE: &str = "https://images.unsplash.com/photo-1519074069444-1ba4fff66d16?q=80&w=2787&auto=format&fit=crop";

/// Map a scene tag to its presentation asset.
pub fn resolve_scene_asset(tag: SceneTag) -> SceneAsset {
    let (style_key, image_url, caption) = match tag {
        SceneTag::Void => ("intro", IMAGE_VOID, "A swirling nebula between worlds"),
        SceneTag::Goddess => ("goddess", IMAGE_GODDESS, "A radiant figure in the dark"),
        SceneTag::Forest => ("forest", IMAGE_FOREST, "Ancient woods under two moons"),
        SceneTag::Wolf => ("wolf", IMAGE_BATTLE, "Red eyes in the undergrowth"),
        SceneTag::Fire => ("fire", IMAGE_BATTLE, "Flame and fury"),
        SceneTag::City => ("city", IMAGE_VILLAGE, "Walls, roofs, and smoke"),
        SceneTag::Tavern => ("tavern", IMAGE_VILLAGE, "Warm light and low voices"),
        SceneTag::Hiding => ("hiding", IMAGE_VILLAGE, "Somewhere quiet"),
    };
    SceneAsset {
        tag,
        style_key,
        image_url,
        caption,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_keyword() {
        assert_eq!(classify_prompt("Endless NEBULA of stars"), SceneTag::Void);
        assert_eq!(classify_prompt("misty woods at dusk"), SceneTag::Forest);
        assert_eq!(classify_prompt("a burning hut"), SceneTag::Fire);
        assert_eq!(classify_prompt("ruined castle walls"), SceneTag::City);
        assert_eq!(classify_prompt("a snarling beast"), SceneTag::Wolf);
        assert_eq!(classify_prompt("a crowded tavern"), SceneTag::Tavern);
        assert_eq!(classify_prompt("divine radiance"), SceneTag::Goddess);
    }

    #[test]
    fn earlier_groups_win() {
        // "forest" is checked before "fire"
        assert_eq!(classify_prompt("forest fire"), SceneTag::Forest);
    }

    #[test]
    fn keywords_match_whole_words() {
        assert_eq!(classify_prompt("busy city street"), SceneTag::City);
        assert_eq!(classify_prompt("the beginning"), SceneTag::Hiding);
        assert_eq!(classify_prompt("dinner by candlelight"), SceneTag::Hiding);
        assert_eq!(classify_prompt("a good omen"), SceneTag::Hiding);
        assert_eq!(classify_prompt("the inner sanctum"), SceneTag::Hiding);
    }

    #[test]
    fn keywords_allow_inflections() {
        assert_eq!(classify_prompt("tall pine trees"), SceneTag::Forest);
        assert_eq!(classify_prompt("wolves howling"), SceneTag::Wolf);
        assert_eq!(classify_prompt("a weary innkeeper"), SceneTag::Tavern);
        assert_eq!(classify_prompt("the goddess speaks"), SceneTag::Goddess);
        assert_eq!(classify_prompt("flames, everywhere"), SceneTag::Fire);
    }

    #[test]
    fn empty_or_unknown_is_hiding() {
        assert_eq!(classify_prompt(""), SceneTag::Hiding);
        assert_eq!(classify_prompt("a quiet cellar"), SceneTag::Hiding);
    }

    #[test]
    fn every_tag_has_an_asset() {
        for tag in SceneTag::ALL {
            let asset = resolve_scene_asset(tag);
            assert_eq!(asset.tag, tag);
            assert!(asset.image_url.starts_with("https://"));
            assert!(!asset.caption.is_empty());
        }
        assert_eq!(resolve_scene_asset(SceneTag::Void).style_key, "intro");
    }
}
