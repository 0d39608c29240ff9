pub mod effects;
pub mod items;
pub mod play;
pub mod story;

use std::path::Path;

use bnw_story::{GameConfig, StoryTable};

/// Load a story table from a JSON file, or the built-in demo story.
fn load_story(path: Option<&Path>) -> Result<StoryTable, String> {
    let Some(path) = path else {
        return Ok(StoryTable::builtin());
    };
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    StoryTable::from_json(&source).map_err(|e| format!("invalid story {}: {e}", path.display()))
}

/// Load a game config from a JSON file, or the defaults.
fn load_config(path: Option<&Path>) -> Result<GameConfig, String> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    GameConfig::from_json(&source).map_err(|e| format!("invalid config {}: {e}", path.display()))
}
