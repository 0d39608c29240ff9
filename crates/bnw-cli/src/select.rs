//! Mapping player input to an offered choice.

use bnw_core::Choice;
use strsim::jaro_winkler;

/// Minimum similarity score for fuzzy matching (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Pick the choice the player meant.
///
/// Tries, in order: a 1-based number, an exact choice id, the choice text
/// (case-insensitive), then the closest choice text by Jaro-Winkler score.
pub fn pick<'a>(input: &str, choices: &'a [Choice]) -> Option<&'a Choice> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| choices.get(i));
    }
    if let Some(choice) = choices.iter().find(|c| c.id == input) {
        return Some(choice);
    }

    let input_lower = input.to_lowercase();
    if let Some(choice) = choices.iter().find(|c| c.text.to_lowercase() == input_lower) {
        return Some(choice);
    }

    choices
        .iter()
        .map(|c| (c, jaro_winkler(&input_lower, &c.text.to_lowercase())))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}
