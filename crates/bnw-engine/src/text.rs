//! Display text composition.

use crate::effects::EffectEvent;

/// Append effect events to narrative text as bracketed annotations.
///
/// Annotations are space-separated and set off from the narrative by a
/// blank line. With no events the text is returned unchanged.
pub fn compose(text: &str, events: &[EffectEvent]) -> String {
    if events.is_empty() {
        return text.to_string();
    }
    let notes: Vec<String> = events.iter().map(|e| format!("[{e}]")).collect();
    format!("{text}\n\n{}", notes.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_events_leaves_text_alone() {
        assert_eq!(compose("Silence.", &[]), "Silence.");
    }

    #[test]
    fn annotations_follow_blank_line() {
        let events = vec![
            EffectEvent::Applied {
                name: "Bleeding".into(),
            },
            EffectEvent::Ticked {
                name: "Bleeding".into(),
                hp: -5,
                mana: 0,
            },
        ];
        let text = compose("The wolf bites.", &events);
        insta::assert_snapshot!(text, @r"
The wolf bites.

[You are under the effect of Bleeding!] [Bleeding: -5 HP]
");
    }
}
