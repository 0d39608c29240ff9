use std::path::Path;

use colored::Colorize;

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let table = super::load_story(path)?;

    if table.is_empty() {
        println!("  No nodes found.");
        return Ok(());
    }

    for id in table.choice_ids() {
        let Some(node) = table.get(id) else {
            continue;
        };
        let next: Vec<&str> = node.choices.iter().map(|c| c.id.as_str()).collect();
        let marker = if node.game_over {
            " (ending)".red().to_string()
        } else {
            String::new()
        };
        println!("  {}{marker} -> {}", id.bold(), next.join(", ").dimmed());
    }
    println!();
    println!("  {} nodes", table.len());

    Ok(())
}
