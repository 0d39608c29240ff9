use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use colored::Colorize;

use bnw_core::{EffectKind, GameSession};
use bnw_story::{Game, resolve_scene_asset};

use crate::select;

pub fn run(
    story: Option<&Path>,
    config: Option<&Path>,
    timeout_ms: Option<u64>,
) -> Result<(), String> {
    let table = super::load_story(story)?;
    let mut config = super::load_config(config)?;
    if let Some(ms) = timeout_ms {
        config = config.with_timeout(Duration::from_millis(ms));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start runtime: {e}"))?;

    runtime.block_on(async {
        let mut game = Game::new(table, config);

        println!("  {} Beautiful New World", "Starting".bold());
        println!("  Type a number, a choice, or 'quit' to exit.\n");

        render(game.start().await);

        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut line = String::new();

        loop {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => break, // EOF
                Err(e) => return Err(e.to_string()),
                _ => {}
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                break;
            }

            let choices = game
                .session()
                .current_node
                .as_ref()
                .map(|n| n.choices.as_slice())
                .unwrap_or_default();
            let Some(choice) = select::pick(input, choices) else {
                tracing::debug!(input, "input matched no offered choice");
                println!("{}\n", format!("No choice matches '{input}'.").yellow());
                continue;
            };
            let id = choice.id.clone();

            match game.choose(&id).await {
                Ok(session) => render(session),
                Err(e) => println!("{}\n", e.to_string().yellow()),
            }
        }

        Ok::<(), String>(())
    })
}

fn render(session: &GameSession) {
    let Some(node) = &session.current_node else {
        return;
    };
    let asset = resolve_scene_asset(node.scene_or_default());

    println!();
    println!("  {}", asset.caption.dimmed().italic());
    println!();
    println!("{}", node.text);
    println!();

    let stats = session.stats;
    let hp = format!("HP {}/{}", stats.hp, stats.max_hp);
    let hp = if stats.hp_fraction() <= 0.25 {
        hp.red().bold()
    } else {
        hp.green()
    };
    let mana = format!("Mana {}/{}", stats.mana, stats.max_mana);
    let mana = if stats.mana_fraction() <= 0.25 {
        mana.yellow()
    } else {
        mana.blue()
    };
    println!("  {hp}  {mana}  {}", format!("turn {}", session.turn).dimmed());

    if !session.active_effects.is_empty() {
        let effects: Vec<String> = session
            .active_effects
            .iter()
            .map(|a| {
                let label = format!("{} ({})", a.name(), a.remaining);
                match a.effect.kind {
                    EffectKind::Buff => label.cyan().to_string(),
                    EffectKind::Debuff => label.magenta().to_string(),
                }
            })
            .collect();
        println!("  Effects: {}", effects.join(", "));
    }

    if !session.inventory.is_empty() {
        let items: Vec<&str> = session.inventory.iter().map(|i| i.name.as_str()).collect();
        println!("  Inventory: {}", items.join(", "));
    }

    println!();
    if session.is_game_over {
        println!("  {}", "GAME OVER".red().bold());
    }
    for (i, choice) in node.choices.iter().enumerate() {
        println!("  {} {}", format!("{})", i + 1).bold(), choice.text);
    }
    println!();
}
