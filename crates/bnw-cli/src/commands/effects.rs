use comfy_table::{ContentArrangement, Table};

use bnw_core::EffectCatalog;

fn per_turn(delta: Option<i32>) -> String {
    match delta {
        Some(d) if d != 0 => format!("{d:+}"),
        _ => "-".to_string(),
    }
}

pub fn run() -> Result<(), String> {
    let catalog = EffectCatalog::builtin();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Type", "Turns", "HP/turn", "Mana/turn"]);

    for effect in catalog.iter() {
        table.add_row(vec![
            effect.id.clone(),
            effect.name.clone(),
            effect.kind.to_string(),
            effect.duration.to_string(),
            per_turn(effect.hp_per_turn),
            per_turn(effect.mana_per_turn),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} effects", catalog.len());

    Ok(())
}
