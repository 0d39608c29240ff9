use comfy_table::{ContentArrangement, Table};

use bnw_core::ItemCatalog;

pub fn run() -> Result<(), String> {
    let catalog = ItemCatalog::builtin();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Type", "Description"]);

    for item in catalog.iter() {
        table.add_row(vec![
            item.id.as_str(),
            item.name.as_str(),
            item.kind.as_str(),
            item.description.as_str(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} items", catalog.len());

    Ok(())
}
