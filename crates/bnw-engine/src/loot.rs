//! Loot merging.

use bnw_core::{Inventory, Item, ItemCatalog};

/// Add every known, not-yet-held item id to the inventory.
///
/// Ids missing from the catalog and items already held (including ones
/// added earlier in the same call) are skipped. Returns the newly added
/// items.
pub fn merge(inventory: &mut Inventory, loot: &[String], catalog: &ItemCatalog) -> Vec<Item> {
    let mut added = Vec::new();
    for id in loot {
        if inventory.contains(id) {
            continue;
        }
        let Some(item) = catalog.get(id) else {
            tracing::debug!(item_id = %id, "unknown item id, skipping");
            continue;
        };
        if inventory.insert(item.clone()) {
            added.push(item);
        }
    }
    added
}
