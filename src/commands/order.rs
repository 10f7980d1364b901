//! `schedkit order` - move an item in an ordered list.
//!
//! Prints the persistence payload (the full id sequence in the new
//! order) and rewrites the list file so repeated invocations compose.

use std::path::Path;

use anyhow::{Context, Result};
use schedkit_core::order::{self, MoveDirection, OrderedItem};
use serde::Serialize;

#[derive(Serialize)]
struct OrderPayload {
    ids: Vec<schedkit_core::ItemId>,
}

pub async fn run(file: &Path, index: usize, direction: MoveDirection) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read {}", file.display()))?;
    let items: Vec<OrderedItem> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid item list in {}", file.display()))?;

    let new_items = order::move_item(&items, index, direction);

    for (position, item) in new_items.iter().enumerate() {
        println!("{}. {} (id {})", position + 1, item.title, item.id);
    }

    let payload = OrderPayload {
        ids: new_items.iter().map(|item| item.id).collect(),
    };
    println!();
    println!("{}", serde_json::to_string(&payload)?);

    std::fs::write(file, serde_json::to_string_pretty(&new_items)?)
        .with_context(|| format!("Could not write {}", file.display()))?;

    Ok(())
}
