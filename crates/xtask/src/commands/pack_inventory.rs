//! Build saved inventories from JSON
//!
//! Reads a JSON array of items, adds them through the regular container rules
//! and writes the binary save file.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::{Path, PathBuf};

use inventory_core::{Inventory, InventoryError, Item, OwnerId};

use crate::utils::{format_capacity, print_entries};

/// Build a saved inventory from a JSON item list
#[derive(Parser)]
pub struct PackInventory {
    /// JSON file holding an array of items
    #[arg(value_name = "JSON")]
    input: PathBuf,

    /// Output save file
    #[arg(value_name = "OUT")]
    output: PathBuf,

    /// Container capacity; items that do not fit are reported and left out
    #[arg(short, long, value_name = "N", default_value_t = u32::MAX)]
    capacity: u32,

    /// Owner id of the container
    #[arg(short, long, value_name = "ID", default_value_t = 0)]
    owner: u32,
}

impl PackInventory {
    pub fn execute(self) -> Result<()> {
        let items = read_items(&self.input)?;
        let (inventory, overflow) = pack(OwnerId(self.owner), self.capacity, items);

        inventory.save_file(&self.output).map_err(|err| {
            anyhow::anyhow!(
                "Failed to write inventory file {} [{}]: {err}",
                self.output.display(),
                err.error_code()
            )
        })?;

        println!(
            "{} {}",
            style("Wrote:").bold().cyan(),
            self.output.display()
        );
        println!(
            "{} {} units in {} entries (capacity {})",
            style("Packed:").bold().cyan(),
            inventory.total_count(),
            inventory.items().len(),
            format_capacity(inventory.capacity())
        );
        println!();
        print_entries(&inventory);

        if !overflow.is_empty() {
            println!("{}", style("Did not fit:").bold().red());
            for item in &overflow {
                println!("  {item}");
            }
        }

        Ok(())
    }
}

fn read_items(path: &Path) -> Result<Vec<Item>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read item list: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse item list: {}", path.display()))
}

/// Adds `items` in order, collecting every remainder.
fn pack(owner: OwnerId, capacity: u32, items: Vec<Item>) -> (Inventory, Vec<Item>) {
    let mut inventory = Inventory::new(owner, capacity);
    let overflow = items
        .into_iter()
        .filter_map(|item| inventory.add(item))
        .collect();
    (inventory, overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_consolidates_and_reports_overflow() {
        let items = vec![
            Item::stack(1, 6),
            Item::stack(1, 6),
            Item::durability(9, 50, 100),
            Item::single(4),
        ];
        let (inventory, overflow) = pack(OwnerId(1), 13, items);
        assert_eq!(
            inventory.items(),
            &[Item::stack(1, 12), Item::durability(9, 50, 100)]
        );
        assert_eq!(overflow, vec![Item::single(4)]);
    }

    #[test]
    fn packed_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("items.json");
        let output = dir.path().join("chest.inv");
        let items = vec![Item::cube_stack(5, 2, 0, 30), Item::charge(3, 0.5)];
        std::fs::write(&input, serde_json::to_string(&items).unwrap()).unwrap();

        PackInventory {
            input,
            output: output.clone(),
            capacity: 64,
            owner: 7,
        }
        .execute()
        .unwrap();

        let mut restored = Inventory::new(OwnerId(7), 64);
        restored.load_file(&output).unwrap();
        assert_eq!(restored.items(), items.as_slice());
    }
}
