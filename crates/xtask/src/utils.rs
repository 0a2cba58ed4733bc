//! Utility functions for xtask commands

use console::style;
use inventory_core::{Inventory, Item, ItemType, LoadReport};

pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Capacity as shown to the user; `u32::MAX` reads as unbounded.
pub fn format_capacity(capacity: u32) -> String {
    if capacity == u32::MAX {
        "unbounded".to_string()
    } else {
        capacity.to_string()
    }
}

/// Units held per variant, in variant order, skipping variants with no entries.
pub fn units_by_type(items: &[Item]) -> Vec<(ItemType, u32)> {
    let mut totals: Vec<(ItemType, u32)> = Vec::new();
    for item in items {
        let kind = item.item_type();
        match totals.iter_mut().find(|(existing, _)| *existing == kind) {
            Some((_, units)) => *units = units.saturating_add(item.amount()),
            None => totals.push((kind, item.amount())),
        }
    }
    totals
}

pub fn print_entries(inventory: &Inventory) {
    println!("{}", style("Entries:").bold().yellow());
    if inventory.items().is_empty() {
        println!("  (empty)");
    }
    for (slot, item) in inventory.items().iter().enumerate() {
        println!("  [{slot:>3}] {item}");
    }
    println!();
}

pub fn print_load_report(report: &LoadReport) {
    if report.is_clean() {
        return;
    }
    println!("{}", style("Load Warnings:").bold().red());
    if report.skipped > 0 {
        println!("  Null slots skipped: {}", report.skipped);
    }
    for item in &report.overflow {
        println!("  Over capacity, not loaded: {item}");
    }
    println!();
}
