//! Read and inspect saved inventories
//!
//! Loads a container save file and displays its contents.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use inventory_core::{Inventory, InventoryError, LoadReport, OwnerId};

use crate::utils::{format_bytes, format_capacity, print_entries, print_load_report, units_by_type};

/// Read and inspect a saved inventory
#[derive(Parser)]
pub struct ReadInventory {
    /// Path to the save file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Capacity to load into; entries beyond it are reported, not loaded
    #[arg(short, long, value_name = "N", default_value_t = u32::MAX)]
    capacity: u32,

    /// Owner id shown in logs
    #[arg(short, long, value_name = "ID", default_value_t = 0)]
    owner: u32,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (entry count, units per item type, entries)
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl ReadInventory {
    pub fn execute(self) -> Result<()> {
        if !self.file.exists() {
            anyhow::bail!("Inventory file not found: {}", self.file.display());
        }

        let size = std::fs::metadata(&self.file)
            .with_context(|| format!("Failed to stat inventory file: {}", self.file.display()))?
            .len();

        let mut inventory = Inventory::new(OwnerId(self.owner), self.capacity);
        let report = inventory.load_file(&self.file).map_err(|err| {
            anyhow::anyhow!(
                "Failed to load inventory file {} [{}]: {err}",
                self.file.display(),
                err.error_code()
            )
        })?;

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{} {}",
                    style("Inventory File:").bold().cyan(),
                    self.file.display()
                );
                println!("{} {}", style("File Size:").bold().cyan(), format_bytes(size));
                println!(
                    "{} {}",
                    style("Capacity:").bold().cyan(),
                    format_capacity(inventory.capacity())
                );
                println!();
                print_summary(&inventory, &report);
            }
            OutputFormat::Json => print_json(&inventory, &report)?,
            OutputFormat::Debug => println!("{:#?}\n{:#?}", inventory, report),
        }

        Ok(())
    }
}

fn print_summary(inventory: &Inventory, report: &LoadReport) {
    println!("{}", style("=== Inventory Summary ===").bold().green());
    println!();

    println!("{}", style("Totals:").bold().yellow());
    println!("  Entries: {}", inventory.items().len());
    println!("  Units: {}", inventory.total_count());
    println!("  Spare Capacity: {}", format_capacity(inventory.spare_capacity()));
    for (kind, units) in units_by_type(inventory.items()) {
        println!("  {kind}: {units}");
    }
    println!();

    print_entries(inventory);
    print_load_report(report);
}

fn print_json(inventory: &Inventory, report: &LoadReport) -> Result<()> {
    let value = serde_json::json!({
        "owner": inventory.owner(),
        "capacity": inventory.capacity(),
        "total_count": inventory.total_count(),
        "items": inventory.items(),
        "skipped": report.skipped,
        "overflow": report.overflow,
    });
    let json =
        serde_json::to_string_pretty(&value).context("Failed to serialize inventory to JSON")?;
    println!("{}", json);
    Ok(())
}
