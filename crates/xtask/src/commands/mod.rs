//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod pack_inventory;
mod read_inventory;

pub use pack_inventory::PackInventory;
pub use read_inventory::ReadInventory;
