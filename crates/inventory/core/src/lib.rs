//! Capacity-bounded item storage shared by machines, carts and player bags.
//!
//! `inventory-core` defines the canonical item model ([`Item`]), the list
//! transfer engine ([`transfer`]) and the [`Inventory`] container built on top
//! of it. Every operation runs to completion synchronously and mutates only the
//! sequences it is handed, so a host can drive any number of independently
//! owned containers from its own tick loop.
//!
//! Anything that does not fit is handed back to the caller: `add` returns the
//! remainder item, bulk moves report how many units actually moved.
pub mod config;
pub mod error;
pub mod inventory;
pub mod item;
pub mod rng;
pub mod transfer;

#[cfg(feature = "serde")]
pub mod codec;

pub use config::InventoryConfig;
pub use error::{ErrorSeverity, InventoryError};
pub use inventory::{
    DropSink, DroppedItem, Inventory, OwnerId, ScatterVelocity, Velocity, VelocitySource,
    WorldPosition,
};
pub use item::{Item, ItemId, ItemType, LookVector};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use transfer::{ItemFilter, MoveRequest};

#[cfg(feature = "serde")]
pub use codec::{BincodeItemCodec, CodecError, ItemCodec};
#[cfg(feature = "serde")]
pub use inventory::{LoadReport, PersistError};
