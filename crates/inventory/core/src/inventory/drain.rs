//! Emptying a container into the world when its owner is destroyed.
//!
//! The core only walks the entries. Where items land and how they fly is the
//! host's business: the caller supplies the owner position and a
//! [`VelocitySource`], and a [`DropSink`] performs the actual spawn.
//!
//! Replicas without world-mutation authority must not call
//! [`Inventory::drain_on_destroy`]; that check belongs to the host.

use super::{Inventory, OwnerId};
use crate::config::InventoryConfig;
use crate::item::Item;
use crate::rng::{RngOracle, compute_seed};

/// Block coordinates in the host world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPosition {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl WorldPosition {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

/// Initial velocity of a dropped item.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Velocity {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Host collaborator that spawns a dropped item in the world.
pub trait DropSink {
    fn drop_item(&mut self, item: Item, position: WorldPosition, velocity: Velocity);
}

/// Produces one velocity per dropped entry.
pub trait VelocitySource {
    fn next_velocity(&mut self) -> Velocity;
}

impl<F> VelocitySource for F
where
    F: FnMut() -> Velocity,
{
    fn next_velocity(&mut self) -> Velocity {
        self()
    }
}

/// A drop recorded by the `Vec` sink, for hosts that spawn in batches.
#[derive(Clone, Debug, PartialEq)]
pub struct DroppedItem {
    pub item: Item,
    pub position: WorldPosition,
    pub velocity: Velocity,
}

impl DropSink for Vec<DroppedItem> {
    fn drop_item(&mut self, item: Item, position: WorldPosition, velocity: Velocity) {
        self.push(DroppedItem {
            item,
            position,
            velocity,
        });
    }
}

/// Deterministic random scatter: every component lies in `[-spread, spread)`.
///
/// Seeds derive from the host seed, the owner and the drop index, so the same
/// container drained twice from the same seed scatters identically.
pub struct ScatterVelocity<'a, R: RngOracle + ?Sized> {
    rng: &'a R,
    base_seed: u64,
    owner: OwnerId,
    spread: f32,
    slot: u64,
}

impl<'a, R: RngOracle + ?Sized> ScatterVelocity<'a, R> {
    pub fn new(rng: &'a R, base_seed: u64, owner: OwnerId) -> Self {
        Self {
            rng,
            base_seed,
            owner,
            spread: InventoryConfig::SCATTER_SPREAD,
            slot: 0,
        }
    }

    pub fn from_config(
        rng: &'a R,
        base_seed: u64,
        owner: OwnerId,
        config: &InventoryConfig,
    ) -> Self {
        Self::new(rng, base_seed, owner).with_spread(config.scatter_spread)
    }

    #[must_use]
    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }

    fn component(&self, axis: u32) -> f32 {
        let seed = compute_seed(self.base_seed, self.slot, self.owner.0, axis);
        (self.rng.unit(seed) * 2.0 - 1.0) * self.spread
    }
}

impl<R: RngOracle + ?Sized> VelocitySource for ScatterVelocity<'_, R> {
    fn next_velocity(&mut self) -> Velocity {
        let velocity = Velocity::new(self.component(0), self.component(1), self.component(2));
        self.slot += 1;
        velocity
    }
}

impl Inventory {
    /// Hands every entry to `sink` at `position`, one velocity each, and
    /// leaves the container empty.
    ///
    /// Returns the number of entries dropped.
    pub fn drain_on_destroy<S, V>(
        &mut self,
        sink: &mut S,
        position: WorldPosition,
        velocities: &mut V,
    ) -> usize
    where
        S: DropSink + ?Sized,
        V: VelocitySource + ?Sized,
    {
        let dropped = self.items.len();
        for item in self.items.drain(..) {
            sink.drop_item(item, position, velocities.next_velocity());
        }
        tracing::debug!(owner = %self.owner, dropped, ?position, "drained inventory");
        dropped
    }
}
