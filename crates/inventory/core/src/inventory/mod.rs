//! Capacity-bounded container.
//!
//! [`Inventory`] owns an ordered item sequence and a capacity, and exposes the
//! transfer engine as methods. The invariant `total_count() <= capacity()` is
//! upheld constructively by every method: overflow is returned to the caller,
//! never stored.
mod drain;
#[cfg(feature = "serde")]
mod persist;

pub use drain::{DropSink, DroppedItem, ScatterVelocity, Velocity, VelocitySource, WorldPosition};
#[cfg(feature = "serde")]
pub use persist::{LoadReport, PersistError};

use std::fmt;

use crate::config::InventoryConfig;
use crate::item::Item;
use crate::transfer::{self, ItemFilter, MoveRequest};

/// Identifier of the entity (machine, cart, player) that owns a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnerId(pub u32);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered, capacity-bounded item storage bound to an owner.
#[derive(Clone, Debug, PartialEq)]
pub struct Inventory {
    owner: OwnerId,
    capacity: u32,
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(owner: OwnerId, capacity: u32) -> Self {
        Self {
            owner,
            capacity,
            items: Vec::new(),
        }
    }

    pub fn from_config(owner: OwnerId, config: &InventoryConfig) -> Self {
        Self::new(owner, config.default_capacity)
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    // ===== capacity queries =====

    pub fn total_count(&self) -> u32 {
        transfer::total_count(&self.items)
    }

    pub fn spare_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.total_count())
    }

    pub fn has_spare_capacity(&self) -> bool {
        self.spare_capacity() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    pub fn is_full(&self) -> bool {
        self.total_count() >= self.capacity
    }

    /// Units of the same kind as `example`, see [`transfer::count_like`].
    pub fn count_of(&self, example: &Item) -> u32 {
        transfer::count_like(&self.items, example)
    }

    // ===== inbound =====

    /// Adds one item, returning the part that did not fit.
    pub fn add(&mut self, item: Item) -> Option<Item> {
        transfer::add(item, &mut self.items, self.capacity)
    }

    /// Pulls up to `amount` units of anything from `source`.
    pub fn add_from(&mut self, source: &mut Vec<Item>, amount: u32) -> u32 {
        self.add_filtered(source, ItemFilter::Any, amount)
    }

    /// Pulls up to `amount` units from `source` that pass `filter`.
    pub fn add_filtered(
        &mut self,
        source: &mut Vec<Item>,
        filter: ItemFilter<'_>,
        amount: u32,
    ) -> u32 {
        let request = MoveRequest::new(amount, self.capacity).with_filter(filter);
        transfer::move_many(source, &mut self.items, request)
    }

    /// Pulls from `source` until this container is full or `source` runs out.
    pub fn fill(&mut self, source: &mut Vec<Item>) -> u32 {
        self.fill_filtered(source, ItemFilter::Any)
    }

    pub fn fill_filtered(&mut self, source: &mut Vec<Item>, filter: ItemFilter<'_>) -> u32 {
        let spare = self.spare_capacity();
        self.add_filtered(source, filter, spare)
    }

    // ===== outbound =====

    /// Takes the amount described by `example`, all or nothing.
    pub fn remove(&mut self, example: Item) -> Option<Item> {
        transfer::take(example, &mut self.items, false)
    }

    /// Takes the amount described by `example`, or what is left of a shorter stack.
    pub fn remove_partial(&mut self, example: Item) -> Option<Item> {
        transfer::take(example, &mut self.items, true)
    }

    /// Pulls up to `amount` units out of the first entry.
    ///
    /// Returns `None` when the container is empty or `amount` is zero.
    pub fn remove_any(&mut self, amount: u32) -> Option<Item> {
        let mut output = Vec::with_capacity(1);
        let request = MoveRequest::new(amount, amount).first_item_only();
        transfer::move_many(&mut self.items, &mut output, request);
        output.into_iter().next()
    }

    /// Pushes up to `amount` units that pass `filter` into `target`, which can
    /// hold at most `capacity` units.
    pub fn remove_filtered(
        &mut self,
        target: &mut Vec<Item>,
        filter: ItemFilter<'_>,
        capacity: u32,
        amount: u32,
    ) -> u32 {
        let request = MoveRequest::new(amount, capacity).with_filter(filter);
        transfer::move_many(&mut self.items, target, request)
    }

    /// Pushes up to `amount` units of anything into an unbounded `target`.
    pub fn empty_into(&mut self, target: &mut Vec<Item>, amount: u32) -> u32 {
        transfer::move_many(&mut self.items, target, MoveRequest::unbounded(amount))
    }

    /// Moves up to `amount` units that pass `filter` into another container,
    /// honouring its capacity.
    pub fn move_into(&mut self, other: &mut Inventory, filter: ItemFilter<'_>, amount: u32) -> u32 {
        let request = MoveRequest::new(amount, other.capacity).with_filter(filter);
        let moved = transfer::move_many(&mut self.items, &mut other.items, request);
        tracing::trace!(from = %self.owner, to = %other.owner, moved, "moved between inventories");
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hopper(capacity: u32) -> Inventory {
        Inventory::new(OwnerId(1), capacity)
    }

    #[test]
    fn capacity_queries() {
        let mut inventory = hopper(10);
        assert!(inventory.is_empty());
        assert!(!inventory.is_full());
        assert_eq!(inventory.spare_capacity(), 10);

        inventory.add(Item::stack(1, 7));
        inventory.add(Item::single(2));
        assert_eq!(inventory.total_count(), 8);
        assert_eq!(inventory.spare_capacity(), 2);
        assert!(inventory.has_spare_capacity());

        inventory.add(Item::stack(1, 2));
        assert!(inventory.is_full());
        assert!(!inventory.has_spare_capacity());
        assert_eq!(inventory.count_of(&Item::stack(1, 0)), 9);
    }

    #[test]
    fn from_config_uses_default_capacity() {
        let config = InventoryConfig::default().with_default_capacity(64);
        let inventory = Inventory::from_config(OwnerId(3), &config);
        assert_eq!(inventory.capacity(), 64);
        assert_eq!(inventory.owner(), OwnerId(3));
    }

    #[test]
    fn add_returns_remainder() {
        let mut inventory = hopper(15);
        assert_eq!(inventory.add(Item::stack(2, 20)), Some(Item::stack(2, 5)));
        assert_eq!(inventory.items(), &[Item::stack(2, 15)]);
    }

    #[test]
    fn fill_stops_at_capacity() {
        let mut inventory = hopper(10);
        inventory.add(Item::single(9));
        let mut source = vec![Item::stack(1, 6), Item::stack(2, 6)];
        assert_eq!(inventory.fill(&mut source), 9);
        assert!(inventory.is_full());
        assert_eq!(source, vec![Item::stack(2, 3)]);
    }

    #[test]
    fn fill_filtered_only_takes_whitelisted() {
        let mut inventory = hopper(100);
        let wanted = [Item::cube_stack(5, 2, 0, 1)];
        let mut source = vec![Item::cube_stack(5, 2, 1, 10), Item::cube_stack(5, 2, 0, 10)];
        inventory.fill_filtered(&mut source, ItemFilter::new(&wanted, true));
        assert_eq!(inventory.items(), &[Item::cube_stack(5, 2, 0, 10)]);
        assert_eq!(source, vec![Item::cube_stack(5, 2, 1, 10)]);
    }

    #[test]
    fn add_from_limits_amount() {
        let mut inventory = hopper(100);
        let mut source = vec![Item::stack(1, 30)];
        assert_eq!(inventory.add_from(&mut source, 12), 12);
        assert_eq!(source, vec![Item::stack(1, 18)]);
    }

    #[test]
    fn remove_and_remove_partial() {
        let mut inventory = hopper(100);
        inventory.add(Item::stack(1, 4));
        assert!(inventory.remove(Item::stack(1, 10)).is_none());
        assert_eq!(inventory.total_count(), 4);
        assert_eq!(inventory.remove_partial(Item::stack(1, 10)), Some(Item::stack(1, 4)));
        assert!(inventory.is_empty());
    }

    #[test]
    fn remove_any_takes_from_first_entry() {
        let mut inventory = hopper(100);
        inventory.add(Item::stack(1, 5));
        inventory.add(Item::single(2));
        assert_eq!(inventory.remove_any(3), Some(Item::stack(1, 3)));
        assert_eq!(inventory.remove_any(10), Some(Item::stack(1, 2)));
        assert_eq!(inventory.remove_any(10), Some(Item::single(2)));
        assert_eq!(inventory.remove_any(10), None);
    }

    #[test]
    fn remove_any_zero_is_none() {
        let mut inventory = hopper(100);
        inventory.add(Item::stack(1, 5));
        assert_eq!(inventory.remove_any(0), None);
        assert_eq!(inventory.total_count(), 5);
    }

    #[test]
    fn remove_filtered_honours_target_capacity() {
        let mut inventory = hopper(100);
        inventory.add(Item::stack(1, 5));
        inventory.add(Item::stack(2, 5));
        let banned = Item::stack(1, 0);
        let mut cart = Vec::new();
        let moved = inventory.remove_filtered(&mut cart, ItemFilter::blacklist_one(&banned), 3, 10);
        assert_eq!(moved, 3);
        assert_eq!(cart, vec![Item::stack(2, 3)]);
        assert_eq!(inventory.count_of(&Item::stack(2, 0)), 2);
    }

    #[test]
    fn empty_into_moves_requested_amount() {
        let mut inventory = hopper(100);
        inventory.add(Item::stack(1, 5));
        inventory.add(Item::single(2));
        let mut out = Vec::new();
        assert_eq!(inventory.empty_into(&mut out, 100), 6);
        assert!(inventory.is_empty());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn move_into_respects_other_capacity() {
        let mut source = hopper(100);
        source.add(Item::stack(1, 50));
        let mut target = Inventory::new(OwnerId(2), 10);
        assert_eq!(source.move_into(&mut target, ItemFilter::Any, 50), 10);
        assert_eq!(source.total_count(), 40);
        assert_eq!(target.total_count(), 10);
        assert!(target.is_full());
    }
}
