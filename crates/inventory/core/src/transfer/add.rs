use super::count::total_count;
use crate::item::Item;

/// Adds `item` to `target` without letting the sequence exceed `capacity`.
///
/// Stacks consolidate into the first deep-equal entry, otherwise the item is
/// appended. Non-stackable items always get their own entry.
///
/// Returns whatever did not fit: the split-off excess of a stack, or the whole
/// item when nothing of it could be stored. `None` means everything fit.
pub fn add(mut item: Item, target: &mut Vec<Item>, capacity: u32) -> Option<Item> {
    let free = capacity.saturating_sub(total_count(target));
    let incoming = item.amount();

    let remainder = if incoming > free {
        if free == 0 || !item.is_stackable() {
            tracing::trace!(%item, capacity, "no room, returning item");
            return Some(item);
        }
        item.split_off(incoming - free)
    } else {
        None
    };

    insert(item, target);
    remainder
}

fn insert(item: Item, target: &mut Vec<Item>) {
    if !item.is_stackable() {
        target.push(item);
        return;
    }
    if item.amount() == 0 {
        return;
    }
    match target.iter_mut().find(|entry| entry.stacks_with(&item)) {
        Some(entry) => entry.increment(item.amount()),
        None => target.push(item),
    }
}
