use super::add::add;
use super::count::total_count;
use super::filter::ItemFilter;
use crate::config::InventoryConfig;
use crate::item::Item;

/// Parameters of a bulk move.
#[derive(Clone, Copy, Debug)]
pub struct MoveRequest<'a> {
    /// Maximum number of units to move.
    pub amount: u32,
    /// Capacity of the destination sequence.
    pub capacity: u32,
    /// Stop after the first eligible source entry.
    pub first_item_only: bool,
    /// Restricts which source entries are eligible.
    pub filter: ItemFilter<'a>,
}

impl<'a> MoveRequest<'a> {
    pub const fn new(amount: u32, capacity: u32) -> Self {
        Self {
            amount,
            capacity,
            first_item_only: false,
            filter: ItemFilter::Any,
        }
    }

    /// Request against a destination with no storage limit.
    pub const fn unbounded(amount: u32) -> Self {
        Self::new(amount, InventoryConfig::UNBOUNDED_CAPACITY)
    }

    #[must_use]
    pub const fn first_item_only(mut self) -> Self {
        self.first_item_only = true;
        self
    }

    #[must_use]
    pub const fn with_filter(mut self, filter: ItemFilter<'a>) -> Self {
        self.filter = filter;
        self
    }
}

/// Moves up to `request.amount` units from `from` into `to`.
///
/// Source entries are visited front to back, skipping those the filter
/// rejects. Each eligible entry moves as much as the outstanding amount and
/// the destination's free space allow; stacks that only partially fit are
/// split and keep their remainder in `from`. The scan stops once the amount
/// is met, the destination is full, an entry could not move completely, or
/// after the first eligible entry when `first_item_only` is set.
///
/// A shortfall is not an error. Returns the number of units moved.
pub fn move_many(from: &mut Vec<Item>, to: &mut Vec<Item>, request: MoveRequest<'_>) -> u32 {
    let mut outstanding = request.amount;
    let mut moved = 0u32;
    let mut index = 0;

    while outstanding > 0 && index < from.len() {
        let count = from[index].amount();
        if count == 0 || !request.filter.permits(&from[index]) {
            index += 1;
            continue;
        }

        let free = request.capacity.saturating_sub(total_count(to));
        if free == 0 {
            break;
        }

        let units = if from[index].is_stackable() {
            count.min(outstanding).min(free)
        } else {
            1
        };

        let part = if units == count {
            Some(from.remove(index))
        } else {
            from[index].split_off(units)
        };
        if let Some(part) = part {
            tracing::trace!(item = %part, units, "moving");
            let overflow = add(part, to, request.capacity);
            debug_assert!(overflow.is_none(), "move exceeded destination free space");
        }

        moved += units;
        outstanding -= units;
        if units < count || request.first_item_only {
            break;
        }
    }

    moved
}
