use super::Item;

impl Item {
    /// True for the variants that carry an amount.
    pub const fn is_stackable(&self) -> bool {
        matches!(self, Item::CubeStack { .. } | Item::Stack { .. })
    }

    /// Units this entry contributes to a count: the stack amount, or 1.
    pub const fn amount(&self) -> u32 {
        match self {
            Item::CubeStack { amount, .. } | Item::Stack { amount, .. } => *amount,
            _ => 1,
        }
    }

    /// Sets the stack amount. No-op for non-stackable variants.
    ///
    /// A zero amount is stored as-is; removing empty entries is up to the caller.
    pub fn set_amount(&mut self, value: u32) {
        if let Item::CubeStack { amount, .. } | Item::Stack { amount, .. } = self {
            *amount = value;
        }
    }

    /// Builder form of [`Item::set_amount`].
    #[must_use]
    pub fn with_amount(mut self, value: u32) -> Self {
        self.set_amount(value);
        self
    }

    /// Grows the stack by `by`. No-op for non-stackable variants.
    pub fn increment(&mut self, by: u32) {
        if let Item::CubeStack { amount, .. } | Item::Stack { amount, .. } = self {
            *amount = amount.saturating_add(by);
        }
    }

    /// Shrinks the stack by `by`. No-op for non-stackable variants.
    ///
    /// Deducting more than the stack holds is a caller bug; use
    /// [`crate::transfer::take`] when the available amount is unknown.
    pub fn decrement(&mut self, by: u32) {
        if let Item::CubeStack { amount, .. } | Item::Stack { amount, .. } = self {
            debug_assert!(by <= *amount, "decrement {by} exceeds stack of {amount}");
            *amount = amount.saturating_sub(by);
        }
    }

    /// Fresh value of the same variant and fields, sharing nothing with `self`.
    pub fn new_instance(&self) -> Item {
        self.clone()
    }

    /// Splits `count` units off this stack into a new instance, shrinking the
    /// original in place.
    ///
    /// Returns `None` for non-stackable items or when `count` exceeds the
    /// current amount.
    pub fn split_off(&mut self, count: u32) -> Option<Item> {
        if !self.is_stackable() || count > self.amount() {
            return None;
        }
        self.decrement(count);
        Some(self.new_instance().with_amount(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_is_one_for_non_stackables() {
        assert_eq!(Item::single(1).amount(), 1);
        assert_eq!(Item::charge(1, 3.0).amount(), 1);
        assert_eq!(Item::durability(1, 5, 10).amount(), 1);
        assert_eq!(Item::stack(1, 42).amount(), 42);
        assert_eq!(Item::cube_stack(1, 2, 3, 0).amount(), 0);
    }

    #[test]
    fn arithmetic_ignores_non_stackables() {
        let mut item = Item::durability(9, 50, 100);
        item.set_amount(10);
        item.increment(3);
        item.decrement(1);
        assert_eq!(item, Item::durability(9, 50, 100));
        assert_eq!(item.amount(), 1);
    }

    #[test]
    fn arithmetic_adjusts_stacks() {
        let mut item = Item::cube_stack(5, 2, 0, 4);
        item.increment(3);
        assert_eq!(item.amount(), 7);
        item.decrement(2);
        assert_eq!(item.amount(), 5);
        item.set_amount(0);
        assert_eq!(item, Item::cube_stack(5, 2, 0, 0));
    }

    #[test]
    fn new_instance_does_not_alias() {
        let original = Item::stack(2, 20);
        let mut copy = original.new_instance();
        copy.set_amount(5);
        assert_eq!(original.amount(), 20);
        assert_eq!(copy.amount(), 5);
    }

    #[test]
    fn split_off_moves_units_to_new_instance() {
        let mut stack = Item::stack(2, 20);
        let split = stack.split_off(5).unwrap();
        assert_eq!(stack, Item::stack(2, 15));
        assert_eq!(split, Item::stack(2, 5));
    }

    #[test]
    fn split_off_rejects_oversized_or_single() {
        let mut stack = Item::stack(2, 3);
        assert!(stack.split_off(4).is_none());
        assert_eq!(stack.amount(), 3);
        assert!(Item::single(1).split_off(1).is_none());
    }
}
