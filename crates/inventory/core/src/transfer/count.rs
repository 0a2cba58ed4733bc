use crate::item::{Item, ItemId};

/// Units held by a sequence: stacks count their amount, everything else one.
pub fn total_count(items: &[Item]) -> u32 {
    items
        .iter()
        .fold(0u32, |total, item| total.saturating_add(item.amount()))
}

/// Units of a given item id, across all variants.
pub fn count_of_id(items: &[Item], item_id: ItemId) -> u32 {
    items
        .iter()
        .filter(|item| item.item_id() == item_id)
        .fold(0u32, |total, item| total.saturating_add(item.amount()))
}

/// Units of cube stacks with the given cube type and value.
pub fn count_of_cube(items: &[Item], cube_type: u16, cube_value: u16) -> u32 {
    items
        .iter()
        .filter(|item| {
            matches!(
                item,
                Item::CubeStack { cube_type: t, cube_value: v, .. }
                    if *t == cube_type && *v == cube_value
            )
        })
        .fold(0u32, |total, item| total.saturating_add(item.amount()))
}

/// Units matching `example`: by cube type and value for a cube stack example,
/// by item id for anything else.
pub fn count_like(items: &[Item], example: &Item) -> u32 {
    match example {
        Item::CubeStack {
            cube_type,
            cube_value,
            ..
        } => count_of_cube(items, *cube_type, *cube_value),
        _ => count_of_id(items, example.item_id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Vec<Item> {
        vec![
            Item::stack(1, 10),
            Item::cube_stack(5, 2, 0, 4),
            Item::durability(9, 50, 100),
            Item::cube_stack(6, 2, 0, 3),
            Item::single(1),
            Item::cube_stack(5, 2, 1, 8),
        ]
    }

    #[test]
    fn total_counts_stack_amounts_and_singles() {
        assert_eq!(total_count(&mixed()), 10 + 4 + 1 + 3 + 1 + 8);
        assert_eq!(total_count(&[]), 0);
    }

    #[test]
    fn count_of_id_spans_variants() {
        assert_eq!(count_of_id(&mixed(), ItemId(1)), 11);
        assert_eq!(count_of_id(&mixed(), ItemId(42)), 0);
    }

    #[test]
    fn count_of_cube_ignores_item_id() {
        assert_eq!(count_of_cube(&mixed(), 2, 0), 7);
        assert_eq!(count_of_cube(&mixed(), 2, 1), 8);
    }

    #[test]
    fn count_like_picks_rule_from_example() {
        assert_eq!(count_like(&mixed(), &Item::cube_stack(0, 2, 0, 1)), 7);
        assert_eq!(count_like(&mixed(), &Item::durability(9, 0, 0)), 1);
    }
}
