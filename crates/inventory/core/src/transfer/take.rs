use crate::item::Item;

/// Removes the amount described by `example` from `from`.
///
/// The first entry identity-equal to `example` is used; later entries of the
/// same kind are not aggregated.
///
/// - Non-stackable: the matching entry itself is removed and returned.
/// - Stackable with enough units: the entry shrinks (or is removed when it
///   holds exactly the requested amount) and `example` is returned.
/// - Stackable with too few units: with `allow_partial`, the entry is removed
///   and `example` comes back holding what was there; without it nothing
///   changes and `None` is returned.
pub fn take(mut example: Item, from: &mut Vec<Item>, allow_partial: bool) -> Option<Item> {
    let index = from.iter().position(|entry| entry.identity_eq(&example))?;

    if !example.is_stackable() {
        return Some(from.remove(index));
    }

    let available = from[index].amount();
    let wanted = example.amount();
    if available > wanted {
        from[index].decrement(wanted);
    } else if available == wanted {
        from.remove(index);
    } else if allow_partial {
        example.set_amount(available);
        from.remove(index);
    } else {
        tracing::trace!(%example, available, "insufficient stock");
        return None;
    }
    Some(example)
}
