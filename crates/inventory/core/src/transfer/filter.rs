use crate::item::Item;

/// Identity-based predicate restricting which entries a bulk move may pick.
///
/// Filter entries are examples only: their amounts carry no meaning.
#[derive(Clone, Copy, Debug, Default)]
pub enum ItemFilter<'a> {
    /// Every entry is eligible.
    #[default]
    Any,

    /// Only entries identity-equal to one of the examples.
    Whitelist(&'a [Item]),

    /// Only entries identity-equal to none of the examples.
    Blacklist(&'a [Item]),
}

impl<'a> ItemFilter<'a> {
    pub fn new(items: &'a [Item], is_whitelist: bool) -> Self {
        if is_whitelist {
            Self::Whitelist(items)
        } else {
            Self::Blacklist(items)
        }
    }

    pub fn whitelist_one(item: &'a Item) -> Self {
        Self::Whitelist(core::slice::from_ref(item))
    }

    pub fn blacklist_one(item: &'a Item) -> Self {
        Self::Blacklist(core::slice::from_ref(item))
    }

    pub fn permits(&self, item: &Item) -> bool {
        match self {
            Self::Any => true,
            Self::Whitelist(list) => list.iter().any(|entry| entry.identity_eq(item)),
            Self::Blacklist(list) => !list.iter().any(|entry| entry.identity_eq(item)),
        }
    }
}
