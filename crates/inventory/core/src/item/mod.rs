//! Item variants and their identity rules.
//!
//! This module contains the item value type:
//! - [`Item`]: closed set of variants, each a plain data record
//! - [`ItemType`]: the variant tag, stable across saves
//! - Comparison rules ([`Item::identity_eq`], [`Item::deep_eq`])
//! - Stack arithmetic ([`Item::amount`], [`Item::increment`], [`Item::split_off`])
//!
//! # Stacking
//!
//! Only [`Item::CubeStack`] and [`Item::Stack`] carry an amount. Every other
//! variant counts as exactly one unit and is never merged with another entry,
//! even an identical one, because each instance carries its own state
//! (durability wear, charge, placement).

mod compare;
mod stack;

pub use compare::within_tolerance;

use std::fmt;

/// Identifier of an item definition stored outside the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub i32);

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item:{}", self.0)
    }
}

/// Facing of a placed item. Components compare with relative tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LookVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LookVector {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// An item or a stack of items.
///
/// Derived `PartialEq` is exact structural equality (amount and raw floats
/// included). Consolidation and lookups use [`Item::deep_eq`] and
/// [`Item::identity_eq`] instead.
///
/// Variant declaration order is the persisted variant tag: append new variants
/// at the end only.
#[derive(Clone, Debug, PartialEq, strum::EnumDiscriminants)]
#[strum_discriminants(name(ItemType))]
#[strum_discriminants(derive(Hash, strum::Display, strum::EnumString, strum::AsRefStr))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    /// Stack of placeable cubes. Identity includes the cube type and value.
    CubeStack {
        item_id: ItemId,
        cube_type: u16,
        cube_value: u16,
        amount: u32,
    },

    /// Stack of plain items.
    Stack { item_id: ItemId, amount: u32 },

    /// One item with no extra state.
    Single { item_id: ItemId },

    /// Rechargeable item.
    Charge { item_id: ItemId, charge_level: f32 },

    /// Item that wears out.
    Durability {
        item_id: ItemId,
        current_durability: i32,
        max_durability: i32,
    },

    /// Item bound to a world location, such as a configured teleporter key.
    Location {
        item_id: ItemId,
        loc_x: i64,
        loc_y: i64,
        loc_z: i64,
        look: LookVector,
    },
}

impl Item {
    pub fn cube_stack(
        item_id: impl Into<ItemId>,
        cube_type: u16,
        cube_value: u16,
        amount: u32,
    ) -> Self {
        Self::CubeStack {
            item_id: item_id.into(),
            cube_type,
            cube_value,
            amount,
        }
    }

    pub fn stack(item_id: impl Into<ItemId>, amount: u32) -> Self {
        Self::Stack {
            item_id: item_id.into(),
            amount,
        }
    }

    pub fn single(item_id: impl Into<ItemId>) -> Self {
        Self::Single {
            item_id: item_id.into(),
        }
    }

    pub fn charge(item_id: impl Into<ItemId>, charge_level: f32) -> Self {
        Self::Charge {
            item_id: item_id.into(),
            charge_level,
        }
    }

    pub fn durability(item_id: impl Into<ItemId>, current: i32, max: i32) -> Self {
        Self::Durability {
            item_id: item_id.into(),
            current_durability: current,
            max_durability: max,
        }
    }

    pub fn location(item_id: impl Into<ItemId>, loc: [i64; 3], look: LookVector) -> Self {
        Self::Location {
            item_id: item_id.into(),
            loc_x: loc[0],
            loc_y: loc[1],
            loc_z: loc[2],
            look,
        }
    }

    pub const fn item_id(&self) -> ItemId {
        match self {
            Self::CubeStack { item_id, .. }
            | Self::Stack { item_id, .. }
            | Self::Single { item_id }
            | Self::Charge { item_id, .. }
            | Self::Durability { item_id, .. }
            | Self::Location { item_id, .. } => *item_id,
        }
    }

    pub fn item_type(&self) -> ItemType {
        ItemType::from(self)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CubeStack {
                item_id,
                cube_type,
                cube_value,
                amount,
            } => write!(f, "CubeStack({item_id} cube {cube_type}:{cube_value} x{amount})"),
            Self::Stack { item_id, amount } => write!(f, "Stack({item_id} x{amount})"),
            Self::Single { item_id } => write!(f, "Single({item_id})"),
            Self::Charge {
                item_id,
                charge_level,
            } => write!(f, "Charge({item_id} @ {charge_level})"),
            Self::Durability {
                item_id,
                current_durability,
                max_durability,
            } => write!(f, "Durability({item_id} {current_durability}/{max_durability})"),
            Self::Location {
                item_id,
                loc_x,
                loc_y,
                loc_z,
                ..
            } => write!(f, "Location({item_id} at {loc_x},{loc_y},{loc_z})"),
        }
    }
}
