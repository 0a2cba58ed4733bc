use super::{Item, LookVector};
use crate::config::InventoryConfig;

/// Relative float comparison: `|a - b| <= |a * tolerance|`.
///
/// The bound scales with `a`, so the check is not symmetric for values of very
/// different magnitude.
pub fn within_tolerance(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= (a * tolerance).abs()
}

impl LookVector {
    /// Component-wise [`within_tolerance`] using the crate tolerance.
    pub fn approx_eq(&self, other: &LookVector) -> bool {
        let tolerance = InventoryConfig::FLOAT_TOLERANCE;
        within_tolerance(self.x, other.x, tolerance)
            && within_tolerance(self.y, other.y, tolerance)
            && within_tolerance(self.z, other.z, tolerance)
    }
}

impl Item {
    /// Same kind of item: item id and variant match, and for cube stacks the
    /// cube type and value match too. Amount is never compared.
    pub fn identity_eq(&self, other: &Item) -> bool {
        if self.item_id() != other.item_id() {
            return false;
        }
        match (self, other) {
            (
                Item::CubeStack {
                    cube_type,
                    cube_value,
                    ..
                },
                Item::CubeStack {
                    cube_type: other_type,
                    cube_value: other_value,
                    ..
                },
            ) => cube_type == other_type && cube_value == other_value,
            _ => self.item_type() == other.item_type(),
        }
    }

    /// Identity match plus every variant-specific field except amount.
    ///
    /// Charge level and look vector use relative tolerance, durability and
    /// block coordinates compare exactly.
    pub fn deep_eq(&self, other: &Item) -> bool {
        if !self.identity_eq(other) {
            return false;
        }
        match (self, other) {
            (Item::CubeStack { .. }, Item::CubeStack { .. })
            | (Item::Stack { .. }, Item::Stack { .. })
            | (Item::Single { .. }, Item::Single { .. }) => true,
            (
                Item::Charge { charge_level, .. },
                Item::Charge {
                    charge_level: other_level,
                    ..
                },
            ) => within_tolerance(*charge_level, *other_level, InventoryConfig::FLOAT_TOLERANCE),
            (
                Item::Durability {
                    current_durability,
                    max_durability,
                    ..
                },
                Item::Durability {
                    current_durability: other_current,
                    max_durability: other_max,
                    ..
                },
            ) => current_durability == other_current && max_durability == other_max,
            (
                Item::Location {
                    loc_x,
                    loc_y,
                    loc_z,
                    look,
                    ..
                },
                Item::Location {
                    loc_x: other_x,
                    loc_y: other_y,
                    loc_z: other_z,
                    look: other_look,
                    ..
                },
            ) => {
                loc_x == other_x
                    && loc_y == other_y
                    && loc_z == other_z
                    && look.approx_eq(other_look)
            }
            _ => false,
        }
    }

    /// Both items are stacks of the same kind and would consolidate.
    pub fn stacks_with(&self, other: &Item) -> bool {
        self.is_stackable() && other.is_stackable() && self.deep_eq(other)
    }
}
