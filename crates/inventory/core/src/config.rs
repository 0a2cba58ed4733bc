/// Inventory configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryConfig {
    /// Capacity given to containers built through [`crate::Inventory::from_config`].
    pub default_capacity: u32,
    /// Half-width of each velocity component handed out when a container is
    /// drained into the world.
    pub scatter_spread: f32,
}

impl InventoryConfig {
    // ===== persisted format =====
    /// The only container layout this crate reads or writes.
    pub const SCHEMA_VERSION: i32 = 0;

    // ===== comparison rules =====
    /// Relative tolerance for float-bearing item fields (charge, look vector).
    pub const FLOAT_TOLERANCE: f32 = 0.1;

    // ===== runtime-tunable defaults =====
    /// Capacity used when the caller has no storage limit to enforce.
    pub const UNBOUNDED_CAPACITY: u32 = u32::MAX;
    pub const DEFAULT_CAPACITY: u32 = Self::UNBOUNDED_CAPACITY;
    pub const SCATTER_SPREAD: f32 = 0.5;

    pub fn new() -> Self {
        Self {
            default_capacity: Self::DEFAULT_CAPACITY,
            scatter_spread: Self::SCATTER_SPREAD,
        }
    }

    #[must_use]
    pub fn with_default_capacity(mut self, capacity: u32) -> Self {
        self.default_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_scatter_spread(mut self, spread: f32) -> Self {
        self.scatter_spread = spread;
        self
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new()
    }
}
