//! Common error infrastructure for inventory-core.
//!
//! Transfer operations never fail: overflow comes back as a remainder item and
//! shortfalls as a moved-unit count. Errors only exist at the persistence edge
//! (codec and container load/save), and every error type there implements
//! [`InventoryError`] so hosts can classify failures uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions (I/O hiccups) that may succeed on retry
/// - **Validation**: Input this build does not understand, rejected without retry
/// - **Fatal**: Corrupted persisted data that cannot be loaded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry the same operation.
    ///
    /// Examples: writer closed, short read from a socket
    Recoverable,

    /// Validation error - the data is well-formed but not supported.
    ///
    /// Examples: save written with an unknown schema version
    Validation,

    /// Fatal error - persisted data is corrupted, cannot continue loading.
    ///
    /// Examples: negative entry count, undecodable item record
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if the persisted data is corrupted.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all inventory-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait InventoryError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
