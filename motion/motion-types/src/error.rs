//! Error types for catalog lookups.

use thiserror::Error;

/// Errors from fallible catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The bit does not belong to any catalog sensor.
    #[error("unknown sensor bit: {bit}")]
    UnknownBit {
        /// The rejected bit value.
        bit: u32,
    },

    /// The name does not belong to any catalog sensor.
    #[error("unknown sensor name: {name}")]
    UnknownName {
        /// The rejected name.
        name: String,
    },
}

impl TypeError {
    /// Creates an unknown-name error.
    #[must_use]
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName { name: name.into() }
    }
}
