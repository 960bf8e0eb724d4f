//! Error types for ensemble setup.
//!
//! Setup-time failures are fatal to the `listen` call and surface here.
//! Runtime sensor trouble is data, not an error: it lands in the frame table
//! as a [`SensorValue::Error`](motion_types::SensorValue) record and never
//! interrupts the stream.

use thiserror::Error;

use motion_types::SensorKind;

use crate::permission::PermissionCategory;

/// A consent query the host rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{category} permission query failed: {reason}")]
pub struct PermissionError {
    /// The category whose query failed.
    pub category: PermissionCategory,
    /// The host-reported reason.
    pub reason: String,
}

impl PermissionError {
    /// Creates a permission error.
    #[must_use]
    pub fn new(category: PermissionCategory, reason: impl Into<String>) -> Self {
        Self {
            category,
            reason: reason.into(),
        }
    }
}

/// A capability object the host could not construct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The host has no device backing this sensor kind.
    #[error("{kind_name} is unavailable: {reason}")]
    Unavailable {
        /// Logical name of the sensor kind.
        kind_name: &'static str,
        /// The host-reported reason.
        reason: String,
    },

    /// Construction was attempted and failed.
    #[error("constructing {kind_name} failed: {reason}")]
    Construction {
        /// Logical name of the sensor kind.
        kind_name: &'static str,
        /// The host-reported reason.
        reason: String,
    },
}

impl PlatformError {
    /// Creates an unavailable-sensor error.
    #[must_use]
    pub fn unavailable(kind: SensorKind, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            kind_name: kind.name(),
            reason: reason.into(),
        }
    }

    /// Creates a construction-failure error.
    #[must_use]
    pub fn construction(kind: SensorKind, reason: impl Into<String>) -> Self {
        Self::Construction {
            kind_name: kind.name(),
            reason: reason.into(),
        }
    }
}

/// A failed `listen` setup. No ensemble is built when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenError {
    /// The permission gate failed.
    #[error("permission query failed: {0}")]
    Permission(#[from] PermissionError),

    /// A capability object could not be constructed.
    #[error("sensor construction failed: {0}")]
    Platform(#[from] PlatformError),
}

/// Result type for ensemble setup.
pub type Result<T> = std::result::Result<T, ListenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_error_display() {
        let err = PermissionError::new(PermissionCategory::Gyroscope, "backend offline");
        assert_eq!(
            err.to_string(),
            "gyroscope permission query failed: backend offline"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::unavailable(SensorKind::AbsoluteOrientation, "no magnetometer");
        assert!(err.to_string().contains("AbsoluteOrientation"));
        assert!(err.to_string().contains("no magnetometer"));
    }

    #[test]
    fn listen_error_wraps_both_sources() {
        let err: ListenError =
            PermissionError::new(PermissionCategory::Accelerometer, "timed out").into();
        assert!(matches!(err, ListenError::Permission(_)));

        let err: ListenError =
            PlatformError::construction(SensorKind::Orientation, "feature disabled").into();
        assert!(err.to_string().contains("sensor construction failed"));
    }
}
