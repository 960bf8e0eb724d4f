//! Configuration for a `listen` invocation.

use serde::{Deserialize, Serialize};

/// Options resolved once per `listen` call.
///
/// Callers override individual fields with struct-update syntax; anything
/// left unspecified inherits the documented default. When deserialized from
/// configuration, missing fields fill in the same way.
///
/// # Example
///
/// ```
/// use motion_mux::ListenOptions;
///
/// let options = ListenOptions::default();
/// assert_eq!(options.precision, 2);
/// assert!((options.frequency - 60.0).abs() < f64::EPSILON);
///
/// let coarse = ListenOptions { precision: 0, ..ListenOptions::default() };
/// assert!((coarse.frequency - 60.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenOptions {
    /// Decimal digits kept on every value component.
    ///
    /// Meaningful in `[0, 20]`; values outside that range produce
    /// implementation-defined rounding and are never validated at runtime.
    pub precision: u8,

    /// Sampling frequency requested from each sensor, in Hz. Must be
    /// positive. The host treats it as an upper bound, not a guarantee.
    pub frequency: f64,
}

impl ListenOptions {
    /// Default decimal digits.
    pub const DEFAULT_PRECISION: u8 = 2;

    /// Default sampling frequency in Hz.
    pub const DEFAULT_FREQUENCY: f64 = 60.0;

    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            frequency: Self::DEFAULT_FREQUENCY,
        }
    }
}

impl Default for ListenOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_two_digits_at_sixty_hertz() {
        let options = ListenOptions::default();
        assert_eq!(options.precision, 2);
        assert_eq!(options.frequency, 60.0);
    }

    #[test]
    fn struct_update_overrides_one_field() {
        let options = ListenOptions {
            precision: 1,
            ..ListenOptions::default()
        };
        assert_eq!(options.precision, 1);
        assert_eq!(options.frequency, 60.0);
    }

    #[test]
    fn missing_config_fields_inherit_defaults() {
        let options: ListenOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ListenOptions::default());

        let options: ListenOptions = serde_json::from_str(r#"{"frequency":30.0}"#).unwrap();
        assert_eq!(options.precision, 2);
        assert_eq!(options.frequency, 30.0);
    }
}
