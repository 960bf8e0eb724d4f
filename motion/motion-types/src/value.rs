//! Sensor value records and precision normalization.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The latest record held in one sensor slot.
///
/// A slot starts [`Empty`](SensorValue::Empty) the moment its sensor is
/// selected, switches to [`Vector`](SensorValue::Vector) or
/// [`Rotation`](SensorValue::Rotation) on each successful reading, and to
/// [`Error`](SensorValue::Error) on a fault. A fault stays in the slot until
/// the next successful reading overwrites it. There is no history.
///
/// With the `serde` feature the enum serializes untagged, so the JSON forms
/// are `{}`, `{"x":..,"y":..,"z":..}`, `{"x":..,"y":..,"z":..,"w":..}` and
/// `{"error":".."}`.
///
/// # Example
///
/// ```
/// use motion_types::SensorValue;
///
/// let slot = SensorValue::Empty {};
/// assert!(slot.is_empty());
///
/// let slot = SensorValue::Error { error: "NotReadableError: no hardware".into() };
/// assert_eq!(slot.error_message(), Some("NotReadableError: no hardware"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
// Untagged deserialization tries variants in declaration order; keep the
// wider record shapes ahead of the narrower ones.
pub enum SensorValue {
    /// A rounded 4-component rotation.
    Rotation {
        /// First rotation component.
        x: f64,
        /// Second rotation component.
        y: f64,
        /// Third rotation component.
        z: f64,
        /// Fourth rotation component.
        w: f64,
    },
    /// A rounded 3-axis vector.
    Vector {
        /// X axis component.
        x: f64,
        /// Y axis component.
        y: f64,
        /// Z axis component.
        z: f64,
    },
    /// A sensor fault, formatted `"<name>: <message>"`.
    Error {
        /// The fault text.
        error: String,
    },
    /// Slot initialized, nothing sampled yet.
    Empty {},
}

impl SensorValue {
    /// Returns true if nothing has been sampled into this slot yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty {})
    }

    /// Returns true if the slot holds a fault record.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The axis components, if the slot holds a vector.
    #[must_use]
    pub const fn as_vector(&self) -> Option<[f64; 3]> {
        match self {
            Self::Vector { x, y, z } => Some([*x, *y, *z]),
            _ => None,
        }
    }

    /// The rotation components, if the slot holds a rotation.
    #[must_use]
    pub const fn as_rotation(&self) -> Option<[f64; 4]> {
        match self {
            Self::Rotation { x, y, z, w } => Some([*x, *y, *z, *w]),
            _ => None,
        }
    }

    /// The fault text, if the slot holds a fault record.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { error } => Some(error),
            _ => None,
        }
    }
}

impl Default for SensorValue {
    fn default() -> Self {
        Self::Empty {}
    }
}

/// Rounds `value` to `precision` decimal digits.
///
/// Uses round-half-away-from-zero, the standard decimal rounding rule.
/// `precision` is meaningful in `[0, 20]`; values outside that range produce
/// an implementation-defined result. The range is a caller constraint and is
/// never validated at runtime.
///
/// Rounding is idempotent: rounding an already-rounded value at the same
/// precision returns it unchanged.
///
/// # Example
///
/// ```
/// use motion_types::round_to;
///
/// assert_eq!(round_to(1.25, 1), 1.3);
/// assert_eq!(round_to(-1.25, 1), -1.3);
/// assert_eq!(round_to(9.807, 2), 9.81);
/// ```
#[must_use]
pub fn round_to(value: f64, precision: u8) -> f64 {
    let scale = 10f64.powi(i32::from(precision));
    (value * scale).round() / scale
}

/// Normalizes a 3-axis sample into a rounded [`SensorValue::Vector`].
#[must_use]
pub fn normalize_vector(axes: [f64; 3], precision: u8) -> SensorValue {
    let [x, y, z] = axes;
    SensorValue::Vector {
        x: round_to(x, precision),
        y: round_to(y, precision),
        z: round_to(z, precision),
    }
}

/// Normalizes a 4-element rotation sample into a rounded
/// [`SensorValue::Rotation`].
///
/// The sequence is read as `[x, y, z, w]`.
#[must_use]
pub fn normalize_rotation(rotation: [f64; 4], precision: u8) -> SensorValue {
    let [x, y, z, w] = rotation;
    SensorValue::Rotation {
        x: round_to(x, precision),
        y: round_to(y, precision),
        z: round_to(z, precision),
        w: round_to(w, precision),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_half_away_from_zero() {
        assert_relative_eq!(round_to(0.5, 0), 1.0);
        assert_relative_eq!(round_to(-0.5, 0), -1.0);
        assert_relative_eq!(round_to(2.5, 0), 3.0);
        assert_relative_eq!(round_to(-2.5, 0), -3.0);
        assert_relative_eq!(round_to(1.25, 1), 1.3);
    }

    #[test]
    fn round_is_idempotent() {
        for precision in 0..=6 {
            let once = round_to(123.456_789, precision);
            let twice = round_to(once, precision);
            assert_relative_eq!(once, twice);
        }
    }

    #[test]
    fn round_keeps_at_most_precision_digits() {
        for precision in 0..=6u8 {
            let rounded = round_to(0.123_456_789, precision);
            let scale = 10f64.powi(i32::from(precision));
            // Scaled back up, a correctly-rounded value is an integer.
            assert_relative_eq!(
                (rounded * scale).round(),
                rounded * scale,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn round_precision_zero_drops_the_fraction() {
        assert_relative_eq!(round_to(9.807, 0), 10.0);
        assert_relative_eq!(round_to(9.4, 0), 9.0);
    }

    #[test]
    fn normalize_vector_rounds_each_axis() {
        let value = normalize_vector([0.123, 9.807, -0.061], 1);
        assert_eq!(
            value,
            SensorValue::Vector {
                x: 0.1,
                y: 9.8,
                z: -0.1
            }
        );
    }

    #[test]
    fn normalize_rotation_names_the_sequence() {
        let value = normalize_rotation([0.7071, 0.0, 0.0, 0.7071], 2);
        assert_eq!(
            value,
            SensorValue::Rotation {
                x: 0.71,
                y: 0.0,
                z: 0.0,
                w: 0.71
            }
        );
    }

    #[test]
    fn accessors_match_variants() {
        assert!(SensorValue::Empty {}.is_empty());
        assert_eq!(
            normalize_vector([1.0, 2.0, 3.0], 2).as_vector(),
            Some([1.0, 2.0, 3.0])
        );
        assert_eq!(SensorValue::Empty {}.as_vector(), None);

        let fault = SensorValue::Error {
            error: "NotAllowedError: denied".to_string(),
        };
        assert!(fault.is_error());
        assert_eq!(fault.error_message(), Some("NotAllowedError: denied"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_shapes_are_untagged() {
        let empty = serde_json::to_string(&SensorValue::Empty {}).unwrap();
        assert_eq!(empty, "{}");

        let vector = serde_json::to_string(&SensorValue::Vector {
            x: 0.1,
            y: 9.8,
            z: -0.1,
        })
        .unwrap();
        assert_eq!(vector, r#"{"x":0.1,"y":9.8,"z":-0.1}"#);

        let fault = serde_json::to_string(&SensorValue::Error {
            error: "NotReadableError: no hardware".to_string(),
        })
        .unwrap();
        assert_eq!(fault, r#"{"error":"NotReadableError: no hardware"}"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trips_each_shape() {
        let values = [
            SensorValue::Empty {},
            SensorValue::Vector {
                x: 1.0,
                y: 2.0,
                z: 3.0,
            },
            SensorValue::Rotation {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                w: 1.0,
            },
            SensorValue::Error {
                error: "x: y".to_string(),
            },
        ];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: SensorValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }
    }
}
