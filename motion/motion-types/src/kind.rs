//! The sensor catalog: supported kinds and their selector bits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A supported motion/orientation sensor kind.
///
/// The discriminant fixes the kind's position in [`SensorKind::CATALOG`], and
/// the selector bit is derived from it as `2^position`. The catalog is
/// process-wide, read-only state; it never changes after compile time.
///
/// # Example
///
/// ```
/// use motion_types::SensorKind;
///
/// assert_eq!(SensorKind::Orientation.bit(), 1);
/// assert_eq!(SensorKind::LinearAcceleration.bit(), 4);
/// assert_eq!(SensorKind::from_bit(4), Some(SensorKind::LinearAcceleration));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum SensorKind {
    /// Gravity and its direction applied to the device (3-axis).
    Orientation = 0,
    /// Change in rotation momentum of the device (3-axis).
    RadialAcceleration = 1,
    /// Change in linear momentum of the device (3-axis).
    LinearAcceleration = 2,
    /// Orientation change relative to where sampling began (quaternion).
    RelativeOrientation = 3,
    /// Orientation change relative to the Earth reference (quaternion).
    AbsoluteOrientation = 4,
    // Compass (magnetometer-backed heading) is intentionally disabled;
    // re-enabling it appends a sixth entry here and claims bit 32.
}

impl SensorKind {
    /// All supported kinds, in bit-assignment order.
    pub const CATALOG: [Self; 5] = [
        Self::Orientation,
        Self::RadialAcceleration,
        Self::LinearAcceleration,
        Self::RelativeOrientation,
        Self::AbsoluteOrientation,
    ];

    /// Returns the kind's logical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Orientation => "Orientation",
            Self::RadialAcceleration => "RadialAcceleration",
            Self::LinearAcceleration => "LinearAcceleration",
            Self::RelativeOrientation => "RelativeOrientation",
            Self::AbsoluteOrientation => "AbsoluteOrientation",
        }
    }

    /// Returns the kind's selector bit (`2^catalog_position`).
    #[must_use]
    pub const fn bit(self) -> u32 {
        1 << self as u32
    }

    /// Returns the value shape this kind normalizes to.
    ///
    /// The binding is fixed by sensor type and is not configurable.
    #[must_use]
    pub const fn shape(self) -> ValueShape {
        match self {
            Self::Orientation | Self::RadialAcceleration | Self::LinearAcceleration => {
                ValueShape::Vector
            }
            Self::RelativeOrientation | Self::AbsoluteOrientation => ValueShape::Rotation,
        }
    }

    /// Resolves a kind from its selector bit.
    ///
    /// Returns `None` for bits outside the catalog (including zero and
    /// multi-bit values).
    #[must_use]
    pub fn from_bit(bit: u32) -> Option<Self> {
        Self::CATALOG.iter().copied().find(|kind| kind.bit() == bit)
    }

    /// Resolves a kind from its logical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::CATALOG.iter().copied().find(|kind| kind.name() == name)
    }

    /// Fallible form of [`SensorKind::from_bit`].
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::UnknownBit`] if `bit` is not a catalog bit.
    pub fn try_from_bit(bit: u32) -> Result<Self, TypeError> {
        Self::from_bit(bit).ok_or(TypeError::UnknownBit { bit })
    }

    /// Fallible form of [`SensorKind::from_name`].
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::UnknownName`] if `name` is not a catalog name.
    pub fn try_from_name(name: &str) -> Result<Self, TypeError> {
        Self::from_name(name).ok_or_else(|| TypeError::unknown_name(name))
    }
}

/// Normalized value shape a sensor kind is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueShape {
    /// Three axis components named `x`, `y`, `z`.
    Vector,
    /// Four rotation components named `x`, `y`, `z`, `w`.
    Rotation,
}
