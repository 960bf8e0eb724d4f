//! Hardware-agnostic motion sensor value types for motionmux.
//!
//! This crate provides the foundational types for the sensor multiplexer:
//!
//! - [`SensorKind`] - Catalog of supported motion/orientation sensors, each
//!   bound to a unique power-of-two selector bit
//! - [`SelectionMask`] - Integer flag set choosing which sensors to activate
//! - [`SensorValue`] - The latest record for one sensor slot (empty, vector,
//!   rotation, or fault)
//! - [`FrameTable`] - The aggregate of per-sensor records plus elapsed time,
//!   delivered to the caller once per frame
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero host dependencies**. It knows nothing
//! about permission subsystems, frame schedulers, or capability objects; those
//! seams live in `motion-mux`.
//!
//! # Selector Bits
//!
//! Every catalog entry is assigned the bit `2^index` of its catalog position,
//! so the full bit set is `{1, 2, 4, 8, 16}` with no gaps or reuse. Masks are
//! built by OR-ing bits and unknown bits simply select nothing.
//!
//! # Precision
//!
//! Value normalization rounds each component to a fixed number of decimal
//! digits using round-half-away-from-zero. Precision is meaningful in
//! `[0, 20]`; outside that range the rounding result is implementation
//! defined.
//!
//! # Example
//!
//! ```
//! use motion_types::{SelectionMask, SensorKind, SensorValue, normalize_vector};
//!
//! let mask = SensorKind::Orientation | SensorKind::LinearAcceleration;
//! assert_eq!(mask.bits(), 0b101);
//!
//! let value = normalize_vector([0.123, 9.807, -0.061], 1);
//! assert_eq!(
//!     value,
//!     SensorValue::Vector { x: 0.1, y: 9.8, z: -0.1 },
//! );
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod kind;
mod select;
mod table;
mod value;

pub use error::TypeError;
pub use kind::{SensorKind, ValueShape};
pub use select::SelectionMask;
pub use table::FrameTable;
pub use value::{SensorValue, normalize_rotation, normalize_vector, round_to};
