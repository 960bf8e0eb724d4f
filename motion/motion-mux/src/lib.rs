//! Frame-synchronized multiplexing of host motion sensors.
//!
//! This crate merges several host-provided motion/orientation sensors into
//! one unified data stream: the caller picks sensors with a
//! [`SelectionMask`], [`listen`] queries consent and builds an inert
//! [`Ensemble`], and once started the ensemble delivers one [`FrameTable`]
//! snapshot to the user callback per host display frame.
//!
//! It is an aggregation layer, not a sensor driver. The host platform is a
//! trait seam ([`Platform`]): capability objects sample and calibrate on
//! their own, the consent subsystem answers [`check_permissions`], and the
//! host's frame scheduler drives [`Ensemble::tick`].
//!
//! # Control Flow
//!
//! 1. caller picks a mask,
//! 2. [`listen`] resolves the permission gate, then builds one reader per
//!    selected bit (slots initialized, sensors not yet sampling),
//! 3. [`Ensemble::start`] begins sampling and ticking,
//! 4. [`Ensemble::stop`] halts both without destroying the readers; a later
//!    `start` resumes with the same readers and table.
//!
//! # Concurrency
//!
//! Single-threaded cooperative scheduling throughout. Sensor notices and
//! frame ticks interleave on the host's event queue, so the frame table
//! needs no locking; the permission gate's three queries are the only
//! concurrent futures, and `listen` suspends until all three resolve.
//!
//! # Example
//!
//! ```
//! use motion_mux::{ListenOptions, SensorKind};
//!
//! // Pick sensors by OR-ing catalog bits.
//! let mask = SensorKind::Orientation | SensorKind::LinearAcceleration;
//! assert_eq!(mask.bits(), 0b101);
//!
//! // Defaults: two decimal digits, 60 Hz.
//! let options = ListenOptions::default();
//! assert_eq!(options.precision, 2);
//!
//! // Callers override fields individually.
//! let options = ListenOptions { precision: 1, ..ListenOptions::default() };
//! assert!((options.frequency - 60.0).abs() < f64::EPSILON);
//! ```
//!
//! Driving the full pipeline requires a [`Platform`] implementation; see the
//! integration tests for a scripted host.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod ensemble;
mod error;
mod host;
mod options;
mod permission;
mod reader;

// Re-export ensemble types
pub use ensemble::{Ensemble, FrameCallback, listen};

// Re-export host seam types
pub use host::{MotionSensor, PermissionHost, Platform, RawSample, SensorNotice};

// Re-export permission gate types
pub use permission::{PermissionCategory, PermissionReport, PermissionState, check_permissions};

// Re-export configuration and readers
pub use options::ListenOptions;
pub use reader::Reader;

// Re-export error types
pub use error::{ListenError, PermissionError, PlatformError, Result};

// Re-export the Layer 0 types callers need at the surface
pub use motion_types::{FrameTable, SelectionMask, SensorKind, SensorValue, ValueShape};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        Ensemble, FrameTable, ListenError, ListenOptions, MotionSensor, PermissionCategory,
        PermissionHost, PermissionReport, PermissionState, Platform, RawSample, Reader,
        SelectionMask, SensorKind, SensorNotice, SensorValue, ValueShape, check_permissions,
        listen,
    };
}
