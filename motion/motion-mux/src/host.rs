//! Traits at the host platform boundary.
//!
//! The multiplexer never talks to hardware. Everything platform-specific —
//! capability objects, the consent subsystem, the display-frame scheduler —
//! enters through the traits in this module.

use motion_types::SensorKind;

use crate::error::{PermissionError, PlatformError};
use crate::permission::{PermissionCategory, PermissionState};

/// A raw sample as a capability object reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawSample {
    /// Three axis components: `x`, `y`, `z`.
    Axes([f64; 3]),
    /// Rotation components in sequence order: `x`, `y`, `z`, `w`.
    Quaternion([f64; 4]),
}

/// One notification delivered by a capability object.
///
/// Notices queue on the host's event cadence (nominally bounded by the
/// requested frequency) and are drained oldest-first by the ensemble.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorNotice {
    /// A new sample is available.
    Reading(RawSample),
    /// The sensor reported a fault (hardware unavailable, consent revoked at
    /// read time, transient failure).
    Fault {
        /// Short fault name, e.g. `NotReadableError`.
        name: String,
        /// Human-readable description.
        message: String,
    },
}

impl SensorNotice {
    /// Creates a fault notice.
    #[must_use]
    pub fn fault(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fault {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// One host-provided sensor: an opaque capability object.
///
/// Sampling, calibration, and coordinate conventions are the object's own
/// business; the multiplexer only starts it, stops it, and drains what it
/// delivered.
pub trait MotionSensor {
    /// Begin sampling.
    ///
    /// Infallible at this seam: a sensor that cannot start reports a
    /// [`SensorNotice::Fault`] instead, so one failing sensor never blocks
    /// the rest of the ensemble.
    fn start(&mut self);

    /// Halt sampling. A notice already queued may still be delivered.
    fn stop(&mut self);

    /// Takes the notices delivered since the last call, oldest first.
    fn take_notices(&mut self) -> Vec<SensorNotice>;
}

/// Host consent lookup for the physical sensor categories.
// Futures from this trait are polled on the caller's thread; implementors
// never need Send.
#[allow(async_fn_in_trait)]
pub trait PermissionHost {
    /// Resolves the consent state for one category.
    ///
    /// # Errors
    ///
    /// Returns [`PermissionError`] if the host cannot answer the query. The
    /// error rejects the whole `listen` call; a `Denied` *state* is an
    /// answer, not an error.
    async fn permission_state(
        &self,
        category: PermissionCategory,
    ) -> std::result::Result<PermissionState, PermissionError>;
}

/// The full host seam: consent, sensor construction, frame scheduling.
pub trait Platform: PermissionHost {
    /// Concrete capability object type.
    type Sensor: MotionSensor;

    /// Constructs the capability object for `kind`, configured to sample at
    /// `frequency` Hz.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when the object cannot be constructed at
    /// all; this rejects the whole `listen` call. Runtime trouble after
    /// construction belongs in [`SensorNotice::Fault`].
    fn connect(
        &mut self,
        kind: SensorKind,
        frequency: f64,
    ) -> std::result::Result<Self::Sensor, PlatformError>;

    /// Asks the host to invoke [`Ensemble::tick`](crate::Ensemble::tick)
    /// once, on the next display frame, with the frame's elapsed time in
    /// milliseconds.
    ///
    /// The ensemble re-arms itself from inside the tick while running, so a
    /// host only ever has one pending frame request per ensemble.
    fn request_frame(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_helper_fills_both_fields() {
        let notice = SensorNotice::fault("NotReadableError", "no hardware");
        assert_eq!(
            notice,
            SensorNotice::Fault {
                name: "NotReadableError".to_string(),
                message: "no hardware".to_string(),
            }
        );
    }
}
