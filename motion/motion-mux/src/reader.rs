//! Per-sensor readers: one capability object and its notice intake.

use motion_types::{SensorKind, SensorValue, ValueShape, normalize_rotation, normalize_vector};
use tracing::warn;

use crate::host::{MotionSensor, RawSample, SensorNotice};

/// One selected sensor: its kind tag and the capability object behind it.
///
/// A reader is created when the ensemble is built and lives until the
/// ensemble is dropped; stopping the ensemble only pauses sampling. The kind
/// tag selects the normalizer shape, so there is no per-sensor subtype
/// hierarchy — every reader is this one struct.
#[derive(Debug)]
pub struct Reader<S> {
    kind: SensorKind,
    sensor: S,
}

impl<S: MotionSensor> Reader<S> {
    pub(crate) fn new(kind: SensorKind, sensor: S) -> Self {
        Self { kind, sensor }
    }

    /// The sensor kind this reader captures.
    #[must_use]
    pub const fn kind(&self) -> SensorKind {
        self.kind
    }

    /// The underlying capability object.
    #[must_use]
    pub const fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Mutable access to the underlying capability object, for per-sensor
    /// control beyond start/stop.
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Begin sampling on this reader alone.
    pub fn start(&mut self) {
        self.sensor.start();
    }

    /// Halt sampling on this reader alone.
    pub fn stop(&mut self) {
        self.sensor.stop();
    }

    /// Drains pending notices and folds them into a slot value.
    ///
    /// Notices apply oldest-first, so the returned record is whatever the
    /// newest notice left behind. Returns `None` when nothing was delivered,
    /// leaving the slot untouched.
    pub(crate) fn absorb(&mut self, precision: u8) -> Option<SensorValue> {
        let mut latest = None;
        for notice in self.sensor.take_notices() {
            latest = Some(self.apply(notice, precision));
        }
        latest
    }

    fn apply(&self, notice: SensorNotice, precision: u8) -> SensorValue {
        match notice {
            SensorNotice::Reading(sample) => self.normalize(sample, precision),
            SensorNotice::Fault { name, message } => {
                warn!(sensor = self.kind.name(), %name, %message, "sensor fault");
                SensorValue::Error {
                    error: format!("{name}: {message}"),
                }
            }
        }
    }

    fn normalize(&self, sample: RawSample, precision: u8) -> SensorValue {
        match (self.kind.shape(), sample) {
            (ValueShape::Vector, RawSample::Axes(axes)) => normalize_vector(axes, precision),
            (ValueShape::Rotation, RawSample::Quaternion(rotation)) => {
                normalize_rotation(rotation, precision)
            }
            // A sample whose shape contradicts the kind's fixed binding is a
            // host defect; record it like any other fault.
            (_, sample) => {
                warn!(sensor = self.kind.name(), ?sample, "sample shape mismatch");
                SensorValue::Error {
                    error: format!("{}: unexpected sample shape", self.kind.name()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct QueueSensor {
        queue: VecDeque<SensorNotice>,
        running: bool,
    }

    impl QueueSensor {
        fn with(notices: Vec<SensorNotice>) -> Self {
            Self {
                queue: notices.into(),
                running: false,
            }
        }
    }

    impl MotionSensor for QueueSensor {
        fn start(&mut self) {
            self.running = true;
        }

        fn stop(&mut self) {
            self.running = false;
        }

        fn take_notices(&mut self) -> Vec<SensorNotice> {
            self.queue.drain(..).collect()
        }
    }

    #[test]
    fn absorb_without_notices_leaves_the_slot_alone() {
        let mut reader = Reader::new(SensorKind::Orientation, QueueSensor::with(vec![]));
        assert_eq!(reader.absorb(2), None);
    }

    #[test]
    fn absorb_normalizes_a_vector_reading() {
        let mut reader = Reader::new(
            SensorKind::Orientation,
            QueueSensor::with(vec![SensorNotice::Reading(RawSample::Axes([
                0.123, 9.807, -0.061,
            ]))]),
        );

        assert_eq!(
            reader.absorb(1),
            Some(SensorValue::Vector {
                x: 0.1,
                y: 9.8,
                z: -0.1
            })
        );
    }

    #[test]
    fn absorb_normalizes_a_rotation_reading() {
        let mut reader = Reader::new(
            SensorKind::RelativeOrientation,
            QueueSensor::with(vec![SensorNotice::Reading(RawSample::Quaternion([
                0.7071, 0.0, 0.0, 0.7071,
            ]))]),
        );

        assert_eq!(
            reader.absorb(2),
            Some(SensorValue::Rotation {
                x: 0.71,
                y: 0.0,
                z: 0.0,
                w: 0.71
            })
        );
    }

    #[test]
    fn absorb_formats_faults_as_name_colon_message() {
        let mut reader = Reader::new(
            SensorKind::LinearAcceleration,
            QueueSensor::with(vec![SensorNotice::fault("NotReadableError", "no hardware")]),
        );

        assert_eq!(
            reader.absorb(2),
            Some(SensorValue::Error {
                error: "NotReadableError: no hardware".to_string()
            })
        );
    }

    #[test]
    fn absorb_folds_to_the_newest_notice() {
        let mut reader = Reader::new(
            SensorKind::Orientation,
            QueueSensor::with(vec![
                SensorNotice::Reading(RawSample::Axes([1.0, 1.0, 1.0])),
                SensorNotice::fault("NotReadableError", "glitch"),
                SensorNotice::Reading(RawSample::Axes([2.0, 2.0, 2.0])),
            ]),
        );

        assert_eq!(
            reader.absorb(0),
            Some(SensorValue::Vector {
                x: 2.0,
                y: 2.0,
                z: 2.0
            })
        );
    }

    #[test]
    fn shape_mismatch_becomes_a_fault_record() {
        let mut reader = Reader::new(
            SensorKind::Orientation,
            QueueSensor::with(vec![SensorNotice::Reading(RawSample::Quaternion([
                0.0, 0.0, 0.0, 1.0,
            ]))]),
        );

        let value = reader.absorb(2).unwrap();
        assert_eq!(
            value.error_message(),
            Some("Orientation: unexpected sample shape")
        );
    }

    #[test]
    fn start_and_stop_reach_the_sensor() {
        let mut reader = Reader::new(SensorKind::Orientation, QueueSensor::with(vec![]));
        reader.start();
        assert!(reader.sensor().running);
        reader.stop();
        assert!(!reader.sensor().running);
    }
}
