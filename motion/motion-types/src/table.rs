//! The frame table: latest per-sensor records plus elapsed time.

use std::collections::HashMap;

use crate::value::SensorValue;

/// The shared aggregate of the latest record per selected sensor.
///
/// Keyed by selector bit, with a reserved `time` field holding the last
/// frame's elapsed time in milliseconds. The table is mutated in place as
/// notices arrive and read in place once per frame; each key holds only the
/// most recent observation (last writer wins, no history).
///
/// Every selected sensor's slot exists from the moment the ensemble is
/// built — consumers never observe a missing key, only an
/// [`SensorValue::Empty`] one.
///
/// # Example
///
/// ```
/// use motion_types::{FrameTable, SensorKind, SensorValue};
///
/// let mut table = FrameTable::new();
/// table.insert_empty(SensorKind::Orientation.bit());
///
/// assert_eq!(
///     table.get(SensorKind::Orientation.bit()),
///     Some(&SensorValue::Empty {}),
/// );
/// assert_eq!(table.time(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameTable {
    values: HashMap<u32, SensorValue>,
    time: f64,
}

impl FrameTable {
    /// Creates an empty table with time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes the slot for `bit` to [`SensorValue::Empty`].
    ///
    /// Overwrites whatever the slot held before.
    pub fn insert_empty(&mut self, bit: u32) {
        self.values.insert(bit, SensorValue::Empty {});
    }

    /// Overwrites the slot for `bit` with `value`.
    pub fn set(&mut self, bit: u32, value: SensorValue) {
        self.values.insert(bit, value);
    }

    /// The current record for `bit`, if that slot exists.
    #[must_use]
    pub fn get(&self, bit: u32) -> Option<&SensorValue> {
        self.values.get(&bit)
    }

    /// The last frame's elapsed time in milliseconds.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Stamps the elapsed time for the current frame.
    pub fn set_time(&mut self, elapsed_ms: f64) {
        self.time = elapsed_ms;
    }

    /// Iterates the slot bits, in no particular order.
    pub fn bits(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.keys().copied()
    }

    /// Iterates `(bit, record)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &SensorValue)> {
        self.values.iter().map(|(bit, value)| (*bit, value))
    }

    /// Number of sensor slots (the `time` field is not a slot).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the table has no sensor slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::SensorKind;
    use crate::value::normalize_vector;

    #[test]
    fn new_table_is_empty_at_time_zero() {
        let table = FrameTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!((table.time() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn insert_empty_creates_the_slot() {
        let mut table = FrameTable::new();
        let bit = SensorKind::LinearAcceleration.bit();
        table.insert_empty(bit);

        assert_eq!(table.get(bit), Some(&SensorValue::Empty {}));
        assert_eq!(table.get(SensorKind::Orientation.bit()), None);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut table = FrameTable::new();
        let bit = SensorKind::Orientation.bit();
        table.insert_empty(bit);

        table.set(bit, normalize_vector([0.12, 9.81, 0.0], 1));
        assert_eq!(
            table.get(bit).and_then(SensorValue::as_vector),
            Some([0.1, 9.8, 0.0])
        );

        table.set(
            bit,
            SensorValue::Error {
                error: "NotReadableError: gone".to_string(),
            },
        );
        assert!(table.get(bit).is_some_and(SensorValue::is_error));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn time_is_stamped_in_place() {
        let mut table = FrameTable::new();
        table.set_time(16.7);
        assert!((table.time() - 16.7).abs() < f64::EPSILON);
    }

    #[test]
    fn iter_yields_every_slot() {
        let mut table = FrameTable::new();
        table.insert_empty(SensorKind::Orientation.bit());
        table.insert_empty(SensorKind::AbsoluteOrientation.bit());

        let mut bits: Vec<u32> = table.bits().collect();
        bits.sort_unstable();
        assert_eq!(bits, vec![1, 16]);
        assert_eq!(table.iter().count(), 2);
    }
}
