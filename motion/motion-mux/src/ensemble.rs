//! The reader ensemble and its frame loop.

use std::collections::HashMap;

use motion_types::{FrameTable, SelectionMask};
use tracing::{debug, trace};

use crate::error::Result;
use crate::host::Platform;
use crate::options::ListenOptions;
use crate::permission::check_permissions;
use crate::reader::Reader;

/// The user callback, invoked once per frame with the current table.
///
/// The table is passed by reference; a record written after the callback
/// returns shows up on the next tick, not the current one.
pub type FrameCallback = Box<dyn FnMut(&FrameTable)>;

/// Builds an inert ensemble for the sensors selected by `mask`.
///
/// Setup runs in two steps. First the permission gate queries consent for
/// every physical category concurrently and waits for all of them — this
/// happens unconditionally, before any sensor exists, whatever the mask
/// selects. Then, for each selected catalog bit in catalog order, the frame
/// table slot is initialized to an empty record and one capability object is
/// constructed at the requested frequency. Bits outside the catalog select
/// nothing and are silently ignored.
///
/// The returned ensemble is not sampling; call [`Ensemble::start`].
///
/// # Errors
///
/// - [`ListenError::Permission`](crate::ListenError::Permission) if any
///   consent query is rejected by the host.
/// - [`ListenError::Platform`](crate::ListenError::Platform) if a selected
///   capability object cannot be constructed.
///
/// In both cases no ensemble is built. A *denied* consent state is not an
/// error; denial surfaces later as a per-sensor fault record.
pub async fn listen<P, F>(
    mut platform: P,
    mask: SelectionMask,
    callback: F,
    options: ListenOptions,
) -> Result<Ensemble<P>>
where
    P: Platform,
    F: FnMut(&FrameTable) + 'static,
{
    let report = check_permissions(&platform).await?;
    debug!(?report, "sensor consent queried");

    let mut frame = FrameTable::new();
    let mut readers = HashMap::new();
    for kind in mask.kinds() {
        let bit = kind.bit();
        // The slot exists before the sensor does, so consumers never see a
        // missing key.
        frame.insert_empty(bit);
        let sensor = platform.connect(kind, options.frequency)?;
        readers.insert(bit, Reader::new(kind, sensor));
        debug!(sensor = kind.name(), bit, "reader attached");
    }

    Ok(Ensemble {
        platform,
        readers,
        frame,
        callback: Box::new(callback),
        options,
        running: false,
    })
}

/// A built ensemble: the readers, their shared frame table, and the frame
/// loop's lifecycle.
///
/// Readers are created once, when the ensemble is built, and destroyed only
/// with it. [`stop`](Ensemble::stop) pauses sampling and ticking without
/// touching the readers or the table, so a later [`start`](Ensemble::start)
/// resumes with stale values still in place until fresh readings overwrite
/// them.
pub struct Ensemble<P: Platform> {
    platform: P,
    readers: HashMap<u32, Reader<P::Sensor>>,
    frame: FrameTable,
    callback: FrameCallback,
    options: ListenOptions,
    running: bool,
}

impl<P: Platform> std::fmt::Debug for Ensemble<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ensemble")
            .field("readers", &self.readers.len())
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

impl<P: Platform> Ensemble<P> {
    /// Starts sampling and ticking.
    ///
    /// Sets the running flag, invokes every reader's start independently,
    /// then performs one immediate tick with elapsed time zero (which also
    /// arms the next host frame). Calling it again just re-invokes the
    /// reader starts and re-arms the loop.
    pub fn start(&mut self) {
        self.running = true;
        for reader in self.readers.values_mut() {
            reader.start();
        }
        debug!(sensors = self.readers.len(), "ensemble started");
        self.tick(0.0);
    }

    /// Stops sampling and ticking.
    ///
    /// Clears the running flag (so no further frame is requested) and
    /// invokes every reader's stop. Captured values stay in the table. A
    /// second call, or a call before any start, is a harmless no-op.
    pub fn stop(&mut self) {
        self.running = false;
        for reader in self.readers.values_mut() {
            reader.stop();
        }
        debug!("ensemble stopped");
    }

    /// One frame of the loop; the host invokes this when a requested frame
    /// fires, passing the frame's elapsed time in milliseconds.
    ///
    /// While running, the first thing a tick does is request the next frame,
    /// so the loop re-arms itself and dies on its own once
    /// [`stop`](Ensemble::stop) clears the flag — a tick already in flight
    /// still runs to completion, it just schedules nothing further. The tick
    /// then absorbs pending sensor notices, stamps the table's time field,
    /// and hands the table to the user callback.
    pub fn tick(&mut self, elapsed_ms: f64) {
        if self.running {
            self.platform.request_frame();
        }
        self.pump();
        self.frame.set_time(elapsed_ms);
        trace!(time = elapsed_ms, "frame tick");
        (self.callback)(&self.frame);
    }

    /// Absorbs every reader's pending notices into the frame table.
    ///
    /// Runs at the top of each tick; hosts that deliver sensor notices
    /// eagerly may also call it directly between ticks. Slots without fresh
    /// notices keep their current record.
    pub fn pump(&mut self) {
        for (bit, reader) in &mut self.readers {
            if let Some(value) = reader.absorb(self.options.precision) {
                self.frame.set(*bit, value);
            }
        }
    }

    /// Whether the frame loop is currently running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// The readers, keyed by selector bit.
    #[must_use]
    pub const fn readers(&self) -> &HashMap<u32, Reader<P::Sensor>> {
        &self.readers
    }

    /// Mutable access to one reader, for per-sensor control.
    pub fn reader_mut(&mut self, bit: u32) -> Option<&mut Reader<P::Sensor>> {
        self.readers.get_mut(&bit)
    }

    /// The current frame table.
    #[must_use]
    pub const fn frame(&self) -> &FrameTable {
        &self.frame
    }

    /// The options this ensemble was built with.
    #[must_use]
    pub const fn options(&self) -> ListenOptions {
        self.options
    }

    /// The host platform seam.
    #[must_use]
    pub const fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutable access to the host platform seam.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}
