//! Frame dump — a synthetic host platform driving the motion multiplexer.
//!
//! Builds an ensemble over three sensors, feeds each capability object a
//! deterministic waveform, and prints one line per delivered frame. The
//! loop runs exactly as a real host would: a tick only fires while the
//! ensemble has a frame request outstanding, so calling `stop` lets the
//! loop drain itself.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::f64::consts::TAU;
use std::rc::Rc;

use futures::executor::block_on;
use tracing_subscriber::EnvFilter;

use motion_mux::prelude::*;
use motion_mux::{PermissionError, PlatformError, RawSample};

const FRAME_MS: f64 = 1000.0 / 60.0;
const FRAMES: usize = 90;

type Feed = Rc<RefCell<VecDeque<SensorNotice>>>;

/// Host simulation shared between `main` and the ensemble.
#[derive(Clone, Default)]
struct SynthPlatform {
    inner: Rc<SynthInner>,
}

#[derive(Default)]
struct SynthInner {
    feeds: RefCell<Vec<(SensorKind, Feed)>>,
    frame_requests: Cell<usize>,
}

impl SynthPlatform {
    /// Queues one synthetic sample per connected sensor for `step`.
    fn advance(&self, step: usize) {
        #[allow(clippy::cast_precision_loss)]
        let phase = TAU * (step as f64) / (FRAMES as f64);
        for (kind, feed) in &*self.inner.feeds.borrow() {
            let sample = match kind.shape() {
                ValueShape::Vector => RawSample::Axes([
                    0.4 * phase.sin(),
                    0.4 * phase.cos(),
                    9.806_65 + 0.05 * (3.0 * phase).sin(),
                ]),
                ValueShape::Rotation => {
                    let half = phase / 2.0;
                    RawSample::Quaternion([0.0, 0.0, half.sin(), half.cos()])
                }
            };
            feed.borrow_mut().push_back(SensorNotice::Reading(sample));
        }
    }

    /// Consumes one outstanding frame request, if any.
    fn take_frame_request(&self) -> bool {
        let pending = self.inner.frame_requests.get();
        if pending == 0 {
            return false;
        }
        self.inner.frame_requests.set(pending - 1);
        true
    }
}

impl PermissionHost for SynthPlatform {
    async fn permission_state(
        &self,
        _category: PermissionCategory,
    ) -> Result<PermissionState, PermissionError> {
        Ok(PermissionState::Granted)
    }
}

impl Platform for SynthPlatform {
    type Sensor = SynthSensor;

    fn connect(&mut self, kind: SensorKind, _frequency: f64) -> Result<SynthSensor, PlatformError> {
        let feed = Feed::default();
        self.inner.feeds.borrow_mut().push((kind, feed.clone()));
        Ok(SynthSensor { feed })
    }

    fn request_frame(&mut self) {
        self.inner
            .frame_requests
            .set(self.inner.frame_requests.get() + 1);
    }
}

struct SynthSensor {
    feed: Feed,
}

impl MotionSensor for SynthSensor {
    fn start(&mut self) {}

    fn stop(&mut self) {}

    fn take_notices(&mut self) -> Vec<SensorNotice> {
        self.feed.borrow_mut().drain(..).collect()
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let platform = SynthPlatform::default();
    let mask =
        SensorKind::Orientation | SensorKind::LinearAcceleration | SensorKind::RelativeOrientation;

    let callback = |frame: &FrameTable| {
        let mut slots: Vec<(u32, &SensorValue)> = frame.iter().collect();
        slots.sort_unstable_by_key(|(bit, _)| *bit);
        let rendered: Vec<String> = slots
            .iter()
            .map(|(bit, value)| {
                let json = serde_json::to_string(value).unwrap_or_else(|_| "null".to_string());
                format!("{bit}={json}")
            })
            .collect();
        println!("t={:8.2}  {}", frame.time(), rendered.join("  "));
    };

    let mut ensemble = block_on(listen(
        platform.clone(),
        mask,
        callback,
        ListenOptions {
            precision: 3,
            ..ListenOptions::default()
        },
    ))?;

    ensemble.start();

    let mut step = 0;
    while platform.take_frame_request() {
        step += 1;
        platform.advance(step);
        #[allow(clippy::cast_precision_loss)]
        ensemble.tick(step as f64 * FRAME_MS);
        if step == FRAMES {
            // No further frame is requested once the flag drops; the loop
            // drains on its own.
            ensemble.stop();
        }
    }

    println!("delivered {} frames", step + 1);
    Ok(())
}
