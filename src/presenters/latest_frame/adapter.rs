use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Capacity-one, latest-wins mailbox between the render worker and a consumer.
///
/// A frame that has not been taken yet is replaced by the next one, so a slow
/// consumer only ever sees the freshest pass.
#[derive(Debug, Default)]
pub struct LatestFrameAdapter {
    frame: Mutex<Option<FrameData>>,
    ready: Condvar,
}

impl InteractiveControllerPresenterPort for LatestFrameAdapter {
    fn present(&self, frame: FrameData) {
        *self.frame.lock() = Some(frame);
        self.ready.notify_all();
    }
}

impl LatestFrameAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the pending frame without blocking.
    pub fn take(&self) -> Option<FrameData> {
        self.frame.lock().take()
    }

    /// Waits up to `timeout` for a frame and takes it.
    pub fn wait_for_frame(&self, timeout: Duration) -> Option<FrameData> {
        let deadline = Instant::now() + timeout;
        let mut frame = self.frame.lock();

        while frame.is_none() {
            if self.ready.wait_until(&mut frame, deadline).timed_out() {
                break;
            }
        }

        frame.take()
    }
}
