use crate::controllers::interactive::data::frame_data::FrameData;

/// Receives every completed, non-superseded pass.
///
/// Called on the render worker's thread; implementations that feed a UI are
/// responsible for moving the frame to their own thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, frame: FrameData);
}

impl<F> InteractiveControllerPresenterPort for F
where
    F: Fn(FrameData) + Send + Sync,
{
    fn present(&self, frame: FrameData) {
        self(frame)
    }
}
