use crate::buffer::StreamKind;
use crate::error::Result;

/// Pointer-style input driving the panorama camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeMode {
    Touch,
    DeviceMotion,
}

/// Projection used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    FullMotion,
    VirtualReality,
}

/// Complete renderer configuration issued on every mode change.
///
/// The renderer receives one typed call instead of individual flag writes,
/// so it can never observe a half-updated mode pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig {
    pub swipe: SwipeMode,
    pub view: ViewMode,
}

/// Transport controls and observable state of the hardware media element.
///
/// Position and volume are mutated only through the player; UI code reads
/// derived render models and never writes back.
pub trait MediaElement {
    fn play(&mut self);
    fn pause(&mut self);

    /// (Re)loads the currently attached source.
    fn load(&mut self);

    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);

    /// Total duration in seconds, when the element knows it yet.
    fn duration(&self) -> Option<f64>;

    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);

    fn set_looping(&mut self, looping: bool);
    fn set_autoplay(&mut self, autoplay: bool);

    /// End of the furthest buffered range in seconds, when any range exists.
    fn buffered_end(&self) -> Option<f64>;
}

/// Lifecycle of the 3D panorama renderer.
///
/// The renderer never changes playback intent on its own; it is driven in
/// lockstep with the player's transitions.
pub trait Renderer {
    /// Starts (or resumes) the animation loop.
    fn start(&mut self);

    /// Pauses the animation loop, keeping the scene.
    fn pause(&mut self);

    /// Fully resets the scene and stops the loop.
    fn stop(&mut self);

    /// Hook invoked when the media element signals readiness.
    fn load_video(&mut self);

    fn configure(&mut self, config: RendererConfig);

    fn device_motion_available(&self) -> bool;
}

/// Demux/transmux producer consumed as a black box.
///
/// Driving `transmux` to completion emits a finite sequence of
/// `(kind, payload)` pairs in production order, then returns `Ok`. An error
/// return means the producer failed mid-stream; pairs emitted before the
/// failure are still valid.
pub trait Transmuxer {
    fn transmux(
        &mut self,
        bytes: &[u8],
        emit: &mut dyn FnMut(StreamKind, Vec<u8>),
    ) -> Result<()>;
}

/// Append target for one elementary stream.
///
/// An append is asynchronous: the host delivers the completion signal later
/// through the owning appender. A sink never receives a second append before
/// that signal.
pub trait AppendSink {
    fn append(&mut self, payload: &[u8]);
}
