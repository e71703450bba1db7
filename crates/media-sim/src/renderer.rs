use std::sync::{Arc, Mutex};

use player::{Renderer, RendererConfig};

/// Lifecycle call recorded by [`SimRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererCall {
    Start,
    Pause,
    Stop,
    LoadVideo,
}

#[derive(Debug, Default)]
struct RendererState {
    calls: Vec<RendererCall>,
    configs: Vec<RendererConfig>,
    device_motion: bool,
}

/// Renderer that records its lifecycle instead of drawing.
///
/// Clones share one underlying state, mirroring [`super::SimMediaElement`].
#[derive(Debug, Clone, Default)]
pub struct SimRenderer {
    state: Arc<Mutex<RendererState>>,
}

impl SimRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device_motion() -> Self {
        let renderer = Self::default();
        renderer.lock().device_motion = true;
        renderer
    }

    pub fn calls(&self) -> Vec<RendererCall> {
        self.lock().calls.clone()
    }

    pub fn configs(&self) -> Vec<RendererConfig> {
        self.lock().configs.clone()
    }

    pub fn last_config(&self) -> Option<RendererConfig> {
        self.lock().configs.last().copied()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RendererState> {
        self.state.lock().expect("lock simulated renderer state")
    }
}

impl Renderer for SimRenderer {
    fn start(&mut self) {
        self.lock().calls.push(RendererCall::Start);
    }

    fn pause(&mut self) {
        self.lock().calls.push(RendererCall::Pause);
    }

    fn stop(&mut self) {
        self.lock().calls.push(RendererCall::Stop);
    }

    fn load_video(&mut self) {
        self.lock().calls.push(RendererCall::LoadVideo);
    }

    fn configure(&mut self, config: RendererConfig) {
        self.lock().configs.push(config);
    }

    fn device_motion_available(&self) -> bool {
        self.lock().device_motion
    }
}
