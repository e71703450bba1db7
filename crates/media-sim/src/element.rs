use std::sync::{Arc, Mutex};

use player::MediaElement;

#[derive(Debug)]
struct ElementState {
    duration: Option<f64>,
    current_time: f64,
    volume: f64,
    muted: bool,
    looping: bool,
    autoplay: bool,
    buffered_end: Option<f64>,
    playing: bool,
    play_calls: u32,
    pause_calls: u32,
    load_calls: u32,
}

/// Media element with a manually advanced clock.
///
/// Clones share one underlying state, so a harness can keep a handle for
/// driving time and inspecting calls after moving another clone into the
/// player. Playback does not progress on its own; call
/// [`SimMediaElement::advance`] to move the clock.
#[derive(Debug, Clone)]
pub struct SimMediaElement {
    state: Arc<Mutex<ElementState>>,
}

impl SimMediaElement {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ElementState {
                duration: None,
                current_time: 0.0,
                volume: 1.0,
                muted: false,
                looping: false,
                autoplay: false,
                buffered_end: None,
                playing: false,
                play_calls: 0,
                pause_calls: 0,
                load_calls: 0,
            })),
        }
    }

    pub fn with_duration(seconds: f64) -> Self {
        let element = Self::new();
        element.lock().duration = Some(seconds);
        element
    }

    /// Moves the clock forward while "playing", clamped to the duration.
    pub fn advance(&self, seconds: f64) {
        let mut state = self.lock();
        if !state.playing {
            return;
        }
        let mut next = state.current_time + seconds;
        if let Some(duration) = state.duration {
            next = next.min(duration);
        }
        state.current_time = next;
    }

    pub fn set_buffered_end(&self, seconds: f64) {
        self.lock().buffered_end = Some(seconds);
    }

    pub fn is_hardware_playing(&self) -> bool {
        self.lock().playing
    }

    pub fn looping(&self) -> bool {
        self.lock().looping
    }

    pub fn autoplay(&self) -> bool {
        self.lock().autoplay
    }

    pub fn play_calls(&self) -> u32 {
        self.lock().play_calls
    }

    pub fn pause_calls(&self) -> u32 {
        self.lock().pause_calls
    }

    pub fn load_calls(&self) -> u32 {
        self.lock().load_calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ElementState> {
        self.state.lock().expect("lock simulated element state")
    }
}

impl Default for SimMediaElement {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaElement for SimMediaElement {
    fn play(&mut self) {
        let mut state = self.lock();
        state.play_calls += 1;
        state.playing = true;
    }

    fn pause(&mut self) {
        let mut state = self.lock();
        state.pause_calls += 1;
        state.playing = false;
    }

    fn load(&mut self) {
        let mut state = self.lock();
        state.load_calls += 1;
        state.current_time = 0.0;
    }

    fn current_time(&self) -> f64 {
        self.lock().current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.lock().current_time = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.lock().duration
    }

    fn volume(&self) -> f64 {
        self.lock().volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.lock().volume = volume;
    }

    fn muted(&self) -> bool {
        self.lock().muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.lock().muted = muted;
    }

    fn set_looping(&mut self, looping: bool) {
        self.lock().looping = looping;
    }

    fn set_autoplay(&mut self, autoplay: bool) {
        self.lock().autoplay = autoplay;
    }

    fn buffered_end(&self) -> Option<f64> {
        self.lock().buffered_end
    }
}
