use std::fmt::{Display, Formatter};

use crate::config::PlayerOptions;
use crate::error::{PlayerError, Result};
use crate::indicators::{self, Indicators};
use crate::media::{MediaElement, Renderer, RendererConfig, SwipeMode, ViewMode};
use crate::scrub::{self, ScrubController};
use crate::volume::VolumeLevel;
use tracing::{debug, info, warn};

/// Logical playback state the user asked for.
///
/// Single source of truth; the hardware `paused` flag may lag behind it and
/// is never read back into control logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackIntent {
    Playing,
    Paused,
}

impl Display for PlaybackIntent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Paused => write!(f, "paused"),
        }
    }
}

/// Commands accepted by the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Stop,
    TogglePlay,
    /// Commits a seek to `progress` of the duration.
    SeekTo {
        progress: f64,
    },
    /// Single click on the progress track; ignored while a drag is active.
    TrackClick {
        x_px: f32,
        width_px: f32,
    },
    ScrubPress,
    ScrubMove {
        x_px: f32,
        width_px: f32,
    },
    ScrubRelease,
    SetVolume {
        volume: f64,
    },
    ToggleMute,
    SetSwipeMode {
        mode: SwipeMode,
    },
    ToggleSwipeMode,
    SetViewMode {
        mode: ViewMode,
    },
    ToggleViewMode,
    RefreshIndicators,
}

/// Asynchronous notifications from the hardware media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    ReadyToPlay,
    Ended,
    VolumeChanged,
}

/// Events emitted by the player for the UI shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    IntentChanged(PlaybackIntent),
    /// Visual-only drag position; the hardware has not been seeked.
    ScrubPreview { progress: f64 },
    Sought { progress: f64 },
    VolumeLevelChanged(VolumeLevel),
    SwipeModeChanged(SwipeMode),
    ViewModeChanged(ViewMode),
    IndicatorsRefreshed(Indicators),
    Error(PlayerErrorEvent),
}

/// User-facing error payload emitted as an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerErrorKind {
    DeviceMotionUnavailable,
    SourceEnded,
    Other,
}

impl From<&PlayerError> for PlayerErrorKind {
    fn from(value: &PlayerError) -> Self {
        match value {
            PlayerError::DeviceMotionUnavailable => Self::DeviceMotionUnavailable,
            PlayerError::SourceEnded => Self::SourceEnded,
            _ => Self::Other,
        }
    }
}

/// User-facing error payload emitted as an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerErrorEvent {
    pub kind: PlayerErrorKind,
    pub message: String,
}

impl PlayerErrorEvent {
    pub fn from_error(error: &PlayerError) -> Self {
        Self {
            kind: PlayerErrorKind::from(error),
            message: error.to_string(),
        }
    }
}

/// Playback state machine over one media element and one renderer.
///
/// All transitions are synchronous with the triggering command or media
/// event; the renderer lifecycle is driven strictly in lockstep with the
/// intent and never changes it on its own.
#[derive(Debug)]
pub struct Player<M, R> {
    media: M,
    renderer: R,
    options: PlayerOptions,
    intent: PlaybackIntent,
    scrub: ScrubController,
    swipe_mode: SwipeMode,
    view_mode: ViewMode,
}

impl<M, R> Player<M, R>
where
    M: MediaElement,
    R: Renderer,
{
    /// Creates a paused player; call [`Player::initialize`] once the shell
    /// has attached a source.
    pub fn new(media: M, renderer: R, options: PlayerOptions) -> Self {
        Self {
            media,
            renderer,
            options,
            intent: PlaybackIntent::Paused,
            scrub: ScrubController::default(),
            swipe_mode: SwipeMode::Touch,
            view_mode: ViewMode::FullMotion,
        }
    }

    /// Applies static hardware flags, configures the renderer, loads the
    /// source and runs the decoder warm-up.
    ///
    /// The warm-up issues play-then-pause because some decoders only surface
    /// the first frame after a play request, even when playback should start
    /// paused.
    pub fn initialize(&mut self) -> Vec<Event> {
        self.media.set_looping(self.options.loop_playback);
        self.media.set_autoplay(self.options.autoplay);
        self.renderer.configure(self.renderer_config());
        self.media.load();

        let mut events = vec![self.apply_play(), self.apply_pause()];
        if self.options.autoplay {
            events.push(self.apply_play());
        }
        info!(
            autoplay = self.options.autoplay,
            looping = self.options.loop_playback,
            "player initialized"
        );
        events
    }

    /// Applies one command and returns emitted events.
    pub fn handle_command(&mut self, command: Command) -> Result<Vec<Event>> {
        match command {
            Command::Play => Ok(vec![self.apply_play()]),
            Command::Pause => Ok(vec![self.apply_pause()]),
            Command::Stop => Ok(vec![self.apply_stop()]),
            Command::TogglePlay => {
                if self.is_playing() {
                    Ok(vec![self.apply_pause()])
                } else {
                    Ok(vec![self.apply_play()])
                }
            }
            Command::SeekTo { progress } => Ok(self.seek_to(progress)),
            Command::TrackClick { x_px, width_px } => {
                if self.scrub.is_dragging() {
                    debug!("track click ignored while dragging");
                    Ok(Vec::new())
                } else {
                    Ok(self.seek_to(scrub::progress_at_x(x_px, width_px)))
                }
            }
            Command::ScrubPress => Ok(self.begin_scrub()),
            Command::ScrubMove { x_px, width_px } => {
                match self.scrub.update(x_px, width_px) {
                    Some(progress) => Ok(vec![Event::ScrubPreview { progress }]),
                    None => Ok(Vec::new()),
                }
            }
            Command::ScrubRelease => Ok(self.finish_scrub()),
            Command::SetVolume { volume } => Ok(vec![self.apply_set_volume(volume)]),
            Command::ToggleMute => {
                let muted = !self.media.muted();
                self.media.set_muted(muted);
                Ok(vec![self.volume_event()])
            }
            Command::SetSwipeMode { mode } => self.set_swipe_mode(mode),
            Command::ToggleSwipeMode => {
                let next = match self.swipe_mode {
                    SwipeMode::Touch => SwipeMode::DeviceMotion,
                    SwipeMode::DeviceMotion => SwipeMode::Touch,
                };
                self.set_swipe_mode(next)
            }
            Command::SetViewMode { mode } => Ok(self.set_view_mode(mode)),
            Command::ToggleViewMode => {
                let next = match self.view_mode {
                    ViewMode::FullMotion => ViewMode::VirtualReality,
                    ViewMode::VirtualReality => ViewMode::FullMotion,
                };
                Ok(self.set_view_mode(next))
            }
            Command::RefreshIndicators => {
                Ok(vec![Event::IndicatorsRefreshed(self.refresh_indicators())])
            }
        }
    }

    /// Applies one hardware media event and returns emitted events.
    pub fn handle_media_event(&mut self, event: MediaEvent) -> Result<Vec<Event>> {
        match event {
            MediaEvent::ReadyToPlay => Ok(self.handle_ready()),
            MediaEvent::Ended => Ok(self.handle_ended()),
            MediaEvent::VolumeChanged => Ok(vec![self.volume_event()]),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.intent == PlaybackIntent::Playing
    }

    pub fn intent(&self) -> PlaybackIntent {
        self.intent
    }

    pub fn swipe_mode(&self) -> SwipeMode {
        self.swipe_mode
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    /// Samples position, buffer level and duration for the UI.
    pub fn refresh_indicators(&self) -> Indicators {
        indicators::build(
            self.media.current_time(),
            self.media.duration(),
            self.media.buffered_end(),
        )
    }

    fn apply_play(&mut self) -> Event {
        self.intent = PlaybackIntent::Playing;
        self.renderer.start();
        self.media.play();
        Event::IntentChanged(PlaybackIntent::Playing)
    }

    fn apply_pause(&mut self) -> Event {
        self.intent = PlaybackIntent::Paused;
        self.renderer.pause();
        self.media.pause();
        Event::IntentChanged(PlaybackIntent::Paused)
    }

    fn apply_stop(&mut self) -> Event {
        self.renderer.stop();
        self.apply_pause()
    }

    fn begin_scrub(&mut self) -> Vec<Event> {
        if self.scrub.is_dragging() {
            return Vec::new();
        }
        let pre_drag_intent = self.intent;
        let seed = self.played_fraction();
        let stopped = self.apply_stop();
        self.scrub.begin(pre_drag_intent, seed);
        debug!(%pre_drag_intent, seed_progress = seed, "scrub drag started");
        vec![stopped]
    }

    fn finish_scrub(&mut self) -> Vec<Event> {
        let Some(session) = self.scrub.finish() else {
            return Vec::new();
        };

        let mut events = self.seek_to(session.progress);
        events.push(self.apply_play());
        if session.pre_drag_intent == PlaybackIntent::Paused {
            events.push(self.apply_pause());
        }
        debug!(
            progress = session.progress,
            restored_intent = %self.intent,
            "scrub drag released"
        );
        events
    }

    /// Commits progress to the hardware: target time is
    /// `floor(duration × progress)`. A guarded no-op while the duration is
    /// unknown, zero or non-finite.
    fn seek_to(&mut self, progress: f64) -> Vec<Event> {
        if !progress.is_finite() {
            warn!("seek ignored: non-finite progress");
            return Vec::new();
        }
        let clamped = progress.clamp(0.0, 1.0);
        let Some(duration) = self.valid_duration() else {
            warn!(progress = clamped, "seek ignored: duration unavailable");
            return Vec::new();
        };

        let target_seconds = (duration * clamped).floor();
        self.media.set_current_time(target_seconds);
        debug!(progress = clamped, target_seconds, "seek committed");
        vec![Event::Sought { progress: clamped }]
    }

    fn handle_ready(&mut self) -> Vec<Event> {
        self.renderer.load_video();

        // Warm-up must not change the net intent: sample, force play,
        // restore pause when the sampled intent was paused.
        let prior = self.intent;
        let mut events = vec![self.apply_play()];
        if prior == PlaybackIntent::Paused {
            events.push(self.apply_pause());
        }
        debug!(intent = %self.intent, "readiness warm-up finished");
        events
    }

    fn handle_ended(&mut self) -> Vec<Event> {
        let mut events = self.seek_to(0.0);
        events.push(self.apply_pause());
        info!("playback ended; position reset to start");
        events
    }

    fn apply_set_volume(&mut self, volume: f64) -> Event {
        let clamped = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.media.set_volume(clamped);
        self.volume_event()
    }

    fn volume_event(&self) -> Event {
        Event::VolumeLevelChanged(VolumeLevel::classify(
            self.media.volume(),
            self.media.muted(),
        ))
    }

    fn set_swipe_mode(&mut self, mode: SwipeMode) -> Result<Vec<Event>> {
        if mode == SwipeMode::DeviceMotion && !self.renderer.device_motion_available() {
            return Err(PlayerError::DeviceMotionUnavailable);
        }
        self.swipe_mode = mode;
        self.renderer.configure(self.renderer_config());
        Ok(vec![Event::SwipeModeChanged(mode)])
    }

    fn set_view_mode(&mut self, mode: ViewMode) -> Vec<Event> {
        self.view_mode = mode;
        self.renderer.configure(self.renderer_config());
        vec![Event::ViewModeChanged(mode)]
    }

    fn renderer_config(&self) -> RendererConfig {
        RendererConfig {
            swipe: self.swipe_mode,
            view: self.view_mode,
        }
    }

    fn played_fraction(&self) -> f64 {
        let Some(duration) = self.valid_duration() else {
            return 0.0;
        };
        (self.media.current_time() / duration).clamp(0.0, 1.0)
    }

    fn valid_duration(&self) -> Option<f64> {
        self.media
            .duration()
            .filter(|value| value.is_finite() && *value > 0.0)
    }
}
