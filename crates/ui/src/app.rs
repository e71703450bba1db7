use player::{
    Command, Event, Indicators, PlaybackIntent, PlayerOptions, SwipeMode, ViewMode, VolumeLevel,
};

use crate::widgets::controls::{self, ControlsRenderModel};
use crate::widgets::track::{self, TrackInteraction, TrackRenderModel};

/// UI message consumed by update.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Player(Event),
    Track(TrackInteraction),
    PlayClicked,
    VolumeClicked,
    SwipeClicked,
    ViewClicked,
    Tick,
}

/// Shell state derived from player events; never a source of truth.
#[derive(Debug, Clone)]
pub struct AppState {
    options: PlayerOptions,
    intent: PlaybackIntent,
    volume_level: VolumeLevel,
    swipe_mode: SwipeMode,
    view_mode: ViewMode,
    indicators: Indicators,
    preview_progress: Option<f64>,
    status: String,
}

impl AppState {
    pub fn new(options: PlayerOptions) -> Self {
        Self {
            options,
            intent: PlaybackIntent::Paused,
            volume_level: VolumeLevel::High,
            swipe_mode: SwipeMode::Touch,
            view_mode: ViewMode::FullMotion,
            indicators: Indicators::default(),
            preview_progress: None,
            status: String::from("idle"),
        }
    }

    /// Applies one UI message and returns outgoing player commands.
    pub fn update(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::Player(event) => {
                self.apply_player_event(event);
                Vec::new()
            }
            Message::Track(interaction) => vec![track::interaction_command(interaction)],
            Message::PlayClicked => vec![Command::TogglePlay],
            Message::VolumeClicked => vec![Command::ToggleMute],
            Message::SwipeClicked => vec![Command::ToggleSwipeMode],
            Message::ViewClicked => vec![Command::ToggleViewMode],
            Message::Tick => vec![Command::RefreshIndicators],
        }
    }

    /// Returns render data for the progress track.
    pub fn track_render_model(&self) -> TrackRenderModel {
        track::build_render_model(&self.indicators, self.preview_progress, &self.options)
    }

    /// Returns render data for the button row.
    pub fn controls_render_model(&self) -> ControlsRenderModel {
        controls::build_render_model(
            self.intent,
            self.volume_level,
            self.swipe_mode,
            self.view_mode,
            &self.indicators,
            &self.options,
        )
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn intent(&self) -> PlaybackIntent {
        self.intent
    }

    fn apply_player_event(&mut self, event: Event) {
        match event {
            Event::IntentChanged(intent) => {
                self.intent = intent;
                self.status = format!("playback {intent}");
            }
            Event::ScrubPreview { progress } => {
                self.preview_progress = Some(progress);
            }
            Event::Sought { progress } => {
                self.preview_progress = None;
                self.status = format!("sought to {:.0}%", progress * 100.0);
            }
            Event::VolumeLevelChanged(level) => {
                self.volume_level = level;
            }
            Event::SwipeModeChanged(mode) => {
                self.swipe_mode = mode;
            }
            Event::ViewModeChanged(mode) => {
                self.view_mode = mode;
            }
            Event::IndicatorsRefreshed(indicators) => {
                self.indicators = indicators;
            }
            Event::Error(error) => {
                self.status = format!("error: {}", error.message);
            }
        }
    }
}
