use player::{Indicators, PlaybackIntent, PlayerOptions, SwipeMode, ViewMode, VolumeLevel};

/// Glyph shown on the play/pause button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayGlyph {
    Play,
    Pause,
}

/// Values needed to draw the button row. `None` means the control is hidden
/// by the player options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsRenderModel {
    pub play_glyph: Option<PlayGlyph>,
    pub volume_glyph_index: Option<u8>,
    pub swipe_caption: Option<&'static str>,
    pub view_caption: Option<&'static str>,
    pub time_label: Option<String>,
}

/// Builds draw data for the button row from the current player state.
pub fn build_render_model(
    intent: PlaybackIntent,
    volume_level: VolumeLevel,
    swipe_mode: SwipeMode,
    view_mode: ViewMode,
    indicators: &Indicators,
    options: &PlayerOptions,
) -> ControlsRenderModel {
    let play_glyph = match intent {
        PlaybackIntent::Playing => PlayGlyph::Pause,
        PlaybackIntent::Paused => PlayGlyph::Play,
    };
    let swipe_caption = match swipe_mode {
        SwipeMode::Touch => "touch",
        SwipeMode::DeviceMotion => "motion",
    };
    let view_caption = match view_mode {
        ViewMode::FullMotion => "fm",
        ViewMode::VirtualReality => "vr",
    };

    ControlsRenderModel {
        play_glyph: options.show_play_button.then_some(play_glyph),
        volume_glyph_index: options
            .show_volume_button
            .then_some(volume_level.glyph_index()),
        swipe_caption: options.show_swipe_button.then_some(swipe_caption),
        view_caption: options.show_view_button.then_some(view_caption),
        time_label: options.show_time_label.then(|| {
            format!(
                "{}/{}",
                indicators.current_label, indicators.duration_label
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use player::{Indicators, PlaybackIntent, PlayerOptions, SwipeMode, ViewMode, VolumeLevel};

    use super::{PlayGlyph, build_render_model};

    fn sample_indicators() -> Indicators {
        Indicators {
            loaded_fraction: 0.5,
            played_fraction: 0.25,
            current_label: String::from("00:30"),
            duration_label: String::from("02:00"),
        }
    }

    #[test]
    fn playing_intent_offers_the_pause_glyph() {
        let model = build_render_model(
            PlaybackIntent::Playing,
            VolumeLevel::High,
            SwipeMode::Touch,
            ViewMode::FullMotion,
            &sample_indicators(),
            &PlayerOptions::default(),
        );

        assert_eq!(model.play_glyph, Some(PlayGlyph::Pause));
        assert_eq!(model.volume_glyph_index, Some(3));
        assert_eq!(model.swipe_caption, Some("touch"));
        assert_eq!(model.view_caption, Some("fm"));
        assert_eq!(model.time_label.as_deref(), Some("00:30/02:00"));
    }

    #[test]
    fn hidden_controls_render_as_none() {
        let options = PlayerOptions {
            show_play_button: false,
            show_volume_button: false,
            show_swipe_button: false,
            show_view_button: false,
            show_time_label: false,
            ..PlayerOptions::default()
        };

        let model = build_render_model(
            PlaybackIntent::Paused,
            VolumeLevel::Muted,
            SwipeMode::DeviceMotion,
            ViewMode::VirtualReality,
            &sample_indicators(),
            &options,
        );

        assert_eq!(model.play_glyph, None);
        assert_eq!(model.volume_glyph_index, None);
        assert_eq!(model.swipe_caption, None);
        assert_eq!(model.view_caption, None);
        assert_eq!(model.time_label, None);
    }

    #[test]
    fn mode_captions_follow_the_active_modes() {
        let model = build_render_model(
            PlaybackIntent::Paused,
            VolumeLevel::Muted,
            SwipeMode::DeviceMotion,
            ViewMode::VirtualReality,
            &sample_indicators(),
            &PlayerOptions::default(),
        );

        assert_eq!(model.play_glyph, Some(PlayGlyph::Play));
        assert_eq!(model.volume_glyph_index, Some(0));
        assert_eq!(model.swipe_caption, Some("motion"));
        assert_eq!(model.view_caption, Some("vr"));
    }
}
