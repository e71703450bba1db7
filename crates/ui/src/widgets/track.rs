use player::{Command, Indicators, PlayerOptions};

/// Values needed to draw the progress track: pointer position, filled bar
/// and loaded bar, all in percent of the track width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRenderModel {
    pub visible: bool,
    pub pointer_percent: f32,
    pub played_percent: f32,
    pub loaded_percent: f32,
}

/// Pointer interaction emitted by the track widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackInteraction {
    Clicked { x_px: f32, width_px: f32 },
    Pressed,
    Moved { x_px: f32, width_px: f32 },
    Released,
}

/// Builds draw data for the track widget.
///
/// While a drag preview is active it drives both the pointer and the filled
/// bar; the loaded bar always comes from the indicators.
pub fn build_render_model(
    indicators: &Indicators,
    preview_progress: Option<f64>,
    options: &PlayerOptions,
) -> TrackRenderModel {
    let played = preview_progress.unwrap_or(indicators.played_fraction);
    let played_percent = to_percent(played);

    TrackRenderModel {
        visible: options.show_track,
        pointer_percent: played_percent,
        played_percent,
        loaded_percent: to_percent(indicators.loaded_fraction),
    }
}

/// Maps a track interaction onto the player command it stands for.
pub fn interaction_command(interaction: TrackInteraction) -> Command {
    match interaction {
        TrackInteraction::Clicked { x_px, width_px } => Command::TrackClick { x_px, width_px },
        TrackInteraction::Pressed => Command::ScrubPress,
        TrackInteraction::Moved { x_px, width_px } => Command::ScrubMove { x_px, width_px },
        TrackInteraction::Released => Command::ScrubRelease,
    }
}

fn to_percent(fraction: f64) -> f32 {
    (fraction.clamp(0.0, 1.0) * 100.0) as f32
}

#[cfg(test)]
mod tests {
    use player::{Command, Indicators, PlayerOptions};

    use super::{TrackInteraction, build_render_model, interaction_command};

    fn sample_indicators() -> Indicators {
        Indicators {
            loaded_fraction: 0.75,
            played_fraction: 0.25,
            current_label: String::from("00:30"),
            duration_label: String::from("02:00"),
        }
    }

    #[test]
    fn bars_follow_the_indicators_outside_a_drag() {
        let model =
            build_render_model(&sample_indicators(), None, &PlayerOptions::default());

        assert!(model.visible);
        assert_eq!(model.pointer_percent, 25.0);
        assert_eq!(model.played_percent, 25.0);
        assert_eq!(model.loaded_percent, 75.0);
    }

    #[test]
    fn drag_preview_overrides_pointer_and_filled_bar_only() {
        let model =
            build_render_model(&sample_indicators(), Some(0.6), &PlayerOptions::default());

        assert_eq!(model.pointer_percent, 60.0);
        assert_eq!(model.played_percent, 60.0);
        assert_eq!(model.loaded_percent, 75.0);
    }

    #[test]
    fn hidden_track_option_clears_the_visible_flag() {
        let options = PlayerOptions {
            show_track: false,
            ..PlayerOptions::default()
        };
        let model = build_render_model(&sample_indicators(), None, &options);
        assert!(!model.visible);
    }

    #[test]
    fn interactions_map_onto_their_player_commands() {
        assert_eq!(
            interaction_command(TrackInteraction::Clicked {
                x_px: 10.0,
                width_px: 40.0,
            }),
            Command::TrackClick {
                x_px: 10.0,
                width_px: 40.0,
            }
        );
        assert_eq!(
            interaction_command(TrackInteraction::Pressed),
            Command::ScrubPress
        );
        assert_eq!(
            interaction_command(TrackInteraction::Moved {
                x_px: 22.0,
                width_px: 40.0,
            }),
            Command::ScrubMove {
                x_px: 22.0,
                width_px: 40.0,
            }
        );
        assert_eq!(
            interaction_command(TrackInteraction::Released),
            Command::ScrubRelease
        );
    }
}
