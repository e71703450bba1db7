//! Headless demo session: ingests a simulated transport stream, drains the
//! append pipeline and scripts a short control session, printing the render
//! models a UI shell would draw from.

use std::env;

use media_sim::{FramedTransmuxer, RecordingSink, SimMediaElement, SimRenderer, frame};
use player::{
    Command, MediaEvent, Player, PlayerError, PlayerOptions, SinkState, SourcePipeline,
    StreamKind, ingest,
};
use ui::app::{AppState, Message};

fn main() -> Result<(), PlayerError> {
    init_tracing();

    let options = options_from_args()?;
    run_buffering_demo()?;
    run_transport_demo(options)?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

/// Optional first argument: path to a JSON options document.
fn options_from_args() -> Result<PlayerOptions, PlayerError> {
    match env::args().nth(1) {
        Some(path) => PlayerOptions::load(path),
        None => Ok(PlayerOptions::default()),
    }
}

fn run_buffering_demo() -> Result<(), PlayerError> {
    let mut container = Vec::new();
    for index in 0u8..4 {
        container.extend(frame(StreamKind::Video, &[0x10 | index]));
        container.extend(frame(StreamKind::Audio, &[0x20 | index]));
    }

    let mut pipeline = SourcePipeline::new(RecordingSink::new(), RecordingSink::new());
    let report = ingest(&mut FramedTransmuxer, &container, &mut pipeline)?;
    println!(
        "ingested {} video and {} audio segments",
        report.video_segments, report.audio_segments
    );

    // Completion signals arrive one at a time per sink, like hardware
    // callbacks; each one triggers the next submit.
    while !pipeline.is_drained() {
        for kind in [StreamKind::Video, StreamKind::Audio] {
            if pipeline.appender(kind).sink_state() == SinkState::Appending {
                pipeline.appender_mut(kind).sink_mut().finish();
                pipeline.on_append_complete(kind);
            }
        }
    }
    for kind in [StreamKind::Video, StreamKind::Audio] {
        println!(
            "{kind} sink received {} appends",
            pipeline.appender(kind).sink().appended().len()
        );
    }
    Ok(())
}

fn run_transport_demo(options: PlayerOptions) -> Result<(), PlayerError> {
    let media = SimMediaElement::with_duration(120.0);
    let renderer = SimRenderer::with_device_motion();
    let mut player = Player::new(media.clone(), renderer, options.clone());
    let mut app = AppState::new(options);

    for event in player.initialize() {
        app.update(Message::Player(event));
    }
    feed_media_event(&mut player, &mut app, MediaEvent::ReadyToPlay)?;

    feed_command(&mut player, &mut app, Command::Play)?;
    media.advance(30.0);
    media.set_buffered_end(60.0);
    feed_command(&mut player, &mut app, Command::RefreshIndicators)?;
    print_state("after 30s of playback", &app);

    // Drag to the middle of the track and release.
    feed_command(&mut player, &mut app, Command::ScrubPress)?;
    feed_command(
        &mut player,
        &mut app,
        Command::ScrubMove {
            x_px: 150.0,
            width_px: 300.0,
        },
    )?;
    feed_command(&mut player, &mut app, Command::ScrubRelease)?;
    feed_command(&mut player, &mut app, Command::RefreshIndicators)?;
    print_state("after scrubbing to 50%", &app);

    feed_command(&mut player, &mut app, Command::SetVolume { volume: 0.4 })?;
    feed_media_event(&mut player, &mut app, MediaEvent::Ended)?;
    feed_command(&mut player, &mut app, Command::RefreshIndicators)?;
    print_state("after end of stream", &app);
    Ok(())
}

fn feed_command(
    player: &mut Player<SimMediaElement, SimRenderer>,
    app: &mut AppState,
    command: Command,
) -> Result<(), PlayerError> {
    for event in player.handle_command(command)? {
        app.update(Message::Player(event));
    }
    Ok(())
}

fn feed_media_event(
    player: &mut Player<SimMediaElement, SimRenderer>,
    app: &mut AppState,
    event: MediaEvent,
) -> Result<(), PlayerError> {
    for event in player.handle_media_event(event)? {
        app.update(Message::Player(event));
    }
    Ok(())
}

fn print_state(heading: &str, app: &AppState) {
    let track = app.track_render_model();
    let controls = app.controls_render_model();

    println!("-- {heading}");
    if track.visible {
        println!(
            "track: pointer {:.1}% played {:.1}% loaded {:.1}%",
            track.pointer_percent, track.played_percent, track.loaded_percent
        );
    }
    if let Some(label) = controls.time_label {
        println!("time: {label}");
    }
    println!("status: {}", app.status());
}
