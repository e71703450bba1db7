//! Drives the buffering pipeline end to end against the simulated backend:
//! raw container bytes in, ordered sink appends out.

use media_sim::{FramedTransmuxer, RecordingSink, frame};
use player::{PlayerError, SinkState, SourcePipeline, StreamKind, ingest};

fn demo_container() -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend(frame(StreamKind::Video, b"v0"));
    bytes.extend(frame(StreamKind::Audio, b"a0"));
    bytes.extend(frame(StreamKind::Video, b"v1"));
    bytes.extend(frame(StreamKind::Video, b"v2"));
    bytes.extend(frame(StreamKind::Audio, b"a1"));
    bytes
}

/// Finishes one in-flight append per busy stream, like hardware completion
/// callbacks arriving one at a time.
fn drive_completions(pipeline: &mut SourcePipeline<RecordingSink>) {
    while !pipeline.is_drained() {
        for kind in [StreamKind::Video, StreamKind::Audio] {
            if pipeline.appender(kind).sink_state() == SinkState::Appending {
                pipeline.appender_mut(kind).sink_mut().finish();
                pipeline.on_append_complete(kind);
            }
        }
    }
}

#[test]
fn container_bytes_reach_both_sinks_in_production_order() {
    let mut pipeline = SourcePipeline::new(RecordingSink::new(), RecordingSink::new());

    let report = ingest(&mut FramedTransmuxer, &demo_container(), &mut pipeline)
        .expect("ingest should succeed");
    assert_eq!(report.video_segments, 3);
    assert_eq!(report.audio_segments, 2);
    assert!(pipeline.is_ended());

    drive_completions(&mut pipeline);

    assert_eq!(
        pipeline.appender(StreamKind::Video).sink().appended(),
        [b"v0".to_vec(), b"v1".to_vec(), b"v2".to_vec()]
    );
    assert_eq!(
        pipeline.appender(StreamKind::Audio).sink().appended(),
        [b"a0".to_vec(), b"a1".to_vec()]
    );
}

#[test]
fn one_stream_can_run_ahead_while_the_other_stalls() {
    let mut pipeline = SourcePipeline::new(RecordingSink::new(), RecordingSink::new());
    ingest(&mut FramedTransmuxer, &demo_container(), &mut pipeline)
        .expect("ingest should succeed");

    // Only audio completions arrive; video stays stalled on its first append.
    while !pipeline.appender(StreamKind::Audio).is_drained() {
        pipeline
            .appender_mut(StreamKind::Audio)
            .sink_mut()
            .finish();
        pipeline.on_append_complete(StreamKind::Audio);
    }

    assert_eq!(pipeline.appender(StreamKind::Audio).sink().appended().len(), 2);
    assert_eq!(pipeline.appender(StreamKind::Video).sink().appended().len(), 1);
    assert_eq!(
        pipeline.appender(StreamKind::Video).sink_state(),
        SinkState::Appending
    );
}

#[test]
fn a_new_session_starts_from_empty_queues() {
    let mut pipeline = SourcePipeline::new(RecordingSink::new(), RecordingSink::new());
    ingest(&mut FramedTransmuxer, &demo_container(), &mut pipeline)
        .expect("ingest should succeed");
    drive_completions(&mut pipeline);

    // Replacing the source means replacing the whole pipeline.
    let mut pipeline = SourcePipeline::new(RecordingSink::new(), RecordingSink::new());
    let report = ingest(
        &mut FramedTransmuxer,
        &frame(StreamKind::Video, b"fresh"),
        &mut pipeline,
    )
    .expect("ingest should succeed");

    assert_eq!(report.video_segments, 1);
    assert_eq!(report.audio_segments, 0);
    drive_completions(&mut pipeline);
    assert_eq!(
        pipeline.appender(StreamKind::Video).sink().appended(),
        [b"fresh".to_vec()]
    );
}

#[test]
fn truncated_container_keeps_the_prefix_draining() {
    let mut bytes = demo_container();
    bytes.extend([0u8, 255, 255, 0, 0]); // video frame header promising far more payload

    let mut pipeline = SourcePipeline::new(RecordingSink::new(), RecordingSink::new());
    let result = ingest(&mut FramedTransmuxer, &bytes, &mut pipeline);

    assert!(matches!(result, Err(PlayerError::Transmux { .. })));
    assert!(!pipeline.is_ended());

    drive_completions(&mut pipeline);
    assert_eq!(pipeline.appender(StreamKind::Video).sink().appended().len(), 3);
    assert_eq!(pipeline.appender(StreamKind::Audio).sink().appended().len(), 2);
}

#[test]
fn ingest_after_completion_is_rejected() {
    let mut pipeline = SourcePipeline::new(RecordingSink::new(), RecordingSink::new());
    ingest(&mut FramedTransmuxer, &demo_container(), &mut pipeline)
        .expect("ingest should succeed");

    let result = ingest(
        &mut FramedTransmuxer,
        &frame(StreamKind::Audio, b"late"),
        &mut pipeline,
    );
    assert!(matches!(result, Err(PlayerError::SourceEnded)));
}
