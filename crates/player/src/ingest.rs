use crate::buffer::{Segment, SourcePipeline, StreamKind};
use crate::error::{PlayerError, Result};
use crate::media::{AppendSink, Transmuxer};
use tracing::{info, warn};

/// Per-stream segment counts of one completed ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub video_segments: u64,
    pub audio_segments: u64,
}

/// Drives the transmuxer over a raw transport-stream buffer and routes every
/// emitted segment into the pipeline, in emission order.
///
/// Sequence indices are assigned here, per stream, counting from zero. On
/// successful completion the pipeline is marked ended. When the producer
/// fails mid-stream, segments enqueued before the failure stay queued and
/// keep draining; the error propagates and no retry is attempted.
pub fn ingest<T, S>(
    transmuxer: &mut T,
    bytes: &[u8],
    pipeline: &mut SourcePipeline<S>,
) -> Result<IngestReport>
where
    T: Transmuxer,
    S: AppendSink,
{
    if pipeline.is_ended() {
        return Err(PlayerError::SourceEnded);
    }

    let mut report = IngestReport::default();
    let result = transmuxer.transmux(bytes, &mut |kind, payload| {
        let sequence = match kind {
            StreamKind::Video => {
                report.video_segments += 1;
                report.video_segments - 1
            }
            StreamKind::Audio => {
                report.audio_segments += 1;
                report.audio_segments - 1
            }
        };
        // The session cannot end while the producer is still running, so
        // this enqueue only fails on a routing defect.
        if let Err(error) = pipeline.enqueue(Segment {
            kind,
            sequence,
            payload,
        }) {
            warn!(%kind, sequence, %error, "segment dropped during ingest");
        }
    });

    match result {
        Ok(()) => {
            pipeline.mark_ended();
            info!(
                video_segments = report.video_segments,
                audio_segments = report.audio_segments,
                "ingest complete"
            );
            Ok(report)
        }
        Err(error) => {
            warn!(
                video_segments = report.video_segments,
                audio_segments = report.audio_segments,
                %error,
                "ingest failed mid-stream; queued segments keep draining"
            );
            Err(error)
        }
    }
}
