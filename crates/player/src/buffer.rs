use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

use crate::error::{PlayerError, Result};
use crate::media::AppendSink;
use tracing::debug;

/// Elementary stream a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Video,
    Audio,
}

impl Display for StreamKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

/// One demuxed unit of encoded media, immutable once enqueued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: StreamKind,
    /// Position in the production order of its stream, assigned at ingest.
    pub sequence: u64,
    pub payload: Vec<u8>,
}

/// State of the append target as tracked by its appender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    Idle,
    Appending,
}

/// FIFO of segments awaiting append. Never reorders.
#[derive(Debug, Default)]
pub struct SegmentQueue {
    segments: VecDeque<Segment>,
}

impl SegmentQueue {
    pub fn push_back(&mut self, segment: Segment) {
        self.segments.push_back(segment);
    }

    pub fn pop_front(&mut self) -> Option<Segment> {
        self.segments.pop_front()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Drains one segment queue into one append sink.
///
/// At most one append is in flight at any time. The completion signal
/// (`on_append_complete`) is the only trigger for a follow-on submit; when
/// the queue runs dry the appender waits and resumes on the next enqueue.
#[derive(Debug)]
pub struct BufferAppender<S> {
    kind: StreamKind,
    sink: S,
    queue: SegmentQueue,
    sink_state: SinkState,
}

impl<S> BufferAppender<S>
where
    S: AppendSink,
{
    pub fn new(kind: StreamKind, sink: S) -> Self {
        Self {
            kind,
            sink,
            queue: SegmentQueue::default(),
            sink_state: SinkState::Idle,
        }
    }

    /// Appends one segment to the tail and pumps the sink when it is idle.
    pub fn enqueue(&mut self, segment: Segment) {
        debug_assert_eq!(segment.kind, self.kind, "segment routed to wrong stream");
        self.queue.push_back(segment);
        self.pump();
    }

    /// Delivers the sink's completion signal and submits the next segment.
    pub fn on_append_complete(&mut self) {
        assert_eq!(
            self.sink_state,
            SinkState::Appending,
            "append completion signalled while {} sink is idle",
            self.kind
        );
        self.sink_state = SinkState::Idle;
        self.pump();
    }

    pub fn sink_state(&self) -> SinkState {
        self.sink_state
    }

    /// Number of segments still waiting in the queue.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// True once the queue is empty and no append is in flight.
    pub fn is_drained(&self) -> bool {
        self.queue.is_empty() && self.sink_state == SinkState::Idle
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn pump(&mut self) {
        if self.sink_state != SinkState::Idle {
            return;
        }
        let Some(segment) = self.queue.pop_front() else {
            return;
        };

        debug!(
            kind = %self.kind,
            sequence = segment.sequence,
            bytes = segment.payload.len(),
            waiting = self.queue.len(),
            "segment submitted"
        );
        self.sink.append(&segment.payload);
        self.sink_state = SinkState::Appending;
    }
}

/// The two per-stream appenders of one ingestion session.
///
/// A new pipeline wholly replaces the previous session's queue state; the
/// two streams drain independently, each at its sink's pace.
#[derive(Debug)]
pub struct SourcePipeline<S> {
    video: BufferAppender<S>,
    audio: BufferAppender<S>,
    ended: bool,
}

impl<S> SourcePipeline<S>
where
    S: AppendSink,
{
    pub fn new(video_sink: S, audio_sink: S) -> Self {
        Self {
            video: BufferAppender::new(StreamKind::Video, video_sink),
            audio: BufferAppender::new(StreamKind::Audio, audio_sink),
            ended: false,
        }
    }

    /// Routes one segment to the appender of its stream.
    ///
    /// Fails once the session's completion has been signalled.
    pub fn enqueue(&mut self, segment: Segment) -> Result<()> {
        if self.ended {
            return Err(PlayerError::SourceEnded);
        }
        self.appender_mut(segment.kind).enqueue(segment);
        Ok(())
    }

    /// Marks the ingestion session complete; later enqueues are rejected.
    pub fn mark_ended(&mut self) {
        self.ended = true;
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn on_append_complete(&mut self, kind: StreamKind) {
        self.appender_mut(kind).on_append_complete();
    }

    pub fn appender(&self, kind: StreamKind) -> &BufferAppender<S> {
        match kind {
            StreamKind::Video => &self.video,
            StreamKind::Audio => &self.audio,
        }
    }

    pub fn appender_mut(&mut self, kind: StreamKind) -> &mut BufferAppender<S> {
        match kind {
            StreamKind::Video => &mut self.video,
            StreamKind::Audio => &mut self.audio,
        }
    }

    /// True once both streams are fully appended.
    pub fn is_drained(&self) -> bool {
        self.video.is_drained() && self.audio.is_drained()
    }
}
