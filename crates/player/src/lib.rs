//! Playback-control core for a panoramic/VR video player.

pub mod api;
pub mod buffer;
pub mod config;
pub mod error;
pub mod indicators;
pub mod ingest;
pub mod media;
pub mod scrub;
pub mod volume;

pub use api::{
    Command, Event, MediaEvent, PlaybackIntent, Player, PlayerErrorEvent, PlayerErrorKind,
};
pub use buffer::{BufferAppender, Segment, SegmentQueue, SinkState, SourcePipeline, StreamKind};
pub use config::PlayerOptions;
pub use error::{PlayerError, Result};
pub use indicators::Indicators;
pub use ingest::{IngestReport, ingest};
pub use media::{
    AppendSink, MediaElement, Renderer, RendererConfig, SwipeMode, Transmuxer, ViewMode,
};
pub use volume::VolumeLevel;
