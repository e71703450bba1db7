use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Result type used by the player crate.
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Errors produced by player commands and the buffering pipeline.
#[derive(Debug)]
pub enum PlayerError {
    DeviceMotionUnavailable,
    SourceEnded,
    Transmux {
        reason: String,
    },
    OptionsIo {
        path: PathBuf,
        source: std::io::Error,
    },
    OptionsParse {
        source: serde_json::Error,
    },
}

impl Display for PlayerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeviceMotionUnavailable => {
                write!(f, "device motion input is not available on this device")
            }
            Self::SourceEnded => {
                write!(f, "source already signalled end of stream")
            }
            Self::Transmux { reason } => write!(f, "transmux failed: {reason}"),
            Self::OptionsIo { path, source } => {
                write!(f, "cannot read options file {} ({source})", path.display())
            }
            Self::OptionsParse { source } => {
                write!(f, "invalid options document ({source})")
            }
        }
    }
}

impl std::error::Error for PlayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OptionsIo { source, .. } => Some(source),
            Self::OptionsParse { source } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PlayerError {
    fn from(value: serde_json::Error) -> Self {
        Self::OptionsParse { source: value }
    }
}
