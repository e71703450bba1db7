//! In-memory stand-ins for the player's hardware collaborators, used by the
//! demo binary and the integration tests.

mod element;
mod renderer;
mod sink;
mod transmux;

pub use element::SimMediaElement;
pub use renderer::{RendererCall, SimRenderer};
pub use sink::RecordingSink;
pub use transmux::{FramedTransmuxer, frame};
