use player::{PlayerError, Result, StreamKind, Transmuxer};

const KIND_VIDEO: u8 = 0;
const KIND_AUDIO: u8 = 1;
const HEADER_LEN: usize = 5;

/// Transmuxer over a simulated container of length-prefixed frames.
///
/// Frame layout: one kind byte (0 = video, 1 = audio), a little-endian
/// `u32` payload length, then the payload. Frames are emitted strictly in
/// container order. A malformed frame fails the run after everything before
/// it has already been emitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct FramedTransmuxer;

impl Transmuxer for FramedTransmuxer {
    fn transmux(
        &mut self,
        bytes: &[u8],
        emit: &mut dyn FnMut(StreamKind, Vec<u8>),
    ) -> Result<()> {
        let mut offset = 0usize;
        while offset < bytes.len() {
            let header = &bytes[offset..];
            if header.len() < HEADER_LEN {
                return Err(truncated(offset, "frame header"));
            }

            let kind = match header[0] {
                KIND_VIDEO => StreamKind::Video,
                KIND_AUDIO => StreamKind::Audio,
                other => {
                    return Err(PlayerError::Transmux {
                        reason: format!("unknown stream kind byte {other} at offset {offset}"),
                    });
                }
            };
            let len = u32::from_le_bytes([header[1], header[2], header[3], header[4]]) as usize;

            let start = offset + HEADER_LEN;
            let end = start + len;
            if end > bytes.len() {
                return Err(truncated(offset, "frame payload"));
            }

            emit(kind, bytes[start..end].to_vec());
            offset = end;
        }
        Ok(())
    }
}

fn truncated(offset: usize, what: &str) -> PlayerError {
    PlayerError::Transmux {
        reason: format!("truncated {what} at offset {offset}"),
    }
}

/// Encodes one frame of the simulated container.
///
/// # Example
/// ```
/// use media_sim::frame;
/// use player::StreamKind;
///
/// let bytes = frame(StreamKind::Audio, &[7, 7]);
/// assert_eq!(bytes, vec![1, 2, 0, 0, 0, 7, 7]);
/// ```
pub fn frame(kind: StreamKind, payload: &[u8]) -> Vec<u8> {
    let kind_byte = match kind {
        StreamKind::Video => KIND_VIDEO,
        StreamKind::Audio => KIND_AUDIO,
    };
    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.push(kind_byte);
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(payload);
    bytes
}
