use player::AppendSink;

/// Append sink that stores payloads and stays busy until `finish`.
///
/// The busy flag models the hardware's asynchronous append window; the
/// harness calls [`RecordingSink::finish`] and then delivers the completion
/// signal to the owning appender.
#[derive(Debug, Default)]
pub struct RecordingSink {
    appended: Vec<Vec<u8>>,
    busy: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appended(&self) -> &[Vec<u8>] {
        &self.appended
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Ends the in-flight append.
    pub fn finish(&mut self) {
        assert!(self.busy, "finish called with no append in flight");
        self.busy = false;
    }
}

impl AppendSink for RecordingSink {
    fn append(&mut self, payload: &[u8]) {
        assert!(
            !self.busy,
            "append received while the previous one is still in flight"
        );
        self.appended.push(payload.to_vec());
        self.busy = true;
    }
}
