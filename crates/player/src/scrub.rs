use crate::api::PlaybackIntent;

/// One press-to-release drag over the progress track.
///
/// `pre_drag_intent` records whether playback was active before the press,
/// so release can restore exactly that intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubSession {
    pub progress: f64,
    pub pre_drag_intent: PlaybackIntent,
}

/// Tracks the active drag session, if any.
///
/// While a session exists the generic click-seek path is suppressed; drag
/// moves update only the session's progress (presentation), never the
/// hardware position. Only release consumes the session.
#[derive(Debug, Default)]
pub struct ScrubController {
    session: Option<ScrubSession>,
}

impl ScrubController {
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a session; a press during an active session keeps the original
    /// captured intent (the renderer was already stopped by then).
    pub fn begin(&mut self, pre_drag_intent: PlaybackIntent, seed_progress: f64) {
        if self.session.is_some() {
            return;
        }
        self.session = Some(ScrubSession {
            progress: seed_progress.clamp(0.0, 1.0),
            pre_drag_intent,
        });
    }

    /// Folds one pointer sample into the session.
    ///
    /// Returns the updated progress for preview rendering, or `None` when no
    /// drag is active (stray move events are ignored).
    pub fn update(&mut self, x_px: f32, width_px: f32) -> Option<f64> {
        let session = self.session.as_mut()?;
        session.progress = progress_at_x(x_px, width_px);
        Some(session.progress)
    }

    /// Closes the session, handing back its final progress and saved intent.
    pub fn finish(&mut self) -> Option<ScrubSession> {
        self.session.take()
    }
}

/// Maps a pointer X offset within the track into progress.
///
/// Overshoot past either end clamps to the closed interval `[0, 1]`; a
/// degenerate track width maps everything to the start.
///
/// # Example
/// ```
/// use player::scrub::progress_at_x;
///
/// assert_eq!(progress_at_x(50.0, 200.0), 0.25);
/// assert_eq!(progress_at_x(-30.0, 200.0), 0.0);
/// assert_eq!(progress_at_x(260.0, 200.0), 1.0);
/// ```
pub fn progress_at_x(x_px: f32, width_px: f32) -> f64 {
    if width_px <= 0.0 {
        return 0.0;
    }
    (f64::from(x_px) / f64::from(width_px)).clamp(0.0, 1.0)
}
