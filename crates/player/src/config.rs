use std::fs;
use std::path::Path;

use crate::error::{PlayerError, Result};
use serde::{Deserialize, Serialize};

/// Options fixed at player construction.
///
/// Visibility flags only affect which controls a shell renders; the player
/// itself accepts every command regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerOptions {
    pub autoplay: bool,
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    pub show_track: bool,
    pub show_play_button: bool,
    pub show_volume_button: bool,
    pub show_swipe_button: bool,
    pub show_view_button: bool,
    pub show_time_label: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            loop_playback: false,
            show_track: true,
            show_play_button: true,
            show_volume_button: true,
            show_swipe_button: true,
            show_view_button: true,
            show_time_label: true,
        }
    }
}

impl PlayerOptions {
    /// Parses options from a JSON document; absent fields keep defaults.
    ///
    /// # Example
    /// ```
    /// use player::PlayerOptions;
    ///
    /// let options = PlayerOptions::from_json(r#"{"loop": true}"#)
    ///     .expect("valid document");
    /// assert!(options.loop_playback);
    /// assert!(!options.autoplay);
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses an options file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PlayerError::OptionsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}
