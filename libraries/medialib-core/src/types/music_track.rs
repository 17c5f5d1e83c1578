//! Music track domain type

use crate::traits::Playable;

/// Standalone music track
///
/// Not a `MediaContent` and never stored in a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicTrack {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,
}

impl MusicTrack {
    /// Create a new music track
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl Playable for MusicTrack {
    fn play(&self) -> String {
        format!("Playing music: {} by {}", self.title, self.artist)
    }

    fn pause(&self) -> String {
        format!("Pausing music: {}", self.title)
    }

    fn stop(&self) -> String {
        format!("Stopping music: {}", self.title)
    }
}
