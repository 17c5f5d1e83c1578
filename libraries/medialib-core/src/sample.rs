//! Sample data used by the showcase and library programs

use crate::error::Result;
use crate::types::{MediaContent, MediaRef, MusicTrack};

/// The audio and video items exercised by the showcase
pub fn showcase_media() -> Result<[MediaRef; 2]> {
    Ok([
        MediaContent::audio("Classical Music", 300.0, "MP3")?,
        MediaContent::video("Nature Documentary", 1200.0, "1080p")?,
    ])
}

/// The track used to demonstrate `Playable`
pub fn showcase_track() -> MusicTrack {
    MusicTrack::new("Shape of You", "Ed Sheeran")
}

/// Four mixed items for the library program
///
/// "Morning Jazz" and "Ocean Life" share a duration, so sorting shows stability.
pub fn library_media() -> Result<Vec<MediaRef>> {
    Ok(vec![
        MediaContent::audio("Morning Jazz", 245.0, "FLAC")?,
        MediaContent::video("City Timelapse", 90.0, "4K")?,
        MediaContent::audio("Evening Podcast", 1800.0, "AAC")?,
        MediaContent::video("Ocean Life", 245.0, "720p")?,
    ])
}
