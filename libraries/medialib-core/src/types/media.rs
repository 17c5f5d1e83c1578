//! Media content domain types

use crate::error::{MediaError, Result};
use std::fmt;
use std::rc::Rc;

/// Shared handle to a media item
///
/// Playlists and libraries hold handles, never copies, so one item can sit
/// in several collections at once.
pub type MediaRef = Rc<MediaContent>;

/// Render the generic `Title: .., Duration: .. sec` line
///
/// Video descriptions start with this line. Audio descriptions do not use it.
pub fn describe_base(title: &str, duration: f32) -> String {
    format!("Title: {}, Duration: {:?} sec", title, duration)
}

fn validate_duration(title: &str, duration: f32) -> Result<f32> {
    if duration.is_finite() && duration >= 0.0 {
        // folds -0.0 into 0.0
        Ok(duration + 0.0)
    } else {
        Err(MediaError::invalid_duration(title, duration))
    }
}

/// Audio content
#[derive(Debug, Clone, PartialEq)]
pub struct AudioContent {
    title: String,

    /// Duration in seconds
    duration: f32,

    /// Free-form format label ("MP3", "FLAC", ...)
    audio_format: String,
}

impl AudioContent {
    /// Create audio content
    ///
    /// # Errors
    /// Returns `MediaError::InvalidDuration` if `duration` is negative or not finite
    pub fn new(
        title: impl Into<String>,
        duration: f32,
        audio_format: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into();
        let duration = validate_duration(&title, duration)?;

        Ok(Self {
            title,
            duration,
            audio_format: audio_format.into(),
        })
    }

    /// Audio title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Format label
    pub fn audio_format(&self) -> &str {
        &self.audio_format
    }

    /// Describe starting playback
    pub fn play(&self) -> String {
        format!("Playing audio: {} in format {}", self.title, self.audio_format)
    }

    /// Single combined line; replaces the generic description entirely
    pub fn describe(&self) -> String {
        format!(
            "Audio Title: {}, Duration: {:?} sec, Format: {}",
            self.title, self.duration, self.audio_format
        )
    }
}

/// Video content
#[derive(Debug, Clone, PartialEq)]
pub struct VideoContent {
    title: String,

    /// Duration in seconds
    duration: f32,

    /// Free-form resolution label ("1080p", "4K", ...)
    resolution: String,
}

impl VideoContent {
    /// Create video content
    ///
    /// # Errors
    /// Returns `MediaError::InvalidDuration` if `duration` is negative or not finite
    pub fn new(
        title: impl Into<String>,
        duration: f32,
        resolution: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into();
        let duration = validate_duration(&title, duration)?;

        Ok(Self {
            title,
            duration,
            resolution: resolution.into(),
        })
    }

    /// Video title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Resolution label
    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    /// Describe starting playback
    pub fn play(&self) -> String {
        format!("Playing video: {} in resolution {}", self.title, self.resolution)
    }

    /// Generic description followed by a resolution line
    pub fn describe(&self) -> String {
        format!(
            "{}\nResolution: {}",
            describe_base(&self.title, self.duration),
            self.resolution
        )
    }
}

/// Playable media item with a title and a duration
#[derive(Debug, Clone, PartialEq)]
pub enum MediaContent {
    /// Audio content
    Audio(AudioContent),
    /// Video content
    Video(VideoContent),
}

impl MediaContent {
    /// Create shared audio content
    pub fn audio(
        title: impl Into<String>,
        duration: f32,
        audio_format: impl Into<String>,
    ) -> Result<MediaRef> {
        AudioContent::new(title, duration, audio_format).map(|audio| Rc::new(audio.into()))
    }

    /// Create shared video content
    pub fn video(
        title: impl Into<String>,
        duration: f32,
        resolution: impl Into<String>,
    ) -> Result<MediaRef> {
        VideoContent::new(title, duration, resolution).map(|video| Rc::new(video.into()))
    }

    /// Title of the wrapped item
    pub fn title(&self) -> &str {
        match self {
            MediaContent::Audio(audio) => audio.title(),
            MediaContent::Video(video) => video.title(),
        }
    }

    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        match self {
            MediaContent::Audio(audio) => audio.duration(),
            MediaContent::Video(video) => video.duration(),
        }
    }

    /// Describe starting playback
    pub fn play(&self) -> String {
        match self {
            MediaContent::Audio(audio) => audio.play(),
            MediaContent::Video(video) => video.play(),
        }
    }

    /// Describe the item, one string per printed line joined with `\n`
    pub fn describe(&self) -> String {
        match self {
            MediaContent::Audio(audio) => audio.describe(),
            MediaContent::Video(video) => video.describe(),
        }
    }
}

impl From<AudioContent> for MediaContent {
    fn from(audio: AudioContent) -> Self {
        MediaContent::Audio(audio)
    }
}

impl From<VideoContent> for MediaContent {
    fn from(video: VideoContent) -> Self {
        MediaContent::Video(video)
    }
}

impl fmt::Display for MediaContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
